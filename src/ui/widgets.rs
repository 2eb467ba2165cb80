// src/ui/widgets.rs

use std::hash::{Hash, Hasher};

use accord_studio_lib::data_uri;
use eframe::egui::{self, Color32, RichText};

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(16.0));
    ui.add_space(8.0);
}

/// Field label with the red required marker.
pub fn required_label(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.label(text);
        ui.label(RichText::new("*").color(Color32::from_rgb(239, 68, 68)));
    });
}

/// Label + single-line edit over a scratch buffer. Returns true when the
/// user changed the value this frame.
pub fn required_text_field(
    ui: &mut egui::Ui,
    label: &str,
    buf: &mut String,
    hint: &str,
) -> bool {
    required_label(ui, label);
    let changed = ui
        .add(
            egui::TextEdit::singleline(buf)
                .desired_width(f32::INFINITY)
                .hint_text(hint),
        )
        .changed();
    ui.add_space(6.0);
    changed
}

pub fn hint_label(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).small().weak());
}

/// Texture cache for one signature image, keyed by a hash of its data URI.
/// Re-decodes only when the stored signature actually changes.
pub struct ImageCache {
    key: u64,
    tex: Option<egui::TextureHandle>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self { key: 0, tex: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, uri: &str, max_height: f32) {
        let key = fingerprint(uri);
        if self.key != key {
            self.tex = decode_texture(ui, uri);
            self.key = key;
        }

        match &self.tex {
            Some(tex) => {
                let size = tex.size_vec2();
                let scale = (max_height / size.y).min(1.0);
                ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                    tex.id(),
                    size * scale,
                )));
            }
            None => {
                ui.label(RichText::new("⚠").weak());
            }
        }
    }
}

fn fingerprint(uri: &str) -> u64 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    uri.hash(&mut h);
    h.finish()
}

fn decode_texture(ui: &egui::Ui, uri: &str) -> Option<egui::TextureHandle> {
    let bytes = data_uri::decode(uri).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    Some(
        ui.ctx()
            .load_texture("signature", color, egui::TextureOptions::LINEAR),
    )
}
