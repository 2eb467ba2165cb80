// src/ui/step_preview.rs

use accord_studio_lib::command::consent_form::FormRecord;
use accord_studio_lib::i18n::{self, Locale};
use accord_studio_lib::template::consent_doc;
use eframe::egui::{self, Color32, RichText, Sense, Stroke, StrokeKind};

use super::widgets::{self, ImageCache};

const SIG_BOX: egui::Vec2 = egui::Vec2::new(180.0, 90.0);

/// Read-only rendition of the agreement. The exporter rasterizes the SVG
/// template instead of this widget tree, but both draw from the same
/// `consent_doc` content so what the user previews is what exports.
pub struct PreviewPanel {
    sig_a: ImageCache,
    sig_b: ImageCache,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self {
            sig_a: ImageCache::new(),
            sig_b: ImageCache::new(),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, record: &FormRecord, locale: Locale) {
        let l = i18n::labels(locale);
        widgets::section_heading(ui, l.step_preview_heading);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(consent_doc::agreement_title(locale))
                            .strong()
                            .size(18.0),
                    );
                });
                ui.add_space(14.0);

                party_line(
                    ui,
                    l.party_a_line,
                    &record.party_a.name,
                    l.id_number_line,
                    &record.party_a.id_number,
                );
                party_line(
                    ui,
                    l.party_b_line,
                    &record.party_b.name,
                    l.id_number_line,
                    &record.party_b.id_number,
                );
                ui.add_space(8.0);

                ui.label(consent_doc::date_location_clause(record, locale));
                ui.add_space(10.0);

                for (i, term) in consent_doc::terms(locale).iter().enumerate() {
                    ui.label(format!("{}. {}", i + 1, term));
                    ui.add_space(4.0);
                }
                ui.add_space(16.0);

                ui.columns(2, |cols| {
                    signature_block(&mut cols[0], &mut self.sig_a, l.party_a_signed, &record.signature_a);
                    signature_block(&mut cols[1], &mut self.sig_b, l.party_b_signed, &record.signature_b);
                });
            });

        widgets::hint_label(ui, l.preview_note);
    }
}

fn party_line(ui: &mut egui::Ui, label: &str, name: &str, id_label: &str, id_number: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(label);
        ui.label(RichText::new(blank_if_empty(name)).underline());
        ui.add_space(10.0);
        ui.label(id_label);
        ui.label(RichText::new(blank_if_empty(id_number)).underline());
    });
    ui.add_space(4.0);
}

fn blank_if_empty(s: &str) -> String {
    if s.trim().is_empty() {
        "　　　　".to_string()
    } else {
        s.to_string()
    }
}

fn signature_block(ui: &mut egui::Ui, cache: &mut ImageCache, label: &str, data_uri: &str) {
    ui.label(label);
    ui.add_space(4.0);

    if data_uri.is_empty() {
        let (response, painter) = ui.allocate_painter(SIG_BOX, Sense::hover());
        painter.rect_stroke(
            response.rect,
            egui::CornerRadius::same(2),
            Stroke::new(1.0, Color32::from_gray(200)),
            StrokeKind::Inside,
        );
    } else {
        cache.show(ui, data_uri, SIG_BOX.y);
    }
}
