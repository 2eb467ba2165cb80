// src/ui/step_signatures.rs

use accord_studio_lib::command::consent_form::{self as form, FormState, PartyId};
use accord_studio_lib::command::signature::{self, CaptureMode};
use accord_studio_lib::i18n::{self, Locale};
use eframe::egui::{self, RichText};

use super::message::PanelMsgState;
use super::signature_pad::{PadEvent, SignaturePad};
use super::widgets::{self, ImageCache};

pub struct SignaturesPanel {
    party_a: PartyCapture,
    party_b: PartyCapture,
}

impl SignaturesPanel {
    pub fn new() -> Self {
        Self {
            party_a: PartyCapture::new(PartyId::A),
            party_b: PartyCapture::new(PartyId::B),
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut FormState,
        locale: Locale,
        msg: &mut PanelMsgState,
        debug_ui: bool,
    ) {
        let l = i18n::labels(locale);
        widgets::section_heading(ui, l.step_sign_heading);

        ui.columns(2, |cols| {
            self.party_a
                .ui(&mut cols[0], state, locale, l.party_a_signature, msg, debug_ui);
            self.party_b
                .ui(&mut cols[1], state, locale, l.party_b_signature, msg, debug_ui);
        });

        widgets::hint_label(ui, l.sign_note);
    }
}

/// The only view-private state in the wizard: per-party capture mode plus
/// the in-progress sketch. The stored signature itself lives in the record.
struct PartyCapture {
    party: PartyId,
    mode: CaptureMode,
    pad: SignaturePad,
    preview: ImageCache,
}

impl PartyCapture {
    fn new(party: PartyId) -> Self {
        Self {
            party,
            mode: CaptureMode::Draw,
            pad: SignaturePad::new(),
            preview: ImageCache::new(),
        }
    }

    fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut FormState,
        locale: Locale,
        heading: &str,
        msg: &mut PanelMsgState,
        debug_ui: bool,
    ) {
        let l = i18n::labels(locale);

        ui.horizontal(|ui| {
            widgets::required_label(ui, heading);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Button names the *other* mode; switching always discards
                // the stored signature.
                let switch_to = match self.mode {
                    CaptureMode::Draw => format!("⬆ {}", l.upload_mode),
                    CaptureMode::Upload => format!("✏ {}", l.draw_mode),
                };
                if ui.small_button(switch_to).clicked() {
                    signature::toggle_capture_mode(state, self.party, &mut self.mode);
                    self.pad.clear();
                    msg.clear();
                }
            });
        });
        ui.add_space(4.0);

        match self.mode {
            CaptureMode::Draw => self.ui_draw(ui, state, locale, msg, debug_ui),
            CaptureMode::Upload => self.ui_upload(ui, state, locale, msg, debug_ui),
        }
    }

    fn ui_draw(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut FormState,
        locale: Locale,
        msg: &mut PanelMsgState,
        debug_ui: bool,
    ) {
        let l = i18n::labels(locale);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                if self.pad.ui(ui) == PadEvent::StrokeFinished {
                    // Empty pads never overwrite a stored signature.
                    match signature::save_sketch(state, self.party, self.pad.sketch()) {
                        Ok(_) => {}
                        Err(e) => msg.from_app_error(&e, locale, debug_ui),
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(l.clear).clicked() {
                        self.pad.clear();
                        form::clear_signature(state, self.party);
                    }
                });
            });
    }

    fn ui_upload(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut FormState,
        locale: Locale,
        msg: &mut PanelMsgState,
        debug_ui: bool,
    ) {
        let l = i18n::labels(locale);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                let stored = form::signature(&state.record, self.party).to_string();

                if stored.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(18.0);
                        if ui
                            .button(RichText::new(format!("⬆ {}", l.upload_click)).size(14.0))
                            .clicked()
                        {
                            // No selection is a no-op.
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter(
                                    "Images",
                                    &["png", "jpg", "jpeg", "gif", "webp", "bmp"],
                                )
                                .pick_file()
                            {
                                match signature::load_signature_file(state, self.party, &path) {
                                    Ok(()) => msg.clear(),
                                    Err(e) => msg.from_app_error(&e, locale, debug_ui),
                                }
                            }
                        }
                        ui.add_space(18.0);
                    });
                } else {
                    ui.vertical_centered(|ui| {
                        self.preview.show(ui, &stored, 128.0);
                        ui.add_space(4.0);
                        if ui.small_button(l.clear).clicked() {
                            form::clear_signature(state, self.party);
                        }
                    });
                }
            });
    }
}
