// src/ui/message.rs

use accord_studio_lib::error::{AppError, UserMsgKind};
use accord_studio_lib::i18n::Locale;
use eframe::egui::{self, Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Success);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Warn);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Error);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn from_app_error(&mut self, err: &AppError, locale: Locale, debug_ui: bool) {
        let um = err.user_msg(locale);
        self.kind = Some(um.kind);
        self.short = Some(um.short.to_string());
        self.detail = if debug_ui { um.detail } else { None };
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        if !self.is_set() {
            return;
        }

        let Some(kind) = self.kind else { return };
        let short = self.short.as_deref().unwrap_or("");
        let detail = self.detail.as_deref();

        let text = match detail {
            Some(d) if debug_ui => format!("{short} ({d})"),
            _ => short.to_string(),
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (
                Color32::from_rgb(0, 220, 90),
                Color32::from_rgb(0, 80, 40),
            ),
            UserMsgKind::Warn => (
                Color32::from_rgb(255, 170, 0),
                Color32::from_rgb(90, 60, 0),
            ),
            UserMsgKind::Error => (
                Color32::from_rgb(255, 60, 60),
                Color32::from_rgb(90, 0, 0),
            ),
            UserMsgKind::Info => (
                Color32::from_rgb(80, 180, 255),
                Color32::from_rgb(10, 40, 80),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}
