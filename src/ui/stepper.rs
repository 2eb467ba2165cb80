// src/ui/stepper.rs

use accord_studio_lib::command::consent_form::WizardStep;
use accord_studio_lib::i18n::{self, Locale};
use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke};

const NODE_RADIUS: f32 = 14.0;
const STRIP_HEIGHT: f32 = 54.0;

const ACTIVE: Color32 = Color32::from_rgb(37, 99, 235);
const INACTIVE: Color32 = Color32::from_rgb(156, 163, 175);

/// Four numbered circles with connecting rules; completed steps show a check.
pub fn ui(ui: &mut egui::Ui, locale: Locale, current: WizardStep) {
    ui.vertical_centered(|ui| {
        let width = ui.available_width().min(560.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, STRIP_HEIGHT), Sense::hover());
        let rect = response.rect;

        let slot = rect.width() / WizardStep::ALL.len() as f32;
        let node_y = rect.top() + NODE_RADIUS + 4.0;
        let center_x = |i: usize| rect.left() + slot * (i as f32 + 0.5);

        // Connecting rules first, nodes on top.
        for i in 0..WizardStep::ALL.len() - 1 {
            let color = if current.index() > i { ACTIVE } else { INACTIVE };
            painter.line_segment(
                [
                    egui::pos2(center_x(i) + NODE_RADIUS, node_y),
                    egui::pos2(center_x(i + 1) - NODE_RADIUS, node_y),
                ],
                Stroke::new(2.0, color),
            );
        }

        for (i, step) in WizardStep::ALL.iter().enumerate() {
            let reached = current.index() >= i;
            let color = if reached { ACTIVE } else { INACTIVE };
            let center = egui::pos2(center_x(i), node_y);

            painter.circle_filled(center, NODE_RADIUS, ui.visuals().panel_fill);
            painter.circle_stroke(center, NODE_RADIUS, Stroke::new(2.0, color));

            let glyph = if current.index() > i {
                "✓".to_string()
            } else {
                (i + 1).to_string()
            };
            painter.text(
                center,
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(12.0),
                color,
            );

            painter.text(
                egui::pos2(center.x, node_y + NODE_RADIUS + 6.0),
                Align2::CENTER_TOP,
                i18n::step_name(locale, *step),
                FontId::proportional(10.0),
                color,
            );
        }
    });
}
