// src/ui/signature_pad.rs

use accord_studio_lib::command::signature::{
    SignatureSketch, INK_WIDTH, SKETCH_HEIGHT, SKETCH_WIDTH,
};
use eframe::egui::{self, Color32, Sense, Stroke, StrokeKind};

const INK: Color32 = Color32::from_rgb(31, 41, 55);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadEvent {
    None,
    /// Pointer released; the sketch content should be saved to the store.
    StrokeFinished,
}

/// Freehand drawing surface. Collects drag points into a [`SignatureSketch`]
/// in pad-local coordinates and reports end-of-stroke.
pub struct SignaturePad {
    sketch: SignatureSketch,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self {
            sketch: SignatureSketch::new(),
        }
    }

    pub fn sketch(&self) -> &SignatureSketch {
        &self.sketch
    }

    pub fn clear(&mut self) {
        self.sketch.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> PadEvent {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(SKETCH_WIDTH, SKETCH_HEIGHT), Sense::drag());
        let rect = response.rect;

        painter.rect_filled(rect, egui::CornerRadius::same(4), Color32::WHITE);
        painter.rect_stroke(
            rect,
            egui::CornerRadius::same(4),
            Stroke::new(1.0, Color32::from_gray(200)),
            StrokeKind::Inside,
        );

        if response.drag_started() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                self.sketch.push_point(local.x, local.y);
            }
        }

        let mut event = PadEvent::None;
        if response.drag_stopped() {
            self.sketch.end_stroke();
            event = PadEvent::StrokeFinished;
        }

        for points in self.sketch.iter_strokes() {
            match points {
                [] => {}
                [(x, y)] => {
                    painter.circle_filled(
                        rect.min + egui::vec2(*x, *y),
                        INK_WIDTH / 2.0,
                        INK,
                    );
                }
                _ => {
                    for pair in points.windows(2) {
                        painter.line_segment(
                            [
                                rect.min + egui::vec2(pair[0].0, pair[0].1),
                                rect.min + egui::vec2(pair[1].0, pair[1].1),
                            ],
                            Stroke::new(INK_WIDTH, INK),
                        );
                    }
                }
            }
        }

        event
    }
}
