// src/command/signature.rs

use std::path::Path;

use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::command::consent_form::{clear_signature, set_signature, FormState, PartyId};
use crate::data_uri;
use crate::error::AppError;

/// Logical sketch surface, matching the on-screen pad.
pub const SKETCH_WIDTH: f32 = 300.0;
pub const SKETCH_HEIGHT: f32 = 150.0;

/// The stored raster is oversampled so the signature stays crisp when the
/// agreement itself is rasterized again at export time.
pub const SKETCH_SCALE: f32 = 2.0;

pub const INK_WIDTH: f32 = 2.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    #[default]
    Draw,
    Upload,
}

impl CaptureMode {
    pub fn toggled(self) -> Self {
        match self {
            CaptureMode::Draw => CaptureMode::Upload,
            CaptureMode::Upload => CaptureMode::Draw,
        }
    }
}

/// Freehand strokes in pad-local coordinates. The UI feeds points during a
/// drag; `end_stroke` seals the stroke on pointer release.
#[derive(Clone, Debug, Default)]
pub struct SignatureSketch {
    strokes: Vec<Vec<(f32, f32)>>,
    current: Vec<(f32, f32)>,
}

impl SignatureSketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_point(&mut self, x: f32, y: f32) {
        let x = x.clamp(0.0, SKETCH_WIDTH);
        let y = y.clamp(0.0, SKETCH_HEIGHT);
        self.current.push((x, y));
    }

    pub fn end_stroke(&mut self) {
        if !self.current.is_empty() {
            self.strokes.push(std::mem::take(&mut self.current));
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.current.is_empty()
    }

    /// Sealed strokes plus the stroke being drawn, for on-screen preview.
    pub fn iter_strokes(&self) -> impl Iterator<Item = &[(f32, f32)]> {
        self.strokes
            .iter()
            .map(|s| s.as_slice())
            .chain((!self.current.is_empty()).then_some(self.current.as_slice()))
    }

    /// Render the sketch to PNG: white background, dark anti-aliased ink,
    /// round caps and joins. Errors on an empty sketch so callers cannot
    /// overwrite a stored signature with a blank image.
    pub fn rasterize_png(&self) -> Result<Vec<u8>, AppError> {
        if self.is_empty() {
            return Err(AppError::EmptySketch);
        }

        let width = (SKETCH_WIDTH * SKETCH_SCALE) as u32;
        let height = (SKETCH_HEIGHT * SKETCH_SCALE) as u32;
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(AppError::RasterAlloc { width, height })?;
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        paint.set_color_rgba8(31, 41, 55, 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: INK_WIDTH * SKETCH_SCALE,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        for points in self.iter_strokes() {
            match points {
                [] => {}
                // A tap without movement still leaves a visible dot.
                [(x, y)] => {
                    let mut pb = PathBuilder::new();
                    pb.push_circle(x * SKETCH_SCALE, y * SKETCH_SCALE, stroke.width / 2.0);
                    if let Some(path) = pb.finish() {
                        pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                    }
                }
                [(x0, y0), rest @ ..] => {
                    let mut pb = PathBuilder::new();
                    pb.move_to(x0 * SKETCH_SCALE, y0 * SKETCH_SCALE);
                    for (x, y) in rest {
                        pb.line_to(x * SKETCH_SCALE, y * SKETCH_SCALE);
                    }
                    if let Some(path) = pb.finish() {
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                }
            }
        }

        pixmap
            .encode_png()
            .map_err(|e| AppError::PngEncode(e.to_string()))
    }
}

/// Store the sketch for one party. Returns Ok(false) without touching the
/// record when the sketch is empty.
pub fn save_sketch(
    state: &mut FormState,
    party: PartyId,
    sketch: &SignatureSketch,
) -> Result<bool, AppError> {
    if sketch.is_empty() {
        return Ok(false);
    }

    let png = sketch.rasterize_png()?;
    set_signature(state, party, data_uri::encode_png(&png));
    Ok(true)
}

/// Switch between drawing and uploading. Always clears the party's stored
/// signature so an image from the previous mode cannot survive the switch.
pub fn toggle_capture_mode(state: &mut FormState, party: PartyId, mode: &mut CaptureMode) {
    *mode = mode.toggled();
    clear_signature(state, party);
}

/// Read an uploaded image file and store it as the party's signature.
///
/// The file is decoded to prove it is an image, then re-encoded as PNG so
/// every stored signature carries the same `data:image/png` payload
/// regardless of the upload format.
pub fn load_signature_file(
    state: &mut FormState,
    party: PartyId,
    path: &Path,
) -> Result<(), AppError> {
    let bytes = std::fs::read(path)?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| AppError::UnreadableImage(e.to_string()))?;

    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .map_err(|e| AppError::PngEncode(e.to_string()))?;

    set_signature(state, party, data_uri::encode_png(&png));
    Ok(())
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::consent_form::signature;

    fn sketch_with_line() -> SignatureSketch {
        let mut sk = SignatureSketch::new();
        sk.push_point(10.0, 10.0);
        sk.push_point(120.0, 60.0);
        sk.push_point(260.0, 130.0);
        sk.end_stroke();
        sk
    }

    #[test]
    fn empty_sketch_refuses_to_rasterize() {
        let sk = SignatureSketch::new();
        assert!(matches!(sk.rasterize_png(), Err(AppError::EmptySketch)));
    }

    #[test]
    fn rasterized_sketch_is_a_png_at_scaled_size() {
        let png = sketch_with_line().rasterize_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), (SKETCH_WIDTH * SKETCH_SCALE) as u32);
        assert_eq!(img.height(), (SKETCH_HEIGHT * SKETCH_SCALE) as u32);
    }

    #[test]
    fn points_are_clamped_to_the_pad() {
        let mut sk = SignatureSketch::new();
        sk.push_point(-50.0, 9999.0);
        sk.end_stroke();
        let strokes: Vec<_> = sk.iter_strokes().collect();
        assert_eq!(strokes[0], &[(0.0, SKETCH_HEIGHT)]);
    }

    #[test]
    fn save_sketch_empty_is_a_noop_and_keeps_existing_signature() {
        let mut s = FormState::new();
        set_signature(&mut s, PartyId::A, "data:image/png;base64,kept".to_string());

        let saved = save_sketch(&mut s, PartyId::A, &SignatureSketch::new()).unwrap();
        assert!(!saved);
        assert_eq!(signature(&s.record, PartyId::A), "data:image/png;base64,kept");
    }

    #[test]
    fn save_sketch_stores_png_data_uri() {
        let mut s = FormState::new();
        let saved = save_sketch(&mut s, PartyId::B, &sketch_with_line()).unwrap();
        assert!(saved);
        assert!(signature(&s.record, PartyId::B).starts_with(crate::data_uri::PNG_PREFIX));
    }

    #[test]
    fn toggling_capture_mode_clears_that_party_only() {
        let mut s = FormState::new();
        set_signature(&mut s, PartyId::A, "data:image/png;base64,aa".to_string());
        set_signature(&mut s, PartyId::B, "data:image/png;base64,bb".to_string());

        let mut mode = CaptureMode::Draw;
        toggle_capture_mode(&mut s, PartyId::A, &mut mode);
        assert_eq!(mode, CaptureMode::Upload);
        assert_eq!(signature(&s.record, PartyId::A), "");
        assert_eq!(signature(&s.record, PartyId::B), "data:image/png;base64,bb");

        // Toggling back clears again even though the field is already empty.
        toggle_capture_mode(&mut s, PartyId::A, &mut mode);
        assert_eq!(mode, CaptureMode::Draw);
        assert_eq!(signature(&s.record, PartyId::A), "");
    }

    #[test]
    fn uploaded_file_is_normalized_to_png_data_uri() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("sig.jpg");

        let img = image::DynamicImage::new_rgb8(40, 20);
        img.save_with_format(&path, image::ImageFormat::Jpeg).unwrap();

        let mut s = FormState::new();
        load_signature_file(&mut s, PartyId::A, &path).unwrap();

        let uri = signature(&s.record, PartyId::A).to_string();
        assert!(uri.starts_with(crate::data_uri::PNG_PREFIX));

        let decoded = crate::data_uri::decode(&uri).unwrap();
        let back = image::load_from_memory(&decoded).unwrap();
        assert_eq!((back.width(), back.height()), (40, 20));
    }

    #[test]
    fn unreadable_upload_leaves_record_untouched() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let mut s = FormState::new();
        let err = load_signature_file(&mut s, PartyId::A, &path).unwrap_err();
        assert!(matches!(err, AppError::UnreadableImage(_)));
        assert_eq!(signature(&s.record, PartyId::A), "");
    }
}
