// src/export.rs

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;

use printpdf::{ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px};
use tiny_skia::Pixmap;

use crate::command::consent_form::FormRecord;
use crate::error::AppError;
use crate::i18n::Locale;
use crate::template::consent_doc;

/// Fixed oversampling factor for both export formats.
pub const RASTER_SCALE: f32 = 2.0;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
}

impl ExportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "consent-agreement.pdf",
            ExportFormat::Png => "consent-agreement.png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }
}

/// Parse and render arbitrary agreement SVG into a pixmap at `scale`.
pub fn rasterize_svg(svg: &str, scale: f32) -> Result<Pixmap, AppError> {
    let mut opt = usvg::Options::default();
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    opt.fontdb = Arc::new(db);

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)
        .map_err(|e| AppError::SvgParse(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(AppError::RasterAlloc { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

pub fn rasterize_document(
    record: &FormRecord,
    locale: Locale,
    scale: f32,
) -> Result<Pixmap, AppError> {
    rasterize_svg(&consent_doc::document_svg(record, locale), scale)
}

pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), AppError> {
    pixmap
        .save_png(path)
        .map_err(|e| AppError::PngEncode(e.to_string()))
}

/// Embed the raster full-bleed on a single portrait A4 page: full 210 mm
/// width, height proportional to the raster. Content taller than the page is
/// clipped at the bottom edge, matching the fixed single-page layout.
pub fn write_pdf(pixmap: &Pixmap, path: &Path) -> Result<(), AppError> {
    let (doc, page, layer) = PdfDocument::new(
        "Consent Agreement",
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );
    let layer_ref = doc.get_page(page).get_layer(layer);

    let width_px = pixmap.width();
    let height_px = pixmap.height();

    // Pixmap stores premultiplied RGBA; the page background is opaque white,
    // so demultiplying is exact.
    let mut rgb = Vec::with_capacity(width_px as usize * height_px as usize * 3);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }

    let image = Image::from(ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb,
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // DPI that maps the raster width onto the full page width.
    let dpi = width_px as f32 / (A4_WIDTH_MM / 25.4);
    let image_height_mm = height_px as f32 * A4_WIDTH_MM / width_px as f32;

    image.add_to_layer(
        layer_ref,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(A4_HEIGHT_MM - image_height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::PdfEncode(e.to_string()))
}

/// Render the agreement and write it in the requested format. Pure function
/// of the record snapshot; never touches live form state.
pub fn export_document(
    format: ExportFormat,
    record: &FormRecord,
    locale: Locale,
    path: &Path,
) -> Result<(), AppError> {
    let pixmap = rasterize_document(record, locale, RASTER_SCALE)?;
    match format {
        ExportFormat::Pdf => write_pdf(&pixmap, path),
        ExportFormat::Png => write_png(&pixmap, path),
    }
}

struct ExportJob {
    format: ExportFormat,
    rx: mpsc::Receiver<Result<PathBuf, AppError>>,
}

/// One export at a time. The UI disables its buttons while `is_busy()` and
/// polls every frame; `begin` refuses overlapping jobs outright so a second
/// rasterization can never start while one is pending.
#[derive(Default)]
pub struct Exporter {
    job: Option<ExportJob>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn busy_format(&self) -> Option<ExportFormat> {
        self.job.as_ref().map(|j| j.format)
    }

    /// Kick off an export on a worker thread over a snapshot of the record.
    pub fn begin(
        &mut self,
        format: ExportFormat,
        record: FormRecord,
        locale: Locale,
        path: PathBuf,
    ) -> Result<(), AppError> {
        if self.job.is_some() {
            return Err(AppError::ExportInProgress);
        }

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let res = export_document(format, &record, locale, &path).map(|()| path);
            let _ = tx.send(res);
        });

        self.job = Some(ExportJob { format, rx });
        Ok(())
    }

    /// Non-blocking completion check. Clears the in-flight job on success,
    /// failure, or a dead worker, so the controls always re-enable.
    pub fn poll(&mut self) -> Option<(ExportFormat, Result<PathBuf, AppError>)> {
        if let Some(job) = self.job.take() {
            return match job.rx.try_recv() {
                Ok(res) => Some((job.format, res)),
                Err(TryRecvError::Disconnected) => Some((
                    job.format,
                    Err(AppError::Msg("export worker exited unexpectedly".to_string())),
                )),
                Err(TryRecvError::Empty) => {
                    self.job = Some(job);
                    None
                }
            };
        }
        None
    }
}

// ======================================================
// Unit Tests
// ======================================================
