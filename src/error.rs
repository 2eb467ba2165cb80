// src/error.rs

use std::fmt;

use crate::i18n::Locale;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),

    // --------------------------------------------------
    // signature capture
    // --------------------------------------------------
    EmptySketch,
    UnreadableImage(String),
    InvalidDataUri(String),

    // --------------------------------------------------
    // rasterization / export
    // --------------------------------------------------
    SvgParse(String),
    RasterAlloc { width: u32, height: u32 },
    PngEncode(String),
    PdfEncode(String),
    ExportInProgress,
}

impl AppError {
    pub fn user_msg(&self, locale: Locale) -> UserMsg {
        use AppError::*;

        let kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match (self, locale) {
            (Io(_), Locale::Zh) => "文件操作失败。",
            (Io(_), Locale::En) => "File operation failed.",
            (Msg(_), Locale::Zh) => "操作失败。",
            (Msg(_), Locale::En) => "Operation failed.",

            (EmptySketch, Locale::Zh) => "签名板为空。",
            (EmptySketch, Locale::En) => "The signature pad is empty.",
            (UnreadableImage(_), Locale::Zh) => "无法读取所选图片。",
            (UnreadableImage(_), Locale::En) => "Could not read the selected image.",
            (InvalidDataUri(_), Locale::Zh) => "签名图片数据无效。",
            (InvalidDataUri(_), Locale::En) => "Invalid signature image data.",

            (SvgParse(_) | RasterAlloc { .. }, Locale::Zh) => "渲染同意书失败。",
            (SvgParse(_) | RasterAlloc { .. }, Locale::En) => "Failed to render the agreement.",
            (PngEncode(_), Locale::Zh) => "图片编码失败。",
            (PngEncode(_), Locale::En) => "Image encoding failed.",
            (PdfEncode(_), Locale::Zh) => "PDF 编码失败。",
            (PdfEncode(_), Locale::En) => "PDF encoding failed.",
            (ExportInProgress, Locale::Zh) => "导出正在进行中，请稍候。",
            (ExportInProgress, Locale::En) => "An export is already in progress.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),

            EmptySketch => write!(f, "signature sketch is empty"),
            UnreadableImage(s) => write!(f, "unreadable image: {s}"),
            InvalidDataUri(s) => write!(f, "invalid data uri: {s}"),

            SvgParse(s) => write!(f, "svg parse failed: {s}"),
            RasterAlloc { width, height } => {
                write!(f, "raster allocation failed: {width}x{height}")
            }
            PngEncode(s) => write!(f, "png encode failed: {s}"),
            PdfEncode(s) => write!(f, "pdf encode failed: {s}"),
            ExportInProgress => write!(f, "export already in progress"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
