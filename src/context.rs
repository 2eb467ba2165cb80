// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "accord";
pub const APP_ID: &str = "accord-studio";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("ACCORD_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_data_dir,
            debug_ui,
        }
    }

    /// Directory the export save dialog opens in.
    /// ACCORD_EXPORT_DIR wins, then the platform download dir, then home.
    pub fn export_start_dir(&self) -> PathBuf {
        if let Ok(p) = std::env::var("ACCORD_EXPORT_DIR") {
            return PathBuf::from(p);
        }

        if let Some(dirs) = directories::UserDirs::new() {
            if let Some(dl) = dirs.download_dir() {
                return dl.to_path_buf();
            }
            return dirs.home_dir().to_path_buf();
        }

        PathBuf::from(".")
    }
}
