// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use accord_studio_lib::activity_log::{ActivityKind, ActivityLog};
use accord_studio_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use directories::ProjectDirs;

fn main() -> eframe::Result<()> {
    let app_data_dir: PathBuf = if let Ok(p) = env::var("ACCORD_DATA_DIR") {
        PathBuf::from(p)
    } else if cfg!(debug_assertions) {
        // dev-only sandbox
        let home = env::var("HOME").expect("HOME not set");
        PathBuf::from(home).join(".local/share/accord-dev")
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("Could not determine app data dir");
        proj.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&app_data_dir).expect("Could not create app data dir");

    let mut log = ActivityLog::init(&app_data_dir).expect("failed to init activity log");
    log.record(ActivityKind::AppStarted, env!("CARGO_PKG_VERSION"));

    let ctx = Arc::new(AppCtx::new(app_data_dir));

    eframe::run_native(
        "Accord Consent Studio",
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default().with_inner_size([960.0, 760.0]),
            ..Default::default()
        },
        Box::new(move |cc| {
            if let Err(e) = ui::install_cjk_fonts(&cc.egui_ctx) {
                log.record(ActivityKind::FontFallback, e);
            }
            Ok(Box::new(ui::UiApp::new(ctx.clone(), log)))
        }),
    )
}
