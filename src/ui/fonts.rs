// src/ui/fonts.rs

use eframe::egui;
use usvg::fontdb;

/// Families probed for CJK coverage, best match first.
const CJK_FAMILIES: &[&str] = &[
    "Noto Sans CJK SC",
    "Noto Sans SC",
    "Source Han Sans SC",
    "WenQuanYi Zen Hei",
    "Microsoft YaHei",
    "PingFang SC",
];

/// egui's bundled fonts carry no CJK glyphs, so the Chinese locale would
/// render as tofu without this. Pulls the first matching system face and
/// appends it to both egui font families. Best-effort; the caller records
/// a fallback event on Err.
pub fn install_cjk_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let families: Vec<fontdb::Family> =
        CJK_FAMILIES.iter().map(|n| fontdb::Family::Name(n)).collect();
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };

    let id = db
        .query(&query)
        .ok_or_else(|| "no CJK font found on this system".to_string())?;

    let data = db
        .with_face_data(id, |bytes, _index| bytes.to_vec())
        .ok_or_else(|| "failed to read CJK font data".to_string())?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(data).into());
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(list) = fonts.families.get_mut(&family) {
            list.push("cjk".to_owned());
        }
    }

    ctx.set_fonts(fonts);
    Ok(())
}
