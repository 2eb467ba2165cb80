// src/ui/step_date_location.rs

use accord_studio_lib::command::consent_form::{self as form, FormField, FormState};
use accord_studio_lib::i18n::{self, Locale};
use eframe::egui;

use super::widgets;

pub fn ui(ui: &mut egui::Ui, state: &mut FormState, locale: Locale) {
    let l = i18n::labels(locale);
    widgets::section_heading(ui, l.step_date_heading);

    widgets::required_label(ui, l.date);
    ui.add_space(4.0);
    ui.columns(3, |cols| {
        date_part(&mut cols[0], state, l.year, l.year_hint, FormField::DateYear);
        date_part(&mut cols[1], state, l.month, l.month_hint, FormField::DateMonth);
        date_part(&mut cols[2], state, l.day, l.day_hint, FormField::DateDay);
    });

    ui.add_space(10.0);

    let mut location = state.record.location.clone();
    if widgets::required_text_field(ui, l.location, &mut location, l.location_hint) {
        form::set_field(state, FormField::Location, location);
    }

    widgets::hint_label(ui, l.date_note);
}

fn date_part(
    ui: &mut egui::Ui,
    state: &mut FormState,
    label: &str,
    hint: &str,
    field: FormField,
) {
    ui.small(label);
    let mut buf = field.slot(&mut state.record).clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut buf)
                .desired_width(f32::INFINITY)
                .hint_text(hint),
        )
        .changed()
    {
        form::set_field(state, field, buf);
    }
}
