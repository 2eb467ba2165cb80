// src/ui/step_personal.rs

use accord_studio_lib::command::consent_form::{self as form, FormField, FormState};
use accord_studio_lib::i18n::{self, Locale};
use eframe::egui::{self, RichText};

use super::widgets;

pub fn ui(ui: &mut egui::Ui, state: &mut FormState, locale: Locale) {
    let l = i18n::labels(locale);
    widgets::section_heading(ui, l.step_personal_heading);

    ui.columns(2, |cols| {
        party_column(
            &mut cols[0],
            state,
            l.party_a_info,
            (l.party_a_name, FormField::PartyAName),
            (l.party_a_id, FormField::PartyAIdNumber),
        );
        party_column(
            &mut cols[1],
            state,
            l.party_b_info,
            (l.party_b_name, FormField::PartyBName),
            (l.party_b_id, FormField::PartyBIdNumber),
        );
    });

    widgets::hint_label(ui, l.personal_hint);
}

fn party_column(
    ui: &mut egui::Ui,
    state: &mut FormState,
    heading: &str,
    name: (&str, FormField),
    id: (&str, FormField),
) {
    ui.label(RichText::new(heading).strong());
    ui.add_space(6.0);

    for (label, field) in [name, id] {
        let mut buf = field.slot(&mut state.record).clone();
        if widgets::required_text_field(ui, label, &mut buf, "") {
            form::set_field(state, field, buf);
        }
    }
}
