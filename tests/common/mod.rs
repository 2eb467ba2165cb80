// tests/common/mod.rs

#![allow(dead_code)]

use accord_studio_lib::command::consent_form::{self as form, FormField, FormState};
use accord_studio_lib::command::signature::SignatureSketch;
use accord_studio_lib::data_uri;

/// A real drawn-and-rasterized signature, as the pad would store it.
pub fn sample_signature_data_uri() -> String {
    let mut sk = SignatureSketch::new();
    sk.push_point(20.0, 30.0);
    sk.push_point(150.0, 75.0);
    sk.push_point(280.0, 120.0);
    sk.end_stroke();

    data_uri::encode_png(&sk.rasterize_png().expect("rasterize sample sketch"))
}

pub fn fill_personal(state: &mut FormState) {
    form::set_field(state, FormField::PartyAName, "Alice");
    form::set_field(state, FormField::PartyAIdNumber, "A1");
    form::set_field(state, FormField::PartyBName, "Bob");
    form::set_field(state, FormField::PartyBIdNumber, "B1");
}

pub fn fill_date_location(state: &mut FormState) {
    form::set_field(state, FormField::DateYear, "2025");
    form::set_field(state, FormField::DateMonth, "12");
    form::set_field(state, FormField::DateDay, "15");
    form::set_field(state, FormField::Location, "123 Main St");
}

pub fn fill_signatures(state: &mut FormState) {
    let sig = sample_signature_data_uri();
    form::set_field(state, FormField::SignatureA, sig.clone());
    form::set_field(state, FormField::SignatureB, sig);
}

/// Every required field filled; wizard still at the first step.
pub fn filled_state() -> FormState {
    let mut s = FormState::new();
    fill_personal(&mut s);
    fill_date_location(&mut s);
    fill_signatures(&mut s);
    s
}
