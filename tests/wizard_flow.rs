// tests/wizard_flow.rs

mod common;

use accord_studio_lib::command::consent_form::{
    advance_if_valid, advance_step, clear_signature, retreat_step, set_field, update_path,
    validate_step, FormError, FormField, FormState, PartyId, WizardStep,
};

#[test]
fn wizard_walks_all_steps_with_validation_gates() {
    let mut s = FormState::new();
    assert_eq!(s.step, WizardStep::PersonalInfo);

    // Step 0: blocked until both parties are complete.
    assert!(!validate_step(&s.record, WizardStep::PersonalInfo));
    common::fill_personal(&mut s);
    assert!(validate_step(&s.record, WizardStep::PersonalInfo));
    advance_if_valid(&mut s).expect("advance to date/location");
    assert_eq!(s.step, WizardStep::DateLocation);

    // Step 1 with an empty date: Next must refuse without touching anything.
    let before = s.record.clone();
    let err = advance_if_valid(&mut s).unwrap_err();
    assert!(matches!(
        err,
        FormError::ValidationFailed(WizardStep::DateLocation)
    ));
    assert_eq!(s.step, WizardStep::DateLocation);
    assert_eq!(s.record, before);

    // Fill date + location: Next advances by exactly one.
    common::fill_date_location(&mut s);
    advance_if_valid(&mut s).expect("advance to signatures");
    assert_eq!(s.step, WizardStep::Signatures);

    // Step 2: both signatures required. A placeholder non-empty string is
    // enough for validation; the store treats stored signatures as opaque.
    set_field(&mut s, FormField::SignatureA, "sig-a");
    let err = advance_if_valid(&mut s).unwrap_err();
    assert!(matches!(
        err,
        FormError::ValidationFailed(WizardStep::Signatures)
    ));

    set_field(&mut s, FormField::SignatureB, "sig-b");
    advance_if_valid(&mut s).expect("advance to preview");
    assert_eq!(s.step, WizardStep::Preview);

    // Preview is terminal: it validates but there is nothing to advance to.
    assert!(validate_step(&s.record, WizardStep::Preview));
    assert!(matches!(
        advance_if_valid(&mut s).unwrap_err(),
        FormError::InvalidState(_)
    ));
    assert_eq!(s.step, WizardStep::Preview);

    // Backward motion is unconditional all the way down, then unavailable.
    retreat_step(&mut s).unwrap();
    retreat_step(&mut s).unwrap();
    retreat_step(&mut s).unwrap();
    assert_eq!(s.step, WizardStep::PersonalInfo);
    assert!(retreat_step(&mut s).is_err());
}

#[test]
fn retreat_never_validates_even_with_cleared_fields() {
    let mut s = common::filled_state();
    s.step = WizardStep::Preview;

    // Invalidate earlier steps; going back must still work.
    set_field(&mut s, FormField::PartyAName, "");
    clear_signature(&mut s, PartyId::A);

    retreat_step(&mut s).unwrap();
    assert_eq!(s.step, WizardStep::Signatures);
    retreat_step(&mut s).unwrap();
    assert_eq!(s.step, WizardStep::DateLocation);
}

#[test]
fn dotted_paths_drive_the_same_wizard_flow() {
    let mut s = FormState::new();

    update_path(&mut s, "partyA.name", "Alice");
    update_path(&mut s, "partyA.idNumber", "A1");
    update_path(&mut s, "partyB.name", "Bob");
    update_path(&mut s, "partyB.idNumber", "B1");
    assert!(validate_step(&s.record, WizardStep::PersonalInfo));

    // A malformed path between valid writes changes nothing.
    let before = s.record.clone();
    update_path(&mut s, "partyB.idNumber.checksum", "junk");
    assert_eq!(s.record, before);

    update_path(&mut s, "date.year", "2025");
    update_path(&mut s, "date.month", "12");
    update_path(&mut s, "date.day", "15");
    update_path(&mut s, "location", "123 Main St");
    advance_step(&mut s).unwrap();
    assert!(validate_step(&s.record, WizardStep::DateLocation));
}
