// src/command/consent_form/validate.rs

use super::types::{FormField, FormRecord, WizardStep};

/// Required fields per step. Signature fields are checked raw (a data URI is
/// never whitespace); text fields are trimmed first.
fn required_fields(step: WizardStep) -> &'static [FormField] {
    match step {
        WizardStep::PersonalInfo => &[
            FormField::PartyAName,
            FormField::PartyAIdNumber,
            FormField::PartyBName,
            FormField::PartyBIdNumber,
        ],
        WizardStep::DateLocation => &[
            FormField::DateYear,
            FormField::DateMonth,
            FormField::DateDay,
            FormField::Location,
        ],
        WizardStep::Signatures => &[FormField::SignatureA, FormField::SignatureB],
        WizardStep::Preview => &[],
    }
}

fn field_value(record: &FormRecord, field: FormField) -> &str {
    match field {
        FormField::PartyAName => &record.party_a.name,
        FormField::PartyAIdNumber => &record.party_a.id_number,
        FormField::PartyBName => &record.party_b.name,
        FormField::PartyBIdNumber => &record.party_b.id_number,
        FormField::DateYear => &record.date.year,
        FormField::DateMonth => &record.date.month,
        FormField::DateDay => &record.date.day,
        FormField::Location => &record.location,
        FormField::SignatureA => &record.signature_a,
        FormField::SignatureB => &record.signature_b,
    }
}

fn is_filled(record: &FormRecord, field: FormField) -> bool {
    let v = field_value(record, field);
    match field {
        FormField::SignatureA | FormField::SignatureB => !v.is_empty(),
        _ => !v.trim().is_empty(),
    }
}

/// Pure predicate; no side effects. Preview is always valid.
pub fn validate_step(record: &FormRecord, step: WizardStep) -> bool {
    required_fields(step).iter().all(|f| is_filled(record, *f))
}

/// The step's unfilled required fields, in display order.
pub fn missing_fields(record: &FormRecord, step: WizardStep) -> Vec<FormField> {
    required_fields(step)
        .iter()
        .copied()
        .filter(|f| !is_filled(record, *f))
        .collect()
}

// ======================================================
// Unit Tests
// ======================================================
