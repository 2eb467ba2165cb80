// src/command/consent_form/ops.rs

use super::types::{FormField, FormRecord, FormState, PartyId};

/// Write one field, leaving every sibling untouched.
pub fn set_field(state: &mut FormState, field: FormField, value: impl Into<String>) {
    *field.slot(&mut state.record) = value.into();
}

/// Dotted-path compatibility shim over [`set_field`].
///
/// Malformed paths (zero or 3+ segments, unknown names, object-valued
/// targets) are a silent no-op, pinned by tests. Callers that want a
/// compile-time guarantee use [`set_field`] directly.
pub fn update_path(state: &mut FormState, path: &str, value: &str) {
    if let Some(field) = FormField::parse_path(path) {
        set_field(state, field, value);
    }
}

/// Zero exactly one signature field.
pub fn clear_signature(state: &mut FormState, party: PartyId) {
    let field = signature_field(party);
    *field.slot(&mut state.record) = String::new();
}

pub fn set_signature(state: &mut FormState, party: PartyId, data_uri: String) {
    set_field(state, signature_field(party), data_uri);
}

pub fn signature(record: &FormRecord, party: PartyId) -> &str {
    match party {
        PartyId::A => &record.signature_a,
        PartyId::B => &record.signature_b,
    }
}

fn signature_field(party: PartyId) -> FormField {
    match party {
        PartyId::A => FormField::SignatureA,
        PartyId::B => FormField::SignatureB,
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> FormState {
        let mut s = FormState::new();
        set_field(&mut s, FormField::PartyAName, "Alice");
        set_field(&mut s, FormField::PartyAIdNumber, "A1");
        set_field(&mut s, FormField::PartyBName, "Bob");
        set_field(&mut s, FormField::PartyBIdNumber, "B1");
        set_field(&mut s, FormField::DateYear, "2025");
        set_field(&mut s, FormField::DateMonth, "12");
        set_field(&mut s, FormField::DateDay, "15");
        set_field(&mut s, FormField::Location, "123 Main St");
        set_field(&mut s, FormField::SignatureA, "data:image/png;base64,aaaa");
        set_field(&mut s, FormField::SignatureB, "data:image/png;base64,bbbb");
        s
    }

    #[test]
    fn set_field_touches_exactly_one_field() {
        let mut s = filled_state();
        let before = s.record.clone();

        set_field(&mut s, FormField::PartyAName, "X");

        assert_eq!(s.record.party_a.name, "X");
        assert_eq!(s.record.party_a.id_number, before.party_a.id_number);
        assert_eq!(s.record.party_b, before.party_b);
        assert_eq!(s.record.date, before.date);
        assert_eq!(s.record.location, before.location);
        assert_eq!(s.record.signature_a, before.signature_a);
        assert_eq!(s.record.signature_b, before.signature_b);
    }

    #[test]
    fn update_path_writes_through_two_segment_paths() {
        let mut s = FormState::new();
        update_path(&mut s, "partyA.name", "Alice");
        update_path(&mut s, "date.year", "2025");
        update_path(&mut s, "location", "Here");

        assert_eq!(s.record.party_a.name, "Alice");
        assert_eq!(s.record.date.year, "2025");
        assert_eq!(s.record.location, "Here");
    }

    #[test]
    fn update_path_malformed_is_silent_noop() {
        let mut s = filled_state();
        let before = s.record.clone();

        update_path(&mut s, "partyA.name.extra", "evil");
        update_path(&mut s, "partyA", "evil");
        update_path(&mut s, "date", "evil");
        update_path(&mut s, "", "evil");
        update_path(&mut s, "noSuchField", "evil");
        update_path(&mut s, "partyA.noSuchField", "evil");

        assert_eq!(s.record, before);
    }

    #[test]
    fn clear_signature_zeroes_one_side_only() {
        let mut s = filled_state();
        clear_signature(&mut s, PartyId::A);

        assert_eq!(s.record.signature_a, "");
        assert_eq!(s.record.signature_b, "data:image/png;base64,bbbb");

        clear_signature(&mut s, PartyId::B);
        assert_eq!(s.record.signature_b, "");
    }

    #[test]
    fn set_signature_round_trips_through_accessor() {
        let mut s = FormState::new();
        set_signature(&mut s, PartyId::B, "data:image/png;base64,cccc".to_string());

        assert_eq!(signature(&s.record, PartyId::B), "data:image/png;base64,cccc");
        assert_eq!(signature(&s.record, PartyId::A), "");
    }
}
