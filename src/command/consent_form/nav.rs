// src/command/consent_form/nav.rs

use super::types::{FormError, FormState};
use super::validate::validate_step;

pub fn can_advance(state: &FormState) -> bool {
    !state.step.is_last() && validate_step(&state.record, state.step)
}

/// Move forward by one step. Does NOT validate; [`advance_if_valid`] is the
/// controller-facing gate.
pub fn advance_step(state: &mut FormState) -> Result<(), FormError> {
    match state.step.next() {
        Some(next) => {
            state.step = next;
            Ok(())
        }
        None => Err(FormError::InvalidState(
            "already at the preview step".to_string(),
        )),
    }
}

/// Move back by one step. Backward motion is never validated.
pub fn retreat_step(state: &mut FormState) -> Result<(), FormError> {
    match state.step.prev() {
        Some(prev) => {
            state.step = prev;
            Ok(())
        }
        None => Err(FormError::InvalidState(
            "already at the first step".to_string(),
        )),
    }
}

/// Validate-then-advance. On a validation failure nothing is mutated and the
/// caller surfaces a blocking message.
pub fn advance_if_valid(state: &mut FormState) -> Result<(), FormError> {
    if !validate_step(&state.record, state.step) {
        return Err(FormError::ValidationFailed(state.step));
    }
    advance_step(state)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::super::ops::set_field;
    use super::super::types::{FormField, WizardStep};
    use super::*;

    #[test]
    fn advance_blocks_past_preview() {
        let mut s = FormState::new();
        s.step = WizardStep::Preview;
        let err = advance_step(&mut s).unwrap_err();
        assert!(matches!(err, FormError::InvalidState(_)));
        assert_eq!(s.step, WizardStep::Preview);
    }

    #[test]
    fn retreat_blocks_before_first_step() {
        let mut s = FormState::new();
        let err = retreat_step(&mut s).unwrap_err();
        assert!(matches!(err, FormError::InvalidState(_)));
        assert_eq!(s.step, WizardStep::PersonalInfo);
    }

    #[test]
    fn retreat_succeeds_from_every_later_step() {
        for step in [
            WizardStep::DateLocation,
            WizardStep::Signatures,
            WizardStep::Preview,
        ] {
            let mut s = FormState::new();
            s.step = step;
            retreat_step(&mut s).unwrap();
            assert_eq!(s.step.index(), step.index() - 1);
        }
    }

    #[test]
    fn advance_if_valid_rejects_incomplete_step_without_mutating() {
        let mut s = FormState::new();
        let before = s.record.clone();

        let err = advance_if_valid(&mut s).unwrap_err();
        assert!(matches!(
            err,
            FormError::ValidationFailed(WizardStep::PersonalInfo)
        ));
        assert_eq!(s.step, WizardStep::PersonalInfo);
        assert_eq!(s.record, before);
    }

    #[test]
    fn advance_if_valid_moves_one_step_when_complete() {
        let mut s = FormState::new();
        set_field(&mut s, FormField::PartyAName, "Alice");
        set_field(&mut s, FormField::PartyAIdNumber, "A1");
        set_field(&mut s, FormField::PartyBName, "Bob");
        set_field(&mut s, FormField::PartyBIdNumber, "B1");

        advance_if_valid(&mut s).unwrap();
        assert_eq!(s.step, WizardStep::DateLocation);
    }
}
