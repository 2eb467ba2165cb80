// src/command/consent_form/mod.rs

pub mod nav;
pub mod ops;
pub mod types;
pub mod validate;

pub use nav::{advance_if_valid, advance_step, can_advance, retreat_step};
pub use ops::{clear_signature, set_field, set_signature, signature, update_path};
pub use types::{
    DateParts, FormError, FormField, FormRecord, FormState, PartyId, PartyInfo, WizardStep,
};
pub use validate::{missing_fields, validate_step};
