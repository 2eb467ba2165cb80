// src/command/consent_form/types.rs

use serde::{Deserialize, Serialize};

/// The two signatories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyId {
    A,
    B,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyInfo {
    pub name: String,
    pub id_number: String,
}

/// Free-text date parts. Deliberately not validated as a real calendar date.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// The single per-session record. Every field defaults to the empty string;
/// absence is the empty string, never an Option.
///
/// `signature_a` / `signature_b` hold a `data:image/png;base64,` URI once a
/// signature was drawn or uploaded. The record keeps no provenance flag: a
/// drawn and an uploaded signature are indistinguishable once stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub party_a: PartyInfo,
    pub party_b: PartyInfo,
    pub date: DateParts,
    pub location: String,
    pub signature_a: String,
    pub signature_b: String,
}

/// Wizard position. One screen per variant; navigation moves by exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    DateLocation,
    Signatures,
    Preview,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PersonalInfo,
        WizardStep::DateLocation,
        WizardStep::Signatures,
        WizardStep::Preview,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::PersonalInfo => 0,
            WizardStep::DateLocation => 1,
            WizardStep::Signatures => 2,
            WizardStep::Preview => 3,
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::PersonalInfo
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Preview
    }
}

/// Record plus wizard position. Owned by the UI app and passed by reference
/// into views; all mutation goes through the ops/nav functions in this module.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub record: FormRecord,
    pub step: WizardStep,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Exhaustive set of writable fields. Every in-crate mutation site names one
/// of these; the stringly dotted-path form survives only as the `parse_path`
/// adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    PartyAName,
    PartyAIdNumber,
    PartyBName,
    PartyBIdNumber,
    DateYear,
    DateMonth,
    DateDay,
    Location,
    SignatureA,
    SignatureB,
}

impl FormField {
    /// Resolve a `"partyA.name"`-style path. One- and two-segment paths only;
    /// anything else (or a path naming a non-string field like `"date"`)
    /// resolves to None and the caller treats the write as a no-op.
    pub fn parse_path(path: &str) -> Option<FormField> {
        let mut segs = path.split('.');
        let first = segs.next()?;
        let second = segs.next();
        if segs.next().is_some() {
            return None;
        }

        match (first, second) {
            ("location", None) => Some(FormField::Location),
            ("signatureA", None) => Some(FormField::SignatureA),
            ("signatureB", None) => Some(FormField::SignatureB),
            ("partyA", Some("name")) => Some(FormField::PartyAName),
            ("partyA", Some("idNumber")) => Some(FormField::PartyAIdNumber),
            ("partyB", Some("name")) => Some(FormField::PartyBName),
            ("partyB", Some("idNumber")) => Some(FormField::PartyBIdNumber),
            ("date", Some("year")) => Some(FormField::DateYear),
            ("date", Some("month")) => Some(FormField::DateMonth),
            ("date", Some("day")) => Some(FormField::DateDay),
            _ => None,
        }
    }

    pub fn slot<'a>(self, record: &'a mut FormRecord) -> &'a mut String {
        match self {
            FormField::PartyAName => &mut record.party_a.name,
            FormField::PartyAIdNumber => &mut record.party_a.id_number,
            FormField::PartyBName => &mut record.party_b.name,
            FormField::PartyBIdNumber => &mut record.party_b.id_number,
            FormField::DateYear => &mut record.date.year,
            FormField::DateMonth => &mut record.date.month,
            FormField::DateDay => &mut record.date.day,
            FormField::Location => &mut record.location,
            FormField::SignatureA => &mut record.signature_a,
            FormField::SignatureB => &mut record.signature_b,
        }
    }
}

#[derive(Debug)]
pub enum FormError {
    /// Navigation outside [first, last], or similar caller bugs.
    InvalidState(String),
    /// The current step's required fields are incomplete.
    ValidationFailed(WizardStep),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidState(msg) => write!(f, "{msg}"),
            FormError::ValidationFailed(step) => {
                write!(f, "step {} has missing required fields", step.index())
            }
        }
    }
}

impl std::error::Error for FormError {}

// ======================================================
// Unit Tests
// ======================================================
