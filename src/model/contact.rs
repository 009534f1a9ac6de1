//! Contact domain model and the phone-number validation rule.
//!
//! # Responsibility
//! - Define the canonical contact record persisted by the store.
//! - Provide the single data-quality gate applied on every write path.
//!
//! # Invariants
//! - `id` is engine-assigned, unique, and never reused within one database.
//! - `phone_number` holds exactly 10 to 13 ASCII decimal digits for every
//!   row written through the repository.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Engine-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = i64;

// ASCII-only on purpose: non-ASCII decimal digits are not valid phone input.
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,13}$").expect("phone number pattern is valid"));

/// Persisted contact record as returned by query operations.
///
/// Values read back from the store are snapshots; mutating them has no
/// effect on persisted state until written back through an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable unique ID assigned by the storage engine on insert.
    pub id: ContactId,
    /// Display name, non-empty by convention.
    pub name: String,
    /// 10-13 ASCII digits, validated on every repository write.
    pub phone_number: String,
    /// Free-form grouping label, e.g. "family" or "work".
    pub category: String,
}

/// Draft contact used by insert and update before an ID exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone_number: String,
    pub category: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            category: category.into(),
        }
    }

    /// Checks the draft against the phone validation rule.
    ///
    /// Must be called before any SQL mutation; a failing draft never
    /// reaches the engine and never consumes an ID.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if !is_valid_phone_number(&self.phone_number) {
            return Err(ContactValidationError::InvalidPhoneNumber {
                value: self.phone_number.clone(),
            });
        }
        Ok(())
    }
}

/// Returns whether `phone` consists of exactly 10 to 13 decimal digits.
///
/// No spaces, dashes, plus signs or any other characters are permitted.
/// This predicate is the sole data-quality gate in the store and is applied
/// identically by insert, update, and CSV import.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_NUMBER_RE.is_match(phone)
}

/// Validation failure raised before any engine interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Phone number is not 10-13 decimal digits.
    InvalidPhoneNumber { value: String },
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhoneNumber { value } => write!(
                f,
                "invalid phone number `{value}`: expected 10 to 13 decimal digits"
            ),
        }
    }
}

impl Error for ContactValidationError {}

#[cfg(test)]
mod tests {
    use super::{is_valid_phone_number, ContactValidationError, NewContact};

    #[test]
    fn phone_rule_accepts_10_to_13_digits() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(is_valid_phone_number("08123456789"));
        assert!(is_valid_phone_number("1234567890123"));
    }

    #[test]
    fn phone_rule_rejects_wrong_lengths() {
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("123456789"));
        assert!(!is_valid_phone_number("12345678901234"));
    }

    #[test]
    fn phone_rule_rejects_non_digit_characters() {
        assert!(!is_valid_phone_number("123-456-7890"));
        assert!(!is_valid_phone_number("+6281234567"));
        assert!(!is_valid_phone_number("12345 67890"));
        assert!(!is_valid_phone_number("abcdefghij"));
    }

    #[test]
    fn phone_rule_rejects_non_ascii_digits() {
        // Arabic-Indic digits are decimal digits in Unicode but not here.
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn draft_validation_reports_offending_value() {
        let draft = NewContact::new("Bob", "123", "work");
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ContactValidationError::InvalidPhoneNumber {
                value: "123".to_string()
            }
        );
        assert!(err.to_string().contains("123"));
    }

    #[test]
    fn valid_draft_passes() {
        let draft = NewContact::new("Alice", "08123456789", "family");
        assert!(draft.validate().is_ok());
    }
}
