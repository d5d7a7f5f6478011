// ── Field validation ──
//
// Pure rule evaluation over a candidate record. Every applicable rule
// runs; failures are collected per field, not short-circuited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::User;

// ── Error message texts ─────────────────────────────────────────────

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const PHONE_INVALID: &str = "Invalid phone number. Must be 10 digits";

// ── Types ───────────────────────────────────────────────────────────

/// A validated form field. Gender and id carry no rules.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
}

/// Outcome of validating a record: at most one message per failed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: BTreeMap<FormField, String>,
}

impl ValidationResult {
    /// Valid iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Capability for validating a candidate value of type `T`.
pub trait Validator<T> {
    fn validate(&self, input: &T) -> ValidationResult;
}

// ── User validation ─────────────────────────────────────────────────

/// Validates a user record against the registration field rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl Validator<User> for UserValidator {
    fn validate(&self, user: &User) -> ValidationResult {
        let mut errors = BTreeMap::new();

        // Required-field errors take precedence over shape errors.
        if user.name.trim().is_empty() {
            errors.insert(FormField::Name, NAME_REQUIRED.to_owned());
        } else if user.name.trim().chars().count() < 2 {
            errors.insert(FormField::Name, NAME_TOO_SHORT.to_owned());
        }

        if user.email.trim().is_empty() {
            errors.insert(FormField::Email, EMAIL_REQUIRED.to_owned());
        } else if !email_shape_ok(&user.email) {
            errors.insert(FormField::Email, EMAIL_INVALID.to_owned());
        }

        if user.phone.trim().is_empty() {
            errors.insert(FormField::Phone, PHONE_REQUIRED.to_owned());
        } else if !phone_shape_ok(&user.phone) {
            errors.insert(FormField::Phone, PHONE_INVALID.to_owned());
        }

        ValidationResult { errors }
    }
}

/// Permissive structural email check, equivalent to `^\S+@\S+\.\S+$`:
/// no whitespace, at least one character before an '@', and somewhere
/// after that '@' a '.' with at least one character on each side.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let bytes = email.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    let Some(at) = bytes[1..].iter().position(|&b| b == b'@') else {
        return false;
    };
    let rest = &bytes[at + 2..];
    if rest.len() < 3 {
        return false;
    }
    rest[1..rest.len() - 1].contains(&b'.')
}

/// Exactly 10 ASCII digits, leading digit 6-9 (Indian mobile numbering).
fn phone_shape_ok(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User {
            id: crate::model::UserId::unassigned(),
            name: "Al".into(),
            email: "a@b.co".into(),
            phone: "9876543210".into(),
            gender: crate::model::Gender::Male,
        }
    }

    #[test]
    fn valid_user_passes() {
        let result = UserValidator.validate(&valid_user());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn missing_fields_each_report_required() {
        let user = User {
            name: "  ".into(),
            email: String::new(),
            phone: "\t".into(),
            ..valid_user()
        };
        let result = UserValidator.validate(&user);

        assert!(!result.is_valid());
        assert_eq!(result.errors[&FormField::Name], NAME_REQUIRED);
        assert_eq!(result.errors[&FormField::Email], EMAIL_REQUIRED);
        assert_eq!(result.errors[&FormField::Phone], PHONE_REQUIRED);
    }

    #[test]
    fn one_char_name_is_too_short_only() {
        let user = User {
            name: "A".into(),
            ..valid_user()
        };
        let result = UserValidator.validate(&user);

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[&FormField::Name], NAME_TOO_SHORT);
    }

    #[test]
    fn required_takes_precedence_over_too_short() {
        let user = User {
            name: " ".into(),
            ..valid_user()
        };
        let result = UserValidator.validate(&user);
        assert_eq!(result.errors[&FormField::Name], NAME_REQUIRED);
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@example.com", "a@b.c", "a@b@c.d"] {
            assert!(email_shape_ok(good), "expected valid: {good}");
        }
        for bad in ["plain", "a@b", "a@.c", "a@b.", "@b.c", "a b@c.d", "a@b .c"] {
            assert!(!email_shape_ok(bad), "expected invalid: {bad}");
        }
    }

    #[test]
    fn email_error_message() {
        let user = User {
            email: "nope".into(),
            ..valid_user()
        };
        let result = UserValidator.validate(&user);
        assert_eq!(result.errors[&FormField::Email], EMAIL_INVALID);
    }

    #[test]
    fn phone_shapes() {
        assert!(phone_shape_ok("9876543210"));
        assert!(phone_shape_ok("6000000000"));
        // Leading digit outside 6-9
        assert!(!phone_shape_ok("1234567890"));
        // Wrong lengths
        assert!(!phone_shape_ok("987654321"));
        assert!(!phone_shape_ok("98765432100"));
        // Non-digits
        assert!(!phone_shape_ok("98765golf0"));
    }

    #[test]
    fn all_failures_collected_not_short_circuited() {
        let user = User {
            name: "A".into(),
            email: "nope".into(),
            phone: "123".into(),
            ..valid_user()
        };
        let result = UserValidator.validate(&user);
        assert_eq!(result.errors.len(), 3);
    }
}
