// ── User domain type ──

use serde::{Deserialize, Serialize};

use super::UserId;

/// Gender of a user, one of three fixed values.
///
/// Serialized lowercase on the wire and in display output.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Others,
}

impl Gender {
    /// All values, in the order the registration form presents them.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Others];
}

/// A user record.
///
/// Mutated only by whole-record replacement; there are no partial-field
/// stores anywhere in the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
}

impl User {
    /// A blank draft: unassigned id, empty text fields, default gender.
    pub fn draft() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn gender_display_is_lowercase() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(Gender::Others.to_string(), "others");
    }

    #[test]
    fn gender_parses_lowercase() {
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert!(Gender::from_str("unknown").is_err());
    }

    #[test]
    fn draft_starts_blank_and_male() {
        let draft = User::draft();
        assert!(!draft.id.is_assigned());
        assert!(draft.name.is_empty());
        assert_eq!(draft.gender, Gender::Male);
    }
}
