// ── Wire ⇄ domain conversions ──
//
// `roster-api` speaks plain strings; the domain model is typed.

use std::str::FromStr;

use roster_api::UserRecord;

use crate::model::{Gender, User, UserId};

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: UserId::new(record.id),
            name: record.name,
            email: record.email,
            phone: record.phone,
            // Unknown wire values fall back to the default rather than
            // rejecting the whole record.
            gender: Gender::from_str(&record.gender).unwrap_or_default(),
        }
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            gender: user.gender.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_domain() {
        let record = UserRecord {
            id: "42".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            gender: "female".into(),
        };

        let user = User::from(record.clone());
        assert_eq!(user.gender, Gender::Female);
        assert_eq!(UserRecord::from(&user), record);
    }

    #[test]
    fn unknown_gender_falls_back_to_default() {
        let record = UserRecord {
            id: "1".into(),
            name: "X Y".into(),
            email: "x@y.z".into(),
            phone: "9876543210".into(),
            gender: "martian".into(),
        };

        assert_eq!(User::from(record).gender, Gender::Male);
    }
}
