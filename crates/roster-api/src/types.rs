// Wire-level types for the users REST API.
//
// These mirror the JSON shapes exchanged with the server; `roster-core`
// converts them into its typed domain model.

use serde::{Deserialize, Serialize};

/// A user record as the API serializes it.
///
/// `id` and `gender` are plain strings on the wire; an empty `id` marks
/// a record that has not been persisted yet and must never be sent to
/// the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub gender: String,
}
