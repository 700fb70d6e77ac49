use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single emission type record as stored in the `emission_type` table.
///
/// `id` is assigned by the database on creation and never changes afterwards.
/// `version` is an optimistic-concurrency stamp the database sets to 1 on
/// creation; the update path leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EmissionType {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub description: String,
    pub version: i32,
}

/// The caller-supplied fields of an emission type that has not been
/// persisted yet. `id` and `version` are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmissionType {
    pub name: String,
    pub abbreviation: String,
    pub description: String,
}
