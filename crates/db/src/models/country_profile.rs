//! Country profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use munprep_core::types::{DbId, Timestamp};

/// A country profile row from the `country_profiles` table.
///
/// Rows are never updated; a regenerated profile inserts a new row and
/// readers take the most recent per project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CountryProfile {
    pub id: DbId,
    pub project_id: DbId,
    pub country: String,
    /// The structured 7-field profile object, stored as-is.
    pub profile_json: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for inserting a new country profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountryProfile {
    pub project_id: DbId,
    pub country: String,
    pub profile_json: serde_json::Value,
}
