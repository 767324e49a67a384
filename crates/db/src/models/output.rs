//! Generated output log entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use munprep_core::types::{DbId, Timestamp};

/// An immutable log entry for one generation result.
///
/// `output_type` is the generation mode string; it is deliberately not a
/// closed enum at the storage level so unknown modes still log cleanly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Output {
    pub id: DbId,
    pub project_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub output_type: String,
    pub input_json: Option<serde_json::Value>,
    pub result_text: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new output row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutput {
    pub project_id: DbId,
    #[serde(rename = "type")]
    pub output_type: String,
    pub input_json: Option<serde_json::Value>,
    pub result_text: String,
}
