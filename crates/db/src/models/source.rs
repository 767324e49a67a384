//! Resolution source entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use munprep_core::types::{DbId, Timestamp};

/// A stored resolution text. At most one row exists per (project, kind).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Source {
    pub id: DbId,
    pub project_id: DbId,
    pub kind: String,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Which resolution slot a source occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    MainResolution,
    CoResolution,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::MainResolution => "main_resolution",
            SourceKind::CoResolution => "co_resolution",
        }
    }
}

/// DTO for saving (replacing) a source. Blank text removes the slot instead
/// of inserting.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSource {
    pub project_id: DbId,
    pub kind: SourceKind,
    pub text: String,
}
