//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use munprep_core::types::{DbId, Timestamp};

/// A project row from the `projects` table. One per debate-prep session;
/// the chair report is the authoritative grounding document for everything
/// generated under it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub committee: String,
    pub topic: String,
    pub chair_report: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub committee: String,
    pub topic: String,
    pub chair_report: String,
}
