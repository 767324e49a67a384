//! Repository for the `country_profiles` table.

use sqlx::PgPool;

use munprep_core::types::DbId;

use crate::models::country_profile::{CountryProfile, CreateCountryProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, country, profile_json, created_at";

/// Provides insert and read operations for country profiles.
///
/// Profiles are append-only; there are no update or delete methods.
pub struct CountryProfileRepo;

impl CountryProfileRepo {
    /// Insert a new profile row, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateCountryProfile,
    ) -> Result<CountryProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO country_profiles (project_id, country, profile_json)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CountryProfile>(&query)
            .bind(input.project_id)
            .bind(&input.country)
            .bind(&input.profile_json)
            .fetch_one(pool)
            .await
    }

    /// Find the most recent profile for a project, if any.
    pub async fn find_latest_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<CountryProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM country_profiles
             WHERE project_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, CountryProfile>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CountryProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM country_profiles
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, CountryProfile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
