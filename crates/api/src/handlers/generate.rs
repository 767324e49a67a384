//! The generation pipeline: validate, load records, assemble context,
//! render prompts, call the completion gateway, persist the result.
//!
//! Persistence is a best-effort side effect. A generation that succeeds but
//! fails to store still returns its text; the storage failure surfaces as a
//! `warning` field on the response, never as a request failure.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use munprep_core::context::{assemble_context, ProfileSection};
use munprep_core::error::CoreError;
use munprep_core::profile;
use munprep_core::prompt::{self, modes, PromptOptions};
use munprep_core::types::DbId;
use munprep_db::models::country_profile::CreateCountryProfile;
use munprep_db::models::output::CreateOutput;
use munprep_db::models::source::SourceKind;
use munprep_db::repositories::{CountryProfileRepo, OutputRepo, ProjectRepo, SourceRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for POST /api/v1/generate.
///
/// `project_id` and `mode` are required; the rest are mode-specific options.
/// Required fields are `Option` here so their absence produces a 400 with a
/// clear message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub project_id: Option<DbId>,
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Response for POST /api/v1/generate.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The raw model response text.
    pub result: String,
    /// Set when the result was generated but could not be stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/v1/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let (project_id, mode) = match (request.project_id, request.mode.as_deref()) {
        (Some(project_id), Some(mode)) if !mode.is_empty() => (project_id, mode.to_string()),
        _ => {
            return Err(AppError::BadRequest(
                "project_id and mode are required".to_string(),
            ))
        }
    };

    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    // Profile and sources are optional grounding material. A load failure is
    // logged and the generation continues without that section.
    let stored_profile = match CountryProfileRepo::find_latest_by_project(&state.pool, project_id)
        .await
    {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(%project_id, error = %err, "Failed to load country profile, continuing without it");
            None
        }
    };

    let sources = match SourceRepo::list_by_project(&state.pool, project_id).await {
        Ok(sources) => sources,
        Err(err) => {
            tracing::warn!(%project_id, error = %err, "Failed to load sources, continuing without them");
            Vec::new()
        }
    };
    let main_resolution = sources
        .iter()
        .find(|s| s.kind == SourceKind::MainResolution.as_str());
    let co_resolution = sources
        .iter()
        .find(|s| s.kind == SourceKind::CoResolution.as_str());

    let context = assemble_context(
        &project.committee,
        &project.topic,
        &project.chair_report,
        stored_profile.as_ref().map(|p| ProfileSection {
            country: &p.country,
            profile_json: &p.profile_json,
        }),
        main_resolution.map(|s| s.text.as_str()),
        co_resolution.map(|s| s.text.as_str()),
    );

    // The request's country wins; the stored profile's country is the
    // fallback for regeneration without re-entering it.
    let country = request
        .country
        .as_deref()
        .or_else(|| stored_profile.as_ref().map(|p| p.country.as_str()));

    let system_prompt = prompt::system_prompt(&mode);
    let user_prompt = prompt::user_prompt(
        &mode,
        &context,
        PromptOptions {
            tone: request.tone.as_deref(),
            length: request.length,
            amendment_text: request.amendment_text.as_deref(),
            country,
        },
    );

    tracing::info!(%project_id, mode = %mode, "Requesting completion");
    let result = state.gateway.complete(&system_prompt, &user_prompt).await?;

    let warning = match persist_result(&state, project_id, &mode, country, &request, &result).await
    {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!(%project_id, mode = %mode, error = %err, "Generated result could not be stored");
            Some("Generation succeeded but the result could not be saved".to_string())
        }
    };

    Ok(Json(GenerateResponse { result, warning }))
}

/// Store a successful generation.
///
/// `country_profile` results that parse into the full 7-field shape become a
/// new CountryProfile row; everything else (including profile responses that
/// fail shape validation) is logged as a generic Output row. The stored
/// profile is the raw response JSON, so extra fields the model returned
/// survive alongside the seven required ones.
async fn persist_result(
    state: &AppState,
    project_id: DbId,
    mode: &str,
    country: Option<&str>,
    request: &GenerateRequest,
    result_text: &str,
) -> Result<(), AppError> {
    if mode == modes::COUNTRY_PROFILE {
        if let Some(country) = country {
            match profile::parse_profile(result_text) {
                Ok(_) => {
                    // Shape is valid; store the response verbatim rather than
                    // the re-serialized struct so extra fields are kept.
                    let profile_json: serde_json::Value = serde_json::from_str(result_text)
                        .map_err(|e| AppError::InternalError(e.to_string()))?;
                    CountryProfileRepo::insert(
                        &state.pool,
                        &CreateCountryProfile {
                            project_id,
                            country: country.to_string(),
                            profile_json,
                        },
                    )
                    .await?;
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(%project_id, error = %err, "Profile response failed shape validation, logging as output");
                    let mut input_json = serde_json::to_value(request)
                        .map_err(|e| AppError::InternalError(e.to_string()))?;
                    if let serde_json::Value::Object(map) = &mut input_json {
                        map.insert(
                            "country".to_string(),
                            serde_json::Value::String(country.to_string()),
                        );
                    }
                    OutputRepo::insert(
                        &state.pool,
                        &CreateOutput {
                            project_id,
                            output_type: mode.to_string(),
                            input_json: Some(input_json),
                            result_text: result_text.to_string(),
                        },
                    )
                    .await?;
                    return Ok(());
                }
            }
        }
    }

    let input_json =
        serde_json::to_value(request).map_err(|e| AppError::InternalError(e.to_string()))?;
    OutputRepo::insert(
        &state.pool,
        &CreateOutput {
            project_id,
            output_type: mode.to_string(),
            input_json: Some(input_json),
            result_text: result_text.to_string(),
        },
    )
    .await?;
    Ok(())
}
