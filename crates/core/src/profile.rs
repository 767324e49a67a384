//! Country profile shape parsing.
//!
//! The `country_profile` mode instructs the model to return a JSON object
//! with exactly these seven fields. Persisting a profile requires the full
//! shape to deserialize -- a response that is valid JSON but missing fields
//! (or with wrong types) is routed to the generic output log instead.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Structured country profile produced by the `country_profile` mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryProfileData {
    /// One phrase describing the country's UN diplomatic style.
    pub behavior_style: String,
    /// Key priorities on the topic (expected length 3).
    pub priorities: Vec<String>,
    /// Positions the country would never accept (expected length 3).
    pub red_lines: Vec<String>,
    pub allies: String,
    pub opponents: String,
    pub stance_summary: String,
    /// 3-5 short quoted snippets from the chair report.
    pub anchors: Vec<String>,
}

/// Parse a raw model response into the structured profile shape.
///
/// Strict on the seven required fields; unknown extra fields are tolerated.
pub fn parse_profile(raw: &str) -> Result<CountryProfileData, CoreError> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::Validation(format!("Response is not a valid country profile: {e}")))
}
