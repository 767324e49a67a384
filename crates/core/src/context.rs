//! Grounding context assembly for generation requests.
//!
//! Renders the committee/topic header, chair report, and any stored country
//! profile and resolution texts into the single text block the model is
//! instructed to stay faithful to. Rendering is deterministic: the same
//! inputs always produce byte-identical output, and absent sections produce
//! no heading at all.

use std::fmt::Write;

/// Country profile section inputs, present only when a profile is stored.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSection<'a> {
    pub country: &'a str,
    pub profile_json: &'a serde_json::Value,
}

/// Render the grounding context block.
///
/// Section order is fixed: committee/topic header, chair report, country +
/// profile JSON, main-sponsored resolution, co-sponsored resolution. No
/// escaping or truncation is applied.
pub fn assemble_context(
    committee: &str,
    topic: &str,
    chair_report: &str,
    profile: Option<ProfileSection<'_>>,
    main_resolution: Option<&str>,
    co_resolution: Option<&str>,
) -> String {
    let mut context = format!("## Committee: {committee}\n## Topic: {topic}\n\n");
    let _ = write!(context, "## Chair Report:\n{chair_report}\n\n");

    if let Some(profile) = profile {
        let json = serde_json::to_string_pretty(profile.profile_json)
            .unwrap_or_else(|_| profile.profile_json.to_string());
        let _ = write!(
            context,
            "## Country: {}\n## Country Profile:\n{json}\n\n",
            profile.country
        );
    }

    if let Some(text) = main_resolution {
        let _ = write!(context, "## Main-Sponsored Resolution:\n{text}\n\n");
    }

    if let Some(text) = co_resolution {
        let _ = write!(context, "## Co-Sponsored Resolution:\n{text}\n\n");
    }

    context
}
