//! Prompt template registry.
//!
//! Maps a generation mode string to its system prompt and builds the user
//! prompt from the assembled context plus request options. The mode is an
//! open dispatch key: unknown modes fall back to the bare preamble instead of
//! failing, so new client-side modes degrade gracefully.

use std::fmt::Write;

/// Known generation mode strings.
pub mod modes {
    pub const COUNTRY_PROFILE: &str = "country_profile";
    pub const OPENING_SPEECH: &str = "opening_speech";
    pub const YIELD_FOR: &str = "yield_for";
    pub const YIELD_AGAINST: &str = "yield_against";
    pub const POIS: &str = "pois";
    pub const EXPLAIN_TOPIC: &str = "explain_topic";
    pub const AMEND_RECOMMEND: &str = "amend_recommend";
    pub const AMEND_FOR: &str = "amend_for";
    pub const AMEND_AGAINST: &str = "amend_against";
}

/// Default speech length in seconds when the request omits one.
pub const DEFAULT_SPEECH_LENGTH_SECS: i64 = 90;

/// Default speech tone when the request omits one.
pub const DEFAULT_SPEECH_TONE: &str = "calm";

/// Shared preamble: chair report is ground truth, outputs must carry quoted
/// anchors, unsupported claims are labeled rather than invented.
pub const PREAMBLE: &str = r#"You are an expert Model United Nations (MUN) coach and delegate advisor.
Your outputs must be grounded in the Chair Report provided - this is the source of truth.

CRITICAL RULES:
1. Every output MUST include an "Anchors from Chair Report" section with 3-5 short quoted snippets (5-20 words each) that your output is based on.
2. If information is not supported by the chair report, clearly label it "Not supported by chair report".
3. Never invent facts or statistics not in the chair report.
4. Be specific, actionable, and ready to speak aloud."#;

const COUNTRY_PROFILE_BLOCK: &str = r#"Generate a country profile as a JSON object with these exact fields:
- behavior_style: One phrase describing UN diplomatic style (e.g., "sovereignty-focused", "legalist", "interventionist")
- priorities: Array of exactly 3 key priorities for this country on this topic
- red_lines: Array of exactly 3 things this country would never accept
- allies: Countries likely to align with this delegation (or "Unknown if not in chair report")
- opponents: Countries likely to oppose (or "Unknown if not in chair report")
- stance_summary: 2-3 sentences summarizing the country's position
- anchors: Array of 3-5 short quoted snippets from the chair report

Return ONLY valid JSON, no markdown."#;

const OPENING_SPEECH_BLOCK: &str = r#"Generate an opening speech that:
- Opens with a strong hook
- States the delegation's position clearly
- Provides 2-3 key arguments with chair report backing
- Ends with a call to action
- Is timed to the requested length
- Matches the requested tone

Format with clear paragraph breaks and include timing markers."#;

const YIELD_FOR_BLOCK: &str = r#"Generate content to SUPPORT the topic/position:
1. 5 rapid-fire supporting points (one-liners ready to speak)
2. 2 "trap questions" - questions that lead opponents into weak positions
3. 6 Points of Information to ask opposing delegates

Format each section clearly."#;

const YIELD_AGAINST_BLOCK: &str = r#"Generate content to OPPOSE the topic/position:
1. 5 rapid-fire opposing points (one-liners ready to speak)
2. 2 "trap questions" - questions that expose weaknesses in supporting arguments
3. 6 Points of Information to challenge proponents

Format each section clearly."#;

const POIS_BLOCK: &str = r#"Generate 12 Points of Information:

OFFENSIVE POIs (6): Questions to challenge opponents and expose weaknesses
DEFENSIVE POIs (6): Questions that allow your delegation to reinforce its position

Each POI should be a single, sharp question ready to ask. Format clearly."#;

const EXPLAIN_TOPIC_BLOCK: &str = r#"Provide a comprehensive topic breakdown:

1. KEY DEFINITIONS: Define 3-5 critical terms
2. CORE DEBATE: What is the fundamental disagreement?
3. MAIN ARGUMENTS FOR: 3-4 key arguments with brief explanations
4. MAIN ARGUMENTS AGAINST: 3-4 key arguments with brief explanations
5. COMMON MISCONCEPTIONS: 2-3 things delegates often get wrong
6. BLOCS/ALIGNMENTS: Expected voting blocs if mentioned in chair report

Format with clear headers."#;

const AMEND_RECOMMEND_BLOCK: &str = r#"Based on the resolution text provided, recommend 3-6 amendments:

For each amendment:
1. CLAUSE TO MODIFY: Identify which clause
2. PROPOSED CHANGE: Specific language to add/remove/modify
3. REASONING: Why this improves the resolution
4. ANCHOR: Quote from chair report supporting this change

Focus on substantive improvements aligned with the country's profile."#;

const AMEND_FOR_BLOCK: &str = r#"Generate a speech SUPPORTING the amendment:
- Strong opening statement
- 2-3 reasons why this amendment improves the resolution
- Reference to chair report evidence
- Call to vote in favor

Keep it concise (45-60 seconds speaking time)."#;

const AMEND_AGAINST_BLOCK: &str = r#"Generate a speech OPPOSING the amendment:
- Strong opening statement
- 2-3 reasons why this amendment weakens the resolution
- Reference to chair report evidence
- Call to vote against

Keep it concise (45-60 seconds speaking time)."#;

/// Request options folded into the user prompt for the modes that use them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptOptions<'a> {
    /// Speech tone for `opening_speech` (default "calm").
    pub tone: Option<&'a str>,
    /// Speech length in seconds for `opening_speech` (default 90).
    pub length: Option<i64>,
    /// Resolution or amendment text for the three `amend_*` modes.
    pub amendment_text: Option<&'a str>,
    /// Country name for `country_profile`.
    pub country: Option<&'a str>,
}

/// Render the system prompt for a mode.
///
/// Known modes append their instruction block to the shared preamble;
/// unrecognized modes return the preamble alone. This never fails closed.
pub fn system_prompt(mode: &str) -> String {
    let block = match mode {
        modes::COUNTRY_PROFILE => COUNTRY_PROFILE_BLOCK,
        modes::OPENING_SPEECH => OPENING_SPEECH_BLOCK,
        modes::YIELD_FOR => YIELD_FOR_BLOCK,
        modes::YIELD_AGAINST => YIELD_AGAINST_BLOCK,
        modes::POIS => POIS_BLOCK,
        modes::EXPLAIN_TOPIC => EXPLAIN_TOPIC_BLOCK,
        modes::AMEND_RECOMMEND => AMEND_RECOMMEND_BLOCK,
        modes::AMEND_FOR => AMEND_FOR_BLOCK,
        modes::AMEND_AGAINST => AMEND_AGAINST_BLOCK,
        _ => return PREAMBLE.to_string(),
    };
    format!("{PREAMBLE}\n\n{block}")
}

/// Build the user prompt: the rendered context followed by a short directive
/// tailored to the mode.
///
/// Unknown modes get no directive; the context alone is forwarded.
pub fn user_prompt(mode: &str, context: &str, options: PromptOptions<'_>) -> String {
    let mut prompt = context.to_string();

    match mode {
        modes::COUNTRY_PROFILE => {
            if let Some(country) = options.country {
                let _ = write!(
                    prompt,
                    "\nGenerate a comprehensive country profile for {country} based on the Chair Report above."
                );
            }
        }
        modes::OPENING_SPEECH => {
            let length = options.length.unwrap_or(DEFAULT_SPEECH_LENGTH_SECS);
            let tone = options.tone.unwrap_or(DEFAULT_SPEECH_TONE);
            let _ = write!(
                prompt,
                "\nGenerate a {length}-second opening speech with a {tone} tone."
            );
        }
        modes::YIELD_FOR => {
            prompt.push_str(
                "\nGenerate yield content to SUPPORT the resolution/topic from this delegation's perspective.",
            );
        }
        modes::YIELD_AGAINST => {
            prompt.push_str(
                "\nGenerate yield content to OPPOSE the resolution/topic from this delegation's perspective.",
            );
        }
        modes::POIS => {
            prompt.push_str(
                "\nGenerate 12 Points of Information (6 offensive, 6 defensive) for this delegation.",
            );
        }
        modes::EXPLAIN_TOPIC => {
            prompt.push_str("\nExplain this topic comprehensively for a delegate preparing for debate.");
        }
        modes::AMEND_RECOMMEND => {
            prompt.push_str(
                "\nBased on the resolution text, recommend amendments aligned with this delegation's position.",
            );
            if let Some(text) = options.amendment_text {
                let _ = write!(prompt, "\n\nResolution to amend:\n{text}");
            }
        }
        modes::AMEND_FOR => {
            prompt.push_str("\nGenerate a speech supporting the proposed amendment.");
            if let Some(text) = options.amendment_text {
                let _ = write!(prompt, "\n\nAmendment context:\n{text}");
            }
        }
        modes::AMEND_AGAINST => {
            prompt.push_str("\nGenerate a speech opposing the proposed amendment.");
            if let Some(text) = options.amendment_text {
                let _ = write!(prompt, "\n\nAmendment context:\n{text}");
            }
        }
        _ => {}
    }

    prompt
}
