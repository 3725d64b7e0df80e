//! Response segmentation
//!
//! The model returns one string; by convention it carries a `Reasoning`
//! heading and a `Task Breakdown` heading. This module splits the raw text
//! into the two segments. The rule is idempotent: re-splitting a pure
//! breakdown segment yields the same segment plus the no-reasoning
//! placeholder.

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder reasoning when only the breakdown heading is present.
pub const NO_REASONING_PLACEHOLDER: &str = "No specific reasoning section was found.";

/// Placeholder reasoning when neither heading is present and the whole text
/// is treated as the breakdown.
pub const DIRECT_BREAKDOWN_PLACEHOLDER: &str =
    "The model provided a direct breakdown without a separate reasoning section.";

/// The two logical segments of a model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// The reasoning segment, or a placeholder if the heading was absent
    pub reasoning: String,
    /// The task breakdown segment
    pub breakdown: String,
}

// A heading is the token alone on a line, case-insensitive, optionally
// wrapped in markdown markup (###, **), followed by a line break.
fn reasoning_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:^|\n)[#*\s]*Reasoning[#*:\s]*\n").unwrap())
}

fn breakdown_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:^|\n)[#*\s]*Task[ \t]*Breakdown[#*:\s]*\n").unwrap())
}

/// Split a raw model reply into reasoning and breakdown segments.
///
/// - Both headings present: each segment is the text under its heading, the
///   reasoning stopping at the breakdown heading.
/// - Only the breakdown heading: reasoning gets
///   [`NO_REASONING_PLACEHOLDER`].
/// - Neither heading: the whole text is the breakdown and reasoning gets
///   [`DIRECT_BREAKDOWN_PLACEHOLDER`].
pub fn segment(raw: &str) -> Segments {
    let reasoning_match = reasoning_heading().find(raw);
    let breakdown_match = breakdown_heading().find(raw);

    let mut reasoning = NO_REASONING_PLACEHOLDER.to_string();
    let mut breakdown = raw.trim().to_string();

    if let Some(m) = breakdown_match {
        breakdown = raw[m.end()..].trim().to_string();
    }

    if let Some(m) = reasoning_match {
        let rest = &raw[m.end()..];
        let end = breakdown_heading()
            .find(rest)
            .map(|b| b.start())
            .unwrap_or(rest.len());
        reasoning = rest[..end].trim().to_string();
    } else if breakdown_match.is_none() {
        reasoning = DIRECT_BREAKDOWN_PLACEHOLDER.to_string();
    }

    Segments {
        reasoning,
        breakdown,
    }
}
