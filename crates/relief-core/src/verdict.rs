//! Verdict resolution: turning the judge's untrusted free text into a
//! structured [`Verdict`], with a two-tier fallback.
//!
//! Tier one ([`resolve_verdict`]) handles a judge that answered but whose
//! JSON cannot be located or parsed: DENIED with all-UNKNOWN votes. Tier two
//! ([`error_verdict`]) handles a deliberation that never completed: DENIED
//! with all-ERROR votes. Clients can tell the tiers apart by the votes.

use crate::model::{JuryVotes, Ruling, Verdict};

const TECHNICAL_DIFFICULTIES: &str =
    "The Court experienced technical difficulties during deliberation.";
const HOUSE_WINS_RETRY: &str = "The house always wins. Try again.";
const MACHINES_AGAINST_YOU: &str =
    "Even the machines are against you today. House wins by default.";

/// Maximum raw-text excerpt carried into a fallback roast.
const ROAST_EXCERPT_CHARS: usize = 200;

/// Locate the first-`{`-to-last-`}` span of `raw`, the segment the judge's
/// JSON is expected to live in. Returns `None` when the braces are absent or
/// out of order.
pub(crate) fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

/// Parse the judge's raw output into a Verdict, stripping the legacy
/// `door_code` key if the model hallucinated one. Total: any shape problem
/// degrades to the technical-difficulties verdict.
pub fn resolve_verdict(raw: &str) -> Verdict {
    if let Some(segment) = extract_json_object(raw) {
        if let Ok(mut value) = serde_json::from_str::<serde_json::Value>(segment) {
            if let Some(obj) = value.as_object_mut() {
                obj.remove("door_code");
            }
            if let Ok(verdict) = serde_json::from_value::<Verdict>(value) {
                return verdict;
            }
        }
    }
    parse_fallback(raw)
}

fn parse_fallback(raw: &str) -> Verdict {
    let roast = if raw.is_empty() {
        HOUSE_WINS_RETRY.to_string()
    } else {
        raw.chars().take(ROAST_EXCERPT_CHARS).collect()
    };
    Verdict {
        verdict: Ruling::Denied,
        reasoning: TECHNICAL_DIFFICULTIES.to_string(),
        roast,
        jury_votes: JuryVotes::all_unknown(),
    }
}

/// The deliberation itself fell over. Distinct from a parse failure: the
/// votes read ERROR instead of UNKNOWN.
pub fn error_verdict(err: &anyhow::Error) -> Verdict {
    Verdict {
        verdict: Ruling::Denied,
        reasoning: format!("Court error: {err:#}"),
        roast: MACHINES_AGAINST_YOU.to_string(),
        jury_votes: JuryVotes::all_error(),
    }
}
