use serde::Deserialize;

use crate::domain::recommendation::entities::RecommendationItem;

const FALLBACK_ID: &str = "1";
const FALLBACK_NAME: &str = "Error in recommendation";
const FALLBACK_DESCRIPTION: &str = "Failed to generate structured recommendations";

/// Outcome of decoding the model output: either the items the model actually
/// produced, or the fixed degraded payload plus the reason decoding failed.
/// The degraded arm is a deliberate design decision, not an error path — the
/// pipeline always returns at least one item.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisOutcome {
    Generated(Vec<RecommendationItem>),
    Degraded {
        items: Vec<RecommendationItem>,
        reason: String,
    },
}

impl SynthesisOutcome {
    pub fn items(&self) -> &[RecommendationItem] {
        match self {
            Self::Generated(items) | Self::Degraded { items, .. } => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecommendationPayload {
    recommendations: Vec<RecommendationItem>,
}

/// Strips a surrounding markdown code fence, if present: exactly the first
/// and the last line are dropped before re-trimming.
fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() >= 2 {
            return lines[1..lines.len() - 1].join("\n").trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Decodes the model output into recommendation items. Item contents pass
/// through verbatim; nothing checks that there are exactly three, that ids
/// are unique, or that fields are non-empty.
pub fn parse_model_output(raw: &str) -> SynthesisOutcome {
    let cleaned = strip_code_fence(raw);

    match serde_json::from_str::<RecommendationPayload>(&cleaned) {
        Ok(payload) => SynthesisOutcome::Generated(payload.recommendations),
        Err(e) => {
            tracing::error!("Failed to parse model output: {e}; raw: {raw:?}; cleaned: {cleaned:?}");
            SynthesisOutcome::Degraded {
                items: vec![RecommendationItem {
                    id: FALLBACK_ID.to_string(),
                    name: FALLBACK_NAME.to_string(),
                    description: FALLBACK_DESCRIPTION.to_string(),
                }],
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"recommendations":[
        {"id":"1","name":"Pho","description":"Warming broth for a cool evening"},
        {"id":"2","name":"Ramen","description":"Comforting and social"},
        {"id":"3","name":"Hot pot","description":"Interactive shared dining"}
    ]}"#;

    #[test]
    fn valid_json_passes_through_verbatim() {
        let outcome = parse_model_output(VALID);

        let SynthesisOutcome::Generated(items) = outcome else {
            panic!("expected generated outcome");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Pho");
        assert_eq!(items[0].description, "Warming broth for a cool evening");
        assert_eq!(items[2].name, "Hot pot");
    }

    #[test]
    fn fenced_json_is_unwrapped_before_decoding() {
        let fenced = format!("```json\n{VALID}\n```");
        let outcome = parse_model_output(&fenced);

        assert!(matches!(outcome, SynthesisOutcome::Generated(ref items) if items.len() == 3));
    }

    #[test]
    fn fence_stripping_drops_exactly_first_and_last_line() {
        let fenced = "```\n{\"recommendations\":[{\"id\":\"1\",\"name\":\"Toast\",\"description\":\"Simple\"}]}\n```";
        let outcome = parse_model_output(fenced);

        let SynthesisOutcome::Generated(items) = outcome else {
            panic!("expected generated outcome");
        };
        assert_eq!(items[0].name, "Toast");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let padded = format!("\n\n  {VALID}  \n");
        assert!(matches!(
            parse_model_output(&padded),
            SynthesisOutcome::Generated(_)
        ));
    }

    #[test]
    fn unparsable_output_degrades_to_fixed_single_item() {
        let outcome = parse_model_output("I'm sorry, I can't help with that.");

        let SynthesisOutcome::Degraded { items, reason } = outcome else {
            panic!("expected degraded outcome");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Error in recommendation");
        assert_eq!(
            items[0].description,
            "Failed to generate structured recommendations"
        );
        assert!(!reason.is_empty());
    }

    #[test]
    fn valid_json_of_wrong_shape_degrades() {
        let outcome = parse_model_output(r#"{"items":["pho","ramen"]}"#);
        assert!(matches!(outcome, SynthesisOutcome::Degraded { .. }));
    }

    #[test]
    fn item_count_is_not_enforced() {
        // Trust boundary with the model: more or fewer than 3 items pass
        // through untouched.
        let two = r#"{"recommendations":[
            {"id":"1","name":"Congee","description":"Gentle"},
            {"id":"2","name":"Soup","description":"Light"}
        ]}"#;
        let outcome = parse_model_output(two);
        assert!(matches!(outcome, SynthesisOutcome::Generated(ref items) if items.len() == 2));
    }

    #[test]
    fn outcome_items_accessor_covers_both_arms() {
        assert_eq!(parse_model_output(VALID).items().len(), 3);
        assert_eq!(parse_model_output("not json").items().len(), 1);
    }
}
