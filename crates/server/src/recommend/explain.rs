//! Deterministic justification strings.
//!
//! Assembled from fixed ingredients in a fixed order: the matched
//! capability phrase, pricing-constraint satisfaction, strength thresholds
//! and the tool's first listed feature. At most three reasons are joined;
//! when none apply the fallback is a generic category statement, so the
//! string is never empty.

use toolscout_core::{ParsedIntent, PricingPreference, Tool, WorkflowStepTemplate};

/// Strength above this reads as "best in class".
const BEST_IN_CLASS_THRESHOLD: f64 = 9.5;
/// Strength above this reads as "very high quality".
const HIGH_QUALITY_THRESHOLD: f64 = 9.0;
/// Maximum number of reasons in one justification.
const MAX_REASONS: usize = 3;

/// Why this tool fits the intent (simple recommendation path).
#[must_use]
pub fn explain_recommendation(tool: &Tool, intent: &ParsedIntent) -> String {
    let matched = first_match(&intent.keywords, &tool.best_for);
    assemble(tool, intent, matched)
}

/// Why this tool fits one workflow step.
#[must_use]
pub fn explain_step_choice(tool: &Tool, step: &WorkflowStepTemplate, intent: &ParsedIntent) -> String {
    let matched = first_match(&step.capabilities, &tool.best_for);
    assemble(tool, intent, matched)
}

fn assemble(tool: &Tool, intent: &ParsedIntent, matched: Option<&str>) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if let Some(phrase) = matched {
        reasons.push(format!("expert at \"{phrase}\""));
    }

    if intent.constraints.pricing == Some(PricingPreference::Free) && tool.pricing.free {
        reasons.push("usable for free".to_string());
    }

    if tool.strength > BEST_IN_CLASS_THRESHOLD {
        reasons.push("best in class".to_string());
    } else if tool.strength > HIGH_QUALITY_THRESHOLD {
        reasons.push("very high quality".to_string());
    }

    if let Some(feature) = tool.features.first() {
        reasons.push(format!("offers {feature}"));
    }

    if reasons.is_empty() {
        reasons.push(format!(
            "a strong option in the {} category",
            tool.category
        ));
    }

    reasons.truncate(MAX_REASONS);
    format!("{}.", reasons.join(", "))
}

/// First phrase with a bidirectional substring match against `best_for`.
fn first_match<'a>(phrases: &'a [String], best_for: &[String]) -> Option<&'a str> {
    phrases.iter().map(String::as_str).find(|phrase| {
        let phrase = phrase.to_lowercase();
        best_for.iter().any(|entry| {
            let entry = entry.to_lowercase();
            entry.contains(&phrase) || phrase.contains(&entry)
        })
    })
}
