//! The recommendation result returned to callers.
//!
//! A request resolves to either a single-tool recommendation with
//! alternatives, or a generated multi-step workflow. Intent failures are
//! carried separately as [`super::intent::IntentError`].

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tool::Tool;
use super::workflow::GeneratedWorkflow;

/// A tool together with its computed score and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTool {
    pub tool: Tool,
    pub score: f64,
    /// Why this tool fits the request. Empty for alternatives.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reasoning: String,
}

/// Result of the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recommendation {
    /// One main tool plus up to three alternatives.
    #[serde(rename_all = "camelCase")]
    Simple {
        category: Category,
        tool: RankedTool,
        alternatives: Vec<RankedTool>,
    },
    /// An ordered multi-step plan with per-step tool assignment.
    Workflow(GeneratedWorkflow),
}

impl Recommendation {
    /// The primary category the recommendation was made for.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Simple { category, .. } => *category,
            Self::Workflow(workflow) => {
                workflow.categories.first().copied().unwrap_or(Category::Text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tool::Pricing;

    fn sample_tool() -> Tool {
        Tool {
            name: "Example".to_string(),
            category: Category::Visual,
            description: "desc".to_string(),
            url: "https://example.com".to_string(),
            pricing: Pricing::default(),
            best_for: Vec::new(),
            strength: 9.0,
            features: Vec::new(),
            last_updated: None,
            deprecated: false,
        }
    }

    #[test]
    fn test_simple_recommendation_tagged_serde() {
        let rec = Recommendation::Simple {
            category: Category::Visual,
            tool: RankedTool {
                tool: sample_tool(),
                score: 9.5,
                reasoning: "matches the request".to_string(),
            },
            alternatives: Vec::new(),
        };

        let json = serde_json::to_value(&rec).expect("serialize");
        assert_eq!(json["type"], "simple");
        assert_eq!(json["category"], "visual");
        assert_eq!(rec.category(), Category::Visual);
    }
}
