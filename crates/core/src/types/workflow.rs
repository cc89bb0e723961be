//! Workflow templates and generated workflows.
//!
//! Templates are static, hand-authored data loaded once at startup; a
//! [`GeneratedWorkflow`] is the runtime result of matching a template to a
//! query and assigning tools to each step. Generated workflows are created
//! once per request and never persisted.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tool::Tool;

/// Media types a step can accept or produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Text,
    Image,
    Audio,
    Video,
    Data,
    Code,
    Document,
}

/// Complexity tier of a workflow template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowComplexity {
    Simple,
    Medium,
    Complex,
}

/// One step of a hand-authored workflow template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepTemplate {
    /// 1-based position within the template.
    pub order: u8,
    pub name: String,
    pub description: String,
    /// Catalog category tools for this step are drawn from.
    pub category: Category,
    pub input_type: MediaType,
    pub output_type: MediaType,
    /// Capability phrases used to re-score tools for this step.
    pub capabilities: Vec<String>,
    /// Ready-to-adapt prompt for the assigned tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    /// Steps a user can skip without breaking the workflow.
    #[serde(default)]
    pub optional: bool,
}

/// A hand-authored multi-step workflow. Immutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    /// Stable identifier, e.g. `comic-creation`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Phrases that trigger this workflow during matching.
    pub triggers: Vec<String>,
    /// Ordered steps.
    pub steps: Vec<WorkflowStepTemplate>,
    pub complexity: WorkflowComplexity,
    /// Human estimate, e.g. "3-6 hours".
    pub estimated_duration: String,
    /// Tags matched against intent workflow hints.
    pub tags: Vec<String>,
}

/// A tool assigned to one workflow step, with score and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepToolRecommendation {
    pub tool: Tool,
    pub score: f64,
    pub reasoning: String,
}

/// One generated step: template metadata plus primary/alternative tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepRecommendation {
    pub order: u8,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub primary: StepToolRecommendation,
    pub alternative: StepToolRecommendation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_suggestion: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// The runtime result of matching a template and assigning tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkflow {
    pub template_id: String,
    pub template_name: String,
    /// The user's original query.
    pub user_query: String,
    pub steps: Vec<WorkflowStepRecommendation>,
    pub total_steps: usize,
    pub estimated_duration: String,
    pub complexity: WorkflowComplexity,
    /// Deduplicated categories touched by the steps, in step order.
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_template_optional_fields() {
        let yaml = r"
order: 1
name: Write the script
description: Draft the narration script
category: text
inputType: text
outputType: text
capabilities:
  - script writing
";
        let step: WorkflowStepTemplate = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(step.order, 1);
        assert_eq!(step.category, Category::Text);
        assert_eq!(step.prompt_template, None);
        assert!(step.tips.is_empty());
        assert!(!step.optional);
    }

    #[test]
    fn test_media_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&MediaType::Document).expect("serialize"),
            "\"document\""
        );
    }
}
