//! Workflow generation: template steps to concrete tool assignments.
//!
//! Every step of the matched template is re-scored against the
//! category-filtered catalog using the step's capability list; the two best
//! tools become primary and alternative. A step is never left without a
//! recommendation: when its category has no (non-deprecated) tools at all,
//! a fixed pair of general-purpose assistants stands in.

use toolscout_core::{
    Category, GeneratedWorkflow, ParsedIntent, Pricing, StepToolRecommendation, Tool,
    WorkflowStepRecommendation, WorkflowStepTemplate, WorkflowTemplate,
};

use super::super::explain::explain_step_choice;
use super::super::scoring::score_tool_for_step;

/// Fixed score reported for the generic fallback assistants.
const FALLBACK_SCORE: f64 = 8.0;

/// Build a complete workflow from a matched template.
///
/// Pure given the tool list; the caller fetches the catalog once and passes
/// it in.
#[must_use]
pub fn generate_workflow(
    tools: &[Tool],
    template: &WorkflowTemplate,
    intent: &ParsedIntent,
    user_query: &str,
) -> GeneratedWorkflow {
    let steps: Vec<WorkflowStepRecommendation> = template
        .steps
        .iter()
        .map(|step| assign_step(tools, step, intent))
        .collect();

    let mut categories: Vec<Category> = Vec::new();
    for step in &template.steps {
        if !categories.contains(&step.category) {
            categories.push(step.category);
        }
    }

    GeneratedWorkflow {
        template_id: template.id.clone(),
        template_name: template.name.clone(),
        user_query: user_query.to_string(),
        total_steps: steps.len(),
        steps,
        estimated_duration: template.estimated_duration.clone(),
        complexity: template.complexity,
        categories,
    }
}

/// Pick primary and alternative tools for one step.
fn assign_step(
    tools: &[Tool],
    step: &WorkflowStepTemplate,
    intent: &ParsedIntent,
) -> WorkflowStepRecommendation {
    let mut scored: Vec<(&Tool, f64)> = tools
        .iter()
        .filter(|tool| tool.category == step.category && !tool.deprecated)
        .map(|tool| (tool, score_tool_for_step(tool, step, intent)))
        .collect();

    // Stable sort keeps catalog order on ties.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranked = scored.into_iter();
    let primary = ranked.next().map_or_else(
        || fallback_recommendation(step.category, FallbackSlot::Primary),
        |(tool, score)| StepToolRecommendation {
            tool: tool.clone(),
            score,
            reasoning: explain_step_choice(tool, step, intent),
        },
    );
    let alternative = ranked.next().map_or_else(
        || fallback_recommendation(step.category, FallbackSlot::Alternative),
        |(tool, score)| StepToolRecommendation {
            tool: tool.clone(),
            score,
            reasoning: explain_step_choice(tool, step, intent),
        },
    );

    WorkflowStepRecommendation {
        order: step.order,
        name: step.name.clone(),
        description: step.description.clone(),
        category: step.category,
        primary,
        alternative,
        prompt_suggestion: step.prompt_template.clone(),
        tips: step.tips.clone(),
    }
}

/// Which slot a fallback assistant fills; primary and alternative use
/// different assistants so the user still gets two options.
pub(crate) enum FallbackSlot {
    Primary,
    Alternative,
}

/// Generic assistant recommendation for a step with no catalog coverage.
///
/// Also used by the simple path when no catalog tool survives ranking.
pub(crate) fn fallback_recommendation(
    category: Category,
    slot: FallbackSlot,
) -> StepToolRecommendation {
    let (name, url) = match slot {
        FallbackSlot::Primary => ("ChatGPT (GPT-5)", "https://chat.openai.com"),
        FallbackSlot::Alternative => ("Claude AI (Claude 4)", "https://claude.ai"),
    };

    StepToolRecommendation {
        tool: Tool {
            name: name.to_string(),
            category,
            description: "General-purpose AI assistant".to_string(),
            url: url.to_string(),
            pricing: Pricing {
                free: true,
                freemium: true,
                paid_only: false,
                starting_price: Some(rust_decimal::Decimal::new(20, 0)),
                currency: "USD".to_string(),
            },
            best_for: vec![
                "general purpose".to_string(),
                "content creation".to_string(),
                "writing".to_string(),
            ],
            strength: 9.5,
            features: Vec::new(),
            last_updated: None,
            deprecated: false,
        },
        score: FALLBACK_SCORE,
        reasoning:
            "No specialized tool is available for this step; a general-purpose assistant is recommended."
                .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_tools;
    use crate::recommend::workflow::templates::template_by_id;
    use toolscout_core::{Complexity, IntentConstraints};

    fn multi_step_intent() -> ParsedIntent {
        ParsedIntent {
            primary_category: Category::Visual,
            secondary_categories: vec![Category::Text],
            confidence: 0.9,
            user_goal: "create a comic book".to_string(),
            constraints: IntentConstraints::default(),
            keywords: vec!["comic".to_string()],
            reasoning: "multi-stage creative project".to_string(),
            complexity: Complexity::MultiStep,
            estimated_steps: Some(5),
            workflow_hints: vec!["comic".to_string()],
        }
    }

    #[test]
    fn test_generated_workflow_covers_every_step() {
        let template = template_by_id("comic-creation").expect("template exists");
        let workflow = generate_workflow(
            seed_tools(),
            template,
            &multi_step_intent(),
            "I want to make a comic book",
        );

        assert_eq!(workflow.steps.len(), template.steps.len());
        assert_eq!(workflow.total_steps, template.steps.len());
        assert_eq!(workflow.template_id, "comic-creation");

        for step in &workflow.steps {
            assert!(!step.primary.tool.name.is_empty());
            assert!(!step.alternative.tool.name.is_empty());
            assert!(!step.primary.reasoning.is_empty());
        }
    }

    #[test]
    fn test_categories_are_deduplicated_in_step_order() {
        let template = template_by_id("comic-creation").expect("template exists");
        let workflow = generate_workflow(seed_tools(), template, &multi_step_intent(), "comic");

        // comic-creation: text, text, visual, visual, visual
        assert_eq!(workflow.categories, vec![Category::Text, Category::Visual]);
    }

    #[test]
    fn test_step_tools_come_from_step_category() {
        let template = template_by_id("video-production").expect("template exists");
        let workflow = generate_workflow(seed_tools(), template, &multi_step_intent(), "video");

        for (step_template, step) in template.steps.iter().zip(&workflow.steps) {
            assert_eq!(step.primary.tool.category, step_template.category);
        }
    }

    #[test]
    fn test_empty_category_gets_fallback_pair() {
        // No tools at all: every step falls back to the generic assistants.
        let template = template_by_id("comic-creation").expect("template exists");
        let workflow = generate_workflow(&[], template, &multi_step_intent(), "comic");

        let first = workflow.steps.first().expect("has steps");
        assert_eq!(first.primary.tool.name, "ChatGPT (GPT-5)");
        assert_eq!(first.alternative.tool.name, "Claude AI (Claude 4)");
        assert!((first.primary.score - FALLBACK_SCORE).abs() < f64::EPSILON);
        assert_ne!(first.primary.tool.name, first.alternative.tool.name);
    }

    #[test]
    fn test_single_tool_category_gets_fallback_alternative() {
        let template = template_by_id("comic-creation").expect("template exists");
        let only_text_tool: Vec<Tool> = seed_tools()
            .iter()
            .filter(|t| t.name == "ChatGPT (GPT-5)")
            .cloned()
            .collect();

        let workflow = generate_workflow(&only_text_tool, template, &multi_step_intent(), "comic");
        let first = workflow.steps.first().expect("has steps");

        assert_eq!(first.primary.tool.name, "ChatGPT (GPT-5)");
        assert_eq!(first.alternative.tool.name, "Claude AI (Claude 4)");
    }

    #[test]
    fn test_deprecated_tools_are_skipped() {
        let template = template_by_id("comic-creation").expect("template exists");
        let mut tools = seed_tools().to_vec();
        for tool in &mut tools {
            tool.deprecated = true;
        }

        let workflow = generate_workflow(&tools, template, &multi_step_intent(), "comic");
        let first = workflow.steps.first().expect("has steps");
        assert!((first.primary.score - FALLBACK_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prompt_suggestion_and_tips_carried_over() {
        let template = template_by_id("comic-creation").expect("template exists");
        let workflow = generate_workflow(seed_tools(), template, &multi_step_intent(), "comic");

        let with_prompt = workflow
            .steps
            .iter()
            .find(|s| s.prompt_suggestion.is_some());
        assert!(with_prompt.is_some());

        let with_tips = workflow.steps.iter().find(|s| !s.tips.is_empty());
        assert!(with_tips.is_some());
    }
}
