//! Tool scoring and ranking.
//!
//! A hand-tuned additive heuristic, not a statistical model: the static
//! strength prior plus bonuses for keyword/capability affinity and for
//! alignment with the pricing, expertise and speed constraints. The only
//! negative adjustment is the paid-only penalty under a free constraint, so
//! a tool's score never drops more than 2 below its strength.
//!
//! Ties are possible and are broken by catalog order - the sort is stable.

use toolscout_core::{
    ExpertiseLevel, ParsedIntent, PricingPreference, RankedTool, SpeedPreference, Tool,
    WorkflowStepTemplate,
};

/// Bonus per intent keyword matching a tool capability.
const KEYWORD_BONUS: f64 = 0.5;
/// Bonus per step capability matching a `best_for` phrase.
const STEP_CAPABILITY_BONUS: f64 = 1.5;
/// Bonus per step capability matching a feature phrase.
const STEP_FEATURE_BONUS: f64 = 0.5;

/// Scoring options supplied by the caller alongside the intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    /// Explicit pricing filter from the request, taking precedence over the
    /// intent's inferred pricing constraint.
    pub pricing_filter: Option<PricingPreference>,
}

/// Score a tool against an intent.
///
/// Base score is the tool's static strength; every adjustment is additive.
#[must_use]
pub fn score_tool(tool: &Tool, intent: &ParsedIntent, options: &ScoreOptions) -> f64 {
    let mut score = tool.strength;

    for keyword in &intent.keywords {
        if matches_any(keyword, &tool.best_for) || matches_any(keyword, &tool.features) {
            score += KEYWORD_BONUS;
        }
    }

    let pricing_preference = options.pricing_filter.or(intent.constraints.pricing);
    score += constraint_bonus(tool, pricing_preference, intent);

    score
}

/// Score a tool for one workflow step.
///
/// Same additive scheme as [`score_tool`], seeded with the step's
/// capability list instead of the global keywords, and always using the
/// overall intent's constraints.
#[must_use]
pub fn score_tool_for_step(
    tool: &Tool,
    step: &WorkflowStepTemplate,
    intent: &ParsedIntent,
) -> f64 {
    let mut score = tool.strength;

    for capability in &step.capabilities {
        if matches_any(capability, &tool.best_for) {
            score += STEP_CAPABILITY_BONUS;
        }
        if contained_in_any(capability, &tool.features) {
            score += STEP_FEATURE_BONUS;
        }
    }

    score += constraint_bonus(tool, intent.constraints.pricing, intent);

    score
}

/// Filter the catalog by the intent's category and the pricing filter, then
/// sort descending by score.
///
/// Category filtering falls back to the whole catalog when the primary
/// category matches nothing. An empty return value is a valid terminal
/// state ("no recommendation"), never an error.
#[must_use]
pub fn ranked_tools_by_intent(
    tools: &[Tool],
    intent: &ParsedIntent,
    options: &ScoreOptions,
) -> Vec<RankedTool> {
    let mut pool: Vec<&Tool> = tools
        .iter()
        .filter(|tool| tool.category == intent.primary_category)
        .collect();
    if pool.is_empty() {
        pool = tools.iter().collect();
    }

    if let Some(filter) = options.pricing_filter {
        pool.retain(|tool| match filter {
            PricingPreference::Free => tool.pricing.has_free_tier(),
            PricingPreference::Paid => tool.pricing.has_paid_tier(),
            PricingPreference::Freemium => tool.pricing.freemium,
        });
    }

    let mut ranked: Vec<RankedTool> = pool
        .into_iter()
        .map(|tool| RankedTool {
            tool: tool.clone(),
            score: score_tool(tool, intent, options),
            reasoning: String::new(),
        })
        .collect();

    // Stable sort: equal scores keep catalog order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// Shared pricing/expertise/speed alignment bonus.
fn constraint_bonus(tool: &Tool, pricing: Option<PricingPreference>, intent: &ParsedIntent) -> f64 {
    let mut bonus = 0.0;

    match pricing {
        Some(PricingPreference::Free) => {
            if tool.pricing.free {
                bonus += 2.0;
            } else if tool.pricing.freemium {
                bonus += 1.0;
            } else if tool.pricing.paid_only {
                bonus -= 2.0;
            }
        }
        Some(PricingPreference::Paid) => {
            if tool.pricing.paid_only || tool.pricing.freemium {
                bonus += 0.5;
            }
        }
        Some(PricingPreference::Freemium) | None => {}
    }

    if intent.constraints.expertise == Some(ExpertiseLevel::Beginner) {
        if tool.pricing.free {
            bonus += 0.5;
        }
        if tool.strength < 9.0 {
            bonus += 0.3;
        }
    }

    if intent.constraints.speed == Some(SpeedPreference::Fast)
        && tool
            .features
            .iter()
            .any(|f| f.to_lowercase().contains("fast") || f.to_lowercase().contains("quick"))
    {
        bonus += 0.5;
    }

    bonus
}

/// Bidirectional substring match between a phrase and any entry of a list.
fn matches_any(phrase: &str, entries: &[String]) -> bool {
    let phrase = phrase.to_lowercase();
    entries.iter().any(|entry| {
        let entry = entry.to_lowercase();
        entry.contains(&phrase) || phrase.contains(&entry)
    })
}

/// One-directional: an entry of the list contains the phrase.
fn contained_in_any(phrase: &str, entries: &[String]) -> bool {
    let phrase = phrase.to_lowercase();
    entries
        .iter()
        .any(|entry| entry.to_lowercase().contains(&phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscout_core::{Category, Complexity, IntentConstraints, Pricing};

    fn base_intent() -> ParsedIntent {
        ParsedIntent {
            primary_category: Category::Visual,
            secondary_categories: Vec::new(),
            confidence: 0.9,
            user_goal: "logo design".to_string(),
            constraints: IntentConstraints {
                pricing: Some(PricingPreference::Free),
                speed: Some(SpeedPreference::Fast),
                expertise: Some(ExpertiseLevel::Beginner),
                language: None,
            },
            keywords: vec![
                "logo".to_string(),
                "design".to_string(),
                "branding".to_string(),
            ],
            reasoning: "user wants a free and quick logo tool".to_string(),
            complexity: Complexity::Simple,
            estimated_steps: None,
            workflow_hints: Vec::new(),
        }
    }

    fn tool(name: &str, pricing: Pricing, best_for: &[&str], strength: f64, features: &[&str]) -> Tool {
        Tool {
            name: name.to_string(),
            category: Category::Visual,
            description: format!("{name} description"),
            url: "https://example.com".to_string(),
            pricing,
            best_for: best_for.iter().map(ToString::to_string).collect(),
            strength,
            features: features.iter().map(ToString::to_string).collect(),
            last_updated: None,
            deprecated: false,
        }
    }

    fn sample_tools() -> Vec<Tool> {
        vec![
            tool(
                "Free Logo Pro",
                Pricing {
                    free: true,
                    ..Pricing::default()
                },
                &["logo design", "branding"],
                8.2,
                &["fast generation"],
            ),
            tool(
                "Paid Visual Suite",
                Pricing {
                    paid_only: true,
                    ..Pricing::default()
                },
                &["3d rendering"],
                9.5,
                &["high quality"],
            ),
            tool(
                "Freemium Graphics",
                Pricing {
                    freemium: true,
                    ..Pricing::default()
                },
                &["branding", "illustration"],
                8.9,
                &["fast preview"],
            ),
        ]
    }

    #[test]
    fn test_rewards_similarity_and_pricing_alignment() {
        let intent = base_intent();
        let options = ScoreOptions {
            pricing_filter: Some(PricingPreference::Free),
        };
        let tools = sample_tools();

        let close_match = score_tool(&tools[0], &intent, &options);
        let distant_paid = score_tool(&tools[1], &intent, &options);

        assert!(
            close_match > distant_paid,
            "tool matching keywords and free pricing should score higher \
             ({close_match} vs {distant_paid})"
        );
    }

    #[test]
    fn test_score_never_drops_more_than_two_below_strength() {
        // The paid-only penalty is the only negative adjustment, bounded at 2.
        let intent = base_intent();
        for tool in sample_tools() {
            for options in [
                ScoreOptions::default(),
                ScoreOptions {
                    pricing_filter: Some(PricingPreference::Free),
                },
                ScoreOptions {
                    pricing_filter: Some(PricingPreference::Paid),
                },
            ] {
                let score = score_tool(&tool, &intent, &options);
                assert!(
                    score >= tool.strength - 2.0,
                    "{} scored {score}, below strength {} - 2",
                    tool.name,
                    tool.strength
                );
            }
        }
    }

    #[test]
    fn test_ranker_filters_pricing_and_sorts() {
        let intent = base_intent();
        let options = ScoreOptions {
            pricing_filter: Some(PricingPreference::Free),
        };

        let ranked = ranked_tools_by_intent(&sample_tools(), &intent, &options);

        assert_eq!(ranked[0].tool.name, "Free Logo Pro");
        assert!(
            ranked
                .iter()
                .all(|r| r.tool.pricing.free || r.tool.pricing.freemium)
        );
    }

    #[test]
    fn test_ranker_paid_filter() {
        let intent = base_intent();
        let options = ScoreOptions {
            pricing_filter: Some(PricingPreference::Paid),
        };

        let ranked = ranked_tools_by_intent(&sample_tools(), &intent, &options);

        assert!(
            ranked
                .iter()
                .all(|r| r.tool.pricing.paid_only || r.tool.pricing.freemium)
        );
    }

    #[test]
    fn test_ranker_returns_empty_not_error() {
        let mut intent = base_intent();
        intent.primary_category = Category::Audio;

        // Paid-only catalog under a free filter leaves nothing.
        let tools = vec![tool(
            "Paid Only",
            Pricing {
                paid_only: true,
                ..Pricing::default()
            },
            &[],
            9.0,
            &[],
        )];
        let ranked = ranked_tools_by_intent(
            &tools,
            &intent,
            &ScoreOptions {
                pricing_filter: Some(PricingPreference::Free),
            },
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ranker_falls_back_to_all_tools_on_empty_category() {
        let mut intent = base_intent();
        intent.primary_category = Category::Research;
        intent.constraints = IntentConstraints::default();
        intent.keywords.clear();

        let ranked = ranked_tools_by_intent(&sample_tools(), &intent, &ScoreOptions::default());
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut intent = base_intent();
        intent.constraints = IntentConstraints::default();
        intent.keywords.clear();

        let twins = vec![
            tool("First Twin", Pricing::default(), &[], 8.0, &[]),
            tool("Second Twin", Pricing::default(), &[], 8.0, &[]),
        ];
        let ranked = ranked_tools_by_intent(&twins, &intent, &ScoreOptions::default());

        assert_eq!(ranked[0].tool.name, "First Twin");
        assert_eq!(ranked[1].tool.name, "Second Twin");
    }

    #[test]
    fn test_step_scoring_weighs_capabilities_higher() {
        let intent = base_intent();
        let step = WorkflowStepTemplate {
            order: 1,
            name: "Character Design".to_string(),
            description: "desc".to_string(),
            category: Category::Visual,
            input_type: toolscout_core::MediaType::Text,
            output_type: toolscout_core::MediaType::Image,
            capabilities: vec!["branding".to_string()],
            prompt_template: None,
            tips: Vec::new(),
            optional: false,
        };

        let tools = sample_tools();
        let with_capability = score_tool_for_step(&tools[0], &step, &intent);
        let without_capability = score_tool_for_step(&tools[1], &step, &intent);

        // 8.2 + 1.5 capability + free-pricing bonuses beats 9.5 - 2 penalty.
        assert!(with_capability > without_capability);
    }
}
