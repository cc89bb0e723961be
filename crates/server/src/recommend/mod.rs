//! The intent-to-recommendation pipeline.
//!
//! Control flow: query -> intent analysis (cache -> parser -> reasoning
//! service -> keyword fallback) -> branch on complexity. Multi-step intents
//! try the workflow path (template match + per-step tool assignment) and
//! fall back to the simple path when no template scores high enough; the
//! simple path ranks the catalog and explains the winner. The worst case is
//! a generic, non-personalized recommendation - never an empty response.

pub mod explain;
pub mod heuristics;
pub mod intent;
pub mod keywords;
pub mod scoring;
pub mod workflow;

use tracing::{debug, instrument};

use toolscout_core::{
    Complexity, IntentError, ParsedIntent, PricingPreference, RankedTool, Recommendation, Tool,
};

use crate::catalog::ToolCatalog;
use crate::db::KeyValueStore;

use explain::explain_recommendation;
use scoring::{ScoreOptions, ranked_tools_by_intent};
use workflow::{FallbackSlot, fallback_recommendation, find_matching_template, generate_workflow};

pub use intent::{IntentAnalyzer, IntentCache, IntentParser};

/// Maximum number of alternatives in a simple recommendation.
const MAX_ALTERNATIVES: usize = 3;

/// Options for one recommendation request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendOptions {
    /// Hard pricing filter supplied by the caller.
    pub pricing_filter: Option<PricingPreference>,
}

/// The single recommendation entry point consumed by the route layer.
#[derive(Clone)]
pub struct Recommender<S: KeyValueStore> {
    catalog: ToolCatalog<S>,
    analyzer: IntentAnalyzer<S>,
}

impl<S: KeyValueStore> Recommender<S> {
    /// Create a recommender from its catalog and intent analyzer.
    #[must_use]
    pub const fn new(catalog: ToolCatalog<S>, analyzer: IntentAnalyzer<S>) -> Self {
        Self { catalog, analyzer }
    }

    /// Recommend tools (or a workflow) for a free-text query.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError`] only when intent analysis itself reached a
    /// terminal outcome; every later stage degrades instead of failing.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn recommend(
        &self,
        query: &str,
        options: RecommendOptions,
    ) -> Result<Recommendation, IntentError> {
        let intent = self.analyzer.analyze(query).await?;
        let tools = self.catalog.all().await;
        Ok(build_recommendation(&tools, &intent, query, options))
    }
}

/// Build the response from an already-analyzed intent.
///
/// Pure given the tool list, which makes the branch logic testable without
/// a store or network.
fn build_recommendation(
    tools: &[Tool],
    intent: &ParsedIntent,
    query: &str,
    options: RecommendOptions,
) -> Recommendation {
    if intent.complexity == Complexity::MultiStep {
        if let Some(template) = find_matching_template(query, &intent.workflow_hints) {
            debug!(template = %template.id, "Matched workflow template");
            return Recommendation::Workflow(generate_workflow(tools, template, intent, query));
        }
        debug!("No workflow template matched, falling back to simple path");
    }

    let ranked = ranked_tools_by_intent(
        tools,
        intent,
        &ScoreOptions {
            pricing_filter: options.pricing_filter,
        },
    );

    let mut ranked = ranked.into_iter();
    ranked.next().map_or_else(
        || generic_recommendation(intent),
        |mut top| {
            top.reasoning = explain_recommendation(&top.tool, intent);
            Recommendation::Simple {
                category: intent.primary_category,
                tool: top,
                alternatives: ranked.take(MAX_ALTERNATIVES).collect(),
            }
        },
    )
}

/// Last-resort recommendation when no catalog tool survived filtering.
fn generic_recommendation(intent: &ParsedIntent) -> Recommendation {
    let primary = fallback_recommendation(intent.primary_category, FallbackSlot::Primary);
    let alternative = fallback_recommendation(intent.primary_category, FallbackSlot::Alternative);

    Recommendation::Simple {
        category: intent.primary_category,
        tool: RankedTool {
            tool: primary.tool,
            score: primary.score,
            reasoning: primary.reasoning,
        },
        alternatives: vec![RankedTool {
            tool: alternative.tool,
            score: alternative.score,
            reasoning: String::new(),
        }],
    }
}
