//! Structured interpretation of a user query.
//!
//! The intent parser returns `Result<ParsedIntent, IntentError>`: the error
//! arm is a terminal outcome carrying user-facing guidance, not an
//! infrastructure fault. Callers must discriminate on [`IntentErrorCode`]
//! before using intent fields.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// How many distinct stages of work the request spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    /// A single tool covers the request.
    #[default]
    Simple,
    /// The request decomposes into an ordered workflow of tools.
    MultiStep,
}

/// Pricing preference extracted from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingPreference {
    Free,
    Freemium,
    Paid,
}

/// Speed/quality trade-off preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreference {
    Fast,
    Quality,
}

/// Self-described expertise of the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Beginner,
    Advanced,
}

/// Soft constraints captured from the query. All optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IntentConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<SpeedPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<ExpertiseLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The structured interpretation of one query.
///
/// Created fresh per query, optionally cached keyed by normalized query
/// text, never mutated after creation.
///
/// Invariant: `complexity == MultiStep` implies `estimated_steps >= 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    /// The dominant category of the request.
    pub primary_category: Category,
    /// Additional categories the request touches.
    #[serde(default)]
    pub secondary_categories: Vec<Category>,
    /// Parser confidence, 0-1.
    pub confidence: f64,
    /// The request restated as a goal.
    pub user_goal: String,
    /// Soft constraints (pricing, speed, expertise, language).
    #[serde(default)]
    pub constraints: IntentConstraints,
    /// Keywords extracted or echoed from the query.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-text justification. A fallback-derived intent mentions
    /// "fallback" here, which the orchestrator uses to skip caching.
    pub reasoning: String,
    /// Whether the request is a single-tool ask or a workflow.
    #[serde(default)]
    pub complexity: Complexity,
    /// Estimated workflow length when multi-step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_steps: Option<u8>,
    /// Free-text stage names hinting at workflow structure.
    #[serde(default)]
    pub workflow_hints: Vec<String>,
}

impl ParsedIntent {
    /// Whether this intent was synthesized by a keyword fallback rather than
    /// the reasoning service.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.reasoning.to_lowercase().contains("fallback")
    }
}

/// Terminal parsing outcome distinct from a parsed intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentErrorCode {
    /// The request was too ambiguous to act on.
    LowConfidence,
    /// The reasoning service returned a malformed body.
    ParseError,
    /// The reasoning service was unreachable and keyword fallback found
    /// nothing either.
    ApiError,
}

/// User-facing parsing failure with remediation suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentError {
    /// Discriminant tag - callers branch on this, never on structure.
    pub code: IntentErrorCode,
    /// User-facing message.
    pub message: String,
    /// Example rephrasings or remediation steps.
    #[serde(default)]
    pub suggestions: Vec<String>,
}
