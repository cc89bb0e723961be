//! Intent parser: query in, structured intent (or terminal error) out.
//!
//! Three paths, tried in order of cost:
//!
//! 1. **Fast path** - a keyword category plus a short query (< 4 words)
//!    skips the reasoning service entirely, trading recall for latency and
//!    cost on already-obvious queries.
//! 2. **Reasoning path** - the `OpenAI` chat call with a strict JSON schema,
//!    bounded by a timeout. The keyword heuristic can override the model's
//!    complexity answer, because the model under-detects multi-step
//!    requests for terse phrasing. Confidence below 0.5 is a terminal
//!    `LOW_CONFIDENCE` outcome.
//! 3. **Failure path** - any reasoning-path error retries keyword
//!    detection; only when that also finds nothing does an `API_ERROR`
//!    reach the caller.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, instrument, warn};

use toolscout_core::{
    Category, Complexity, ExpertiseLevel, IntentConstraints, IntentError, IntentErrorCode,
    ParsedIntent, PricingPreference, SpeedPreference,
};

use crate::openai::{ChatMessage, JsonSchemaFormat, OpenAiError, ReasoningClient, ResponseFormat};

use super::super::heuristics::{QueryType, detect_query_type};
use super::super::keywords::detect_category;

/// Queries shorter than this take the fast path when a keyword category hits.
const FAST_PATH_MAX_WORDS: usize = 4;

/// Deadline for the reasoning call. The timeout drops the in-flight future,
/// which aborts the underlying HTTP request - the losing branch is
/// terminated, not left running.
const REASONING_TIMEOUT: Duration = Duration::from_secs(10);

/// Confidence below this is a terminal low-confidence outcome.
const MIN_CONFIDENCE: f64 = 0.5;

const REASONING_TEMPERATURE: f32 = 0.3;
const REASONING_MAX_TOKENS: u32 = 600;

const SYSTEM_PROMPT: &str = r#"You are Toolscout's intent analyzer. Analyze the user's request and return structured JSON.

**Categories:**
- visual: logos, posters, graphic design, photo editing
- text: blogs, articles, copywriting, content writing
- audio: music, podcasts, voiceovers, sound effects
- research: academic research, paper analysis, literature review
- video: video generation, editing, animation
- data: data analysis, visualization, dashboards, statistics
- code: programming, software development, debugging

**Your tasks:**
1. Detect the user's primary goal (primaryCategory)
2. Note secondary needs if any (secondaryCategories)
3. Capture implicit constraints:
   - "free", "without paying" -> pricing: free
   - "fast", "urgent" -> speed: fast
   - "just starting", "simple" -> expertise: beginner
4. Give a confidence score (0-1)
5. Explain why you chose the category

**WORKFLOW / COMPLEXITY DETECTION (VERY IMPORTANT):**
If the request needs several steps or several tools, mark it multi-step!

Multi-step examples (ALL of these must get complexity "multi-step"):
- "Create a comic book" -> story + script + characters + panels + layout (5 steps)
- "Make a video course" -> script + slides + recording + editing (4 steps)
- "Build a brand identity" -> research + logo + colors + guidelines (4 steps)
- "Produce a podcast" -> script + recording + editing + distribution (4 steps)
- "Design a mobile app" -> UX + design system + screens + prototype (4 steps)

Simple examples (complexity "simple"):
- "Design a logo" -> one step
- "Generate an image" -> one step
- "Write an email" -> one step
- "Edit a voice recording" -> one step

For multi-step requests:
- set complexity to "multi-step"
- set estimatedSteps (2-6)
- list the main stages in workflowHints (e.g. ["story", "visuals", "layout"])
- add every required category to secondaryCategories

**Important rules:**
- Ambiguous queries get low confidence (< 0.5)
- Detect multi-intent cases (e.g. "music for my video" -> primary: video, secondary: audio)
- Mind the context (e.g. "social media content" usually means visual)
- ONLY genuinely complex, multi-stage projects are multi-step!
- Single-tool jobs are SIMPLE!"#;

/// Parses free-text queries into structured intents.
#[derive(Clone)]
pub struct IntentParser {
    reasoning: ReasoningClient,
}

/// Outcome of the reasoning path: either an intent or the terminal
/// low-confidence error. Transport failures are a separate `Err` arm so the
/// caller can distinguish "degrade to keywords" from "surface to the user".
enum ReasoningOutcome {
    Intent(ParsedIntent),
    LowConfidence(IntentError),
}

impl IntentParser {
    /// Create a parser over a reasoning client.
    #[must_use]
    pub const fn new(reasoning: ReasoningClient) -> Self {
        Self { reasoning }
    }

    /// Parse a query into a structured intent.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError`] with code `LOW_CONFIDENCE` when the query is
    /// too ambiguous, or `API_ERROR` when the reasoning service failed and
    /// keyword fallback found no category either. Never panics, never
    /// returns an empty intent.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn parse(&self, query: &str) -> Result<ParsedIntent, IntentError> {
        let query_type = detect_query_type(query);
        let keyword_category = detect_category(query);

        // Fast path: short query with an obvious category skips the model.
        if let Some(category) = keyword_category {
            if query.split_whitespace().count() < FAST_PATH_MAX_WORDS {
                debug!(category = %category, "Fast path: keyword category on short query");
                return Ok(fallback_intent(query, category, &query_type));
            }
        }

        match self.parse_with_reasoning(query, &query_type).await {
            Ok(ReasoningOutcome::Intent(intent)) => Ok(intent),
            Ok(ReasoningOutcome::LowConfidence(error)) => Err(error),
            Err(e) => {
                warn!(error = %e, "Reasoning service failed, retrying keyword detection");
                detect_category(query).map_or_else(
                    || Err(api_error()),
                    |category| Ok(fallback_intent(query, category, &query_type)),
                )
            }
        }
    }

    /// Call the reasoning service and post-process its answer.
    async fn parse_with_reasoning(
        &self,
        query: &str,
        query_type: &QueryType,
    ) -> Result<ReasoningOutcome, OpenAiError> {
        let messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(query)];
        let response_format = ResponseFormat::JsonSchema {
            json_schema: JsonSchemaFormat {
                name: "intent_analysis".to_string(),
                strict: true,
                schema: intent_schema(),
            },
        };

        let completion = tokio::time::timeout(
            REASONING_TIMEOUT,
            self.reasoning.complete(
                messages,
                Some(response_format),
                REASONING_TEMPERATURE,
                REASONING_MAX_TOKENS,
            ),
        )
        .await
        .map_err(|_| OpenAiError::Timeout(REASONING_TIMEOUT.as_secs()))??;

        let mut intent = parse_intent_content(&completion)?;
        apply_heuristic_override(&mut intent, query_type);

        // This check fires regardless of whether the override happened.
        if intent.confidence < MIN_CONFIDENCE {
            return Ok(ReasoningOutcome::LowConfidence(low_confidence_error()));
        }

        debug!(
            complexity = ?intent.complexity,
            steps = ?intent.estimated_steps,
            hints = ?intent.workflow_hints,
            "Reasoning service intent"
        );

        Ok(ReasoningOutcome::Intent(intent))
    }
}

/// Deserialize and normalize the model's JSON content.
///
/// Missing optional arrays default to empty via the intent's serde defaults.
/// Multi-step intents must carry at least 2 estimated steps; anything less
/// is backfilled to 4.
fn parse_intent_content(content: &str) -> Result<ParsedIntent, OpenAiError> {
    let mut intent = serde_json::from_str::<ParsedIntent>(content)
        .map_err(|e| OpenAiError::Parse(format!("intent payload: {e}")))?;

    if intent.complexity == Complexity::MultiStep
        && intent.estimated_steps.is_none_or(|steps| steps < 2)
    {
        intent.estimated_steps = Some(4);
    }

    Ok(intent)
}

/// Force multi-step when the keyword heuristic saw it and the model did not.
///
/// The model's simple/multi-step answer is corrected, never trusted alone:
/// an explicit simple phrase in the query suppresses the override.
fn apply_heuristic_override(intent: &mut ParsedIntent, query_type: &QueryType) {
    if query_type.is_multi_step
        && !query_type.is_explicit_simple
        && intent.complexity == Complexity::Simple
    {
        debug!("Overriding to multi-step based on keyword heuristic");
        intent.complexity = Complexity::MultiStep;
        if intent.estimated_steps.is_none_or(|steps| steps < 2) {
            intent.estimated_steps = Some(4);
        }
        intent
            .workflow_hints
            .extend(query_type.hints.iter().cloned());
    }
}

/// Synthesize an intent from the keyword heuristic alone.
///
/// Used on the fast path and after reasoning failures. The reasoning text
/// mentions "fallback" so the orchestrator knows not to cache it.
fn fallback_intent(query: &str, category: Category, query_type: &QueryType) -> ParsedIntent {
    let is_multi_step = query_type.is_multi_step && !query_type.is_explicit_simple;

    ParsedIntent {
        primary_category: category,
        secondary_categories: Vec::new(),
        confidence: 0.6,
        user_goal: query.to_string(),
        constraints: IntentConstraints {
            pricing: Some(PricingPreference::Free),
            speed: Some(SpeedPreference::Fast),
            expertise: Some(ExpertiseLevel::Beginner),
            language: None,
        },
        keywords: query.split_whitespace().map(ToString::to_string).collect(),
        reasoning: "Keyword fallback used; the reasoning service was skipped or unavailable."
            .to_string(),
        complexity: if is_multi_step {
            Complexity::MultiStep
        } else {
            Complexity::Simple
        },
        estimated_steps: Some(if query_type.is_multi_step { 4 } else { 1 }),
        workflow_hints: query_type.hints.clone(),
    }
}

/// Terminal error for an ambiguous query.
fn low_confidence_error() -> IntentError {
    IntentError {
        code: IntentErrorCode::LowConfidence,
        message: "Could you add a bit more detail? I could not quite work out what you want to do."
            .to_string(),
        suggestions: vec![
            "Example: \"I want to design a logo\"".to_string(),
            "Example: \"I need an AI to write blog posts\"".to_string(),
            "Example: \"I want to create a comic book\"".to_string(),
        ],
    }
}

/// Terminal error when the reasoning service and keyword fallback both fail.
fn api_error() -> IntentError {
    IntentError {
        code: IntentErrorCode::ApiError,
        message: "The reasoning service is unavailable and the request could not be categorized."
            .to_string(),
        suggestions: vec![
            "Try again in a moment".to_string(),
            "Name the kind of work directly, e.g. \"logo\", \"blog post\" or \"podcast\""
                .to_string(),
        ],
    }
}

/// Strict JSON schema the reasoning service must conform to.
///
/// Covers every `ParsedIntent` field; strict mode requires all properties,
/// so optionals are nullable rather than omitted.
fn intent_schema() -> serde_json::Value {
    const CATEGORIES: [&str; 7] = ["visual", "text", "audio", "research", "video", "data", "code"];

    json!({
        "type": "object",
        "properties": {
            "primaryCategory": { "type": "string", "enum": CATEGORIES },
            "secondaryCategories": {
                "type": "array",
                "items": { "type": "string", "enum": CATEGORIES }
            },
            "confidence": { "type": "number", "minimum": 0, "maximum": 1 },
            "userGoal": { "type": "string" },
            "constraints": {
                "type": "object",
                "properties": {
                    "pricing": { "type": ["string", "null"], "enum": ["free", "freemium", "paid"] },
                    "speed": { "type": ["string", "null"], "enum": ["fast", "quality"] },
                    "expertise": { "type": ["string", "null"], "enum": ["beginner", "advanced"] },
                    "language": { "type": ["string", "null"] }
                },
                "required": ["pricing", "speed", "expertise", "language"],
                "additionalProperties": false
            },
            "keywords": { "type": "array", "items": { "type": "string" } },
            "reasoning": { "type": "string" },
            "complexity": { "type": "string", "enum": ["simple", "multi-step"] },
            "estimatedSteps": { "type": ["integer", "null"], "minimum": 1, "maximum": 10 },
            "workflowHints": { "type": "array", "items": { "type": "string" } }
        },
        "required": [
            "primaryCategory",
            "secondaryCategories",
            "confidence",
            "userGoal",
            "constraints",
            "keywords",
            "reasoning",
            "complexity",
            "estimatedSteps",
            "workflowHints"
        ],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_step_query_type() -> QueryType {
        QueryType {
            is_multi_step: true,
            is_explicit_simple: false,
            hints: vec!["comic".to_string()],
        }
    }

    #[test]
    fn test_fallback_intent_simple() {
        let query_type = QueryType::default();
        let intent = fallback_intent("design a logo", Category::Visual, &query_type);

        assert_eq!(intent.primary_category, Category::Visual);
        assert!((intent.confidence - 0.6).abs() < f64::EPSILON);
        assert_eq!(intent.complexity, Complexity::Simple);
        assert_eq!(intent.estimated_steps, Some(1));
        assert_eq!(intent.keywords, vec!["design", "a", "logo"]);
        assert!(intent.is_fallback());
    }

    #[test]
    fn test_fallback_intent_multi_step() {
        let intent = fallback_intent("make a comic", Category::Visual, &multi_step_query_type());

        assert_eq!(intent.complexity, Complexity::MultiStep);
        assert_eq!(intent.estimated_steps, Some(4));
        assert_eq!(intent.workflow_hints, vec!["comic".to_string()]);
    }

    #[test]
    fn test_fallback_intent_explicit_simple_wins() {
        let query_type = QueryType {
            is_multi_step: true,
            is_explicit_simple: true,
            hints: Vec::new(),
        };
        let intent = fallback_intent("best comic logo tool", Category::Visual, &query_type);
        assert_eq!(intent.complexity, Complexity::Simple);
    }

    #[test]
    fn test_parse_intent_content_normalizes_missing_arrays() {
        let content = r#"{
            "primaryCategory": "audio",
            "confidence": 0.85,
            "userGoal": "produce a podcast intro",
            "reasoning": "audio production request"
        }"#;

        let intent = parse_intent_content(content).expect("parses");
        assert_eq!(intent.primary_category, Category::Audio);
        assert!(intent.secondary_categories.is_empty());
        assert!(intent.workflow_hints.is_empty());
        assert_eq!(intent.complexity, Complexity::Simple);
    }

    #[test]
    fn test_parse_intent_content_rejects_garbage() {
        let err = parse_intent_content("not json").unwrap_err();
        assert!(matches!(err, OpenAiError::Parse(_)));
    }

    #[test]
    fn test_override_forces_multi_step() {
        let mut intent =
            parse_intent_content(r#"{"primaryCategory":"visual","confidence":0.9,"userGoal":"comic","reasoning":"r"}"#)
                .expect("parses");
        assert_eq!(intent.complexity, Complexity::Simple);

        apply_heuristic_override(&mut intent, &multi_step_query_type());

        assert_eq!(intent.complexity, Complexity::MultiStep);
        assert_eq!(intent.estimated_steps, Some(4));
        assert_eq!(intent.workflow_hints, vec!["comic".to_string()]);
    }

    #[test]
    fn test_override_respects_explicit_simple() {
        let mut intent =
            parse_intent_content(r#"{"primaryCategory":"visual","confidence":0.9,"userGoal":"g","reasoning":"r"}"#)
                .expect("parses");

        let query_type = QueryType {
            is_multi_step: true,
            is_explicit_simple: true,
            hints: Vec::new(),
        };
        apply_heuristic_override(&mut intent, &query_type);

        assert_eq!(intent.complexity, Complexity::Simple);
    }

    #[test]
    fn test_multi_step_content_backfills_step_estimate() {
        let intent = parse_intent_content(
            r#"{"primaryCategory":"visual","confidence":0.9,"userGoal":"g","reasoning":"r","complexity":"multi-step","estimatedSteps":1}"#,
        )
        .expect("parses");

        assert_eq!(intent.complexity, Complexity::MultiStep);
        assert_eq!(intent.estimated_steps, Some(4));
    }

    #[test]
    fn test_override_keeps_model_step_estimate() {
        let mut intent = parse_intent_content(
            r#"{"primaryCategory":"visual","confidence":0.9,"userGoal":"g","reasoning":"r","estimatedSteps":5}"#,
        )
        .expect("parses");

        apply_heuristic_override(&mut intent, &multi_step_query_type());
        assert_eq!(intent.estimated_steps, Some(5));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(low_confidence_error().code, IntentErrorCode::LowConfidence);
        assert_eq!(api_error().code, IntentErrorCode::ApiError);
        assert!(!low_confidence_error().suggestions.is_empty());
    }

    #[test]
    fn test_intent_schema_requires_every_field() {
        let schema = intent_schema();
        let required = schema["required"].as_array().expect("required array");
        assert_eq!(required.len(), 10);
        assert_eq!(schema["additionalProperties"], json!(false));
    }
}
