//! Query-type heuristic: simple request or multi-step workflow?
//!
//! The reasoning service under-detects multi-step requests for short or
//! terse phrasing, so this keyword layer runs first and can override the
//! model's answer. It is also the whole classifier on the parser's fast and
//! fallback paths.
//!
//! Only genuinely multi-stage projects should trigger workflows; single
//! actions ("design a logo") stay simple even when the wording is ambitious.

use std::sync::LazyLock;

use regex::Regex;

/// Phrases that mark truly complex, multi-stage projects.
const MULTI_STEP_KEYWORDS: &[&str] = &[
    // Comic / graphic novel - story + art + layout
    "comic",
    "manga",
    "webtoon",
    "graphic novel",
    // Full brand identity - strategy + logo + guidelines
    "brand identity",
    "corporate identity",
    // Full video production - script + video + audio
    "video course",
    "online course",
    "training video",
    "short film",
    "documentary",
    "promo video",
    // E-book / book - outline + writing + cover + formatting
    "e-book",
    "ebook",
    "write a book",
    // YouTube channel / series - strategy + content + SEO
    "youtube channel",
    "content strategy",
    // Mobile app design - UX + UI + prototype
    "mobile app design",
    "design an app",
    "app design",
    // Full music production - lyrics + production + cover
    "make an album",
    "release an ep",
];

/// Phrases that mark single-action requests which always resolve to one
/// tool. A simple keyword suppresses a multi-step keyword in the same query.
const SIMPLE_KEYWORDS: &[&str] = &[
    // Explicit tool questions
    "which tool",
    "best tool",
    "recommend",
    // Single actions - logos and images
    "logo",
    "emblem",
    "image",
    "picture",
    "photo",
    "poster",
    "banner",
    "thumbnail",
    "cover",
    // Single actions - text
    "write",
    "email",
    "article",
    // Single actions - presentations
    "presentation",
    "slide",
    "powerpoint",
    "pitch deck",
    // Single actions - audio
    "voiceover",
    "voice-over",
    "voice",
    "music",
    "song",
    "beat",
    // Single actions - editing
    "edit",
    "convert",
    // Single actions - translation
    "translate",
    "translation",
    // Single actions - code
    "code",
    "program",
    "debug",
    // Single actions - data
    "analysis",
    "chart",
    "dashboard",
    "report",
    // Social media posts (single action, not a campaign)
    "post",
    "story",
    "reel",
];

/// Explicit "which tool should I use" patterns - these force a simple
/// recommendation no matter what else the query contains.
static TOOL_QUESTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)which (tool|ai|app|service)",
        r"(?i)what (tool|ai|app) should i use",
        r"(?i)recommend",
        r"(?i)best.*(tool|ai|app)",
        r"(?i)\?.*(tool|app)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("tool question pattern must compile"))
    .collect()
});

/// Additional multi-step indicators beyond the phrase list.
static MULTI_STEP_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)from scratch",
        r"(?i)step by step",
        r"(?i)entire process",
        r"(?i)full process",
        r"(?i)from zero",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("multi-step indicator must compile"))
    .collect()
});

/// Heuristic classification of one query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryType {
    /// The query looks like a multi-stage project.
    pub is_multi_step: bool,
    /// The query names a single action (and no multi-step phrase).
    pub is_explicit_simple: bool,
    /// Multi-step phrases that matched, used as workflow hints.
    pub hints: Vec<String>,
}

/// Classify a query as simple or multi-step.
///
/// Decision order:
/// 1. An explicit tool question forces simple.
/// 2. Multi-step phrases and indicators set `is_multi_step`.
/// 3. A simple phrase without any multi-step phrase sets
///    `is_explicit_simple`, which suppresses the multi-step override later.
#[must_use]
pub fn detect_query_type(query: &str) -> QueryType {
    let lower = query.to_lowercase();

    for pattern in TOOL_QUESTION_PATTERNS.iter() {
        if pattern.is_match(query) {
            return QueryType {
                is_multi_step: false,
                is_explicit_simple: true,
                hints: Vec::new(),
            };
        }
    }

    let has_simple_keyword = SIMPLE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword));

    let mut hints = Vec::new();
    for keyword in MULTI_STEP_KEYWORDS {
        if lower.contains(keyword) {
            hints.push((*keyword).to_string());
        }
    }
    let has_multi_step_keyword = !hints.is_empty();

    let has_multi_step_indicator = MULTI_STEP_INDICATORS
        .iter()
        .any(|pattern| pattern.is_match(query));

    QueryType {
        is_multi_step: has_multi_step_keyword || has_multi_step_indicator,
        is_explicit_simple: has_simple_keyword && !has_multi_step_keyword,
        hints,
    }
}
