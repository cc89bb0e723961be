//! Integration tests for keyword detection, the query-type heuristic and
//! template matching - the rule layers that keep working when the
//! reasoning service is down.

use toolscout_core::Category;
use toolscout_server::recommend::heuristics::detect_query_type;
use toolscout_server::recommend::keywords::detect_category;
use toolscout_server::recommend::workflow::find_matching_template;

// =============================================================================
// Category detection
// =============================================================================

#[test]
fn test_category_detection_samples() {
    let cases = [
        ("I need a podcast voice-over", Some(Category::Audio)),
        ("design a logo for my startup", Some(Category::Visual)),
        ("help me write an article", Some(Category::Text)),
        ("literature review for my thesis", Some(Category::Research)),
        ("turn this into an animation", Some(Category::Video)),
        ("build charts from my spreadsheet", Some(Category::Data)),
        ("debug my python code", Some(Category::Code)),
        ("random unrelated text", None),
    ];

    for (query, expected) in cases {
        assert_eq!(detect_category(query), expected, "query: {query}");
    }
}

// =============================================================================
// Heuristic and template matching together
// =============================================================================

#[test]
fn test_comic_request_routes_to_comic_template() {
    let query = "I want to make a comic book";

    let query_type = detect_query_type(query);
    assert!(query_type.is_multi_step);

    let template = find_matching_template(query, &query_type.hints).expect("template found");
    assert_eq!(template.id, "comic-creation");
}

#[test]
fn test_email_request_stays_simple() {
    let query = "write me an email";

    let query_type = detect_query_type(query);
    assert!(!query_type.is_multi_step);
    assert!(find_matching_template(query, &query_type.hints).is_none());
}

#[test]
fn test_brand_identity_routes_to_brand_template() {
    let query = "I need a full brand identity for my startup";

    let query_type = detect_query_type(query);
    assert!(query_type.is_multi_step);

    let template = find_matching_template(query, &query_type.hints).expect("template found");
    assert_eq!(template.id, "brand-identity");
}

#[test]
fn test_tool_question_suppresses_workflow() {
    let query = "which tool should I use for a comic book?";

    let query_type = detect_query_type(query);
    assert!(!query_type.is_multi_step);
    assert!(query_type.is_explicit_simple);
}
