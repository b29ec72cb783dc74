//! Tests for suggestion payload parsing

use super::*;

#[test]
fn test_parse_keeps_service_order() {
    let body = r#"[{"title": "Batman"}, {"title": "Batman Begins"}, {"title": "Batman Returns"}]"#;

    let suggestions = parse_suggestions(body).unwrap();

    let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Batman", "Batman Begins", "Batman Returns"]);
}

#[test]
fn test_parse_ignores_extra_fields() {
    let body = r#"[{"title": "Heat", "year": 1995, "id": 949}]"#;

    let suggestions = parse_suggestions(body).unwrap();

    assert_eq!(suggestions, vec![Suggestion::new("Heat")]);
}

#[test]
fn test_parse_empty_array() {
    assert_eq!(parse_suggestions("[]").unwrap(), Vec::new());
}

#[test]
fn test_parse_object_instead_of_array_is_malformed() {
    let result = parse_suggestions(r#"{"title": "Heat"}"#);
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[test]
fn test_parse_missing_title_is_malformed() {
    let result = parse_suggestions(r#"[{"name": "Heat"}]"#);
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[test]
fn test_parse_non_string_title_is_malformed() {
    let result = parse_suggestions(r#"[{"title": 42}]"#);
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[test]
fn test_parse_html_error_page_is_malformed() {
    let result = parse_suggestions("<html><body>Bad Gateway</body></html>");
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}
