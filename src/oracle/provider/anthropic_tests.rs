//! Tests for Messages API response parsing

use super::*;

#[test]
fn test_extract_text_from_single_block() {
    let body = r#"{
        "content": [
            {"type": "text", "text": "Definition: a condition."}
        ]
    }"#;

    assert_eq!(extract_text(body).unwrap(), "Definition: a condition.");
}

#[test]
fn test_extract_text_concatenates_blocks() {
    let body = r#"{
        "content": [
            {"type": "text", "text": "Definition: a condition. "},
            {"type": "text", "text": "Causes: unknown."}
        ]
    }"#;

    assert_eq!(
        extract_text(body).unwrap(),
        "Definition: a condition. Causes: unknown."
    );
}

#[test]
fn test_extract_text_skips_non_text_blocks() {
    let body = r#"{
        "content": [
            {"type": "tool_use", "id": "x", "name": "y", "input": {}},
            {"type": "text", "text": "hello"}
        ]
    }"#;

    assert_eq!(extract_text(body).unwrap(), "hello");
}

#[test]
fn test_extract_text_missing_content_is_parse_error() {
    let err = extract_text(r#"{"id": "msg_01"}"#).unwrap_err();
    assert!(matches!(err, OracleError::Parse(_)));
    assert!(err.to_string().contains("content"));
}

#[test]
fn test_extract_text_invalid_json_is_parse_error() {
    let err = extract_text("not json").unwrap_err();
    assert!(matches!(err, OracleError::Parse(_)));
}

#[test]
fn test_extract_text_empty_content_is_parse_error() {
    let err = extract_text(r#"{"content": []}"#).unwrap_err();
    assert!(matches!(err, OracleError::Parse(_)));
    assert!(err.to_string().contains("no text content"));
}

#[test]
fn test_client_construction() {
    let client = AnthropicClient::new(
        "key".to_string(),
        "claude-3-5-haiku-latest".to_string(),
        700,
        0.2,
    );
    assert!(format!("{client:?}").contains("AnthropicClient"));
}
