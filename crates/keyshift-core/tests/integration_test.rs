// Keyshift Integration Tests
//
// These tests verify the complete pipeline:
// transformation string -> parser -> TransformEngine -> rewritten text
//
// Run with: cargo test --test integration_test

use keyshift_core::{parse_operations, TransformEngine};

fn transform(content: &str, text: &str) -> String {
    let operations = parse_operations(content);
    let mut engine = TransformEngine::new();
    engine.apply_transformations(&operations, text)
}

#[test]
fn test_empty_transformation_is_passthrough() {
    let text = "nothing to see here; move along 42!";
    assert_eq!(transform("", text), text);
}

#[test]
fn test_horizontal_flip_pipeline() {
    assert_eq!(transform("H", "1"), "0");
    assert_eq!(transform("H", "1234567890"), "0987654321");
}

#[test]
fn test_vertical_flip_pipeline() {
    assert_eq!(transform("V", "1"), "z");
    assert_eq!(transform("V", "Hello, World!"), "Hdool8 Wlfoe!");
}

#[test]
fn test_shift_pipeline_with_skipped_token() {
    // "S" matches no classification; only the "1" survives as a shift.
    assert_eq!(transform("S,1", "1"), "/");
}

#[test]
fn test_flip_then_negative_shift() {
    assert_eq!(transform("H,abc,-5", "hello"), "/emmj");
}

#[test]
fn test_unrecognized_tokens_leave_remaining_operations_intact() {
    assert_eq!(transform("H,abc,-5", "1"), transform("H,-5", "1"));
}

#[test]
fn test_whitespace_heavy_content_degrades_to_identity() {
    let text = "qwerty";
    assert_eq!(transform(" H , V , 5 ", text), text);
}

#[test]
fn test_shift_wraps_in_both_directions() {
    assert_eq!(transform("-5", "1"), transform("35", "1"));
    assert_eq!(transform("40", "asdf"), "asdf");
    assert_eq!(transform("-80", "asdf"), "asdf");
}

#[test]
fn test_inverse_sequence_restores_text() {
    let text = "zxcvbnm,./";
    let encoded = transform("V,H,12", text);
    assert_ne!(encoded, text);
    assert_eq!(transform("-12,H,V", &encoded), text);
}

#[test]
fn test_runs_are_independent() {
    let mut engine = TransformEngine::new();
    let first = engine.apply_transformations(&parse_operations("H,7"), "flat");
    let again = engine.apply_transformations(&parse_operations("H,7"), "flat");
    assert_eq!(first, again);
}
