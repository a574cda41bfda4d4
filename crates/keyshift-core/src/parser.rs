// Keyshift Transformation Parser
// Parses comma-separated transformation strings into grid operations

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::Operation;

/// Transformation parse errors (strict mode only)
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unrecognized token: {0:?}")]
    UnrecognizedToken(String),

    #[error("Shift amount out of range: {0}")]
    ShiftOutOfRange(String),
}

fn shift_pattern() -> &'static Regex {
    static SHIFT_PATTERN: OnceLock<Regex> = OnceLock::new();
    SHIFT_PATTERN.get_or_init(|| Regex::new(r"^-?\d+$").expect("hardcoded pattern"))
}

/// Parse a comma-separated transformation string into an ordered
/// operation sequence.
///
/// Tokens are classified in order, output order matching input order:
/// a token starting with `H` is a horizontal flip, a token starting
/// with `V` is a vertical flip, and a token that is entirely a signed
/// decimal number is a shift. Anything else is dropped without error,
/// so a malformed transformation string degrades to fewer operations
/// rather than failing.
///
/// Tokens are not trimmed; `" H"` or `"5 "` match nothing and are
/// dropped. The empty string yields an empty sequence.
pub fn parse_operations(content: &str) -> SmallVec<[Operation; 8]> {
    let mut operations = SmallVec::new();
    for token in content.split(',') {
        if let Some(operation) = classify_token(token) {
            operations.push(operation);
        }
    }
    operations
}

/// Strict variant of [`parse_operations`]: any token that would be
/// silently dropped becomes an error instead.
///
/// The empty string still parses to an empty sequence, matching the
/// lenient no-transformation case.
pub fn parse_operations_strict(content: &str) -> Result<Vec<Operation>, ParseError> {
    if content.is_empty() {
        return Ok(Vec::new());
    }
    let mut operations = Vec::new();
    for token in content.split(',') {
        if shift_pattern().is_match(token) && token.parse::<i32>().is_err() {
            return Err(ParseError::ShiftOutOfRange(token.to_string()));
        }
        match classify_token(token) {
            Some(operation) => operations.push(operation),
            None => return Err(ParseError::UnrecognizedToken(token.to_string())),
        }
    }
    Ok(operations)
}

fn classify_token(token: &str) -> Option<Operation> {
    if token.starts_with('H') {
        Some(Operation::HorizontalFlip)
    } else if token.starts_with('V') {
        Some(Operation::VerticalFlip)
    } else if shift_pattern().is_match(token) {
        // Amounts beyond i32 pass the pattern but not the conversion;
        // they are dropped like any other unrecognized token.
        token.parse::<i32>().ok().map(Operation::Shift)
    } else {
        None
    }
}
