use std::fmt;

/// One grid-mutating instruction parsed from a transformation string.
///
/// Flips act on the grid's 4x10 shape; a shift rotates the flattened
/// 40-character sequence. Operations apply left-to-right, each to the
/// grid state left by the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Reverse the character order within each row
    HorizontalFlip,
    /// Reverse the order of the rows
    VerticalFlip,
    /// Rotate the flattened sequence by a signed amount
    Shift(i32),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::HorizontalFlip => write!(f, "horizontal flip"),
            Operation::VerticalFlip => write!(f, "vertical flip"),
            Operation::Shift(amount) => write!(f, "shift by {}", amount),
        }
    }
}
