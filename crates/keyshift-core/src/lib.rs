// Keyshift Core Library
// Grid transformations and the derived character substitution cipher

pub mod engine;
pub mod grid;
pub mod operation;
pub mod parser;

pub use engine::{GridObserver, TransformEngine};
pub use grid::Grid;
pub use operation::Operation;
pub use parser::{parse_operations, parse_operations_strict, ParseError};
