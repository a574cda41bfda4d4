// Keyshift Transform Engine
// Applies grid operations and derives the character substitution

use std::collections::HashMap;

use crate::grid::Grid;
use crate::Operation;

/// Observer invoked after each applied operation with the resulting
/// grid state.
///
/// This is a seam for tracing or UI previews of intermediate grids;
/// the engine itself only emits `log::debug!` lines.
pub trait GridObserver {
    fn on_operation(&mut self, operation: &Operation, grid: &Grid);
}

/// Keyboard transform engine.
///
/// Owns the working grid and derives a character substitution from it.
/// Every call to [`apply_transformations`](Self::apply_transformations)
/// starts from the canonical layout, so a run never inherits grid
/// state from an earlier run. The engine raises no errors: unmapped
/// characters pass through and an empty operation sequence is the
/// identity transform.
///
/// The working grid is instance-owned. Concurrent callers should each
/// hold their own engine; sharing one instance requires external
/// serialization.
pub struct TransformEngine {
    grid: Grid,
    observer: Option<Box<dyn GridObserver>>,
}

impl TransformEngine {
    /// Create a new engine with the canonical working grid
    pub fn new() -> Self {
        Self {
            grid: Grid::canonical(),
            observer: None,
        }
    }

    /// Set or clear the per-operation observer
    pub fn set_observer(&mut self, observer: Option<Box<dyn GridObserver>>) {
        self.observer = observer;
    }

    /// Current working grid (the state left by the last run)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Apply an operation sequence to a fresh copy of the canonical
    /// grid, then rewrite `text` through the resulting substitution.
    ///
    /// Characters outside the grid's 40-character alphabet pass
    /// through unchanged, so the output always has the same length as
    /// the input.
    pub fn apply_transformations(&mut self, operations: &[Operation], text: &str) -> String {
        self.grid = Grid::canonical();
        for operation in operations {
            self.grid = match operation {
                Operation::HorizontalFlip => self.grid.horizontal_flip(),
                Operation::VerticalFlip => self.grid.vertical_flip(),
                Operation::Shift(amount) => self.grid.shift(*amount),
            };
            log::debug!("applied {}", operation);
            log::trace!("grid after {}:\n{}", operation, self.grid);
            if let Some(observer) = self.observer.as_mut() {
                observer.on_operation(operation, &self.grid);
            }
        }

        let char_map = self.substitution_map();
        text.chars()
            .map(|ch| char_map.get(&ch).copied().unwrap_or(ch))
            .collect()
    }

    /// Substitution derived from the current working grid: each
    /// canonical character maps to the character now occupying the
    /// same flat position.
    ///
    /// Flips and shifts are pure position permutations, so the map is
    /// always a bijection over the 40-character alphabet.
    pub fn substitution_map(&self) -> HashMap<char, char> {
        Grid::canonical()
            .flatten()
            .into_iter()
            .zip(self.grid.flatten())
            .collect()
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}
