//! Diff configuration.

use core::fmt;

use crate::difference::Differentiator;

/// Configuration for a diff run.
///
/// The same configuration is used for nested sub-diffs.
pub struct DiffConfig<'f, T> {
    /// Fold delete/insert pairs of identical elements into moves.
    pub find_moves: bool,

    /// Recurse into nested elements and mark updated elements.
    pub find_nested: bool,

    /// Comparison that takes precedence over the element's own.
    pub differentiator: Option<&'f Differentiator<'f, T>>,
}

impl<T> Default for DiffConfig<'_, T> {
    fn default() -> Self {
        Self {
            find_moves: true,
            find_nested: false,
            differentiator: None,
        }
    }
}

impl<'f, T> DiffConfig<'f, T> {
    /// Default configuration: moves on, nesting off, no differentiator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`find_moves`](DiffConfig::find_moves).
    pub fn find_moves(mut self, find_moves: bool) -> Self {
        self.find_moves = find_moves;
        self
    }

    /// Set [`find_nested`](DiffConfig::find_nested).
    pub fn find_nested(mut self, find_nested: bool) -> Self {
        self.find_nested = find_nested;
        self
    }

    /// Set the [`differentiator`](DiffConfig::differentiator).
    pub fn differentiator(mut self, differentiator: &'f Differentiator<'f, T>) -> Self {
        self.differentiator = Some(differentiator);
        self
    }
}

impl<T> Clone for DiffConfig<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DiffConfig<'_, T> {}

impl<T> fmt::Debug for DiffConfig<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffConfig")
            .field("find_moves", &self.find_moves)
            .field("find_nested", &self.find_nested)
            .field("differentiator", &self.differentiator.is_some())
            .finish()
    }
}
