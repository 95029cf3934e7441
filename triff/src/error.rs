//! Error type for diffing.

use facet::Facet;

/// Errors that can occur while diffing.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum DiffError {
    /// no middle snake between left {start_left}..{end_left} and right {start_right}..{end_right} (is the comparator deterministic?)
    MiddleSnakeNotFound {
        /// Start of the left range
        start_left: usize,
        /// End of the left range (exclusive)
        end_left: usize,
        /// Start of the right range
        start_right: usize,
        /// End of the right range (exclusive)
        end_right: usize,
    },
}
