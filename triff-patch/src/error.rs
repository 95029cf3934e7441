//! Error type for patch application.

use facet::Facet;

/// Errors that can occur while applying edits.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum PatchError {
    /// cannot remove index {index} from a sequence of length {len}
    RemoveOutOfBounds {
        /// Index of the removal
        index: usize,
        /// Length of the sequence at that point
        len: usize,
    },
}
