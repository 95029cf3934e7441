//! Applying binary edits to sequences.

use std::collections::VecDeque;

use crate::binary::BinaryDiff;
use crate::error::PatchError;
use crate::{debug, trace};

/// A sequence that can be edited by offset.
pub trait Patchable {
    /// The element type.
    type Item;

    /// Number of elements.
    fn patch_len(&self) -> usize;

    /// Remove and return the element at `index`, or `None` when out of range.
    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;

    /// Insert `item` at `index`, with `index <= patch_len()`.
    fn insert_at(&mut self, index: usize, item: Self::Item);
}

impl<T> Patchable for Vec<T> {
    type Item = T;

    fn patch_len(&self) -> usize {
        self.len()
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.remove(index))
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
}

impl<T> Patchable for VecDeque<T> {
    type Item = T;

    fn patch_len(&self) -> usize {
        self.len()
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }
}

/// Apply edits in order.
///
/// Edits are expected in the order produced by [`crate::reduce`]. An addition
/// past the end appends. On error the edits before the failing one have
/// already been applied.
pub fn apply<S>(
    seq: &mut S,
    ops: impl IntoIterator<Item = BinaryDiff<S::Item>>,
) -> Result<(), PatchError>
where
    S: Patchable + ?Sized,
{
    for op in ops {
        match op {
            BinaryDiff::Remove { index } => {
                let len = seq.patch_len();
                trace!(index, len, "remove");
                if seq.remove_at(index).is_none() {
                    return Err(PatchError::RemoveOutOfBounds { index, len });
                }
            }
            BinaryDiff::Add { element, at_index } => {
                let index = at_index.min(seq.patch_len());
                trace!(index, "add");
                seq.insert_at(index, element);
            }
        }
    }
    debug!(len = seq.patch_len(), "patch applied");
    Ok(())
}

/// Apply edits to a copy of `seq`, leaving the original untouched.
pub fn patched<S>(seq: &S, ops: impl IntoIterator<Item = BinaryDiff<S::Item>>) -> Result<S, PatchError>
where
    S: Patchable + Clone,
{
    let mut result = seq.clone();
    apply(&mut result, ops)?;
    Ok(result)
}
