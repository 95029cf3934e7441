//! Reduction of a diff to plain additions and removals.

use core::cmp::Ordering;

use triff::Diff;

/// A single positional edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryDiff<E> {
    /// Insert `element` at `at_index`, appending when past the end.
    Add {
        /// The element to insert
        element: E,
        /// Position in the patched sequence
        at_index: usize,
    },

    /// Remove the element at `index`.
    Remove {
        /// Position in the sequence being patched
        index: usize,
    },
}

impl<E> BinaryDiff<E> {
    /// The position this edit applies to.
    pub fn index(&self) -> usize {
        match *self {
            BinaryDiff::Add { at_index, .. } => at_index,
            BinaryDiff::Remove { index } => index,
        }
    }

    /// Whether this is a removal.
    pub fn is_remove(&self) -> bool {
        matches!(self, BinaryDiff::Remove { .. })
    }
}

impl<E: Clone> BinaryDiff<&E> {
    /// Copy the borrowed element into an owned edit.
    pub fn cloned(&self) -> BinaryDiff<E> {
        match *self {
            BinaryDiff::Add { element, at_index } => BinaryDiff::Add {
                element: element.clone(),
                at_index,
            },
            BinaryDiff::Remove { index } => BinaryDiff::Remove { index },
        }
    }
}

/// Reduce a diff to sorted additions and removals.
///
/// Insertions become `Add`, deletions become `Remove`, and a move becomes a
/// `Remove` at its source plus an `Add` at its destination. Kept, updated and
/// nested entries contribute nothing. The result is ordered by [`sort`].
pub fn reduce<E>(diffs: impl IntoIterator<Item = Diff<E>>) -> Vec<BinaryDiff<E>> {
    let mut ops = Vec::new();
    for diff in diffs {
        match diff {
            Diff::Inserted { entry, index } => ops.push(BinaryDiff::Add {
                element: entry,
                at_index: index,
            }),
            Diff::Deleted { index, .. } => ops.push(BinaryDiff::Remove { index }),
            Diff::Moved {
                entry,
                from_index,
                to_index,
            } => {
                ops.push(BinaryDiff::Remove { index: from_index });
                ops.push(BinaryDiff::Add {
                    element: entry,
                    at_index: to_index,
                });
            }
            Diff::Kept { .. } | Diff::Updated { .. } | Diff::Nested { .. } => {}
        }
    }
    sort(&mut ops);
    ops
}

/// Order edits so they can be applied one after another: removals by
/// descending index first, then additions by ascending index.
///
/// The sort is stable, so edits at the same index keep their relative order.
pub fn sort<E>(ops: &mut [BinaryDiff<E>]) {
    ops.sort_by(|a, b| match (a, b) {
        (BinaryDiff::Remove { index: x }, BinaryDiff::Remove { index: y }) => y.cmp(x),
        (BinaryDiff::Add { at_index: x, .. }, BinaryDiff::Add { at_index: y, .. }) => x.cmp(y),
        (BinaryDiff::Remove { .. }, BinaryDiff::Add { .. }) => Ordering::Less,
        (BinaryDiff::Add { .. }, BinaryDiff::Remove { .. }) => Ordering::Greater,
    });
}
