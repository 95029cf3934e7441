//! Move deduction.
//!
//! Deletions are visited in list order; each one claims the first unclaimed
//! insertion of an identical element, wherever it sits in the list. The claimed
//! insertion becomes a move carrying the deleted element, and the deletion is
//! dropped. First fit, not a globally optimal matching.

use smallvec::SmallVec;

use crate::diff::Diff;
use crate::trace;

/// What happens to each entry of the edit script.
enum Slot<'a, T> {
    Keep,
    Drop,
    Move { entry: &'a T, from_index: usize },
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

/// Fold delete/insert pairs whose elements are an exact match into moves.
///
/// `exact_match(from, to)` compares `left[from]` with `right[to]`.
pub(crate) fn deduce_moves<'a, T>(
    results: Vec<Diff<&'a T>>,
    mut exact_match: impl FnMut(usize, usize) -> bool,
) -> Vec<Diff<&'a T>> {
    // (position in `results`, right index) of insertions nobody claimed yet
    let mut pending: SmallVec<[(usize, usize); 8]> = results
        .iter()
        .enumerate()
        .filter_map(|(position, diff)| match *diff {
            Diff::Inserted { index, .. } => Some((position, index)),
            _ => None,
        })
        .collect();
    if pending.is_empty() {
        return results;
    }

    let mut slots = vec![Slot::Keep; results.len()];
    let mut moved = 0usize;
    for (position, diff) in results.iter().enumerate() {
        let Diff::Deleted { entry, index } = *diff else {
            continue;
        };
        let Some(claim) = pending.iter().position(|&(_, to)| exact_match(index, to)) else {
            continue;
        };
        let (insert_position, _) = pending.remove(claim);
        trace!(from = index, position = insert_position, "move");
        slots[position] = Slot::Drop;
        slots[insert_position] = Slot::Move {
            entry,
            from_index: index,
        };
        moved += 1;
        if pending.is_empty() {
            break;
        }
    }
    if moved == 0 {
        return results;
    }

    results
        .into_iter()
        .zip(slots)
        .filter_map(|(diff, slot)| match (slot, diff) {
            (Slot::Keep, diff) => Some(diff),
            (Slot::Drop, _) => None,
            (Slot::Move { entry, from_index }, Diff::Inserted { index, .. }) => Some(Diff::Moved {
                entry,
                from_index,
                to_index: index,
            }),
            (Slot::Move { .. }, diff) => Some(diff),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deleted(entry: &char, index: usize) -> Diff<&char> {
        Diff::Deleted { entry, index }
    }

    fn inserted(entry: &char, index: usize) -> Diff<&char> {
        Diff::Inserted { entry, index }
    }

    #[test]
    fn move_lands_where_the_insertion_was() {
        let left = ['a', 'b', 'c'];
        let right = ['c', 'a', 'b'];
        let results = vec![
            inserted(&right[0], 0),
            Diff::Kept {
                entry: &right[1],
                from_index: 0,
                to_index: 1,
            },
            Diff::Kept {
                entry: &right[2],
                from_index: 1,
                to_index: 2,
            },
            deleted(&left[2], 2),
        ];

        let folded = deduce_moves(results, |from, to| left[from] == right[to]);
        assert_eq!(folded.len(), 3);
        assert_eq!(
            folded[0],
            Diff::Moved {
                entry: &'c',
                from_index: 2,
                to_index: 0
            }
        );
        assert!(folded[1..].iter().all(Diff::is_kept));
    }

    #[test]
    fn first_matching_insertion_wins() {
        let left = ['x', 'x'];
        let right = ['x', 'y', 'x'];
        let results = vec![
            deleted(&left[0], 0),
            inserted(&right[0], 0),
            inserted(&right[1], 1),
            inserted(&right[2], 2),
            deleted(&left[1], 1),
        ];

        let folded = deduce_moves(results, |from, to| left[from] == right[to]);
        assert_eq!(
            folded,
            vec![
                Diff::Moved {
                    entry: &'x',
                    from_index: 0,
                    to_index: 0
                },
                inserted(&'y', 1),
                Diff::Moved {
                    entry: &'x',
                    from_index: 1,
                    to_index: 2
                },
            ]
        );
    }

    #[test]
    fn unmatched_pairs_are_left_alone() {
        let left = ['a'];
        let right = ['b'];
        let results = vec![inserted(&right[0], 0), deleted(&left[0], 0)];

        let folded = deduce_moves(results.clone(), |from, to| left[from] == right[to]);
        assert_eq!(folded, results);
    }
}
