//! Nested diff aggregation.
//!
//! Kept entries whose elements expose children get a recursive diff of those
//! children; kept entries that are related but not identical become updates.

use super::Engine;
use crate::diff::Diff;
use crate::difference::Difference;
use crate::error::DiffError;
use crate::sequence::Diffable;
use crate::{debug, trace};

impl<'a, 'c, T, L, R> Engine<'a, 'c, T, L, R>
where
    T: 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
{
    /// Rewrite kept entries into `Nested` or `Updated` where they qualify.
    ///
    /// A kept entry becomes `Nested` when the children differ, otherwise
    /// `Updated` when the elements compared as `Some`. An incoming `Updated`
    /// entry stays, followed by a `Nested` entry for the same position when its
    /// children differ. Everything else passes through, so a list with nothing
    /// to rewrite comes back unchanged.
    pub(super) fn aggregate_nested(
        &mut self,
        results: Vec<Diff<&'a T>>,
    ) -> Result<Vec<Diff<&'a T>>, DiffError> {
        let mut aggregated = Vec::with_capacity(results.len());

        for diff in results {
            match diff {
                Diff::Kept {
                    entry,
                    from_index,
                    to_index,
                } => {
                    let children = self.nested_children(from_index, to_index)?;
                    if children.iter().any(Diff::is_change) {
                        aggregated.push(Diff::Nested {
                            entry,
                            from_index,
                            to_index,
                            children,
                        });
                    } else if self.difference(from_index, to_index) == Difference::Some {
                        aggregated.push(Diff::Updated {
                            entry,
                            from_index,
                            to_index,
                        });
                    } else {
                        aggregated.push(diff);
                    }
                }
                Diff::Updated {
                    entry,
                    from_index,
                    to_index,
                } => {
                    aggregated.push(diff);
                    let children = self.nested_children(from_index, to_index)?;
                    if children.iter().any(Diff::is_change) {
                        aggregated.push(Diff::Nested {
                            entry,
                            from_index,
                            to_index,
                            children,
                        });
                    }
                }
                other => aggregated.push(other),
            }
        }

        debug!(entries = aggregated.len(), "nested aggregation done");
        Ok(aggregated)
    }

    /// Diff the children of `left[from_index]` and `right[to_index]` with a
    /// fresh engine. Empty when either side has no children.
    fn nested_children(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<Diff<&'a T>>, DiffError> {
        let comparator = self.comparator;
        let left = comparator.nested_segments(self.left_at(from_index));
        let right = comparator.nested_segments(self.right_at(to_index));
        match (left, right) {
            (Some(left), Some(right)) => {
                trace!(
                    from_index,
                    to_index,
                    left = left.len(),
                    right = right.len(),
                    "nested diff"
                );
                Engine::new(left, right, comparator).run()
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Comparator;
    use crate::config::DiffConfig;
    use crate::difference::Differentiate;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        name: &'static str,
        revision: u32,
        children: Vec<Node>,
    }

    fn node(name: &'static str, revision: u32, children: Vec<Node>) -> Node {
        Node {
            name,
            revision,
            children,
        }
    }

    impl Differentiate for Node {
        const NESTED: bool = true;

        fn difference(&self, other: &Self) -> Difference {
            if self.name != other.name {
                Difference::Entire
            } else if self.revision != other.revision {
                Difference::Some
            } else {
                Difference::Nothing
            }
        }

        fn nested_segments(&self) -> Option<&[Self]> {
            Some(&self.children)
        }
    }

    fn basis(a: &Node, b: &Node) -> Difference {
        a.difference(b)
    }

    #[test]
    fn updated_entries_keep_their_marker_and_gain_children() {
        let left = vec![node("list", 1, vec![node("a", 1, vec![])])];
        let right = vec![node("list", 2, vec![node("b", 1, vec![])])];
        let comparator = Comparator::new(
            DiffConfig::<Node>::new().find_nested(true),
            Some(&basis),
            Some(Node::nested_segments),
        );
        let mut engine = Engine::new(&left, &right, &comparator);

        let aggregated = engine
            .aggregate_nested(vec![Diff::Updated {
                entry: &right[0],
                from_index: 0,
                to_index: 0,
            }])
            .unwrap();

        assert_eq!(aggregated.len(), 2);
        assert!(matches!(aggregated[0], Diff::Updated { from_index: 0, to_index: 0, .. }));
        let children = aggregated[1].children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(Diff::is_change));
    }

    #[test]
    fn nothing_to_rewrite_returns_the_input() {
        let left = vec![node("a", 1, vec![]), node("b", 1, vec![])];
        let right = vec![node("b", 1, vec![])];
        let comparator = Comparator::new(
            DiffConfig::<Node>::new().find_nested(true),
            Some(&basis),
            Some(Node::nested_segments),
        );
        let mut engine = Engine::new(&left, &right, &comparator);
        let input = vec![
            Diff::Deleted {
                entry: &left[0],
                index: 0,
            },
            Diff::Kept {
                entry: &right[0],
                from_index: 1,
                to_index: 0,
            },
        ];

        let aggregated = engine.aggregate_nested(input.clone()).unwrap();
        assert_eq!(aggregated, input);
    }
}
