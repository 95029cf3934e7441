//! Diff entries produced by the engine.

use core::fmt;

use crate::difference::Differentiate;

/// One entry of a diff between a left (before) and a right (after) sequence.
///
/// `index` and `from_index` are positions in the left sequence, `to_index` is a
/// position in the right sequence. `Deleted` and `Moved` carry the left
/// element, every other variant carries the right element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diff<E> {
    /// The element was removed from the left sequence.
    Deleted {
        /// The removed element
        entry: E,
        /// Position in the left sequence
        index: usize,
    },

    /// The element was added to the right sequence.
    Inserted {
        /// The added element
        entry: E,
        /// Position in the right sequence
        index: usize,
    },

    /// An identical element changed position.
    Moved {
        /// The moved element
        entry: E,
        /// Position in the left sequence
        from_index: usize,
        /// Position in the right sequence
        to_index: usize,
    },

    /// The element stayed in place but its content changed.
    Updated {
        /// The element after the update
        entry: E,
        /// Position in the left sequence
        from_index: usize,
        /// Position in the right sequence
        to_index: usize,
    },

    /// The element stayed in place.
    Kept {
        /// The element
        entry: E,
        /// Position in the left sequence
        from_index: usize,
        /// Position in the right sequence
        to_index: usize,
    },

    /// The element stayed in place and its children changed.
    Nested {
        /// The element
        entry: E,
        /// Position in the left sequence
        from_index: usize,
        /// Position in the right sequence
        to_index: usize,
        /// Diff between the children of both elements
        children: Vec<Diff<E>>,
    },
}

impl<E> Diff<E> {
    /// The element carried by this entry.
    pub fn entry(&self) -> &E {
        match self {
            Diff::Deleted { entry, .. }
            | Diff::Inserted { entry, .. }
            | Diff::Moved { entry, .. }
            | Diff::Updated { entry, .. }
            | Diff::Kept { entry, .. }
            | Diff::Nested { entry, .. } => entry,
        }
    }

    /// Position in the left sequence, unless the entry was inserted.
    pub fn from_index(&self) -> Option<usize> {
        match *self {
            Diff::Deleted { index, .. } => Some(index),
            Diff::Inserted { .. } => None,
            Diff::Moved { from_index, .. }
            | Diff::Updated { from_index, .. }
            | Diff::Kept { from_index, .. }
            | Diff::Nested { from_index, .. } => Some(from_index),
        }
    }

    /// Position in the right sequence, unless the entry was deleted.
    pub fn to_index(&self) -> Option<usize> {
        match *self {
            Diff::Deleted { .. } => None,
            Diff::Inserted { index, .. } => Some(index),
            Diff::Moved { to_index, .. }
            | Diff::Updated { to_index, .. }
            | Diff::Kept { to_index, .. }
            | Diff::Nested { to_index, .. } => Some(to_index),
        }
    }

    /// Child diff of a `Nested` entry.
    pub fn children(&self) -> Option<&[Diff<E>]> {
        match self {
            Diff::Nested { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Whether this entry is `Kept`.
    pub fn is_kept(&self) -> bool {
        matches!(self, Diff::Kept { .. })
    }

    /// Whether this entry describes a change (anything but `Kept`).
    pub fn is_change(&self) -> bool {
        !self.is_kept()
    }

    /// Whether this entry belongs to the order-preserving alignment
    /// (`Kept`, `Updated` or `Nested`).
    pub fn is_aligned(&self) -> bool {
        matches!(
            self,
            Diff::Kept { .. } | Diff::Updated { .. } | Diff::Nested { .. }
        )
    }

    /// Transform the carried elements, children included.
    pub fn map<U>(self, mut f: impl FnMut(E) -> U) -> Diff<U> {
        self.map_with(&mut f)
    }

    fn map_with<U, F: FnMut(E) -> U>(self, f: &mut F) -> Diff<U> {
        match self {
            Diff::Deleted { entry, index } => Diff::Deleted {
                entry: f(entry),
                index,
            },
            Diff::Inserted { entry, index } => Diff::Inserted {
                entry: f(entry),
                index,
            },
            Diff::Moved {
                entry,
                from_index,
                to_index,
            } => Diff::Moved {
                entry: f(entry),
                from_index,
                to_index,
            },
            Diff::Updated {
                entry,
                from_index,
                to_index,
            } => Diff::Updated {
                entry: f(entry),
                from_index,
                to_index,
            },
            Diff::Kept {
                entry,
                from_index,
                to_index,
            } => Diff::Kept {
                entry: f(entry),
                from_index,
                to_index,
            },
            Diff::Nested {
                entry,
                from_index,
                to_index,
                children,
            } => Diff::Nested {
                entry: f(entry),
                from_index,
                to_index,
                children: children.into_iter().map(|c| c.map_with(f)).collect(),
            },
        }
    }

    /// Compare two entries variant by variant, using `same` for the elements.
    pub fn equivalent_by(&self, other: &Diff<E>, same: &mut impl FnMut(&E, &E) -> bool) -> bool {
        match (self, other) {
            (
                Diff::Deleted {
                    entry: a,
                    index: ia,
                },
                Diff::Deleted {
                    entry: b,
                    index: ib,
                },
            )
            | (
                Diff::Inserted {
                    entry: a,
                    index: ia,
                },
                Diff::Inserted {
                    entry: b,
                    index: ib,
                },
            ) => ia == ib && same(a, b),
            (
                Diff::Moved {
                    entry: a,
                    from_index: fa,
                    to_index: ta,
                },
                Diff::Moved {
                    entry: b,
                    from_index: fb,
                    to_index: tb,
                },
            )
            | (
                Diff::Updated {
                    entry: a,
                    from_index: fa,
                    to_index: ta,
                },
                Diff::Updated {
                    entry: b,
                    from_index: fb,
                    to_index: tb,
                },
            )
            | (
                Diff::Kept {
                    entry: a,
                    from_index: fa,
                    to_index: ta,
                },
                Diff::Kept {
                    entry: b,
                    from_index: fb,
                    to_index: tb,
                },
            ) => fa == fb && ta == tb && same(a, b),
            (
                Diff::Nested {
                    entry: a,
                    from_index: fa,
                    to_index: ta,
                    children: ca,
                },
                Diff::Nested {
                    entry: b,
                    from_index: fb,
                    to_index: tb,
                    children: cb,
                },
            ) => {
                fa == fb
                    && ta == tb
                    && same(a, b)
                    && ca.len() == cb.len()
                    && ca.iter().zip(cb).all(|(x, y)| x.equivalent_by(y, same))
            }
            _ => false,
        }
    }
}

impl<E: Clone> Diff<&E> {
    /// Copy the borrowed elements into an owned diff.
    pub fn cloned(&self) -> Diff<E> {
        self.clone().map(E::clone)
    }
}

impl<T: Differentiate> Diff<&T> {
    /// Whether both entries agree, comparing elements with
    /// [`Differentiate::difference`] instead of `PartialEq`.
    pub fn equivalent(&self, other: &Diff<&T>) -> bool {
        self.equivalent_by(other, &mut |a: &&T, b: &&T| a.difference(b).is_identical())
    }
}

/// Whether two diffs agree entry by entry, see [`Diff::equivalent`].
pub fn equivalent_all<T: Differentiate>(left: &[Diff<&T>], right: &[Diff<&T>]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a.equivalent(b))
}

impl<E: fmt::Display> fmt::Display for Diff<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diff::Deleted { entry, index } => write!(f, "delete({entry}, {index})"),
            Diff::Inserted { entry, index } => write!(f, "insert({entry}, {index})"),
            Diff::Moved {
                entry,
                from_index,
                to_index,
            } => write!(f, "move({entry}, {from_index}->{to_index})"),
            Diff::Updated {
                entry,
                from_index,
                to_index,
            } => write!(f, "update({entry}, {from_index}->{to_index})"),
            Diff::Kept {
                entry,
                from_index,
                to_index,
            } => write!(f, "keep({entry}, {from_index}->{to_index})"),
            Diff::Nested {
                entry,
                from_index,
                to_index,
                children,
            } => {
                write!(f, "nested({entry}, {from_index}->{to_index}, [")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "])")
            }
        }
    }
}
