//! Three-valued element comparison.
//!
//! A [`Difference`] says how two elements relate: identical, the same element
//! in a changed state, or unrelated. Element types produce one through
//! [`Differentiate`]; callers can override it per pair with a
//! [`Differentiator`].

use core::ops::{BitOr, BitOrAssign};

/// The outcome of comparing two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difference {
    /// No differences between the elements.
    Nothing,
    /// The elements correspond to each other, but some of their content differs.
    Some,
    /// The elements are unrelated.
    Entire,
}

impl Difference {
    /// Join two differences.
    ///
    /// `Entire` absorbs anything, `Some` absorbs `Nothing`.
    pub fn union(self, other: Difference) -> Difference {
        match (self, other) {
            (Difference::Nothing, Difference::Nothing) => Difference::Nothing,
            (Difference::Entire, _) | (_, Difference::Entire) => Difference::Entire,
            _ => Difference::Some,
        }
    }

    /// Join every difference in `differences`. An empty iterator yields `Nothing`.
    pub fn union_all<I>(differences: I) -> Difference
    where
        I: IntoIterator<Item = Difference>,
    {
        differences
            .into_iter()
            .fold(Difference::Nothing, Difference::union)
    }

    /// Whether the elements may be aligned with each other (anything but `Entire`).
    #[inline]
    pub fn is_related(self) -> bool {
        self != Difference::Entire
    }

    /// Whether the elements are identical (`Nothing`).
    #[inline]
    pub fn is_identical(self) -> bool {
        self == Difference::Nothing
    }
}

impl BitOr for Difference {
    type Output = Difference;

    fn bitor(self, rhs: Difference) -> Difference {
        self.union(rhs)
    }
}

impl BitOrAssign for Difference {
    fn bitor_assign(&mut self, rhs: Difference) {
        *self = self.union(rhs);
    }
}

/// Elements that know how to compare themselves.
///
/// Elements whose children are themselves sequences of the same type can opt
/// into nested diffs by setting [`NESTED`](Differentiate::NESTED) and
/// returning their children from
/// [`nested_segments`](Differentiate::nested_segments).
pub trait Differentiate: Sized {
    /// Whether elements of this type can carry nested child sequences.
    const NESTED: bool = false;

    /// Compare `self` (the element before) with `other` (the element after).
    ///
    /// Must be deterministic for the duration of a diff.
    fn difference(&self, other: &Self) -> Difference;

    /// Children to diff when two related elements are kept at the same place.
    ///
    /// Only consulted when [`NESTED`](Differentiate::NESTED) is `true`.
    fn nested_segments(&self) -> Option<&[Self]> {
        None
    }
}

/// A caller-supplied comparison that takes precedence over the element's own.
///
/// Returning `None` defers to the element type's comparison basis, if any.
pub type Differentiator<'f, T> = dyn Fn(&T, &T) -> Option<Difference> + 'f;

macro_rules! differentiate_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Differentiate for $ty {
                #[inline]
                fn difference(&self, other: &Self) -> Difference {
                    if self == other {
                        Difference::Nothing
                    } else {
                        Difference::Entire
                    }
                }
            }
        )*
    };
}

differentiate_by_eq!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String, &str,
);
