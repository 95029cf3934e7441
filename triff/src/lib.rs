//! # Triff
//!
//! Sequence diffing built on a three-valued comparator.
//!
//! Elements compare as identical ([`Difference::Nothing`]), changed
//! ([`Difference::Some`]) or unrelated ([`Difference::Entire`]). The diff
//! aligns every pair that is not unrelated, so besides deletions and
//! insertions it can report elements that were updated in place, moved, or
//! whose children changed.
//!
//! ## Algorithm Overview
//!
//! 1. **Edit script**: linear-space Myers bisection over the "related"
//!    predicate, producing `Deleted`, `Inserted` and `Kept` entries
//! 2. **Moves** (optional): delete/insert pairs of identical elements become
//!    `Moved` entries
//! 3. **Nesting** (optional): kept elements whose children differ become
//!    `Nested` entries carrying a child diff, related but non-identical ones
//!    become `Updated`
//!
//! ## Usage
//!
//! ```
//! use triff::{Diff, DiffConfig, diff_eq};
//!
//! let before = ["a", "b", "c", "d"];
//! let after = ["b", "c", "d", "a"];
//!
//! let diffs = diff_eq(&before, &after, &DiffConfig::default()).unwrap();
//! assert_eq!(
//!     diffs.last(),
//!     Some(&Diff::Moved { entry: &"a", from_index: 0, to_index: 3 })
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod tracing_macros;

mod comparator;
mod config;
mod diff;
mod difference;
mod engine;
mod error;
mod sequence;

pub use config::DiffConfig;
pub use diff::{Diff, equivalent_all};
pub use difference::{Difference, Differentiate, Differentiator};
pub use error::DiffError;
pub use sequence::Diffable;

use comparator::{Comparator, NestedSegments};
use engine::Engine;

/// Diff two sequences of elements that compare themselves.
///
/// Nested diffs are produced when `config.find_nested` is set and the element
/// type opts in through [`Differentiate::NESTED`].
///
/// # Example
///
/// ```
/// use triff::{Diff, DiffConfig, Difference, Differentiate, diff};
///
/// #[derive(Debug, PartialEq)]
/// struct Row {
///     id: u32,
///     title: &'static str,
/// }
///
/// impl Differentiate for Row {
///     fn difference(&self, other: &Self) -> Difference {
///         match (self.id == other.id, self.title == other.title) {
///             (false, _) => Difference::Entire,
///             (true, true) => Difference::Nothing,
///             (true, false) => Difference::Some,
///         }
///     }
/// }
///
/// let before = [Row { id: 1, title: "draft" }];
/// let after = [Row { id: 1, title: "final" }];
///
/// let config = DiffConfig::new().find_nested(true);
/// let diffs = diff(&before, &after, &config).unwrap();
/// assert!(matches!(diffs[0], Diff::Updated { from_index: 0, to_index: 0, .. }));
/// ```
pub fn diff<'a, T, L, R>(
    left: &'a L,
    right: &'a R,
    config: &DiffConfig<'_, T>,
) -> Result<Vec<Diff<&'a T>>, DiffError>
where
    T: Differentiate + 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
{
    let basis = |a: &T, b: &T| a.difference(b);
    let nested: Option<NestedSegments<T>> = if T::NESTED {
        Some(T::nested_segments)
    } else {
        None
    };
    let comparator = Comparator::new(*config, Some(&basis), nested);
    Engine::new(left, right, &comparator).run()
}

/// Diff two sequences by equality: equal elements are `Nothing`, anything
/// else is `Entire`.
pub fn diff_eq<'a, T, L, R>(
    left: &'a L,
    right: &'a R,
    config: &DiffConfig<'_, T>,
) -> Result<Vec<Diff<&'a T>>, DiffError>
where
    T: PartialEq + 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
{
    let basis = |a: &T, b: &T| {
        if a == b {
            Difference::Nothing
        } else {
            Difference::Entire
        }
    };
    let comparator = Comparator::new(*config, Some(&basis), None);
    Engine::new(left, right, &comparator).run()
}

/// Diff two sequences with `compare` as the comparison basis.
///
/// A differentiator in `config` still takes precedence.
pub fn diff_by<'a, T, L, R, F>(
    left: &'a L,
    right: &'a R,
    config: &DiffConfig<'_, T>,
    compare: F,
) -> Result<Vec<Diff<&'a T>>, DiffError>
where
    T: 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
    F: Fn(&T, &T) -> Difference,
{
    let comparator = Comparator::new(*config, Some(&compare), None);
    Engine::new(left, right, &comparator).run()
}

/// Diff two sequences using only the differentiator in `config`.
///
/// Pairs the differentiator declines (or all pairs, without one) are
/// `Entire`.
pub fn diff_with<'a, T, L, R>(
    left: &'a L,
    right: &'a R,
    config: &DiffConfig<'_, T>,
) -> Result<Vec<Diff<&'a T>>, DiffError>
where
    T: 'a,
    L: Diffable<Item = T> + ?Sized,
    R: Diffable<Item = T> + ?Sized,
{
    let comparator = Comparator::new(*config, None, None);
    Engine::new(left, right, &comparator).run()
}
