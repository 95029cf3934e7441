//! Comparison resolution shared by a diff and all of its nested sub-diffs.

use crate::config::DiffConfig;
use crate::difference::Difference;

/// The element type's own comparison, when it has one.
pub(crate) type Basis<'c, T> = dyn Fn(&T, &T) -> Difference + 'c;

/// Access to the children of a nested element.
pub(crate) type NestedSegments<T> = for<'x> fn(&'x T) -> Option<&'x [T]>;

/// Resolves the difference between two elements.
///
/// Capabilities are decided once, when the comparator is built, from the
/// entry point's bounds on the element type.
pub(crate) struct Comparator<'c, T> {
    pub(crate) config: DiffConfig<'c, T>,
    basis: Option<&'c Basis<'c, T>>,
    nested: Option<NestedSegments<T>>,
}

impl<'c, T> Comparator<'c, T> {
    pub(crate) fn new(
        config: DiffConfig<'c, T>,
        basis: Option<&'c Basis<'c, T>>,
        nested: Option<NestedSegments<T>>,
    ) -> Self {
        Self {
            config,
            basis,
            nested,
        }
    }

    /// Differentiator first, then the basis, and `Entire` when neither applies.
    pub(crate) fn compare(&self, left: &T, right: &T) -> Difference {
        if let Some(difference) = self.config.differentiator.and_then(|f| f(left, right)) {
            return difference;
        }
        match self.basis {
            Some(basis) => basis(left, right),
            None => Difference::Entire,
        }
    }

    /// Children of `element`, if nested diffs are enabled and the element has any.
    pub(crate) fn nested_segments<'x>(&self, element: &'x T) -> Option<&'x [T]> {
        if !self.config.find_nested {
            return None;
        }
        self.nested.and_then(|segments| segments(element))
    }
}
