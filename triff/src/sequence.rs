//! Indexable sequences the engine can diff.

use std::collections::VecDeque;

/// A sequence with O(1) access to its elements by zero-based offset.
pub trait Diffable {
    /// The element type.
    type Item;

    /// The element at `index`. Callers only pass indices below
    /// [`segment_count`](Diffable::segment_count).
    fn segment(&self, index: usize) -> &Self::Item;

    /// Number of elements.
    fn segment_count(&self) -> usize;
}

impl<T> Diffable for [T] {
    type Item = T;

    #[inline]
    fn segment(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn segment_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Diffable for [T; N] {
    type Item = T;

    #[inline]
    fn segment(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn segment_count(&self) -> usize {
        N
    }
}

impl<T> Diffable for Vec<T> {
    type Item = T;

    #[inline]
    fn segment(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn segment_count(&self) -> usize {
        self.len()
    }
}

impl<T> Diffable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn segment(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn segment_count(&self) -> usize {
        self.len()
    }
}

impl<S: Diffable + ?Sized> Diffable for &S {
    type Item = S::Item;

    #[inline]
    fn segment(&self, index: usize) -> &S::Item {
        (**self).segment(index)
    }

    #[inline]
    fn segment_count(&self) -> usize {
        (**self).segment_count()
    }
}
