//! Insertion-order iteration
//!
//! Both iterators walk the intrusive order list from head to tail, so they
//! visit elements by the time of their first insertion, not by table
//! position. They borrow the multiset shared, which statically rules out
//! mutation while an iteration is in flight.

use std::iter::FusedIterator;

use super::OrderedMultiset;

/// Iterator over an [`OrderedMultiset`] in first-insertion order.
///
/// An element with multiplicity `k` is yielded `k` consecutive times before
/// the iterator advances to the next distinct element.
#[derive(Debug)]
pub struct Iter<'a, T, S> {
    set: &'a OrderedMultiset<T, S>,
    cursor: Option<usize>,
    /// Occurrences of the current slot already yielded.
    emitted: usize,
    remaining: usize,
}

impl<'a, T, S> Iter<'a, T, S> {
    pub(crate) fn new(set: &'a OrderedMultiset<T, S>) -> Self {
        Self {
            set,
            cursor: set.order_head(),
            emitted: 0,
            remaining: set.len(),
        }
    }
}

impl<'a, T, S> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.cursor?;
        let slot = self.set.slot(index);
        self.emitted += 1;
        self.remaining -= 1;
        if self.emitted == slot.count {
            self.cursor = slot.next;
            self.emitted = 0;
        }
        Some(&slot.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S> ExactSizeIterator for Iter<'_, T, S> {}

impl<T, S> FusedIterator for Iter<'_, T, S> {}

/// Iterator over `(element, multiplicity)` pairs in first-insertion order.
///
/// Each distinct element appears exactly once, paired with its live count.
#[derive(Debug)]
pub struct IterCounts<'a, T, S> {
    set: &'a OrderedMultiset<T, S>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T, S> IterCounts<'a, T, S> {
    pub(crate) fn new(set: &'a OrderedMultiset<T, S>) -> Self {
        Self {
            set,
            cursor: set.order_head(),
            remaining: set.distinct_count(),
        }
    }
}

impl<'a, T, S> Iterator for IterCounts<'a, T, S> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<(&'a T, usize)> {
        let index = self.cursor?;
        let slot = self.set.slot(index);
        self.cursor = slot.next;
        self.remaining -= 1;
        Some((&slot.element, slot.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S> ExactSizeIterator for IterCounts<'_, T, S> {}

impl<T, S> FusedIterator for IterCounts<'_, T, S> {}
