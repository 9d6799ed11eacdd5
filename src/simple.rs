// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The value-only queue: every value is stored as both key and payload of a `KeyedHeap`.

use std::fmt::{self, Debug};
use std::iter;

use compare::{natural, Compare, Natural};

use super::KeyedHeap;

/// A double-ended priority queue of plain values.
///
/// # Examples
///
/// ```
/// use minmax_heap::SimpleHeap;
///
/// let mut heap = SimpleHeap::new();
/// for x in [5, 3, 8, 1, 9, 2] {
///     heap.insert(x);
/// }
/// assert_eq!((heap.min(), heap.max()), (Some(&1), Some(&9)));
/// assert_eq!(heap.pop_min(), Some(1));
/// assert_eq!(heap.pop_max(), Some(9));
/// assert_eq!(heap.size(), 4);
/// ```
#[derive(Clone)]
pub struct SimpleHeap<T, C: Compare<T> = Natural<T>> {
    heap: KeyedHeap<T, T, C>,
}

impl<T: Clone, C: Compare<T> + Default> Default for SimpleHeap<T, C> {
    fn default() -> SimpleHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord + Clone> SimpleHeap<T> {
    /// Returns an empty queue ordered according to the natural order of its values.
    pub fn new() -> SimpleHeap<T> { Self::with_comparator(natural()) }
}

impl<T: Clone, C: Compare<T>> SimpleHeap<T, C> {
    /// Returns an empty queue ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> SimpleHeap<T, C> {
        SimpleHeap { heap: KeyedHeap::with_comparator(cmp) }
    }

    pub fn insert(&mut self, value: T) {
        self.heap.insert(value.clone(), value);
    }

    /// Removes the smallest value and returns it, or `None` if the queue is empty.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop_min().map(|e| e.payload)
    }

    /// Removes the greatest value and returns it, or `None` if the queue is empty.
    pub fn pop_max(&mut self) -> Option<T> {
        self.heap.pop_max().map(|e| e.payload)
    }

    pub fn min(&self) -> Option<&T> {
        self.heap.peek_min().map(|e| &e.payload)
    }

    pub fn max(&self) -> Option<&T> {
        self.heap.peek_max().map(|e| &e.payload)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns every value in the queue, in arbitrary order.
    pub fn data(&self) -> Vec<T> {
        self.heap.snapshot()
    }
}

impl<T: Debug, C: Compare<T>> Debug for SimpleHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.heap.payloads()).finish()
    }
}

impl<T: Clone, C: Compare<T> + Default> iter::FromIterator<T> for SimpleHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SimpleHeap<T, C> {
        let heap = iter.into_iter().map(|value| (value.clone(), value)).collect();
        SimpleHeap { heap }
    }
}

impl<T: Clone, C: Compare<T>> Extend<T> for SimpleHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(|value| (value.clone(), value)));
    }
}
