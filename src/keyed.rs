// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue of key/payload entries.
//!
//! Entries are ordered by key alone; the payload rides along and never takes part in a
//! comparison, so it needs no ordering of its own.

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter;

use compare::{natural, Compare, Natural};

use super::{Iter, MinMaxHeap};

/// A key deciding an entry's place in the heap, and the payload stored with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, P> {
    pub key: K,
    pub payload: P,
}

impl<K, P> Entry<K, P> {
    pub fn new(key: K, payload: P) -> Entry<K, P> {
        Entry { key, payload }
    }

    pub fn into_parts(self) -> (K, P) {
        (self.key, self.payload)
    }
}

/// Lifts a comparator over keys to one over entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<C>(pub C);

impl<K, P, C: Compare<K>> Compare<Entry<K, P>> for ByKey<C> {
    fn compare(&self, l: &Entry<K, P>, r: &Entry<K, P>) -> Ordering {
        self.0.compare(&l.key, &r.key)
    }
}

/// A double-ended priority queue of entries ordered by key.
///
/// Entries with equal keys come out in no particular order relative to each other.
///
/// # Examples
///
/// ```
/// use minmax_heap::KeyedHeap;
///
/// let mut routes = KeyedHeap::new();
/// routes.insert(12, "harbour");
/// routes.insert(4, "ridge");
/// routes.insert(9, "valley");
///
/// assert_eq!(routes.peek_min().map(|e| e.payload), Some("ridge"));
/// assert_eq!(routes.pop_max().map(|e| e.into_parts()), Some((12, "harbour")));
/// assert_eq!(routes.size(), 2);
/// ```
#[derive(Clone)]
pub struct KeyedHeap<K, P, C: Compare<K> = Natural<K>> {
    heap: MinMaxHeap<Entry<K, P>, ByKey<C>>,
}

impl<K, P, C: Compare<K> + Default> Default for KeyedHeap<K, P, C> {
    fn default() -> KeyedHeap<K, P, C> {
        Self::with_comparator(C::default())
    }
}

impl<K: Ord, P> KeyedHeap<K, P> {
    /// Returns an empty heap ordered according to the natural order of its keys.
    pub fn new() -> KeyedHeap<K, P> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity, ordered according to the natural order of
    /// its keys.
    pub fn with_capacity(capacity: usize) -> KeyedHeap<K, P> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<K, P, C: Compare<K>> KeyedHeap<K, P, C> {
    /// Returns an empty heap whose keys are ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> KeyedHeap<K, P, C> {
        KeyedHeap { heap: MinMaxHeap::with_comparator(ByKey(cmp)) }
    }

    /// Returns an empty heap with the given capacity whose keys are ordered according to the
    /// given comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> KeyedHeap<K, P, C> {
        KeyedHeap { heap: MinMaxHeap::with_capacity_and_comparator(capacity, ByKey(cmp)) }
    }

    /// Inserts `payload` under `key`.
    pub fn insert(&mut self, key: K, payload: P) {
        self.heap.push(Entry { key, payload });
    }

    /// Removes the entry with the smallest key and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_min(&mut self) -> Option<Entry<K, P>> {
        self.heap.pop_min()
    }

    /// Removes the entry with the greatest key and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_max(&mut self) -> Option<Entry<K, P>> {
        self.heap.pop_max()
    }

    /// Returns the entry with the smallest key, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&Entry<K, P>> {
        self.heap.min()
    }

    /// Returns the entry with the greatest key, or `None` if the heap is empty.
    pub fn peek_max(&self) -> Option<&Entry<K, P>> {
        self.heap.max()
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Same as [`len`](#method.len).
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all entries from the heap.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator visiting all entries in arbitrary order.
    pub fn iter(&self) -> Iter<Entry<K, P>> {
        self.heap.iter()
    }

    /// Returns an iterator visiting all payloads in arbitrary order.
    pub fn payloads(&self) -> Payloads<K, P> {
        Payloads(self.heap.iter())
    }

    /// Returns a copy of every payload in the heap, in arbitrary order.
    ///
    /// The order may differ between calls even when nothing was pushed or popped in between.
    pub fn snapshot(&self) -> Vec<P> where P: Clone {
        self.payloads().cloned().collect()
    }

    /// Consumes the heap and returns its entries sorted by ascending key.
    pub fn into_sorted_vec(self) -> Vec<Entry<K, P>> {
        self.heap.into_sorted_vec()
    }
}

impl<K: Debug, P: Debug, C: Compare<K>> Debug for KeyedHeap<K, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}

impl<K, P, C: Compare<K> + Default> iter::FromIterator<(K, P)> for KeyedHeap<K, P, C> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> KeyedHeap<K, P, C> {
        let entries = iter.into_iter().map(|(key, payload)| Entry { key, payload }).collect();
        KeyedHeap { heap: MinMaxHeap::from_vec_and_comparator(entries, ByKey(C::default())) }
    }
}

impl<K, P, C: Compare<K>> Extend<(K, P)> for KeyedHeap<K, P, C> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(|(key, payload)| Entry { key, payload }));
    }
}

/// An iterator over the payloads of a `KeyedHeap` in arbitrary order.
///
/// Acquire through [`KeyedHeap::payloads`](struct.KeyedHeap.html#method.payloads).
pub struct Payloads<'a, K: 'a, P: 'a>(Iter<'a, Entry<K, P>>);

impl<'a, K, P> Clone for Payloads<'a, K, P> {
    fn clone(&self) -> Payloads<'a, K, P> { Payloads(self.0.clone()) }
}

impl<'a, K, P> Iterator for Payloads<'a, K, P> {
    type Item = &'a P;
    #[inline] fn next(&mut self) -> Option<&'a P> { self.0.next().map(|e| &e.payload) }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, P> DoubleEndedIterator for Payloads<'a, K, P> {
    fn next_back(&mut self) -> Option<&'a P> { self.0.next_back().map(|e| &e.payload) }
}

impl<'a, K, P> ExactSizeIterator for Payloads<'a, K, P> {}
