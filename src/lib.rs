// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with a min-max heap.
//!
//! A `MinMaxHeap` can be used wherever a [`BinaryHeap`][bh] can, but gives efficient access to
//! both the smallest and the greatest item and accepts custom comparators. If you only need
//! access to one end, `BinaryHeap` is more efficient.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the smallest or greatest item is
//! `O(log n)`. Retrieving the smallest or greatest item is `O(1)`.
//!
//! On top of the heap sit two thinner layers:
//!
//! * [`KeyedHeap`] orders `(key, payload)` entries by key only.
//! * [`SimpleHeap`] is the value-only flavour where every value is its own key.
//!
//! With the `parking_lot` feature, `SyncHeap` wraps a heap in a single lock so it can be shared
//! between threads.
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

pub mod keyed;
pub mod simple;
#[cfg(feature = "parking_lot")]
pub mod sync;

pub use keyed::{ByKey, Entry, KeyedHeap};
pub use simple::SimpleHeap;
#[cfg(feature = "parking_lot")]
pub use sync::SyncHeap;

// A min-max heap is a complete binary tree with the following properties:
//
// (1) Levels alternate between "min" and "max" levels, starting with a
//     min level at the root (depth 0).
// (2) An item on a min level is less than or equal to every item below it.
// (3) An item on a max level is greater than or equal to every item below it.
//
// This implies that the min item is the root and the max item is one of
// the root's children (or the root itself when it is alone).
//
// The tree is stored level by level in a Vec. Here's the layout of a
// tree with 10 items, the numbers being offsets in the array:
//
//                 0              min
//            /        \
//          1            2        max
//        /   \        /   \
//       3     4      5     6     min
//      / \   /
//     7   8 9                    max
//
// Children of x live at 2x+1 and 2x+2, grandchildren at 4x+3 ..= 4x+6.

fn is_min_level(x: usize) -> bool {
    (x + 1).ilog2() % 2 == 0
}

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// Whether `a` belongs above `b` on a min level (`MIN`) or on a max level.
fn precedes<T, C: Compare<T>, const MIN: bool>(cmp: &C, a: &T, b: &T) -> bool {
    if MIN {
        cmp.compares_lt(a, b)
    } else {
        cmp.compares_gt(a, b)
    }
}

/// Index of the greatest item of a non-empty heap.
fn max_index<T, C: Compare<T>>(v: &[T], cmp: &C) -> usize {
    debug_assert!(!v.is_empty());
    match v.len() {
        0 | 1 => 0,
        2 => 1,
        _ => {
            if cmp.compares_lt(&v[1], &v[2]) { 2 } else { 1 }
        }
    }
}

/// Moves the item at `x` up through the levels of its own parity.
fn bubble_up_along<T, C: Compare<T>, const MIN: bool>(v: &mut [T], mut x: usize, cmp: &C) {
    while x > 2 {
        let grand = parent(parent(x));
        if precedes::<T, C, MIN>(cmp, &v[x], &v[grand]) {
            v.swap(x, grand);
            x = grand;
        } else {
            return;
        }
    }
}

/// Everything except the item at `x` forms a valid min-max heap and `x` has
/// no children. This function restores the heap properties.
fn bubble_up<T, C: Compare<T>>(v: &mut [T], x: usize, cmp: &C) {
    if x == 0 { return; }
    let par = parent(x);
    if is_min_level(x) {
        if cmp.compares_gt(&v[x], &v[par]) {
            v.swap(x, par);
            bubble_up_along::<T, C, false>(v, par, cmp);
        } else {
            bubble_up_along::<T, C, true>(v, x, cmp);
        }
    } else if cmp.compares_lt(&v[x], &v[par]) {
        v.swap(x, par);
        bubble_up_along::<T, C, true>(v, par, cmp);
    } else {
        bubble_up_along::<T, C, false>(v, x, cmp);
    }
}

/// The subtrees below `x` are valid and `x` sits on a min level (`MIN`) or
/// a max level, but holds an arbitrary item. Moves that item down until the
/// subtree rooted at `x` is valid again.
fn trickle_down_along<T, C: Compare<T>, const MIN: bool>(v: &mut [T], mut x: usize, cmp: &C) {
    loop {
        let first = 2 * x + 1;
        if first >= v.len() { return; } // No children. We're done.
        // Pick the most extreme among children and grandchildren
        let mut best = first;
        let rest = iter::once(first + 1).chain(4 * x + 3..4 * x + 7);
        for c in rest.take_while(|&c| c < v.len()) {
            if precedes::<T, C, MIN>(cmp, &v[c], &v[best]) { best = c; }
        }
        if !precedes::<T, C, MIN>(cmp, &v[best], &v[x]) { return; }
        v.swap(best, x);
        if best <= first + 1 { return; } // swapped with a child
        let par = parent(best);
        if precedes::<T, C, MIN>(cmp, &v[par], &v[best]) { v.swap(par, best); }
        x = best;
    }
}

fn trickle_down<T, C: Compare<T>>(v: &mut [T], x: usize, cmp: &C) {
    if is_min_level(x) {
        trickle_down_along::<T, C, true>(v, x, cmp);
    } else {
        trickle_down_along::<T, C, false>(v, x, cmp);
    }
}

/// The item at the max slot `x` of an otherwise valid heap has been replaced
/// with some other value. This function restores the heap properties.
fn repair_max<T, C: Compare<T>>(v: &mut [T], x: usize, cmp: &C) {
    if x == 0 {
        trickle_down_along::<T, C, true>(v, 0, cmp);
        return;
    }
    if cmp.compares_lt(&v[x], &v[0]) { v.swap(0, x); }
    trickle_down_along::<T, C, false>(v, x, cmp);
}

/// Removes the item at the root or at one of its children, filling the hole
/// with the last item.
fn remove_at<T, C: Compare<T>>(v: &mut Vec<T>, x: usize, cmp: &C) -> T {
    debug_assert!(x < 3);
    let item = v.swap_remove(x);
    if x < v.len() {
        trickle_down(v, x, cmp);
    }
    item
}

/// A double-ended priority queue implemented with a min-max heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
/// Use [`min_mut`](#method.min_mut) or [`max_mut`](#method.max_mut) to change
/// an extreme item in place.
#[derive(Clone)]
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for MinMaxHeap<T, C> {
    #[inline]
    fn default() -> MinMaxHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinMaxHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// The heap will be able to hold at least `capacity` items without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> MinMaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.min_max(), Some((&1, &6)));
    /// ```
    fn from(vec: Vec<T>) -> MinMaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{natural, Compare};
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::<u32, _>::with_comparator(natural().rev());
    /// heap.extend(vec![3, 1, 2]);
    /// assert_eq!(heap.min(), Some(&3));
    /// assert_eq!(heap.max(), Some(&1));
    /// ```
    pub fn with_comparator(cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> MinMaxHeap<T, C> {
        let mut heap = MinMaxHeap { data: vec, cmp };
        // Every item at or past len / 2 is a leaf.
        for x in (0..heap.data.len() / 2).rev() {
            trickle_down(&mut heap.data, x, &heap.cmp);
        }
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns the comparator ordering this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a guard giving mutable access to the smallest item in the heap.
    ///
    /// The heap is repaired when the guard is dropped. Returns `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::from(vec![2, 1, 3]);
    /// *heap.min_mut().unwrap() = 7;
    /// assert_eq!(heap.min_max(), Some((&2, &7)));
    /// ```
    pub fn min_mut(&mut self) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some(PeekMut { heap: self, index: 0, kind: PeekKind::Min })
        }
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some(&self.data[max_index(&self.data, &self.cmp)])
        }
    }

    /// Returns a guard giving mutable access to the greatest item in the heap.
    ///
    /// The heap is repaired when the guard is dropped. Returns `None` if the heap is empty.
    pub fn max_mut(&mut self) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            let index = max_index(&self.data, &self.cmp);
            Some(PeekMut { heap: self, index, kind: PeekKind::Max })
        }
    }

    /// Returns references to the smallest and greatest items in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some((&self.data[0], &self.data[max_index(&self.data, &self.cmp)]))
        }
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_min(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let min = if self.data.is_empty() {
            None
        } else {
            Some(remove_at(&mut self.data, 0, &self.cmp))
        };
        debug_assert!(self.is_valid());
        min
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_max(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let max = match self.data.len() {
            0..=2 => self.data.pop(),
            _ => {
                let top = max_index(&self.data, &self.cmp);
                Some(remove_at(&mut self.data, top, &self.cmp))
            }
        };
        debug_assert!(self.is_valid());
        max
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        let last = self.data.len() - 1;
        bubble_up(&mut self.data, last, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Pushes an item onto the heap, then removes the smallest item and returns it.
    ///
    /// This is faster than calling `push` and `pop_min` separately. When `item` is not greater
    /// than the current minimum it is handed straight back.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::from(vec![3, 5]);
    /// assert_eq!(heap.push_pop_min(1), 1);
    /// assert_eq!(heap.push_pop_min(4), 3);
    /// assert_eq!(heap.min_max(), Some((&4, &5)));
    /// ```
    pub fn push_pop_min(&mut self, item: T) -> T {
        debug_assert!(self.is_valid());
        if self.data.is_empty() || !self.cmp.compares_lt(&self.data[0], &item) {
            return item;
        }
        let min = mem::replace(&mut self.data[0], item);
        trickle_down_along::<T, C, true>(&mut self.data, 0, &self.cmp);
        debug_assert!(self.is_valid());
        min
    }

    /// Pushes an item onto the heap, then removes the greatest item and returns it.
    ///
    /// This is faster than calling `push` and `pop_max` separately. When `item` is not less
    /// than the current maximum it is handed straight back.
    pub fn push_pop_max(&mut self, item: T) -> T {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            return item;
        }
        let top = max_index(&self.data, &self.cmp);
        if !self.cmp.compares_gt(&self.data[top], &item) {
            return item;
        }
        let max = mem::replace(&mut self.data[top], item);
        repair_max(&mut self.data, top, &self.cmp);
        debug_assert!(self.is_valid());
        max
    }

    /// Consumes the heap and returns its items as a vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        // vec[..=end] is a valid heap; park its max at `end`.
        for end in (1..vec.len()).rev() {
            let top = max_index(&vec[..=end], &self.cmp);
            vec.swap(top, end);
            if top < end {
                trickle_down(&mut vec[..end], top, &self.cmp);
            }
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if every item `x` other than the root satisfies:
    ///
    /// 1. If the parent of `x` is on a min level, the parent is less than or
    ///    equal to `x`; otherwise it is greater than or equal to `x`, AND
    /// 2. Likewise for the grandparent of `x`, if any.
    ///
    /// Ancestors further up follow by transitivity.
    fn is_valid(&self) -> bool {
        let v = &self.data;
        let holds = |anc: usize, x: usize| {
            if is_min_level(anc) {
                self.cmp.compares_le(&v[anc], &v[x])
            } else {
                self.cmp.compares_ge(&v[anc], &v[x])
            }
        };
        (1..v.len()).all(|x| {
            let par = parent(x);
            holds(par, x) && (par == 0 || holds(parent(par), x))
        })
    }
}

impl<T: Debug, C: Compare<T>> Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for MinMaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinMaxHeap<T, C> {
        MinMaxHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::iter`](struct.MinMaxHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::drain`](struct.MinMaxHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for MinMaxHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinMaxHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

#[derive(Debug)]
enum PeekKind {
    Min,
    Max,
    Removed,
}

/// Mutable access to the smallest or greatest item of a `MinMaxHeap`.
///
/// Acquire through [`MinMaxHeap::min_mut`](struct.MinMaxHeap.html#method.min_mut) or
/// [`MinMaxHeap::max_mut`](struct.MinMaxHeap.html#method.max_mut). The heap is repaired
/// when the guard goes out of scope.
pub struct PeekMut<'a, T: 'a, C: 'a + Compare<T> = Natural<T>> {
    heap: &'a mut MinMaxHeap<T, C>,
    index: usize,
    kind: PeekKind,
}

impl<'a, T: 'a, C: Compare<T>> Drop for PeekMut<'a, T, C> {
    fn drop(&mut self) {
        let heap = &mut *self.heap;
        match self.kind {
            PeekKind::Min => trickle_down_along::<T, C, true>(&mut heap.data, 0, &heap.cmp),
            PeekKind::Max => repair_max(&mut heap.data, self.index, &heap.cmp),
            PeekKind::Removed => {}
        }
        debug_assert!(heap.is_valid());
    }
}

impl<'a, T: 'a, C: Compare<T>> Deref for PeekMut<'a, T, C> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.heap.data[self.index]
    }
}

impl<'a, T: 'a, C: Compare<T>> DerefMut for PeekMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.heap.data[self.index]
    }
}

impl<'a, T: 'a, C: Compare<T>> PeekMut<'a, T, C> {
    /// Removes the peeked item from the heap and returns it.
    pub fn pop(mut self) -> T {
        // Only the peeked slot may be out of order, and it is the one going away.
        self.kind = PeekKind::Removed;
        remove_at(&mut self.heap.data, self.index, &self.heap.cmp)
    }
}


#[cfg(test)]
mod test {
    use compare::{natural, Compare};
    use rand::{thread_rng, Rng};
    use super::MinMaxHeap;

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = MinMaxHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            tmp = heap.into_sorted_vec();
            for pair in tmp.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_pop_min() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = MinMaxHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            let mut tmpx: Option<u32> = None;
            loop {
                let tmpy = heap.pop_min();
                match (tmpx, tmpy) {
                    (_, None) => break,
                    (Some(x), Some(y)) => assert!(x <= y),
                    _ => ()
                }
                tmpx = tmpy;
            }
            tmp = heap.into_vec();
        }
    }

    #[test]
    fn fuzz_pop_max() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = MinMaxHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            let mut tmpx: Option<u32> = None;
            loop {
                let tmpy = heap.pop_max();
                match (tmpx, tmpy) {
                    (_, None) => break,
                    (Some(x), Some(y)) => assert!(x >= y),
                    _ => ()
                }
                tmpx = tmpy;
            }
            tmp = heap.into_vec();
        }
    }

    #[test]
    fn fuzz_mixed_ops_against_sorted_vec() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let mut heap = MinMaxHeap::new();
            let mut model: Vec<u8> = Vec::new();
            for _ in 0..300 {
                match rng.gen_range(0..5) {
                    0 | 1 => {
                        let item = rng.gen::<u8>();
                        heap.push(item);
                        let at = model.partition_point(|&m| m < item);
                        model.insert(at, item);
                    }
                    2 => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        assert_eq!(heap.pop_min(), expected);
                    }
                    3 => assert_eq!(heap.pop_max(), model.pop()),
                    _ => {
                        let item = rng.gen::<u8>();
                        if rng.gen::<bool>() {
                            model.push(item);
                            model.sort();
                            assert_eq!(heap.push_pop_min(item), model.remove(0));
                        } else {
                            model.push(item);
                            model.sort();
                            assert_eq!(heap.push_pop_max(item), model.pop().unwrap());
                        }
                    }
                }
                assert!(heap.is_valid());
                assert_eq!(heap.len(), model.len());
                assert_eq!(heap.min(), model.first());
                assert_eq!(heap.max(), model.last());
            }
        }
    }

    #[test]
    fn fuzz_from_vec() {
        let mut rng = thread_rng();
        for len in 0..70 {
            let vec: Vec<i16> = (0..len).map(|_| rng.gen_range(-20..20)).collect();
            let mut sorted = vec.clone();
            sorted.sort();
            let heap = MinMaxHeap::from(vec);
            assert!(heap.is_valid());
            assert_eq!(heap.into_sorted_vec(), sorted);
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = MinMaxHeap::<i32>::from(vec![]);
        assert_eq!(heap.min_max(), None);

        let heap = MinMaxHeap::from(vec![2]);
        assert_eq!(heap.min_max(), Some((&2, &2)));

        let heap = MinMaxHeap::from(vec![2, 1]);
        assert_eq!(heap.min_max(), Some((&1, &2)));

        let heap = MinMaxHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.min_max(), Some((&1, &3)));

        let heap = MinMaxHeap::from(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(heap.min_max(), Some((&1, &9)));
    }

    #[test]
    fn test_is_valid() {
        fn new(data: Vec<i32>) -> MinMaxHeap<i32> {
            MinMaxHeap { data, cmp: natural() }
        }

        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![1, 5]).is_valid());
        assert!(new(vec![1, 5, 3]).is_valid());
        assert!(new(vec![1, 5, 6]).is_valid());
        assert!(new(vec![1, 5, 3, 2, 4]).is_valid());
        assert!(new(vec![1, 9, 8, 2, 3, 4, 5]).is_valid());
        assert!(new(vec![1, 9, 8, 2, 3, 4, 5, 2, 9]).is_valid());

        assert!(!new(vec![2, 1]).is_valid());                      // child below min root
        assert!(!new(vec![3, 5, 1]).is_valid());                   // child below min root
        assert!(!new(vec![1, 5, 3, 6]).is_valid());                // above max parent
        assert!(!new(vec![1, 5, 3, 0]).is_valid());                // below min grandparent
        assert!(!new(vec![1, 9, 8, 2, 3, 4, 5, 0]).is_valid());    // below min parent
        assert!(!new(vec![1, 9, 8, 2, 3, 4, 5, 10]).is_valid());   // above max grandparent
    }

    #[test]
    fn test_push_levels() {
        let mut heap = MinMaxHeap::new();
        for x in [5, 3, 8, 1, 9, 2] {
            heap.push(x);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.min_max(), Some((&1, &9)));
        assert_eq!(heap.pop_min(), Some(1));
        assert_eq!(heap.min(), Some(&2));
        assert_eq!(heap.pop_max(), Some(9));
        assert_eq!(heap.max(), Some(&8));
        assert_eq!(heap.into_sorted_vec(), vec![2, 3, 5, 8]);
    }

    #[test]
    fn test_empty() {
        let mut heap = MinMaxHeap::<i32>::new();
        for _ in 0..3 {
            assert_eq!(heap.pop_min(), None);
            assert_eq!(heap.pop_max(), None);
            assert_eq!(heap.min(), None);
            assert_eq!(heap.max(), None);
            assert!(heap.min_mut().is_none());
            assert!(heap.max_mut().is_none());
        }
        assert_eq!(heap.push_pop_min(4), 4);
        assert_eq!(heap.push_pop_max(4), 4);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_comparator() {
        let mut heap = MinMaxHeap::<i32, _>::with_comparator(natural().rev());
        heap.extend(&[4, 1, 7, 3]);
        assert_eq!(heap.min_max(), Some((&7, &1)));
        assert_eq!(heap.pop_min(), Some(7));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.into_sorted_vec(), vec![4, 3]);

        let words: Vec<String> = vec!["ccc".into(), "a".into(), "bb".into()];
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        let heap = MinMaxHeap::from_vec_and_comparator(words, by_len);
        let (min, max) = heap.min_max().unwrap();
        assert_eq!((min.as_str(), max.as_str()), ("a", "ccc"));
    }

    #[test]
    fn test_iter_and_drain() {
        let mut heap: MinMaxHeap<i32> = (1..=10).collect();
        let mut seen: Vec<i32> = heap.iter().cloned().collect();
        seen.sort();
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
        assert_eq!(heap.iter().len(), 10);

        let mut drained: Vec<i32> = heap.drain().collect();
        drained.sort();
        assert_eq!(drained, seen);
        assert!(heap.is_empty());
        assert_eq!(format!("{:?}", heap), "[]");
    }

    #[test]
    fn test_min_mut() {
        let mut heap = MinMaxHeap::<i32>::from(vec![2, 1, 3]);

        {
            let mut peek = heap.min_mut().unwrap();
            *peek = 0;
        }

        assert_eq!(heap.min_max(), Some((&0, &3)));

        {
            heap.min_mut().unwrap().pop();
        }

        assert_eq!(heap.min_max(), Some((&2, &3)));
        assert_eq!(heap.len(), 2);

        *heap.min_mut().unwrap() = 10;
        assert_eq!(heap.min_max(), Some((&3, &10)));
    }

    #[test]
    fn test_max_mut() {
        let mut heap = MinMaxHeap::<i32>::from(vec![2, 1, 3]);

        {
            let mut peek = heap.max_mut().unwrap();
            *peek = 6;
        }

        assert_eq!(heap.min_max(), Some((&1, &6)));

        {
            heap.max_mut().unwrap().pop();
        }

        assert_eq!(heap.min_max(), Some((&1, &2)));
        assert_eq!(heap.len(), 2);

        *heap.max_mut().unwrap() = 0;
        assert_eq!(heap.min_max(), Some((&0, &1)));
    }

    #[test]
    fn fuzz_peek_mut() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap: MinMaxHeap<u16> = (0..40).map(|_| rng.gen_range(0..100)).collect();
            for _ in 0..40 {
                let item = rng.gen_range(0..100);
                if rng.gen::<bool>() {
                    *heap.min_mut().unwrap() = item;
                } else {
                    *heap.max_mut().unwrap() = item;
                }
                assert!(heap.is_valid());
            }
            let len = heap.len();
            assert_eq!(heap.into_sorted_vec().len(), len);
        }
    }
}
