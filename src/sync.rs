// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A `MinMaxHeap` behind a single `parking_lot::Mutex`.
//!
//! Every operation takes the lock for its whole duration. Hold the guard from
//! [`SyncHeap::lock`] to run several operations atomically.

use std::fmt::{self, Debug};

use compare::{natural, Compare, Natural};
use parking_lot::{Mutex, MutexGuard};

use super::MinMaxHeap;

/// A double-ended priority queue that can be shared between threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use minmax_heap::SyncHeap;
///
/// let heap = Arc::new(SyncHeap::<u32>::new());
/// let workers: Vec<_> = (0..4u32)
///     .map(|t| {
///         let heap = Arc::clone(&heap);
///         thread::spawn(move || heap.push(t))
///     })
///     .collect();
/// for w in workers {
///     w.join().unwrap();
/// }
/// assert_eq!(heap.len(), 4);
/// assert_eq!(heap.pop_max(), Some(3));
/// ```
pub struct SyncHeap<T, C: Compare<T> = Natural<T>> {
    inner: Mutex<MinMaxHeap<T, C>>,
}

impl<T, C: Compare<T> + Default> Default for SyncHeap<T, C> {
    fn default() -> SyncHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> SyncHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    pub fn new() -> SyncHeap<T> { Self::with_comparator(natural()) }
}

impl<T, C: Compare<T>> From<MinMaxHeap<T, C>> for SyncHeap<T, C> {
    fn from(heap: MinMaxHeap<T, C>) -> SyncHeap<T, C> {
        SyncHeap { inner: Mutex::new(heap) }
    }
}

impl<T, C: Compare<T>> SyncHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> SyncHeap<T, C> {
        MinMaxHeap::with_comparator(cmp).into()
    }

    /// Locks the heap, blocking until the lock is free.
    pub fn lock(&self) -> MutexGuard<MinMaxHeap<T, C>> {
        self.inner.lock()
    }

    pub fn push(&self, item: T) {
        self.inner.lock().push(item);
    }

    pub fn pop_min(&self) -> Option<T> {
        self.inner.lock().pop_min()
    }

    pub fn pop_max(&self) -> Option<T> {
        self.inner.lock().pop_max()
    }

    /// Returns a copy of the smallest item, or `None` if the heap is empty.
    pub fn min(&self) -> Option<T> where T: Clone {
        self.inner.lock().min().cloned()
    }

    /// Returns a copy of the greatest item, or `None` if the heap is empty.
    pub fn max(&self) -> Option<T> where T: Clone {
        self.inner.lock().max().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Consumes the lock and returns the heap inside.
    pub fn into_inner(self) -> MinMaxHeap<T, C> {
        self.inner.into_inner()
    }
}

impl<T: Debug, C: Compare<T>> Debug for SyncHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner.try_lock() {
            Some(heap) => f.debug_tuple("SyncHeap").field(&*heap).finish(),
            None => f.write_str("SyncHeap(<locked>)"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::thread;

    use rand::{thread_rng, Rng};
    use super::SyncHeap;

    #[test]
    fn test_threads_share_one_heap() {
        let heap = Arc::new(SyncHeap::<u64>::new());
        let workers: Vec<_> = (0..8u64)
            .map(|t| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    for i in 0..100 {
                        heap.push(t * 100 + i);
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        let heap = Arc::try_unwrap(heap).ok().unwrap().into_inner();
        assert_eq!(heap.into_sorted_vec(), (0..800).collect::<Vec<u64>>());
    }

    #[test]
    fn test_concurrent_pops_take_each_item_once() {
        let heap: Arc<SyncHeap<u32>> = Arc::new(SyncHeap::new());
        let mut rng = thread_rng();
        for _ in 0..1000 {
            heap.push(rng.gen());
        }

        let workers: Vec<_> = (0..4)
            .map(|t| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    let mut taken = Vec::new();
                    loop {
                        let item = if t % 2 == 0 { heap.pop_min() } else { heap.pop_max() };
                        match item {
                            Some(x) => taken.push(x),
                            None => return taken,
                        }
                    }
                })
            })
            .collect();
        let total: usize = workers.into_iter().map(|w| w.join().unwrap().len()).sum();
        assert_eq!(total, 1000);
        assert!(heap.is_empty());
        assert_eq!(heap.min(), None);
        assert_eq!(heap.max(), None);
    }

    #[test]
    fn test_lock_groups_operations() {
        let heap = SyncHeap::<i32>::new();
        heap.push(3);
        heap.push(1);
        {
            let mut guard = heap.lock();
            let min = guard.pop_min();
            guard.push(min.unwrap() + 10);
            assert_eq!(format!("{:?}", heap), "SyncHeap(<locked>)");
        }
        assert_eq!(heap.min(), Some(3));
        assert_eq!(heap.max(), Some(11));
        heap.clear();
        assert_eq!(format!("{:?}", heap), "SyncHeap([])");
    }
}
