use std::fmt::Debug;
use std::hash::Hash;

use super::hash_map::ChainedHashMap;
use crate::{Error, Result};

/// Binary min-heap that tracks the position of every element it holds.
///
/// Each element is stored with its priority; an element → index map mirrors
/// the backing vector so that [`contains`](Self::contains) is O(1) and
/// [`decrease_key`](Self::decrease_key) can sift up from the element's
/// current slot without a linear scan. Every swap during sifting updates the
/// map for both elements involved.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<E, P>
where
    E: Hash + Eq + Clone + Debug,
    P: Ord + Clone + Debug,
{
    heap: Vec<(E, P)>,
    indices: ChainedHashMap<E, usize>,
}

impl<E, P> IndexedPriorityQueue<E, P>
where
    E: Hash + Eq + Clone + Debug,
    P: Ord + Clone + Debug,
{
    /// Creates an empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            indices: ChainedHashMap::new(),
        }
    }

    /// Creates an empty queue sized for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            indices: ChainedHashMap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `element` is currently queued
    pub fn contains(&self, element: &E) -> bool {
        self.indices.contains_key(element)
    }

    /// Current priority of a queued element
    pub fn priority(&self, element: &E) -> Option<&P> {
        self.indices
            .get(element)
            .map(|&index| &self.heap[index].1)
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<(&E, &P)> {
        self.heap.first().map(|(element, priority)| (element, priority))
    }

    /// Queues `element` with `priority`.
    ///
    /// Fails if the element is already queued; use
    /// [`decrease_key`](Self::decrease_key) to lower its priority instead.
    pub fn push(&mut self, element: E, priority: P) -> Result<()> {
        if self.indices.contains_key(&element) {
            return Err(Error::InvalidArgument(format!(
                "{:?} is already queued",
                element
            )));
        }

        let index = self.heap.len();
        self.indices.put(element.clone(), index);
        self.heap.push((element, priority));
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the element with the lowest priority
    pub fn poll(&mut self) -> Option<(E, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (element, priority) = self.heap.pop()?;
        self.indices.remove(&element);

        if !self.heap.is_empty() {
            self.record(0);
            self.sift_down(0);
        }
        Some((element, priority))
    }

    /// Lowers the priority of a queued element and restores heap order.
    ///
    /// There is no increase counterpart: a priority above the current one is
    /// rejected.
    pub fn decrease_key(&mut self, element: &E, priority: P) -> Result<()> {
        let index = *self.indices.get(element).ok_or_else(|| {
            Error::InvalidArgument(format!("{:?} is not queued", element))
        })?;

        if priority > self.heap[index].1 {
            return Err(Error::InvalidArgument(format!(
                "priority of {:?} would increase from {:?} to {:?}",
                element, self.heap[index].1, priority
            )));
        }

        self.heap[index].1 = priority;
        self.sift_up(index);
        Ok(())
    }

    /// Empties the queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.indices.clear();
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            // Strict comparison: equal priorities stay where they are.
            if self.heap[k].1 >= self.heap[parent].1 {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.heap[right].1 < self.heap[left].1 {
                right
            } else {
                left
            };

            if self.heap[k].1 <= self.heap[child].1 {
                break;
            }
            self.swap(k, child);
            k = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.record(a);
        self.record(b);
    }

    /// Writes the index of the element stored at `position` into the map.
    /// Every queued element has an entry, so a miss means the map and the
    /// heap have diverged.
    fn record(&mut self, position: usize) {
        let slot = self.indices.get_mut(&self.heap[position].0);
        debug_assert!(
            slot.is_some(),
            "heap element at {} has no index entry",
            position
        );
        if let Some(slot) = slot {
            *slot = position;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.heap.len(), self.indices.len());
        for (position, (element, priority)) in self.heap.iter().enumerate() {
            assert_eq!(self.indices.get(element), Some(&position));
            if position > 0 {
                assert!(self.heap[(position - 1) / 2].1 <= *priority);
            }
        }
    }
}

impl<E, P> Default for IndexedPriorityQueue<E, P>
where
    E: Hash + Eq + Clone + Debug,
    P: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
