//! Generic binary min-heap keyed by a numeric priority
//!
//! `std::collections::BinaryHeap` is a max-heap and needs a reversed
//! `Ord` wrapper per use; this crate keeps the queue a first-class
//! reusable component instead. Entries with equal priority are ordered
//! by the item's own `Ord` so that callers which assign items a
//! meaningful order (e.g. lexical node ids, dense indices from a sorted
//! id list) get reproducible pop order across runs.

/// Binary min-heap over `(priority, item)` pairs
///
/// `push` and `pop` are O(log n). Priorities are `f64`; NaN priorities
/// are the caller's bug and compare as equal to everything here.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    entries: Vec<Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    item: T,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an item with the given priority
    pub fn push(&mut self, item: T, priority: f64) {
        self.entries.push(Entry { priority, item });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum-priority entry
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Peek at the minimum-priority entry without removing it
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.entries.first().map(|e| (&e.item, e.priority))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.entries[a], &self.entries[b]);
        match ea.priority.partial_cmp(&eb.priority) {
            Some(std::cmp::Ordering::Less) => true,
            Some(std::cmp::Ordering::Greater) => false,
            // Equal (or NaN): fall back to the item's own order
            _ => ea.item < eb.item,
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent) {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
