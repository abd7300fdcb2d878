//! Binary min-heap over values exposing a numeric priority.

/// Describes any value that exposes a floating-point priority used to order
/// it inside the heap.
pub trait Prioritized {
    /// Numeric priority; lower values surface first.
    fn priority(&self) -> f64;
}

/// Binary min-heap keeping the lowest-priority item at the root.
///
/// The heap property holds between parents and children only; siblings carry
/// no order, and ties among equal priorities resolve arbitrarily. Positions
/// reshuffle on every [`MinHeap::push`] and [`MinHeap::pop`], so callers must
/// not hold on to item indices.
#[derive(Clone, Debug, Default)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Prioritized> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a heap from an initial item set in O(n) via bottom-up heapify.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        heap.heapify();
        heap
    }

    /// Number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item, restoring the heap property by sifting up.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum-priority item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Returns the minimum-priority item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn heapify(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let mut smallest = left;
            let right = left + 1;
            if right < len && self.less(right, left) {
                smallest = right;
            }
            if !self.less(smallest, index) {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.items[i].priority() < self.items[j].priority()
    }
}
