use std::collections::HashMap;

use log::warn;

use crate::{
    Priority, Value,
    error::HeapError,
    order::{Dominates, Order},
};

/// An entry of the heap. Its slot is tracked in [`IndexedHeap::slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    value: Value,
    priority: Priority,
}

/// A binary heap keyed by unique values, which allows efficient priority updates by value.
#[derive(Debug, Clone)]
pub struct IndexedHeap {
    /// The array representation of the heap.
    items: Vec<Item>,
    /// Mapping from value to the slot of its item in `items`.
    slots: HashMap<Value, usize>,
    order: Order,
    dominates: Dominates,
}

impl IndexedHeap {
    /// Creates a new empty heap ordered by `order`.
    pub fn new(order: Order) -> Self {
        Self::with_capacity(order, 0)
    }

    /// Creates a new empty heap that yields the smallest priority first.
    pub fn min() -> Self {
        Self::new(Order::Min)
    }

    /// Creates a new empty heap that yields the largest priority first.
    pub fn max() -> Self {
        Self::new(Order::Max)
    }

    /// Creates a new empty heap with room for `capacity` items.
    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        IndexedHeap {
            items: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            order,
            dominates: order.comparator(),
        }
    }

    /// The order this heap was created with.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of values in the heap.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap holds no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Checks whether the heap contains an item with the given value.
    pub fn contains(&self, value: Value) -> bool {
        self.slots.contains_key(&value)
    }

    /// Returns the current priority of `value`, if it is in the heap.
    pub fn priority_of(&self, value: Value) -> Option<Priority> {
        self.slots.get(&value).map(|&slot| self.items[slot].priority)
    }

    /// Inserts `value` with the given priority.
    /// Values already in the heap are rejected with a warning and keep their priority.
    pub fn insert(&mut self, priority: Priority, value: Value) {
        if self.slots.contains_key(&value) {
            warn!("Heap can't insert repeated value: {}", value);
            return;
        }

        let slot = self.items.len();
        self.items.push(Item { value, priority });
        self.slots.insert(value, slot);
        self.sift_up(slot);
    }

    /// Removes the item at the root and returns its value.
    pub fn pop(&mut self) -> Result<Value, HeapError> {
        let last = self.items.pop().ok_or(HeapError::Empty)?;

        let top = if self.items.is_empty() {
            last
        } else {
            // Move the last item to the root and sift down
            let top = self.items[0];
            self.set_heap_at(0, last);
            self.sift_down(0);
            top
        };

        self.slots.remove(&top.value);
        Ok(top.value)
    }

    /// Changes the priority of `value` and restores the heap property.
    /// Does nothing if `value` is not in the heap.
    pub fn update(&mut self, value: Value, priority: Priority) {
        let Some(&slot) = self.slots.get(&value) else {
            return;
        };
        self.items[slot].priority = priority;

        if slot > 0 {
            let parent = self.items[Self::parent_of(slot)];
            if (self.dominates)(priority, parent.priority) {
                self.sift_up(slot);
                return;
            }
        }

        self.sift_down(slot);
    }

    /// Checks the heap property and the consistency of the value index.
    pub fn verify(&self) -> Result<(), String> {
        if self.slots.len() != self.items.len() {
            return Err(format!(
                "Index holds {} values, but the heap holds {} items",
                self.slots.len(),
                self.items.len()
            ));
        }

        for (idx, item) in self.items.iter().enumerate() {
            match self.slots.get(&item.value) {
                Some(&slot) if slot == idx => {}
                Some(&slot) => {
                    return Err(format!(
                        "Value {} is at slot {}, but indexed at slot {}",
                        item.value, idx, slot
                    ));
                }
                None => {
                    return Err(format!(
                        "Value {} at slot {} is missing from the index",
                        item.value, idx
                    ));
                }
            }

            if idx > 0 {
                let parent = &self.items[Self::parent_of(idx)];
                if (self.dominates)(item.priority, parent.priority) {
                    return Err(format!(
                        "Value {} (priority {}) at slot {} dominates its parent {} (priority {})",
                        item.value, item.priority, idx, parent.value, parent.priority
                    ));
                }
            }
        }

        Ok(())
    }

    /// Sifts the item at `idx` up the heap to restore the heap property.
    fn sift_up(&mut self, mut idx: usize) {
        let item = self.items[idx];
        while idx > 0 {
            let parent_idx = Self::parent_of(idx);
            let parent = self.items[parent_idx];

            if !(self.dominates)(item.priority, parent.priority) {
                break; // Parent is not dominated => heap property satisfied
            }

            self.set_heap_at(idx, parent);
            idx = parent_idx;
        }
        self.set_heap_at(idx, item);
    }

    /// Sifts the item at `idx` down the heap to restore the heap property.
    fn sift_down(&mut self, mut idx: usize) {
        let item = self.items[idx];
        let len = self.items.len();

        loop {
            let left = Self::left_child_of(idx);
            if left >= len {
                break; // No children
            }
            let right = left + 1;

            // Find the dominating child
            let mut best_child_idx = left;
            if right < len && (self.dominates)(self.items[right].priority, self.items[left].priority)
            {
                best_child_idx = right;
            }

            let best_child = self.items[best_child_idx];
            if !(self.dominates)(best_child.priority, item.priority) {
                break;
            }

            self.set_heap_at(idx, best_child);
            idx = best_child_idx;
        }
        self.set_heap_at(idx, item);
    }

    /// Places `item` at slot `idx` and updates the index accordingly.
    #[inline(always)]
    fn set_heap_at(&mut self, idx: usize, item: Item) {
        debug_assert!(idx < self.items.len());
        self.items[idx] = item;
        self.slots.insert(item.value, idx);
    }

    #[inline(always)]
    fn parent_of(idx: usize) -> usize {
        (idx - 1) >> 1
    }

    #[inline(always)]
    fn left_child_of(idx: usize) -> usize {
        (idx << 1) + 1
    }
}

impl Default for IndexedHeap {
    fn default() -> Self {
        Self::min()
    }
}
