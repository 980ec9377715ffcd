//! A binary heap over unique integer values that supports changing the priority of any
//! held value in `O(log n)`.
//!
//! ```
//! use keyed_heap::IndexedHeap;
//!
//! let mut timers = IndexedHeap::min();
//! timers.insert(5, 1);
//! timers.insert(3, 2);
//! timers.insert(8, 3);
//!
//! assert_eq!(timers.pop(), Ok(2));
//! timers.update(1, 0);
//! assert_eq!(timers.pop(), Ok(1));
//! assert_eq!(timers.pop(), Ok(3));
//! assert!(timers.pop().is_err());
//! ```

mod error;
mod indexed_heap;
mod order;

pub use error::HeapError;
pub use indexed_heap::IndexedHeap;
pub use order::Order;

/// Unique key of an item, e.g. a timer or connection id.
pub type Value = i64;
/// Ordering key of an item, e.g. a deadline or weight.
pub type Priority = i64;
