use std::{error::Error, fmt::Display};

/// Errors returned by [`IndexedHeap`](crate::IndexedHeap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` was called on a heap without items.
    Empty,
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::Empty => write!(f, "Cannot pop from an empty heap"),
        }
    }
}

impl Error for HeapError {}
