use std::{fmt, str::FromStr};

use crate::Priority;

/// Decides which end of the priority range sits at the root of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest priority first.
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

/// Returns `true` if an item with priority `a` must sit above one with priority `b`.
pub(crate) type Dominates = fn(Priority, Priority) -> bool;

fn min_dominates(a: Priority, b: Priority) -> bool {
    a < b
}

fn max_dominates(a: Priority, b: Priority) -> bool {
    a > b
}

impl Order {
    /// Resolves the order to its comparator. Equal priorities never dominate each other.
    #[inline(always)]
    pub(crate) fn comparator(self) -> Dominates {
        match self {
            Order::Min => min_dominates,
            Order::Max => max_dominates,
        }
    }

    /// Whether a sequence of extracted priorities `prev, next` is consistent with this order.
    pub fn is_monotone(self, prev: Priority, next: Priority) -> bool {
        !self.comparator()(next, prev)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Min => write!(f, "min"),
            Order::Max => write!(f, "max"),
        }
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(Order::Min),
            "max" => Ok(Order::Max),
            _ => Err(format!("Invalid heap order: {} (expected 'min' or 'max')", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparators_are_strict() {
        let min = Order::Min.comparator();
        let max = Order::Max.comparator();

        assert!(min(1, 2));
        assert!(!min(2, 1));
        assert!(!min(3, 3));

        assert!(max(2, 1));
        assert!(!max(1, 2));
        assert!(!max(3, 3));
    }

    #[test]
    fn test_is_monotone() {
        assert!(Order::Min.is_monotone(1, 1));
        assert!(Order::Min.is_monotone(1, 5));
        assert!(!Order::Min.is_monotone(5, 1));

        assert!(Order::Max.is_monotone(5, 1));
        assert!(!Order::Max.is_monotone(1, 5));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("min".parse::<Order>(), Ok(Order::Min));
        assert_eq!("MAX".parse::<Order>(), Ok(Order::Max));
        assert!("median".parse::<Order>().is_err());
        assert_eq!(Order::Max.to_string(), "max");
    }
}
