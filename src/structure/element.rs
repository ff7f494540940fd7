//! Elements and their identities
//!
//! Every element receives an [`ElementId`] from an [`IdAllocator`] when it is
//! created. Identities are never reused during a session, so two elements
//! holding the same value are still told apart by renderers and animators.

use super::value::Value;
use std::fmt;

/// Stable identity of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value placed in a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub value: Value,
}

/// Monotonic identity counter
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator { next: 0 }
    }

    /// Hand out the next identity
    pub fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Create an element with a fresh identity
    pub fn element(&mut self, value: Value) -> Element {
        Element {
            id: self.allocate(),
            value,
        }
    }

    /// Number of identities handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        let c = ids.element(Value::Int(1)).id;
        assert!(a < b && b < c);
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_equal_values_get_distinct_ids() {
        let mut ids = IdAllocator::new();
        let first = ids.element(Value::Int(5));
        let second = ids.element(Value::Int(5));
        assert_eq!(first.value, second.value);
        assert_ne!(first, second);
    }
}
