//! Ordered element sequence shared by every structure kind
//!
//! A [`Sequence`] is the canonical state of the active structure. Index 0 is
//! always the top of a stack, the front of a queue, or the head of a linked
//! list. The structure kind only decides which [`End`] receives new elements.

use super::element::Element;
use super::End;
use std::collections::VecDeque;

/// The ordered elements of a structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    elements: VecDeque<Element>,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence {
            elements: VecDeque::new(),
        }
    }

    /// Place an element at the given end
    pub fn insert(&mut self, end: End, element: Element) {
        match end {
            End::Front => self.elements.push_front(element),
            End::Back => self.elements.push_back(element),
        }
    }

    /// Take the element at the given end
    pub fn remove(&mut self, end: End) -> Option<Element> {
        match end {
            End::Front => self.elements.pop_front(),
            End::Back => self.elements.pop_back(),
        }
    }

    /// Element at index 0 (top / front / head)
    pub fn first(&self) -> Option<&Element> {
        self.elements.front()
    }

    /// Element at the last index (bottom / rear / tail)
    pub fn last(&self) -> Option<&Element> {
        self.elements.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Copy the elements out in order (for snapshots)
    pub fn to_vec(&self) -> Vec<Element> {
        self.elements.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<Element> for Sequence {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Sequence {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::element::IdAllocator;
    use crate::structure::value::Value;

    #[test]
    fn test_front_insertion_becomes_index_zero() {
        let mut ids = IdAllocator::new();
        let mut seq = Sequence::new();
        seq.insert(End::Front, ids.element(Value::Int(1)));
        seq.insert(End::Front, ids.element(Value::Int(2)));
        assert_eq!(seq.first().map(|e| &e.value), Some(&Value::Int(2)));
        assert_eq!(seq.last().map(|e| &e.value), Some(&Value::Int(1)));
    }

    #[test]
    fn test_back_insertion_keeps_order() {
        let mut ids = IdAllocator::new();
        let mut seq = Sequence::new();
        for n in 1..=3 {
            seq.insert(End::Back, ids.element(Value::Int(n)));
        }
        let values: Vec<_> = seq.iter().map(|e| e.value.clone()).collect();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(seq.remove(End::Front).map(|e| e.value), Some(Value::Int(1)));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut seq = Sequence::new();
        assert!(seq.remove(End::Front).is_none());
        assert!(seq.is_empty());
    }
}
