// Read-only snapshots of the playground state

use crate::playground::LogEntry;
use crate::structure::{Element, StructureKind};

/// Copy of the playground state handed to renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: StructureKind,
    pub elements: Vec<Element>,
    pub log: Vec<LogEntry>, // Newest first
}

impl Snapshot {
    /// Empty snapshot of a kind
    pub fn empty(kind: StructureKind) -> Self {
        Snapshot {
            kind,
            elements: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Values in structural order
    pub fn values(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.value.to_string()).collect()
    }

    /// Log messages, newest first
    pub fn messages(&self) -> Vec<&str> {
        self.log.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
