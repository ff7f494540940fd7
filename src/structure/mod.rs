//! Data model for the playground structures
//!
//! This module provides the core data abstractions:
//! - [`value`]: Scalar payloads (`Int` or `Text`)
//! - [`element`]: Elements with stable identities and the identity counter
//! - [`sequence`]: The ordered element sequence every structure is built on
//!
//! # Structure Kinds
//!
//! All three kinds share one [`Sequence`]; they only differ in where new
//! elements go:
//!
//! ```text
//! Stack       insert Front, remove Front   (index 0 = TOP)
//! Queue       insert Back,  remove Front   (index 0 = FRONT, last = REAR)
//! LinkedList  insert Back,  remove Front   (index 0 = HEAD)
//! ```

pub mod element;
pub mod sequence;
pub mod value;

pub use element::{Element, ElementId, IdAllocator};
pub use sequence::Sequence;
pub use value::Value;

use std::fmt;
use std::str::FromStr;

/// One end of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Front,
    Back,
}

/// Which structure is being visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureKind {
    #[default]
    Stack,
    Queue,
    LinkedList,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::LinkedList,
    ];

    /// End that receives new elements
    pub fn insertion_end(self) -> End {
        match self {
            StructureKind::Stack => End::Front,
            StructureKind::Queue | StructureKind::LinkedList => End::Back,
        }
    }

    /// End elements are removed from
    pub fn removal_end(self) -> End {
        End::Front
    }

    /// Noun used in log messages
    pub fn noun(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "Linked List",
        }
    }

    /// Tab title
    pub fn title(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack (LIFO)",
            StructureKind::Queue => "Queue (FIFO)",
            StructureKind::LinkedList => "Linked List",
        }
    }

    /// Position in [`StructureKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            StructureKind::Stack => 0,
            StructureKind::Queue => 1,
            StructureKind::LinkedList => 2,
        }
    }

    /// Cycle to the next kind (stack -> queue -> linked list -> stack)
    pub fn next(self) -> Self {
        match self {
            StructureKind::Stack => StructureKind::Queue,
            StructureKind::Queue => StructureKind::LinkedList,
            StructureKind::LinkedList => StructureKind::Stack,
        }
    }

    /// Cycle to the previous kind
    pub fn prev(self) -> Self {
        match self {
            StructureKind::Stack => StructureKind::LinkedList,
            StructureKind::Queue => StructureKind::Stack,
            StructureKind::LinkedList => StructureKind::Queue,
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Unknown structure name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParseError {
    pub input: String,
}

impl fmt::Display for KindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown structure '{}' (expected stack, queue or linked-list)",
            self.input
        )
    }
}

impl std::error::Error for KindParseError {}

impl FromStr for StructureKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(StructureKind::Stack),
            "queue" => Ok(StructureKind::Queue),
            "linked-list" | "linked_list" | "linkedlist" | "list" => {
                Ok(StructureKind::LinkedList)
            }
            _ => Err(KindParseError {
                input: s.to_string(),
            }),
        }
    }
}
