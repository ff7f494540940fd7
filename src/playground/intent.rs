//! Intents: the operations a student can request
//!
//! Each structure kind owns one add intent and one remove intent; `Clear`
//! applies to every kind.
//!
//! | Kind        | Add      | Remove        |
//! |-------------|----------|---------------|
//! | Stack       | `Push`   | `Pop`         |
//! | Queue       | `Insert` | `Delete`      |
//! | Linked list | `Append` | `RemoveFront` |

use crate::structure::StructureKind;
use std::fmt;
use std::str::FromStr;

/// The closed set of operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Push,
    Pop,
    Insert,
    Delete,
    Append,
    RemoveFront,
    Clear,
}

impl IntentKind {
    /// Add intent of a structure kind
    pub fn add_for(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Stack => IntentKind::Push,
            StructureKind::Queue => IntentKind::Insert,
            StructureKind::LinkedList => IntentKind::Append,
        }
    }

    /// Remove intent of a structure kind
    pub fn remove_for(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Stack => IntentKind::Pop,
            StructureKind::Queue => IntentKind::Delete,
            StructureKind::LinkedList => IntentKind::RemoveFront,
        }
    }

    /// Structure this intent belongs to, None for `Clear`
    pub fn structure(self) -> Option<StructureKind> {
        match self {
            IntentKind::Push | IntentKind::Pop => Some(StructureKind::Stack),
            IntentKind::Insert | IntentKind::Delete => Some(StructureKind::Queue),
            IntentKind::Append | IntentKind::RemoveFront => Some(StructureKind::LinkedList),
            IntentKind::Clear => None,
        }
    }

    /// Check if this intent creates an element
    pub fn is_add(self) -> bool {
        matches!(self, IntentKind::Push | IntentKind::Insert | IntentKind::Append)
    }

    /// Check if this intent removes an element
    pub fn is_remove(self) -> bool {
        matches!(
            self,
            IntentKind::Pop | IntentKind::Delete | IntentKind::RemoveFront
        )
    }

    /// Check if this intent may be applied to the given structure
    pub fn applies_to(self, kind: StructureKind) -> bool {
        self.structure().map_or(true, |owner| owner == kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            IntentKind::Push => "PUSH",
            IntentKind::Pop => "POP",
            IntentKind::Insert => "INSERT",
            IntentKind::Delete => "DELETE",
            IntentKind::Append => "APPEND",
            IntentKind::RemoveFront => "REMOVE_FRONT",
            IntentKind::Clear => "CLEAR",
        }
    }

    fn from_verb(verb: &str) -> Option<Self> {
        match verb.to_ascii_lowercase().as_str() {
            "push" => Some(IntentKind::Push),
            "pop" => Some(IntentKind::Pop),
            "insert" | "enqueue" => Some(IntentKind::Insert),
            "delete" | "dequeue" => Some(IntentKind::Delete),
            "append" => Some(IntentKind::Append),
            "remove" | "remove-front" | "remove_front" => Some(IntentKind::RemoveFront),
            "clear" => Some(IntentKind::Clear),
            _ => None,
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A requested operation with its optional payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub kind: IntentKind,
    pub value: Option<String>,
}

impl Intent {
    pub fn new(kind: IntentKind) -> Self {
        Intent { kind, value: None }
    }

    pub fn with_value(kind: IntentKind, value: impl Into<String>) -> Self {
        Intent {
            kind,
            value: Some(value.into()),
        }
    }

    pub fn push(value: impl Into<String>) -> Self {
        Intent::with_value(IntentKind::Push, value)
    }

    pub fn pop() -> Self {
        Intent::new(IntentKind::Pop)
    }

    pub fn insert(value: impl Into<String>) -> Self {
        Intent::with_value(IntentKind::Insert, value)
    }

    pub fn delete() -> Self {
        Intent::new(IntentKind::Delete)
    }

    pub fn append(value: impl Into<String>) -> Self {
        Intent::with_value(IntentKind::Append, value)
    }

    pub fn remove_front() -> Self {
        Intent::new(IntentKind::RemoveFront)
    }

    pub fn clear() -> Self {
        Intent::new(IntentKind::Clear)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Errors from parsing a textual intent such as `push 5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentParseError {
    Empty,
    UnknownVerb(String),
    UnexpectedValue { intent: IntentKind, value: String },
}

impl fmt::Display for IntentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentParseError::Empty => write!(f, "Empty intent"),
            IntentParseError::UnknownVerb(verb) => write!(f, "Unknown operation '{}'", verb),
            IntentParseError::UnexpectedValue { intent, value } => {
                write!(f, "{} takes no value (got '{}')", intent, value)
            }
        }
    }
}

impl std::error::Error for IntentParseError {}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parse `<verb> [value]`; add verbs without a value parse fine and are
    /// rejected later by validation, like an empty input box.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        if verb.is_empty() {
            return Err(IntentParseError::Empty);
        }

        let kind =
            IntentKind::from_verb(verb).ok_or_else(|| IntentParseError::UnknownVerb(verb.to_string()))?;

        if kind.is_add() {
            if rest.is_empty() {
                Ok(Intent::new(kind))
            } else {
                Ok(Intent::with_value(kind, rest))
            }
        } else if rest.is_empty() {
            Ok(Intent::new(kind))
        } else {
            Err(IntentParseError::UnexpectedValue {
                intent: kind,
                value: rest.to_string(),
            })
        }
    }
}
