//! The pure transition function
//!
//! [`apply`] takes the active structure kind, the current sequence and one
//! intent, and returns a [`Transition`]: the resulting sequence, the log
//! entry to record (if any) and the outcome. The input sequence is never
//! modified; the caller decides whether to commit the result.

use super::errors::OperationError;
use super::intent::{Intent, IntentKind};
use super::log::LogEntry;
use crate::structure::{Element, IdAllocator, Sequence, StructureKind, Value};

/// What a successful intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Added(Element),
    Removed(Element),
    /// Sequence emptied; the owner must also discard the whole log
    Cleared,
}

/// Result of applying one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub sequence: Sequence,
    pub entry: Option<LogEntry>,
    pub result: Result<Effect, OperationError>,
}

impl Transition {
    fn rejected(current: &Sequence, error: OperationError, entry: Option<LogEntry>) -> Self {
        Transition {
            sequence: current.clone(),
            entry,
            result: Err(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.result.as_ref().err()
    }

    /// Value taken out by a remove-type intent
    pub fn removed_value(&self) -> Option<&Value> {
        match &self.result {
            Ok(Effect::Removed(element)) => Some(&element.value),
            _ => None,
        }
    }

    /// Element created by an add-type intent
    pub fn added(&self) -> Option<&Element> {
        match &self.result {
            Ok(Effect::Added(element)) => Some(element),
            _ => None,
        }
    }
}

/// Apply one intent to a sequence of the given kind
pub fn apply(
    kind: StructureKind,
    current: &Sequence,
    intent: &Intent,
    ids: &mut IdAllocator,
) -> Transition {
    if !intent.kind.applies_to(kind) {
        return Transition::rejected(
            current,
            OperationError::Mismatch {
                intent: intent.kind,
                structure: kind,
            },
            None,
        );
    }

    if intent.kind == IntentKind::Clear {
        return Transition {
            sequence: Sequence::new(),
            entry: None,
            result: Ok(Effect::Cleared),
        };
    }

    if intent.kind.is_add() {
        let Some(value) = intent.value.as_deref().and_then(Value::parse) else {
            return Transition::rejected(
                current,
                OperationError::Validation {
                    intent: intent.kind,
                },
                None,
            );
        };

        let element = ids.element(value);
        let entry = LogEntry::info(added_message(kind, &element.value));
        let mut sequence = current.clone();
        sequence.insert(kind.insertion_end(), element.clone());

        return Transition {
            sequence,
            entry: Some(entry),
            result: Ok(Effect::Added(element)),
        };
    }

    let mut sequence = current.clone();
    match sequence.remove(kind.removal_end()) {
        Some(element) => Transition {
            sequence,
            entry: Some(LogEntry::info(removed_message(kind, &element.value))),
            result: Ok(Effect::Removed(element)),
        },
        None => {
            let error = OperationError::Underflow { structure: kind };
            let entry = LogEntry::error(format!("Error: {}", error));
            Transition::rejected(current, error, Some(entry))
        }
    }
}

fn added_message(kind: StructureKind, value: &Value) -> String {
    match kind {
        StructureKind::Stack => format!("Pushed {} to Stack", value),
        StructureKind::Queue => format!("Enqueued {}", value),
        StructureKind::LinkedList => format!("Appended {}", value),
    }
}

fn removed_message(kind: StructureKind, value: &Value) -> String {
    match kind {
        StructureKind::Stack => format!("Popped {} from Stack", value),
        StructureKind::Queue => format!("Dequeued {}", value),
        StructureKind::LinkedList => format!("Removed: {}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(seq: &Sequence) -> Vec<String> {
        seq.iter().map(|e| e.value.to_string()).collect()
    }

    #[test]
    fn test_push_prepends() {
        let mut ids = IdAllocator::new();
        let t1 = apply(StructureKind::Stack, &Sequence::new(), &Intent::push("3"), &mut ids);
        let t2 = apply(StructureKind::Stack, &t1.sequence, &Intent::push("7"), &mut ids);
        assert_eq!(values(&t2.sequence), vec!["7", "3"]);
        assert_eq!(t2.entry, Some(LogEntry::info("Pushed 7 to Stack")));
    }

    #[test]
    fn test_input_sequence_is_untouched() {
        let mut ids = IdAllocator::new();
        let t1 = apply(StructureKind::Queue, &Sequence::new(), &Intent::insert("1"), &mut ids);
        let before = t1.sequence.clone();
        let t2 = apply(StructureKind::Queue, &t1.sequence, &Intent::delete(), &mut ids);
        assert_eq!(t1.sequence, before);
        assert!(t2.sequence.is_empty());
        assert_eq!(t2.removed_value(), Some(&Value::Int(1)));
    }

    #[test]
    fn test_blank_value_is_rejected_without_entry() {
        let mut ids = IdAllocator::new();
        let t = apply(StructureKind::LinkedList, &Sequence::new(), &Intent::append("  "), &mut ids);
        assert_eq!(
            t.result,
            Err(OperationError::Validation {
                intent: IntentKind::Append
            })
        );
        assert!(t.entry.is_none());
        assert_eq!(ids.issued(), 0);
    }

    #[test]
    fn test_underflow_logs_error() {
        let mut ids = IdAllocator::new();
        let t = apply(StructureKind::Queue, &Sequence::new(), &Intent::delete(), &mut ids);
        assert_eq!(
            t.result,
            Err(OperationError::Underflow {
                structure: StructureKind::Queue
            })
        );
        assert_eq!(t.entry, Some(LogEntry::error("Error: Queue Underflow")));
    }

    #[test]
    fn test_mismatched_intent() {
        let mut ids = IdAllocator::new();
        let t = apply(StructureKind::Queue, &Sequence::new(), &Intent::push("1"), &mut ids);
        assert!(matches!(t.result, Err(OperationError::Mismatch { .. })));
        assert!(t.entry.is_none());
        assert!(t.sequence.is_empty());
    }

    #[test]
    fn test_list_messages() {
        let mut ids = IdAllocator::new();
        let t1 = apply(StructureKind::LinkedList, &Sequence::new(), &Intent::append("a"), &mut ids);
        assert_eq!(t1.entry, Some(LogEntry::info("Appended a")));
        let t2 = apply(StructureKind::LinkedList, &t1.sequence, &Intent::remove_front(), &mut ids);
        assert_eq!(t2.entry, Some(LogEntry::info("Removed: a")));
    }
}
