//! The playground: owner of the active structure and its log

use super::intent::{Intent, IntentKind};
use super::log::{LogEntry, OperationLog};
use super::transition::{apply, Effect, Transition};
use crate::snapshot::Snapshot;
use crate::structure::{Element, IdAllocator, Sequence, StructureKind};
use log::{debug, info, warn};

/// Holds the canonical sequence and log, applies intents in call order
#[derive(Debug, Clone)]
pub struct Playground {
    kind: StructureKind,
    sequence: Sequence,
    log: OperationLog,
    ids: IdAllocator,
}

impl Playground {
    /// Create an empty structure of the given kind
    pub fn new(kind: StructureKind) -> Self {
        Playground {
            kind,
            sequence: Sequence::new(),
            log: OperationLog::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Switch structure kind, resetting the sequence and the log
    pub fn select_structure(&mut self, kind: StructureKind) {
        info!(
            "Switching structure {} -> {} (dropping {} element(s))",
            self.kind,
            kind,
            self.sequence.len()
        );
        self.kind = kind;
        self.sequence.clear();
        self.log.clear();
    }

    /// Apply one intent and commit its result
    pub fn submit(&mut self, intent: Intent) -> Transition {
        let transition = apply(self.kind, &self.sequence, &intent, &mut self.ids);

        match &transition.result {
            Ok(Effect::Cleared) => {
                debug!("{} cleared ({} element(s))", self.kind, self.sequence.len());
                self.log.clear();
            }
            Ok(effect) => {
                debug!("Applied {} on {}: {:?}", intent, self.kind, effect);
            }
            Err(e) if e.is_logged() => {
                warn!("Rejected {} on {}: {}", intent, self.kind, e);
            }
            Err(e) => {
                debug!("Ignored {} on {}: {}", intent, self.kind, e);
            }
        }

        if let Some(entry) = &transition.entry {
            self.log.record(entry.clone());
        }
        self.sequence = transition.sequence.clone();

        transition
    }

    /// Submit the active kind's add intent with raw input
    pub fn add(&mut self, raw_value: &str) -> Transition {
        self.submit(Intent::with_value(IntentKind::add_for(self.kind), raw_value))
    }

    /// Submit the active kind's remove intent
    pub fn remove(&mut self) -> Transition {
        self.submit(Intent::new(IntentKind::remove_for(self.kind)))
    }

    pub fn clear(&mut self) -> Transition {
        self.submit(Intent::clear())
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind,
            elements: self.sequence.to_vec(),
            log: self.log.to_vec(),
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.sequence.iter()
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Most recent log entry
    pub fn latest_entry(&self) -> Option<&LogEntry> {
        self.log.latest()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(StructureKind::default())
    }
}
