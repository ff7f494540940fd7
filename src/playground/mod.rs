//! Operation core of the playground
//!
//! This module turns intents into state changes:
//! - [`intent`]: The closed set of operations and their textual form
//! - [`transition`]: The pure [`apply`] function producing a [`Transition`]
//! - [`engine`]: [`Playground`], the synchronous owner of sequence and log
//! - [`log`]: Newest-first concept log
//! - [`errors`]: [`OperationError`] (validation, underflow, mismatch)
//!
//! # Flow
//!
//! ```text
//! Intent → apply(kind, sequence) → Transition { sequence, entry, result }
//!                                        │
//!                  Playground commits ◄──┘  (CLEAR also empties the log)
//! ```

pub mod engine;
pub mod errors;
pub mod intent;
pub mod log;
pub mod transition;

pub use engine::Playground;
pub use errors::OperationError;
pub use intent::{Intent, IntentKind, IntentParseError};
pub use self::log::{LogEntry, OperationLog, Severity};
pub use transition::{apply, Effect, Transition};
