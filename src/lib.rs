//! # Introduction
//!
//! dsplay is a playground for elementary data structures. A student pushes,
//! pops, enqueues, dequeues, appends and removes values, and the terminal UI
//! animates the stack, queue or singly linked list as it changes, with a
//! concept log describing every operation.
//!
//! ## Pipeline
//!
//! ```text
//! Key press → Intent → Playground (apply) → Snapshot → describe → Animator → TUI
//! ```
//!
//! 1. [`structure`] — the data model: [`structure::Value`], elements with
//!    stable identities and the ordered [`structure::Sequence`].
//! 2. [`playground`] — the operation core: the pure [`playground::apply`]
//!    transition and the [`playground::Playground`] that owns sequence and log.
//! 3. [`snapshot`] — read-only copies of the playground state.
//! 4. [`presentation`] — render descriptors (`TOP`, `FRONT`, `REAR`, `HEAD`,
//!    links), identity-keyed enter/exit animation and a plain-text renderer.
//! 5. [`script`] — headless replay of intent scripts.
//! 6. [`config`] — TOML configuration with CLI overrides.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use dsplay::playground::{Intent, Playground};
//! use dsplay::structure::StructureKind;
//!
//! let mut pg = Playground::new(StructureKind::Stack);
//! pg.submit(Intent::push("3"));
//! pg.submit(Intent::push("7"));
//! let popped = pg.submit(Intent::pop());
//! assert_eq!(popped.removed_value().map(|v| v.to_string()), Some("7".to_string()));
//! assert_eq!(pg.snapshot().values(), vec!["3"]);
//! ```

pub mod config;
pub mod playground;
pub mod presentation;
pub mod script;
pub mod snapshot;
pub mod structure;
pub mod ui;
