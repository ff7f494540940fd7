//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, value input, animation ticks
//! - **[`panes`]** — stateless render functions for each visible pane (tabs, canvas,
//!   concept log, control deck, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Playground`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Playground`]: crate::playground::Playground
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
