//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tabs`]: Header with one tab per structure kind
//! - [`canvas`]: The animated structure (stack, queue or linked list)
//! - [`log`]: Concept log, newest entry first
//! - [`controls`]: Value input and operation key hints
//! - [`status`]: Status bar with the last outcome and element count
//! - `utils`: Shared border, scroll and node styling helpers
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area and borrowed data; panes never own or mutate state other
//! than their scroll offset.

mod utils;

pub mod canvas;
pub mod controls;
pub mod log;
pub mod status;
pub mod tabs;

pub use self::log::render_log_pane;
pub use canvas::{render_canvas_pane, CanvasRenderData};
pub use controls::{operation_captions, render_controls};
pub use status::{render_status_bar, StatusRenderData};
pub use tabs::render_tabs;
