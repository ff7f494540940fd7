//! Presentation adapter: from snapshots to drawable nodes
//!
//! - [`descriptor`]: [`describe`] maps elements to [`RenderNode`]s with role
//!   labels (`TOP`, `FRONT`, `REAR`, `HEAD`), the newest flag and links
//! - [`animation`]: [`Animator`] tracks nodes entering and leaving by identity
//! - [`text`]: [`render_plain`] for script mode and tests
//!
//! Nothing in this module mutates a structure; it only reads snapshots.

pub mod animation;
pub mod descriptor;
pub mod text;

pub use animation::{AnimatedNode, Animator, Diff, Phase};
pub use descriptor::{describe, Link, RenderNode, RoleLabel};
pub use text::{empty_placeholder, render_plain};
