//! Plain-text rendering of a snapshot
//!
//! Used by script mode and in tests. The layout is deterministic:
//!
//! ```text
//! Queue (FIFO)
//!   [2]  <- FRONT
//!    |
//!   [3]  <- REAR *
//! Log:
//!   Dequeued 1
//! ```
//!
//! `*` marks the newest node; linked list cells carry a `NEXT` slot and are
//! joined by `v` pointers.

use super::descriptor::{describe, Link, RenderNode};
use crate::snapshot::Snapshot;
use crate::structure::StructureKind;
use std::fmt::Write;

/// Placeholder shown for an empty structure
pub fn empty_placeholder(kind: StructureKind) -> String {
    format!("Empty {}", kind.noun())
}

/// Render a snapshot as text
pub fn render_plain(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.kind.title());

    let nodes = describe(snapshot.kind, &snapshot.elements);
    if nodes.is_empty() {
        let _ = writeln!(out, "  ({})", empty_placeholder(snapshot.kind));
    }

    for node in &nodes {
        let _ = writeln!(out, "  {}", node_line(snapshot.kind, node));
        match node.link {
            Some(Link::Connector) => out.push_str("   |\n"),
            Some(Link::Next) => out.push_str("   v\n"),
            None => {}
        }
    }

    out.push_str("Log:\n");
    if snapshot.log.is_empty() {
        out.push_str("  (empty)\n");
    }
    for entry in &snapshot.log {
        let _ = writeln!(out, "  {}", entry.message);
    }

    out
}

fn node_line(kind: StructureKind, node: &RenderNode) -> String {
    let mut line = match kind {
        StructureKind::LinkedList => format!("[{} | NEXT]", node.value),
        _ => format!("[{}]", node.value),
    };

    if !node.labels.is_empty() {
        let labels: Vec<&str> = node.labels.iter().map(|l| l.as_str()).collect();
        let _ = write!(line, "  <- {}", labels.join(", "));
    }
    if node.is_newest {
        line.push_str(" *");
    }
    line
}
