//! Shared helpers for pane rendering
//!
//! All functions in this module are `pub(super)`, visible only to the panes.

use crate::presentation::{AnimatedNode, Phase};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane
pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the last page stays filled
pub(super) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Style of a node's box, derived from its animation phase
pub(super) fn node_style(animated: &AnimatedNode) -> Style {
    match animated.phase {
        Phase::Exiting => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        // First half of the entry fades in
        Phase::Entering if animated.progress < 0.5 => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::DIM),
        Phase::Entering => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        Phase::Steady if animated.node.is_newest => Style::default()
            .fg(DEFAULT_THEME.newest)
            .add_modifier(Modifier::BOLD),
        Phase::Steady => Style::default().fg(DEFAULT_THEME.node_border),
    }
}

/// Style of role labels and link glyphs
pub(super) fn label_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.label)
        .add_modifier(Modifier::BOLD)
}
