//! Canvas pane: the structure itself
//!
//! This module draws the animated nodes of the active structure.
//!
//! # Layout
//!
//! - **Stack**: vertical, top element first, with its `TOP →` label on the
//!   left and a base line underneath
//! - **Queue**: horizontal, `FRONT` above the first cell, `REAR` below the
//!   last, cells joined by plain connectors
//! - **Linked list**: horizontal, `HEAD` above the first cell, each cell has
//!   a `NEXT` slot and points at its successor with `──→`
//!
//! Horizontal layouts wrap onto further rows when they do not fit the pane.

use super::utils::{border_style, clamp_scroll, label_style, node_style};
use crate::presentation::{empty_placeholder, AnimatedNode, Link, RoleLabel};
use crate::structure::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the label column left of stack cells
const STACK_LABEL_WIDTH: usize = 8;

/// Width of the link glyph between horizontal cells
const LINK_WIDTH: usize = 5;

/// Data needed to render the canvas pane
pub struct CanvasRenderData<'a> {
    pub kind: StructureKind,
    pub nodes: &'a [AnimatedNode],
}

/// Render the canvas pane
pub fn render_canvas_pane(
    frame: &mut Frame,
    area: Rect,
    data: CanvasRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", data.kind.title()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.nodes.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            empty_placeholder(data.kind),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let content_width = area.width.saturating_sub(2) as usize; // borders only
    let lines = canvas_lines(data.kind, data.nodes, content_width);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Build every line of the canvas for the given width
pub(crate) fn canvas_lines(
    kind: StructureKind,
    nodes: &[AnimatedNode],
    content_width: usize,
) -> Vec<Line<'static>> {
    match kind {
        StructureKind::Stack => stack_lines(nodes),
        StructureKind::Queue | StructureKind::LinkedList => {
            horizontal_lines(kind, nodes, content_width)
        }
    }
}

fn cell_text(kind: StructureKind, node: &AnimatedNode) -> String {
    match kind {
        StructureKind::LinkedList => format!(" {} │ NEXT ", node.node.value),
        _ => format!(" {} ", node.node.value),
    }
}

fn labels_text(node: &AnimatedNode, wanted: &[RoleLabel]) -> String {
    node.node
        .labels
        .iter()
        .filter(|l| wanted.contains(*l))
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn stack_lines(nodes: &[AnimatedNode]) -> Vec<Line<'static>> {
    let pad = " ".repeat(STACK_LABEL_WIDTH);
    let widest = nodes
        .iter()
        .map(|n| cell_text(StructureKind::Stack, n).chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for node in nodes {
        let style = node_style(node);
        let text = cell_text(StructureKind::Stack, node);
        // Center narrower values inside the widest box so the column lines up
        let inner = format!("{:^width$}", text, width = widest);
        let bar = "─".repeat(widest);

        let label = labels_text(node, &[RoleLabel::Top]);
        let label_span = if label.is_empty() {
            Span::raw(pad.clone())
        } else {
            Span::styled(
                format!("{:>width$}", format!("{} → ", label), width = STACK_LABEL_WIDTH),
                label_style(),
            )
        };

        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(format!("┌{}┐", bar), style),
        ]));
        lines.push(Line::from(vec![
            label_span,
            Span::styled(format!("│{}│", inner), style),
        ]));
        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(format!("└{}┘", bar), style),
        ]));
    }

    // Base of the stack
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(STACK_LABEL_WIDTH.saturating_sub(2))),
        Span::styled(
            "▔".repeat(widest + 6),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]));
    lines
}

/// One node drawn horizontally: five rows (label, box top, box middle,
/// box bottom, label) of equal width
struct Cell {
    width: usize,
    rows: [Vec<Span<'static>>; 5],
}

fn horizontal_cell(kind: StructureKind, node: &AnimatedNode) -> Cell {
    let style = node_style(node);
    let text = cell_text(kind, node);
    let text_width = text.chars().count();
    let bar = "─".repeat(text_width);

    let above = labels_text(node, &[RoleLabel::Front, RoleLabel::Head]);
    let below = labels_text(node, &[RoleLabel::Rear]);
    let width = (text_width + 2)
        .max(above.chars().count())
        .max(below.chars().count());
    let box_pad = width - (text_width + 2);

    let centered = |s: &str| format!("{:^width$}", s, width = width);

    let (top, bottom) = match kind {
        StructureKind::LinkedList => {
            // Split the box where the NEXT slot starts
            let value_width = text_width - " │ NEXT ".chars().count() + 1;
            (
                format!(
                    "┌{}┬{}┐",
                    "─".repeat(value_width),
                    "─".repeat(text_width - value_width - 1)
                ),
                format!(
                    "└{}┴{}┘",
                    "─".repeat(value_width),
                    "─".repeat(text_width - value_width - 1)
                ),
            )
        }
        _ => (format!("┌{}┐", bar), format!("└{}┘", bar)),
    };

    Cell {
        width,
        rows: [
            vec![Span::styled(centered(&above), label_style())],
            vec![Span::styled(top, style), Span::raw(" ".repeat(box_pad))],
            vec![
                Span::styled(format!("│{}│", text), style),
                Span::raw(" ".repeat(box_pad)),
            ],
            vec![Span::styled(bottom, style), Span::raw(" ".repeat(box_pad))],
            vec![Span::styled(centered(&below), label_style())],
        ],
    }
}

fn link_spans(link: Option<Link>) -> [Span<'static>; 5] {
    let blank = || Span::raw(" ".repeat(LINK_WIDTH));
    let middle = match link {
        Some(Link::Next) => Span::styled(" ──→ ", label_style()),
        Some(Link::Connector) => Span::styled(" ─── ", Style::default().fg(DEFAULT_THEME.comment)),
        None => blank(),
    };
    [blank(), blank(), middle, blank(), blank()]
}

fn horizontal_lines(
    kind: StructureKind,
    nodes: &[AnimatedNode],
    content_width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut row: [Vec<Span<'static>>; 5] = Default::default();
    let mut row_width = 0;

    for node in nodes {
        let cell = horizontal_cell(kind, node);
        let needed = cell.width + LINK_WIDTH;

        if row_width > 0 && row_width + cell.width > content_width {
            flush_row(&mut lines, &mut row);
            row_width = 0;
        }

        for (target, spans) in row.iter_mut().zip(cell.rows) {
            target.extend(spans);
        }
        for (target, span) in row.iter_mut().zip(link_spans(node.node.link)) {
            target.push(span);
        }
        row_width += needed;
    }
    flush_row(&mut lines, &mut row);

    lines
}

fn flush_row(lines: &mut Vec<Line<'static>>, row: &mut [Vec<Span<'static>>; 5]) {
    if row[2].is_empty() {
        return;
    }
    if !lines.is_empty() {
        lines.push(Line::default());
    }
    for spans in row.iter_mut() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}
