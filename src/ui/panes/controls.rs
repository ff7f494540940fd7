//! Control deck: value input and operation hints

use super::utils::border_style;
use crate::structure::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button captions for the add and remove intents of a kind
pub fn operation_captions(kind: StructureKind) -> (&'static str, &'static str) {
    match kind {
        StructureKind::Stack => ("Push", "Pop"),
        StructureKind::Queue => ("Enqueue", "Dequeue"),
        StructureKind::LinkedList => ("Append", "Remove"),
    }
}

/// Render the input box and the key hints beside it
pub fn render_controls(frame: &mut Frame, area: Rect, kind: StructureKind, input: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let input_line = if input.is_empty() {
        Line::from(vec![
            Span::styled("Value", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled("▏", Style::default().fg(DEFAULT_THEME.newest)),
        ])
    } else {
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("▏", Style::default().fg(DEFAULT_THEME.newest)),
        ])
    };

    let input_box = Paragraph::new(input_line).block(
        Block::default()
            .title(" Input ")
            .borders(Borders::ALL)
            .border_style(border_style(true)),
    );
    frame.render_widget(input_box, chunks[0]);

    let (add, remove) = operation_captions(kind);
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let add_style = Style::default()
        .fg(DEFAULT_THEME.success)
        .add_modifier(Modifier::BOLD);
    let remove_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let clear_style = Style::default()
        .fg(DEFAULT_THEME.error)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let hints = Line::from(vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(format!(" {} ", add), add_style),
        Span::raw("  "),
        Span::styled(" Del ", key_style),
        Span::styled(format!(" {} ", remove), remove_style),
        Span::raw("  "),
        Span::styled(" ^L ", key_style),
        Span::styled(" Clear ", clear_style),
        Span::raw("  "),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" switch ", desc_style),
        Span::raw("  "),
        Span::styled(" Esc ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    let hints_box = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(false)),
    );
    frame.render_widget(hints_box, chunks[1]);
}
