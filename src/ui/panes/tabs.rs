//! Header with the structure tabs

use crate::structure::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the title and one tab per structure kind
pub fn render_tabs(frame: &mut Frame, area: Rect, active: StructureKind) {
    let titles: Vec<Line> = StructureKind::ALL
        .iter()
        .map(|kind| Line::from(kind.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Data Structures Playground ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .select(active.index())
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
