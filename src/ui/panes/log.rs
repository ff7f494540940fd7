//! Concept log pane rendering

use super::utils::{border_style, clamp_scroll};
use crate::playground::OperationLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the concept log pane, newest entry first
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &OperationLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Concept Log ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = log
        .iter()
        .map(|entry| {
            let (bar, text) = if entry.is_error() {
                (DEFAULT_THEME.error, DEFAULT_THEME.error)
            } else {
                (DEFAULT_THEME.label, DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled("▎ ", Style::default().fg(bar)),
                Span::styled(entry.message.clone(), Style::default().fg(text)),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
