use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub label: Color,     // Teal, role labels and pointers
    pub node_border: Color,
    pub newest: Color, // Yellow ring around the newest node
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status bar / active tab background
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    label: Color::Rgb(148, 226, 213),
    node_border: Color::Rgb(205, 214, 244),
    newest: Color::Rgb(249, 226, 175),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
};
