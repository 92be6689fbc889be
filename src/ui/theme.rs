use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,       // Untouched array bars
    pub sorted: Color,    // Bars in their final position
    pub compare: Color,   // Bars under comparison
    pub highlight: Color, // Bars highlighted by the current step
    pub pivot: Color,     // Current quick sort pivot
    pub visited: Color,   // Visited graph and tree nodes
    pub current: Color,   // Node or edge touched by the current step
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),
    sorted: Color::Rgb(166, 227, 161),
    compare: Color::Rgb(249, 226, 175),
    highlight: Color::Rgb(148, 226, 213),
    pivot: Color::Rgb(245, 194, 231),
    visited: Color::Rgb(166, 227, 161),
    current: Color::Rgb(250, 179, 135),
};
