// src/kanban/theme.rs

use ratatui::style::Color;

/// Colors for the board renderer. Constructed once and passed to the
/// rendering calls explicitly; there is no global style state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub active_border: Color,
    pub inactive_border: Color,
    pub title: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub subtitle: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            active_border: Color::Rgb(0xea, 0x9a, 0x97),
            inactive_border: Color::DarkGray,
            title: Color::Rgb(0xea, 0x9a, 0x97),
            selected_fg: Color::Black,
            selected_bg: Color::Rgb(0xea, 0x9a, 0x97),
            subtitle: Color::Gray,
        }
    }
}
