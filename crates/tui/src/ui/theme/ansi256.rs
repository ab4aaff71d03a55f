//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Indexed approximation of the house palette so the portal stays legible in
//! macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(236),
                border: Color::Indexed(239),
                divider: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(251),
                text_muted: Color::Indexed(245),

                accent_primary: Color::Indexed(43),
                accent_secondary: Color::Indexed(75),
                accent_subtle: Color::Indexed(30),

                info: Color::Indexed(75),

                selection_bg: Color::Indexed(23),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(43),
                rating: Color::Indexed(220),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
