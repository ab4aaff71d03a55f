//! The house palette: slate surfaces with teal accents.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::{darken_rgb, lighten_rgb},
};

pub const SLATE_900: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0F172A
pub const SLATE_800: Color = Color::Rgb(0x1E, 0x29, 0x3B); // #1E293B
pub const SLATE_700: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155
pub const SLATE_500: Color = Color::Rgb(0x64, 0x74, 0x8B); // #64748B
pub const SLATE_300: Color = Color::Rgb(0xCB, 0xD5, 0xE1); // #CBD5E1
pub const SLATE_100: Color = Color::Rgb(0xF1, 0xF5, 0xF9); // #F1F5F9

pub const TEAL_400: Color = Color::Rgb(0x2D, 0xD4, 0xBF); // #2DD4BF
pub const TEAL_600: Color = Color::Rgb(0x0D, 0x94, 0x88); // #0D9488
pub const SKY_400: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38BDF8
pub const AMBER_400: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #FBBF24

fn build_opn_roles() -> ThemeRoles {
    ThemeRoles {
        background: SLATE_900,
        surface: SLATE_900,
        surface_muted: SLATE_800,
        border: SLATE_700,
        divider: SLATE_700,

        text: SLATE_100,
        text_secondary: SLATE_300,
        text_muted: SLATE_500,

        accent_primary: TEAL_400,
        accent_secondary: SKY_400,
        accent_subtle: TEAL_600,

        info: SKY_400,

        selection_bg: darken_rgb(TEAL_600, 0.70),
        selection_fg: SLATE_100,
        focus: TEAL_400,
        rating: AMBER_400,
    }
}

fn build_opn_high_contrast_roles() -> ThemeRoles {
    let mut roles = build_opn_roles();
    roles.border = lighten_rgb(roles.border, 0.35);
    roles.text_secondary = SLATE_100;
    roles.text_muted = SLATE_300;
    roles.selection_bg = TEAL_600;
    roles
}

/// Default theme for truecolor terminals.
#[derive(Debug, Clone)]
pub struct OpnTheme {
    roles: ThemeRoles,
}

impl OpnTheme {
    pub fn new() -> Self {
        Self { roles: build_opn_roles() }
    }
}

impl Theme for OpnTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Brighter borders and body text for dim displays.
#[derive(Debug, Clone)]
pub struct OpnThemeHighContrast {
    roles: ThemeRoles,
}

impl OpnThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: build_opn_high_contrast_roles(),
        }
    }
}

impl Theme for OpnThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
