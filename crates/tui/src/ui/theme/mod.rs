//! Theme styling module for the TUI UI layer.
//!
//! This module defines the color palettes (the house palette, Dracula and
//! Nord, each with a high-contrast variant), an ANSI 256-color fallback,
//! semantic theme roles, and helper builders for Ratatui widgets and styles.
//! Prefer these helpers over hard-coding colors to keep the UI consistent.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod opn;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use nord::{NordTheme, NordThemeHighContrast};
pub use opn::{OpnTheme, OpnThemeHighContrast};
pub use roles::Theme;

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the command-line override, `TUI_THEME`, persisted
/// preferences and terminal capabilities, in that order.
pub fn load(cli_override: Option<&str>, preferred_theme: Option<&str>) -> LoadedTheme {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let env_theme = env::var("TUI_THEME").ok();
    let requested = [cli_override, env_theme.as_deref(), preferred_theme];
    for name in requested.into_iter().flatten() {
        match catalog::resolve(name) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => debug!(theme = name, "unknown theme requested"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

/// Returns `true` when switching between truecolor palettes makes sense.
pub fn supports_theme_cycling() -> bool {
    matches!(detect_color_capability(), ColorCapability::Truecolor)
}
