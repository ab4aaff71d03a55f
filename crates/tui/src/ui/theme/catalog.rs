use super::{
    Ansi256Theme, DraculaTheme, DraculaThemeHighContrast, NordTheme, NordThemeHighContrast, OpnTheme, OpnThemeHighContrast, Theme,
};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes. The first entry is the truecolor
/// default and the last one the ANSI fallback.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "opn",
        label: "Opn",
        aliases: &["opn", "default", "teal"],
        is_ansi_fallback: false,
        factory: || Box::new(OpnTheme::new()),
    },
    ThemeDefinition {
        id: "opn_hc",
        label: "Opn High Contrast",
        aliases: &["opn_hc", "opn-high-contrast", "opn-hc"],
        is_ansi_fallback: false,
        factory: || Box::new(OpnThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dracula"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "dracula_hc",
        label: "Dracula High Contrast",
        aliases: &["dracula_hc", "dracula-high-contrast", "dracula-hc"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "nord_hc",
        label: "Nord High Contrast",
        aliases: &["nord_hc", "nord-high-contrast", "nord-hc"],
        is_ansi_fallback: false,
        factory: || Box::new(NordThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[THEME_DEFINITIONS.len() - 1]
}

/// The truecolor theme after `current_id`, wrapping around. Unknown ids start
/// from the default.
pub fn next_truecolor(current_id: &str) -> &'static ThemeDefinition {
    let candidates: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS.iter().filter(|definition| !definition.is_ansi_fallback).collect();
    match candidates.iter().position(|definition| definition.id == current_id) {
        Some(index) => candidates[(index + 1) % candidates.len()],
        None => default_truecolor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve(" dracula-hc ").map(|definition| definition.id), Some("dracula_hc"));
        assert_eq!(resolve("default").map(|definition| definition.id), Some("opn"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn cycling_skips_the_ansi_fallback_and_wraps() {
        assert_eq!(next_truecolor("opn").id, "opn_hc");
        assert_eq!(next_truecolor("nord_hc").id, "opn");
        assert_eq!(next_truecolor("ansi256").id, "opn");
    }

    #[test]
    fn defaults_sit_at_the_ends() {
        assert!(!default_truecolor().is_ansi_fallback);
        assert!(default_ansi().is_ansi_fallback);
    }
}
