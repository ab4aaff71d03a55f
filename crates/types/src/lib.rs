use std::{error::Error, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;

pub use catalog::{Catalog, CategoryMap, CategoryNode};

/// Top-level pages reachable from the main menu.
///
/// The declaration order is the menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Documents,
    Articles,
    #[serde(rename = "FAQs")]
    Faqs,
    #[serde(rename = "API Playground")]
    ApiPlayground,
    Changelog,
}

impl Page {
    /// Every page in menu order.
    pub const ALL: [Page; 5] = [
        Page::Documents,
        Page::Articles,
        Page::Faqs,
        Page::ApiPlayground,
        Page::Changelog,
    ];

    /// Display label, also used as the catalog key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Articles => "Articles",
            Self::Faqs => "FAQs",
            Self::ApiPlayground => "API Playground",
            Self::Changelog => "Changelog",
        }
    }

    /// Short glyph rendered in front of the label in the main menu.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Documents => "▤",
            Self::Articles => "✎",
            Self::Faqs => "?",
            Self::ApiPlayground => ">_",
            Self::Changelog => "◷",
        }
    }

    /// Depth at which sidebar nodes stop being expandable.
    ///
    /// The changelog is a year/month listing and is cut off one level earlier
    /// than the other pages.
    pub fn max_depth(self) -> usize {
        match self {
            Self::Changelog => 2,
            _ => 3,
        }
    }

    /// The playground has no category tree and therefore no sidebar.
    pub fn has_sidebar(self) -> bool {
        !matches!(self, Self::ApiPlayground)
    }

    /// Only the documents page is versioned against the API.
    pub fn shows_api_version(self) -> bool {
        matches!(self, Self::Documents)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = ParsePageError;

    /// Accepts the display label (case-insensitive) or a kebab-case slug such
    /// as `api-playground`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Page::ALL
            .into_iter()
            .find(|page| page.label().to_ascii_lowercase() == normalized)
            .or(match normalized.as_str() {
                "docs" => Some(Page::Documents),
                "faq" => Some(Page::Faqs),
                "playground" | "api" => Some(Page::ApiPlayground),
                _ => None,
            })
            .ok_or_else(|| ParsePageError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePageError(String);

impl fmt::Display for ParsePageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown page '{}'; expected one of: Documents, Articles, FAQs, API Playground, Changelog",
            self.0
        )
    }
}

impl Error for ParsePageError {}

/// Content language offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Japanese,
    Thai,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Japanese, Language::Thai];

    /// Label shown in the selector, written in the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Japanese => "日本語",
            Self::Thai => "ไทย",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// API version offered on the documents page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "v1.0")]
    V1,
    #[serde(rename = "v2.0")]
    V2,
    #[serde(rename = "v3.0")]
    V3,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 3] = [ApiVersion::V1, ApiVersion::V2, ApiVersion::V3];

    pub fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1.0",
            Self::V2 => "v2.0",
            Self::V3 => "v3.0",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let index = all.iter().position(|item| *item == current).unwrap_or_default();
    all[(index + step) % all.len()]
}

/// Ordering applied to the comment list by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the action that would flip to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// Messages that can be sent to update the application state.
///
/// Portal messages map one-to-one onto state transitions; the remaining
/// variants are handled by the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Switch the main menu to another page
    SelectPage(Page),
    /// Make a sidebar path the current sub-page
    SelectSubPage(String),
    /// Flip the open flag of a sidebar branch
    ToggleExpand(String),
    /// A sidebar row was clicked or activated with the keyboard
    ActivateRow { path: String, is_leaf: bool },
    SelectLanguage(Language),
    SelectApiVersion(ApiVersion),
    /// Star rating, accepted only in `1..=5`
    SetRating(u8),
    /// Comment form submitted; the front end stamps the submission time
    SubmitComment { text: String, submitted_at: DateTime<Utc> },
    /// Collapse or expand a comment body
    ToggleComment(u64),
    ToggleSortOrder,
    /// Search box submitted (search is not backed by an index)
    SubmitSearch(String),
    /// Switch to the next theme in the catalog
    CycleTheme,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects requested by state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Store the given theme identifier in the user preferences
    PersistTheme(String),
    /// Leave the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_parse_from_labels_and_slugs() {
        assert_eq!("Documents".parse::<Page>().unwrap(), Page::Documents);
        assert_eq!("faqs".parse::<Page>().unwrap(), Page::Faqs);
        assert_eq!("api-playground".parse::<Page>().unwrap(), Page::ApiPlayground);
        assert_eq!("API Playground".parse::<Page>().unwrap(), Page::ApiPlayground);
        assert_eq!("changelog".parse::<Page>().unwrap(), Page::Changelog);
        assert!("blog".parse::<Page>().is_err());
    }

    #[test]
    fn changelog_is_the_shallow_page() {
        for page in Page::ALL {
            let expected = if page == Page::Changelog { 2 } else { 3 };
            assert_eq!(page.max_depth(), expected, "{page}");
        }
        assert!(!Page::ApiPlayground.has_sidebar());
        assert!(Page::Documents.shows_api_version());
        assert!(!Page::Articles.shows_api_version());
    }

    #[test]
    fn selectors_cycle_in_both_directions() {
        assert_eq!(Language::English.next(), Language::Japanese);
        assert_eq!(Language::Thai.next(), Language::English);
        assert_eq!(Language::English.previous(), Language::Thai);
        assert_eq!(ApiVersion::V3.next(), ApiVersion::V1);
        assert_eq!(ApiVersion::V1.previous(), ApiVersion::V3);
    }

    #[test]
    fn sort_order_defaults_to_descending_and_toggles() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
    }

    #[test]
    fn selector_values_serialize_like_the_web_form() {
        assert_eq!(serde_json::to_string(&ApiVersion::V2).unwrap(), "\"v2.0\"");
        assert_eq!(serde_json::to_string(&Page::ApiPlayground).unwrap(), "\"API Playground\"");
        assert_eq!(serde_json::to_string(&SortOrder::Ascending).unwrap(), "\"asc\"");
        let language: Language = serde_json::from_str("\"Thai\"").unwrap();
        assert_eq!(language, Language::Thai);
    }
}
