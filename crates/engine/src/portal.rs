//! Aggregate portal state and the message-driven entry point.

use opn_docs_types::{ApiVersion, Catalog, Language, Msg};
use tracing::debug;

use crate::{CommentList, NavigationState, Rating};

/// Everything a reader can change in the portal.
///
/// Front ends hold one of these, feed it [`Msg`]s through
/// [`PortalState::apply`] and render from its accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalState {
    pub navigation: NavigationState,
    pub comments: CommentList,
    pub rating: Rating,
    pub language: Language,
    pub api_version: ApiVersion,
}

impl PortalState {
    /// A fresh session on the documents page with the starter comments.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            navigation: NavigationState::new(catalog),
            comments: CommentList::seeded(),
            rating: Rating::default(),
            language: Language::default(),
            api_version: ApiVersion::default(),
        }
    }

    /// Moves to the next interface language, wrapping around.
    pub fn cycle_language(&mut self) -> Language {
        self.language = self.language.next();
        self.language
    }

    /// Moves to the next API version, wrapping around.
    pub fn cycle_api_version(&mut self) -> ApiVersion {
        self.api_version = self.api_version.next();
        self.api_version
    }

    /// Applies a portal message.
    ///
    /// Returns `true` when the message belongs to the portal, whether or not
    /// it changed anything. Front-end messages (search, theme, resize) return
    /// `false` and are left to the caller.
    pub fn apply(&mut self, catalog: &Catalog, msg: &Msg) -> bool {
        match msg {
            Msg::SelectPage(page) => self.navigation.select_page(*page, catalog),
            Msg::SelectSubPage(path) => self.navigation.select_sub_page(path.clone()),
            Msg::ToggleExpand(path) => {
                self.navigation.toggle_expand(path);
            }
            Msg::ActivateRow { path, is_leaf } => self.navigation.activate(path, *is_leaf),
            Msg::SelectLanguage(language) => self.language = *language,
            Msg::SelectApiVersion(version) => self.api_version = *version,
            Msg::SetRating(stars) => {
                if !self.rating.set(*stars) {
                    debug!(stars, "ignored out-of-range rating");
                }
            }
            Msg::SubmitComment { text, submitted_at } => {
                self.comments.add_comment(text, *submitted_at);
            }
            Msg::ToggleComment(id) => {
                self.comments.toggle_open(*id);
            }
            Msg::ToggleSortOrder => {
                self.comments.toggle_sort_order();
            }
            Msg::SubmitSearch(_) | Msg::CycleTheme | Msg::Resize(..) => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog;
    use chrono::Utc;
    use opn_docs_types::{Page, SortOrder};

    #[test]
    fn messages_drive_the_documented_scenario() {
        let catalog = catalog();
        let mut portal = PortalState::new(&catalog);
        assert!(portal.apply(&catalog, &Msg::SelectPage(Page::Documents)));
        assert_eq!(portal.navigation.sub_page(), "Getting Started");

        portal.apply(&catalog, &Msg::ToggleExpand("Getting Started".into()));
        portal.apply(&catalog, &Msg::SelectSubPage("Getting Started.Quick Start".into()));
        assert_eq!(portal.navigation.expanded().open_paths().collect::<Vec<_>>(), ["Getting Started"]);
        assert_eq!(portal.navigation.sub_page(), "Getting Started.Quick Start");
    }

    #[test]
    fn rating_is_shared_across_pages() {
        let catalog = catalog();
        let mut portal = PortalState::new(&catalog);
        portal.apply(&catalog, &Msg::SetRating(4));
        portal.apply(&catalog, &Msg::SelectPage(Page::Changelog));
        portal.apply(&catalog, &Msg::ActivateRow {
            path: "2024".into(),
            is_leaf: false,
        });
        assert_eq!(portal.rating.value(), 4);
        portal.apply(&catalog, &Msg::SetRating(0));
        assert_eq!(portal.rating.value(), 4);
    }

    #[test]
    fn comment_messages() {
        let catalog = catalog();
        let mut portal = PortalState::new(&catalog);
        let seeded = portal.comments.len();
        portal.apply(&catalog, &Msg::SubmitComment {
            text: "   ".into(),
            submitted_at: Utc::now(),
        });
        assert_eq!(portal.comments.len(), seeded);
        portal.apply(&catalog, &Msg::SubmitComment {
            text: "hello".into(),
            submitted_at: Utc::now(),
        });
        assert_eq!(portal.comments.len(), seeded + 1);

        portal.apply(&catalog, &Msg::ToggleComment(1));
        assert!(!portal.comments.get(1).unwrap().is_open);
        portal.apply(&catalog, &Msg::ToggleSortOrder);
        assert_eq!(portal.comments.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn selectors_and_front_end_messages() {
        let catalog = catalog();
        let mut portal = PortalState::new(&catalog);
        portal.apply(&catalog, &Msg::SelectLanguage(Language::Thai));
        assert_eq!(portal.language, Language::Thai);
        portal.apply(&catalog, &Msg::SelectApiVersion(ApiVersion::V3));
        assert_eq!(portal.api_version, ApiVersion::V3);

        let before = portal.clone();
        assert!(!portal.apply(&catalog, &Msg::CycleTheme));
        assert!(!portal.apply(&catalog, &Msg::SubmitSearch("oauth".into())));
        assert_eq!(portal, before);
    }

    #[test]
    fn selectors_cycle_and_wrap() {
        let catalog = catalog();
        let mut portal = PortalState::new(&catalog);
        let languages: Vec<Language> = (0..Language::ALL.len()).map(|_| portal.cycle_language()).collect();
        assert_eq!(languages, [Language::Japanese, Language::Thai, Language::English]);

        portal.api_version = ApiVersion::V3;
        assert_eq!(portal.cycle_api_version(), ApiVersion::V1);
    }
}
