//! Page, sub-page and sidebar expand state.

use opn_docs_types::{Catalog, CategoryMap, Page};
use tracing::debug;

use crate::{
    ExpandState,
    tree::{self, DepthPolicy, TreeRow},
};

/// Where the reader currently is.
///
/// The sub-page is the path of a sidebar node, or empty when the active page
/// has nothing to select (the playground, or a page with an empty tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_page: Page,
    sub_page: String,
    expanded: ExpandState,
}

impl NavigationState {
    /// Lands on the documents page, the first entry of the main menu.
    pub fn new(catalog: &Catalog) -> Self {
        Self::landing(Page::default(), catalog)
    }

    /// Lands on `page` as if it had just been selected from the menu.
    pub fn landing(page: Page, catalog: &Catalog) -> Self {
        let mut state = Self {
            active_page: page,
            sub_page: String::new(),
            expanded: ExpandState::new(),
        };
        state.select_page(page, catalog);
        state
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn sub_page(&self) -> &str {
        &self.sub_page
    }

    pub fn expanded(&self) -> &ExpandState {
        &self.expanded
    }

    /// Depth cutoff for the active page's tree.
    pub fn policy(&self) -> DepthPolicy {
        DepthPolicy::for_page(self.active_page)
    }

    /// Switches the active page.
    ///
    /// Resets the sub-page and every expand flag, then selects the first
    /// top-level category of the new page's tree when there is one. Pages
    /// without a sidebar, or with an empty tree, end up with an empty
    /// sub-page.
    pub fn select_page(&mut self, page: Page, catalog: &Catalog) {
        self.active_page = page;
        self.sub_page.clear();
        self.expanded.clear();

        if let Some(first) = self.tree(catalog).and_then(|tree| tree.keys().next()) {
            self.sub_page = first.clone();
        }
        debug!(page = %page, sub_page = %self.sub_page, "page selected");
    }

    /// Makes `path` the current sub-page. Expand flags are left alone.
    pub fn select_sub_page(&mut self, path: impl Into<String>) {
        self.sub_page = path.into();
    }

    /// Flips the expand flag at `path`; absent paths open on the first call.
    pub fn toggle_expand(&mut self, path: &str) -> bool {
        self.expanded.toggle(path)
    }

    /// Applies a click on a sidebar row: branches toggle and become the
    /// sub-page, leaves only become the sub-page.
    pub fn activate(&mut self, path: &str, is_leaf: bool) {
        if !is_leaf {
            self.toggle_expand(path);
        }
        self.select_sub_page(path);
    }

    /// [`NavigationState::activate`] for a rendered row.
    pub fn activate_row(&mut self, row: &TreeRow<'_>) {
        self.activate(&row.path, row.is_leaf);
    }

    /// The active page's tree, `None` for pages without a sidebar.
    pub fn tree<'c>(&self, catalog: &'c Catalog) -> Option<&'c CategoryMap> {
        if self.active_page.has_sidebar() {
            catalog.tree(self.active_page)
        } else {
            None
        }
    }

    /// Sidebar rows for the active page under the current expand state.
    pub fn visible_rows<'c>(&self, catalog: &'c Catalog) -> Vec<TreeRow<'c>> {
        self.tree(catalog)
            .map(|tree| tree::visible_rows(tree, self.policy(), &self.expanded))
            .unwrap_or_default()
    }

    /// Row for the current sub-page, if it names a node of the active tree.
    pub fn selected_row<'c>(&self, catalog: &'c Catalog) -> Option<TreeRow<'c>> {
        let tree = self.tree(catalog)?;
        if self.sub_page.is_empty() {
            return None;
        }
        tree::find_row(tree, &self.sub_page, self.policy(), &self.expanded)
    }

    /// Content heading: the sub-page when set, the page label otherwise.
    pub fn heading(&self) -> &str {
        if self.sub_page.is_empty() {
            self.active_page.label()
        } else {
            &self.sub_page
        }
    }

    /// `"<page> - <sub-page>"`, or just the page when no sub-page is set.
    pub fn breadcrumb(&self) -> String {
        if self.sub_page.is_empty() {
            self.active_page.label().to_string()
        } else {
            format!("{} - {}", self.active_page.label(), self.sub_page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog;

    #[test]
    fn documents_lands_on_first_category_then_navigates() {
        let catalog = catalog();
        let mut navigation = NavigationState::new(&catalog);
        navigation.select_page(Page::Documents, &catalog);
        assert_eq!(navigation.sub_page(), "Getting Started");

        navigation.toggle_expand("Getting Started");
        navigation.select_sub_page("Getting Started.Quick Start");
        assert_eq!(navigation.expanded().open_paths().collect::<Vec<_>>(), ["Getting Started"]);
        assert_eq!(navigation.sub_page(), "Getting Started.Quick Start");
    }

    #[test]
    fn select_page_clears_expand_state_and_lands_deterministically() {
        let catalog = catalog();
        for from in Page::ALL {
            for to in Page::ALL {
                let mut navigation = NavigationState::landing(from, &catalog);
                navigation.toggle_expand("Getting Started");
                navigation.select_sub_page("Getting Started.Introduction");
                navigation.select_page(to, &catalog);

                assert!(navigation.expanded().is_empty(), "{from} -> {to}");
                let first = catalog.first_category(to).filter(|_| to.has_sidebar()).unwrap_or("");
                assert_eq!(navigation.sub_page(), first, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn pages_without_a_usable_tree_have_an_empty_sub_page() {
        let catalog = catalog();
        let mut navigation = NavigationState::new(&catalog);
        navigation.select_sub_page("Getting Started.Quick Start");

        navigation.select_page(Page::Faqs, &catalog);
        assert_eq!(navigation.sub_page(), "");

        navigation.select_page(Page::Articles, &catalog);
        assert_eq!(navigation.sub_page(), "");

        navigation.select_page(Page::ApiPlayground, &catalog);
        assert_eq!(navigation.sub_page(), "");
        assert!(navigation.visible_rows(&catalog).is_empty());
        assert_eq!(navigation.heading(), "API Playground");
        assert_eq!(navigation.breadcrumb(), "API Playground");
    }

    #[test]
    fn reselecting_the_active_page_lands_on_the_first_category_again() {
        let catalog = catalog();
        let mut navigation = NavigationState::new(&catalog);
        navigation.activate("Core Concepts", false);
        navigation.select_page(Page::Documents, &catalog);
        assert_eq!(navigation.sub_page(), "Getting Started");
        assert!(navigation.expanded().is_empty());
    }

    #[test]
    fn activating_a_branch_toggles_and_selects() {
        let catalog = catalog();
        let mut navigation = NavigationState::new(&catalog);

        let rows = navigation.visible_rows(&catalog);
        navigation.activate_row(&rows[1]);
        assert_eq!(navigation.sub_page(), "Core Concepts");
        assert!(navigation.expanded().is_expanded("Core Concepts"));

        navigation.activate("Core Concepts", false);
        assert!(!navigation.expanded().is_expanded("Core Concepts"));
        assert_eq!(navigation.sub_page(), "Core Concepts");
    }

    #[test]
    fn activating_a_leaf_only_selects() {
        let catalog = catalog();
        let mut navigation = NavigationState::landing(Page::Changelog, &catalog);
        navigation.activate("2024", false);
        let rows = navigation.visible_rows(&catalog);
        let march = rows.iter().find(|row| row.label == "March").expect("march row");
        assert!(march.is_leaf);

        let before = navigation.expanded().clone();
        navigation.activate_row(march);
        assert_eq!(navigation.sub_page(), "2024.March");
        assert_eq!(navigation.expanded(), &before);
        assert_eq!(navigation.breadcrumb(), "Changelog - 2024.March");
    }

    #[test]
    fn selected_row_exposes_topics_of_leaves() {
        let catalog = catalog();
        let mut navigation = NavigationState::new(&catalog);
        navigation.select_sub_page("Getting Started.Quick Start.Setup");
        let row = navigation.selected_row(&catalog).expect("selected row");
        assert_eq!(row.topics(), ["Installation", "Configuration"]);

        navigation.select_sub_page("Nowhere");
        assert!(navigation.selected_row(&catalog).is_none());
    }
}
