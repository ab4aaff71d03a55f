//! Application state and message handling for the Opn Docs TUI.
//!
//! [`App`] owns the portal state from the engine plus the per-region UI state
//! (cursors, text inputs, focus flags and hit-test areas). All state changes
//! go through [`App::update`], which returns the side effects the runtime has
//! to perform.

use opn_docs_engine::PortalState;
use opn_docs_types::{Catalog, Effect, Msg, Page};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::ui::{
    components::{ContentState, NavBarState, SidebarState, TopBarState},
    theme::{self, LoadedTheme, Theme, ThemeDefinition},
};

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Category trees for every page
    pub catalog: Catalog,
    /// Active theme
    pub theme: Box<dyn Theme>,
    pub active_theme: &'static ThemeDefinition,
    /// Whether `t` may switch palettes (truecolor terminals only)
    pub theme_cycling_available: bool,
}

impl SharedCtx {
    pub fn new(catalog: Catalog, loaded_theme: LoadedTheme) -> Self {
        Self {
            catalog,
            theme: loaded_theme.theme,
            active_theme: loaded_theme.definition,
            theme_cycling_available: theme::supports_theme_cycling(),
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    pub portal: PortalState,
    pub top_bar: TopBarState,
    pub nav_bar: NavBarState,
    pub sidebar: SidebarState,
    pub content: ContentState,
    pub focus: Focus,
    /// One-line message shown at the right of the hint bar
    pub status: Option<String>,
    container_focus: FocusFlag,
}

impl App {
    /// Starts a fresh session on `page`. Selections never outlive the
    /// process, so everything else begins at its default.
    pub fn new(ctx: SharedCtx, page: Page) -> Self {
        let mut portal = PortalState::new(&ctx.catalog);
        portal.navigation.select_page(page, &ctx.catalog);

        let mut app = Self {
            ctx,
            portal,
            top_bar: TopBarState::default(),
            nav_bar: NavBarState::new(),
            sidebar: SidebarState::default(),
            content: ContentState::default(),
            focus: Focus::default(),
            status: None,
            container_focus: FocusFlag::named("app"),
        };
        app.nav_bar.point_at(page);
        app.content.page = page;
        app.focus = FocusBuilder::build_for(&app);
        app.focus.focus(&app.nav_bar);
        app
    }

    /// Applies a message and returns the effects the runtime must carry out.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        let handled = self.portal.apply(&self.ctx.catalog, msg);
        debug!(?msg, handled, "update");

        match msg {
            Msg::SelectPage(page) => {
                self.nav_bar.point_at(*page);
                self.sidebar.reset();
                self.content.page = *page;
                self.content.comment_cursor = 0;
                self.content.comment_offset = 0;
                self.status = None;
                // The sidebar and most content widgets vanish on pages
                // without a tree.
                if !page.has_sidebar() && (self.sidebar.f_tree.get() || self.content.container_focus.get()) {
                    self.focus.focus(&self.nav_bar);
                }
            }
            Msg::ToggleExpand(_) | Msg::ActivateRow { .. } => {
                let count = self.portal.navigation.visible_rows(&self.ctx.catalog).len();
                self.sidebar.clamp(count);
            }
            Msg::SubmitComment { .. } => {
                // Keep the cursor on the newest comment.
                let newest = self.portal.comments.len() as u64;
                if let Some(index) = self.portal.comments.view().iter().position(|comment| comment.id == newest) {
                    self.content.comment_cursor = index;
                }
            }
            Msg::SubmitSearch(query) => {
                info!(query = %query, "search submitted");
                self.status = Some(format!("Search for \"{query}\" is not available yet"));
            }
            Msg::CycleTheme => {
                if let Some(effect) = self.cycle_theme() {
                    effects.push(effect);
                }
            }
            Msg::SelectSubPage(_)
            | Msg::SelectLanguage(_)
            | Msg::SelectApiVersion(_)
            | Msg::SetRating(_)
            | Msg::ToggleComment(_)
            | Msg::ToggleSortOrder
            | Msg::Resize(..) => {}
        }
        effects
    }

    /// Switches to the next truecolor theme.
    fn cycle_theme(&mut self) -> Option<Effect> {
        if !self.ctx.theme_cycling_available {
            self.status = Some("Theme switching needs a truecolor terminal".to_string());
            return None;
        }
        let next = theme::catalog::next_truecolor(self.ctx.active_theme.id);
        self.apply_theme(next);
        Some(Effect::PersistTheme(next.id.to_string()))
    }

    pub fn apply_theme(&mut self, definition: &'static ThemeDefinition) {
        self.ctx.theme = definition.build();
        self.ctx.active_theme = definition;
        self.status = Some(format!("Theme: {}", definition.label));
        debug!(theme = definition.id, "theme applied");
    }

    /// True while a text box owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.top_bar.is_editing() || self.content.is_editing()
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.top_bar);
        builder.widget(&self.nav_bar);
        if self.portal.navigation.active_page().has_sidebar() {
            builder.widget(&self.sidebar);
        }
        builder.widget(&self.content);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::catalog;
    use opn_docs_types::{ApiVersion, CategoryNode, Language};

    fn test_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.insert(
            Page::Documents,
            [
                (
                    "Getting Started".to_string(),
                    CategoryNode::branch([("Quick Start", CategoryNode::leaf(["Installation"]))]),
                ),
                ("Core Concepts".to_string(), CategoryNode::leaf(["Auth"])),
            ]
            .into_iter()
            .collect(),
        );
        catalog.insert(
            Page::Changelog,
            [("2024".to_string(), CategoryNode::branch([("March", CategoryNode::leaf(["Fixes"]))]))]
                .into_iter()
                .collect(),
        );
        catalog
    }

    fn test_app() -> App {
        let mut ctx = SharedCtx::new(test_catalog(), LoadedTheme::from_definition(catalog::default_truecolor()));
        ctx.theme_cycling_available = true;
        App::new(ctx, Page::default())
    }

    #[test]
    fn starts_on_the_first_category_with_the_menu_focused() {
        let app = test_app();
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started");
        assert!(app.nav_bar.f_menu.get());
    }

    #[test]
    fn page_changes_reset_ui_cursors() {
        let mut app = test_app();
        app.sidebar.cursor = 1;
        app.update(&Msg::SelectPage(Page::Changelog));
        assert_eq!(app.sidebar.cursor, 0);
        assert_eq!(app.nav_bar.cursor_page(), Some(Page::Changelog));
        assert_eq!(app.content.page, Page::Changelog);
        assert_eq!(app.portal.navigation.sub_page(), "2024");
    }

    #[test]
    fn collapsing_clamps_the_sidebar_cursor() {
        let mut app = test_app();
        app.update(&Msg::ToggleExpand("Getting Started".into()));
        app.sidebar.cursor = 2;
        app.update(&Msg::ToggleExpand("Getting Started".into()));
        assert_eq!(app.sidebar.cursor, 1);
    }

    #[test]
    fn selector_changes_stay_in_the_session() {
        let mut app = test_app();
        assert!(app.update(&Msg::SelectLanguage(Language::Japanese)).is_empty());
        assert!(app.update(&Msg::SelectApiVersion(ApiVersion::V3)).is_empty());
        assert_eq!(app.portal.language, Language::Japanese);
        assert_eq!(app.portal.api_version, ApiVersion::V3);

        let ctx = SharedCtx::new(test_catalog(), LoadedTheme::from_definition(catalog::default_truecolor()));
        let restarted = App::new(ctx, Page::Documents);
        assert_eq!(restarted.portal.language, Language::English);
        assert_eq!(restarted.portal.api_version, ApiVersion::V1);
    }

    #[test]
    fn theme_cycling_persists_the_new_theme() {
        let mut app = test_app();
        let effects = app.update(&Msg::CycleTheme);
        assert_eq!(effects, vec![Effect::PersistTheme("opn_hc".to_string())]);
        assert_eq!(app.ctx.active_theme.id, "opn_hc");

        app.ctx.theme_cycling_available = false;
        assert!(app.update(&Msg::CycleTheme).is_empty());
        assert_eq!(app.ctx.active_theme.id, "opn_hc");
    }

    #[test]
    fn search_only_reports_status() {
        let mut app = test_app();
        let before = app.portal.clone();
        assert!(app.update(&Msg::SubmitSearch("webhooks".into())).is_empty());
        assert_eq!(app.portal, before);
        assert_eq!(app.status.as_deref(), Some("Search for \"webhooks\" is not available yet"));
    }

    #[test]
    fn new_comments_take_the_cursor() {
        let mut app = test_app();
        app.update(&Msg::SubmitComment {
            text: "Helpful".into(),
            submitted_at: chrono::Utc::now(),
        });
        let view = app.portal.comments.view();
        assert_eq!(view[app.content.comment_cursor].text, "Helpful");
    }
}
