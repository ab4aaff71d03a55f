use opn_docs_types::Page;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// A single button in the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Glyph rendered before the label.
    pub icon: &'static str,
    pub label: &'static str,
    pub page: Page,
}

impl NavItem {
    pub fn for_page(page: Page) -> Self {
        Self {
            icon: page.icon(),
            label: page.label(),
            page,
        }
    }

    /// Text drawn on the button.
    pub fn caption(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

#[derive(Debug, Clone)]
pub struct NavBarState {
    pub items: Vec<NavItem>,
    /// Item the keyboard cursor is on. Independent of the active page until
    /// the reader commits with Enter.
    pub cursor: usize,
    pub f_menu: FocusFlag,
    /// Last rendered area of the menu; used for mouse focus and hit testing.
    pub last_area: Rect,
    /// Last computed per-item areas for hit testing.
    pub per_item_areas: Vec<Rect>,
}

impl Default for NavBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBarState {
    /// Menu with every page, cursor on the first.
    pub fn new() -> Self {
        Self {
            items: Page::ALL.into_iter().map(NavItem::for_page).collect(),
            cursor: 0,
            f_menu: FocusFlag::named("menu"),
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// Moves the cursor by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn cursor_page(&self) -> Option<Page> {
        self.items.get(self.cursor).map(|item| item.page)
    }

    /// Puts the cursor on `page`'s button.
    pub fn point_at(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.cursor = index;
        }
    }
}

impl HasFocus for NavBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.f_menu.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
