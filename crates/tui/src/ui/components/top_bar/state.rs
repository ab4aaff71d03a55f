use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// Name shown in the user badge; there is no sign-in.
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug, Clone)]
pub struct TopBarState {
    pub search: TextInputState,
    pub f_search: FocusFlag,
    pub last_area: Rect,
    pub search_area: Rect,
}

impl Default for TopBarState {
    fn default() -> Self {
        Self {
            search: TextInputState::new(),
            f_search: FocusFlag::named("top_bar.search"),
            last_area: Rect::default(),
            search_area: Rect::default(),
        }
    }
}

impl TopBarState {
    pub fn is_editing(&self) -> bool {
        self.f_search.get()
    }
}

impl HasFocus for TopBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.f_search.clone()
    }

    fn area(&self) -> Rect {
        self.search_area
    }
}
