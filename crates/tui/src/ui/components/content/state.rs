use opn_docs_types::Page;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// Focus, cursor and hit-test state of the content pane.
#[derive(Debug, Clone)]
pub struct ContentState {
    pub container_focus: FocusFlag,
    pub f_language: FocusFlag,
    pub f_api_version: FocusFlag,
    pub f_rating: FocusFlag,
    pub f_comment_input: FocusFlag,
    pub f_comments: FocusFlag,

    /// Page the focus tree was last built for.
    pub page: Page,
    pub comment_input: TextInputState,
    /// Star under the keyboard cursor, 1-based.
    pub star_cursor: u8,
    /// Index into the displayed (sorted) comments.
    pub comment_cursor: usize,
    pub comment_offset: usize,

    pub last_area: Rect,
    pub language_area: Rect,
    pub api_version_area: Rect,
    pub star_areas: Vec<Rect>,
    pub input_area: Rect,
    pub sort_area: Rect,
    /// Header line of each visible comment with its id.
    pub comment_header_areas: Vec<(Rect, u64)>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            container_focus: FocusFlag::named("content"),
            f_language: FocusFlag::named("content.language"),
            f_api_version: FocusFlag::named("content.api_version"),
            f_rating: FocusFlag::named("content.rating"),
            f_comment_input: FocusFlag::named("content.comment_input"),
            f_comments: FocusFlag::named("content.comments"),
            page: Page::default(),
            comment_input: TextInputState::new(),
            star_cursor: 1,
            comment_cursor: 0,
            comment_offset: 0,
            last_area: Rect::default(),
            language_area: Rect::default(),
            api_version_area: Rect::default(),
            star_areas: Vec::new(),
            input_area: Rect::default(),
            sort_area: Rect::default(),
            comment_header_areas: Vec::new(),
        }
    }
}

impl ContentState {
    /// True while the comment box owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.f_comment_input.get()
    }

    /// Moves the comment cursor by `delta` without wrapping.
    pub fn move_comment_cursor(&mut self, delta: isize, comment_count: usize) {
        if comment_count == 0 {
            self.comment_cursor = 0;
            return;
        }
        let target = self.comment_cursor as isize + delta;
        self.comment_cursor = target.clamp(0, comment_count as isize - 1) as usize;
    }

    pub fn move_star_cursor(&mut self, delta: i8) {
        let max = opn_docs_engine::rating::MAX_STARS as i8;
        self.star_cursor = (self.star_cursor as i8 + delta).clamp(1, max) as u8;
    }
}

impl HasFocus for ContentState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_language);
        if self.page.shows_api_version() {
            builder.leaf_widget(&self.f_api_version);
        }
        if self.page.has_sidebar() {
            builder.leaf_widget(&self.f_rating);
            builder.leaf_widget(&self.f_comment_input);
            builder.leaf_widget(&self.f_comments);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
