use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

#[derive(Debug, Clone)]
pub struct SidebarState {
    /// Index into the visible rows.
    pub cursor: usize,
    /// First visible row.
    pub offset: usize,
    pub f_tree: FocusFlag,
    /// Whole sidebar including its border.
    pub last_area: Rect,
    /// Area the rows are drawn into.
    pub list_area: Rect,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            f_tree: FocusFlag::named("sidebar"),
            last_area: Rect::default(),
            list_area: Rect::default(),
        }
    }
}

impl SidebarState {
    /// Moves the cursor by `delta` without wrapping.
    pub fn move_cursor(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, row_count as isize - 1) as usize;
    }

    /// Keeps the cursor on an existing row after rows disappeared.
    pub fn clamp(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
        self.offset = self.offset.min(self.cursor);
    }

    /// Back to the top, used when the page changes.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }
}

impl HasFocus for SidebarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.f_tree.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
