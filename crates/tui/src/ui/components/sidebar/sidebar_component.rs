use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use opn_docs_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    ui::{
        components::Component,
        theme::theme_helpers as th,
        utils::{hover_index_for_position, scroll_offset_for, truncate_to_width},
    },
};

const EXPANDED_ICON: &str = "▾ ";
const COLLAPSED_ICON: &str = "▸ ";
const LEAF_PAD: &str = "  ";

/// Owned copy of the row fields the key handlers need, so the catalog borrow
/// ends before the app is updated.
struct RowTarget {
    path: String,
    is_leaf: bool,
    is_expanded: bool,
    parent: Option<String>,
}

#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    fn row_count(app: &App) -> usize {
        app.portal.navigation.visible_rows(&app.ctx.catalog).len()
    }

    fn row_at(app: &App, index: usize) -> Option<RowTarget> {
        let rows = app.portal.navigation.visible_rows(&app.ctx.catalog);
        rows.get(index).map(|row| RowTarget {
            path: row.path.clone(),
            is_leaf: row.is_leaf,
            is_expanded: row.is_expanded,
            parent: row.parent_path().map(str::to_string),
        })
    }

    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        match Self::row_at(app, index) {
            Some(row) => app.update(&Msg::ActivateRow {
                path: row.path,
                is_leaf: row.is_leaf,
            }),
            None => Vec::new(),
        }
    }

    /// Right arrow: open a collapsed branch, or step into an open one.
    fn expand_or_descend(app: &mut App) -> Vec<Effect> {
        let Some(row) = Self::row_at(app, app.sidebar.cursor) else {
            return Vec::new();
        };
        if row.is_leaf {
            return Vec::new();
        }
        if row.is_expanded {
            let count = Self::row_count(app);
            app.sidebar.move_cursor(1, count);
            return Vec::new();
        }
        app.update(&Msg::ToggleExpand(row.path))
    }

    /// Left arrow: close an open branch, otherwise jump to the parent row.
    fn collapse_or_ascend(app: &mut App) -> Vec<Effect> {
        let Some(row) = Self::row_at(app, app.sidebar.cursor) else {
            return Vec::new();
        };
        if row.is_expanded {
            return app.update(&Msg::ToggleExpand(row.path));
        }
        if let Some(parent) = row.parent {
            let rows = app.portal.navigation.visible_rows(&app.ctx.catalog);
            if let Some(index) = rows.iter().position(|candidate| candidate.path == parent) {
                app.sidebar.cursor = index;
            }
        }
        Vec::new()
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let count = Self::row_count(app);
        let cursor = app.sidebar.cursor;
        match key.code {
            KeyCode::Up => app.sidebar.move_cursor(-1, count),
            KeyCode::Down => app.sidebar.move_cursor(1, count),
            KeyCode::PageUp => app.sidebar.move_cursor(-(app.sidebar.list_area.height.max(1) as isize), count),
            KeyCode::PageDown => app.sidebar.move_cursor(app.sidebar.list_area.height.max(1) as isize, count),
            KeyCode::Home => app.sidebar.cursor = 0,
            KeyCode::End => app.sidebar.cursor = count.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => return Self::activate(app, cursor),
            KeyCode::Right => return Self::expand_or_descend(app),
            KeyCode::Left => return Self::collapse_or_ascend(app),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if !app.portal.navigation.active_page().has_sidebar() || !app.sidebar.last_area.contains(position) {
            return Vec::new();
        }
        let count = Self::row_count(app);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.focus.focus(&app.sidebar.f_tree);
                if let Some(index) = hover_index_for_position(app.sidebar.list_area, position, app.sidebar.offset, count) {
                    app.sidebar.cursor = index;
                    return Self::activate(app, index);
                }
            }
            MouseEventKind::ScrollDown => app.sidebar.move_cursor(1, count),
            MouseEventKind::ScrollUp => app.sidebar.move_cursor(-1, count),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let navigation = &app.portal.navigation;
        let focused = app.sidebar.f_tree.get();
        let block = th::block(theme, Some(navigation.active_page().label()), focused);
        let list_area = block.inner(area);
        frame.render_widget(block, area);

        let rows = navigation.visible_rows(&app.ctx.catalog);
        let height = list_area.height as usize;
        let cursor = app.sidebar.cursor.min(rows.len().saturating_sub(1));
        let offset = scroll_offset_for(cursor, app.sidebar.offset, height);

        if rows.is_empty() {
            frame.render_widget(Paragraph::new("No categories").style(theme.text_muted_style()), list_area);
        }

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, row)| {
                let icon = match (row.is_leaf, row.is_expanded) {
                    (true, _) => LEAF_PAD,
                    (false, true) => EXPANDED_ICON,
                    (false, false) => COLLAPSED_ICON,
                };
                let indent = "  ".repeat(row.depth);
                let budget = (list_area.width as usize).saturating_sub(indent.len() + 2);
                let label_style = if focused && index == cursor {
                    theme.selection_style()
                } else if row.path == navigation.sub_page() {
                    theme.accent_emphasis_style()
                } else {
                    theme.text_primary_style()
                };
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(icon, theme.accent_primary_style()),
                    Span::styled(truncate_to_width(row.label, budget), label_style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), list_area);

        app.sidebar.cursor = cursor;
        app.sidebar.offset = offset;
        app.sidebar.last_area = area;
        app.sidebar.list_area = list_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Move "), (" Enter", " Open "), (" →/←", " Expand/Collapse ")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::SharedCtx,
        ui::theme::{LoadedTheme, catalog},
    };
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use opn_docs_types::Page;
    use ratatui::{Terminal, backend::TestBackend};

    fn sidebar_area() -> Rect {
        Rect::new(0, 0, 32, 6)
    }

    fn test_app() -> App {
        let catalog = opn_docs_util::embedded_catalog().expect("embedded catalog");
        let mut app = App::new(SharedCtx::new(catalog, LoadedTheme::from_definition(catalog::default_truecolor())), Page::Documents);
        app.focus.focus(&app.sidebar.f_tree);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(app: &mut App, sidebar: &mut SidebarComponent) -> String {
        let area = sidebar_area();
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).expect("terminal");
        terminal.draw(|frame| sidebar.render(frame, area, app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn open_paths(app: &App) -> Vec<String> {
        app.portal.navigation.expanded().open_paths().map(str::to_string).collect()
    }

    #[test]
    fn branches_toggle_and_select_while_leaves_only_select() {
        let mut app = test_app();
        let mut sidebar = SidebarComponent;
        let screen = draw(&mut app, &mut sidebar);
        assert!(screen.contains("▸ Getting Started"));

        sidebar.handle_key_events(&mut app, key(KeyCode::Enter));
        sidebar.handle_key_events(&mut app, key(KeyCode::Down));
        sidebar.handle_key_events(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started.Introduction");
        assert_eq!(open_paths(&app), ["Getting Started", "Getting Started.Introduction"]);

        sidebar.handle_key_events(&mut app, key(KeyCode::Down));
        sidebar.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started.Introduction.Overview");
        assert_eq!(open_paths(&app), ["Getting Started", "Getting Started.Introduction"]);

        sidebar.handle_key_events(&mut app, key(KeyCode::Home));
        sidebar.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started");
        assert_eq!(open_paths(&app), ["Getting Started.Introduction"]);
        assert_eq!(SidebarComponent::row_count(&app), 2);
    }

    #[test]
    fn clicks_account_for_the_scroll_offset() {
        let mut app = test_app();
        let mut sidebar = SidebarComponent;
        app.update(&Msg::ToggleExpand("Getting Started".into()));
        app.update(&Msg::ToggleExpand("Getting Started.Introduction".into()));
        // Getting Started, Introduction, Overview, Getting Access, Quick Start, Core Concepts
        assert_eq!(SidebarComponent::row_count(&app), 6);
        app.sidebar.cursor = 5;
        draw(&mut app, &mut sidebar);
        assert_eq!(app.sidebar.offset, 2);

        let list = app.sidebar.list_area;
        sidebar.handle_mouse_events(&mut app, click(list.x + 2, list.y));
        assert_eq!(app.sidebar.cursor, 2);
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started.Introduction.Overview");

        sidebar.handle_mouse_events(&mut app, click(list.x + 2, list.y + 3));
        assert_eq!(app.portal.navigation.sub_page(), "Core Concepts");
        assert!(app.portal.navigation.expanded().is_expanded("Core Concepts"));

        // Outside the sidebar nothing happens.
        let before = app.portal.clone();
        sidebar.handle_mouse_events(&mut app, click(sidebar_area().right() + 5, list.y));
        assert_eq!(app.portal, before);
    }

    #[test]
    fn arrows_expand_descend_collapse_and_ascend() {
        let mut app = test_app();
        let mut sidebar = SidebarComponent;
        draw(&mut app, &mut sidebar);

        sidebar.handle_key_events(&mut app, key(KeyCode::Right));
        assert!(app.portal.navigation.expanded().is_expanded("Getting Started"));
        assert_eq!(app.sidebar.cursor, 0);

        sidebar.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.sidebar.cursor, 1);

        sidebar.handle_key_events(&mut app, key(KeyCode::Left));
        assert_eq!(app.sidebar.cursor, 0);

        sidebar.handle_key_events(&mut app, key(KeyCode::Left));
        assert!(open_paths(&app).is_empty());
        assert_eq!(app.portal.navigation.sub_page(), "Getting Started");

        // A leaf has nothing to open.
        app.update(&Msg::ToggleExpand("Getting Started".into()));
        app.update(&Msg::ToggleExpand("Getting Started.Introduction".into()));
        app.sidebar.cursor = 2;
        let before = app.portal.clone();
        sidebar.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.portal, before);
        assert_eq!(app.sidebar.cursor, 2);
    }
}
