use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use opn_docs_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders},
};

use crate::{
    app::App,
    ui::{
        components::Component,
        theme::theme_helpers::{self as th, render_button},
        utils::find_target_index_by_mouse_position,
    },
};

/// Renders the main menu and turns activation into [`Msg::SelectPage`].
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    fn select_cursor_page(app: &mut App) -> Vec<Effect> {
        match app.nav_bar.cursor_page() {
            Some(page) => app.update(&Msg::SelectPage(page)),
            None => Vec::new(),
        }
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => app.nav_bar.move_cursor(-1),
            KeyCode::Right => app.nav_bar.move_cursor(1),
            KeyCode::Home => app.nav_bar.cursor = 0,
            KeyCode::End => app.nav_bar.cursor = app.nav_bar.items.len().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => return Self::select_cursor_page(app),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let state = &app.nav_bar;
        let Some(index) = find_target_index_by_mouse_position(&state.last_area, &state.per_item_areas, mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.nav_bar.cursor = index;
        app.focus.focus(&app.nav_bar.f_menu);
        Self::select_cursor_page(app)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let is_focused = app.nav_bar.f_menu.get();
        let active_page = app.portal.navigation.active_page();

        let block = Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme.roles().divider)).style(th::panel_style(theme));
        frame.render_widget(block, area);

        let item_areas = self.get_preferred_layout(app, area);
        for (index, item) in app.nav_bar.items.iter().enumerate() {
            if let Some(item_area) = item_areas.get(index).copied() {
                let has_cursor = is_focused && index == app.nav_bar.cursor;
                render_button(frame, item_area, &item.caption(), has_cursor, item.page == active_page, theme);
            }
        }
        app.nav_bar.last_area = area;
        app.nav_bar.per_item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ←/→", " Move "), (" Enter", " Open page ")])
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let row = Rect {
            height: area.height.saturating_sub(1).max(1),
            ..area
        };
        let constraints = app
            .nav_bar
            .items
            .iter()
            .map(|item| Constraint::Length(unicode_width::UnicodeWidthStr::width(item.caption().as_str()) as u16 + 4));
        Layout::horizontal(constraints).flex(Flex::Center).spacing(1).split(row).to_vec()
    }
}
