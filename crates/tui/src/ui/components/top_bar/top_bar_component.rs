use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use opn_docs_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::state::GUEST_NAME;
use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th, utils::truncate_to_width},
};

const TITLE: &str = "Opn Docs";
const SEARCH_PLACEHOLDER: &str = "Search...";
const SEARCH_WIDTH: u16 = 32;

#[derive(Debug, Default)]
pub struct TopBarComponent;

impl Component for TopBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let search = &mut app.top_bar.search;
        match key.code {
            KeyCode::Enter => {
                let query = search.input().trim().to_string();
                if !query.is_empty() {
                    return app.update(&Msg::SubmitSearch(query));
                }
            }
            KeyCode::Esc => {
                search.clear();
                app.focus.focus(&app.nav_bar.f_menu);
            }
            KeyCode::Char(character) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                search.insert_char(character);
            }
            KeyCode::Backspace => search.backspace(),
            KeyCode::Delete => search.delete(),
            KeyCode::Left => search.move_left(),
            KeyCode::Right => search.move_right(),
            KeyCode::Home => search.move_home(),
            KeyCode::End => search.move_end(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && app.top_bar.search_area.contains(Position::new(mouse.column, mouse.row)) {
            app.focus.focus(&app.top_bar.f_search);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let background = Block::default().style(th::panel_style(theme).bg(theme.roles().surface_muted));
        frame.render_widget(background, area);

        let areas = self.get_preferred_layout(app, area);
        let (title_area, search_area, badge_area) = (areas[0], areas[1], areas[2]);

        // Title and breadcrumb on the middle row
        let middle = Rect {
            y: title_area.y + title_area.height / 2,
            height: 1,
            ..title_area
        };
        let breadcrumb_budget = (middle.width as usize).saturating_sub(TITLE.len() + 4);
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, theme.accent_emphasis_style()),
            Span::raw("   "),
            Span::styled(
                truncate_to_width(&app.portal.navigation.breadcrumb(), breadcrumb_budget),
                theme.text_primary_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), middle);

        // Search box
        let editing = app.top_bar.is_editing();
        let search = &app.top_bar.search;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(editing));
        let inner = block.inner(search_area);
        let text = if search.input().is_empty() && !editing {
            Span::styled(format!("⌕ {SEARCH_PLACEHOLDER}"), theme.text_muted_style())
        } else {
            Span::styled(format!("⌕ {}", search.input()), th::input_style(theme, editing))
        };
        frame.render_widget(Paragraph::new(text).block(block), search_area);
        if editing {
            let column = (search.cursor_column() + 2).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + column, inner.y));
        }

        // User badge
        let badge = Rect {
            y: badge_area.y + badge_area.height / 2,
            height: 1,
            ..badge_area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" ◉ {GUEST_NAME} "), th::badge_style(theme).add_modifier(Modifier::BOLD))).centered(),
            badge,
        );

        app.top_bar.last_area = area;
        app.top_bar.search_area = search_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Search "), (" Esc", " Clear ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SEARCH_WIDTH), Constraint::Length(12)])
            .split(area)
            .to_vec()
    }
}
