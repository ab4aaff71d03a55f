use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use opn_docs_engine::rating::MAX_STARS;
use opn_docs_types::{Effect, Msg};
use opn_docs_util::format_local_timestamp;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th, utils::truncate_to_width},
};

const FILLED_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";
const OPEN_MARKER: &str = "▼";
const CLOSED_MARKER: &str = "▶";
const COMMENT_PLACEHOLDER: &str = "Enter your comment...";
/// Lines the comment box grows to before it starts scrolling.
const MAX_INPUT_LINES: usize = 4;

#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    fn comment_count(app: &App) -> usize {
        app.portal.comments.len()
    }

    fn cursor_comment_id(app: &App) -> Option<u64> {
        app.portal.comments.view().get(app.content.comment_cursor).map(|comment| comment.id)
    }

    fn submit_comment(app: &mut App) -> Vec<Effect> {
        if app.content.comment_input.is_blank() {
            return Vec::new();
        }
        let text = app.content.comment_input.take();
        app.update(&Msg::SubmitComment {
            text,
            submitted_at: Utc::now(),
        })
    }

    fn handle_input_keys(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let input = &mut app.content.comment_input;
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => input.insert_char('\n'),
            KeyCode::Enter => return Self::submit_comment(app),
            KeyCode::Esc => {
                app.focus.focus(&app.content.f_comments);
            }
            KeyCode::Char(character) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                input.insert_char(character);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
        Vec::new()
    }

    /// Keys shared by every non-editing leaf of the pane.
    fn handle_shortcut(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        if !app.portal.navigation.active_page().has_sidebar() {
            return None;
        }
        match key.code {
            KeyCode::Char(digit @ '1'..='5') => {
                let stars = digit as u8 - b'0';
                app.content.star_cursor = stars;
                Some(app.update(&Msg::SetRating(stars)))
            }
            KeyCode::Char('s') => Some(app.update(&Msg::ToggleSortOrder)),
            _ => None,
        }
    }

    fn render_heading(&self, frame: &mut Frame, areas: &[Rect], app: &App) {
        let theme = &*app.ctx.theme;
        let navigation = &app.portal.navigation;
        let heading = navigation.heading();
        frame.render_widget(Paragraph::new(Span::styled(heading, theme.accent_emphasis_style())), areas[0]);
        frame.render_widget(
            Paragraph::new(format!("Content for {heading} in {} goes here...", navigation.active_page())).style(theme.text_muted_style()),
            areas[1],
        );

        let Some(row) = navigation.selected_row(&app.ctx.catalog) else {
            return;
        };
        let (label, entries): (&str, Vec<&str>) = if row.is_leaf {
            ("Topics: ", row.topics().iter().map(String::as_str).collect())
        } else {
            let children = row.children(navigation.expanded());
            ("Sections: ", children.iter().map(|child| child.label).collect())
        };
        if entries.is_empty() {
            return;
        }
        let line = Line::from(vec![
            Span::styled(label, theme.text_secondary_style()),
            Span::styled(entries.join(" · "), theme.text_primary_style()),
        ]);
        frame.render_widget(Paragraph::new(line), areas[2]);
    }

    fn render_selectors(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let page = app.portal.navigation.active_page();
        let language_label = format!("Language: {} ▾", app.portal.language.label());
        let version_label = format!("API {} ▾", app.portal.api_version.label());

        let mut constraints = vec![Constraint::Length(language_label.width() as u16 + 4)];
        if page.shows_api_version() {
            constraints.push(Constraint::Length(version_label.width() as u16 + 4));
        }
        constraints.push(Constraint::Min(0));
        let areas = Layout::horizontal(constraints).spacing(2).split(area);

        render_selector(frame, areas[0], &language_label, app.content.f_language.get(), theme);
        let api_version_area = if page.shows_api_version() {
            render_selector(frame, areas[1], &version_label, app.content.f_api_version.get(), theme);
            areas[1]
        } else {
            Rect::default()
        };
        app.content.language_area = areas[0];
        app.content.api_version_area = api_version_area;
    }

    fn render_rating(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content.f_rating.get();
        let block = th::block(theme, Some("Rate this content"), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        let rating = app.portal.rating;
        let mut star_areas = Vec::with_capacity(MAX_STARS as usize);
        let mut spans = Vec::with_capacity(MAX_STARS as usize);
        for star in 1..=MAX_STARS {
            let glyph = if rating.is_filled(star) { FILLED_STAR } else { EMPTY_STAR };
            let mut style = theme.rating_style(rating.is_filled(star));
            if focused && star == app.content.star_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
            let x = rows[0].x + (star as u16 - 1) * 2;
            star_areas.push(Rect::new(x, rows[0].y, 1, 1).intersection(rows[0]));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);
        frame.render_widget(
            Paragraph::new(format!("Overall rating: {}/{MAX_STARS}", rating.value())).style(theme.text_muted_style()),
            rows[1],
        );
        app.content.star_areas = star_areas;
    }

    fn render_comments(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let list_focused = app.content.f_comments.get();
        let block = th::block(theme, Some("Comments"), list_focused || app.content.is_editing());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = &app.content.comment_input;
        let input_height = input.line_count().clamp(1, MAX_INPUT_LINES) as u16 + 2;
        let areas = Layout::vertical([Constraint::Length(input_height), Constraint::Length(1), Constraint::Min(0)]).split(inner);

        // Comment form
        let editing = app.content.is_editing();
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(editing))
            .title(Span::styled("New comment (Enter to post)", theme.text_muted_style()));
        let input_inner = input_block.inner(areas[0]);
        // Keep the cursor line inside the box once the text outgrows it.
        let scroll = input.cursor_line().saturating_sub(input_inner.height.saturating_sub(1));
        let input_text = if input.input().is_empty() && !editing {
            Paragraph::new(COMMENT_PLACEHOLDER).style(theme.text_muted_style())
        } else {
            Paragraph::new(input.input().to_string()).style(th::input_style(theme, editing))
        };
        frame.render_widget(input_text.scroll((scroll, 0)).block(input_block), areas[0]);
        if editing {
            let column = input.cursor_column().min(input_inner.width.saturating_sub(1));
            let row = (input.cursor_line() - scroll).min(input_inner.height.saturating_sub(1));
            frame.set_cursor_position(Position::new(input_inner.x + column, input_inner.y + row));
        }

        // Sort toggle
        let sort_label = format!("[{}]", app.portal.comments.sort_order().toggle_label());
        let header_areas =
            Layout::horizontal([Constraint::Length(14), Constraint::Length(sort_label.width() as u16), Constraint::Min(0)]).split(areas[1]);
        frame.render_widget(
            Paragraph::new(Span::styled("All Comments", theme.text_secondary_style().add_modifier(Modifier::BOLD))),
            header_areas[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(sort_label, theme.accent_primary_style().add_modifier(Modifier::UNDERLINED))),
            header_areas[1],
        );

        // Comment list
        let list_area = areas[2];
        let view = app.portal.comments.view();
        let cursor = app.content.comment_cursor.min(view.len().saturating_sub(1));
        let heights: Vec<usize> = view.iter().map(|comment| 1 + if comment.is_open { body_lines(&comment.text).len() } else { 0 }).collect();
        let offset = comment_offset_for(&heights, cursor, app.content.comment_offset, list_area.height as usize);

        let mut lines: Vec<Line> = Vec::new();
        let mut comment_header_areas = Vec::new();
        let width = list_area.width as usize;
        for (index, comment) in view.iter().enumerate().skip(offset) {
            if lines.len() >= list_area.height as usize {
                break;
            }
            let marker = if comment.is_open { OPEN_MARKER } else { CLOSED_MARKER };
            let header_style = if list_focused && index == cursor {
                theme.selection_style()
            } else {
                theme.text_secondary_style()
            };
            let row = list_area.y + lines.len() as u16;
            comment_header_areas.push((Rect::new(list_area.x, row, list_area.width, 1), comment.id));
            lines.push(Line::from(Span::styled(
                format!("{marker} {}", format_local_timestamp(&comment.created_at)),
                header_style,
            )));
            if comment.is_open {
                for body in body_lines(&comment.text) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", truncate_to_width(body, width.saturating_sub(2))),
                        theme.text_primary_style(),
                    )));
                }
            }
        }
        if view.is_empty() {
            lines.push(Line::from(Span::styled("No comments yet", theme.text_muted_style())));
        }
        lines.truncate(list_area.height as usize);
        frame.render_widget(Paragraph::new(lines), list_area);

        app.content.input_area = areas[0];
        app.content.sort_area = header_areas[1];
        app.content.comment_cursor = cursor;
        app.content.comment_offset = offset;
        app.content.comment_header_areas = comment_header_areas;
    }

    fn render_playground(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("API Playground"), false);
        frame.render_widget(
            Paragraph::new("Interactive API testing environment goes here...")
                .style(theme.text_muted_style())
                .block(block),
            area,
        );
    }
}

impl Component for ContentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.content.is_editing() {
            return Self::handle_input_keys(app, key);
        }
        if let Some(effects) = Self::handle_shortcut(app, key) {
            return effects;
        }

        let content = &app.content;
        if content.f_language.get() {
            let language = match key.code {
                KeyCode::Left | KeyCode::Up => app.portal.language.previous(),
                KeyCode::Right | KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') => app.portal.language.next(),
                _ => return Vec::new(),
            };
            return app.update(&Msg::SelectLanguage(language));
        }
        if content.f_api_version.get() {
            let version = match key.code {
                KeyCode::Left | KeyCode::Up => app.portal.api_version.previous(),
                KeyCode::Right | KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') => app.portal.api_version.next(),
                _ => return Vec::new(),
            };
            return app.update(&Msg::SelectApiVersion(version));
        }
        if content.f_rating.get() {
            match key.code {
                KeyCode::Left => app.content.move_star_cursor(-1),
                KeyCode::Right => app.content.move_star_cursor(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let stars = app.content.star_cursor;
                    return app.update(&Msg::SetRating(stars));
                }
                _ => {}
            }
            return Vec::new();
        }
        if content.f_comments.get() {
            let count = Self::comment_count(app);
            match key.code {
                KeyCode::Up => app.content.move_comment_cursor(-1, count),
                KeyCode::Down => app.content.move_comment_cursor(1, count),
                KeyCode::Home => app.content.comment_cursor = 0,
                KeyCode::End => app.content.comment_cursor = count.saturating_sub(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(id) = Self::cursor_comment_id(app) {
                        return app.update(&Msg::ToggleComment(id));
                    }
                }
                KeyCode::Char('c') | KeyCode::Char('i') => {
                    app.focus.focus(&app.content.f_comment_input);
                }
                _ => {}
            }
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if !app.content.last_area.contains(position) {
            return Vec::new();
        }
        let count = Self::comment_count(app);
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                app.content.move_comment_cursor(1, count);
                return Vec::new();
            }
            MouseEventKind::ScrollUp => {
                app.content.move_comment_cursor(-1, count);
                return Vec::new();
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return Vec::new(),
        }

        let content = &app.content;
        if content.language_area.contains(position) {
            app.focus.focus(&app.content.f_language);
            let language = app.portal.language.next();
            return app.update(&Msg::SelectLanguage(language));
        }
        if content.api_version_area.contains(position) {
            app.focus.focus(&app.content.f_api_version);
            let version = app.portal.api_version.next();
            return app.update(&Msg::SelectApiVersion(version));
        }
        if !app.portal.navigation.active_page().has_sidebar() {
            return Vec::new();
        }
        if let Some(index) = content.star_areas.iter().position(|area| area.contains(position)) {
            let stars = index as u8 + 1;
            app.content.star_cursor = stars;
            app.focus.focus(&app.content.f_rating);
            return app.update(&Msg::SetRating(stars));
        }
        if content.input_area.contains(position) {
            app.focus.focus(&app.content.f_comment_input);
            return Vec::new();
        }
        if content.sort_area.contains(position) {
            return app.update(&Msg::ToggleSortOrder);
        }
        if let Some((_, id)) = content.comment_header_areas.iter().find(|(area, _)| area.contains(position)).copied() {
            if let Some(index) = app.portal.comments.view().iter().position(|comment| comment.id == id) {
                app.content.comment_cursor = index;
            }
            app.focus.focus(&app.content.f_comments);
            return app.update(&Msg::ToggleComment(id));
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = Block::default()
            .borders(Borders::NONE)
            .style(th::panel_style(theme))
            .padding(ratatui::widgets::Padding::horizontal(2));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = self.get_preferred_layout(app, inner);
        self.render_heading(frame, &areas, app);
        self.render_selectors(frame, areas[3], app);
        if app.portal.navigation.active_page().has_sidebar() {
            let sections = Layout::vertical([Constraint::Length(4), Constraint::Length(1), Constraint::Min(6)]).split(areas[4]);
            self.render_rating(frame, sections[0], app);
            self.render_comments(frame, sections[2], app);
        } else {
            let sections = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(areas[4]);
            self.render_playground(frame, sections[0], app);
            app.content.star_areas.clear();
            app.content.input_area = Rect::default();
            app.content.sort_area = Rect::default();
            app.content.comment_header_areas.clear();
        }
        app.content.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let content = &app.content;
        if content.is_editing() {
            return th::build_hint_spans(theme, &[(" Enter", " Post "), (" Alt+Enter", " New line "), (" Esc", " Done ")]);
        }
        if content.f_language.get() || content.f_api_version.get() {
            return th::build_hint_spans(theme, &[(" ←/→", " Change ")]);
        }
        if content.f_rating.get() {
            return th::build_hint_spans(theme, &[(" ←/→", " Pick star "), (" Enter", " Rate "), (" 1-5", " Rate directly ")]);
        }
        th::build_hint_spans(theme, &[(" ↑/↓", " Move "), (" Enter", " Expand/Collapse "), (" s", " Sort "), (" c", " Write ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(1), // heading
            Constraint::Length(1), // placeholder body
            Constraint::Length(1), // topics or sections
            Constraint::Length(3), // selectors
            Constraint::Min(0),    // rating and comments, or the playground
        ])
        .split(area)
        .to_vec()
    }
}

fn render_selector<T: crate::ui::theme::Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, focused: bool, theme: &T) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused));
    frame.render_widget(Paragraph::new(label.to_string()).centered().style(theme.accent_primary_style()).block(block), area);
}

/// Body text split into display lines; blank bodies still take one line.
fn body_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() { vec![""] } else { lines }
}

/// First comment to draw so the comment at `cursor` is fully visible.
fn comment_offset_for(heights: &[usize], cursor: usize, current: usize, viewport: usize) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let mut offset = current.min(cursor);
    while offset < cursor && heights[offset..=cursor].iter().sum::<usize>() > viewport {
        offset += 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::SharedCtx,
        ui::theme::{LoadedTheme, catalog},
    };
    use crossterm::event::{KeyEventKind, KeyEventState};
    use opn_docs_types::Page;

    fn test_app() -> App {
        let catalog = opn_docs_util::embedded_catalog().expect("embedded catalog");
        App::new(SharedCtx::new(catalog, LoadedTheme::from_definition(catalog::default_truecolor())), Page::Documents)
    }

    fn press(component: &mut ContentComponent, app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Effect> {
        let key = KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        component.handle_key_events(app, key)
    }

    #[test]
    fn alt_enter_breaks_lines_and_enter_posts() {
        let mut app = test_app();
        let mut component = ContentComponent;
        let before = app.portal.comments.len();
        app.focus.focus(&app.content.f_comment_input);

        press(&mut component, &mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        press(&mut component, &mut app, KeyCode::Enter, KeyModifiers::ALT);
        press(&mut component, &mut app, KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(app.content.comment_input.input(), "a\nb");
        assert_eq!(app.portal.comments.len(), before);

        press(&mut component, &mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.portal.comments.len(), before + 1);
        let newest = app.portal.comments.get(before as u64 + 1).expect("new comment");
        assert_eq!(body_lines(&newest.text), ["a", "b"]);
        assert_eq!(app.content.comment_input.input(), "");
    }

    #[test]
    fn offset_scrolls_until_the_cursor_fits() {
        let heights = [2, 2, 1, 3];
        assert_eq!(comment_offset_for(&heights, 0, 0, 4), 0);
        assert_eq!(comment_offset_for(&heights, 3, 0, 4), 2);
        assert_eq!(comment_offset_for(&heights, 1, 3, 4), 1);
        assert_eq!(comment_offset_for(&[], 0, 5, 4), 0);
    }

    #[test]
    fn multi_line_bodies_keep_their_lines() {
        assert_eq!(body_lines("a\nb"), ["a", "b"]);
        assert_eq!(body_lines(""), [""]);
    }
}
