//! Root view that lays out the portal regions and routes input to them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use opn_docs_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{
        components::{Component, ContentComponent, NavBarComponent, SidebarComponent, TopBarComponent},
        theme::theme_helpers as th,
    },
};

const SIDEBAR_WIDTH: u16 = 32;

/// The focusable regions, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    TopBar,
    NavBar,
    Sidebar,
    Content,
}

#[derive(Debug, Default)]
pub struct MainView {
    pub top_bar_view: TopBarComponent,
    pub nav_bar_view: NavBarComponent,
    pub sidebar_view: SidebarComponent,
    pub content_view: ContentComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts focus back on the menu when the focused widget disappeared, for
    /// example the sidebar after switching to the playground.
    pub fn restore_focus(&mut self, app: &mut App) {
        app.focus.focus(&app.nav_bar);
        if app.focus.focused().is_none() {
            app.focus.first();
        }
    }

    fn focused_region(app: &App) -> Option<Region> {
        if app.top_bar.f_search.get() {
            Some(Region::TopBar)
        } else if app.nav_bar.f_menu.get() {
            Some(Region::NavBar)
        } else if app.sidebar.f_tree.get() {
            Some(Region::Sidebar)
        } else if app.content.container_focus.get() {
            Some(Region::Content)
        } else {
            None
        }
    }

    fn component_for(&mut self, region: Region) -> &mut dyn Component {
        match region {
            Region::TopBar => &mut self.top_bar_view,
            Region::NavBar => &mut self.nav_bar_view,
            Region::Sidebar => &mut self.sidebar_view,
            Region::Content => &mut self.content_view,
        }
    }

    /// Keys that mean the same thing everywhere outside a text box.
    fn handle_global_key(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => Some(vec![Effect::Quit]),
            KeyCode::Char('t') => Some(app.update(&Msg::CycleTheme)),
            KeyCode::Char('/') => {
                app.focus.focus(&app.top_bar);
                Some(Vec::new())
            }
            _ => None,
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if !app.is_editing()
            && let Some(effects) = Self::handle_global_key(app, key)
        {
            return effects;
        }

        match Self::focused_region(app) {
            Some(region) => self.component_for(region).handle_key_events(app, key),
            None => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        effects.extend(self.top_bar_view.handle_mouse_events(app, mouse));
        effects.extend(self.nav_bar_view.handle_mouse_events(app, mouse));
        if app.portal.navigation.active_page().has_sidebar() {
            effects.extend(self.sidebar_view.handle_mouse_events(app, mouse));
        }
        effects.extend(self.content_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background so unthemed cells match the palette
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.top_bar_view.render(frame, layout[0], app);
        self.nav_bar_view.render(frame, layout[1], app);
        if layout[2].width > 0 {
            self.sidebar_view.render(frame, layout[2], app);
        } else {
            app.sidebar.last_area = Rect::default();
            app.sidebar.list_area = Rect::default();
        }
        self.content_view.render(frame, layout[3], app);

        let hints_area = layout[4];
        let hint_spans = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, hints_area);

        if let Some(status) = app.status.as_deref() {
            let width = (status.width() as u16 + 1).min(hints_area.width);
            let status_area = Rect {
                x: hints_area.right().saturating_sub(width),
                width,
                ..hints_area
            };
            let status_widget = Paragraph::new(status).style(app.ctx.theme.status_info());
            frame.render_widget(status_widget, status_area);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        match Self::focused_region(app) {
            Some(Region::TopBar) => hint_spans.extend(self.top_bar_view.get_hint_spans(app)),
            Some(Region::NavBar) => hint_spans.extend(self.nav_bar_view.get_hint_spans(app)),
            Some(Region::Sidebar) => hint_spans.extend(self.sidebar_view.get_hint_spans(app)),
            Some(Region::Content) => hint_spans.extend(self.content_view.get_hint_spans(app)),
            None => {}
        }
        if !app.is_editing() {
            let mut globals = vec![(" Tab", " Focus "), (" /", " Search ")];
            if app.ctx.theme_cycling_available {
                globals.push((" t", " Theme "));
            }
            globals.push((" q", " Quit "));
            hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &globals));
        }
        hint_spans
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let rows = Layout::vertical([
            Constraint::Length(3), // top bar
            Constraint::Length(4), // main menu
            Constraint::Min(0),    // sidebar and content
            Constraint::Length(1), // hints
        ])
        .split(area);

        let sidebar_width = if app.portal.navigation.active_page().has_sidebar() { SIDEBAR_WIDTH } else { 0 };
        let body = Layout::horizontal([
            Constraint::Length(sidebar_width), // sidebar
            Constraint::Min(1),                // content
        ])
        .split(rows[2]);

        vec![rows[0], rows[1], body[0], body[1], rows[3]]
    }
}
