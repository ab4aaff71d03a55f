//! Component system for the Opn Docs TUI.
//!
//! Components are self-contained UI regions (menu, sidebar, content pane)
//! that translate input into portal messages and render themselves. Their
//! persistent state lives on [`App`] so focus and hit-testing survive between
//! frames; the component structs themselves are thin.

use crossterm::event::{KeyEvent, MouseEvent};
use opn_docs_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI region with its own event handling and rendering.
///
/// Event handlers report side effects back to the runtime as [`Effect`]s
/// rather than performing them.
pub(crate) trait Component {
    /// Handle an application-level message.
    ///
    /// The default forwards the message to [`App::update`].
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Components hit-test against the areas they
    /// recorded during the last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Rendering may record layout on `app` for later hit-testing but must
    /// not change portal state.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while the component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas the component splits `area` into.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
