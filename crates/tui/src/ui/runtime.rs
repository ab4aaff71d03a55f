//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Read terminal input on a dedicated blocking thread and forward it over a
//!   channel so the async loop never blocks on `crossterm::event::read()`.
//! - Route events through [`MainView`] and carry out the returned `Effect`s
//!   (theme preference writes, quitting).
//! - Render only after something happened.
//!
//! Entry Point
//! - `run_app(app, preferences)` is called from `lib::run` and performs
//!   setup, event processing, and teardown.
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use opn_docs_types::{Effect, Msg};
use opn_docs_util::UserPreferences;
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

/// Whether the loop keeps going after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Spawn a dedicated input thread that waits for terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// `poll()` and `read()` stay on the same OS thread; mixing them across
/// threads loses events in some terminals.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(50);
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    if let Err(error) = sender.blocking_send(event) {
                        debug!("Input receiver dropped: {}", error);
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds focus for the current page, then draws a frame.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // The set of focusable widgets depends on the active page
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Translate a raw crossterm event into effects.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        // Windows reports releases too; only presses mean anything here.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Key(_) => Vec::new(),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Carry out effects returned by components.
fn process_effects(preferences: &UserPreferences, effects: Vec<Effect>) -> LoopControl {
    let mut control = LoopControl::Continue;
    for effect in effects {
        match effect {
            Effect::PersistTheme(theme_id) => {
                if let Err(error) = preferences.set_preferred_theme(Some(theme_id)) {
                    warn!("Failed to persist theme preference: {}", error);
                }
            }
            Effect::Quit => control = LoopControl::Exit,
        }
    }
    control
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// thread, runs the event loop, and restores the terminal on exit.
pub async fn run_app(mut app: App, preferences: Arc<UserPreferences>) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver, &preferences).await;
    // Restore the terminal even when the loop failed
    input_receiver.close();
    cleanup_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
    preferences: &UserPreferences,
) -> Result<()> {
    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare sizes after every
    // event and synthesize the message.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                if process_effects(preferences, effects) == LoopControl::Exit {
                    break;
                }
            }
            _ = signal::ctrl_c() => { break; }
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            let _ = app.update(&Msg::Resize(width, height));
        }

        render(terminal, app, main_view)?;
    }
    debug!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_effect_reaches_the_preferences() {
        let preferences = UserPreferences::ephemeral();
        let control = process_effects(&preferences, vec![Effect::PersistTheme("nord".into())]);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(preferences.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn quit_stops_after_the_whole_batch() {
        let preferences = UserPreferences::ephemeral();
        let control = process_effects(&preferences, vec![Effect::Quit, Effect::PersistTheme("dracula".into())]);
        assert_eq!(control, LoopControl::Exit);
        assert_eq!(preferences.preferred_theme().as_deref(), Some("dracula"));
    }
}
