//! # Opn Docs TUI Library
//!
//! A terminal front end for the Opn Docs portal: a top bar with search and
//! the guest badge, the main page menu, a collapsible category sidebar and
//! a content pane with language and API version selectors, a star rating
//! and a comment thread.
//!
//! ## Architecture
//!
//! Each region (top bar, menu, sidebar, content) is a component that turns
//! input into portal messages and renders itself. Portal state lives in
//! `opn_docs_engine`; this crate only keeps cursors, text inputs, focus and
//! hit-test areas.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use opn_docs_types::{Catalog, Page};
use opn_docs_util::UserPreferences;
use tracing::info;

use crate::app::{App, SharedCtx};

/// Startup choices coming from the command line.
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Page shown first; defaults to Documents.
    pub initial_page: Option<Page>,
    /// Theme name or alias overriding `TUI_THEME` and saved preferences.
    pub theme: Option<String>,
}

/// Runs the portal until the reader quits.
///
/// Only the theme choice is written back to `preferences`; page, language
/// and API version selections start fresh on every launch.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into raw mode or the
/// alternate screen, or when drawing fails.
pub async fn run(catalog: Catalog, preferences: Arc<UserPreferences>, options: TuiOptions) -> Result<()> {
    let preferred_theme = preferences.preferred_theme();
    let loaded_theme = ui::theme::load(options.theme.as_deref(), preferred_theme.as_deref());
    info!(theme = loaded_theme.definition.id, "starting portal");

    let page = options.initial_page.unwrap_or_default();
    let app = App::new(SharedCtx::new(catalog, loaded_theme), page);
    ui::runtime::run_app(app, preferences).await
}
