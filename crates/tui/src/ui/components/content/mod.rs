//! Content pane: heading, selectors, rating and comments.
//!
//! Every interactive part of the pane is its own focus leaf. The API version
//! selector only exists on the documents page, and the playground shows
//! nothing below the selectors but its placeholder, so the focus tree is
//! rebuilt from [`ContentState::build`] whenever the page changes.

mod content_component;
mod state;

pub use content_component::ContentComponent;
pub use state::ContentState;
