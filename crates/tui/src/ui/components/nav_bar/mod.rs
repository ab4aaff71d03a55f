//! Horizontal main menu.
//!
//! One button per page in menu order. The menu is a single focus leaf with
//! its own cursor so Tab leaves the menu instead of stepping through every
//! button.
//! - Left/Right (or Home/End) move the cursor
//! - Enter or Space selects the page under the cursor
//! - Clicking a button selects its page and focuses the menu

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::NavBarState;
