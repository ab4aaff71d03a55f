//! Sidebar tree for the active page.
//!
//! Rows come from the engine's visible-row walk, so only expanded branches
//! contribute children. The component keeps a keyboard cursor separate from
//! the selected sub-page: moving the cursor changes nothing until a row is
//! activated.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::SidebarState;
