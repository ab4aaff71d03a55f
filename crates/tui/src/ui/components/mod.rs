pub mod common;
pub mod component;
pub mod content;
pub mod nav_bar;
pub mod sidebar;
pub mod top_bar;

pub(crate) use component::Component;
pub use content::{ContentComponent, ContentState};
pub use nav_bar::{NavBarComponent, NavBarState};
pub use sidebar::{SidebarComponent, SidebarState};
pub use top_bar::{TopBarComponent, TopBarState};
