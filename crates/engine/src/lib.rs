//! # Opn Docs Engine
//!
//! State and transitions behind the documentation portal. Nothing here
//! performs I/O or touches the terminal: front ends feed interaction events in
//! and read structured state back out.
//!
//! ## Modules
//!
//! - **`tree`**: turns a category tree plus expand state into sidebar rows,
//!   honouring the page-dependent depth cutoff
//! - **`expand`**: per-path open/closed flags for sidebar branches
//! - **`navigation`**: active page, sub-page and expand state
//! - **`comments`**: the local comment list and its sort order
//! - **`rating`**: the session-wide star rating
//! - **`portal`**: everything above behind a single `apply(&Msg)` entry point
//!
//! ## Usage
//!
//! ```rust
//! use opn_docs_engine::NavigationState;
//! use opn_docs_types::{Catalog, CategoryNode, Page};
//!
//! let mut catalog = Catalog::default();
//! let tree = [("Getting Started".to_string(), CategoryNode::leaf(["Overview"]))].into_iter().collect();
//! catalog.insert(Page::Documents, tree);
//!
//! let navigation = NavigationState::new(&catalog);
//! assert_eq!(navigation.sub_page(), "Getting Started");
//! let rows = navigation.visible_rows(&catalog);
//! assert!(rows[0].is_leaf);
//! ```

pub mod comments;
pub mod expand;
pub mod navigation;
pub mod portal;
pub mod rating;
pub mod tree;

pub use comments::{Comment, CommentList};
pub use expand::ExpandState;
pub use navigation::NavigationState;
pub use portal::PortalState;
pub use rating::Rating;
pub use tree::{DepthPolicy, TreeRow};

#[cfg(test)]
mod test_support;
