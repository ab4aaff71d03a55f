//! Helpers shared by the Opn Docs binary and terminal UI: catalog loading,
//! user preferences, timestamp formatting and path handling.

pub mod catalog;
pub mod date_handling;
pub mod path_processing;
pub mod preferences;

pub use catalog::{CatalogError, CatalogFormat, embedded_catalog, load_catalog, parse_catalog};
pub use date_handling::{format_local_timestamp, format_timestamp};
pub use path_processing::{app_config_dir, expand_tilde};
pub use preferences::{PreferencesError, UserPreferences};
