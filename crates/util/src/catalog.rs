//! Loading category catalogs.
//!
//! The portal ships with an embedded catalog; a different one can be supplied
//! as a YAML or JSON file whose top-level keys are page labels. Every key is
//! checked before the catalog is handed to the UI because node paths are
//! built by joining keys with `.`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use opn_docs_types::{Catalog, CategoryMap};
use thiserror::Error;
use tracing::{debug, warn};

const EMBEDDED_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../catalog/portal.yaml"));

/// Error surfaced when a catalog cannot be read or is malformed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog extension '{0}'; expected .yaml, .yml or .json")]
    UnsupportedFormat(String),
    #[error("invalid category key '{key}' under '{parent}': keys must be non-empty and must not contain '.'")]
    InvalidKey { parent: String, key: String },
}

/// Serialization formats accepted for catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension. Files without an extension
    /// are read as YAML.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            None => Ok(Self::Yaml),
            Some(extension) => match extension.to_ascii_lowercase().as_str() {
                "yaml" | "yml" => Ok(Self::Yaml),
                "json" => Ok(Self::Json),
                other => Err(CatalogError::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

/// The catalog compiled into the binary.
pub fn embedded_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG, CatalogFormat::Yaml)
}

/// Reads and validates a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&text, format)?;
    debug!(path = %path.display(), pages = catalog.pages().count(), "catalog loaded");
    Ok(catalog)
}

/// Parses and validates catalog text.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
        CatalogFormat::Json => serde_json::from_str(text)?,
    };
    if catalog.is_empty() {
        warn!("catalog defines no pages; every sidebar will be empty");
    }
    for (page, tree) in catalog.pages() {
        if !page.has_sidebar() {
            warn!(page = %page, "catalog defines a tree for a page without a sidebar; it will not be shown");
        }
        validate_keys(tree, page.label())?;
    }
    Ok(catalog)
}

fn validate_keys(tree: &CategoryMap, parent: &str) -> Result<(), CatalogError> {
    for (key, node) in tree {
        if key.trim().is_empty() || key.contains('.') {
            return Err(CatalogError::InvalidKey {
                parent: parent.to_string(),
                key: key.clone(),
            });
        }
        if let Some(children) = node.children() {
            validate_keys(children, &format!("{parent}/{key}"))?;
        }
    }
    Ok(())
}
