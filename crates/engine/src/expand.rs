//! Open/closed flags for sidebar branches, keyed by node path.

use std::collections::BTreeSet;

/// Which sidebar branches are currently open.
///
/// Only open paths are stored; a path that is absent is closed. Because a
/// closed path is never kept around, toggling the same path twice restores
/// the exact previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    open: BTreeSet<String>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.open.contains(path)
    }

    /// Flips the flag for `path` and returns the new value.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.open.remove(path) {
            false
        } else {
            self.open.insert(path.to_string());
            true
        }
    }

    /// Forces `path` open or closed.
    pub fn set(&mut self, path: &str, expanded: bool) {
        if expanded {
            self.open.insert(path.to_string());
        } else {
            self.open.remove(path);
        }
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open paths in lexical order.
    pub fn open_paths(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            open: iter.into_iter().map(Into::into).collect(),
        }
    }
}
