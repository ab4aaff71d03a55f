//! Category trees that drive the sidebar.
//!
//! A catalog holds one tree per page. Each tree is an ordered mapping from
//! category names to either a nested mapping or a list of topic labels. The
//! shape is decided once when the catalog is built or deserialized, so the
//! renderer never has to inspect values at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Page;

/// Ordered children of a branch. Iteration order is the display order.
pub type CategoryMap = IndexMap<String, CategoryNode>;

/// A value in the category tree.
///
/// Sequences deserialize to [`CategoryNode::Leaf`] and mappings to
/// [`CategoryNode::Branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryNode {
    /// Topic labels for a category that cannot be expanded further.
    Leaf(Vec<String>),
    /// Nested categories.
    Branch(CategoryMap),
}

impl CategoryNode {
    /// Builds a branch from `(key, node)` pairs, keeping their order.
    pub fn branch<K: Into<String>>(children: impl IntoIterator<Item = (K, CategoryNode)>) -> Self {
        Self::Branch(children.into_iter().map(|(key, node)| (key.into(), node)).collect())
    }

    /// Builds a leaf from topic labels.
    pub fn leaf<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        Self::Leaf(labels.into_iter().map(Into::into).collect())
    }

    /// True when the node is a plain label sequence.
    pub fn is_label_sequence(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Nested categories, or `None` for a label sequence.
    pub fn children(&self) -> Option<&CategoryMap> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Topic labels, empty for a branch.
    pub fn labels(&self) -> &[String] {
        match self {
            Self::Leaf(labels) => labels,
            Self::Branch(_) => &[],
        }
    }
}

/// One category tree per page.
///
/// Serialized as a mapping from page labels (`"Documents"`, `"FAQs"`, ...) to
/// trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pages: IndexMap<Page, CategoryMap>,
}

impl Catalog {
    /// Tree for `page`, if the catalog defines one.
    pub fn tree(&self, page: Page) -> Option<&CategoryMap> {
        self.pages.get(&page)
    }

    /// First top-level category of the page's tree.
    pub fn first_category(&self, page: Page) -> Option<&str> {
        self.tree(page).and_then(|tree| tree.keys().next()).map(String::as_str)
    }

    /// Replaces the tree for `page`, returning the previous one.
    pub fn insert(&mut self, page: Page, tree: CategoryMap) -> Option<CategoryMap> {
        self.pages.insert(page, tree)
    }

    /// Pages that have a tree, in catalog order.
    pub fn pages(&self) -> impl Iterator<Item = (Page, &CategoryMap)> {
        self.pages.iter().map(|(page, tree)| (*page, tree))
    }

    /// True when no page has a tree.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
