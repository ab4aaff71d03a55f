//! Sidebar rows from a category tree.
//!
//! [`render`] walks one level of a tree and produces a [`TreeRow`] per entry in
//! stored order. Children are never produced eagerly: a row keeps a reference
//! to its node and yields its own rows through [`TreeRow::children`].
//! [`visible_rows`] flattens the tree depth-first, descending only into
//! expanded branches, which is what a list widget needs.
//!
//! Whether a row is a leaf depends on the node shape *and* on the depth
//! cutoff of the active page (see [`DepthPolicy`]). A mapping that sits at the
//! cutoff depth is still rendered as a leaf.

use opn_docs_types::{CategoryMap, CategoryNode, Page};

use crate::ExpandState;

/// Separator between keys in a node path.
pub const PATH_SEPARATOR: char = '.';

/// Depth cutoff applied while rendering a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPolicy {
    max_depth: usize,
}

impl DepthPolicy {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Cutoff for the tree of `page`.
    pub fn for_page(page: Page) -> Self {
        Self::new(page.max_depth())
    }

    pub fn max_depth(self) -> usize {
        self.max_depth
    }

    /// A node is a leaf when it is a label sequence or sits at or below the
    /// cutoff depth.
    pub fn is_leaf(self, node: &CategoryNode, depth: usize) -> bool {
        node.is_label_sequence() || depth >= self.max_depth
    }
}

/// One rendered sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    /// Dot-joined keys from the root; unique per node.
    pub path: String,
    /// The node's own key.
    pub label: &'a str,
    /// Zero for top-level categories.
    pub depth: usize,
    /// Leaves cannot be expanded and carry no expand icon.
    pub is_leaf: bool,
    /// Open flag for branches; always `false` for leaves.
    pub is_expanded: bool,
    node: &'a CategoryNode,
    policy: DepthPolicy,
}

impl<'a> TreeRow<'a> {
    fn new(key: &'a str, node: &'a CategoryNode, parent: &str, depth: usize, policy: DepthPolicy, expand: &ExpandState) -> Self {
        let path = join_path(parent, key);
        let is_leaf = policy.is_leaf(node, depth);
        let is_expanded = !is_leaf && expand.is_expanded(&path);
        Self {
            path,
            label: key,
            depth,
            is_leaf,
            is_expanded,
            node,
            policy,
        }
    }

    /// The tree node behind this row.
    pub fn node(&self) -> &'a CategoryNode {
        self.node
    }

    /// Rows one level down, regardless of whether this row is expanded.
    /// Leaves have no children even when their node is a mapping.
    pub fn children(&self, expand: &ExpandState) -> Vec<TreeRow<'a>> {
        if self.is_leaf {
            return Vec::new();
        }
        match self.node.children() {
            Some(children) => render(children, &self.path, self.depth + 1, self.policy, expand),
            None => Vec::new(),
        }
    }

    /// Topic labels listed under a leaf.
    pub fn topics(&self) -> &'a [String] {
        if self.is_leaf { self.node.labels() } else { &[] }
    }

    /// Path of the enclosing branch, `None` at the top level.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once(PATH_SEPARATOR).map(|(parent, _)| parent)
    }
}

/// Renders the entries of `map` as rows at `depth`, below `parent`.
///
/// Pass an empty `parent` and depth zero for the root of a page tree.
pub fn render<'a>(map: &'a CategoryMap, parent: &str, depth: usize, policy: DepthPolicy, expand: &ExpandState) -> Vec<TreeRow<'a>> {
    map.iter()
        .map(|(key, node)| TreeRow::new(key, node, parent, depth, policy, expand))
        .collect()
}

/// Every row a sidebar shows: depth-first, children directly after their
/// parent, and only below expanded branches.
pub fn visible_rows<'a>(map: &'a CategoryMap, policy: DepthPolicy, expand: &ExpandState) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    push_visible(render(map, "", 0, policy, expand), expand, &mut rows);
    rows
}

fn push_visible<'a>(level: Vec<TreeRow<'a>>, expand: &ExpandState, out: &mut Vec<TreeRow<'a>>) {
    for row in level {
        let children = if row.is_expanded { row.children(expand) } else { Vec::new() };
        out.push(row);
        push_visible(children, expand, out);
    }
}

/// Resolves `path` to the row that would represent it.
///
/// Returns `None` for unknown paths and for paths that point below a leaf.
pub fn find_row<'a>(map: &'a CategoryMap, path: &str, policy: DepthPolicy, expand: &ExpandState) -> Option<TreeRow<'a>> {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let mut level = map;
    let mut parent = String::new();
    for (depth, segment) in segments.iter().enumerate() {
        let (key, node) = level.get_key_value(*segment)?;
        if depth + 1 == segments.len() {
            return Some(TreeRow::new(key, node, &parent, depth, policy, expand));
        }
        if policy.is_leaf(node, depth) {
            return None;
        }
        level = node.children()?;
        parent = join_path(&parent, key);
    }
    None
}

/// Resolves `path` to its node, ignoring any depth cutoff.
pub fn find_node<'a>(map: &'a CategoryMap, path: &str) -> Option<&'a CategoryNode> {
    let mut segments = path.split(PATH_SEPARATOR);
    let mut node = map.get(segments.next()?)?;
    for segment in segments {
        node = node.children()?.get(segment)?;
    }
    Some(node)
}

/// Paths of every row that can be expanded under `policy`.
pub fn branch_paths(map: &CategoryMap, policy: DepthPolicy) -> Vec<String> {
    let mut paths = Vec::new();
    let everything_closed = ExpandState::new();
    let mut pending = render(map, "", 0, policy, &everything_closed);
    while let Some(row) = pending.pop() {
        if row.is_leaf {
            continue;
        }
        pending.extend(row.children(&everything_closed));
        paths.push(row.path);
    }
    paths.sort();
    paths
}

/// Appends `key` to `parent`, or returns `key` alone at the root.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{key}")
    }
}
