//! Category trees shared by the unit tests.

use opn_docs_types::{Catalog, CategoryMap, CategoryNode, Page};

fn map<const N: usize>(entries: [(&str, CategoryNode); N]) -> CategoryMap {
    entries.into_iter().map(|(key, node)| (key.to_string(), node)).collect()
}

pub(crate) fn documents_tree() -> CategoryMap {
    map([
        (
            "Getting Started",
            CategoryNode::branch([
                (
                    "Introduction",
                    CategoryNode::branch([
                        ("Overview", CategoryNode::leaf(["What is Opn Docs", "Key Features"])),
                        ("Getting Access", CategoryNode::leaf(["Sign Up", "API Keys"])),
                    ]),
                ),
                (
                    "Quick Start",
                    CategoryNode::branch([
                        ("Setup", CategoryNode::leaf(["Installation", "Configuration"])),
                        ("First API Call", CategoryNode::leaf(["Authentication", "Making a Request"])),
                    ]),
                ),
            ]),
        ),
        (
            "Core Concepts",
            CategoryNode::branch([
                (
                    "Authentication",
                    CategoryNode::branch([
                        ("API Keys", CategoryNode::leaf(["Obtaining Keys", "Using Keys"])),
                        ("OAuth", CategoryNode::leaf(["Setup", "Token Management"])),
                    ]),
                ),
                (
                    "Webhooks",
                    CategoryNode::branch([
                        ("Configuration", CategoryNode::leaf(["Setting Up", "Testing"])),
                        ("Events", CategoryNode::leaf(["Available Events", "Payload Structure"])),
                    ]),
                ),
            ]),
        ),
    ])
}

pub(crate) fn changelog_tree() -> CategoryMap {
    map([
        (
            "2024",
            CategoryNode::branch([
                ("March", CategoryNode::leaf(["Feature Updates", "Bug Fixes"])),
                ("February", CategoryNode::leaf(["New Integrations", "Performance Improvements"])),
            ]),
        ),
        (
            "2023",
            CategoryNode::branch([("December", CategoryNode::leaf(["Year-End Updates", "Security Enhancements"]))]),
        ),
    ])
}

/// Mappings nested deeper than any page cutoff.
pub(crate) fn four_level_tree() -> CategoryMap {
    map([(
        "Root",
        CategoryNode::branch([
            (
                "Middle",
                CategoryNode::branch([
                    ("Deep", CategoryNode::branch([("Bottom", CategoryNode::leaf(["x", "y"]))])),
                    ("Notes", CategoryNode::leaf(["n"])),
                ]),
            ),
            ("Topics", CategoryNode::leaf(["a", "b"])),
        ]),
    )])
}

pub(crate) fn catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.insert(Page::Documents, documents_tree());
    catalog.insert(Page::Changelog, changelog_tree());
    catalog.insert(Page::Faqs, CategoryMap::new());
    catalog
}
