use chrono::{TimeZone, Utc};
use opn_docs_engine::{CommentList, PortalState, tree};
use opn_docs_types::{Catalog, Msg, Page, SortOrder};

fn load_fixture() -> Catalog {
    let yaml = include_str!("data/catalog_fixture.yaml");
    serde_yaml::from_str(yaml).expect("load catalog fixture")
}

fn labels(portal: &PortalState, catalog: &Catalog) -> Vec<String> {
    portal
        .navigation
        .visible_rows(catalog)
        .iter()
        .map(|row| format!("{}{}", "-".repeat(row.depth), row.label))
        .collect()
}

#[test]
fn documents_walkthrough() {
    let catalog = load_fixture();
    let mut portal = PortalState::new(&catalog);
    portal.apply(&catalog, &Msg::SelectPage(Page::Documents));
    assert_eq!(portal.navigation.sub_page(), "Getting Started");
    assert_eq!(labels(&portal, &catalog), ["Getting Started", "Core Concepts"]);

    portal.apply(&catalog, &Msg::ToggleExpand("Getting Started".into()));
    portal.apply(&catalog, &Msg::SelectSubPage("Getting Started.Quick Start".into()));
    assert_eq!(
        labels(&portal, &catalog),
        ["Getting Started", "-Introduction", "-Quick Start", "Core Concepts"]
    );
    assert_eq!(portal.navigation.sub_page(), "Getting Started.Quick Start");
    assert_eq!(portal.navigation.expanded().open_paths().collect::<Vec<_>>(), ["Getting Started"]);
}

#[test]
fn depth_cutoff_turns_deep_branches_into_leaves() {
    let catalog = load_fixture();
    let map = catalog.tree(Page::Documents).expect("documents tree");
    let policy = opn_docs_engine::DepthPolicy::for_page(Page::Documents);
    let all_open = tree::branch_paths(map, policy);
    assert!(all_open.contains(&"Core Concepts.Webhooks.Events".to_string()));
    assert!(!all_open.contains(&"Core Concepts.Webhooks.Events.Deep".to_string()));

    let mut portal = PortalState::new(&catalog);
    for path in ["Core Concepts", "Core Concepts.Webhooks", "Core Concepts.Webhooks.Events"] {
        portal.apply(&catalog, &Msg::ToggleExpand(path.into()));
    }
    let rows = portal.navigation.visible_rows(&catalog);
    let deep = rows.iter().find(|row| row.path == "Core Concepts.Webhooks.Events.Deep").expect("deep row");
    assert_eq!(deep.depth, 3);
    assert!(deep.is_leaf);
    assert!(deep.topics().is_empty());
    assert!(!rows.iter().any(|row| row.label == "Bottom"));

    // Opening the cut-off row changes nothing visible.
    portal.apply(&catalog, &Msg::ToggleExpand("Core Concepts.Webhooks.Events.Deep".into()));
    assert_eq!(portal.navigation.visible_rows(&catalog).len(), rows.len());
}

#[test]
fn changelog_months_are_leaves() {
    let catalog = load_fixture();
    let mut portal = PortalState::new(&catalog);
    portal.apply(&catalog, &Msg::SelectPage(Page::Changelog));
    portal.apply(&catalog, &Msg::ActivateRow {
        path: "2024".into(),
        is_leaf: false,
    });
    assert_eq!(labels(&portal, &catalog), ["2024", "-March", "-February", "2023"]);
    assert!(portal.navigation.visible_rows(&catalog)[1].is_leaf);
}

#[test]
fn pages_without_categories_land_on_an_empty_sub_page() {
    let catalog = load_fixture();
    let mut portal = PortalState::new(&catalog);
    for page in [Page::Faqs, Page::Articles, Page::ApiPlayground] {
        portal.apply(&catalog, &Msg::ToggleExpand("Getting Started".into()));
        portal.apply(&catalog, &Msg::SelectPage(page));
        assert_eq!(portal.navigation.sub_page(), "");
        assert!(portal.navigation.expanded().is_empty());
        assert!(portal.navigation.visible_rows(&catalog).is_empty());
    }
}

#[test]
fn comment_order_follows_timestamps() {
    let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
    let mut comments = CommentList::new();
    comments.add_comment("second", later);
    comments.add_comment("first", earlier);

    let texts = |order| comments.sorted_view(order).iter().map(|c| c.text.clone()).collect::<Vec<_>>();
    assert_eq!(texts(SortOrder::Descending), ["second", "first"]);
    assert_eq!(texts(SortOrder::Ascending), ["first", "second"]);
}
