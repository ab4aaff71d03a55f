use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opn_docs_engine::{DepthPolicy, ExpandState, TreeRow, tree};
use opn_docs_types::{Catalog, Page};
use opn_docs_tui::TuiOptions;
use opn_docs_util::{UserPreferences, app_config_dir, embedded_catalog, expand_tilde, load_catalog, path_processing::path_from_env};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the TUI log file location.
const LOG_PATH_ENV: &str = "OPN_DOCS_LOG_PATH";
const LOG_FILE_NAME: &str = "opn-docs.log";

/// Browse the Opn Docs portal in the terminal.
#[derive(Parser, Debug)]
#[command(name = "opn-docs", version, about)]
struct Cli {
    /// Page to open first (e.g. documents, faqs, changelog)
    #[arg(long, global = true)]
    page: Option<Page>,

    /// YAML or JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Theme name or alias (opn, dracula, nord, ...)
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List pages with their depth limit and top-level categories
    Pages,
    /// Print the sidebar rows of a page
    Tree {
        /// Open a branch before rendering (dot-joined path, repeatable)
        #[arg(long = "expand", value_name = "PATH")]
        expand: Vec<String>,

        /// Open every branch
        #[arg(long)]
        expand_all: bool,

        /// Emit JSON instead of indented text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());
    let catalog = read_catalog(cli.catalog.as_ref())?;

    match cli.command {
        None => {
            let preferences = UserPreferences::new().unwrap_or_else(|error| {
                warn!("Failed to open preferences; changes will not be saved: {}", error);
                UserPreferences::ephemeral()
            });
            let options = TuiOptions {
                initial_page: cli.page,
                theme: cli.theme,
            };
            opn_docs_tui::run(catalog, Arc::new(preferences), options).await
        }
        Some(Command::Pages) => {
            print!("{}", pages_text(&catalog));
            Ok(())
        }
        Some(Command::Tree { expand, expand_all, json }) => {
            let page = cli.page.unwrap_or_default();
            let rows = tree_rows(&catalog, page, &expand, expand_all);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows_json(page, &rows))?);
            } else {
                print!("{}", rows_text(&rows));
            }
            Ok(())
        }
    }
}

/// Sends logs to a file while the TUI owns the terminal, to stderr otherwise.
fn init_tracing(for_tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !for_tui {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
        return;
    }

    let path = path_from_env(LOG_PATH_ENV).unwrap_or_else(|| app_config_dir().join(LOG_FILE_NAME));
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    // Without a log file the TUI still runs; it just stays silent.
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    }
}

fn read_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let path = expand_tilde(&path.to_string_lossy());
            let catalog = load_catalog(&path).with_context(|| format!("failed to load catalog from {}", path.display()))?;
            info!(path = %path.display(), "using custom catalog");
            Ok(catalog)
        }
        None => embedded_catalog().context("built-in catalog is invalid"),
    }
}

fn pages_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    for page in Page::ALL {
        let categories = catalog
            .tree(page)
            .map(|tree| tree.keys().map(String::as_str).collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        let depth = if page.has_sidebar() {
            format!("depth {}", page.max_depth())
        } else {
            "no sidebar".to_string()
        };
        out.push_str(&format!("{:<16}{:<12}{}\n", page.label(), depth, categories));
    }
    out
}

fn tree_rows<'c>(catalog: &'c Catalog, page: Page, expand: &[String], expand_all: bool) -> Vec<TreeRow<'c>> {
    let Some(map) = catalog.tree(page).filter(|_| page.has_sidebar()) else {
        return Vec::new();
    };
    let policy = DepthPolicy::for_page(page);
    let mut state = ExpandState::new();
    let open: Vec<String> = if expand_all { tree::branch_paths(map, policy) } else { expand.to_vec() };
    for path in open.iter().filter(|path| tree::find_node(map, path).is_none()) {
        warn!(page = %page, path = %path, "no such category; ignoring");
    }
    for path in &open {
        state.set(path, true);
    }
    tree::visible_rows(map, policy, &state)
}

fn rows_text(rows: &[TreeRow<'_>]) -> String {
    let mut out = String::new();
    for row in rows {
        let icon = match (row.is_leaf, row.is_expanded) {
            (true, _) => " ",
            (false, true) => "▾",
            (false, false) => "▸",
        };
        out.push_str(&format!("{}{} {}\n", "  ".repeat(row.depth), icon, row.label));
    }
    out
}

fn rows_json(page: Page, rows: &[TreeRow<'_>]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            json!({
                "path": row.path,
                "label": row.label,
                "depth": row.depth,
                "is_leaf": row.is_leaf,
                "is_expanded": row.is_expanded,
                "topics": row.topics(),
            })
        })
        .collect();
    json!({ "page": page.label(), "rows": rows })
}
