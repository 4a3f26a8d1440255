use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use sv_app::{
    AppError, AppResult, Document, Viewer, ViewerSettings, format_bytes, json_report, load_file,
    load_settings, render_rows, search, site_pages, structure_report,
};
use sv_core::TreePath;
use sv_graph::dismantle;
use sv_resolve::{Resolved, resolve};
use sv_tree::property::build_rows;
use tracing::debug;

#[derive(Parser)]
#[command(name = "structview")]
#[command(
    about = "structview - Outline viewer for large component-tree documents",
    long_about = None
)]
struct Cli {
    /// Viewer settings YAML file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full structure report
    Outline {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
    },
    /// Print the whole loaded document as pretty JSON
    Json {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
    },
    /// Render the outline as it would appear after some interactions
    Show {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
        /// Expand the row at this path (e.g. root/0/2); repeatable
        #[arg(long)]
        expand: Vec<String>,
        /// Expand everything, up to the configured budget
        #[arg(long)]
        all: bool,
        /// Reveal rows whose label or type contains this text
        #[arg(long)]
        search: Option<String>,
        /// Open the structure panel of the row at this path; repeatable
        #[arg(long)]
        structure: Vec<String>,
    },
    /// Resolve one query value against a document
    Resolve {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
        /// Query field name (e.g. namingQuery)
        field: String,
        /// Query value (e.g. "#comp-1")
        value: String,
    },
    /// Show one node and its resolved structure fields
    Inspect {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
        /// Outline path of the node (e.g. root/1/0)
        path: String,
    },
    /// Summarize a document
    Stats {
        /// Path to the document (JSON or YAML)
        file: PathBuf,
    },
    /// List the pages of a site model dump
    Pages {
        /// Path to the site models JSON
        file: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => ViewerSettings::default(),
    };

    match cli.command {
        Commands::Outline { file } => cmd_outline(&file),
        Commands::Json { file } => cmd_json(&file),
        Commands::Show {
            file,
            expand,
            all,
            search,
            structure,
        } => cmd_show(
            &file,
            &settings,
            &expand,
            all,
            search.as_deref(),
            &structure,
        ),
        Commands::Resolve { file, field, value } => cmd_resolve(&file, &field, value),
        Commands::Inspect { file, path } => cmd_inspect(&file, &path),
        Commands::Stats { file } => cmd_stats(&file),
        Commands::Pages { file } => cmd_pages(&file),
    }
}

fn open_document(file: &Path) -> AppResult<Document> {
    let loaded = load_file(file)?;
    Document::from_value(loaded.value)
}

fn cmd_outline(file: &Path) -> AppResult<()> {
    let document = open_document(file)?;
    print!("{}", structure_report(document.graph()));
    Ok(())
}

fn cmd_json(file: &Path) -> AppResult<()> {
    let loaded = load_file(file)?;
    print!("{}", json_report(&loaded.value)?);
    dismantle(loaded.value);
    Ok(())
}

/// Empty the outline's event queue after one step; nothing here renders
/// incrementally.
fn settle(viewer: &mut Viewer, step: &str) {
    let events = viewer.drain_events();
    debug!(step, events = events.len(), "outline updated");
}

fn cmd_show(
    file: &Path,
    settings: &ViewerSettings,
    expand: &[String],
    all: bool,
    query: Option<&str>,
    structure: &[String],
) -> AppResult<()> {
    let loaded = load_file(file)?;
    let mut viewer = Viewer::new(settings.outline_options());
    viewer.load(loaded.value)?;
    settle(&mut viewer, "load");

    if all {
        let attached = viewer.expand_all(settings.expand_all_budget)?;
        settle(&mut viewer, "expand all");
        println!("Expanded {} rows", attached);
    }
    for path in expand {
        let path: TreePath = path.parse()?;
        let id = viewer.reveal(&path)?;
        viewer.expand(id)?;
        settle(&mut viewer, "expand");
    }
    if let Some(query) = query {
        let outcome = search(&mut viewer, query, settings.search_reveal_limit)?;
        settle(&mut viewer, "search");
        println!(
            "{} matches for \"{}\"{}",
            outcome.matches.len(),
            query.trim(),
            if outcome.is_truncated() {
                format!(" (showing first {})", outcome.revealed.len())
            } else {
                String::new()
            }
        );
    }
    for path in structure {
        let path: TreePath = path.parse()?;
        let id = viewer.reveal(&path)?;
        viewer.toggle_structure(id)?;
        settle(&mut viewer, "structure");
    }

    for line in render_rows(viewer.outline(), settings) {
        println!("{}", line);
    }
    println!(
        "Loaded: {} ({})",
        loaded.name,
        format_bytes(loaded.bytes as u64)
    );
    Ok(())
}

fn cmd_resolve(file: &Path, field: &str, value: String) -> AppResult<()> {
    let document = open_document(file)?;
    let query = Value::String(value);
    match resolve(field, &query, document.scope().as_ref()) {
        Resolved::Found { value, map, pass } => {
            println!("✓ Found in {} ({:?} pass)", map, pass);
            println!("{}", pretty(value)?);
        }
        Resolved::Inline(value) => {
            println!("Inline value");
            println!("{}", pretty(value)?);
        }
        Resolved::Unresolved { original, query_id } => {
            println!("✗ Query not found in data map: {} (id {})", original, query_id);
        }
    }
    Ok(())
}

fn cmd_inspect(file: &Path, path: &str) -> AppResult<()> {
    let document = open_document(file)?;
    let path: TreePath = path.parse()?;
    let graph = document.graph();
    let node_id = graph.node_at_path(&path).ok_or_else(|| {
        AppError::Outline(sv_core::SvError::PathNotFound {
            path: path.to_string(),
        })
    })?;
    let node = graph.try_node(node_id)?;
    let label = node.label();

    println!("{} ({})", label.id, label.kind);
    println!("  Path: {}", path);
    println!("  Children: {}", node.child_count());
    println!("  Descendants: {}", graph.descendant_count(node_id));
    if let Some(field) = node.source().field() {
        println!("  Children field: {}", field);
    }
    println!("  Structure:");
    let scope = document.scope();
    for row in build_rows(node.fields(), scope.as_ref()) {
        match row.tooltip() {
            Some(tip) => println!("    {}: {}  ({})", row.key, row.summary(), tip),
            None => println!("    {}: {}", row.key, row.summary()),
        }
    }
    Ok(())
}

fn cmd_stats(file: &Path) -> AppResult<()> {
    let loaded = load_file(file)?;
    let document = Document::from_value(loaded.value)?;
    let graph = document.graph();
    let root = graph.root();

    println!("Document: {}", loaded.name);
    println!("  Size: {}", format_bytes(loaded.bytes as u64));
    println!("  Wrapped in structure: {}", document.is_wrapped());
    println!("  Nodes: {}", graph.node_count());
    println!("  Max depth: {}", graph.max_depth());
    println!("  Root: {}", graph.label(root).id);
    println!("  Root children: {}", graph.children(root).len());
    Ok(())
}

fn cmd_pages(file: &Path) -> AppResult<()> {
    let loaded = load_file(file)?;
    let pages = site_pages(&loaded.value);
    dismantle(loaded.value);

    if pages.is_empty() {
        println!("No pages found.");
    } else {
        println!("Loaded {} pages", pages.len());
        for page in pages {
            match page.json_url {
                Some(ref url) => println!("  {} - {}", page.caption(), url),
                None => println!("  {}", page.caption()),
            }
        }
    }
    Ok(())
}

fn pretty(value: &Value) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
