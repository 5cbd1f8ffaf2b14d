//! Collabgraph CLI — explore a collaboration network from the terminal
//!
//! Loads a snapshot document and runs one engine query against it:
//! an egonet, a strongest-evidence route, or a name search.

use anyhow::Context;
use clap::{Parser, Subcommand};
use collabgraph::algo::{EvidenceMode, DEFAULT_HOP_PENALTY};
use collabgraph::graph::{NodeId, Snapshot, Subgraph};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collabgraph", version, about = "Artist collaboration network explorer")]
struct Cli {
    /// Snapshot document to load (JSON with "nodes" and "edges")
    #[arg(long, global = true, default_value = "graph.json", env = "COLLABGRAPH_FILE")]
    graph: PathBuf,

    /// Evidence mode: instrument, credit, or both
    #[arg(long, global = true, default_value = "both")]
    mode: EvidenceMode,

    /// Minimum display strength for an edge to count
    #[arg(long, global = true, default_value_t = 1.0)]
    min_weight: f64,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the local neighborhood of one person
    Egonet {
        /// Focus node id
        focus: String,
    },
    /// Solve the strongest-evidence route between two people
    Path {
        /// Start node id
        start: String,

        /// End node id
        end: String,

        /// Additive cost per traversed edge
        #[arg(long, default_value_t = DEFAULT_HOP_PENALTY)]
        hop_penalty: f64,
    },
    /// Search node names
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let snapshot = collabgraph::load_snapshot(&cli.graph)
        .with_context(|| format!("loading snapshot from {}", cli.graph.display()))?;

    match cli.command {
        Commands::Egonet { focus } => {
            let focus = NodeId::new(focus);
            let view = snapshot.compute_egonet(&focus, cli.mode, cli.min_weight);
            render_subgraph(&view, cli.mode, &cli.format)
        }
        Commands::Path { start, end, hop_penalty } => {
            let start = NodeId::new(start);
            let end = NodeId::new(end);
            let route =
                snapshot.compute_shortest_path(&start, &end, cli.mode, cli.min_weight, hop_penalty);
            if route.is_empty() {
                println!("No route between {} and {} under the current filters", start, end);
                return Ok(());
            }
            let view = snapshot.build_path_subgraph(&route, cli.mode, cli.min_weight);
            render_route(&snapshot, &route, &cli.format)?;
            render_subgraph(&view, cli.mode, &cli.format)
        }
        Commands::Search { query, limit } => render_search(&snapshot, &query, limit, &cli.format),
    }
}

fn render_route(snapshot: &Snapshot, route: &[NodeId], format: &OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(route)?);
        return Ok(());
    }

    let names: Vec<String> = route
        .iter()
        .map(|id| {
            snapshot
                .get_node(id)
                .map(|n| n.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    println!("Route ({} hops): {}", route.len() - 1, names.join(" -> "));
    Ok(())
}

fn render_subgraph(view: &Subgraph, mode: EvidenceMode, format: &OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    let mut nodes = Table::new();
    nodes.set_content_arrangement(ContentArrangement::Dynamic);
    nodes.set_header(vec!["id", "name", "instruments"]);
    for node in &view.nodes {
        nodes.add_row(vec![
            node.id.as_str(),
            node.name.as_str(),
            node.instruments.as_deref().unwrap_or(""),
        ]);
    }
    println!("{nodes}");

    let mut edges = Table::new();
    edges.set_content_arrangement(ContentArrangement::Dynamic);
    edges.set_header(vec!["id", "source", "target", "instrument", "credit", "strength"]);
    for edge in &view.edges {
        edges.add_row(vec![
            edge.id.as_str().to_string(),
            edge.source.to_string(),
            edge.target.to_string(),
            edge.instrument_weight.to_string(),
            edge.credit_weight.to_string(),
            collabgraph::algo::display_strength(edge, mode).to_string(),
        ]);
    }
    println!("{edges}");
    Ok(())
}

fn render_search(
    snapshot: &Snapshot,
    query: &str,
    limit: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let hits = snapshot.search_names(query, limit);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "name", "instruments"]);
    for node in hits {
        table.add_row(vec![
            node.id.as_str(),
            node.name.as_str(),
            node.instruments.as_deref().unwrap_or(""),
        ]);
    }
    println!("{table}");
    Ok(())
}
