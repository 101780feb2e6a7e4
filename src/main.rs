use anyhow::Result;
use clap::Parser;

mod config;
mod data;
mod graph;
mod cluster;
mod storage;
mod viz;

use config::Config;
use graph::expand::DegreeLimit;
use graph::ContactGraph;

#[derive(Parser, Debug)]
#[clap(
    name = "relationship-graph-analyzer",
    about = "Pathfinding and network analytics over personal relationship data"
)]
struct Cli {
    /// Path to the JSON edge-list file
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "network_results")]
    output_dir: String,

    /// Find connection paths starting from this person
    #[clap(long, requires = "path_to")]
    path_from: Option<String>,

    /// Target person for the connection search
    #[clap(long, requires = "path_from")]
    path_to: Option<String>,

    /// Build an ego network around this person
    #[clap(long)]
    focus: Option<String>,

    /// Degree limit for the ego network (1-6 or "all")
    #[clap(long, default_value = "all")]
    max_degrees: DegreeLimit,

    /// Number of top-connected people to report
    #[clap(long, default_value = "5")]
    central_limit: usize,

    /// Connection count at or below which a person is reported as isolated
    #[clap(long, default_value = "1")]
    isolation_threshold: usize,

    /// Cap on enumerated simple paths per connection query
    #[clap(long, default_value = "10000")]
    enumeration_cap: usize,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(
        args.central_limit,
        args.isolation_threshold,
        args.enumeration_cap,
    );

    log::info!("Starting relationship network analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // 1. Load data
    let edges = data::edges::load_edges(&args.input)?;

    // 2. Build the adjacency view
    let contact_graph = ContactGraph::from_edges(&edges);

    log::info!(
        "Built graph with {} people and {} relationships",
        contact_graph.node_count(),
        contact_graph.edge_count()
    );

    // 3. Connection path query
    if let (Some(from), Some(to)) = (&args.path_from, &args.path_to) {
        run_path_query(&contact_graph, from, to, &config, &args.output_dir)?;
    }

    // 4. Ego network
    if let Some(focus) = &args.focus {
        let ego = graph::expand::expand_from_focus(&contact_graph, focus, args.max_degrees);
        log::info!(
            "Ego network for {}: {} reachable people",
            focus,
            ego.total_connections
        );
        storage::save_ego_network(&ego, &args.output_dir)?;
    }

    // 5. Clusters and rankings
    let clusters = cluster::detection::find_clusters(&contact_graph);
    let central = cluster::metrics::central_nodes(&contact_graph, config.central_limit);
    let isolated = cluster::metrics::isolated_nodes(&contact_graph, config.isolation_threshold);

    // 6. Save results
    storage::save_results(&contact_graph, &clusters, &central, &isolated, &args.output_dir)?;

    // 7. Generate visualizations if requested
    if !args.skip_viz {
        viz::generate_visualizations(&clusters, &contact_graph, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}

/// Run both pathfinders and persist the outcome.
///
/// A query with no path always ships the shared-contact suggestions so
/// the report degrades into an introduction hint instead of a dead end.
fn run_path_query(
    contact_graph: &ContactGraph,
    from: &str,
    to: &str,
    config: &Config,
    output_dir: &str,
) -> Result<()> {
    let shortest = graph::paths::find_shortest_path(contact_graph, from, to);
    let all_paths =
        graph::paths::find_all_paths_with_cap(contact_graph, from, to, config.enumeration_cap);

    let suggestions = if all_paths.found {
        Vec::new()
    } else {
        graph::paths::suggest_intermediaries(contact_graph, from, to)
    };

    match &shortest {
        Some(found) => log::info!(
            "Shortest connection from {} to {}: {} degrees",
            from,
            to,
            found.degrees
        ),
        None => log::info!(
            "No connection from {} to {} within {} degrees; {} shared contacts to suggest",
            from,
            to,
            graph::paths::MAX_SEPARATION,
            suggestions.len()
        ),
    }

    storage::save_connection_path(shortest.as_ref(), &all_paths, &suggestions, output_dir)?;

    Ok(())
}
