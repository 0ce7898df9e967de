use clap::{Parser, Subcommand};
use mf_app::{AppResult, network_service, query};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "MetroFlow CLI - transit network capacity planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Show counts and warnings for a network
    Summary {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Maximum passengers between pairs of buildings
    MaxFlow {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Building ids as start/end pairs: START END [START END ...]
        #[arg(required = true, num_args = 2..)]
        buildings: Vec<u32>,
        /// Answer each pair on a fresh copy instead of in sequence
        #[arg(long)]
        isolated: bool,
    },
    /// Select the spanning set of tracks with the best goodness
    BestMetro {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Search registered passengers by name prefix
    Search {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Case-insensitive name prefix
        prefix: String,
    },
    /// Number of ticket checkers to hire for the listed shifts
    Checkers {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Summary { network_path } => cmd_summary(&network_path),
        Commands::MaxFlow {
            network_path,
            buildings,
            isolated,
        } => cmd_max_flow(&network_path, &buildings, isolated),
        Commands::BestMetro { network_path } => cmd_best_metro(&network_path),
        Commands::Search {
            network_path,
            prefix,
        } => cmd_search(&network_path, &prefix),
        Commands::Checkers { network_path } => cmd_checkers(&network_path),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let file = network_service::load_network(network_path)?;
    let summary = network_service::summarize(&file)?;
    for warning in &summary.warnings {
        println!("  warning: {warning}");
    }
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_summary(network_path: &Path) -> AppResult<()> {
    let file = network_service::load_network(network_path)?;
    let summary = network_service::summarize(&file)?;

    println!("Network: {}", summary.name);
    println!("  Buildings:  {}", summary.building_count);
    println!(
        "  Tracks:     {} ({} ignored)",
        summary.track_count, summary.dropped_tracks
    );
    println!("  Passengers: {}", summary.passenger_count);
    println!("  Shifts:     {}", summary.shift_count);
    if !summary.warnings.is_empty() {
        println!("Warnings:");
        for warning in &summary.warnings {
            println!("  {warning}");
        }
    }
    Ok(())
}

fn cmd_max_flow(network_path: &Path, buildings: &[u32], isolated: bool) -> AppResult<()> {
    let file = network_service::load_network(network_path)?;
    let queries = query::pair_queries(buildings)?;
    let answers = if isolated {
        let network = network_service::build_network(&file)?;
        query::run_isolated(&network, &queries)
    } else {
        let mut network = network_service::build_network(&file)?;
        query::run_sequential(&mut network, &queries)
    };
    info!(queries = answers.len(), isolated, "answered max-flow queries");

    for answer in answers {
        println!(
            "{} -> {}: {} passengers",
            answer.start, answer.end, answer.passengers
        );
    }
    Ok(())
}

fn cmd_best_metro(network_path: &Path) -> AppResult<()> {
    let file = network_service::load_network(network_path)?;
    let tracks = query::best_metro(&file)?;

    if tracks.is_empty() {
        println!("No tracks selected");
    } else {
        println!("Selected tracks:");
        for track in tracks {
            println!("  {track}");
        }
    }
    Ok(())
}

fn cmd_search(network_path: &Path, prefix: &str) -> AppResult<()> {
    let file = network_service::load_network(network_path)?;
    let names = query::search_passengers(&file, prefix);

    if names.is_empty() {
        println!("No passengers match '{prefix}'");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn cmd_checkers(network_path: &Path) -> AppResult<()> {
    let file = network_service::load_network(network_path)?;
    println!("Ticket checkers needed: {}", query::ticket_checkers(&file));
    Ok(())
}
