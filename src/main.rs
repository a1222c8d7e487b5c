//! Classgraph CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "classgraph")]
#[command(about = "Query the class inheritance hierarchy of a workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ./classgraph.toml, optional)
    #[arg(short, long, default_value = classgraph_loader::CONFIG_FILE)]
    config: PathBuf,

    /// Extra workspace descriptor files, on top of the config
    #[arg(short = 'w', long = "workspace")]
    workspace: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Direct supertypes of a class
    Parents { class: String },
    /// Every known subtype of a class
    Descendants { class: String },
    /// Edges of the class's vertex, supertype first
    Edges { class: String },
    /// Every class linked to a class through inheritance
    Family { class: String },
    /// Load everything and report unresolved supertypes
    Check,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "classgraph={},classgraph_core={},classgraph_loader={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Classgraph v{}", env!("CARGO_PKG_VERSION"));

    let output = commands::Output { json: cli.json };
    let load = || commands::load(&cli.config, &cli.workspace);
    match cli.command {
        Commands::Parents { class } => commands::parents(&*load()?, &class, output),
        Commands::Descendants { class } => commands::descendants(&*load()?, &class, output),
        Commands::Edges { class } => commands::edges(&*load()?, &class, output),
        Commands::Family { class } => commands::family(&*load()?, &class, output),
        Commands::Check => commands::check(&*load()?, output),
        Commands::Version => {
            println!("Classgraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
