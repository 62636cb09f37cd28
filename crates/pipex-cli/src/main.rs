mod cmd;
mod output;
mod source;
mod tui;

use clap::{Parser, Subcommand};
use cmd::catalog::CatalogSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pipex",
    about = "Interactive reference for a generic CI/CD pipeline — stages, environments, metrics, and tooling",
    version,
    propagate_version = true
)]
struct Cli {
    /// Stage catalog file (default: the built-in seven-stage pipeline)
    #[arg(long, global = true, env = "PIPEX_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the pipeline stages
    Stages,

    /// Show the pipeline with one stage expanded
    Show { id: u32 },

    /// Show the environment progression table
    Environments,

    /// Show the DORA metrics table
    Metrics,

    /// Show the toolchain catalog
    Tools,

    /// Validate and export stage catalog files
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Browse the pipeline in an interactive terminal explorer
    Explore,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        // The explorer owns the terminal; keep logging out of it
        Commands::Explore => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let catalog_path = cli.catalog.as_deref();

    let result = match cli.command {
        Commands::Stages => cmd::stages::run(catalog_path, cli.json),
        Commands::Show { id } => cmd::show::run(catalog_path, id, cli.json),
        Commands::Environments => cmd::environments::run(cli.json),
        Commands::Metrics => cmd::metrics::run(cli.json),
        Commands::Tools => cmd::tools::run(cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(subcommand, cli.json),
        Commands::Explore => cmd::explore::run(catalog_path),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
