use clap::{Parser, Subcommand};
use kapack::core::KapError;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "kap")]
#[command(about = "A simple package manager for KakaoTalk bot modules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new KaPack project
    Init,
    /// Install a package from a repository URL
    #[command(alias = "i")]
    Install {
        /// Repository URL to install
        url: String,
    },
    /// Remove a package
    #[command(alias = "ui")]
    Uninstall {
        /// Repository URL to remove
        url: String,
    },
    /// Search for a package
    Search {
        /// Search query
        query: String,
    },
    /// Update a package
    Update {
        /// Repository URL to update
        url: String,
    },
}

fn main() -> Result<(), KapError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => cli::init::run(),
        Commands::Install { url } => cli::install::run(url),
        Commands::Uninstall { url } => cli::uninstall::run(url),
        Commands::Search { query } => cli::search::run(query),
        Commands::Update { url } => cli::update::run(url),
    };

    // Display error with helpful suggestions
    if let Err(ref e) = result {
        eprintln!("\n{}", kapack::core::error_help::format_error_with_help(e));
    }

    result
}
