//! Toolscout CLI - Database migrations and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! toolscout migrate
//!
//! # Seed the catalog into the key-value store
//! toolscout seed
//!
//! # Overwrite a previously seeded catalog
//! toolscout seed --force
//!
//! # Embed the catalog into the vector index
//! toolscout index
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Write the bundled tool catalog to the key-value store
//! - `index` - Embed the catalog into pgvector for similarity search

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "toolscout")]
#[command(author, version, about = "Toolscout CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the tool catalog into the key-value store
    Seed {
        /// Overwrite an existing catalog
        #[arg(short, long)]
        force: bool,
    },
    /// Embed the catalog into the vector index
    Index,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::Index => commands::index::run().await?,
    }
    Ok(())
}
