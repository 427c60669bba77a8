//! renderkitdoc CLI - HTML documentation for render-kit configuration trees.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod watcher;

use config::GenerateArgs;

#[derive(Parser)]
#[command(name = "renderkitdoc")]
#[command(about = "Generate HTML documentation for render-kit configuration trees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to renderkitdoc.toml config file
    #[arg(short, long, default_value = "renderkitdoc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default renderkitdoc.toml and sample configuration tree
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the documentation once
    Generate(GenerateArgs),

    /// Regenerate the documentation whenever the configuration tree changes
    Watch(GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&std::env::current_dir()?, yes)?;
        }
        Commands::Generate(args) => {
            commands::generate::run(&cli.config, args)?;
        }
        Commands::Watch(args) => {
            commands::watch::run(&cli.config, args).await?;
        }
    }

    Ok(())
}
