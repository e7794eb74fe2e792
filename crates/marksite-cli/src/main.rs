//! marksite - static site generator.
//!
//! Provides commands for:
//! - `build`: render the content tree into the output directory
//! - `render`: print the HTML for a single markdown file

mod commands;
mod site;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BuildArgs, RenderArgs};

#[derive(Parser)]
#[command(name = "marksite", version, about)]
struct Cli {
    /// Log debug output from every stage.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the whole site.
    Build(BuildArgs),
    /// Render one markdown file to stdout.
    Render(RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    }
}
