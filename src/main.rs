//! The routemap binary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use routemap::cli::map_cmd;

#[derive(Parser)]
#[command(name = "routemap", version, about = "Generate a sitemap from your application's route registry")]
struct Cli {
    /// Suppress all non-error output.
    #[arg(long, global = true)]
    quiet: bool,

    /// Show per-route skip detail.
    #[arg(long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON instead of the styled summary.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the route registry and generate sitemap.xml.
    Map {
        /// Route manifest exported by the host application.
        #[arg(long, default_value = "routes.json")]
        manifest: PathBuf,

        /// Optional TOML configuration file.
        #[arg(long, default_value = "routemap.toml")]
        config: PathBuf,

        /// Directory of per-entity JSON record files.
        #[arg(long, default_value = "data/entities")]
        entities: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Output-mode flags are carried as env vars so every layer can consult
    // them without plumbing.
    if cli.quiet {
        std::env::set_var("ROUTEMAP_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("ROUTEMAP_VERBOSE", "1");
    }
    if cli.json {
        std::env::set_var("ROUTEMAP_JSON", "1");
    }
    if cli.no_color {
        std::env::set_var("ROUTEMAP_NO_COLOR", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Map {
            manifest,
            config,
            entities,
        } => map_cmd::run(&manifest, &config, &entities),
    }
}
