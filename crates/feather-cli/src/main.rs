//! Feather CLI - offline tools for the Feather four-band equalizer.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feather")]
#[command(author, version, about = "Feather four-band EQ tools", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a WAV file through the equalizer
    Render(commands::render::RenderArgs),

    /// List the plugin parameters
    Params(commands::params::ParamsArgs),

    /// Print the magnitude response of a band configuration
    Response(commands::response::ResponseArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Params(args) => commands::params::run(&args),
        Commands::Response(args) => commands::response::run(&args),
    }
}
