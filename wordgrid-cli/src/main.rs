//! wordgrid CLI - Command-line interface
//!
//! This binary provides a command-line interface to the wordgrid library:
//! encode coordinates as three-word addresses, decode addresses back to
//! coordinates, and answer JSON requests in bulk.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::encode::EncodeArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(version)]
#[command(about = "Three-word addresses for every 3 m square of a region", long_about = None)]
struct Cli {
    /// Log to stderr at debug level (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a coordinate to its three-word address
    Encode(EncodeArgs),

    /// Convert a three-word address to the center of its cell
    Decode(DecodeArgs),

    /// Answer JSON requests read from stdin, one per line
    ///
    /// Each line is either {"latitude": .., "longitude": ..} or
    /// {"words": [.., .., ..]}. One JSON response is written per line.
    Batch,

    /// Show the configured region, grid and vocabulary
    Info,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbose = cli.verbose;
    let result = match cli.command {
        Commands::Encode(args) => with_runner(verbose, |r| commands::encode::run(r, args)),
        Commands::Decode(args) => with_runner(verbose, |r| commands::decode::run(r, args)),
        Commands::Batch => with_runner(verbose, commands::batch::run),
        Commands::Info => with_runner(verbose, commands::info::run),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

/// Run a command that needs configuration, logging and a converter.
fn with_runner<F>(verbose: bool, command: F) -> Result<(), CliError>
where
    F: FnOnce(&CliRunner) -> Result<(), CliError>,
{
    let runner = CliRunner::new(verbose)?;
    command(&runner)
}
