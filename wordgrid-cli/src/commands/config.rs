//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init` for inspecting
//! and creating the configuration file.

use clap::Subcommand;
use wordgrid::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective settings (file values over defaults)
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init => run_init(),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Show the effective configuration.
fn run_show() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load()?;

    println!("Configuration Settings");
    println!("======================");
    if path.exists() {
        println!("(from {})", path.display());
    } else {
        println!("(defaults; {} does not exist)", path.display());
    }
    println!();

    println!("[region]");
    println!("  min_lat = {}", config.region.min_lat);
    println!("  max_lat = {}", config.region.max_lat);
    println!("  min_lng = {}", config.region.min_lng);
    println!("  max_lng = {}", config.region.max_lng);
    println!("  cell_size_meters = {}", config.region.cell_size_meters);
    println!();

    println!("[vocabulary]");
    match &config.vocabulary.path {
        Some(path) => println!("  path = {}", path.display()),
        None => println!("  path = (not set)"),
    }
    println!("  generated_size = {}", config.vocabulary.generated_size);
    println!();

    println!("[logging]");
    println!("  file = {}", config.logging.file.display());

    Ok(())
}

/// Create the default configuration file.
fn run_init() -> Result<(), CliError> {
    let path = config_file_path();
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    let path = ConfigFile::ensure_exists()?;
    println!("Created {}", path.display());
    Ok(())
}
