//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`encode`] - Coordinate to three-word address
//! - [`decode`] - Three-word address to cell center
//! - [`batch`] - JSON requests from stdin
//! - [`info`] - Region, grid and vocabulary summary
//! - [`config`] - Configuration management (path, show, init)

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod info;

use serde::Serialize;

use crate::error::CliError;

/// Print a value as one line of JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let line = serde_json::to_string(value).map_err(std::io::Error::other)?;
    println!("{}", line);
    Ok(())
}
