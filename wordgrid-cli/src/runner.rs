//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization, and converter
//! creation to reduce duplication across command handlers.

use std::path::{Path, PathBuf};

use tracing::info;
use wordgrid::config::ConfigFile;
use wordgrid::converter::CoordinateWordConverter;
use wordgrid::logging::{default_log_file, init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// Logs always go to the configured file. With `verbose`, they are also
    /// written to stderr at debug level; stdout stays reserved for results.
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        let logging_guard = init_logging(&log_dir, &log_file, verbose, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("wordgrid v{}", wordgrid::VERSION);
        info!("wordgrid CLI: {} command", command);
    }

    /// Build the converter described by the loaded configuration.
    pub fn create_converter(&self) -> Result<CoordinateWordConverter, CliError> {
        CoordinateWordConverter::from_config(&self.config).map_err(|e| {
            tracing::error!(error = %e, "Failed to build converter");
            CliError::Setup(e)
        })
    }
}
