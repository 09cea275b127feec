//! Locating, reading and writing `config.ini`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Name of the per-user directory under `$HOME`.
const CONFIG_DIR_NAME: &str = ".wordgrid";
const CONFIG_FILE_NAME: &str = "config.ini";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A key is present but its value cannot be used.
    #[error("Invalid configuration: [{section}] {key} = '{value}': {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigFile {
    /// Settings from `~/.wordgrid/config.ini`, or the defaults when the file
    /// has not been created.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Settings from `path`. A missing file gives the defaults; keys the file
    /// leaves out keep their default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        super::parser::parse_ini(&ini)
    }

    /// Writes the settings as a commented INI file, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        let write_failed = |source: io::Error| ConfigFileError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_failed)?;
        }
        fs::write(path, super::writer::to_config_string(self)).map_err(write_failed)
    }

    /// Writes a default `~/.wordgrid/config.ini` unless one is already there.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "Wrote default config file");
        }
        Ok(path)
    }
}

/// `~/.wordgrid`, relative to the working directory when there is no home.
pub fn config_directory() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(CONFIG_DIR_NAME)
}

/// `~/.wordgrid/config.ini`
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
