//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::region::{Region, RegionError};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Region bounds and grid resolution
    pub region: RegionSettings,
    /// Word list settings
    pub vocabulary: VocabularySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Region configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSettings {
    /// Southern edge (inclusive), degrees
    pub min_lat: f64,
    /// Northern edge (exclusive), degrees
    pub max_lat: f64,
    /// Western edge (inclusive), degrees
    pub min_lng: f64,
    /// Eastern edge (exclusive), degrees
    pub max_lng: f64,
    /// Edge length of a grid cell, meters
    pub cell_size_meters: f64,
}

impl RegionSettings {
    /// Validate the settings and build a [`Region`].
    pub fn to_region(&self) -> Result<Region, RegionError> {
        Region::new(
            self.min_lat,
            self.max_lat,
            self.min_lng,
            self.max_lng,
            self.cell_size_meters,
        )
    }
}

/// Vocabulary configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularySettings {
    /// Word list file (`.json` array or one word per line).
    /// If None, the built-in generated list is used.
    pub path: Option<PathBuf>,
    /// Number of generated words when no file is configured
    pub generated_size: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
