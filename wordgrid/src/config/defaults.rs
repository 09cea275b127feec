//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::region::{
    DEFAULT_CELL_SIZE_METERS, DEFAULT_MAX_LAT, DEFAULT_MAX_LNG, DEFAULT_MIN_LAT, DEFAULT_MIN_LNG,
};
use crate::vocabulary::DEFAULT_GENERATED_SIZE;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "wordgrid.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            region: RegionSettings {
                min_lat: DEFAULT_MIN_LAT,
                max_lat: DEFAULT_MAX_LAT,
                min_lng: DEFAULT_MIN_LNG,
                max_lng: DEFAULT_MAX_LNG,
                cell_size_meters: DEFAULT_CELL_SIZE_METERS,
            },
            vocabulary: VocabularySettings {
                path: None,
                generated_size: DEFAULT_GENERATED_SIZE,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
