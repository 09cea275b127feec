//! Configuration for wordgrid.
//!
//! Settings are read once at startup from `~/.wordgrid/config.ini`:
//!
//! ```ini
//! [region]
//! min_lat = 6.5
//! max_lat = 37.6
//! min_lng = 68.7
//! max_lng = 97.25
//! cell_size_meters = 3
//!
//! [vocabulary]
//! path = ~/.wordgrid/words.json
//! generated_size = 16384
//!
//! [logging]
//! file = ~/.wordgrid/wordgrid.log
//! ```
//!
//! A missing file, section, or key falls back to the defaults in
//! [`defaults`].

pub mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::DEFAULT_LOG_FILE_NAME;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, RegionSettings, VocabularySettings};
