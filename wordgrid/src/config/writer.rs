//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let vocabulary_path = config
        .vocabulary
        .path
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[region]
; Bounding box in decimal degrees. Southern and western edges are inclusive,
; northern and eastern edges are exclusive.
min_lat = {}
max_lat = {}
min_lng = {}
max_lng = {}
; Edge length of one grid cell in meters
cell_size_meters = {}

[vocabulary]
; Word list file: a JSON array of strings (*.json) or one word per line.
; Leave empty to use the built-in generated word list.
path = {}
; Number of generated words used when no file is set.
; The cube of this number must cover every cell of the region.
generated_size = {}

[logging]
; Log file location
file = {}
"#,
        config.region.min_lat,
        config.region.max_lat,
        config.region.min_lng,
        config.region.max_lng,
        config.region.cell_size_meters,
        vocabulary_path,
        config.vocabulary.generated_size,
        path_to_string(&config.logging.file),
    )
}

/// Display a path, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::settings::ConfigFile;
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_string_has_all_sections() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[region]"));
        assert!(content.contains("[vocabulary]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("min_lat = 6.5"));
        assert!(content.contains("max_lng = 97.25"));
        assert!(content.contains("cell_size_meters = 3"));
        assert!(content.contains("generated_size = 16384"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.region.min_lat = 0.0;
        config.region.max_lat = 1.0;
        config.region.min_lng = -0.25;
        config.region.max_lng = 0.75;
        config.region.cell_size_meters = 11_000.0;
        config.vocabulary.path = Some(PathBuf::from("/opt/wordgrid/words.json"));
        config.vocabulary.generated_size = 500;
        config.logging.file = PathBuf::from("/tmp/wordgrid-test.log");

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_path_to_string_collapses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("words.txt")), "~/words.txt");
        }
        assert_eq!(path_to_string(Path::new("/etc/words.txt")), "/etc/words.txt");
    }
}
