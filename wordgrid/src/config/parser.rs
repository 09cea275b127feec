//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Region bounds are only parsed here; cross-field validation happens when
/// the settings are turned into a [`crate::region::Region`].
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [region] section
    if let Some(section) = ini.section(Some("region")) {
        let region = &mut config.region;
        for (key, field) in [
            ("min_lat", &mut region.min_lat),
            ("max_lat", &mut region.max_lat),
            ("min_lng", &mut region.min_lng),
            ("max_lng", &mut region.max_lng),
            ("cell_size_meters", &mut region.cell_size_meters),
        ] {
            if let Some(v) = section.get(key) {
                *field = parse_degrees("region", key, v)?;
            }
        }
    }

    // [vocabulary] section
    if let Some(section) = ini.section(Some("vocabulary")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            config.vocabulary.path = if v.is_empty() {
                None
            } else {
                Some(expand_tilde(v))
            };
        }
        if let Some(v) = section.get("generated_size") {
            config.vocabulary.generated_size =
                v.trim()
                    .parse()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "vocabulary".to_string(),
                        key: "generated_size".to_string(),
                        value: v.to_string(),
                        reason: "must be a positive integer".to_string(),
                    })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a finite decimal number.
fn parse_degrees(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    let invalid = |reason: &str| ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("must be a decimal number"))?;
    if !parsed.is_finite() {
        return Err(invalid("must be finite"));
    }
    Ok(parsed)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
