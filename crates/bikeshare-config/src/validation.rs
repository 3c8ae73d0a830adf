//! Custom field validators used by the configuration schema.

use crate::schema::ColorScheme;
use std::path::Path;
use validator::ValidationError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Whether `value` is a `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate a `#RRGGBB` color string.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

/// Validate that a custom palette is non-empty and made of hex colors.
pub fn validate_color_scheme(scheme: &ColorScheme) -> Result<(), ValidationError> {
    match scheme {
        ColorScheme::Custom(colors) if colors.is_empty() => {
            Err(ValidationError::new("empty_custom_palette"))
        }
        ColorScheme::Custom(colors) if !colors.iter().all(|c| is_hex_color(c)) => {
            Err(ValidationError::new("invalid_hex_color"))
        }
        _ => Ok(()),
    }
}

/// Validate the dataset path.
pub fn validate_data_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_data_path"));
    }
    Ok(())
}

/// Validate a log filter: a bare level or comma-separated `target=level`
/// directives.
pub fn validate_log_level(filter: &str) -> Result<(), ValidationError> {
    if filter.trim().is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }

    let valid = filter.split(',').all(|directive| {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level)
            .trim()
            .to_ascii_lowercase();
        LOG_LEVELS.contains(&level.as_str())
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
