//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use validator::Validate;

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Input dataset configuration.
    #[validate]
    pub data: DataConfig,
    /// HTTP server configuration.
    #[validate]
    pub server: ServerConfig,
    /// Chart rendering configuration.
    #[validate]
    pub graphs: GraphsConfig,
    /// Logging configuration.
    #[validate]
    pub logging: LoggingSettings,
}

/// Input dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the rental CSV, loaded once at startup.
    #[validate(custom(function = "crate::validation::validate_data_path"))]
    pub path: PathBuf,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,
}

impl ServerConfig {
    /// Socket address the server listens on.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Palette used for hue series and bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Ten-color categorical palette.
    Default,
    /// Saturated colors for dark backgrounds.
    Dark,
    /// Pastel colors.
    Light,
    /// High-contrast colors.
    Vibrant,
    /// Shades of gray.
    Monochrome,
    /// User-provided `#RRGGBB` colors, cycled in order.
    Custom(Vec<String>),
}

/// Chart rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GraphsConfig {
    /// Chart background color (`#RRGGBB`).
    #[validate(custom(function = "crate::validation::validate_hex_color"))]
    pub background_color: String,
    /// Palette for series and bars.
    #[validate(custom(function = "crate::validation::validate_color_scheme"))]
    pub color_scheme: ColorScheme,
    /// Font family for captions and labels.
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,
    /// Caption font size.
    #[validate(range(min = 6, max = 72, message = "Font size must be between 6 and 72"))]
    pub title_font_size: u32,
    /// Axis and legend font size.
    #[validate(range(min = 6, max = 72, message = "Font size must be between 6 and 72"))]
    pub label_font_size: u32,
    /// Multiplier applied to each chart's base pixel size.
    #[validate(range(min = 0.25, max = 4.0, message = "Scale must be between 0.25 and 4.0"))]
    pub scale: f64,
    /// Whether to draw grid lines.
    pub show_grid: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level or filter directive.
    #[validate(custom(function = "crate::validation::validate_log_level"))]
    pub level: String,
    /// Emit JSON lines instead of text.
    pub json: bool,
    /// Multi-line colored output on stdout; ignored for JSON and file output.
    pub pretty: bool,
    /// Log span open and close events.
    pub spans: bool,
    /// Optional log file; logs go to stdout when unset.
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Converts these settings into the logging bootstrap configuration.
    pub fn to_logging_config(&self) -> bikeshare_common::LoggingConfig {
        bikeshare_common::LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            pretty_format: self.pretty,
            include_spans: self.spans,
            file_path: self.file.clone(),
            ..bikeshare_common::LoggingConfig::default()
        }
    }
}
