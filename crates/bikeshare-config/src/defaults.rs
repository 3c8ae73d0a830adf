//! Default values for every configuration section.

use crate::schema::{
    ColorScheme, Config, DataConfig, GraphsConfig, LoggingSettings, ServerConfig,
};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Default dataset file name, resolved against the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Default port, the one interactive dashboards conventionally use.
pub const DEFAULT_PORT: u16 = 8501;

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            color_scheme: ColorScheme::Default,
            font_family: "sans-serif".to_string(),
            title_font_size: 20,
            label_font_size: 14,
            scale: 1.0,
            show_grid: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            pretty: false,
            spans: false,
            file: None,
        }
    }
}
