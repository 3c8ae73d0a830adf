//! Chart configuration and styling types

pub use bikeshare_config::ColorScheme;
use bikeshare_config::GraphsConfig;

/// Per-chart configuration: captions, pixel size and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Caption drawn above the plot
    pub title: String,
    /// Horizontal axis description
    pub x_label: Option<String>,
    /// Vertical axis description
    pub y_label: Option<String>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Colors, fonts and margins
    pub style: StyleConfig,
}

impl GraphConfig {
    /// Creates a configuration with default styling and no axis labels.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            width,
            height,
            style: StyleConfig::default(),
        }
    }

    /// Sets both axis descriptions.
    #[must_use]
    pub fn with_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }

    /// Replaces the styling.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Multiplies the pixel size, fonts and margins by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        self.width = scale_u32(self.width, factor);
        self.height = scale_u32(self.height, factor);
        self.style.title_font.size = scale_u32(self.style.title_font.size, factor);
        self.style.label_font.size = scale_u32(self.style.label_font.size, factor);
        let margins = &mut self.style.margins;
        for side in [
            &mut margins.top,
            &mut margins.right,
            &mut margins.bottom,
            &mut margins.left,
        ] {
            *side = scale_i32(*side, factor);
        }
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new("Graph", 800, 600)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_u32(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round().max(1.0) as u32
}

#[allow(clippy::cast_possible_truncation)]
fn scale_i32(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: u32,
}

impl FontConfig {
    /// Family and size in the form plotters accepts as a font.
    pub fn desc(&self) -> (&str, u32) {
        (self.family.as_str(), self.size)
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginConfig {
    /// Space above the plot area
    pub top: i32,
    /// Space right of the plot area
    pub right: i32,
    /// Height of the x label area
    pub bottom: i32,
    /// Width of the y label area
    pub left: i32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 50,
            left: 80,
        }
    }
}

/// Styling shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Palette for series and bars
    pub color_scheme: ColorScheme,
    /// Background as `#RRGGBB`; white when unset
    pub background_color: Option<String>,
    /// Caption font
    pub title_font: FontConfig,
    /// Axis, tick and legend font
    pub label_font: FontConfig,
    /// Plot margins
    pub margins: MarginConfig,
    /// Whether to draw grid lines
    pub show_grid: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: None,
            title_font: FontConfig {
                size: 20,
                ..FontConfig::default()
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            show_grid: true,
        }
    }
}

impl From<&GraphsConfig> for StyleConfig {
    fn from(config: &GraphsConfig) -> Self {
        Self {
            color_scheme: config.color_scheme.clone(),
            background_color: Some(config.background_color.clone()),
            title_font: FontConfig {
                family: config.font_family.clone(),
                size: config.title_font_size,
            },
            label_font: FontConfig {
                family: config.font_family.clone(),
                size: config.label_font_size,
            },
            margins: MarginConfig::default(),
            show_grid: config.show_grid,
        }
    }
}
