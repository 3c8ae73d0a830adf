//! Graph rendering trait and shared drawing helpers

use crate::{ColorScheme, GraphConfig};
use bikeshare_common::{format_count, DashboardError, Result};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Trait for charts that draw themselves onto any plotters backend.
///
/// Implementors only provide [`GraphRenderer::draw`]; file and PNG output
/// are shared.
pub trait GraphRenderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Caption, axis labels and base pixel size of this chart.
    fn base_config(&self) -> GraphConfig;

    /// Draws the chart onto `root`, including the background.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static;

    /// Render the chart to a PNG file.
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        self.draw(&root, config)?;
        root.present()?;

        debug!(graph = self.name(), path = %path.display(), "Rendered chart to file");
        Ok(())
    }

    /// Render the chart to PNG bytes.
    fn render_to_bytes(&self, config: &GraphConfig) -> Result<Vec<u8>> {
        let (width, height) = (config.width, config.height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            self.draw(&root, config)?;
            root.present()?;
        }

        let image = image::RgbImage::from_raw(width, height, pixels)
            .ok_or_else(|| DashboardError::graph("pixel buffer does not match chart size"))?;
        let mut png = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut png, image::ImageOutputFormat::Png)
            .map_err(|e| DashboardError::graph_with_source("PNG encoding failed", e))?;

        let bytes = png.into_inner();
        debug!(graph = self.name(), bytes = bytes.len(), "Rendered chart to PNG");
        Ok(bytes)
    }

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
                RGBColor(188, 189, 34),  // Olive
                RGBColor(23, 190, 207),  // Cyan
            ],
            ColorScheme::Dark => vec![
                RGBColor(55, 126, 184),
                RGBColor(228, 26, 28),
                RGBColor(77, 175, 74),
                RGBColor(255, 127, 0),
                RGBColor(152, 78, 163),
                RGBColor(166, 86, 40),
                RGBColor(247, 129, 191),
            ],
            ColorScheme::Light => vec![
                RGBColor(166, 206, 227),
                RGBColor(251, 180, 174),
                RGBColor(179, 226, 205),
                RGBColor(253, 205, 172),
                RGBColor(203, 213, 232),
                RGBColor(244, 202, 228),
                RGBColor(230, 245, 201),
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),
                RGBColor(60, 180, 75),
                RGBColor(255, 225, 25),
                RGBColor(0, 130, 200),
                RGBColor(245, 130, 48),
                RGBColor(145, 30, 180),
                RGBColor(70, 240, 240),
                RGBColor(240, 50, 230),
            ],
            ColorScheme::Monochrome => vec![
                RGBColor(0, 0, 0),
                RGBColor(64, 64, 64),
                RGBColor(128, 128, 128),
                RGBColor(160, 160, 160),
                RGBColor(192, 192, 192),
                RGBColor(96, 96, 96),
                RGBColor(32, 32, 32),
            ],
            ColorScheme::Custom(colors) if !colors.is_empty() => {
                colors.iter().map(|color| self.parse_color(color)).collect()
            }
            ColorScheme::Custom(_) => self.get_colors(&ColorScheme::Default),
        }
    }

    /// Color for the `index`-th series, cycling through the palette.
    fn series_color(&self, config: &GraphConfig, index: usize) -> RGBColor {
        let colors = self.get_colors(&config.style.color_scheme);
        colors[index % colors.len()]
    }

    /// Parse a `#RRGGBB` string; falls back to black.
    fn parse_color(&self, color_str: &str) -> RGBColor {
        color_str
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .and_then(|hex| {
                Some(RGBColor(
                    u8::from_str_radix(&hex[0..2], 16).ok()?,
                    u8::from_str_radix(&hex[2..4], 16).ok()?,
                    u8::from_str_radix(&hex[4..6], 16).ok()?,
                ))
            })
            .unwrap_or(RGBColor(0, 0, 0))
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map_or(RGBColor(255, 255, 255), |color| self.parse_color(color))
    }
}

/// Coordinate system shared by every chart: categories at integer
/// positions on x, counts on y.
pub type CategoryCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

/// Builds a chart with one x tick per entry of `labels` and a count axis
/// from zero to `y_max`, then draws the caption, axes and grid.
#[allow(clippy::cast_precision_loss)]
pub fn category_chart<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    config: &GraphConfig,
    labels: &[&str],
    y_max: f64,
) -> Result<ChartContext<'a, DB, CategoryCoord>>
where
    DB::ErrorType: std::error::Error + Send + Sync + 'static,
{
    let x_upper = labels.len() as f64 - 0.5;
    let margins = config.style.margins;
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, config.style.title_font.desc())
        .margin(margins.top)
        .margin_right(margins.right)
        .x_label_area_size(margins.bottom)
        .y_label_area_size(margins.left)
        .build_cartesian_2d(-0.5..x_upper, 0.0..y_max)?;

    let label_font = config.style.label_font.desc();
    let x_formatter = |x: &f64| category_label(labels, *x);
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.x_label.as_deref().unwrap_or_default())
        .y_desc(config.y_label.as_deref().unwrap_or_default())
        .label_style(label_font)
        .axis_desc_style(label_font)
        .x_labels(labels.len())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&count_label);
    if !config.style.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    Ok(chart)
}

/// Draws the series legend in the upper right corner.
pub fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, CategoryCoord>,
    config: &GraphConfig,
) -> Result<()>
where
    DB::ErrorType: std::error::Error + Send + Sync + 'static,
{
    chart
        .configure_series_labels()
        .label_font(config.style.label_font.desc())
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}

/// Upper bound of the count axis: 10% headroom over `max`, or 1 when every
/// value is zero so that blank charts still get an axis.
#[allow(clippy::cast_precision_loss)]
pub fn count_axis_max(max: u64) -> f64 {
    if max == 0 {
        1.0
    } else {
        max as f64 * 1.1
    }
}

/// Tick label for the count axis.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count_label(value: &f64) -> String {
    format_count(value.max(0.0).round() as u64)
}

/// Label of the category at tick `value`, or empty between ticks.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn category_label(labels: &[&str], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .map(|label| (*label).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl GraphRenderer for MockRenderer {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn base_config(&self) -> GraphConfig {
            GraphConfig::default()
        }

        fn draw<DB: DrawingBackend>(
            &self,
            root: &DrawingArea<DB, Shift>,
            config: &GraphConfig,
        ) -> Result<()>
        where
            DB::ErrorType: std::error::Error + Send + Sync + 'static,
        {
            root.fill(&self.get_background_color(config))?;
            Ok(())
        }
    }

    #[test]
    fn test_color_schemes() {
        let renderer = MockRenderer;

        let default_colors = renderer.get_colors(&ColorScheme::Default);
        assert_eq!(default_colors.len(), 10);
        assert_eq!(default_colors[0], RGBColor(31, 119, 180));

        let custom = ColorScheme::Custom(vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
            "#0000FF".to_string(),
        ]);
        let colors = renderer.get_colors(&custom);
        assert_eq!(
            colors,
            vec![RGBColor(255, 0, 0), RGBColor(0, 255, 0), RGBColor(0, 0, 255)]
        );

        let empty_custom = renderer.get_colors(&ColorScheme::Custom(Vec::new()));
        assert_eq!(empty_custom, default_colors);
    }

    #[test]
    fn test_series_color_cycles() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();
        config.style.color_scheme =
            ColorScheme::Custom(vec!["#010203".to_string(), "#040506".to_string()]);

        assert_eq!(renderer.series_color(&config, 0), RGBColor(1, 2, 3));
        assert_eq!(renderer.series_color(&config, 3), RGBColor(4, 5, 6));
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(renderer.parse_color("#00ff00"), RGBColor(0, 255, 0));
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_background_color() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();
        assert_eq!(renderer.get_background_color(&config), RGBColor(255, 255, 255));

        config.style.background_color = Some("#101010".to_string());
        assert_eq!(renderer.get_background_color(&config), RGBColor(16, 16, 16));
    }

    #[test]
    fn test_render_to_bytes_produces_png() {
        let renderer = MockRenderer;
        let config = GraphConfig::new("Blank", 40, 30);

        let bytes = renderer.render_to_bytes(&config).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_category_chart_with_legend() {
        let (width, height) = (320, 240);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        let config = GraphConfig::new("Categories", width, height).with_labels("Month", "Count");
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = category_chart(&root, &config, &["Jan", "Feb", "Mar"], 10.0).unwrap();
            chart
                .draw_series(LineSeries::new(vec![(0.0, 1.0), (1.0, 5.0), (2.0, 3.0)], &BLUE))
                .unwrap()
                .label("2011")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));
            draw_legend(&mut chart, &config).unwrap();
            root.present().unwrap();
        }

        assert!(pixels.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_count_axis() {
        assert!((count_axis_max(0) - 1.0).abs() < f64::EPSILON);
        assert!((count_axis_max(100) - 110.0).abs() < 1e-9);
        assert_eq!(count_label(&1_234_567.4), "1,234,567");
        assert_eq!(count_label(&-3.0), "0");
    }

    #[test]
    fn test_category_labels() {
        let labels = ["Jan", "Feb", "Mar"];
        assert_eq!(category_label(&labels, 1.0), "Feb");
        assert_eq!(category_label(&labels, 1.5), "");
        assert_eq!(category_label(&labels, 3.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
