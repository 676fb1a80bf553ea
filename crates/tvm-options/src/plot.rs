//! SVG payoff diagrams.
//!
//! Draws a payoff series as a line over spot, with a zero-profit axis and a
//! vertical marker at each breakeven. Enabled by the `plot` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use tvm_options::prelude::*;
//!
//! let fly = Strategy::butterfly([45.0, 50.0, 55.0], [4.0, 6.0, 9.0])?;
//! let grid = spot_grid(0.0, 80.0, 0.25)?;
//! let series = payoff_series(&fly, &grid);
//! let marks = breakevens(&fly, 0.0, 80.0, 0.25)?;
//!
//! plot_payoff_svg(&series, &marks, "butterfly.svg", &PlotConfig::titled(fly.name()))?;
//! ```

use std::path::Path;

use plotters::prelude::*;

use crate::error::{OptionsError, OptionsResult};
use crate::series::PayoffPoint;

/// Configuration for payoff diagrams.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,
    /// Image height in pixels (default: 768)
    pub height: u32,
    /// Plot title
    pub title: String,
    /// X-axis label
    pub xlabel: String,
    /// Y-axis label
    pub ylabel: String,
    /// Payoff line color
    pub line_color: RGBColor,
    /// Zero axis and breakeven marker color
    pub marker_color: RGBColor,
    /// Line thickness in pixels
    pub line_width: u32,
    /// Whether to show grid lines
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Payoff".to_string(),
            xlabel: "Spot at expiry".to_string(),
            ylabel: "Profit".to_string(),
            line_color: BLUE,
            marker_color: RED,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Default configuration with a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Writes a payoff diagram to an SVG file.
///
/// `breakevens` outside the spot range of `series` are skipped.
pub fn plot_payoff_svg(
    series: &[PayoffPoint],
    breakevens: &[f64],
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> OptionsResult<()> {
    if series.len() < 2 {
        return Err(OptionsError::Plot(format!(
            "need at least 2 points, got {}",
            series.len()
        )));
    }

    let (x_min, x_max) = bounds(series.iter().map(|p| p.spot));
    let (p_min, p_max) = bounds(series.iter().map(|p| p.payoff));

    // Keep zero in view and leave 10% headroom
    let p_min = p_min.min(0.0);
    let p_max = p_max.max(0.0);
    let pad = ((p_max - p_min) * 0.1).max(1e-9);
    let (y_min, y_max) = (p_min - pad, p_max + pad);

    let root = SVGBackend::new(path.as_ref(), (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if config.show_grid {
        mesh.draw().map_err(plot_error)?;
    } else {
        mesh.disable_mesh().draw().map_err(plot_error)?;
    }

    chart
        .draw_series(LineSeries::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            config.marker_color.stroke_width(1),
        ))
        .map_err(plot_error)?;

    for &x in breakevens.iter().filter(|&&x| x >= x_min && x <= x_max) {
        chart
            .draw_series(LineSeries::new(
                vec![(x, y_min), (x, y_max)],
                config.marker_color.stroke_width(1),
            ))
            .map_err(plot_error)?;
    }

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|p| (p.spot, p.payoff)),
            config.line_color.stroke_width(config.line_width),
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    log::debug!(
        "wrote payoff diagram '{}' ({} points)",
        config.title,
        series.len()
    );
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn plot_error(err: impl std::fmt::Display) -> OptionsError {
    OptionsError::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{breakevens, payoff_series, spot_grid};
    use crate::strategy::Strategy;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::titled("Bull spread");
        assert_eq!(config.title, "Bull spread");
        assert_eq!(config.width, 1024);
        assert!(config.show_grid);
    }

    #[test]
    fn test_plot_butterfly_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("butterfly.svg");
        let fly = Strategy::butterfly([45.0, 50.0, 55.0], [4.0, 6.0, 9.0]).unwrap();
        let grid = spot_grid(0.0, 80.0, 0.25).unwrap();
        let series = payoff_series(&fly, &grid);
        let marks = breakevens(&fly, 0.0, 80.0, 0.25).unwrap();

        plot_payoff_svg(&series, &marks, &path, &PlotConfig::titled(fly.name())).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Butterfly spread"));
    }

    #[test]
    fn test_plot_flat_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");
        let series = [
            PayoffPoint { spot: 0.0, payoff: 0.0 },
            PayoffPoint { spot: 1.0, payoff: 0.0 },
        ];

        plot_payoff_svg(&series, &[], &path, &PlotConfig::default()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_plot_too_few_points() {
        let dir = tempfile::tempdir().unwrap();
        let series = [PayoffPoint { spot: 0.0, payoff: 1.0 }];

        let result = plot_payoff_svg(&series, &[], dir.path().join("x.svg"), &PlotConfig::default());

        assert!(matches!(result, Err(OptionsError::Plot(_))));
    }
}
