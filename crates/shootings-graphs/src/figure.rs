//! PNG figure output.

use crate::color::Rgba;
use crate::histogram::bin_values;
use crate::plotter::{Plotter, SeriesRenderer};
use crate::transform::CanvasTransform;
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use shootings_common::{format_date, Result, ShootingsError};
use shootings_config::FiguresConfig;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Title shared by the weekly figures.
pub const WEEKLY_TITLE: &str = "Number of Shootings Per Week";

/// Font family used for captions and axis labels.
const FONT_FAMILY: &str = "sans-serif";

/// Fixed layout of a sample series figure.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFigure {
    /// Output file name inside the figure directory
    pub file_name: String,
    /// Caption
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Horizontal axis range in data units; the series extent when unset
    pub x_range: Option<Range<f64>>,
    /// Vertical axis range in data units; the series extent when unset
    pub y_range: Option<Range<f64>>,
}

impl SeriesFigure {
    /// Axis ranges for `series`, falling back to its data bounds.
    pub fn axes(&self, series: &impl SeriesRenderer) -> (Range<f64>, Range<f64>) {
        let bounds = series.data_bounds();
        (
            self.x_range.clone().unwrap_or_else(|| bounds.x_range()),
            self.y_range.clone().unwrap_or_else(|| bounds.y_range()),
        )
    }
}

/// Renders figures into the configured output directory.
#[derive(Debug, Clone)]
pub struct FigureRenderer {
    output_dir: PathBuf,
    size: (u32, u32),
    background: Rgba,
    title_font_size: u32,
    histogram_file: String,
    line_file: String,
}

impl FigureRenderer {
    /// Create a renderer from the figures configuration
    pub fn new(config: &FiguresConfig) -> Result<Self> {
        let background = Rgba::from_hex(&config.background)?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            size: config.pixel_size(),
            background,
            title_font_size: config.title_font_size,
            histogram_file: config.files.weekly_histogram.clone(),
            line_file: config.files.weekly_line.clone(),
        })
    }

    /// Canvas size in pixels.
    pub const fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Directory figures are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Histogram of weekly counts, one bin per week.
    #[instrument(skip(self, counts), fields(weeks = counts.len()))]
    pub fn weekly_histogram(&self, counts: &[f64], start: NaiveDate) -> Result<PathBuf> {
        let bins = bin_values(counts, counts.len());
        let (first, last) = match (bins.first(), bins.last()) {
            (Some(first), Some(last)) => (first.min, last.max),
            _ => return Err(ShootingsError::graph("No weekly counts to plot")),
        };
        let top = bins.iter().map(|b| b.weight).fold(0.0, f64::max) * 1.1;

        let path = self.prepare(&self.histogram_file)?;
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            root.fill(&RGBAColor::from(self.background))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(WEEKLY_TITLE, (FONT_FAMILY, self.title_font_size))
                .margin(10)
                .x_label_area_size(35)
                .y_label_area_size(40)
                .build_cartesian_2d(first..last, 0.0..top.max(1.0))?;

            chart
                .configure_mesh()
                .x_desc(format!("Shootings per week since {}", format_date(start)))
                .y_desc("Number of weeks")
                .draw()?;

            chart.draw_series(bins.iter().map(|bin| {
                Rectangle::new(
                    [(bin.min, 0.0), (bin.max, bin.weight)],
                    BLUE.mix(0.6).filled(),
                )
            }))?;

            root.present()?;
        }

        info!("Saved weekly histogram to {}", path.display());
        Ok(path)
    }

    /// Line chart of `(week, count)` points with point markers.
    #[instrument(skip(self, points), fields(weeks = points.len()))]
    pub fn weekly_line(&self, points: &[(f64, f64)], start: NaiveDate) -> Result<PathBuf> {
        if points.is_empty() {
            return Err(ShootingsError::graph("No weekly counts to plot"));
        }
        let x_max = points.iter().map(|p| p.0).fold(0.0, f64::max).max(1.0);
        let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max).max(1.0) * 1.1;

        let path = self.prepare(&self.line_file)?;
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            root.fill(&RGBAColor::from(self.background))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(WEEKLY_TITLE, (FONT_FAMILY, self.title_font_size))
                .margin(10)
                .x_label_area_size(35)
                .y_label_area_size(40)
                .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

            chart
                .configure_mesh()
                .x_desc(format!("Weeks from {}", format_date(start)))
                .y_desc("Number of Shootings")
                .draw()?;

            chart.draw_series(LineSeries::new(points.iter().copied(), &RED))?;
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 2, RED.filled())),
            )?;

            root.present()?;
        }

        info!("Saved weekly line chart to {}", path.display());
        Ok(path)
    }

    /// Renders one series on fixed axes.
    #[instrument(skip(self, plotter, figure), fields(series = plotter.name(), file = %figure.file_name))]
    pub fn series(&self, plotter: &Plotter, figure: &SeriesFigure) -> Result<PathBuf> {
        let path = self.prepare(&figure.file_name)?;
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            root.fill(&RGBAColor::from(self.background))?;
            self.draw_series(&root, plotter, figure)?;
            root.present()?;
        }

        info!("Saved {} figure to {}", plotter.name(), path.display());
        Ok(path)
    }

    fn draw_series<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        plotter: &Plotter,
        figure: &SeriesFigure,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (x_range, y_range) = figure.axes(plotter);
        let mut chart = ChartBuilder::on(root)
            .caption(&figure.title, (FONT_FAMILY, self.title_font_size))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(40)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .draw()?;

        let transform: &dyn CanvasTransform = chart.as_coord_spec();
        plotter.render(root, transform)
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_dir.join(file_name))
    }
}
