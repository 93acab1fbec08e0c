//! Seeded sample data and the sample bubble, block, bar and heatmap figures.

use crate::bars::Bars;
use crate::blocks::Blocks;
use crate::bubbles::Bubbles;
use crate::color::Rgba;
use crate::figure::{FigureRenderer, SeriesFigure};
use crate::plotter::Plotter;
use crate::series::Point3;
use shootings_common::Result;
use shootings_config::FiguresConfig;
use std::ops::Range;
use std::path::PathBuf;
use tracing::info;

/// Number of bubbles in the sample bubble chart.
pub const SAMPLE_BUBBLES: usize = 10;
/// Side of the sample block grid and heatmap.
pub const SAMPLE_GRID_SIDE: usize = 4;
/// Number of bars in the sample bar chart.
pub const SAMPLE_BARS: usize = 8;

/// Points with x drifting upwards by up to 2 per step, `y = x + 10r` and `z = x`.
pub fn random_triples(rng: &mut fastrand::Rng, n: usize) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::with_capacity(n);
    for i in 0..n {
        let x = if i == 0 {
            rng.f64()
        } else {
            2.0f64.mul_add(rng.f64(), points[i - 1].x)
        };
        points.push(Point3::new(x, 10.0f64.mul_add(rng.f64(), x), x));
    }
    points
}

/// A `side` x `side` grid of random intensities, column by column.
#[allow(clippy::cast_precision_loss)]
pub fn random_grid(rng: &mut fastrand::Rng, side: usize) -> Vec<Point3> {
    (0..side * side)
        .map(|i| Point3::new((i / side) as f64, (i % side) as f64, rng.f64()))
        .collect()
}

/// `n` values drawn uniformly from `[0, 1)`.
pub fn random_values(rng: &mut fastrand::Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.f64()).collect()
}

fn figure(file_name: &str, title: &str, axes: Option<(Range<f64>, Range<f64>)>) -> SeriesFigure {
    let (x_range, y_range) = axes.unzip();
    SeriesFigure {
        file_name: file_name.to_string(),
        title: title.to_string(),
        x_label: "X".to_string(),
        y_label: "Y".to_string(),
        x_range,
        y_range,
    }
}

/// Builds the four sample series and their figure layouts.
///
/// Every series draws from its own generator seeded with `sample_seed`.
/// Only the bubble chart has fixed axes; the others span their data.
pub fn sample_series(config: &FiguresConfig) -> Result<Vec<(Plotter, SeriesFigure)>> {
    let seed = config.sample_seed;
    let start = Rgba::from_hex(&config.bubble.start_color)?;
    let end = Rgba::from_hex(&config.bubble.end_color)?;
    let bar_color = Rgba::from_hex(&config.bar_color)?;

    let triples = random_triples(&mut fastrand::Rng::with_seed(seed), SAMPLE_BUBBLES);
    let bubbles = Bubbles::new(
        &triples,
        config.points_to_pixels(config.bubble.min_radius_pt),
        config.points_to_pixels(config.bubble.max_radius_pt),
    )?
    .with_colors(start, end);

    let grid = random_grid(&mut fastrand::Rng::with_seed(seed), SAMPLE_GRID_SIDE);
    let blocks = Blocks::new(&grid)?.with_colors(start, end);

    let values = random_values(&mut fastrand::Rng::with_seed(seed), SAMPLE_BARS);
    let bars = Bars::new(&values, None)?.with_color(bar_color);

    let cells = random_values(
        &mut fastrand::Rng::with_seed(seed),
        SAMPLE_GRID_SIDE * SAMPLE_GRID_SIDE,
    );
    let heatmap = Blocks::heatmap(&cells, SAMPLE_GRID_SIDE, SAMPLE_GRID_SIDE)?.with_colors(start, end);

    let files = &config.files;
    Ok(vec![
        (
            bubbles.into(),
            figure(&files.bubbles, "Bubbles", Some((0.0..15.0, 0.0..25.0))),
        ),
        (blocks.into(), figure(&files.blocks, "Blocks", None)),
        (bars.into(), figure(&files.bar_chart, "Bar Chart", None)),
        (heatmap.into(), figure(&files.heatmap, "Heatmap", None)),
    ])
}

/// Renders every sample figure.
pub fn render_samples(renderer: &FigureRenderer, config: &FiguresConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (plotter, figure) in sample_series(config)? {
        written.push(renderer.series(&plotter, &figure)?);
    }
    info!("Rendered {} sample figures", written.len());
    Ok(written)
}
