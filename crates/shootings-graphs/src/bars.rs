//! Bar charts: one bar per value, starting at the x axis.

use crate::color::{Rgba, DEFAULT_BAR};
use crate::color_scale::finite_range;
use crate::error::{PlotError, PlotResult};
use crate::series::Bounds;
use crate::shape::Shape;
use crate::transform::CanvasTransform;

/// Width of a bar in data units.
pub const BAR_WIDTH: f64 = 0.75;

/// Bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
    color: Rgba,
    min: f64,
    max: f64,
}

impl Bars {
    /// Copies `values`. Labels, when given, must match them one to one.
    pub fn new(values: &[f64], labels: Option<Vec<String>>) -> PlotResult<Self> {
        if let Some(labels) = &labels {
            if labels.len() != values.len() {
                return Err(PlotError::LabelMismatch {
                    labels: labels.len(),
                    values: values.len(),
                });
            }
        }
        let (min, max) = finite_range(values.iter().copied()).ok_or(PlotError::EmptySeries)?;

        Ok(Self {
            values: values.to_vec(),
            labels,
            color: DEFAULT_BAR,
            min,
            max,
        })
    }

    /// Replaces the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// The copied values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Per-bar labels.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Fill color.
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Smallest value.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest value.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// One rectangle per value, from `(i, 0)` to `(i + 0.75, v)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = i as f64;
                Shape::Rect {
                    corners: [transform.to_canvas(x, 0.0), transform.to_canvas(x + BAR_WIDTH, v)],
                    color: self.color,
                }
            })
            .collect()
    }

    /// `0..n` horizontally, the value range (including zero) vertically.
    #[allow(clippy::cast_precision_loss)]
    pub fn data_bounds(&self) -> Bounds {
        Bounds {
            x_min: 0.0,
            x_max: self.values.len() as f64,
            y_min: self.min.min(0.0),
            y_max: self.max.max(0.0),
        }
    }
}
