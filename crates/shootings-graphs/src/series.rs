//! Data points and extents shared by the plotters.

use crate::color_scale::finite_range;
use std::ops::Range;

/// A point with a magnitude driving color or size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    /// Horizontal position in data units
    pub x: f64,
    /// Vertical position in data units
    pub y: f64,
    /// Magnitude
    pub z: f64,
}

impl Point3 {
    /// Creates a point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Axis-aligned extent of a series in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x
    pub x_min: f64,
    /// Largest x
    pub x_max: f64,
    /// Smallest y
    pub y_min: f64,
    /// Largest y
    pub y_max: f64,
}

impl Bounds {
    /// Smallest box holding every point; `None` without finite points.
    pub fn of_points(points: impl IntoIterator<Item = (f64, f64)> + Clone) -> Option<Self> {
        let (x_min, x_max) = finite_range(points.clone().into_iter().map(|(x, _)| x))?;
        let (y_min, y_max) = finite_range(points.into_iter().map(|(_, y)| y))?;
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Horizontal range, widened by one unit when degenerate.
    pub fn x_range(&self) -> Range<f64> {
        padded(self.x_min, self.x_max)
    }

    /// Vertical range, widened by one unit when degenerate.
    pub fn y_range(&self) -> Range<f64> {
        padded(self.y_min, self.y_max)
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if max > min {
        min..max
    } else {
        (min - 0.5)..(max + 0.5)
    }
}

/// Smallest and largest z of a non-empty point list.
pub(crate) fn z_range(points: &[Point3]) -> Option<(f64, f64)> {
    finite_range(points.iter().map(|p| p.z))
}
