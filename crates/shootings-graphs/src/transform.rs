//! Mapping from data coordinates to canvas pixels.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::CoordTranslate;
use std::ops::Range;

/// Converts a data-space point to backend pixel coordinates.
pub trait CanvasTransform {
    /// Pixel position of `(x, y)`.
    fn to_canvas(&self, x: f64, y: f64) -> (i32, i32);
}

impl<T: CanvasTransform + ?Sized> CanvasTransform for &T {
    fn to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        (**self).to_canvas(x, y)
    }
}

/// The coordinate spec of a `plotters` chart built with `f64` axes.
impl CanvasTransform for Cartesian2d<RangedCoordf64, RangedCoordf64> {
    fn to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        self.translate(&(x, y))
    }
}

/// Explicit linear mapping of a data rectangle onto a pixel rectangle.
///
/// The y axis is flipped: `y.start` lands on the bottom pixel row.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTransform {
    x: Range<f64>,
    y: Range<f64>,
    pixels_x: (i32, i32),
    pixels_y: (i32, i32),
}

impl LinearTransform {
    /// Maps `x` onto columns `pixels_x` and `y` onto rows `pixels_y`
    /// (bottom row first).
    pub const fn new(
        x: Range<f64>,
        y: Range<f64>,
        pixels_x: (i32, i32),
        pixels_y: (i32, i32),
    ) -> Self {
        Self {
            x,
            y,
            pixels_x,
            pixels_y,
        }
    }

    /// Maps the data ranges onto a whole `width` x `height` canvas.
    #[allow(clippy::cast_possible_wrap)]
    pub fn for_canvas(x: Range<f64>, y: Range<f64>, (width, height): (u32, u32)) -> Self {
        let right = width.saturating_sub(1) as i32;
        let bottom = height.saturating_sub(1) as i32;
        Self::new(x, y, (0, right), (bottom, 0))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn map_axis(value: f64, logic: &Range<f64>, (from, to): (i32, i32)) -> i32 {
    let span = logic.end - logic.start;
    if span == 0.0 {
        return from;
    }
    let t = (value - logic.start) / span;
    from + (f64::from(to - from) * t).round() as i32
}

impl CanvasTransform for LinearTransform {
    fn to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        (
            map_axis(x, &self.x, self.pixels_x),
            map_axis(y, &self.y, self.pixels_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_transform_flips_y() {
        let t = LinearTransform::for_canvas(0.0..4.0, 0.0..4.0, (401, 401));
        assert_eq!(t.to_canvas(0.0, 0.0), (0, 400));
        assert_eq!(t.to_canvas(4.0, 4.0), (400, 0));
        assert_eq!(t.to_canvas(1.0, 3.0), (100, 100));
    }

    #[test]
    fn test_degenerate_range_maps_to_origin() {
        let t = LinearTransform::new(1.0..1.0, 0.0..1.0, (10, 20), (30, 0));
        assert_eq!(t.to_canvas(5.0, 1.0).0, 10);
    }

    #[test]
    fn test_chart_coordinates_are_monotonic() {
        // charts map the y axis onto a bottom-to-top pixel range
        let spec: Cartesian2d<RangedCoordf64, RangedCoordf64> =
            Cartesian2d::new(0.0..10.0, 0.0..10.0, (0..100, 100..0));
        let (x0, y0) = spec.to_canvas(0.0, 0.0);
        let (x1, y1) = spec.to_canvas(10.0, 10.0);
        assert!(x1 > x0);
        assert!(y1 < y0);
        assert_eq!(spec.to_canvas(5.0, 5.0), (50, 50));
    }
}
