//! Block charts and heatmaps: one colored square per point.

use crate::color::Rgba;
use crate::color_scale::ColorScale;
use crate::error::{PlotError, PlotResult};
use crate::series::{z_range, Bounds, Point3};
use crate::shape::Shape;
use crate::transform::CanvasTransform;

/// Side of a block in data units.
pub const BLOCK_SIZE: f64 = 0.25;

/// Block series.
#[derive(Debug, Clone, PartialEq)]
pub struct Blocks {
    points: Vec<Point3>,
    scale: ColorScale,
}

impl Blocks {
    /// Copies `points`; the color scale spans their z range.
    pub fn new(points: &[Point3]) -> PlotResult<Self> {
        let (min_z, max_z) = z_range(points).ok_or(PlotError::EmptySeries)?;
        Ok(Self {
            points: points.to_vec(),
            scale: ColorScale::red_to_yellow(min_z, max_z)?,
        })
    }

    /// Lays `values` out on a `rows` x `cols` grid in row-major order:
    /// value `i` sits at `x = i % cols`, `y = i / cols`.
    #[allow(clippy::cast_precision_loss)]
    pub fn heatmap(values: &[f64], rows: usize, cols: usize) -> PlotResult<Self> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(PlotError::InvalidDimensions {
                len: values.len(),
                rows,
                cols,
            });
        }

        let points: Vec<Point3> = values
            .iter()
            .enumerate()
            .map(|(i, &z)| Point3::new((i % cols) as f64, (i / cols) as f64, z))
            .collect();
        Self::new(&points)
    }

    /// Replaces the gradient end colors.
    #[must_use]
    pub fn with_colors(mut self, start: Rgba, end: Rgba) -> Self {
        self.scale = self.scale.with_colors(start, end);
        self
    }

    /// The copied points.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Color scale over the z range.
    pub const fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// One filled square per point, anchored at its lower-left corner.
    pub fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        self.points
            .iter()
            .map(|p| Shape::Rect {
                corners: [
                    transform.to_canvas(p.x, p.y),
                    transform.to_canvas(p.x + BLOCK_SIZE, p.y + BLOCK_SIZE),
                ],
                color: self.scale.color_at(p.z),
            })
            .collect()
    }

    /// Extent of the blocks including their size.
    pub fn data_bounds(&self) -> Bounds {
        let mut bounds = Bounds::of_points(self.points.iter().map(|p| (p.x, p.y)))
            .unwrap_or(Bounds {
                x_min: 0.0,
                x_max: 0.0,
                y_min: 0.0,
                y_max: 0.0,
            });
        bounds.x_max += BLOCK_SIZE;
        bounds.y_max += BLOCK_SIZE;
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DEFAULT_END, DEFAULT_START};
    use crate::transform::LinearTransform;

    #[test]
    fn test_heatmap_dimension_mismatch() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            Blocks::heatmap(&values, 2, 3),
            Err(PlotError::InvalidDimensions {
                len: 5,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_heatmap_is_row_major() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let blocks = Blocks::heatmap(&values, 2, 3).unwrap();
        let coords: Vec<_> = blocks.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            coords,
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]
        );
    }

    #[test]
    fn test_empty_blocks() {
        assert_eq!(Blocks::new(&[]), Err(PlotError::EmptySeries));
        assert_eq!(Blocks::heatmap(&[], 0, 4), Err(PlotError::EmptySeries));
    }

    #[test]
    fn test_block_geometry() {
        let blocks = Blocks::new(&[Point3::new(1.0, 1.0, 0.0), Point3::new(2.0, 3.0, 1.0)]).unwrap();
        let transform = LinearTransform::for_canvas(0.0..4.0, 0.0..4.0, (401, 401));
        let shapes = blocks.shapes(&transform);

        assert_eq!(
            shapes[0],
            Shape::Rect {
                corners: [(100, 300), (125, 275)],
                color: DEFAULT_START,
            }
        );
        assert_eq!(shapes[1].color(), DEFAULT_END);

        let bounds = blocks.data_bounds();
        assert_eq!((bounds.x_max, bounds.y_max), (2.25, 3.25));
    }
}
