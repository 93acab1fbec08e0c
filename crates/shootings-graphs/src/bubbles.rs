//! Bubble charts: one disc per point, sized and colored by `z`.

use crate::color::Rgba;
use crate::color_scale::ColorScale;
use crate::error::{PlotError, PlotResult};
use crate::series::{z_range, Bounds, Point3};
use crate::shape::Shape;
use crate::transform::CanvasTransform;

/// Bubble series.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubbles {
    points: Vec<Point3>,
    scale: ColorScale,
    min_radius: f64,
    max_radius: f64,
    min_z: f64,
    max_z: f64,
}

impl Bubbles {
    /// Copies `points` and fixes the radius range (in pixels).
    pub fn new(points: &[Point3], min_radius: f64, max_radius: f64) -> PlotResult<Self> {
        let valid = min_radius.is_finite()
            && max_radius.is_finite()
            && min_radius >= 0.0
            && min_radius <= max_radius;
        if !valid {
            return Err(PlotError::InvalidRadius {
                min: min_radius,
                max: max_radius,
            });
        }

        let (min_z, max_z) = z_range(points).ok_or(PlotError::EmptySeries)?;
        Ok(Self {
            points: points.to_vec(),
            scale: ColorScale::red_to_yellow(min_z, max_z)?,
            min_radius,
            max_radius,
            min_z,
            max_z,
        })
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

    /// Smallest and largest z.
    pub const fn z_bounds(&self) -> (f64, f64) {
        (self.min_z, self.max_z)
    }

    /// Radius in pixels for magnitude `z`, linear between the radius bounds.
    #[allow(clippy::float_cmp)]
    pub fn radius(&self, z: f64) -> f64 {
        if self.min_z == self.max_z {
            return (self.max_radius - self.min_radius) / 2.0 + self.min_radius;
        }
        let slope = (self.max_radius - self.min_radius) / (self.max_z - self.min_z);
        let intercept = self.max_radius - self.max_z * slope;
        slope.mul_add(z, intercept)
    }

    /// One filled circle per point.
    pub fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        self.points
            .iter()
            .map(|p| Shape::Circle {
                center: transform.to_canvas(p.x, p.y),
                radius: self.radius(p.z),
                color: self.scale.color_at(p.z),
            })
            .collect()
    }

    /// Extent of the bubble centers.
    pub fn data_bounds(&self) -> Bounds {
        Bounds::of_points(self.points.iter().map(|p| (p.x, p.y))).unwrap_or(Bounds {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DEFAULT_END, DEFAULT_START};
    use crate::transform::LinearTransform;
    use proptest::prelude::*;
    use shootings_common::test_utils::assert_approx_eq;

    fn sample() -> Bubbles {
        let points = [
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 4.0, 5.0),
            Point3::new(3.0, 6.0, 10.0),
        ];
        Bubbles::new(&points, 1.0, 21.0).unwrap()
    }

    #[test]
    fn test_radius_endpoints_and_midpoint() {
        let bubbles = sample();
        assert_approx_eq(bubbles.radius(0.0), 1.0, 1e-12);
        assert_approx_eq(bubbles.radius(10.0), 21.0, 1e-12);
        assert_approx_eq(bubbles.radius(5.0), 11.0, 1e-12);
    }

    #[test]
    fn test_equal_z_uses_mid_radius() {
        let points = [Point3::new(0.0, 0.0, 3.0), Point3::new(1.0, 1.0, 3.0)];
        let bubbles = Bubbles::new(&points, 2.0, 10.0).unwrap();
        assert_approx_eq(bubbles.radius(3.0), 6.0, 1e-12);
        assert_approx_eq(bubbles.radius(100.0), 6.0, 1e-12);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(Bubbles::new(&[], 1.0, 2.0), Err(PlotError::EmptySeries));
        let points = [Point3::new(0.0, 0.0, 1.0)];
        assert!(matches!(
            Bubbles::new(&points, 5.0, 1.0),
            Err(PlotError::InvalidRadius { .. })
        ));
        assert!(Bubbles::new(&points, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_input_is_copied() {
        let mut points = vec![Point3::new(1.0, 1.0, 1.0)];
        let bubbles = Bubbles::new(&points, 1.0, 2.0).unwrap();
        points[0].x = 99.0;
        assert_eq!(bubbles.points()[0].x, 1.0);
    }

    #[test]
    fn test_shapes() {
        let bubbles = sample();
        let transform = LinearTransform::for_canvas(0.0..4.0, 0.0..8.0, (401, 401));
        let shapes = bubbles.shapes(&transform);

        assert_eq!(shapes.len(), 3);
        match shapes[0] {
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                assert_eq!(center, (100, 300));
                assert_approx_eq(radius, 1.0, 1e-12);
                assert_eq!(color, DEFAULT_START);
            }
            Shape::Rect { .. } => panic!("expected a circle"),
        }
        assert_eq!(shapes[2].color(), DEFAULT_END);
    }

    proptest! {
        #[test]
        fn prop_radius_is_linear(
            zs in prop::collection::vec(-100.0f64..100.0, 2..20),
            min_r in 0.0f64..10.0,
            extra in 0.0f64..30.0,
        ) {
            let points: Vec<_> = zs.iter().map(|&z| Point3::new(0.0, 0.0, z)).collect();
            let bubbles = Bubbles::new(&points, min_r, min_r + extra).unwrap();
            let (lo, hi) = bubbles.z_bounds();
            prop_assume!(hi - lo > 1e-6);

            prop_assert!((bubbles.radius(lo) - min_r).abs() < 1e-6);
            prop_assert!((bubbles.radius(hi) - (min_r + extra)).abs() < 1e-6);
            let mid = (lo + hi) / 2.0;
            prop_assert!((bubbles.radius(mid) - (min_r + extra / 2.0)).abs() < 1e-6);
        }
    }
}
