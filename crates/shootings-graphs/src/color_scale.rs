//! Linear mapping from a scalar domain onto a color gradient.

use crate::color::{Rgba, DEFAULT_END, DEFAULT_START};
use crate::error::{PlotError, PlotResult};

/// Interpolates between two colors over `[min, max]`.
///
/// Values at or below `min` get the start color, values at or above `max`
/// get the end color. A degenerate domain (`min == max`) never divides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
    start: Rgba,
    end: Rgba,
}

impl ColorScale {
    /// Creates a scale. Bounds must be finite and ordered.
    pub fn new(min: f64, max: f64, start: Rgba, end: Rgba) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidDomain { min, max });
        }
        Ok(Self {
            min,
            max,
            start,
            end,
        })
    }

    /// Creates a scale spanning the finite values given.
    pub fn from_values(values: &[f64], start: Rgba, end: Rgba) -> PlotResult<Self> {
        let (min, max) = finite_range(values.iter().copied()).ok_or(PlotError::EmptySeries)?;
        Self::new(min, max, start, end)
    }

    /// The red to yellow scale used by bubbles and blocks.
    pub fn red_to_yellow(min: f64, max: f64) -> PlotResult<Self> {
        Self::new(min, max, DEFAULT_START, DEFAULT_END)
    }

    /// Same domain with different end colors.
    #[must_use]
    pub const fn with_colors(self, start: Rgba, end: Rgba) -> Self {
        Self { start, end, ..self }
    }

    /// Lower bound of the domain.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Color at the low end.
    pub const fn start(&self) -> Rgba {
        self.start
    }

    /// Color at the high end.
    pub const fn end(&self) -> Rgba {
        self.end
    }

    /// Color for `value`. NaN maps to the start color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn color_at(&self, value: f64) -> Rgba {
        if value.is_nan() || value <= self.min {
            return self.start;
        }
        if value >= self.max {
            return self.end;
        }

        let t = (value - self.min) / (self.max - self.min);
        let lerp = |s: u8, e: u8| {
            let s = f64::from(s);
            (s + (f64::from(e) - s) * t) as u8
        };

        Rgba::new(
            lerp(self.start.r, self.end.r),
            lerp(self.start.g, self.end.g),
            lerp(self.start.b, self.end.b),
            lerp(self.start.a, self.end.a),
        )
    }
}

/// Smallest and largest finite values, if any.
pub(crate) fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scale() -> ColorScale {
        ColorScale::red_to_yellow(0.0, 10.0).unwrap()
    }

    #[test]
    fn test_clamps_to_boundaries() {
        let scale = scale();
        assert_eq!(scale.color_at(-5.0), DEFAULT_START);
        assert_eq!(scale.color_at(0.0), DEFAULT_START);
        assert_eq!(scale.color_at(10.0), DEFAULT_END);
        assert_eq!(scale.color_at(1e9), DEFAULT_END);
        assert_eq!(scale.color_at(f64::NAN), DEFAULT_START);
    }

    #[test]
    fn test_midpoint_truncates() {
        // 1 + 254 * 0.5 = 128
        assert_eq!(scale().color_at(5.0), Rgba::new(255, 128, 1, 255));
        // 1 + 254 * 0.25 = 64.5
        assert_eq!(scale().color_at(2.5), Rgba::new(255, 64, 1, 255));
    }

    #[test]
    fn test_decreasing_channels() {
        let scale = ColorScale::new(0.0, 1.0, Rgba::new(200, 0, 0, 255), Rgba::new(100, 0, 0, 255))
            .unwrap();
        assert_eq!(scale.color_at(0.5).r, 150);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = ColorScale::red_to_yellow(3.0, 3.0).unwrap();
        assert_eq!(scale.color_at(3.0), DEFAULT_START);
        assert_eq!(scale.color_at(3.5), DEFAULT_END);
    }

    #[test]
    fn test_rejects_bad_domain() {
        assert!(matches!(
            ColorScale::red_to_yellow(2.0, 1.0),
            Err(PlotError::InvalidDomain { .. })
        ));
        assert!(ColorScale::red_to_yellow(f64::NEG_INFINITY, 1.0).is_err());
        assert!(ColorScale::red_to_yellow(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_from_values() {
        let scale = ColorScale::from_values(&[4.0, f64::NAN, -2.0, 7.5], DEFAULT_START, DEFAULT_END)
            .unwrap();
        assert_eq!((scale.min(), scale.max()), (-2.0, 7.5));
        assert_eq!(
            ColorScale::from_values(&[], DEFAULT_START, DEFAULT_END),
            Err(PlotError::EmptySeries)
        );
    }

    fn any_color() -> impl Strategy<Value = Rgba> {
        any::<[u8; 4]>().prop_map(|[r, g, b, a]| Rgba::new(r, g, b, a))
    }

    proptest! {
        #[test]
        fn prop_outside_domain_hits_endpoints(
            min in -1e6f64..1e6,
            width in 0.0f64..1e6,
            below in 0.0f64..1e6,
            start in any_color(),
            end in any_color(),
        ) {
            let max = min + width;
            let scale = ColorScale::new(min, max, start, end).unwrap();
            prop_assert_eq!(scale.color_at(min - below), start);
            prop_assert_eq!(scale.color_at(max + below + 1.0), end);
        }

        #[test]
        fn prop_monotonic_per_channel(
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
            start in any_color(),
            end in any_color(),
        ) {
            let scale = ColorScale::new(0.0, 100.0, start, end).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (c_lo, c_hi) = (scale.color_at(lo).channels(), scale.color_at(hi).channels());
            let (s, e) = (start.channels(), end.channels());

            for i in 0..4 {
                if s[i] <= e[i] {
                    prop_assert!(c_lo[i] <= c_hi[i]);
                } else {
                    prop_assert!(c_lo[i] >= c_hi[i]);
                }
            }
        }
    }
}
