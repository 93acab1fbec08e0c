//! Equal-width binning of values for histograms.

use crate::color_scale::finite_range;

/// One histogram bin covering `[min, max)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub min: f64,
    /// Upper edge
    pub max: f64,
    /// Number of values in the bin
    pub weight: f64,
}

/// Splits the range of `values` into `n` equal-width bins and counts them.
///
/// Falls back to a single bin when `n` is zero or all values are equal.
/// NaN values are skipped. No values gives no bins.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
pub fn bin_values(values: &[f64], n: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = finite_range(values.iter().copied()) else {
        return Vec::new();
    };

    let n = if n < 1 || max <= min { 1 } else { n };
    let mut width = (max - min) / n as f64;
    if width == 0.0 {
        width = 1.0;
    }

    let mut bins: Vec<HistogramBin> = (0..n)
        .map(|i| HistogramBin {
            min: (i as f64).mul_add(width, min),
            max: ((i + 1) as f64).mul_add(width, min),
            weight: 0.0,
        })
        .collect();

    for &value in values.iter().filter(|v| v.is_finite()) {
        let index = if value == max {
            n - 1
        } else {
            (((value - min) / width) as usize).min(n - 1)
        };
        bins[index].weight += 1.0;
    }

    bins
}
