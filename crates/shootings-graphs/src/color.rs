//! RGBA colors.

use crate::error::{PlotError, PlotResult};
use plotters::style::RGBAColor;
use shootings_common::parse_hex_color;

/// An 8-bit-per-channel color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is opaque
    pub a: u8,
}

/// Start color of the default bubble and block scale.
pub const DEFAULT_START: Rgba = Rgba::new(255, 1, 1, 255);
/// End color of the default bubble and block scale.
pub const DEFAULT_END: Rgba = Rgba::new(255, 255, 1, 255);
/// Default bar fill.
pub const DEFAULT_BAR: Rgba = Rgba::new(255, 0, 0, 255);

impl Rgba {
    /// Builds a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> PlotResult<Self> {
        parse_hex_color(hex)
            .map(|[r, g, b, a]| Self::new(r, g, b, a))
            .ok_or_else(|| PlotError::InvalidColor(hex.to_string()))
    }

    /// Channels as an array.
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for RGBAColor {
    fn from(color: Rgba) -> Self {
        Self(color.r, color.g, color.b, f64::from(color.a) / 255.0)
    }
}
