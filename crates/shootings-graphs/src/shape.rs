//! Primitives produced by the series renderers, in canvas pixels.

use crate::color::Rgba;
use plotters::coord::Shift;
use plotters::prelude::*;
use shootings_common::Result;

/// A filled primitive in backend pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Disc around `center`
    Circle {
        /// Center pixel
        center: (i32, i32),
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: Rgba,
    },
    /// Axis-aligned rectangle between two opposite corners
    Rect {
        /// Opposite corners, in the order they were computed
        corners: [(i32, i32); 2],
        /// Fill color
        color: Rgba,
    },
}

impl Shape {
    /// Fill color.
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Circle { color, .. } | Self::Rect { color, .. } => *color,
        }
    }

    /// Draws the shape onto an unshifted drawing area.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw<DB>(&self, area: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        match *self {
            Self::Circle {
                center,
                radius,
                color,
            } => {
                let style = RGBAColor::from(color).filled();
                area.draw(&Circle::new(center, radius.round() as i32, style))?;
            }
            Self::Rect { corners, color } => {
                let style = RGBAColor::from(color).filled();
                area.draw(&Rectangle::new(corners, style))?;
            }
        }
        Ok(())
    }
}
