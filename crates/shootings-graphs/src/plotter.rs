//! Common rendering capability of the series types.

use crate::bars::Bars;
use crate::blocks::Blocks;
use crate::bubbles::Bubbles;
use crate::series::Bounds;
use crate::shape::Shape;
use crate::transform::CanvasTransform;
use plotters::coord::Shift;
use plotters::prelude::*;
use shootings_common::Result;
use tracing::debug;

/// A series that can turn itself into canvas shapes.
pub trait SeriesRenderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Shapes for the series under `transform`.
    fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape>;

    /// Extent of the series in data units.
    fn data_bounds(&self) -> Bounds;

    /// Draws every shape onto `area`, whose origin must be the backend origin.
    fn render<DB>(&self, area: &DrawingArea<DB, Shift>, transform: &dyn CanvasTransform) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let shapes = self.shapes(transform);
        debug!(series = self.name(), shapes = shapes.len(), "Rendering series");
        for shape in &shapes {
            shape.draw(area)?;
        }
        Ok(())
    }
}

impl SeriesRenderer for Bubbles {
    fn name(&self) -> &'static str {
        "bubbles"
    }

    fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        Self::shapes(self, transform)
    }

    fn data_bounds(&self) -> Bounds {
        Self::data_bounds(self)
    }
}

impl SeriesRenderer for Blocks {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        Self::shapes(self, transform)
    }

    fn data_bounds(&self) -> Bounds {
        Self::data_bounds(self)
    }
}

impl SeriesRenderer for Bars {
    fn name(&self) -> &'static str {
        "bars"
    }

    fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        Self::shapes(self, transform)
    }

    fn data_bounds(&self) -> Bounds {
        Self::data_bounds(self)
    }
}

/// Any of the supported series kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Plotter {
    /// Bubble chart
    Bubbles(Bubbles),
    /// Block chart or heatmap
    Blocks(Blocks),
    /// Bar chart
    Bars(Bars),
}

impl SeriesRenderer for Plotter {
    fn name(&self) -> &'static str {
        match self {
            Self::Bubbles(series) => series.name(),
            Self::Blocks(series) => series.name(),
            Self::Bars(series) => series.name(),
        }
    }

    fn shapes(&self, transform: &dyn CanvasTransform) -> Vec<Shape> {
        match self {
            Self::Bubbles(series) => series.shapes(transform),
            Self::Blocks(series) => series.shapes(transform),
            Self::Bars(series) => series.shapes(transform),
        }
    }

    fn data_bounds(&self) -> Bounds {
        match self {
            Self::Bubbles(series) => series.data_bounds(),
            Self::Blocks(series) => series.data_bounds(),
            Self::Bars(series) => series.data_bounds(),
        }
    }
}

impl From<Bubbles> for Plotter {
    fn from(series: Bubbles) -> Self {
        Self::Bubbles(series)
    }
}

impl From<Blocks> for Plotter {
    fn from(series: Blocks) -> Self {
        Self::Blocks(series)
    }
}

impl From<Bars> for Plotter {
    fn from(series: Bars) -> Self {
        Self::Bars(series)
    }
}
