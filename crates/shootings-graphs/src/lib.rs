//! # Shootings Graphs
//!
//! A small plotting layer on top of `plotters`: a linear [`ColorScale`], the
//! [`Bubbles`], [`Blocks`] and [`Bars`] series behind the [`Plotter`] enum,
//! histogram binning and PNG figure output.
//!
//! Series produce [`Shape`]s in pixel space through a [`CanvasTransform`],
//! which is either a chart's coordinate spec or an explicit
//! [`LinearTransform`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bars;
pub mod blocks;
pub mod bubbles;
pub mod color;
pub mod color_scale;
pub mod error;
pub mod figure;
pub mod histogram;
pub mod plotter;
pub mod samples;
pub mod series;
pub mod shape;
pub mod transform;

pub use bars::{Bars, BAR_WIDTH};
pub use blocks::{Blocks, BLOCK_SIZE};
pub use bubbles::Bubbles;
pub use color::{Rgba, DEFAULT_BAR, DEFAULT_END, DEFAULT_START};
pub use color_scale::ColorScale;
pub use error::{PlotError, PlotResult};
pub use figure::{FigureRenderer, SeriesFigure, WEEKLY_TITLE};
pub use histogram::{bin_values, HistogramBin};
pub use plotter::{Plotter, SeriesRenderer};
pub use samples::{render_samples, sample_series};
pub use series::{Bounds, Point3};
pub use shape::Shape;
pub use transform::{CanvasTransform, LinearTransform};
