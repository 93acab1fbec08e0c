//! # Shootings CLI
//!
//! The `shootings` binary: downloads the police shootings datasets,
//! summarises the CSV, aggregates shootings per week and renders figures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
