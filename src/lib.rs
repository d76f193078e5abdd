//! Latticeplot - density profile viewer for lattice simulation results.
//!
//! Reads the JSON results file written by a simulation run, picks series out
//! of its `density` or `speciesDensity` profile and shows them as
//! line-and-marker traces in an egui window.
//!
//! # Example
//!
//! ```no_run
//! use latticeplot::data::loader::load_file;
//! use latticeplot::data::model::DensityField;
//! use latticeplot::data::select::{Profile, SelectionFilter};
//! use std::path::Path;
//!
//! let doc = load_file(Path::new("asep-results.json"))?;
//! let profile = Profile::build(&doc, DensityField::Density, &SelectionFilter::Indices(vec![1]))?;
//! println!("{} traces over {} sites", profile.traces.len(), profile.x.len());
//! # Ok::<(), latticeplot::PlotError>(())
//! ```

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod export;
pub mod state;
pub mod ui;

pub use error::{PlotError, Result};
