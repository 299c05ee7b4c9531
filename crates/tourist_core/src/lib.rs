//! Longest closed tour through a graph of named locations.
//! A breadth-first search over simple paths from the start location, plus the
//! validation, output reconstruction and result storage around it.

pub mod demo;
mod error;
mod graph;
mod io;
pub mod logging;
mod solver;
mod store;
mod tour;

pub(crate) use io::options;

pub use error::{Error, Result};
pub use graph::{Dataset, Edge, GraphModel, Incident, Location};
pub use io::input::load_dataset;
pub use io::options::{LogFormat, LogLevel, OutputFormat, TouristOptions};
pub use io::output::{render_solution, write_solution};
pub use solver::{Outcome, Solution, solve_longest_tour};
pub use store::OutputStore;
pub use tour::{Journey, OutputTour, TourFinder, TourMetrics};
