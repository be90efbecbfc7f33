//! Trapped Water Calculator
//!
//! Parses a comma-delimited list of column heights into an elevation profile
//! and computes how much rain water the profile holds once it settles, both in
//! total and per position, using prefix/suffix maxima in linear time.

pub mod diagram;
pub mod heights;
pub mod parser;
pub mod profile;
pub mod report;
pub mod skyline;
pub mod water;

#[cfg(test)]
mod proptests;

pub use diagram::render_diagram;
pub use heights::{HeightList, DEFAULT_HEIGHTS};
pub use parser::{parse, ParseResult};
pub use profile::WaterProfile;
pub use report::{evaluate, Evaluation, Report};
pub use skyline::Skyline;
pub use water::{compute_trapped_water, TrappedWaterCalculator};

use thiserror::Error;

/// Errors raised by the outer surface (input loading, output encoding).
///
/// Parsing and the water computation itself never fail.
#[derive(Debug, Error)]
pub enum WaterError {
    /// I/O error when reading input text
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No valid elevations were left after parsing
    #[error("{}", report::EMPTY_INPUT_MESSAGE)]
    EmptyInput,
}

/// Result type for the fallible parts of the crate
pub type Result<T> = std::result::Result<T, WaterError>;
