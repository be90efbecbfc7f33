use serde::Serialize;

use crate::profile::WaterProfile;
use crate::skyline::Skyline;
use crate::water::TrappedWaterCalculator;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one non-negative number.";
pub const IGNORED_VALUES_WARNING: &str = "Some values were ignored (only numbers ≥ 0 are used).";
pub const EMPTY_SUMMARY: &str = "Total water: -";

/// A computed profile along with the elevations it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub elevations: Vec<f64>,
    pub profile: WaterProfile<f64>,
    pub had_invalid: bool,
}

impl Report {
    pub fn warning(&self) -> Option<&'static str> {
        self.had_invalid.then_some(IGNORED_VALUES_WARNING)
    }

    pub fn summary(&self) -> String {
        format!("Total water: {} units", self.profile.total)
    }
}

/// Outcome of evaluating raw input text.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Nothing usable was entered.
    Empty { had_invalid: bool },
    Computed(Report),
}

impl Evaluation {
    pub fn summary(&self) -> String {
        match self {
            Evaluation::Empty { .. } => EMPTY_SUMMARY.to_string(),
            Evaluation::Computed(report) => report.summary(),
        }
    }

    /// Message to surface next to the result, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Evaluation::Empty { .. } => Some(EMPTY_INPUT_MESSAGE),
            Evaluation::Computed(report) => report.warning(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Evaluation::Empty { .. } => None,
            Evaluation::Computed(report) => Some(report),
        }
    }
}

/// Parses `text` and computes its water profile.
pub fn evaluate(text: &str) -> Evaluation {
    let (skyline, had_invalid) = Skyline::from_text(text);
    if skyline.is_empty() {
        log::debug!("No usable elevations in input");
        return Evaluation::Empty { had_invalid };
    }

    let profile = TrappedWaterCalculator::new(&skyline).calculate();
    log::debug!("Total water: {}", profile.total);
    Evaluation::Computed(Report {
        elevations: skyline.into_inner(),
        profile,
        had_invalid,
    })
}
