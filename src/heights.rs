use crate::parser::{parse, DELIMITER};

/// Dataset loaded on start and on reset.
pub const DEFAULT_HEIGHTS: [f64; 10] = [0.0, 4.0, 0.0, 0.0, 0.0, 6.0, 0.0, 6.0, 4.0, 0.0];

/// The running list of entered column heights.
///
/// Owned by the caller and handed to the parser/calculator on demand; edits
/// never touch a computed profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeightList {
    values: Vec<f64>,
}

impl HeightList {
    pub fn new() -> Self {
        HeightList { values: Vec::new() }
    }

    pub fn default_dataset() -> Self {
        HeightList {
            values: DEFAULT_HEIGHTS.to_vec(),
        }
    }

    /// Keeps only finite, non-negative values.
    pub fn from_values(values: Vec<f64>) -> Self {
        let mut list = HeightList::new();
        for value in values {
            list.push(value);
        }
        list
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends a height. Returns `false` (and leaves the list alone) for
    /// negative or non-finite values.
    pub fn push(&mut self, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            log::warn!("Ignoring invalid height {}", value);
            return false;
        }
        self.values.push(value + 0.0);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<f64> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.values = DEFAULT_HEIGHTS.to_vec();
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Replaces the list with whatever `text` parses to; returns whether any
    /// token was dropped.
    pub fn replace_from_text(&mut self, text: &str) -> bool {
        let result = parse(text);
        self.values = result.elevations;
        result.had_invalid
    }

    /// Comma-joined text form, without spaces.
    pub fn to_text(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(DELIMITER.to_string().as_str())
    }
}

impl std::fmt::Display for HeightList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
