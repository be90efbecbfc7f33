use crate::parser::{parse, ParseResult};

/// An ordered run of unit-width columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Skyline<T> {
    elevations: Vec<T>,
}

impl<T: Copy + PartialOrd> Skyline<T> {
    pub fn new(elevations: Vec<T>) -> Self {
        Skyline { elevations }
    }

    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elevations
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elevations
    }

    pub fn get_elevation(&self, index: usize) -> Option<T> {
        self.elevations.get(index).copied()
    }

    /// First and last columns have no wall beyond them.
    pub fn is_on_boundary(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.elevations.len()
    }

    pub fn max_elevation(&self) -> Option<T> {
        self.elevations.iter().copied().reduce(larger)
    }

    /// `result[i]` is the tallest column in `0..=i`.
    pub fn prefix_maxima(&self) -> Vec<T> {
        prefix_maxima(&self.elevations)
    }

    /// `result[i]` is the tallest column in `i..n`.
    pub fn suffix_maxima(&self) -> Vec<T> {
        suffix_maxima(&self.elevations)
    }

    pub fn reversed(&self) -> Self {
        let mut elevations = self.elevations.clone();
        elevations.reverse();
        Skyline { elevations }
    }
}

impl Skyline<f64> {
    /// Builds a skyline from delimited text, returning whether any token was dropped.
    pub fn from_text(text: &str) -> (Self, bool) {
        let ParseResult {
            elevations,
            had_invalid,
        } = parse(text);
        (Skyline::new(elevations), had_invalid)
    }
}

impl<T> From<Vec<T>> for Skyline<T> {
    fn from(elevations: Vec<T>) -> Self {
        Skyline { elevations }
    }
}

pub(crate) fn prefix_maxima<T: Copy + PartialOrd>(elevations: &[T]) -> Vec<T> {
    let mut running = match elevations.first() {
        Some(&first) => first,
        None => return Vec::new(),
    };
    elevations
        .iter()
        .map(|&elevation| {
            running = larger(running, elevation);
            running
        })
        .collect()
}

pub(crate) fn suffix_maxima<T: Copy + PartialOrd>(elevations: &[T]) -> Vec<T> {
    let mut running = match elevations.last() {
        Some(&last) => last,
        None => return Vec::new(),
    };
    let mut maxima: Vec<T> = elevations
        .iter()
        .rev()
        .map(|&elevation| {
            running = larger(running, elevation);
            running
        })
        .collect();
    maxima.reverse();
    maxima
}

pub(crate) fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

pub(crate) fn smaller<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
