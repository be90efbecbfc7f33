//! Plain-text rendition of a skyline and the water it holds.
//!
//! Layers are drawn bottom-up per column: bar cells (`#`), then water cells
//! (`~`), then empty space (`.`). Fractional heights round up to whole cells.
//! Profiles taller than [`MAX_ROWS`] are scaled down so one row covers several
//! units, and a scale line is added under the caption.

const BAR: char = '#';
const WATER: char = '~';
const EMPTY: char = '.';
const AXIS_LABEL: &str = "Block index";

/// Tallest diagram drawn, in rows.
pub const MAX_ROWS: usize = 20;

pub fn render_diagram(elevations: &[f64], water_at: &[f64]) -> String {
    if elevations.is_empty() {
        return String::new();
    }

    let surfaces: Vec<(f64, f64)> = elevations
        .iter()
        .enumerate()
        .map(|(i, &elevation)| {
            let water = water_at.get(i).copied().unwrap_or(0.0);
            (elevation, elevation + water)
        })
        .collect();

    let highest = surfaces
        .iter()
        .map(|&(_, surface)| surface)
        .filter(|s| s.is_finite())
        .fold(0.0f64, f64::max);
    let unit = if highest > MAX_ROWS as f64 {
        highest / MAX_ROWS as f64
    } else {
        1.0
    };

    let columns: Vec<(usize, usize)> = surfaces
        .iter()
        .map(|&(bar, surface)| (cells(bar, unit), cells(surface, unit)))
        .collect();

    let top = columns.iter().map(|&(_, surface)| surface).max().unwrap_or(0);
    let cell_width = elevations.len().to_string().len();
    let label_width = top.to_string().len();

    let mut out = String::new();
    for level in (1..=top).rev() {
        out.push_str(&format!("{:>label_width$} |", level));
        for &(bar, surface) in &columns {
            let symbol = if level <= bar {
                BAR
            } else if level <= surface {
                WATER
            } else {
                EMPTY
            };
            out.push(' ');
            out.extend(std::iter::repeat(symbol).take(cell_width));
        }
        out.push('\n');
    }

    let row_width = columns.len() * (cell_width + 1);
    out.push_str(&format!("{:>label_width$} +{}\n", "", "-".repeat(row_width)));

    out.push_str(&format!("{:>label_width$}  ", ""));
    for position in 1..=columns.len() {
        out.push_str(&format!(" {:>cell_width$}", position));
    }
    out.push('\n');
    out.push_str(&format!("{:>label_width$}   {}\n", "", AXIS_LABEL));

    if unit > 1.0 {
        log::debug!("Scaled diagram to {} units per row", unit);
        out.push_str(&format!(
            "{:>label_width$}   1 row = {} units\n",
            "",
            format_unit(unit)
        ));
    }
    out
}

/// Whole rows covered by `height`, never more than [`MAX_ROWS`].
fn cells(height: f64, unit: f64) -> usize {
    let rows = height / unit;
    if rows.is_finite() && rows > 0.0 {
        (rows.ceil() as usize).min(MAX_ROWS)
    } else {
        0
    }
}

fn format_unit(unit: f64) -> String {
    if unit >= 1e6 {
        format!("{:e}", unit)
    } else {
        format!("{}", unit)
    }
}
