use serde::Serialize;

/// Token delimiter for elevation lists.
pub const DELIMITER: char = ',';

/// Elevations recovered from free-form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub elevations: Vec<f64>,
    /// At least one non-blank token was dropped (non-numeric, non-finite or negative).
    pub had_invalid: bool,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }
}

/// Splits `text` on commas and keeps every token that reads as a finite,
/// non-negative number, in input order.
///
/// Blank tokens are skipped silently. Anything else that does not qualify is
/// dropped and flagged through [`ParseResult::had_invalid`]; parsing never stops
/// early and never fails.
pub fn parse(text: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut rejected = 0usize;

    for token in text.split(DELIMITER).map(str::trim) {
        if token.is_empty() {
            continue;
        }

        match parse_elevation(token) {
            Some(value) => result.elevations.push(value),
            None => {
                log::trace!("Rejected token {:?}", token);
                rejected += 1;
            }
        }
    }

    result.had_invalid = rejected > 0;
    log::debug!(
        "Parsed {} elevations ({} rejected)",
        result.elevations.len(),
        rejected
    );
    result
}

fn parse_elevation(token: &str) -> Option<f64> {
    let value = match parse_radix_literal(token) {
        Some(radix_value) => radix_value?,
        None => token.parse().ok()?,
    };
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // Folds -0 into 0
    Some(value + 0.0)
}

/// Unsigned `0x`/`0o`/`0b` integer literals. `None` when `token` carries no
/// radix prefix, `Some(None)` when it does but the digits are bad.
fn parse_radix_literal(token: &str) -> Option<Option<f64>> {
    let prefix = token.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &token[2..];
    if digits.starts_with('+') {
        return Some(None);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .ok()
            .map(|value| value as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_input() {
        let result = parse("3, -1, abc, 5,, 2");
        assert_eq!(result.elevations, vec![3.0, 5.0, 2.0]);
        assert!(result.had_invalid);
    }

    #[test]
    fn test_clean_input() {
        let result = parse("0,4,0,0,0,6,0,6,4,0");
        assert_eq!(
            result.elevations,
            vec![0.0, 4.0, 0.0, 0.0, 0.0, 6.0, 0.0, 6.0, 4.0, 0.0]
        );
        assert!(!result.had_invalid);
    }

    #[test]
    fn test_blank_tokens_are_not_invalid() {
        let result = parse(" , ,\t,  ");
        assert!(result.is_empty());
        assert!(!result.had_invalid);

        let result = parse("");
        assert!(result.is_empty());
        assert!(!result.had_invalid);
    }

    #[test]
    fn test_fractions_and_whitespace() {
        let result = parse("  1.5 ,2\n, 0.25");
        assert_eq!(result.elevations, vec![1.5, 2.0, 0.25]);
        assert!(!result.had_invalid);
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = parse("NaN, inf, -inf, infinity, 1");
        assert_eq!(result.elevations, vec![1.0]);
        assert!(result.had_invalid);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let result = parse("-0");
        assert_eq!(result.elevations.len(), 1);
        assert!(result.elevations[0].is_sign_positive());
        assert!(!result.had_invalid);
    }

    #[test]
    fn test_radix_literals() {
        let result = parse("0x10, 0B11, 0o7, 0XfF");
        assert_eq!(result.elevations, vec![16.0, 3.0, 7.0, 255.0]);
        assert!(!result.had_invalid);

        let result = parse("0x, 0b2, -0x10, +0x1, 0x+1, 0o");
        assert!(result.is_empty());
        assert!(result.had_invalid);
    }

    #[test]
    fn test_only_invalid() {
        let result = parse("x, -2");
        assert!(result.is_empty());
        assert!(result.had_invalid);
    }
}
