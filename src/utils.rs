//! Shared helpers used across the crate.

/// Coerces a raw text cell to a number.
///
/// Surrounding whitespace is stripped before parsing. Text that does not
/// parse as a number (including empty cells and literal `NaN`) yields
/// `None`, the "unknown" sentinel that never satisfies a comparison.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}
