//! Formatting helpers for presenting scores and chart values.

/// Signed whole number with an explicit `+` for non-negative values (`+4`, `0` -> `+0`, `-8`).
pub fn format_signed(value: i32) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Chart value label: whole numbers without decimals, otherwise one decimal.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// SVG coordinate with one decimal place.
pub fn format_coord(value: f64) -> String {
    format!("{value:.1}")
}
