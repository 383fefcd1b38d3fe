//! # Display Formatting
//!
//! Turns computed amounts into the text shown next to the entry form and
//! in the cart table.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Primary currency     2 decimals          12.5      → "12.50"          │
//! │  Secondary currency   0 decimals, grouped 1234567.6 → "1,234,568"      │
//! │  Not a number         placeholder         NaN/None  → "--"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding is half away from zero on both currencies: `2.5` shows as `3`.

use crate::PLACEHOLDER;

/// Formats a primary-currency amount with two decimals.
///
/// ## Example
/// ```rust
/// use tally_core::format::format_primary;
///
/// assert_eq!(format_primary(Some(12.5)), "12.50");
/// assert_eq!(format_primary(Some(f64::NAN)), "--");
/// assert_eq!(format_primary(None), "--");
/// ```
pub fn format_primary(amount: Option<f64>) -> String {
    match amount.filter(|a| a.is_finite()) {
        Some(a) => {
            let rounded = (a * 100.0).round() / 100.0;
            // -0.00 reads badly on a receipt
            let rounded = if rounded == 0.0 { 0.0 } else { rounded };
            format!("{:.2}", rounded)
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats a secondary-currency amount with no decimals and `,` grouping.
///
/// ## Example
/// ```rust
/// use tally_core::format::format_secondary;
///
/// assert_eq!(format_secondary(Some(1234567.6)), "1,234,568");
/// assert_eq!(format_secondary(Some(999.0)), "999");
/// assert_eq!(format_secondary(None), "--");
/// ```
pub fn format_secondary(amount: Option<f64>) -> String {
    match amount.filter(|a| a.is_finite()) {
        Some(a) => group_thousands(&format!("{:.0}", a.round())),
        None => PLACEHOLDER.to_string(),
    }
}

/// Inserts `,` between every group of three integer digits.
///
/// Works on already-formatted numbers, so a sign and a fractional part are
/// left alone: `"-1234.56"` becomes `"-1,234.56"`.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if grouped.chars().all(|c| c == '0' || c == ',') {
        ""
    } else {
        sign
    };
    format!("{}{}{}", sign, grouped, frac_part)
}

/// Formats a profit selection for the cart table, e.g. `"15%"`.
pub fn format_percent(raw: &str) -> String {
    format!("{}%", raw)
}

// =============================================================================
// Unit Tests
// =============================================================================
