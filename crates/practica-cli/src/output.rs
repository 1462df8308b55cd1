//! CLI output formatting helpers.

use std::time::Duration;

use num_bigint::BigUint;

/// Format a `BigUint` for display.
///
/// Without `verbose`, values longer than 80 digits are elided to the
/// first and last 30 with a digit count, so huge Fibonacci numbers do
/// not flood the terminal.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if verbose || s.len() <= 80 {
        s
    } else {
        format!("{}...{} ({} digits)", &s[..30], &s[s.len() - 30..], s.len())
    }
}

/// Format a duration for display, picking a unit matching its size.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format an integer with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
