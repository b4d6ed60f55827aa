//! Per-field coercion policies.
//!
//! Each function takes a trimmed cell and always produces a value; text that
//! does not parse degrades to the field's default instead of failing the
//! row. Numbers are read from the start of the cell, so units or notes after
//! the number (`"120 bpm"`, `"4.5 stars"`) are ignored.

use eclectic_core::Active;

/// `Y` when blank, `N` for `N`, and anything else that is not `Y` counts as
/// inactive.
#[must_use]
pub fn coerce_active(cell: &str) -> Active {
    match cell.trim().to_uppercase().as_str() {
        "" | "Y" => Active::Yes,
        _ => Active::No,
    }
}

/// Integer tempo, 0 when unreadable.
#[must_use]
pub fn coerce_tempo(cell: &str) -> i32 {
    leading_integer(cell).unwrap_or(0)
}

/// Integer difficulty, 1 when unreadable or zero.
#[must_use]
pub fn coerce_vox_difficulty(cell: &str) -> i32 {
    leading_integer(cell).filter(|v| *v != 0).unwrap_or(1)
}

/// Decimal confidence, 0.0 when unreadable.
#[must_use]
pub fn coerce_confidence(cell: &str) -> f64 {
    leading_decimal(cell).filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse an optionally signed run of digits at the start of `text`.
fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

/// Parse a decimal number (with optional fraction and exponent) at the start
/// of `text`.
fn leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = count_digits(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
