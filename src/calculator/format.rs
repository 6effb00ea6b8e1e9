use super::decimal::{Decimal, Rounding};

/// Results with more integer digits than this are shown in scientific
/// notation
pub const SCIENTIFIC_THRESHOLD: i64 = 15;

/// Significant digits in a scientific mantissa: one before the point and
/// fourteen after it
const MANTISSA_DIGITS: u32 = 15;

const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// Formats a value for display. Large values use scientific notation with
/// a fourteen-digit fraction, rounded half-up. All others use grouped
/// notation with at most fraction_digits decimal places, rounded
/// half-even, with trailing zeros dropped.
pub fn format(value: &Decimal, fraction_digits: u32) -> String {
    if value.integer_digits() > SCIENTIFIC_THRESHOLD {
        scientific(value)
    } else {
        grouped(value, fraction_digits)
    }
}

/// Formats a value as "d.ddddddddddddddE<exponent>"
fn scientific(value: &Decimal) -> String {
    let mut exponent = value.integer_digits() - 1;
    let discarded = value.precision().saturating_sub(MANTISSA_DIGITS);

    let mantissa = Decimal::from_parts(value.unscaled().clone(), discarded)
        .round(0, Rounding::HalfUp)
        .to_string();
    let mut digits = mantissa.trim_start_matches('-').to_string();

    // Rounding 999...9 up carries into an extra digit
    if digits.len() > MANTISSA_DIGITS as usize {
        digits.truncate(MANTISSA_DIGITS as usize);
        exponent += 1;
    }

    let sign = if value.is_negative() { "-" } else { "" };
    let (lead, rest) = digits.split_at(1);
    format!("{}{}{}{}E{}", sign, lead, DECIMAL_SEPARATOR, rest, exponent)
}

/// Formats a value with grouped thousands in the integer part
fn grouped(value: &Decimal, fraction_digits: u32) -> String {
    let rounded = value
        .round(fraction_digits, Rounding::HalfEven)
        .strip_trailing_zeros(0);

    let plain = rounded.to_string();
    let digits = plain.trim_start_matches('-');
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let mut s = String::new();
    if rounded.is_negative() {
        s.push('-');
    }
    s.push_str(&group_thousands(int));
    if let Some(frac) = frac {
        s.push(DECIMAL_SEPARATOR);
        s.push_str(frac);
    }

    s
}

/// Inserts a grouping separator between every three digits, counting from
/// the right
fn group_thousands(int: &str) -> String {
    let mut s = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            s.push(GROUPING_SEPARATOR);
        }
        s.push(c);
    }
    s
}
