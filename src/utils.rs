/// Converts a character to a string, escaping if necessary
pub fn format_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        _ => c.to_string(),
    }
}

/// Returns the number of decimal digits in the string representation of a
/// non-negative integer, ignoring any sign
pub fn digit_count(digits: &str) -> usize {
    digits.trim_start_matches('-').len()
}
