//! Number formatting for table cells

/// Formats an integer with `separator` between groups of three digits
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_grouped;
///
/// assert_eq!(format_grouped(1234567, ' '), "1 234 567");
/// ```
pub fn format_grouped(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    // Insert a separator every 3 digits counting from the end
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Formats an integer with comma thousands separators
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_thousands;
///
/// assert_eq!(format_thousands(1000000), "1,000,000");
/// ```
pub fn format_thousands(value: u64) -> String {
    format_grouped(value, ',')
}
