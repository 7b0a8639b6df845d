//! # Byte Size Formatting Module
//!
//! Renders byte counts as human-readable strings with a binary unit
//! suffix, the format produced by the `human_readable` template filter.
//!
//! ## Example
//!
//! ```rust
//! use template_filters::bytesize::{format_bytes, format_bytes_with};
//!
//! assert_eq!(format_bytes(1024.0), "1.00 KB");
//! assert_eq!(format_bytes_with(1536.0, 1), "1.5 KB");
//! ```

/// Number of fixed decimal digits used when the caller does not ask for
/// a specific precision.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Binary unit ladder, 1024 bytes per step.
const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count with the default precision of two decimal places.
///
/// # Examples
/// ```
/// use template_filters::bytesize::format_bytes;
///
/// assert_eq!(format_bytes(0.0), "0.00 B");
/// assert_eq!(format_bytes(1536.0), "1.50 KB");
/// ```
pub fn format_bytes(size: f64) -> String {
    format_bytes_with(size, DEFAULT_DECIMAL_PLACES)
}

/// Formats a byte count as a human-readable string with the given number
/// of fixed decimal digits.
///
/// The value is divided by 1024 until it drops below 1024 or the unit
/// ladder is exhausted. Sizes of 1024 PB and above saturate: they are
/// rendered as an over-1024 PB value rather than in a larger unit.
///
/// # Arguments
/// * `size` - Byte count; callers are expected to pass a non-negative,
///   finite value
/// * `decimal_places` - Number of fixed decimal digits in the output
///
/// # Examples
/// ```
/// use template_filters::bytesize::format_bytes_with;
///
/// assert_eq!(format_bytes_with(1023.0, 2), "1023.00 B");
/// assert_eq!(format_bytes_with(1_048_576.0, 0), "1 MB");
/// ```
pub fn format_bytes_with(size: f64, decimal_places: usize) -> String {
    let mut value = size;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.*} {}", decimal_places, value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.*} {}", decimal_places, value, UNITS[UNITS.len() - 1])
}
