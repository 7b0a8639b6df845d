//! # Duration Formatting Module
//!
//! Renders a count of seconds as a zero-padded `HH:MM:SS` clock string,
//! the format expected by the `seconds_to_time` template filter.
//!
//! ## Example
//!
//! ```rust
//! use template_filters::duration::format_duration;
//!
//! assert_eq!(format_duration(3661), "01:01:01");
//! ```

/// Formats a number of seconds as a zero-padded `HH:MM:SS` string.
///
/// Hours are not capped: durations of 100 hours or more widen the hour
/// field past two digits instead of truncating or wrapping.
///
/// # Arguments
/// * `seconds` - Total duration in whole seconds
///
/// # Examples
/// ```
/// use template_filters::duration::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(61), "00:01:01");
/// assert_eq!(format_duration(360_000), "100:00:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
