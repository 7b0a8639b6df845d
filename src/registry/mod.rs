//! # Filter Registry Module
//!
//! The registration surface exposed to the host templating engine: a
//! constant table mapping filter names to callables, plus the adapters
//! that coerce dynamic template values into the typed formatters.
//!
//! The table is built once on first access and never mutated afterwards,
//! so lookups are safe from any thread without coordination.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use template_filters::registry::apply;
//!
//! let rendered = apply("human_readable", &json!(1536), &[json!(1)]).unwrap();
//! assert_eq!(rendered, "1.5 KB");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::bytesize::{self, DEFAULT_DECIMAL_PLACES};
use crate::duration;
use crate::{Error, Result};

/// A filter callable: the piped template value plus positional arguments.
pub type FilterFn = fn(&Value, &[Value]) -> Result<String>;

static FILTERS: Lazy<HashMap<&'static str, FilterFn>> = Lazy::new(|| {
    let mut filters: HashMap<&'static str, FilterFn> = HashMap::new();
    filters.insert("seconds_to_time", seconds_to_time as FilterFn);
    filters.insert("human_readable", human_readable as FilterFn);
    filters
});

/// Looks up a filter callable by its registered name.
pub fn lookup(name: &str) -> Option<FilterFn> {
    FILTERS.get(name).copied()
}

/// Returns the registered filter names, sorted for stable iteration.
pub fn filter_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FILTERS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Looks up a filter by name and applies it to the given value.
///
/// # Arguments
/// * `name` - Registered filter name, e.g. `"seconds_to_time"`
/// * `value` - The piped template value
/// * `args` - Positional filter arguments
///
/// # Returns
/// The rendered string, `Error::UnknownFilter` for an unregistered name,
/// or `Error::InvalidInput` when the value cannot be coerced.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use template_filters::registry::apply;
///
/// assert_eq!(apply("seconds_to_time", &json!(61), &[]).unwrap(), "00:01:01");
/// ```
pub fn apply(name: &str, value: &Value, args: &[Value]) -> Result<String> {
    log::trace!("applying filter {} to {}", name, value);
    let filter = lookup(name).ok_or_else(|| Error::unknown_filter(name))?;
    filter(value, args)
}

/// Adapter for the `seconds_to_time` filter.
fn seconds_to_time(value: &Value, _args: &[Value]) -> Result<String> {
    Ok(duration::format_duration(seconds_input(value)?))
}

/// Adapter for the `human_readable` filter. The optional first argument
/// is the decimal-places count, defaulting to two.
fn human_readable(value: &Value, args: &[Value]) -> Result<String> {
    let size = size_input(value)?;
    let decimal_places = match args.first() {
        Some(arg) => decimal_places_input(arg)?,
        None => DEFAULT_DECIMAL_PLACES,
    };
    Ok(bytesize::format_bytes_with(size, decimal_places))
}

fn seconds_input(value: &Value) -> Result<u64> {
    if let Some(seconds) = value.as_u64() {
        return Ok(seconds);
    }
    // Templating hosts commonly hand whole numbers over as floats.
    if let Some(float) = value.as_f64() {
        if float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 {
            return Ok(float as u64);
        }
    }
    log::debug!("seconds_to_time rejected input {}", value);
    Err(Error::invalid_input(format!(
        "seconds_to_time expects a non-negative whole number of seconds, got {}",
        value_kind(value)
    )))
}

fn size_input(value: &Value) -> Result<f64> {
    if let Some(size) = value.as_f64() {
        if size.is_finite() && size >= 0.0 {
            return Ok(size);
        }
    }
    log::debug!("human_readable rejected input {}", value);
    Err(Error::invalid_input(format!(
        "human_readable expects a non-negative number of bytes, got {}",
        value_kind(value)
    )))
}

fn decimal_places_input(value: &Value) -> Result<usize> {
    match value.as_u64() {
        Some(places) => Ok(places as usize),
        None => Err(Error::invalid_input(format!(
            "decimal_places must be a non-negative integer, got {}",
            value_kind(value)
        ))),
    }
}

/// Describes a value for error messages: the JSON type name, with the
/// rendered value appended for numbers since those carry the detail that
/// matters (negative, fractional, non-finite).
fn value_kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("the number {}", n),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
