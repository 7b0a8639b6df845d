#![doc(html_root_url = "https://docs.rs/template-filters/0.1.0")]
//! Template Filters - formatting filters for configuration-templating hosts
//!
//! This crate provides the small formatting helpers behind two template
//! filters used by configuration-automation tooling: `seconds_to_time`
//! renders a duration in seconds as a zero-padded `HH:MM:SS` clock
//! string, and `human_readable` renders a byte count with a binary unit
//! suffix (B through PB) and a configurable number of decimal places.
//!
//! The typed formatters are available directly, and the [`registry`]
//! module exposes the name-to-callable table a templating host needs to
//! wire the filters in.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use template_filters::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Typed entry points
//!     assert_eq!(format_duration(3661), "01:01:01");
//!     assert_eq!(format_bytes(1536.0), "1.50 KB");
//!
//!     // Host-facing entry point, taking dynamic template values
//!     let rendered = apply("human_readable", &json!(1536), &[json!(1)])?;
//!     assert_eq!(rendered, "1.5 KB");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! The crate uses a custom [`Error`] type with two failure modes:
//!
//! ```rust
//! use serde_json::json;
//! use template_filters::{registry::apply, Error};
//!
//! // Non-numeric input fails with InvalidInput
//! let err = apply("seconds_to_time", &json!("soon"), &[]).unwrap_err();
//! assert!(matches!(err, Error::InvalidInput(_)));
//!
//! // Unregistered names fail with UnknownFilter
//! let err = apply("no_such_filter", &json!(1), &[]).unwrap_err();
//! assert!(matches!(err, Error::UnknownFilter(_)));
//! ```
//!
//! Errors propagate unmodified to the host, which is responsible for
//! surfacing them to the end user. No retries, no recovery: each filter
//! call either fully succeeds or fails immediately.
//!
//! # Thread Safety
//!
//! Both formatters are pure functions, and the filter table is built
//! once and never mutated afterwards. Every public function is safe to
//! call concurrently from multiple threads without coordination.

pub mod bytesize;
pub mod duration;
pub mod error;
pub mod registry;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::bytesize::{format_bytes, format_bytes_with};
    pub use crate::duration::format_duration;
    pub use crate::registry::{apply, filter_names, lookup, FilterFn};
    pub use crate::Error;
    pub use crate::Result;
}
