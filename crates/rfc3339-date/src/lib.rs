//! Strict RFC 3339 timestamps for JSON schemas.
//!
//! This crate provides [`Timestamp`], a value type holding an absolute instant
//! and the UTC offset it was written in. Every textual form that enters or
//! leaves a `Timestamp` is strict RFC 3339: construction and JSON decoding
//! reject anything else, and rendering never produces anything else.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3339_date::{Timestamp, decode_json, encode_json};
//!
//! let ts: Timestamp = "2023-06-15T14:30:00+02:00".parse().unwrap();
//! assert_eq!(ts.to_string(), "2023-06-15T14:30:00+02:00");
//!
//! let bytes = encode_json(&ts);
//! assert_eq!(bytes, b"\"2023-06-15T14:30:00+02:00\"");
//! assert_eq!(decode_json(&bytes).unwrap(), ts);
//!
//! // A number is not a timestamp, and neither is a loosely formatted date.
//! assert!(decode_json(b"1686839400").unwrap_err().is_json());
//! assert!(decode_json(b"\"15 June 2023\"").unwrap_err().is_format());
//! ```
//!
//! # Grammar
//!
//! `YYYY-MM-DDThh:mm:ss[.fraction](Z|+hh:mm|-hh:mm)`, with an uppercase `T`
//! and `Z`. Leap seconds, a space separator, lowercase letters, missing offsets
//! and surrounding whitespace are all rejected. Fractions keep nanosecond
//! precision; extra digits are truncated.
//!
//! # Modules
//!
//! - [`model`]: The [`Timestamp`] value type
//! - [`codec`]: JSON encoding/decoding and serde integration
//! - [`util`]: RFC 3339 grammar and calendar arithmetic
//! - [`error`]: Error types
//!
//! # Concurrency
//!
//! `Timestamp` is `Copy + Send + Sync`. [`Timestamp::decode_json_into`] takes
//! `&mut self`, so decoding into one instance from several threads needs the
//! caller's own synchronization.

pub mod codec;
pub mod error;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use codec::{decode_json, encode_json};
pub use error::{DecodeError, FormatError, FormatErrorKind};
pub use model::Timestamp;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
