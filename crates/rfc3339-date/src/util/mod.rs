//! Utility modules for RFC 3339 handling.

pub mod datetime;

pub use datetime::{civil_datetime, format_datetime_rfc3339, parse_datetime_rfc3339, CivilDateTime};
