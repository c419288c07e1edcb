//! Encoding/decoding of timestamps across serialization boundaries.

pub mod json;

pub use json::{decode_json, encode_json};
