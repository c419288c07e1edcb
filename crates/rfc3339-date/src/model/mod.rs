//! Data model types.

pub mod timestamp;

pub use timestamp::Timestamp;
