//! JSON encoding/decoding for [`Timestamp`].
//!
//! A timestamp is always a JSON string holding its RFC 3339 form, never a number
//! or an object. Schemas embedding a `Timestamp` get the same strict validation
//! through the [`Serialize`]/[`Deserialize`] impls.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::DecodeError;
use crate::model::Timestamp;

/// Encodes a timestamp as a JSON string literal.
pub fn encode_json(value: &Timestamp) -> Vec<u8> {
    serde_json::Value::String(value.to_rfc3339())
        .to_string()
        .into_bytes()
}

/// Decodes a JSON string literal holding an RFC 3339 date-time.
///
/// Input that is not a JSON string fails with [`DecodeError::Json`]; a string
/// that is not RFC 3339 fails with [`DecodeError::Format`].
pub fn decode_json(data: &[u8]) -> Result<Timestamp, DecodeError> {
    let text: String = serde_json::from_slice(data).inspect_err(|err| {
        tracing::debug!(error = %err, kind = "json", "rejected timestamp");
    })?;

    let value = Timestamp::parse(&text).inspect_err(|err| {
        tracing::debug!(error = %err, kind = "format", "rejected timestamp");
    })?;

    Ok(value)
}

impl Timestamp {
    /// Decodes JSON into `self`, replacing the whole value.
    ///
    /// On error `self` is left unchanged.
    pub fn decode_json_into(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        *self = decode_json(data)?;
        Ok(())
    }

    /// Encodes `self` as a JSON string literal.
    pub fn encode_json(&self) -> Vec<u8> {
        encode_json(self)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an RFC 3339 date-time string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Timestamp::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}
