//! Payload codecs
//!
//! This module converts typed values to and from the string representation
//! stored in the distributed cache. The codec is picked statically at the
//! call site: structured types go through [`JsonCodec`], plain text goes
//! through [`TextCodec`] untouched, so tokens and pre-rendered fragments
//! are cached without quoting overhead.

use crate::errors::CacheError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Converts a value of one type to and from its cached string form.
pub trait Codec {
    type Value;

    fn encode(value: &Self::Value) -> Result<String, CacheError>;
    fn decode(raw: &str) -> Result<Self::Value, CacheError>;
}

/// JSON codec for structured values.
pub struct JsonCodec<T>(PhantomData<T>);

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn encode(value: &T) -> Result<String, CacheError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(raw: &str) -> Result<T, CacheError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Identity codec for plain text values.
pub struct TextCodec;

impl Codec for TextCodec {
    type Value = String;

    fn encode(value: &String) -> Result<String, CacheError> {
        Ok(value.clone())
    }

    fn decode(raw: &str) -> Result<String, CacheError> {
        Ok(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ReservationStatus {
        id: u32,
        name: String,
    }

    #[test]
    fn json_codec_round_trips_structured_values() {
        let status = ReservationStatus {
            id: 3,
            name: "Confirmed".to_string(),
        };

        let encoded = JsonCodec::<ReservationStatus>::encode(&status).unwrap();
        let decoded = JsonCodec::<ReservationStatus>::decode(&encoded).unwrap();

        assert_eq!(decoded, status);
    }

    #[test]
    fn text_codec_is_identity() {
        let token = "eyJhbGciOiJIUzI1NiJ9.payload".to_string();

        let encoded = TextCodec::encode(&token).unwrap();
        assert_eq!(encoded, token, "text must not gain quoting");

        let decoded = TextCodec::decode(&encoded).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn json_codec_rejects_malformed_payloads() {
        let result = JsonCodec::<ReservationStatus>::decode("{not valid json");
        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }

    #[test]
    fn json_codec_rejects_schema_mismatch() {
        let result = JsonCodec::<ReservationStatus>::decode(r#"{"unexpected": true}"#);
        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }
}
