//! Decoding raw JSON into the generic value tree.
//!
//! Thin pass-through to serde_json. The crate enables the
//! `arbitrary_precision` feature, so decoded numbers keep their source text
//! and both integer and float extraction stay exact until the caller asks
//! for a conversion.

use serde_json::Value;

/// Decode a JSON document from a string slice.
pub fn decode_str(cont: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(cont)
}

/// Decode a JSON document from a byte slice.
pub fn decode_bytes(cont: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(cont)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_str() {
        let doc = decode_str(r#"{"a": [1, 2], "b": null}"#).unwrap();
        assert_eq!(doc, json!({"a": [1, 2], "b": null}));
    }

    #[test]
    fn test_decode_bytes() {
        let doc = decode_bytes(br#"[true, "x"]"#).unwrap();
        assert_eq!(doc, json!([true, "x"]));
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_str("{not json").is_err());
        assert!(decode_bytes(b"").is_err());
    }

    #[test]
    fn test_decode_preserves_number_text() {
        // Larger than f64 can hold exactly; the text must survive decoding.
        let doc = decode_str(r#"{"n": 10000000000000000001}"#).unwrap();
        let num = doc["n"].as_number().unwrap();
        assert_eq!(num.to_string(), "10000000000000000001");

        let doc = decode_str(r#"{"n": 0.1000000000000000055511151231257827}"#).unwrap();
        let num = doc["n"].as_number().unwrap();
        assert_eq!(num.to_string(), "0.1000000000000000055511151231257827");
    }
}
