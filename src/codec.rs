//! Lossless conversion between raw artifact bytes and the textual
//! encodings seen at the system's boundaries.
//!
//! The canonical storage form is `\x`-prefixed lowercase hex. Reads from
//! storage are not self-describing, so [`sniff_decode`] classifies the
//! returned shape in a fixed priority order: native bytes, hex marker,
//! base64, numeric byte array, then error.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::artifact::{EncodedText, RawArtifact, StoredValue};
use crate::error::{Result, TransportError};

/// Two-character marker the storage collaborator puts in front of hex text.
pub const HEX_MARKER: &str = "\\x";

/// Decode any boundary form to a [`RawArtifact`].
pub fn decode(text: &EncodedText) -> Result<RawArtifact> {
    match text {
        EncodedText::Hex(s) => decode_hex(s),
        EncodedText::Base64(s) => decode_base64(s),
        EncodedText::NativeBytes(b) => RawArtifact::new(b.clone()),
    }
}

/// Decode `\x`-prefixed hex text.
///
/// Fails on a missing marker, an odd digit count, or non-hex characters
/// after the marker. Zero decoded bytes is reported as an empty payload,
/// not a decode failure.
pub fn decode_hex(text: &str) -> Result<RawArtifact> {
    let digits = text
        .strip_prefix(HEX_MARKER)
        .ok_or_else(|| TransportError::InvalidHex(format!("missing {HEX_MARKER} marker")))?;
    let bytes = hex::decode(digits).map_err(|e| TransportError::InvalidHex(e.to_string()))?;
    RawArtifact::new(bytes)
}

/// Decode base64 text, ignoring any embedded ASCII whitespace.
pub fn decode_base64(text: &str) -> Result<RawArtifact> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(TransportError::InvalidBase64(
            "empty after whitespace stripping".into(),
        ));
    }
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| TransportError::InvalidBase64(e.to_string()))?;
    RawArtifact::new(bytes)
}

/// Encode an artifact into the canonical storage form: the hex marker
/// followed by lowercase hex digits. Deterministic, one encoding per
/// byte sequence.
pub fn encode_hex(artifact: &RawArtifact) -> String {
    format!("{HEX_MARKER}{}", hex::encode(artifact.as_bytes()))
}

/// Classify and decode a storage-layer value of unknown shape.
///
/// Priority order: a native byte sequence is taken as-is; text with the
/// hex marker decodes as hex; other text decodes as base64; a numeric
/// array is read position-wise with every element required to be a byte
/// value. Null is a missing payload.
pub fn sniff_decode(value: StoredValue) -> Result<RawArtifact> {
    match value {
        StoredValue::Bytes(bytes) => RawArtifact::new(bytes),
        StoredValue::Text(text) if text.starts_with(HEX_MARKER) => decode_hex(&text),
        StoredValue::Text(text) => decode_base64(&text),
        StoredValue::Numbers(values) => {
            let mut bytes = Vec::with_capacity(values.len());
            for (i, value) in values.iter().enumerate() {
                let byte = u8::try_from(*value).map_err(|_| {
                    TransportError::UnsupportedEncoding(format!(
                        "element {i} is not a byte value: {value}"
                    ))
                })?;
                bytes.push(byte);
            }
            RawArtifact::new(bytes)
        }
        StoredValue::Null => Err(TransportError::EmptyPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(bytes: &[u8]) -> RawArtifact {
        RawArtifact::new(bytes.to_vec()).unwrap()
    }

    #[test]
    fn decode_dispatches_every_variant() {
        let bytes = b"PK\x03\x04score data".to_vec();
        let expected = artifact(&bytes);

        let hex_form = EncodedText::Hex(format!("\\x{}", hex::encode(&bytes)));
        let base64_form = EncodedText::Base64(BASE64.encode(&bytes));
        let native_form = EncodedText::NativeBytes(bytes);

        assert_eq!(decode(&hex_form).unwrap(), expected);
        assert_eq!(decode(&base64_form).unwrap(), expected);
        assert_eq!(decode(&native_form).unwrap(), expected);

        assert!(matches!(
            decode(&EncodedText::NativeBytes(Vec::new())),
            Err(TransportError::EmptyPayload)
        ));
    }

    #[test]
    fn hex_round_trip() {
        let original = artifact(b"PK\x03\x04score data");
        let encoded = encode_hex(&original);
        assert!(encoded.starts_with("\\x"));
        assert_eq!(decode_hex(&encoded).unwrap(), original);
    }

    #[test]
    fn base64_round_trip() {
        let original = artifact(b"PK\x03\x04score data");
        let encoded = BASE64.encode(original.as_bytes());
        assert_eq!(decode_base64(&encoded).unwrap(), original);
    }

    #[test]
    fn hex_without_marker_fails() {
        assert!(matches!(
            decode_hex("504b0304"),
            Err(TransportError::InvalidHex(_))
        ));
    }

    #[test]
    fn hex_with_odd_digit_count_fails() {
        assert!(matches!(
            decode_hex("\\x504b030"),
            Err(TransportError::InvalidHex(_))
        ));
    }

    #[test]
    fn hex_with_non_hex_characters_fails() {
        assert!(matches!(
            decode_hex("\\x50zz0304"),
            Err(TransportError::InvalidHex(_))
        ));
    }

    #[test]
    fn base64_ignores_whitespace() {
        let decoded = decode_base64("UEsD\n BA ==").unwrap();
        assert_eq!(decoded.as_bytes(), b"PK\x03\x04");
    }

    #[test]
    fn base64_rejects_bad_alphabet_and_blank_input() {
        assert!(matches!(
            decode_base64("UEs!BA=="),
            Err(TransportError::InvalidBase64(_))
        ));
        assert!(matches!(
            decode_base64("  \n "),
            Err(TransportError::InvalidBase64(_))
        ));
    }

    #[test]
    fn zero_decoded_bytes_is_empty_payload() {
        assert!(matches!(
            decode_hex("\\x"),
            Err(TransportError::EmptyPayload)
        ));
    }

    #[test]
    fn sniff_priority_covers_every_shape() {
        let bytes = b"PK\x03\x04abc".to_vec();
        let from_bytes = sniff_decode(StoredValue::Bytes(bytes.clone())).unwrap();
        let from_hex =
            sniff_decode(StoredValue::Text(format!("\\x{}", hex::encode(&bytes)))).unwrap();
        let from_base64 = sniff_decode(StoredValue::Text(BASE64.encode(&bytes))).unwrap();
        let from_numbers =
            sniff_decode(StoredValue::Numbers(bytes.iter().map(|b| *b as i64).collect())).unwrap();

        assert_eq!(from_bytes, from_hex);
        assert_eq!(from_hex, from_base64);
        assert_eq!(from_base64, from_numbers);
    }

    #[test]
    fn sniff_rejects_out_of_range_numbers() {
        assert!(matches!(
            sniff_decode(StoredValue::Numbers(vec![80, 75, 300])),
            Err(TransportError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            sniff_decode(StoredValue::Numbers(vec![80, -1])),
            Err(TransportError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn sniff_null_is_empty_payload() {
        assert!(matches!(
            sniff_decode(StoredValue::Null),
            Err(TransportError::EmptyPayload)
        ));
    }
}
