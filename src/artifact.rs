//! Data model for artifacts crossing the transport layer.

use crate::error::{Result, TransportError};

/// MIME type for compressed MusicXML archives.
pub const MXL_MIME_TYPE: &str = "application/vnd.recordare.musicxml";

/// Filename stem used when a score has no usable title.
pub const DEFAULT_FILENAME_STEM: &str = "score";

/// One score archive's exact binary content.
///
/// Immutable once constructed and always non-empty; any transform produces
/// a new value. Lives for a single ingest or retrieval call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArtifact {
    bytes: Vec<u8>,
}

impl RawArtifact {
    /// Wrap a byte buffer, rejecting empty input.
    ///
    /// An empty buffer can never be a valid ZIP container, so zero bytes
    /// here means a null or missing stored value, not an empty archive.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(TransportError::EmptyPayload);
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        // Guaranteed by construction, kept for the len/is_empty pairing.
        self.bytes.is_empty()
    }

    /// Consume the artifact, yielding the bytes for the HTTP response body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// The textual or near-binary forms an artifact arrives in at a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedText {
    /// `\x`-prefixed lowercase hex, the canonical storage form.
    Hex(String),
    /// Base64 text, the client upload form.
    Base64(String),
    /// Already-raw bytes, no decode needed.
    NativeBytes(Vec<u8>),
}

/// Runtime shapes the storage collaborator may return for the artifact
/// column. The collaborator does not declare which one it used, so the
/// codec's sniffing rule classifies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    /// Hex-marker-prefixed or base64 text.
    Text(String),
    /// A native byte sequence.
    Bytes(Vec<u8>),
    /// An array of byte-valued integers, decoded position-wise.
    Numbers(Vec<i64>),
    /// No value stored.
    Null,
}

/// What the HTTP boundary needs to serve an artifact: MIME type and a
/// suggested filename. Attached at response time, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDescriptor {
    pub mime_type: &'static str,
    pub suggested_filename: String,
}

impl ContentDescriptor {
    /// Build a descriptor from the score's title metadata.
    ///
    /// Falls back to a default stem when the title is absent or blank.
    pub fn for_title(title: Option<&str>) -> Self {
        let stem = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_FILENAME_STEM,
        };
        Self {
            mime_type: MXL_MIME_TYPE,
            suggested_filename: format!("{stem}.mxl"),
        }
    }

    /// Render the inline content-disposition header value with a
    /// percent-encoded filename.
    pub fn content_disposition(&self) -> String {
        format!(
            "inline; filename*=UTF-8''{}",
            urlencoding::encode(&self.suggested_filename)
        )
    }

    /// Cache directive for the response. The stored artifact can change
    /// between requests, so intermediaries must not keep a copy.
    pub fn cache_control(&self) -> &'static str {
        "no-store"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_rejected() {
        assert!(matches!(
            RawArtifact::new(Vec::new()),
            Err(TransportError::EmptyPayload)
        ));
    }

    #[test]
    fn descriptor_falls_back_on_blank_title() {
        assert_eq!(
            ContentDescriptor::for_title(None).suggested_filename,
            "score.mxl"
        );
        assert_eq!(
            ContentDescriptor::for_title(Some("  ")).suggested_filename,
            "score.mxl"
        );
        assert_eq!(
            ContentDescriptor::for_title(Some("Gymnopédie No. 1")).suggested_filename,
            "Gymnopédie No. 1.mxl"
        );
    }

    #[test]
    fn disposition_is_percent_encoded() {
        let d = ContentDescriptor::for_title(Some("Air on G"));
        assert_eq!(
            d.content_disposition(),
            "inline; filename*=UTF-8''Air%20on%20G.mxl"
        );
        assert_eq!(d.cache_control(), "no-store");
    }
}
