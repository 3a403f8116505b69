//! Error taxonomy for the transport layer.
//!
//! Every failure carries a stable machine-readable code for the JSON error
//! body at the HTTP boundary, plus the HTTP status class it maps to. All
//! failures are local to one request; nothing here is retried internally.

use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Failures along the ingest and retrieval paths.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Hex text was missing the `\x` marker, had an odd digit count, or
    /// contained non-hex characters.
    #[error("malformed hex text: {0}")]
    InvalidHex(String),

    /// Base64 text was empty after whitespace stripping or contained
    /// characters outside the base64 alphabet.
    #[error("malformed base64 text: {0}")]
    InvalidBase64(String),

    /// The stored value was null or decoded to zero bytes. An empty buffer
    /// can never be a valid archive, so this indicates a missing row value
    /// rather than malformed text.
    #[error("artifact payload is empty or missing")]
    EmptyPayload,

    /// Leading bytes did not match any recognized ZIP signature. The
    /// dominant real-world failure: the user picked the wrong file.
    #[error("payload is not an MXL (ZIP) archive")]
    NotAZipArchive,

    /// The storage layer returned a shape no sniffing rule recognizes,
    /// which indicates a storage-side contract change.
    #[error("unsupported stored encoding: {0}")]
    UnsupportedEncoding(String),

    /// A stored value failed to decode on the retrieval path. The text
    /// is server-side data the client cannot fix, so unlike the upload
    /// decode failures this is never a client error.
    #[error("stored artifact is corrupt: {0}")]
    CorruptStoredValue(String),

    /// The storage collaborator itself failed.
    #[error("storage failure: {0}")]
    Store(#[source] anyhow::Error),
}

impl TransportError {
    /// Stable error code for the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::InvalidHex(_) => "invalid_hex",
            TransportError::InvalidBase64(_) => "invalid_base64",
            TransportError::EmptyPayload => "empty_payload",
            TransportError::NotAZipArchive => "payload_not_mxl_zip",
            TransportError::UnsupportedEncoding(_) => "server_error",
            TransportError::CorruptStoredValue(_) => "server_error",
            TransportError::Store(_) => "server_error",
        }
    }

    /// HTTP status the boundary should answer with.
    ///
    /// Client-fixable failures are 400-class; a missing payload is 404;
    /// storage contract breaks and collaborator failures are 500.
    pub fn http_status(&self) -> u16 {
        match self {
            TransportError::InvalidHex(_)
            | TransportError::InvalidBase64(_)
            | TransportError::NotAZipArchive => 400,
            TransportError::EmptyPayload => 404,
            TransportError::UnsupportedEncoding(_)
            | TransportError::CorruptStoredValue(_)
            | TransportError::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(TransportError::NotAZipArchive.code(), "payload_not_mxl_zip");
        assert_eq!(
            TransportError::InvalidBase64("x".into()).code(),
            "invalid_base64"
        );
        assert_eq!(TransportError::EmptyPayload.code(), "empty_payload");
        assert_eq!(
            TransportError::UnsupportedEncoding("x".into()).code(),
            "server_error"
        );
        assert_eq!(
            TransportError::CorruptStoredValue("x".into()).code(),
            "server_error"
        );
    }

    #[test]
    fn status_classes() {
        assert_eq!(TransportError::NotAZipArchive.http_status(), 400);
        assert_eq!(TransportError::EmptyPayload.http_status(), 404);
        assert_eq!(
            TransportError::Store(anyhow::anyhow!("down")).http_status(),
            500
        );
    }
}
