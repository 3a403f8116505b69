//! Magic-number and EOCD completeness checks over an in-memory buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, TransportError};

/// End of Central Directory signature (`PK\x05\x06`).
pub const EOCD_SIGNATURE: &[u8] = b"PK\x05\x06";

/// Fixed-size portion of the EOCD record, including the signature and the
/// trailing comment-length field.
pub const EOCD_SIZE: usize = 22;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for the EOCD record.
const MAX_COMMENT_SIZE: usize = 65535;

/// Leading signatures accepted at ingest: local file header, empty
/// archive, and spanned-archive marker.
const MAGIC_SIGNATURES: [&[u8]; 3] = [b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"];

/// Outcome of one EOCD completeness check. Diagnostic only, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipIntegrityReport {
    /// Whether the buffer is structurally complete.
    pub ok: bool,
    /// Offset of the EOCD signature, when one was found in the window.
    pub eocd_offset: Option<usize>,
    /// Declared comment length from the EOCD record.
    pub comment_len: u16,
    /// Bytes missing from the end of a truncated buffer.
    pub missing_bytes: usize,
    /// Bytes present beyond the declared end of the archive. Trailing
    /// junk does not invalidate the archive, but the exact and
    /// junk-trailed cases stay distinguishable for diagnostics.
    pub trailing_bytes: usize,
}

/// Check whether the buffer starts with a recognized ZIP signature.
pub fn has_zip_magic(data: &[u8]) -> bool {
    data.len() >= 4 && MAGIC_SIGNATURES.iter().any(|sig| &data[..4] == *sig)
}

/// Locate the EOCD record and verify the buffer is complete.
///
/// The record must sit within the last `22 + 65535` bytes, so the search
/// window starts at `max(0, len - 65557)`. The scan runs forward from the
/// window start and takes the first signature occurrence: a well-formed
/// archive's true EOCD is unique within the window in the overwhelming
/// majority of cases, and this is a pragmatic completeness check, not a
/// full parser.
///
/// With the signature at offset `o`, the little-endian comment length at
/// `o + 20` gives the declared end `o + 22 + comment_len`. A declared end
/// past the buffer means truncation; bytes beyond it are tolerated as
/// trailing junk.
pub fn check_eocd(data: &[u8]) -> ZipIntegrityReport {
    let window_start = data.len().saturating_sub(EOCD_SIZE + MAX_COMMENT_SIZE);

    let Some(offset) = data[window_start..]
        .windows(EOCD_SIGNATURE.len())
        .position(|w| w == EOCD_SIGNATURE)
        .map(|i| window_start + i)
    else {
        return ZipIntegrityReport::default();
    };

    if offset + EOCD_SIZE > data.len() {
        // The fixed portion itself is cut off; the comment-length field
        // is unreadable, so at least this many bytes are gone.
        return ZipIntegrityReport {
            ok: false,
            eocd_offset: Some(offset),
            comment_len: 0,
            missing_bytes: offset + EOCD_SIZE - data.len(),
            trailing_bytes: 0,
        };
    }

    let comment_len = LittleEndian::read_u16(&data[offset + 20..offset + 22]);
    let expected_end = offset + EOCD_SIZE + comment_len as usize;

    if expected_end > data.len() {
        ZipIntegrityReport {
            ok: false,
            eocd_offset: Some(offset),
            comment_len,
            missing_bytes: expected_end - data.len(),
            trailing_bytes: 0,
        }
    } else {
        ZipIntegrityReport {
            ok: true,
            eocd_offset: Some(offset),
            comment_len,
            missing_bytes: 0,
            trailing_bytes: data.len() - expected_end,
        }
    }
}

/// Full ingest-time gate: magic check (hard failure) plus the EOCD
/// completeness report (advisory, returned to the caller).
pub fn verify_archive(data: &[u8]) -> Result<ZipIntegrityReport> {
    if !has_zip_magic(data) {
        return Err(TransportError::NotAZipArchive);
    }
    Ok(check_eocd(data))
}
