//! Upload path: client base64 text to canonical storage text.

use std::sync::Arc;

use tracing::warn;

use crate::codec;
use crate::error::{Result, TransportError};
use crate::store::ArtifactStore;
use crate::zip::{self, ZipIntegrityReport};

/// Transcode one uploaded archive to its canonical storage form.
///
/// Pure function: decode the base64 text, gate on the ZIP magic number,
/// and re-encode as marker-prefixed lowercase hex. The EOCD completeness
/// check runs as well, but only the magic result blocks the upload:
/// magic bytes are cheap and decisive, while truncation is rarer and is
/// caught at display time instead. An incomplete report is logged here
/// and returned to the caller alongside the canonical text.
pub fn transcode_upload(upload_text: &str) -> Result<(String, ZipIntegrityReport)> {
    let artifact = codec::decode_base64(upload_text)?;
    let report = zip::verify_archive(artifact.as_bytes())?;
    if !report.ok {
        warn!(
            missing_bytes = report.missing_bytes,
            eocd_found = report.eocd_offset.is_some(),
            "accepting archive with incomplete EOCD record"
        );
    }
    Ok((codec::encode_hex(&artifact), report))
}

/// Orchestrates one upload: transcode, then a single storage write.
pub struct IngestPipeline<S: ArtifactStore> {
    store: Arc<S>,
}

impl<S: ArtifactStore> IngestPipeline<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and persist one uploaded archive.
    ///
    /// There are no partial writes: any failure leaves storage untouched.
    /// The integrity report is returned for diagnostics.
    pub async fn ingest(&self, score_id: u64, upload_text: &str) -> Result<ZipIntegrityReport> {
        let (canonical, report) = transcode_upload(upload_text)?;
        self.store
            .write_artifact(score_id, &canonical)
            .await
            .map_err(TransportError::Store)?;
        Ok(report)
    }
}
