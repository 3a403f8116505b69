//! Download path: opaque stored value to exact binary response.

use std::sync::Arc;

use tracing::warn;

use crate::artifact::{ContentDescriptor, RawArtifact};
use crate::codec;
use crate::error::{Result, TransportError};
use crate::store::ArtifactStore;

/// Orchestrates one download: storage read, sniff-decode, and the
/// content descriptor for the HTTP boundary.
pub struct RetrievePipeline<S: ArtifactStore> {
    store: Arc<S>,
}

impl<S: ArtifactStore> RetrievePipeline<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reconstruct one score's exact archive bytes.
    ///
    /// The stored value may come back in any of the supported shapes;
    /// the sniffing rule classifies and decodes it, and no partially
    /// decoded bytes ever leave this function. Malformed stored text is
    /// server-side corruption, not a client mistake, so the hex and
    /// base64 decode failures are reclassified as server errors here.
    /// On success the artifact carries a descriptor naming the MXL
    /// media type and a filename derived from the score title.
    pub async fn retrieve(
        &self,
        score_id: u64,
        title: Option<&str>,
    ) -> Result<(RawArtifact, ContentDescriptor)> {
        let value = self
            .store
            .read_artifact(score_id)
            .await
            .map_err(TransportError::Store)?;

        let artifact = codec::sniff_decode(value).map_err(|e| match e {
            TransportError::InvalidHex(_) | TransportError::InvalidBase64(_) => {
                warn!(score_id, error = %e, "stored artifact failed to decode");
                TransportError::CorruptStoredValue(e.to_string())
            }
            TransportError::UnsupportedEncoding(_) => {
                // Points at a storage-layer contract change, not bad data.
                warn!(score_id, error = %e, "stored artifact has unrecognized shape");
                e
            }
            other => other,
        })?;

        Ok((artifact, ContentDescriptor::for_title(title)))
    }
}
