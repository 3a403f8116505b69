//! # mxlpipe
//!
//! Binary transport layer for MXL score archives.
//!
//! This library moves a compressed musical-score archive (an MXL file, which
//! is a ZIP container) between the three forms it takes in a score catalog
//! backend: the base64 text a client uploads, the hex byte-string column the
//! storage layer keeps, and the exact binary payload an HTTP response serves.
//!
//! ## Features
//!
//! - Lossless hex and base64 codecs with a canonical `\x`-prefixed hex form
//!   for storage writes
//! - ZIP magic-number gating and End-Of-Central-Directory completeness
//!   checking before any byte buffer is trusted
//! - Encoding sniffing for storage reads whose runtime shape is unknown
//!   (hex text, base64 text, native bytes, or numeric byte arrays)
//! - Stateless ingest and retrieval pipelines around an injected storage
//!   handle
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mxlpipe::{IngestPipeline, MemoryStore, RetrievePipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!
//!     // Client upload: base64 text of a minimal empty archive.
//!     let upload = "UEsFBgAAAAAAAAAAAAAAAAAAAAAAAA==";
//!     let report = IngestPipeline::new(store.clone()).ingest(1, upload).await?;
//!     assert!(report.ok);
//!
//!     // Later: reconstruct the exact bytes for an HTTP response.
//!     let (artifact, descriptor) = RetrievePipeline::new(store)
//!         .retrieve(1, Some("Nocturne in E-flat"))
//!         .await?;
//!     println!("{} bytes as {}", artifact.len(), descriptor.mime_type);
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod cli;
pub mod codec;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod zip;

pub use artifact::{ContentDescriptor, EncodedText, RawArtifact, StoredValue};
pub use cli::Cli;
pub use error::TransportError;
pub use pipeline::{IngestPipeline, RetrievePipeline};
pub use store::{ArtifactStore, MemoryStore};
pub use zip::ZipIntegrityReport;
