//! Ingest and retrieval pipelines.
//!
//! Each call is one stateless unit of work: the codec and verifier are
//! pure functions, and the only awaits are the storage collaborator's
//! read and write. Nothing is cached or retained across calls, so a
//! failure never touches a later, unrelated request.

mod ingest;
mod retrieve;

pub use ingest::{IngestPipeline, transcode_upload};
pub use retrieve::RetrievePipeline;
