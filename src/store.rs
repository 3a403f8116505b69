//! Storage collaborator seam.
//!
//! The pipelines never talk to the database directly; they take an
//! injected [`ArtifactStore`] handle whose construction and teardown
//! belong to the process entry point. [`MemoryStore`] backs tests and
//! the CLI demo path.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::artifact::StoredValue;

/// Trait for the persistence layer holding artifact columns.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write the canonical hex text for one score's artifact column.
    async fn write_artifact(&self, score_id: u64, canonical_hex: &str) -> Result<()>;

    /// Read one score's artifact column. The runtime shape is whatever
    /// the storage layer happens to return; callers must sniff it.
    async fn read_artifact(&self, score_id: u64) -> Result<StoredValue>;
}

/// In-memory artifact store.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<u64, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row with an arbitrary stored shape, mimicking the
    /// unpredictable return forms of the real storage layer.
    pub fn seed(&self, score_id: u64, value: StoredValue) {
        self.rows.lock().unwrap().insert(score_id, value);
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn write_artifact(&self, score_id: u64, canonical_hex: &str) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(score_id, StoredValue::Text(canonical_hex.to_owned()));
        Ok(())
    }

    async fn read_artifact(&self, score_id: u64) -> Result<StoredValue> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&score_id).cloned().unwrap_or(StoredValue::Null))
    }
}
