use std::path::Path;

use async_trait::async_trait;
use recordseal_canonical::{AccountId, ProjectId};
use thiserror::Error;

use crate::client::{LedgerClient, LedgerEntry};
use crate::errors::ClientError;

/// Errors raised while loading a ledger snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read.
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot file is not a JSON array of ledger entries.
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ledger backend over a fixed, in-memory set of entries.
///
/// Loads a JSON array of [`LedgerEntry`] values from a file; used by the
/// CLI verify command and by tests as a stand-in for the production
/// transport. Entries are served in stored order, which is what the
/// matcher's tie-break policy keys on.
#[derive(Debug, Clone)]
pub struct SnapshotLedger {
    entries: Vec<LedgerEntry>,
    connected: bool,
}

impl SnapshotLedger {
    /// Creates a connected snapshot over the given entries.
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries,
            connected: true,
        }
    }

    /// Creates a snapshot whose transport reports disconnected.
    pub fn disconnected() -> Self {
        Self {
            entries: Vec::new(),
            connected: false,
        }
    }

    /// Loads a snapshot from a JSON file containing an entry array.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<LedgerEntry> = serde_json::from_str(&raw)?;
        Ok(Self::new(entries))
    }
}

#[async_trait]
impl LedgerClient for SnapshotLedger {
    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn data_points(
        &self,
        account: &AccountId,
        project: ProjectId,
    ) -> Result<Vec<LedgerEntry>, ClientError> {
        if !self.connected {
            return Err(ClientError::NotConnected);
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.account == account.as_ref() && e.project_id == project.0)
            .cloned()
            .collect())
    }
}
