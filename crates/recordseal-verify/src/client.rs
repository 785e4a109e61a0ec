use async_trait::async_trait;
use recordseal_canonical::{AccountId, ProjectId};
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// One registered data point as returned by the ledger for a
/// `(account, project)` query.
///
/// `index` is ledger-assigned, non-negative, and not necessarily
/// contiguous; uniqueness within a pair is assumed but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Account the entry was registered under.
    pub account: String,
    /// Project namespace the entry belongs to.
    pub project_id: u32,
    /// Ledger-assigned sequence position.
    pub index: u64,
    /// Stored fingerprint, hex with `0x` prefix, any case.
    pub fingerprint: String,
}

/// Read access to the distributed ledger registry.
///
/// The matcher consumes this trait; the production transport lives outside
/// this crate. Implementations must signal distinctly between "not
/// connected" and "connected but empty result": a connected client with no
/// entries returns `Ok(vec![])`.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Reports whether the underlying transport is currently connected.
    fn is_connected(&self) -> bool;

    /// Returns every entry registered under `(account, project)`, in the
    /// order the ledger yields them. The matcher never re-sorts.
    async fn data_points(
        &self,
        account: &AccountId,
        project: ProjectId,
    ) -> Result<Vec<LedgerEntry>, ClientError>;
}
