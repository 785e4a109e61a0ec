use recordseal_canonical::{AccountId, Fingerprint, ProjectId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::LedgerClient;

/// Outcome of a single verification attempt.
///
/// Created fresh on every call and never merged with a prior result. A
/// missing match and a connectivity failure both surface as `found: false`
/// with a guidance message; neither is propagated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// Whether a matching ledger entry was found.
    pub found: bool,
    /// Stored fingerprint of the matching entry, verbatim from the ledger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Ledger-assigned index of the matching entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    /// Human-readable outcome description.
    pub message: String,
}

impl VerificationResult {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            found: false,
            fingerprint: None,
            index: None,
            message: message.into(),
        }
    }
}

/// Matches a locally computed fingerprint against the ledger registry.
///
/// Queries all entries under `(account, project)`, normalizes both sides to
/// lowercase, and returns the first exact match in the order the ledger
/// yielded the entries. No retry is attempted on connectivity failure and
/// no state is kept between calls; every call re-queries.
pub async fn verify(
    client: &dyn LedgerClient,
    fingerprint: &Fingerprint,
    account: &AccountId,
    project: ProjectId,
) -> VerificationResult {
    if !client.is_connected() {
        warn!(account = account.as_ref(), %project, "ledger client disconnected");
        return VerificationResult::not_found(
            "Unable to reach the verification network. Check the connection and try again.",
        );
    }

    let entries = match client.data_points(account, project).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(account = account.as_ref(), %project, error = %err, "ledger query failed");
            return VerificationResult::not_found(format!("Verification failed: {}", err));
        }
    };

    if entries.is_empty() {
        return VerificationResult::not_found("No records found for this account.");
    }

    debug!(
        account = account.as_ref(),
        %project,
        count = entries.len(),
        "matching fingerprint against ledger entries"
    );

    // The Fingerprint newtype is already lowercase; entries may not be.
    for entry in &entries {
        if entry.fingerprint.to_ascii_lowercase() == fingerprint.as_str() {
            debug!(index = entry.index, "fingerprint matched ledger entry");
            return VerificationResult {
                found: true,
                fingerprint: Some(entry.fingerprint.clone()),
                index: Some(entry.index),
                message: "Record verified successfully.".to_string(),
            };
        }
    }

    VerificationResult::not_found("No matching record found for this data.")
}
