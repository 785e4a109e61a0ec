//! Verify command implementation.

use recordseal_canonical::{AccountId, Fingerprint, ProjectId};
use recordseal_verify::{verify, SnapshotLedger};

use crate::output;

pub async fn run(
    fingerprint: String,
    account: String,
    project: u32,
    ledger: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fingerprint =
        Fingerprint::parse(fingerprint).map_err(|e| format!("Invalid fingerprint: {}", e))?;
    let account = AccountId::parse(account).map_err(|e| format!("Invalid account: {}", e))?;
    let client = SnapshotLedger::from_path(&ledger)
        .map_err(|e| format!("Failed to load ledger snapshot {}: {}", ledger, e))?;

    let result = verify(&client, &fingerprint, &account, ProjectId(project)).await;

    if json {
        println!("{}", output::format_json(&result));
    } else {
        println!("{}", output::format_human(&result));
    }

    if !result.found {
        std::process::exit(1);
    }
    Ok(())
}
