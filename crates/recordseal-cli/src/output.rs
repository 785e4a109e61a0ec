//! Output formatting utilities.

use recordseal_verify::VerificationResult;

/// Formats a verification result as pretty JSON.
pub fn format_json(result: &VerificationResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a verification result as human-readable lines.
pub fn format_human(result: &VerificationResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "status:      {}",
        if result.found { "FOUND" } else { "NOT FOUND" }
    ));
    if let Some(fingerprint) = &result.fingerprint {
        lines.push(format!("fingerprint: {}", fingerprint));
    }
    if let Some(index) = result.index {
        lines.push(format!("index:       {}", index));
    }
    lines.push(format!("message:     {}", result.message));
    lines.join("\n")
}
