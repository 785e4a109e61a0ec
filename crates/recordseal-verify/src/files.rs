use thiserror::Error;

/// Maximum accepted file size for raw-byte fingerprinting: 20 MiB.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Errors raised by file acceptance checks.
#[derive(Debug, Error)]
pub enum FileError {
    /// File exceeds the acceptance bound.
    #[error("file size {size} bytes exceeds the 20 MB limit")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
    },
}

/// Checks a file length against the acceptance bound.
pub fn check_file_size(size: u64) -> Result<(), FileError> {
    if size > MAX_FILE_SIZE {
        return Err(FileError::TooLarge { size });
    }
    Ok(())
}

/// Formats a byte count for human-readable messages (e.g. `1.5 MB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    // Two decimals, trailing zeros trimmed, matching "20 MB" over "20.00 MB".
    let rounded = (value * 100.0).round() / 100.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{} {}", rounded.trunc() as u64, UNITS[exp])
    } else {
        format!("{} {}", rounded, UNITS[exp])
    }
}
