//! CLI subcommand implementations.

pub mod canonicalize;
pub mod export;
pub mod fingerprint;
pub mod validate;
pub mod verify;

use std::io::{self, Read};

/// Reads text input from a file path or stdin.
pub fn read_input(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        Ok(std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Reads raw bytes from a file path or stdin.
pub fn read_input_bytes(input: Option<String>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        Ok(std::fs::read(&path).map_err(|e| format!("Failed to read file {}: {}", path, e))?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
