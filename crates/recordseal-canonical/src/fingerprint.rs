use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonicalizer::canonicalize;
use crate::validation::ValidationError;
use crate::value::CanonicalValue;

type Blake2b256 = Blake2b<U32>;

/// Content fingerprint: `0x` + 64 lowercase hex characters (BLAKE2b-256).
///
/// Input is accepted case-insensitively and normalized to lowercase, so two
/// fingerprints of the same content always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parses a validated fingerprint, normalizing hex digits to lowercase.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("invalid regex");
        if !re.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "fingerprint",
                value: s,
            });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Returns the normalized `0x`-prefixed hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fingerprints raw bytes directly (file verification path).
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    let mut hasher = Blake2b256::new();
    hasher.update(bytes);
    Fingerprint(format!("0x{}", hex::encode(hasher.finalize())))
}

/// Fingerprints a record via its canonical string form.
///
/// The canonical string is UTF-8 encoded and hashed; equal canonical forms
/// always yield the same fingerprint.
pub fn fingerprint_record(value: &CanonicalValue) -> Fingerprint {
    fingerprint_bytes(canonicalize(value).as_bytes())
}
