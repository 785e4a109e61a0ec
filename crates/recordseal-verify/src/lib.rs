//! Ledger client abstraction and verification matcher for Recordseal.
//!
//! This crate provides:
//! - The [`LedgerClient`] trait consumed by the matcher (the production
//!   transport is an external collaborator)
//! - The [`verify`] matcher: fetch entries for `(account, project)`, match
//!   a fingerprint case-insensitively, first entry in ledger order wins
//! - A debounced fingerprint recomputation task for interactive input
//! - A JSON snapshot ledger backend for tests and offline tooling
//! - File acceptance bounds for the raw-byte verification path
//!
//! Concurrency model: the ledger query is the single suspension point.
//! The matcher holds no cache and no single-flight map; overlapping calls
//! are independent and callers discard superseded results.
//!
#![deny(missing_docs)]

/// Ledger client trait and entry types.
pub mod client;
/// Debounced fingerprint recomputation.
pub mod debounce;
/// Error types for ledger access.
pub mod errors;
/// File acceptance bounds for raw-byte fingerprinting.
pub mod files;
/// Verification matcher.
pub mod matcher;
/// JSON snapshot ledger backend.
pub mod snapshot;

pub use client::{LedgerClient, LedgerEntry};
pub use debounce::{DebouncedFingerprint, DEFAULT_SETTLE_DELAY};
pub use errors::ClientError;
pub use files::{check_file_size, format_file_size, FileError, MAX_FILE_SIZE};
pub use matcher::{verify, VerificationResult};
pub use snapshot::{SnapshotError, SnapshotLedger};
