//! Canonical value model and fingerprinting primitives for Recordseal.
//!
//! This crate provides:
//! - A closed tagged value type ([`CanonicalValue`]) over which
//!   canonicalization is total
//! - The deterministic canonicalization algorithm (sorted mapping keys,
//!   ordered sequences, normalized numbers)
//! - BLAKE2b-256 fingerprinting of canonical records and raw bytes
//! - Validated identifier newtypes for ledger accounts and fingerprints
//!
//! Core invariants:
//! - Canonicalization is a pure function of value content, never of
//!   construction order
//! - Two structurally equal mappings canonicalize to the identical string
//! - Fingerprints are bit-identical across platforms for identical input
//!
#![deny(missing_docs)]

/// Deterministic canonicalization of canonical values.
pub mod canonicalizer;
/// Fingerprint newtype and hash entry points.
pub mod fingerprint;
/// Ledger account and project identifiers.
pub mod identifiers;
/// Validation helpers used by canonical types.
pub mod validation;
/// The closed canonical value model.
pub mod value;

pub use canonicalizer::canonicalize;
pub use fingerprint::{fingerprint_bytes, fingerprint_record, Fingerprint};
pub use identifiers::{AccountId, ProjectId};
pub use validation::ValidationError;
pub use value::CanonicalValue;
