//! Domain record model, form transformation, and the portable exchange
//! codec for Recordseal.
//!
//! This crate provides:
//! - The canonical domain [`Record`] shape used as the fingerprint pre-image
//! - The user-facing [`ProfileForm`] shape and its transformation into a
//!   `Record` (field renames, location flattening, custom-field bag merge)
//! - Validation, parsing, and serialization of the portable JSON exchange
//!   format carried over file import and QR payloads
//!
//! Error taxonomy: structural parse failures and schema rule failures are
//! distinct variants so callers can present different guidance. Both are
//! recovered at this boundary as result values, never panics.
//!
#![deny(missing_docs)]

/// Portable exchange format codec.
pub mod codec;
/// Error types for codec and transformer operations.
pub mod errors;
/// User-facing form shapes.
pub mod form;
/// Canonical domain record.
pub mod record;
/// Form-to-record transformation.
pub mod transform;

pub use codec::{is_valid_email, parse, serialize, validate, ParsedRecord, PortableRecord};
pub use errors::{CodecError, TransformError};
pub use form::{CustomField, ProfileForm};
pub use record::Record;
pub use transform::{normalize_custom_fields, transform_form};
