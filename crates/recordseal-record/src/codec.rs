use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CodecError;
use crate::form::{CustomField, ProfileForm};

/// Inclusive lower bound on the name field, in characters.
pub const NAME_MIN_LEN: usize = 3;
/// Inclusive upper bound on the name field, in characters.
pub const NAME_MAX_LEN: usize = 256;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Reports whether an email string is acceptably shaped (`local@domain`).
///
/// The empty string counts as valid; email is an optional field.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return true;
    }
    Regex::new(EMAIL_PATTERN)
        .expect("invalid regex")
        .is_match(email)
}

/// Flat location carried by the portable format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableLocation {
    /// Country part, required when a location is present.
    pub country: String,
    /// Region part, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Portable record exchange format (file import/export and QR payloads).
///
/// Empty and absent fields are omitted on export so payloads stay minimal;
/// importing treats absent as empty, so the round trip is fingerprint-equal
/// even though the literal text may differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableRecord {
    /// Display name, required, 3-256 characters.
    pub name: String,
    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Two-part location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PortableLocation>,
    /// Personal website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Telegram handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    /// X handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// LinkedIn handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// GitHub handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Mastodon handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastodon: Option<String>,
    /// Instagram handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// YouTube channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    /// Profile type label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    /// Areas of expertise; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<String>,
    /// Interests; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    /// Custom field entries; filtered to both-non-empty pairs on export.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Ledger account identifier supplying the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Result of parsing a portable payload: the form shape plus the optional
/// externally-supplied account identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    /// Parsed form data with absent fields defaulted to empty.
    pub form: ProfileForm,
    /// Account identifier, absent when not present in the source.
    pub address: Option<String>,
}

/// Validates a portable payload without building the form shape.
///
/// Structural failures ([`CodecError::Json`]) and schema failures (name and
/// email rules) are distinct so callers can present different guidance.
pub fn validate(raw: &str) -> Result<(), CodecError> {
    let value: Value = serde_json::from_str(raw)?;
    validate_value(&value)
}

fn validate_value(value: &Value) -> Result<(), CodecError> {
    let name = match value.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CodecError::MissingName),
    };

    let len = name.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return Err(CodecError::NameLength {
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
        });
    }

    if let Some(email) = value.get("email").and_then(Value::as_str) {
        if !is_valid_email(email) {
            return Err(CodecError::InvalidEmail {
                value: email.to_string(),
            });
        }
    }

    Ok(())
}

/// Parses a portable payload into the internal form shape.
///
/// Fails whenever [`validate`] would fail. Known fields map into the form;
/// anything absent (or of the wrong type) defaults to an empty string or
/// empty sequence, except `address`, which stays absent.
pub fn parse(raw: &str) -> Result<ParsedRecord, CodecError> {
    let value: Value = serde_json::from_str(raw)?;
    validate_value(&value)?;

    let text = |key: &str| -> String {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };
    let list = |key: &str| -> Vec<String> {
        value
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    };

    let location = value.get("location");
    let location_part = |key: &str| -> String {
        location
            .and_then(|l| l.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    let custom_fields = value
        .get("customFields")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|entry| {
                    CustomField::new(
                        entry.get("key").and_then(Value::as_str).unwrap_or(""),
                        entry.get("value").and_then(Value::as_str).unwrap_or(""),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    let form = ProfileForm {
        name: text("name"),
        bio: text("bio"),
        email: text("email"),
        location: (location_part("country"), location_part("state")),
        website: text("website"),
        telegram: text("telegram"),
        x: text("x"),
        linkedin: text("linkedin"),
        github: text("github"),
        mastodon: text("mastodon"),
        instagram: text("instagram"),
        youtube: text("youtube"),
        profile_type: text("profileType"),
        expertise: list("expertise"),
        interests: list("interests"),
        custom_fields,
    };

    let address = value
        .get("address")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(ParsedRecord { form, address })
}

/// Serializes a form into the minimal portable payload.
///
/// Empty fields and empty sequences are omitted entirely; the custom field
/// bag keeps only entries with both key and value non-empty.
pub fn serialize(form: &ProfileForm, address: Option<&str>) -> String {
    let non_empty = |s: &str| -> Option<String> {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    let location = non_empty(&form.location.0).map(|country| PortableLocation {
        country,
        state: non_empty(&form.location.1),
    });

    let custom_fields = form
        .custom_fields
        .iter()
        .filter(|f| !f.key.is_empty() && !f.value.is_empty())
        .cloned()
        .collect();

    let portable = PortableRecord {
        name: form.name.clone(),
        bio: non_empty(&form.bio),
        email: non_empty(&form.email),
        location,
        website: non_empty(&form.website),
        telegram: non_empty(&form.telegram),
        x: non_empty(&form.x),
        linkedin: non_empty(&form.linkedin),
        github: non_empty(&form.github),
        mastodon: non_empty(&form.mastodon),
        instagram: non_empty(&form.instagram),
        youtube: non_empty(&form.youtube),
        profile_type: non_empty(&form.profile_type),
        expertise: form.expertise.clone(),
        interests: form.interests.clone(),
        custom_fields,
        address: address.filter(|a| !a.is_empty()).map(str::to_string),
    };

    serde_json::to_string_pretty(&portable).unwrap_or_else(|_| "{}".to_string())
}
