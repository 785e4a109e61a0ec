use std::collections::BTreeMap;

use crate::errors::TransformError;
use crate::form::{CustomField, ProfileForm};
use crate::record::Record;

/// Bag key carrying the form's profile type.
pub const PROFILE_TYPE_KEY: &str = "profile_type";
/// Bag key carrying the region half of the form location.
pub const STATE_KEY: &str = "state";
/// Bag key carrying the serialized expertise list.
pub const EXPERTISE_KEY: &str = "expertise";
/// Bag key carrying the serialized interests list.
pub const INTERESTS_KEY: &str = "interests";

/// Trims and checks user-supplied custom field entries.
///
/// Entries that are empty on both sides are dropped; entries with exactly
/// one side blank are rejected. Surviving entries are trimmed.
pub fn normalize_custom_fields(
    fields: &[CustomField],
) -> Result<Vec<CustomField>, TransformError> {
    let mut out = Vec::new();
    for field in fields {
        let key = field.key.trim();
        let value = field.value.trim();
        match (key.is_empty(), value.is_empty()) {
            (true, true) => continue,
            (false, false) => out.push(CustomField::new(key, value)),
            _ => {
                return Err(TransformError::MismatchedCustomField {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(out)
}

/// Maps a user-facing form into the canonical domain record.
///
/// - `github` becomes the domain `git` field.
/// - The two-part location collapses to its country; the region folds into
///   the bag under [`STATE_KEY`].
/// - Expertise and interests are stored as JSON-array strings under their
///   own bag keys, always present even when empty.
/// - User custom fields merge last, so user keys overwrite the derived bag
///   keys on collision.
///
/// Fails only when a custom field entry violates the pair rule.
pub fn transform_form(form: &ProfileForm) -> Result<Record, TransformError> {
    let mut custom_fields = BTreeMap::new();
    custom_fields.insert(PROFILE_TYPE_KEY.to_string(), form.profile_type.clone());
    custom_fields.insert(STATE_KEY.to_string(), form.location.1.clone());
    custom_fields.insert(EXPERTISE_KEY.to_string(), json_list(&form.expertise));
    custom_fields.insert(INTERESTS_KEY.to_string(), json_list(&form.interests));

    for field in normalize_custom_fields(&form.custom_fields)? {
        custom_fields.insert(field.key, field.value);
    }

    Ok(Record {
        name: form.name.clone(),
        bio: form.bio.clone(),
        location: form.location.0.clone(),
        email: form.email.clone(),
        telegram: form.telegram.clone(),
        x: form.x.clone(),
        linkedin: form.linkedin.clone(),
        mastodon: form.mastodon.clone(),
        instagram: form.instagram.clone(),
        website: form.website.clone(),
        youtube: form.youtube.clone(),
        git: form.github.clone(),
        custom_fields,
    })
}

fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
