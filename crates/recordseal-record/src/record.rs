use recordseal_canonical::{fingerprint_record, CanonicalValue, Fingerprint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical domain record: the fingerprint pre-image shape.
///
/// Every scalar field is always present (empty string when unset) so the
/// canonical mapping carries the full key set and two records differing only
/// in which fields were touched still canonicalize comparably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name.
    pub name: String,
    /// Short biography.
    pub bio: String,
    /// Scalar location (country part of the form location).
    pub location: String,
    /// Contact email.
    pub email: String,
    /// Telegram handle.
    pub telegram: String,
    /// X handle.
    pub x: String,
    /// LinkedIn handle.
    pub linkedin: String,
    /// Mastodon handle.
    pub mastodon: String,
    /// Instagram handle.
    pub instagram: String,
    /// Personal website URL.
    pub website: String,
    /// YouTube channel.
    pub youtube: String,
    /// Git forge handle (renamed from the form's `github`).
    pub git: String,
    /// Extensible key/value bag holding fields without a fixed slot.
    pub custom_fields: BTreeMap<String, String>,
}

impl Record {
    /// Builds the canonical value fed to the canonicalizer.
    pub fn canonical_value(&self) -> CanonicalValue {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), CanonicalValue::text(&self.name));
        map.insert("bio".to_string(), CanonicalValue::text(&self.bio));
        map.insert("location".to_string(), CanonicalValue::text(&self.location));
        map.insert("email".to_string(), CanonicalValue::text(&self.email));
        map.insert("telegram".to_string(), CanonicalValue::text(&self.telegram));
        map.insert("x".to_string(), CanonicalValue::text(&self.x));
        map.insert("linkedin".to_string(), CanonicalValue::text(&self.linkedin));
        map.insert("mastodon".to_string(), CanonicalValue::text(&self.mastodon));
        map.insert(
            "instagram".to_string(),
            CanonicalValue::text(&self.instagram),
        );
        map.insert("website".to_string(), CanonicalValue::text(&self.website));
        map.insert("youtube".to_string(), CanonicalValue::text(&self.youtube));
        map.insert("git".to_string(), CanonicalValue::text(&self.git));

        let bag: BTreeMap<String, CanonicalValue> = self
            .custom_fields
            .iter()
            .map(|(k, v)| (k.clone(), CanonicalValue::text(v)))
            .collect();
        map.insert("custom_fields".to_string(), CanonicalValue::Mapping(bag));

        CanonicalValue::Mapping(map)
    }

    /// Computes the content fingerprint of this record.
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_record(&self.canonical_value())
    }
}
