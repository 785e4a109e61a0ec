use serde::{Deserialize, Serialize};

/// One user-supplied key/value entry in the extensible field bag.
///
/// Both members must be simultaneously non-empty or simultaneously empty;
/// half-filled entries are rejected by the transformer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Bag key.
    pub key: String,
    /// Bag value.
    pub value: String,
}

impl CustomField {
    /// Creates an entry from key and value strings.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// User-facing form shape, prior to transformation into a [`crate::Record`].
///
/// Every scalar field defaults to the empty string so the transformer never
/// has to distinguish absent from empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Display name (required, 3-256 characters at the codec boundary).
    pub name: String,
    /// Short biography.
    pub bio: String,
    /// Contact email.
    pub email: String,
    /// Two-part location: `(country, region)`.
    pub location: (String, String),
    /// Personal website URL.
    pub website: String,
    /// Telegram handle.
    pub telegram: String,
    /// X handle.
    pub x: String,
    /// LinkedIn handle.
    pub linkedin: String,
    /// GitHub handle; becomes the domain `git` field.
    pub github: String,
    /// Mastodon handle.
    pub mastodon: String,
    /// Instagram handle.
    pub instagram: String,
    /// YouTube channel.
    pub youtube: String,
    /// Profile type label; folded into the field bag.
    pub profile_type: String,
    /// Areas of expertise, order-significant.
    pub expertise: Vec<String>,
    /// Interests, order-significant.
    pub interests: Vec<String>,
    /// Free-form key/value entries merged into the field bag.
    pub custom_fields: Vec<CustomField>,
}
