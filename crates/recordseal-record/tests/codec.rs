use recordseal_record::{
    is_valid_email, parse, serialize, transform_form, validate, CodecError, CustomField,
    ProfileForm,
};
use serde_json::Value;

fn sample_form() -> ProfileForm {
    ProfileForm {
        name: "Alice Example".to_string(),
        bio: "Distributed systems engineer".to_string(),
        email: "alice@example.com".to_string(),
        location: ("Portugal".to_string(), "Lisbon".to_string()),
        github: "alice".to_string(),
        profile_type: "individual".to_string(),
        expertise: vec!["rust".to_string(), "cryptography".to_string()],
        interests: vec!["ledgers".to_string()],
        custom_fields: vec![CustomField::new("ens", "alice.eth")],
        ..ProfileForm::default()
    }
}

#[test]
fn validate_rejects_empty_input_with_structural_error() {
    let err = validate("").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn validate_rejects_malformed_json_with_structural_error() {
    let err = validate("{not json").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn validate_rejects_missing_name_with_schema_error() {
    let err = validate(r#"{"bio":"hello"}"#).unwrap_err();
    assert!(!err.is_structural());
    assert!(matches!(err, CodecError::MissingName));
}

#[test]
fn validate_rejects_non_string_name() {
    let err = validate(r#"{"name":42}"#).unwrap_err();
    assert!(matches!(err, CodecError::MissingName));
}

#[test]
fn validate_enforces_name_length_bounds() {
    assert!(matches!(
        validate(r#"{"name":"ab"}"#).unwrap_err(),
        CodecError::NameLength { .. }
    ));
    assert!(validate(r#"{"name":"abc"}"#).is_ok());

    let long_name = "x".repeat(257);
    let payload = format!(r#"{{"name":"{}"}}"#, long_name);
    assert!(matches!(
        validate(&payload).unwrap_err(),
        CodecError::NameLength { .. }
    ));
}

#[test]
fn validate_enforces_email_shape_when_present() {
    assert!(matches!(
        validate(r#"{"name":"Alice","email":"not-an-email"}"#).unwrap_err(),
        CodecError::InvalidEmail { .. }
    ));
    assert!(validate(r#"{"name":"Alice","email":"a@b.co"}"#).is_ok());
    // Empty email counts as absent.
    assert!(validate(r#"{"name":"Alice","email":""}"#).is_ok());
}

#[test]
fn email_helper_matches_local_at_domain() {
    assert!(is_valid_email(""));
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("@b.co"));
}

#[test]
fn parse_defaults_absent_fields_to_empty() {
    let parsed = parse(r#"{"name":"Alice"}"#).unwrap();

    assert_eq!(parsed.form.name, "Alice");
    assert_eq!(parsed.form.bio, "");
    assert_eq!(parsed.form.location, (String::new(), String::new()));
    assert!(parsed.form.expertise.is_empty());
    assert!(parsed.form.custom_fields.is_empty());
    assert_eq!(parsed.address, None);
}

#[test]
fn parse_maps_known_fields() {
    let payload = r#"{
        "name": "Alice",
        "location": {"country": "Portugal", "state": "Lisbon"},
        "github": "alice",
        "profileType": "individual",
        "expertise": ["rust"],
        "customFields": [{"key": "ens", "value": "alice.eth"}],
        "address": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
    }"#;

    let parsed = parse(payload).unwrap();
    assert_eq!(
        parsed.form.location,
        ("Portugal".to_string(), "Lisbon".to_string())
    );
    assert_eq!(parsed.form.github, "alice");
    assert_eq!(parsed.form.profile_type, "individual");
    assert_eq!(parsed.form.expertise, vec!["rust".to_string()]);
    assert_eq!(
        parsed.form.custom_fields,
        vec![CustomField::new("ens", "alice.eth")]
    );
    assert_eq!(
        parsed.address.as_deref(),
        Some("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY")
    );
}

#[test]
fn parse_fails_where_validate_fails() {
    assert!(parse("{not json").is_err());
    assert!(parse(r#"{"name":"ab"}"#).is_err());
}

#[test]
fn serialize_omits_empty_fields_entirely() {
    let form = ProfileForm {
        name: "Alice".to_string(),
        ..ProfileForm::default()
    };

    let raw = serialize(&form, None);
    let value: Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(object.get("name").and_then(Value::as_str), Some("Alice"));
}

#[test]
fn serialize_omits_empty_location_state() {
    let form = ProfileForm {
        name: "Alice".to_string(),
        location: ("Portugal".to_string(), String::new()),
        ..ProfileForm::default()
    };

    let raw = serialize(&form, None);
    let value: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value["location"]["country"].as_str(),
        Some("Portugal")
    );
    assert!(value["location"].get("state").is_none());
}

#[test]
fn serialize_filters_half_filled_custom_fields() {
    let form = ProfileForm {
        name: "Alice".to_string(),
        custom_fields: vec![
            CustomField::new("ens", "alice.eth"),
            CustomField::new("orphan", ""),
            CustomField::new("", "orphan"),
        ],
        ..ProfileForm::default()
    };

    let raw = serialize(&form, None);
    let value: Value = serde_json::from_str(&raw).unwrap();
    let fields = value["customFields"].as_array().unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["key"].as_str(), Some("ens"));
}

#[test]
fn serialize_embeds_address_only_when_present() {
    let form = ProfileForm {
        name: "Alice".to_string(),
        ..ProfileForm::default()
    };

    let with = serialize(&form, Some("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"));
    let value: Value = serde_json::from_str(&with).unwrap();
    assert!(value.get("address").is_some());

    let without = serialize(&form, None);
    let value: Value = serde_json::from_str(&without).unwrap();
    assert!(value.get("address").is_none());
}

#[test]
fn round_trip_is_fingerprint_equal() {
    let form = sample_form();

    let raw = serialize(&form, None);
    let reparsed = parse(&raw).unwrap();

    let original = transform_form(&form).unwrap().fingerprint();
    let round_tripped = transform_form(&reparsed.form).unwrap().fingerprint();

    assert_eq!(original, round_tripped);
}

#[test]
fn round_trip_survives_a_minimal_record() {
    // Empty-vs-absent fields are intentionally not distinguished.
    let parsed = parse(r#"{"name":"Alice"}"#).unwrap();
    let raw = serialize(&parsed.form, None);
    let reparsed = parse(&raw).unwrap();

    assert_eq!(
        transform_form(&parsed.form).unwrap().fingerprint(),
        transform_form(&reparsed.form).unwrap().fingerprint()
    );
}
