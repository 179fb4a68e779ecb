use serde_json::json;
use trefle_client::model::requests::Navigation;
use trefle_client::model::responses::{AuthClaim, Links, ResponseEnvelope};

#[test]
fn test_links_from_body() {
    let body = json!({
        "data": [],
        "links": {
            "self": "/api/v1/species",
            "first": "/api/v1/species?page=1",
            "next": "/api/v1/species?page=2",
            "last": "/api/v1/species?page=21863"
        }
    });
    let links = Links::from_body(&body);

    assert_eq!(links.self_link.as_deref(), Some("/api/v1/species"));
    assert_eq!(links.get(Navigation::Next), Some("/api/v1/species?page=2"));
    assert_eq!(links.get(Navigation::Last), Some("/api/v1/species?page=21863"));
    assert_eq!(links.get(Navigation::Prev), None);
}

#[test]
fn test_links_missing_or_malformed() {
    assert_eq!(Links::from_body(&json!({"data": {}})), Links::default());
    assert_eq!(Links::from_body(&json!({"links": "nope"})), Links::default());
    assert_eq!(Links::from_body(&json!([1, 2, 3])), Links::default());
}

#[test]
fn test_envelope_from_value() {
    let envelope = ResponseEnvelope::from_value(json!({
        "data": [{"id": 1, "common_name": "Evergreen oak"}],
        "links": {"self": "/api/v1/plants", "next": "/api/v1/plants?page=2"},
        "meta": {"total": 415648}
    }))
    .unwrap();

    assert_eq!(envelope.data[0]["common_name"], "Evergreen oak");
    assert_eq!(envelope.links.next.as_deref(), Some("/api/v1/plants?page=2"));
    assert_eq!(envelope.total(), Some(415648));
}

#[test]
fn test_envelope_without_meta() {
    let envelope = ResponseEnvelope::from_value(json!({"data": {"id": 5}})).unwrap();
    assert_eq!(envelope.total(), None);
    assert_eq!(envelope.links, Links::default());
}

#[test]
fn test_auth_claim_expiration() {
    let claim: AuthClaim = serde_json::from_value(json!({
        "token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
        "expiration": "08-13-2020 15:06"
    }))
    .unwrap();

    let expires_at = claim.expires_at().expect("parsable expiration");
    assert_eq!(expires_at.to_string(), "2020-08-13 15:06:00");
}

#[test]
fn test_auth_claim_unknown_expiration_format() {
    let claim = AuthClaim {
        token: "t".to_string(),
        expiration: "tomorrow".to_string(),
    };
    assert!(claim.expires_at().is_none());
}
