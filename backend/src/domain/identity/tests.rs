//! Tests for the identity value objects.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn identity() -> Identity {
    Identity::try_from_parts(VALID_ID, "  maria.lima ", Some("tecnico_medio"), Some(12))
        .expect("fixture identity is valid")
}

#[rstest]
fn parts_are_validated_and_trimmed(identity: Identity) {
    assert_eq!(identity.id().as_ref(), VALID_ID);
    assert_eq!(identity.username().as_ref(), "maria.lima");
    assert_eq!(identity.role(), UserRole::TecnicoMedio);
    assert_eq!(identity.unit(), UnitId::new(12).ok());
}

#[rstest]
#[case("", "user", Some("gestor"), None, IdentityValidationError::EmptyId)]
#[case("not-a-uuid", "user", Some("gestor"), None, IdentityValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", "user", Some("gestor"), None, IdentityValidationError::InvalidId)]
#[case(VALID_ID, "   ", Some("gestor"), None, IdentityValidationError::EmptyUsername)]
#[case(VALID_ID, "user", Some("gestor"), Some(0), IdentityValidationError::InvalidUnitId)]
#[case(VALID_ID, "user", Some("root"), None, IdentityValidationError::InvalidRole(InvalidRole::unknown("root")))]
#[case(VALID_ID, "user", None, None, IdentityValidationError::InvalidRole(InvalidRole::missing()))]
fn invalid_parts_are_rejected(
    #[case] id: &str,
    #[case] username: &str,
    #[case] role: Option<&str>,
    #[case] unit: Option<u32>,
    #[case] expected: IdentityValidationError,
) {
    let err = Identity::try_from_parts(id, username, role, unit).expect_err("invalid parts");
    assert_eq!(err, expected);
}

#[rstest]
#[case("{3fa85f64-5717-4562-b3fc-2c963f66afa6}")]
#[case("urn:uuid:3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[case("3fa85f6457174562b3fc2c963f66afa6")]
#[case("3FA85F64-5717-4562-B3FC-2C963F66AFA6")]
fn non_canonical_user_ids_are_rejected(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(IdentityValidationError::InvalidId));
}

#[rstest]
fn canonical_user_id_round_trips_text() {
    let id = UserId::new(VALID_ID).expect("canonical id");
    assert_eq!(id.as_ref(), VALID_ID);
    assert_eq!(id.as_uuid().hyphenated().to_string(), VALID_ID);
}

#[rstest]
fn unit_scope_is_optional() {
    let identity =
        Identity::try_from_parts(VALID_ID, "gestora", Some("gestor"), None).expect("valid");
    assert!(identity.unit().is_none());
}

#[rstest]
fn serialises_role_as_plain_string(identity: Identity) {
    let value = serde_json::to_value(&identity).expect("serialise");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "username": "maria.lima",
            "role": "tecnico_medio",
            "unitId": 12,
        })
    );
    let decoded: Identity = serde_json::from_value(value).expect("deserialise");
    assert_eq!(decoded, identity);
}

#[rstest]
#[case(json!({ "id": VALID_ID, "username": "x", "role": "superuser" }))]
#[case(json!({ "id": VALID_ID, "username": "x" }))]
#[case(json!({ "id": VALID_ID, "username": "x", "role": null }))]
#[case(json!({ "id": VALID_ID, "username": "x", "role": "GESTOR" }))]
fn payloads_with_unusable_roles_never_become_identities(#[case] payload: serde_json::Value) {
    let err = serde_json::from_value::<Identity>(payload).expect_err("role must be rejected");
    assert!(err.to_string().contains("role"), "unexpected message: {err}");
}

#[rstest]
fn random_user_ids_round_trip() {
    let id = UserId::random();
    let parsed = UserId::new(id.to_string()).expect("random id is canonical");
    assert_eq!(parsed.as_uuid(), id.as_uuid());
}
