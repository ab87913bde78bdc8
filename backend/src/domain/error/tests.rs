//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("no"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("  ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async { Error::forbidden("denied") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::forbidden("denied")).expect("serialise");
    assert_eq!(value, json!({ "code": "forbidden", "message": "denied" }));
}

#[rstest]
fn round_trips_details_and_trace(expected_trace_id: String) {
    let error = Error::unauthorized("invalid role")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "code": "invalid_role", "role": "admin" }));
    let value = serde_json::to_value(&error).expect("serialise");
    assert_eq!(value["traceId"], json!(expected_trace_id));

    let decoded: Error = serde_json::from_value(value).expect("deserialise");
    assert_eq!(decoded, error);
}

#[rstest]
#[case(json!({ "code": "forbidden", "message": "  " }))]
#[case(json!({ "code": "forbidden", "message": "x", "traceId": "" }))]
#[case(json!({ "code": "forbidden", "message": "x", "extra": 1 }))]
#[case(json!({ "code": "teapot", "message": "x" }))]
fn deserialisation_enforces_invariants(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

#[rstest]
#[tokio::test]
async fn deserialisation_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async {
        serde_json::from_value::<Error>(json!({ "code": "not_found", "message": "gone" }))
            .expect("valid payload")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[given("a blank error message")]
fn a_blank_error_message() -> String {
    " ".to_owned()
}

#[when("the error is constructed")]
fn the_error_is_constructed(message: String) -> Result<Error, ErrorValidationError> {
    Error::try_new(ErrorCode::Forbidden, message)
}

#[then("construction is rejected as an empty message")]
fn construction_is_rejected(result: Result<Error, ErrorValidationError>) {
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn blank_messages_never_become_errors() {
    let message = a_blank_error_message();
    let result = the_error_is_constructed(message);
    construction_is_rejected(result);
}
