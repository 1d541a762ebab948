use super::*;
use crate::endpoints::{GET_EVENTS, GET_SPORTS, GET_TEAMS, LOGIN};
use crate::entities::{Event, SessionUser, Sport, Team};
use serde_json::json;

// =============================================================
// Bare list
// =============================================================

#[test]
fn list_shape_passes_array_through() {
    let value = normalize(Shape::List, 200, r#"[{"id":1},{"id":2}]"#).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn list_shape_reports_error_object_as_application_error() {
    let err = normalize(Shape::List, 200, r#"{"error":"Database unavailable"}"#).unwrap_err();
    assert_eq!(err, ApiError::Application("Database unavailable".to_owned()));
}

#[test]
fn list_shape_rejects_scalars() {
    let err = normalize(Shape::List, 200, "42").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Status envelope
// =============================================================

#[test]
fn status_shape_extracts_keyed_payload() {
    let body = r#"{"status":"success","events":[{"id":1,"name":"Derby"}]}"#;
    let value = normalize(Shape::Status("events"), 200, body).unwrap();
    assert_eq!(value, json!([{"id": 1, "name": "Derby"}]));
}

#[test]
fn status_shape_missing_key_reads_as_empty_list() {
    let value = normalize(Shape::Status("news"), 200, r#"{"status":"success"}"#).unwrap();
    assert_eq!(value, json!([]));
}

#[test]
fn status_shape_surfaces_server_message() {
    let body = r#"{"status":"error","message":"No events found"}"#;
    let err = normalize(Shape::Status("events"), 200, body).unwrap_err();
    assert_eq!(err, ApiError::Application("No events found".to_owned()));
}

#[test]
fn status_shape_defaults_message_when_missing() {
    let err = normalize(Shape::Status("events"), 200, r#"{"status":"error"}"#).unwrap_err();
    assert_eq!(err, ApiError::Application("Request failed".to_owned()));
}

#[test]
fn ack_shape_returns_null_on_success() {
    assert_eq!(normalize(Shape::Ack, 200, r#"{"status":"success","message":"Saved"}"#).unwrap(), Value::Null);
}

#[test]
fn ack_shape_reports_failure_message() {
    let err = normalize(Shape::Ack, 200, r#"{"status":"error","message":"Missing headline"}"#).unwrap_err();
    assert_eq!(err.user_message(), "Missing headline");
}

// =============================================================
// Success envelope
// =============================================================

#[test]
fn success_shape_extracts_user() {
    let body = r#"{"success":true,"user":{"email":"a@ashesi.edu.gh","role":"administrator"}}"#;
    let user: SessionUser = decode(&LOGIN, 200, body).unwrap();
    assert!(user.is_admin());
}

#[test]
fn success_shape_false_flag_uses_error_text() {
    let err = normalize(Shape::Success(Some("user")), 200, r#"{"success":false,"error":"Invalid password"}"#)
        .unwrap_err();
    assert_eq!(err, ApiError::Application("Invalid password".to_owned()));
}

#[test]
fn success_shape_reads_error_body_on_unauthorized() {
    let err = normalize(Shape::Success(Some("user")), 401, r#"{"success":false,"error":"Invalid credentials"}"#)
        .unwrap_err();
    assert_eq!(err, ApiError::Application("Invalid credentials".to_owned()));
}

// =============================================================
// Transport failures
// =============================================================

#[test]
fn non_ok_status_is_network_error_even_with_success_body() {
    let err = normalize(Shape::Status("events"), 500, r#"{"status":"success","events":[]}"#).unwrap_err();
    assert_eq!(err, ApiError::Status(500));
    assert_eq!(err.kind(), crate::error::ErrorKind::Network);
}

#[test]
fn unparseable_body_is_decode_error() {
    let err = normalize(Shape::Ack, 200, "<br />Fatal error").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Typed decode
// =============================================================

#[test]
fn decode_success_envelope_with_n_items_yields_n_rows() {
    let body = json!({
        "status": "success",
        "events": [
            {"id": 1, "name": "A", "date": "2024-01-01"},
            {"id": 2, "name": "B", "date": "2024-02-01"},
            {"id": 3, "name": "C", "date": "2024-03-01"}
        ]
    })
    .to_string();
    let events: Vec<Event> = decode(&GET_EVENTS, 200, &body).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].name, "B");
}

#[test]
fn decode_bare_sport_list() {
    let sports: Vec<Sport> = decode(&GET_SPORTS, 200, r#"[{"id":1,"name":"Pool"}]"#).unwrap();
    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].name, "Pool");
}

#[test]
fn decode_team_list_error_object() {
    let err = decode::<Vec<Team>>(&GET_TEAMS, 200, r#"{"error":"no teams table"}"#).unwrap_err();
    assert_eq!(err.user_message(), "no teams table");
}

#[test]
fn decode_row_without_id_is_decode_error() {
    let err = decode::<Vec<Event>>(&GET_EVENTS, 200, r#"{"status":"success","events":[{"name":"x"}]}"#)
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
