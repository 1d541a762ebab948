use super::*;
use wire::endpoints::{DELETE_NEWS, SAVE_ATHLETE};

#[test]
fn server_render_error_is_network_kind() {
    let err = server_render_error();
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));
    assert_eq!(err.user_message(), "Unable to connect to the server");
}

#[test]
fn transport_error_wraps_display_text() {
    assert_eq!(transport_error("connection refused"), ApiError::Network("connection refused".to_owned()));
}

#[test]
fn failure_log_line_names_method_and_url() {
    let id = RecordId::from(12);
    let url = DELETE_NEWS.with_id(&id);
    let line = failure_log_line(&DELETE_NEWS, &url, &ApiError::Status(500));
    assert_eq!(line, "DELETE /api/news/delete_news?id=12 failed: request failed with status 500");
}

#[test]
fn failure_log_line_for_application_error() {
    let err = ApiError::Application("Invalid file type".to_owned());
    let line = failure_log_line(&SAVE_ATHLETE, SAVE_ATHLETE.path, &err);
    assert_eq!(line, "POST /api/athletes/addOrUpdateAthlete failed: Invalid file type");
}
