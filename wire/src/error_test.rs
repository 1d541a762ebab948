use super::*;

#[test]
fn transport_variants_classify_as_network() {
    assert_eq!(ApiError::Network("refused".to_owned()).kind(), ErrorKind::Network);
    assert_eq!(ApiError::Status(500).kind(), ErrorKind::Network);
    assert_eq!(ApiError::Decode("eof".to_owned()).kind(), ErrorKind::Network);
}

#[test]
fn application_variant_classifies_as_application() {
    assert_eq!(ApiError::Application("nope".to_owned()).kind(), ErrorKind::Application);
}

#[test]
fn user_message_passes_application_text_through() {
    let err = ApiError::Application("Athlete not found".to_owned());
    assert_eq!(err.user_message(), "Athlete not found");
}

#[test]
fn user_message_hides_transport_detail() {
    let err = ApiError::Network("dns error: no such host".to_owned());
    assert_eq!(err.user_message(), "Unable to connect to the server");
    assert_eq!(ApiError::Status(404).user_message(), "Request failed (HTTP 404)");
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
}
