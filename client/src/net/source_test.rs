use super::*;

#[test]
fn request_error_message_includes_cause() {
    let err = FetchError::Request("connection refused".to_owned());
    assert_eq!(err.to_string(), "status request failed: connection refused");
}

#[test]
fn decode_error_converts_from_status_error() {
    let decode = status::parse_task_status("not json").expect_err("should fail");
    let err: FetchError = decode.into();
    assert!(matches!(err, FetchError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode status body"));
}
