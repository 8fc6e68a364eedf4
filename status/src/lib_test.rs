use super::*;

#[test]
fn status_endpoint_formats_expected_path() {
    assert_eq!(status_endpoint("crawl_1700000000000_ab12"), "/status/crawl_1700000000000_ab12");
}

#[test]
fn percent_width_drops_trailing_zero_fraction() {
    assert_eq!(percent_width(30.0), "30%");
    assert_eq!(percent_width(100.0), "100%");
    assert_eq!(percent_width(12.5), "12.5%");
}

#[test]
fn parse_full_status_body() {
    let status = parse_task_status(r#"{"status":"Crawling page 3","finished":false,"progress":{"percent":30}}"#)
        .expect("status");
    assert_eq!(status.status.as_deref(), Some("Crawling page 3"));
    assert!(!status.finished);
    assert_eq!(status.percent(), Some(30.0));
}

#[test]
fn parse_minimal_body_defaults_missing_fields() {
    let status = parse_task_status("{}").expect("status");
    assert_eq!(status, TaskStatus::default());
    assert!(!status.finished);
    assert_eq!(status.percent(), None);
}

#[test]
fn parse_ignores_unknown_fields() {
    let status = parse_task_status(r#"{"finished":true,"pages":12}"#).expect("status");
    assert!(status.finished);
}

#[test]
fn parse_rejects_non_json_body() {
    let err = parse_task_status("<html>502 Bad Gateway</html>").expect_err("should fail");
    assert!(matches!(err, StatusError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode status body"));
}

#[test]
fn progress_without_percent_reports_none() {
    let status = parse_task_status(r#"{"finished":false,"progress":{}}"#).expect("status");
    assert_eq!(status.percent(), None);
}

#[test]
fn percent_out_of_range_is_passed_through() {
    let over = TaskStatus { progress: Some(Progress { percent: Some(150.0) }), ..TaskStatus::default() };
    assert_eq!(over.percent(), Some(150.0));
    assert_eq!(percent_width(over.percent().expect("percent")), "150%");
}

#[test]
fn null_finished_means_still_running() {
    let status = parse_task_status(r#"{"finished":null,"status":"x"}"#).expect("status");
    assert!(!status.finished);
    assert_eq!(status.status.as_deref(), Some("x"));
}

#[test]
fn finished_follows_truthiness() {
    for (body, expected) in [
        (r#"{"finished":0}"#, false),
        (r#"{"finished":""}"#, false),
        (r#"{"finished":1}"#, true),
        (r#"{"finished":"yes"}"#, true),
        (r#"{"finished":{}}"#, true),
    ] {
        assert_eq!(parse_task_status(body).expect("status").finished, expected, "{body}");
    }
}

#[test]
fn numeric_string_percent_is_accepted() {
    let status = parse_task_status(r#"{"finished":false,"progress":{"percent":"30"}}"#).expect("status");
    assert_eq!(status.percent(), Some(30.0));
}

#[test]
fn mistyped_percent_is_skipped_not_fatal() {
    let status = parse_task_status(r#"{"finished":false,"progress":{"percent":[30]}}"#).expect("status");
    assert_eq!(status.percent(), None);
    let status = parse_task_status(r#"{"finished":false,"progress":{"percent":"lots"}}"#).expect("status");
    assert_eq!(status.percent(), None);
}

#[test]
fn status_text_falls_back_to_placeholder() {
    let missing = TaskStatus::default();
    let empty = TaskStatus { status: Some(String::new()), ..TaskStatus::default() };
    let present = TaskStatus { status: Some("Queued".to_owned()), ..TaskStatus::default() };
    assert_eq!(missing.status_text(WAITING_PLACEHOLDER), "Waiting...");
    assert_eq!(empty.status_text(WAITING_PLACEHOLDER), "Waiting...");
    assert_eq!(present.status_text(WAITING_PLACEHOLDER), "Queued");
}

#[test]
fn done_text_appends_suffix() {
    let done = TaskStatus { status: Some("Complete".to_owned()), finished: true, progress: None };
    assert_eq!(done.done_text(), "Complete (Done)");
    assert_eq!(TaskStatus::default().done_text(), " (Done)");
}
