use json_action_client::error::{ApiError, AppError};
use reqwest::StatusCode;
use serde_json::json;

fn sample_api_error() -> ApiError {
    ApiError {
        action: "listDatabases".to_string(),
        code: Some(4042),
        message: Some("no such database".to_string()),
        response: json!({"errorCode": 4042, "errorMessage": "no such database"}),
    }
}

#[test]
fn api_error_display_names_action_and_code() {
    let display = sample_api_error().to_string();
    assert!(display.contains("listDatabases"));
    assert!(display.contains("4042"));
    assert!(display.contains("no such database"));
}

#[test]
fn api_error_converts_into_app_error() {
    let err: AppError = sample_api_error().into();
    match err {
        AppError::Api(api) => assert_eq!(api.code, Some(4042)),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn unexpected_status_display() {
    let err = AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("500"));
}

#[test]
fn invalid_certificate_display_names_path() {
    let err = AppError::InvalidCertificate {
        path: "/certs/ca.crt".into(),
        message: "No such file or directory".to_string(),
    };
    assert!(err.to_string().contains("/certs/ca.crt"));
}
