use super::*;

// =====================
// failure_message
// =====================

#[test]
fn prefers_the_message_key() {
    let body = ErrorBody {
        message: Some("User already exists".to_owned()),
        error: Some("ignored".to_owned()),
    };
    assert_eq!(failure_message(400, Some(&body)), "User already exists");
}

#[test]
fn falls_back_to_the_error_key() {
    let body = ErrorBody {
        message: None,
        error: Some("Item already claimed".to_owned()),
    };
    assert_eq!(failure_message(400, Some(&body)), "Item already claimed");
}

#[test]
fn falls_back_to_the_status_without_a_body() {
    assert_eq!(failure_message(500, None), "Request failed with status 500");
}

#[test]
fn falls_back_to_the_status_when_the_body_has_neither_key() {
    let body = ErrorBody::default();
    assert_eq!(failure_message(404, Some(&body)), "Request failed with status 404");
}

#[test]
fn body_parses_from_an_auth_failure() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(failure_message(401, Some(&body)), "Invalid credentials");
}

#[test]
fn body_parses_from_a_claim_rejection() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Item already claimed"}"#).unwrap();
    assert_eq!(failure_message(400, Some(&body)), "Item already claimed");
}

// =====================
// ApiError display
// =====================

#[test]
fn api_errors_display_the_extracted_message() {
    let err = ApiError::Api {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn transport_errors_display_their_own_text() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn payload_errors_name_the_shape_problem() {
    let err = ApiError::Payload("missing field `title`".to_owned());
    assert_eq!(err.to_string(), "unrecognized payload shape: missing field `title`");
}
