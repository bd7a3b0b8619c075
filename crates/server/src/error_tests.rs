// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use ob_core::Error;
use yare::parameterized;

#[parameterized(
    bad_request = { ApiError::bad_request("missing"), StatusCode::BAD_REQUEST },
    ticket_missing = { Error::TicketNotFound("FIRE0001".into()).into(), StatusCode::NOT_FOUND },
    user_missing = { Error::UserNotFound("X".into()).into(), StatusCode::NOT_FOUND },
    metric_missing = { Error::MetricNotFound { component: "a".into(), metric: "b".into() }.into(), StatusCode::NOT_FOUND },
    duplicate_user = { Error::UserExists("X".into()).into(), StatusCode::BAD_REQUEST },
    invalid_status = { Error::InvalidStatus("Done".into()).into(), StatusCode::BAD_REQUEST },
    corrupted = { Error::CorruptedData("tickets.json".into()).into(), StatusCode::INTERNAL_SERVER_ERROR },
)]
fn status_mapping(err: ApiError, expected: StatusCode) {
    assert_eq!(err.status(), expected);
}

#[tokio::test]
async fn response_body_carries_message() {
    let response = ApiError::bad_request("userId is required").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "userId is required"}));
}

#[parameterized(
    present = { Some("x"), Some("x") },
    empty = { Some(""), None },
    blank = { Some("   "), None },
    absent = { None, None },
)]
fn required_filters_blank(input: Option<&str>, expected: Option<&str>) {
    assert_eq!(
        required(input.map(String::from)).as_deref(),
        expected
    );
}
