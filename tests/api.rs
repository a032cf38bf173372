//! Router tests for validation and auth paths. None of these reach the database.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{offline_state, router, send, send_with_headers};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_and_version() {
    let (status, body) = send(router(offline_state()), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(router(offline_state()), Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "market-stalls");
}

#[tokio::test]
async fn pay_rent_requires_all_fields() {
    let app = router(offline_state());
    let cases = [
        json!({}),
        json!({"vendorId": 1, "stallId": 2, "amount": 100}),
        json!({"vendorId": 1, "stallId": 2, "amount": 0, "daysToPay": 3}),
        json!({"vendorId": 1, "stallId": 2, "amount": 100, "daysToPay": 0}),
        json!({"vendorId": 1, "stallId": 2, "amount": -20, "daysToPay": 3}),
    ];
    for body in cases {
        let (status, resp) = send(app.clone(), Method::POST, "/api/vendors/payrent", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(resp["msg"], "Invalid data provided. All fields are required.");
        assert_eq!(resp["code"], "validation_error");
    }
}

#[tokio::test]
async fn top_up_rejects_non_positive_amount() {
    let (status, resp) = send(
        router(offline_state()),
        Method::POST,
        "/api/vendors/topup",
        Some(json!({"vendorId": 3, "amount": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["msg"], "Invalid data provided.");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vendors/topup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router(offline_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logins_require_both_fields() {
    let app = router(offline_state());
    let cases = [
        ("/api/vendors/login", json!({"businessId": "MNL-BID-100001"})),
        ("/api/collectors/login", json!({"password": "x"})),
        ("/api/admins/login", json!({"username": "admin", "password": ""})),
    ];
    for (uri, body) in cases {
        let (status, _) = send(app.clone(), Method::POST, uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn report_queries_require_market_name() {
    let app = router(offline_state());
    for uri in [
        "/api/reports/insights",
        "/api/reports/market-summary",
        "/api/reports/market-summary?market_name=%20",
    ] {
        let (status, resp) = send(app.clone(), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(resp["msg"], "market_name query parameter is required.");
    }
}

#[tokio::test]
async fn lookup_requires_business_id() {
    let (status, resp) = send(router(offline_state()), Method::GET, "/api/stalls/lookup", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["msg"], "Business ID is required.");
}

#[tokio::test]
async fn admin_me_checks_bearer_token() {
    let state = offline_state();

    let (status, _) = send(router(state.clone()), Method::GET, "/api/admins/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_with_headers(
        router(state.clone()),
        Method::GET,
        "/api/admins/me",
        None,
        &[("authorization", "Bearer not-a-token")],
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = state.tokens.issue(1, "Administrator").unwrap();
    let bearer = format!("Bearer {}", token);
    let (status, body) = send_with_headers(
        router(state),
        Method::GET,
        "/api/admins/me",
        None,
        &[("authorization", bearer.as_str())],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Administrator"}));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(router(offline_state()), Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
