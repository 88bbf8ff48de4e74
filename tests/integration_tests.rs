use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tower::Service;
use weekend_validator::settings::Settings;
use weekend_validator::{AppState, build_router};

/// Helper function to create test app state
fn create_test_state(enable_swagger: bool) -> AppState {
    let settings = Settings {
        debug: true,
        enable_swagger,
        port: 8080,
    };

    AppState::new(settings)
}

/// Helper to send a request through a fresh router
async fn send(request: Request<Body>) -> Response {
    let mut app = build_router(create_test_state(true));
    app.call(request).await.unwrap()
}

async fn get(uri: &str) -> Response {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &str) -> Response {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Helper to extract response body as JSON
async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Weekend Validator API");
    assert!(body["endpoints"]["/weekends/validate"].is_string());
}

#[tokio::test]
async fn test_healthz_endpoints() {
    for uri in ["/healthz/live", "/healthz/ready"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await["status"], "ok");
    }
}

#[tokio::test]
async fn test_get_weekend_lowercase_saturday() {
    // Arrange & Act
    let response = get("/weekends/saturday").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["weekend"], "Saturday");
}

#[tokio::test]
async fn test_get_weekend_uppercase_sunday() {
    let response = get("/weekends/SUNDAY").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["weekend"], "Sunday");
}

#[tokio::test]
async fn test_get_weekend_weekday_rejected() {
    let response = get("/weekends/Wednesday").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Wednesday is not a weekend");
}

#[tokio::test]
async fn test_get_weekend_unknown_day_rejected() {
    let response = get("/weekends/blah").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid weekend: blah");
}

#[tokio::test]
async fn test_get_weekend_invalid_utf8_segment() {
    let response = get("/weekends/%FF").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid weekend: %FF");
}

#[tokio::test]
async fn test_validate_weekend_success() {
    let response = post_json("/weekends/validate", r#"{"day": "sunday"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["weekend"], "Sunday");
}

#[tokio::test]
async fn test_validate_weekend_weekday_rejected() {
    let response = post_json("/weekends/validate", r#"{"day": "Friday"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Friday is not a weekend");
}

#[tokio::test]
async fn test_validate_weekend_unknown_day_rejected() {
    let response = post_json("/weekends/validate", r#"{"day": "Funday"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid request: "));
    assert!(message.contains("invalid day of week: Funday"));
}

#[tokio::test]
async fn test_validate_weekend_malformed_json() {
    for payload in [r#"{"day": "#, r#"{}"#, r#"{"day": 5}"#] {
        let response = post_json("/weekends/validate", payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {payload}");
        let body = response_json(response).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request: ")
        );
    }
}

#[tokio::test]
async fn test_validate_weekend_missing_content_type() {
    let response = send(
        Request::builder()
            .method(Method::POST)
            .uri("/weekends/validate")
            .body(Body::from(r#"{"day": "Saturday"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let response = get("/weekdays/monday").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_enabled() {
    let response = get("/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["paths"]["/weekends/{weekend}"].is_object());
}

#[tokio::test]
async fn test_openapi_disabled() {
    let mut app = build_router(create_test_state(false));

    let response = app
        .call(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
