//! Full-stack flows over the real router and a real SQLite file.

use api_server::{app, AppState};
use application::UserApp;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use domain::User;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app(dir: &TempDir) -> Router {
    let db_path = dir.path().join("users.db");
    let user_app = UserApp::new(db_path.to_str().unwrap());
    app(AppState {
        user_repository: user_app.user_repository.clone(),
    })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn full_user_flow() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    // 1. Add user via HTTP
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user")
                .body(Body::from(r#"{"id":600,"name":"FunctionalDBUser"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // 2. Retrieve user via HTTP
    let response = app
        .oneshot(Request::builder().uri("/user?id=600").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#""name":"FunctionalDBUser""#));
    let fetched: User = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched, User::new(600, "FunctionalDBUser".to_string()));
}

#[tokio::test]
async fn unknown_user_returns_404() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(Request::builder().uri("/user?id=9999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_id_returns_400() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(Request::builder().uri("/user?id=abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_insert_surfaces_as_500_and_keeps_first_row() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let post = |body: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/user")
            .body(Body::from(body))
            .unwrap()
    };

    let first = app
        .clone()
        .oneshot(post(r#"{"id":100,"name":"IntegrationUser"}"#))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same id again: the primary-key constraint rejects it, which this
    // service reports only as a generic server error.
    let second = app
        .clone()
        .oneshot(post(r#"{"id":100,"name":"Impostor"}"#))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .oneshot(Request::builder().uri("/user?id=100").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: User = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(fetched.name, "IntegrationUser");
}

#[tokio::test]
async fn other_methods_on_user_are_rejected_with_405() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("healthy"));
}
