use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use domain::{User, UserRepository};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
}

/// Build the application router. Everything except GET/POST on `/user`
/// falls through to axum's 405 handling.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/user", get(get_user).post(add_user))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GetUserQuery {
    id: Option<String>,
}

// Handler functions
async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<GetUserQuery>,
) -> impl IntoResponse {
    // Parsed by hand so a missing or non-integer id maps to 400 before
    // any storage access.
    let id = match query.id.as_deref().map(str::parse::<i32>) {
        Some(Ok(id)) => id,
        _ => return (StatusCode::BAD_REQUEST, "invalid id").into_response(),
    };

    match state.user_repository.find_by_id(id).await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "user not found").into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response(),
    }
}

async fn add_user(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    // Decoded from the raw body so that any malformed payload (bad syntax
    // or bad field types) maps to 400, never 422.
    let user: User = match serde_json::from_slice(&body) {
        Ok(user) => user,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid request body").into_response(),
    };

    info!("📥 Adding user {}", user.id);

    match state.user_repository.insert(&user).await {
        Ok(()) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response(),
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
