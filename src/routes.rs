//! Route table.
//!
//! Every (method, path) pair maps to exactly one handler. The table is built
//! once at startup; axum resolves requests against it without any string
//! dispatch in the handlers.

use axum::{
    Json, Router,
    http::{Method, StatusCode},
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{accounts, health},
    state::AppState,
};

/// Build the application router.
///
/// | Method | Path            | Handler          |
/// |--------|-----------------|------------------|
/// | GET    | `/account`      | `list_accounts`  |
/// | POST   | `/account`      | `create_account` |
/// | GET    | `/account/{id}` | `get_account`    |
/// | PUT    | `/account/{id}` | `update_account` |
/// | DELETE | `/account/{id}` | `delete_account` |
/// | GET    | `/health`       | `health_check`   |
///
/// Unknown paths get a JSON 404; a known path with an unsupported method
/// gets axum's 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/account", get(accounts::list_accounts))
        .route("/account", post(accounts::create_account))
        .route("/account/{id}", get(accounts::get_account))
        .route("/account/{id}", put(accounts::update_account))
        .route("/account/{id}", delete(accounts::delete_account))
        .fallback(route_not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "route not found" })),
    )
}
