use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/api/servers", get(get_servers))
}

async fn get_servers(State(state): State<AppState>) -> Response {
    match fleet_providers::collect(state.fixture.path()).await {
        Ok(servers) => Json(servers).into_response(),
        Err(e) => {
            tracing::warn!("serving 500 for /api/servers: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
