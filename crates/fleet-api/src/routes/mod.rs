pub mod servers;

use axum::Router;

use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().merge(servers::routes(state))
}
