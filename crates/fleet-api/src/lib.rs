#![allow(non_snake_case)]

pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    let apiRoutes = routes::api_routes(state.clone());

    Router::new().merge(apiRoutes).with_state(state)
}
