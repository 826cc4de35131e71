use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/meta", get(handlers::get_meta))
        .route("/api/charts/cases", get(handlers::get_cases_chart))
        .route("/api/charts/icu", get(handlers::get_icu_chart))
        .route("/api/charts/deaths", get(handlers::get_deaths_chart))
        .with_state(state)
}
