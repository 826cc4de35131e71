use crate::chart;
use crate::errors::AppError;
use crate::models::{ChartQuery, ChartResult, MetaResponse};
use crate::series::SWEDEN;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.meta))
}

pub async fn get_meta(State(state): State<AppState>) -> Json<MetaResponse> {
    Json(state.meta.as_ref().clone())
}

pub async fn get_cases_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResult>, AppError> {
    let (region, start_date, end_date) = resolve_query(&state, query)?;
    Ok(Json(chart::cases_chart(
        &state.data,
        &region,
        start_date,
        end_date,
    )))
}

pub async fn get_icu_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResult>, AppError> {
    let (region, start_date, end_date) = resolve_query(&state, query)?;
    Ok(Json(chart::icu_chart(
        &state.data,
        &region,
        start_date,
        end_date,
    )))
}

pub async fn get_deaths_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResult>, AppError> {
    let (region, start_date, end_date) = resolve_query(&state, query)?;
    Ok(Json(chart::deaths_chart(
        &state.data,
        &region,
        start_date,
        end_date,
    )))
}

/// Fill in the picker defaults (whole of Sweden, full date span) and reject
/// regions the tables do not know about. A known region with an empty window
/// is not an error; it renders as an empty chart downstream.
fn resolve_query(
    state: &AppState,
    query: ChartQuery,
) -> Result<(String, NaiveDate, NaiveDate), AppError> {
    let region = query.region.unwrap_or_else(|| SWEDEN.to_string());
    if !state.meta.regions.iter().any(|known| *known == region) {
        return Err(AppError::bad_request(format!("unknown region '{region}'")));
    }

    let start_date = query.start_date.unwrap_or(state.meta.min_date);
    let end_date = query.end_date.unwrap_or(state.meta.max_date);
    Ok((region, start_date, end_date))
}
