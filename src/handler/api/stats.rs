use crate::{
    abstract_trait::DynStatsService,
    domain::{
        requests::RevenueQuery,
        responses::{RevenueResponse, StatisticsResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/revenue/",
    tag = "Stats",
    params(RevenueQuery),
    responses(
        (status = 200, description = "Paid revenue over the period", body = RevenueResponse),
        (status = 400, description = "Unparseable date bound", body = ErrorResponse)
    )
)]
pub async fn get_revenue(
    Extension(service): Extension<DynStatsService>,
    Query(params): Query<RevenueQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let revenue = service.revenue(&params).await?;
    Ok((StatusCode::OK, Json(revenue)))
}

#[utoipa::path(
    get,
    path = "/api/statistics/",
    tag = "Stats",
    responses(
        (status = 200, description = "Order counts and paid average", body = StatisticsResponse)
    )
)]
pub async fn get_statistics(
    Extension(service): Extension<DynStatsService>,
) -> Result<impl IntoResponse, HttpError> {
    let statistics = service.statistics().await?;
    Ok((StatusCode::OK, Json(statistics)))
}

pub fn stats_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/revenue/", get(get_revenue))
        .route("/api/statistics/", get(get_statistics))
        .layer(Extension(app_state.di_container.stats_service.clone()))
}
