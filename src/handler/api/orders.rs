use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderApiRequest, OrderListQuery, UpdateOrderStatusRequest},
        responses::{CreatedOrderResponse, OrderResponse, StatusUpdatedResponse},
    },
    errors::{ErrorResponse, HttpError},
    handler::extractor::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders/",
    tag = "Order",
    params(OrderListQuery),
    responses(
        (status = 200, description = "List of orders, ascending by id", body = Vec<OrderResponse>),
        (status = 400, description = "Invalid filter", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<OrderListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.find_all(&(&params).into()).await?;
    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    post,
    path = "/api/orders/",
    tag = "Order",
    request_body = CreateOrderApiRequest,
    responses(
        (status = 201, description = "Order created", body = CreatedOrderResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderApiRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.create_from_api(&body).await?;

    info!("Created order #{} via API", order.id);
    Ok((StatusCode::CREATED, Json(CreatedOrderResponse { id: order.id })))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Unknown order", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = StatusUpdatedResponse),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "Unknown order", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_status(id, &body.status).await?;

    info!("Order #{id} moved to {}", body.status);
    Ok((
        StatusCode::OK,
        Json(StatusUpdatedResponse {
            success: true,
            message: "Status updated".to_string(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}/",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Unknown order", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;

    info!("Deleted order #{id}");
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders/", get(list_orders))
        .route("/api/orders/", post(create_order))
        .route("/api/orders/{id}/", get(get_order))
        .route("/api/orders/{id}/", patch(update_order_status))
        .route("/api/orders/{id}/", delete(delete_order))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
}
