use crate::{
    abstract_trait::DynMenuQueryService, domain::responses::MenuItemResponse, errors::HttpError,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/menu/",
    tag = "Menu",
    responses(
        (status = 200, description = "Menu catalog, ordered by name", body = Vec<MenuItemResponse>)
    )
)]
pub async fn list_menu(
    Extension(service): Extension<DynMenuQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.list_catalog().await?;
    Ok((StatusCode::OK, Json(items)))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/menu/", get(list_menu))
        .layer(Extension(app_state.di_container.menu_service.clone()))
}
