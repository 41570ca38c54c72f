mod api;
mod extractor;
mod pages;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::api::{menu_routes, order_routes, stats_routes};
pub use self::extractor::SimpleValidatedJson;
pub use self::pages::page_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::orders::list_orders,
        api::orders::create_order,
        api::orders::get_order,
        api::orders::update_order_status,
        api::orders::delete_order,

        api::menu::list_menu,

        api::stats::get_revenue,
        api::stats::get_statistics,
    ),
    tags(
        (name = "Order", description = "Order endpoints"),
        (name = "Menu", description = "Menu catalog endpoints"),
        (name = "Stats", description = "Revenue and statistics endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(order_routes(shared_state.clone()))
            .merge(menu_routes(shared_state.clone()))
            .merge(stats_routes(shared_state.clone()))
            .merge(page_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
