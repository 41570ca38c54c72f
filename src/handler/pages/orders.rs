use crate::{
    abstract_trait::{DynMenuQueryService, DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{
            CreateOrderFormRequest, OrderFormErrors, OrderPageQuery, UpdateOrderStatusRequest,
        },
        responses::{MenuItemResponse, OrderResponse},
    },
    errors::{HttpError, ServiceError},
    model::{OrderItem, OrderStatus},
    state::AppState,
};
use askama::Template;
use axum::{
    extract::{Extension, Path, Query},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::Form;
use std::fmt::Write as _;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

struct ItemRow {
    name: String,
    price: String,
}

struct OrderRow {
    id: i64,
    table_number: i64,
    items: Vec<ItemRow>,
    total_price: String,
    status_label: &'static str,
    badge_class: &'static str,
    created_at: String,
}

impl From<OrderResponse> for OrderRow {
    fn from(order: OrderResponse) -> Self {
        OrderRow {
            id: order.id,
            table_number: order.table_number,
            items: order
                .items
                .into_iter()
                .map(|OrderItem { name, price }| ItemRow {
                    name,
                    price: format!("{price:.2}"),
                })
                .collect(),
            total_price: format!("{:.2}", order.total_price),
            status_label: order.status.label(),
            badge_class: order.status.badge_class(),
            created_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

struct StatusOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

fn status_options(selected: Option<OrderStatus>) -> Vec<StatusOption> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            label: status.label(),
            selected: selected == Some(status),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "order_list.html")]
struct OrderListTemplate {
    orders: Vec<OrderRow>,
    page: i64,
    total_pages: i64,
    has_previous: bool,
    has_next: bool,
    previous_page: i64,
    next_page: i64,
    filter_query: String,
    filter_table_number: String,
    statuses: Vec<StatusOption>,
}

struct MenuChoice {
    id: i64,
    name: String,
    price: String,
    category: String,
    checked: bool,
}

fn menu_choices(menu: Vec<MenuItemResponse>, selected: &[i64]) -> Vec<MenuChoice> {
    menu.into_iter()
        .map(|item| MenuChoice {
            checked: selected.contains(&item.id),
            id: item.id,
            name: item.name,
            price: format!("{:.2}", item.price),
            category: item.category,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "order_form.html")]
struct OrderFormTemplate {
    table_number: String,
    items_text: String,
    items_json: String,
    menu: Vec<MenuChoice>,
    errors: OrderFormErrors,
}

#[derive(Template)]
#[template(path = "order_update_status.html")]
struct UpdateStatusTemplate {
    id: i64,
    table_number: i64,
    statuses: Vec<StatusOption>,
    error: String,
}

#[derive(Template)]
#[template(path = "order_confirm_delete.html")]
struct ConfirmDeleteTemplate {
    id: i64,
    table_number: i64,
    total_price: String,
}

fn render<T: Template>(template: &T) -> Result<Html<String>, HttpError> {
    template
        .render()
        .map(Html)
        .map_err(|err| HttpError::Internal(format!("Template rendering failed: {err}")))
}

pub async fn home() -> Redirect {
    Redirect::to("/orders/")
}

pub async fn order_list_page(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<OrderPageQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let (orders, pagination) = service
        .find_page(&(&params).into(), params.page.unwrap_or(1))
        .await?;

    let mut filter_query = String::new();
    if let Some(table_number) = params.table_number {
        let _ = write!(filter_query, "table_number={table_number}&");
    }
    if let Some(status) = params.status {
        let _ = write!(filter_query, "status={status}&");
    }

    let template = OrderListTemplate {
        orders: orders.into_iter().map(OrderRow::from).collect(),
        page: pagination.page,
        total_pages: pagination.total_pages,
        has_previous: pagination.has_previous(),
        has_next: pagination.has_next(),
        previous_page: pagination.page - 1,
        next_page: pagination.page + 1,
        filter_query,
        filter_table_number: params
            .table_number
            .map(|n| n.to_string())
            .unwrap_or_default(),
        statuses: status_options(params.status),
    };

    render(&template)
}

pub async fn order_create_form(
    Extension(menu): Extension<DynMenuQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let available = menu.list_available().await?;

    let template = OrderFormTemplate {
        table_number: String::new(),
        items_text: String::new(),
        items_json: String::new(),
        menu: menu_choices(available, &[]),
        errors: OrderFormErrors::default(),
    };

    render(&template)
}

pub async fn order_create_submit(
    Extension(commands): Extension<DynOrderCommandService>,
    Extension(menu): Extension<DynMenuQueryService>,
    Form(form): Form<CreateOrderFormRequest>,
) -> Result<Response, HttpError> {
    match commands.create_from_form(&form).await {
        Ok(_) => Ok(Redirect::to("/orders/").into_response()),
        Err(ServiceError::Form(errors)) => {
            let available = menu.list_available().await?;

            let template = OrderFormTemplate {
                table_number: form.table_number.unwrap_or_default(),
                items_text: form.items_text,
                items_json: form.items,
                menu: menu_choices(available, &form.menu_items),
                errors,
            };

            Ok(render(&template)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn order_update_status_form(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.find_by_id(id).await?;

    let template = UpdateStatusTemplate {
        id: order.id,
        table_number: order.table_number,
        statuses: status_options(Some(order.status)),
        error: String::new(),
    };

    render(&template)
}

pub async fn order_update_status_submit(
    Extension(queries): Extension<DynOrderQueryService>,
    Extension(commands): Extension<DynOrderCommandService>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateOrderStatusRequest>,
) -> Result<Response, HttpError> {
    match commands.update_status(id, &form.status).await {
        Ok(_) => Ok(Redirect::to("/orders/").into_response()),
        Err(ServiceError::Validation(message)) => {
            let order = queries.find_by_id(id).await?;

            let template = UpdateStatusTemplate {
                id: order.id,
                table_number: order.table_number,
                statuses: status_options(Some(order.status)),
                error: message,
            };

            Ok(render(&template)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn order_delete_confirm(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.find_by_id(id).await?;

    let template = ConfirmDeleteTemplate {
        id: order.id,
        table_number: order.table_number,
        total_price: format!("{:.2}", order.total_price),
    };

    render(&template)
}

pub async fn order_delete_submit(
    Extension(commands): Extension<DynOrderCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    commands.delete(id).await?;
    Ok(Redirect::to("/orders/"))
}

pub fn page_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(home))
        .route("/orders/", get(order_list_page))
        .route(
            "/orders/create/",
            get(order_create_form).post(order_create_submit),
        )
        .route(
            "/orders/update-status/{id}/",
            get(order_update_status_form).post(order_update_status_submit),
        )
        .route(
            "/orders/delete/{id}/",
            get(order_delete_confirm).post(order_delete_submit),
        )
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
        .layer(Extension(app_state.di_container.menu_service.clone()))
}
