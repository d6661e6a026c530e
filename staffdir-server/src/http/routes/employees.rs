//! Employee listing endpoints
//!
//! The HTML page and the JSON mirror share one resolution path, so
//! `?page=` behaves identically on both.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use maud::Markup;
use serde::Serialize;
use staffdir_core::{Employee, Page};

use crate::db::EmployeeRepo;
use crate::http::error::ApiError;
use crate::http::extractors::PageParam;
use crate::http::server::AppState;
use crate::views;

/// Page of employees plus navigation numbers for API clients
#[derive(Serialize)]
pub struct PageResponse {
    #[serde(flatten)]
    pub page: Page<Employee>,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub has_other_pages: bool,
    pub start_index: u64,
    pub end_index: u64,
}

impl From<Page<Employee>> for PageResponse {
    fn from(page: Page<Employee>) -> Self {
        Self {
            previous_page: page.previous_page_number(),
            next_page: page.next_page_number(),
            has_other_pages: page.has_other_pages(),
            start_index: page.start_index(),
            end_index: page.end_index(),
            page,
        }
    }
}

/// GET / - the directory is the only page
async fn root() -> Redirect {
    Redirect::to("/employees/")
}

/// GET /employees/ - HTML listing
async fn index(
    State(state): State<Arc<AppState>>,
    PageParam(request): PageParam,
) -> Result<Markup, ApiError> {
    let page = EmployeeRepo::new(&state.pool)
        .page(state.page_size, &request)
        .await?;

    Ok(views::employees::index(&page))
}

/// GET /api/employees - JSON listing
async fn list_employees(
    State(state): State<Arc<AppState>>,
    PageParam(request): PageParam,
) -> Result<Json<PageResponse>, ApiError> {
    let page = EmployeeRepo::new(&state.pool)
        .page(state.page_size, &request)
        .await?;

    Ok(Json(PageResponse::from(page)))
}

/// GET /api/employees/{id} - single employee
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    let employee = EmployeeRepo::new(&state.pool).get(id).await?;
    Ok(Json(employee))
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/employees", get(index))
        .route("/employees/", get(index))
        .route("/api/employees", get(list_employees))
        .route("/api/employees/{id}", get(get_employee))
}
