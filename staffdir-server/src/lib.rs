//! staffdir-server: HTTP front end for the employee directory
//!
//! Serves the paginated HTML listing at `/employees/`, a JSON mirror at
//! `/api/employees`, and a health check. Rows live in SQLite via sqlx.

pub mod db;
pub mod http;
pub mod views;

pub use db::{create_pool, EmployeeRepo};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
