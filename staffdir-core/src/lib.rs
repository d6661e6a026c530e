//! staffdir-core: employee records and page resolution
//!
//! Everything here is storage- and transport-agnostic. The server crate
//! feeds counts and rows in, and renders what comes back out.

pub mod config;
pub mod employee;
pub mod error;
pub mod faker;
pub mod pagination;
pub mod validation;

pub use config::DirectoryConfig;
pub use employee::{Employee, EmployeeTitle, NewEmployee};
pub use error::{DirectoryError, Result};
pub use faker::JobTitleFaker;
pub use pagination::{
    resolve, Page, PageRequest, PageSize, PageWindow, ParsedPage, Resolution, DEFAULT_PAGE_SIZE,
};
pub use validation::ValidationError;
