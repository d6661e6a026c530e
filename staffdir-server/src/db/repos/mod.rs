//! Repository implementations for database access

pub mod employees;

pub use employees::{DbError, EmployeeRepo};
