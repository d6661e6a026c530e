//! HTML rendering (maud)

pub mod employees;
pub mod layout;
