//! Employee records
//!
//! An employee is an id and a job title. Listings are always ordered by
//! ascending id, which is what makes page slicing deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Maximum length for a job title
const MAX_TITLE_LEN: usize = 255;

/// Stored employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub title: String,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Validated job title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeTitle(String);

impl EmployeeTitle {
    /// Create a title, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use staffdir_core::EmployeeTitle;
    ///
    /// assert_eq!(EmployeeTitle::new("  Actuary ").unwrap().as_str(), "Actuary");
    /// assert!(EmployeeTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employee waiting to be inserted (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub title: EmployeeTitle,
}

impl NewEmployee {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: EmployeeTitle::new(title)?,
        })
    }
}
