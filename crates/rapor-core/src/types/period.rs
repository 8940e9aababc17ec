//! Academic period type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RaporError, RaporResult};

/// A (semester, academic year) pair scoping grade data and clustering runs.
///
/// Both parts are trimmed, non-empty and free of NUL bytes. The NUL byte is
/// reserved as the separator in storage keys.
///
/// # Example
///
/// ```
/// use rapor_core::types::Period;
///
/// let period = Period::new("Ganjil", "2024/2025").unwrap();
/// assert_eq!(period.to_string(), "Ganjil 2024/2025");
/// assert!(Period::new("", "2024/2025").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    /// Semester name, e.g. "Ganjil" or "1".
    pub semester: String,

    /// Academic year, e.g. "2024/2025".
    pub academic_year: String,
}

impl Period {
    /// Create a validated period.
    ///
    /// # Errors
    ///
    /// Returns `RaporError::Validation` if either part is empty after
    /// trimming or contains a NUL byte.
    pub fn new(semester: impl Into<String>, academic_year: impl Into<String>) -> RaporResult<Self> {
        let period = Self {
            semester: semester.into().trim().to_string(),
            academic_year: academic_year.into().trim().to_string(),
        };
        period.validate()?;
        Ok(period)
    }

    /// Validate a period obtained without [`Period::new`] (e.g. deserialized).
    pub fn validate(&self) -> RaporResult<()> {
        validate_part("semester", &self.semester)?;
        validate_part("academic_year", &self.academic_year)
    }
}

fn validate_part(name: &str, value: &str) -> RaporResult<()> {
    if value.trim().is_empty() {
        return Err(RaporError::validation(format!("{} must not be empty", name)));
    }
    if value.contains('\0') {
        return Err(RaporError::validation(format!(
            "{} must not contain NUL bytes",
            name
        )));
    }
    Ok(())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.semester, self.academic_year)
    }
}
