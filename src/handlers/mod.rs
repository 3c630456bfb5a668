//! HTTP handlers for courses, students, enrollments and todos.
//!
//! Each handler starts with the lookup guard for the resource in its path,
//! then delegates to the service.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod todo;

use crate::error::AppError;

/// Path ids are unsigned digit strings; anything else names no resource.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let invalid = || AppError::NotFound(format!("invalid id '{}'", id_str));
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    id_str.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound(_))));
        assert_eq!(parse_id("007").unwrap(), 7);
        for bad in ["1.0", "+1", "-1", " 1", "", "99999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(AppError::NotFound(_))), "{bad:?}");
        }
    }
}
