//! Request validation. The first failing field decides the reported error.

use crate::error::ApiError;
use serde_json::Value;
use std::collections::HashMap;

/// Flat request body: field name -> raw value.
pub type Fields = HashMap<String, Value>;

pub const COURSE_NAME_INVALID: ApiError =
    ApiError::bad_request("COURSE001", "Course Name is required and should be string.");
pub const COURSE_CODE_INVALID: ApiError =
    ApiError::bad_request("COURSE002", "Course Code is required and should be string.");
pub const COURSE_DESCRIPTION_INVALID: ApiError =
    ApiError::bad_request("COURSE003", "Course Description should be string.");
/// Same code as the required-field check; clients key on it.
pub const COURSE_CODE_TAKEN: ApiError =
    ApiError::bad_request("COURSE002", "Course Code already exists");

pub const ROLL_NUMBER_INVALID: ApiError =
    ApiError::bad_request("STUDENT001", "Roll Number required and should be String");
pub const FIRST_NAME_INVALID: ApiError =
    ApiError::bad_request("STUDENT002", "First Name is required and should be String");
pub const LAST_NAME_INVALID: ApiError = ApiError::bad_request("STUDENT003", "Last Name is String");
pub const ROLL_NUMBER_TAKEN: ApiError =
    ApiError::bad_request("STUDENT001", "Student already exists");

pub const ENROLLMENT_COURSE_MISSING: ApiError =
    ApiError::bad_request("ENROLLMENT001", "Course does not exist");
pub const ENROLLMENT_STUDENT_MISSING: ApiError =
    ApiError::not_found("ENROLLMENT002", "Student not found");
pub const ENROLLMENT_COURSE_ID_INVALID: ApiError =
    ApiError::bad_request("ENROLLMENT003", "Course ID is required and should be an integer");

pub const TODO_TASK_REQUIRED: ApiError = ApiError::bad_request("TODO001", "Task is required");
pub const TODO_SUMMARY_REQUIRED: ApiError = ApiError::bad_request("TODO002", "Summary is required");
pub const TODO_TASK_INVALID: ApiError = ApiError::bad_request("TODO003", "Task should be string");
pub const TODO_SUMMARY_INVALID: ApiError =
    ApiError::bad_request("TODO004", "Summary should be string");

/// An optional text column as sent by the client: left out, sent as null, or sent as a string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OptionalText {
    #[default]
    Absent,
    Null,
    Text(String),
}

impl OptionalText {
    /// Value to store for a new row.
    pub fn into_new(self) -> Option<String> {
        match self {
            OptionalText::Text(s) => Some(s),
            OptionalText::Absent | OptionalText::Null => None,
        }
    }

    /// Value to store over `current`; an absent field keeps it.
    pub fn apply_to(self, current: Option<String>) -> Option<String> {
        match self {
            OptionalText::Absent => current,
            OptionalText::Null => None,
            OptionalText::Text(s) => Some(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseInput {
    pub course_name: String,
    pub course_code: String,
    pub course_description: OptionalText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentInput {
    pub roll_number: String,
    pub first_name: String,
    pub last_name: OptionalText,
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn course(body: &Fields) -> Result<CourseInput, ApiError> {
        let course_name = required_text(body, "course_name").ok_or(COURSE_NAME_INVALID)?;
        let course_code = required_text(body, "course_code").ok_or(COURSE_CODE_INVALID)?;
        let course_description =
            optional_text(body, "course_description").ok_or(COURSE_DESCRIPTION_INVALID)?;
        Ok(CourseInput {
            course_name,
            course_code,
            course_description,
        })
    }

    pub fn student(body: &Fields) -> Result<StudentInput, ApiError> {
        let roll_number = required_text(body, "roll_number").ok_or(ROLL_NUMBER_INVALID)?;
        let first_name = required_text(body, "first_name").ok_or(FIRST_NAME_INVALID)?;
        let last_name = optional_text(body, "last_name").ok_or(LAST_NAME_INVALID)?;
        Ok(StudentInput {
            roll_number,
            first_name,
            last_name,
        })
    }

    /// `course_id` as an integer; numeric strings are accepted so form bodies work.
    /// JSON floats count when they have no fractional part.
    pub fn enrollment_course_id(body: &Fields) -> Result<i64, ApiError> {
        let course_id = match body.get("course_id") {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        course_id.ok_or(ENROLLMENT_COURSE_ID_INVALID)
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Present, a string, and not empty.
fn required_text(body: &Fields, key: &str) -> Option<String> {
    match body.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// None when the field is present with a non-string, non-null value.
fn optional_text(body: &Fields, key: &str) -> Option<OptionalText> {
    match body.get(key) {
        None => Some(OptionalText::Absent),
        Some(Value::Null) => Some(OptionalText::Null),
        Some(Value::String(s)) => Some(OptionalText::Text(s.clone())),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(m) => m.into_iter().collect(),
            _ => panic!("fields must be an object"),
        }
    }

    #[test]
    fn course_requires_name_before_code() {
        let err = RequestValidator::course(&fields(json!({}))).unwrap_err();
        assert_eq!(err.code, "COURSE001");

        let err = RequestValidator::course(&fields(json!({"course_name": "Intro"}))).unwrap_err();
        assert_eq!(err.code, "COURSE002");
    }

    #[test]
    fn course_rejects_empty_and_non_string_required_fields() {
        let body = fields(json!({"course_name": "", "course_code": "C1"}));
        let err = RequestValidator::course(&body).unwrap_err();
        assert_eq!(err, COURSE_NAME_INVALID);

        let body = fields(json!({"course_name": "Intro", "course_code": 7}));
        let err = RequestValidator::course(&body).unwrap_err();
        assert_eq!(err, COURSE_CODE_INVALID);
    }

    #[test]
    fn first_failure_wins() {
        let err = RequestValidator::course(&fields(json!({
            "course_name": 1,
            "course_code": 2,
            "course_description": 3
        })))
        .unwrap_err();
        assert_eq!(err.code, "COURSE001");
    }

    #[test]
    fn course_description_is_type_checked_only_when_present() {
        let body = fields(json!({"course_name": "Intro", "course_code": "C1"}));
        let input = RequestValidator::course(&body).unwrap();
        assert_eq!(input.course_description, OptionalText::Absent);

        let err = RequestValidator::course(&fields(json!({
            "course_name": "Intro",
            "course_code": "C1",
            "course_description": ["x"]
        })))
        .unwrap_err();
        assert_eq!(err.code, "COURSE003");
    }

    #[test]
    fn student_codes_follow_field_order() {
        let err = RequestValidator::student(&fields(json!({"first_name": "A"}))).unwrap_err();
        assert_eq!(err.code, "STUDENT001");

        let err = RequestValidator::student(&fields(json!({"roll_number": "R1"}))).unwrap_err();
        assert_eq!(err.code, "STUDENT002");

        let err = RequestValidator::student(&fields(json!({
            "roll_number": "R1",
            "first_name": "A",
            "last_name": false
        })))
        .unwrap_err();
        assert_eq!(err, LAST_NAME_INVALID);
    }

    #[test]
    fn empty_last_name_is_an_explicit_value() {
        let input = RequestValidator::student(&fields(json!({
            "roll_number": "R1",
            "first_name": "A",
            "last_name": ""
        })))
        .unwrap();
        assert_eq!(input.last_name, OptionalText::Text(String::new()));
    }

    #[test]
    fn optional_text_apply_to() {
        let current = Some("Old".to_string());
        assert_eq!(OptionalText::Absent.apply_to(current.clone()), current);
        assert_eq!(OptionalText::Null.apply_to(current.clone()), None);
        assert_eq!(
            OptionalText::Text(String::new()).apply_to(current),
            Some(String::new())
        );
    }

    #[test]
    fn enrollment_course_id_accepts_integral_numbers_and_numeric_strings() {
        for (body, expected) in [
            (json!({"course_id": 3}), 3),
            (json!({"course_id": " 12 "}), 12),
            (json!({"course_id": 4.0}), 4),
        ] {
            assert_eq!(RequestValidator::enrollment_course_id(&fields(body)), Ok(expected));
        }
    }

    #[test]
    fn enrollment_course_id_rejects_everything_else() {
        for body in [
            json!({}),
            json!({"course_id": null}),
            json!({"course_id": "abc"}),
            json!({"course_id": 1.5}),
            json!({"course_id": 1e300}),
            json!({"course_id": "1.0"}),
            json!({"course_id": true}),
        ] {
            assert_eq!(
                RequestValidator::enrollment_course_id(&fields(body)),
                Err(ENROLLMENT_COURSE_ID_INVALID)
            );
        }
    }
}
