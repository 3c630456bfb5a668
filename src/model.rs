//! Row types and their JSON projections.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Pairing of one student with one course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Enrollment {
    pub enrollment_id: i64,
    pub student_id: i64,
    pub course_id: i64,
}
