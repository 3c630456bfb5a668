//! Enrollment: the student <-> course pairing.
//!
//! The collection under a student is guarded by the student's existence, reported with the
//! structured `ENROLLMENT002` error rather than a bare 404. At most one enrollment exists per
//! (student, course) pair; the check happens here, before insert.

use crate::error::AppError;
use crate::model::{Enrollment, Student};
use crate::service::course::find_course;
use crate::service::student::find_student;
use crate::service::validation::{
    Fields, RequestValidator, ENROLLMENT_COURSE_MISSING, ENROLLMENT_STUDENT_MISSING,
};
use sqlx::{SqliteConnection, SqlitePool};

const ENROLLMENT_COLUMNS: &str = "enrollment_id, student_id, course_id";

pub struct EnrollmentService;

impl EnrollmentService {
    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Enrollment>, AppError> {
        let mut conn = pool.acquire().await?;
        let student = load_enrolling_student(&mut conn, student_id).await?;
        let rows = enrollments_of(&mut conn, student.student_id).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(format!(
                "student {} is not enrolled in any course",
                student_id
            )));
        }
        Ok(rows)
    }

    /// Enroll the student and return all of the student's enrollments.
    pub async fn enroll(
        pool: &SqlitePool,
        student_id: i64,
        body: &Fields,
    ) -> Result<Vec<Enrollment>, AppError> {
        let mut tx = pool.begin().await?;
        let student = load_enrolling_student(&mut tx, student_id).await?;
        let course_id = RequestValidator::enrollment_course_id(body)?;
        if find_course(&mut tx, course_id).await?.is_none() {
            return Err(ENROLLMENT_COURSE_MISSING.into());
        }
        if find_pair(&mut tx, student.student_id, course_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "student {} already enrolled in course {}",
                student_id, course_id
            )));
        }
        let sql = format!(
            "INSERT INTO enrollment (student_id, course_id) VALUES (?, ?) RETURNING {}",
            ENROLLMENT_COLUMNS
        );
        tracing::debug!(sql = %sql, student_id, course_id, "query (tx)");
        let created = sqlx::query_as::<_, Enrollment>(&sql)
            .bind(student.student_id)
            .bind(course_id)
            .fetch_one(&mut *tx)
            .await?;
        let rows = enrollments_of(&mut tx, student.student_id).await?;
        tx.commit().await?;
        tracing::info!(
            enrollment_id = created.enrollment_id,
            student_id,
            course_id,
            "student enrolled"
        );
        Ok(rows)
    }

    /// Remove one pairing. The student itself is not checked; a missing pair is a plain 404.
    pub async fn unenroll(
        pool: &SqlitePool,
        student_id: i64,
        course_id: i64,
    ) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        let enrollment = find_pair(&mut tx, student_id, course_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "enrollment of student {} in course {}",
                student_id, course_id
            ))
        })?;
        sqlx::query("DELETE FROM enrollment WHERE enrollment_id = ?")
            .bind(enrollment.enrollment_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(
            enrollment_id = enrollment.enrollment_id,
            student_id,
            course_id,
            "student unenrolled"
        );
        Ok(())
    }
}

async fn load_enrolling_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Student, AppError> {
    find_student(conn, student_id)
        .await?
        .ok_or_else(|| ENROLLMENT_STUDENT_MISSING.into())
}

async fn enrollments_of(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<Enrollment>, AppError> {
    let sql = format!(
        "SELECT {} FROM enrollment WHERE student_id = ? ORDER BY enrollment_id",
        ENROLLMENT_COLUMNS
    );
    let rows = sqlx::query_as::<_, Enrollment>(&sql)
        .bind(student_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

async fn find_pair(
    conn: &mut SqliteConnection,
    student_id: i64,
    course_id: i64,
) -> Result<Option<Enrollment>, AppError> {
    let sql = format!(
        "SELECT {} FROM enrollment WHERE student_id = ? AND course_id = ? \
         ORDER BY enrollment_id LIMIT 1",
        ENROLLMENT_COLUMNS
    );
    let row = sqlx::query_as::<_, Enrollment>(&sql)
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}
