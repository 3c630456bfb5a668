//! Course CRUD. Every operation is one transaction.

use crate::error::AppError;
use crate::model::Course;
use crate::service::validation::{Fields, RequestValidator, COURSE_CODE_TAKEN};
use sqlx::{SqliteConnection, SqlitePool};

const COURSE_COLUMNS: &str = "course_id, course_code, course_name, course_description";

pub struct CourseService;

impl CourseService {
    pub async fn create(pool: &SqlitePool, body: &Fields) -> Result<Course, AppError> {
        let input = RequestValidator::course(body)?;
        let mut tx = pool.begin().await?;
        if find_by_code(&mut tx, &input.course_code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "course_code '{}' already exists",
                input.course_code
            )));
        }
        let sql = format!(
            "INSERT INTO course (course_code, course_name, course_description) \
             VALUES (?, ?, ?) RETURNING {}",
            COURSE_COLUMNS
        );
        tracing::debug!(sql = %sql, "query (tx)");
        let course = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.course_code)
            .bind(&input.course_name)
            .bind(input.course_description.into_new())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(
            course_id = course.course_id,
            course_code = %course.course_code,
            "course created"
        );
        Ok(course)
    }

    pub async fn read(pool: &SqlitePool, course_id: i64) -> Result<Course, AppError> {
        let mut conn = pool.acquire().await?;
        load_course(&mut conn, course_id).await
    }

    /// Overwrite name and code; the description only changes when the body carries it.
    pub async fn update(
        pool: &SqlitePool,
        course_id: i64,
        body: &Fields,
    ) -> Result<Course, AppError> {
        let mut tx = pool.begin().await?;
        let current = load_course(&mut tx, course_id).await?;
        let input = RequestValidator::course(body)?;
        if input.course_code != current.course_code
            && find_by_code(&mut tx, &input.course_code).await?.is_some()
        {
            return Err(COURSE_CODE_TAKEN.into());
        }
        let description = input.course_description.apply_to(current.course_description);
        let sql = format!(
            "UPDATE course SET course_code = ?, course_name = ?, course_description = ? \
             WHERE course_id = ? RETURNING {}",
            COURSE_COLUMNS
        );
        tracing::debug!(sql = %sql, course_id, "query (tx)");
        let course = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.course_code)
            .bind(&input.course_name)
            .bind(description)
            .bind(course_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(course)
    }

    /// Remove the course and every enrollment referencing it.
    pub async fn delete(pool: &SqlitePool, course_id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        let course = load_course(&mut tx, course_id).await?;
        let removed = sqlx::query("DELETE FROM enrollment WHERE course_id = ?")
            .bind(course.course_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM course WHERE course_id = ?")
            .bind(course.course_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(course_id, enrollments_removed = removed, "course deleted");
        Ok(())
    }
}

/// Fetch a course or fail with a plain not-found.
pub(crate) async fn load_course(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<Course, AppError> {
    find_course(conn, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", course_id)))
}

pub(crate) async fn find_course(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<Option<Course>, AppError> {
    let sql = format!("SELECT {} FROM course WHERE course_id = ?", COURSE_COLUMNS);
    let row = sqlx::query_as::<_, Course>(&sql)
        .bind(course_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

async fn find_by_code(
    conn: &mut SqliteConnection,
    course_code: &str,
) -> Result<Option<Course>, AppError> {
    let sql = format!("SELECT {} FROM course WHERE course_code = ?", COURSE_COLUMNS);
    let row = sqlx::query_as::<_, Course>(&sql)
        .bind(course_code)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}
