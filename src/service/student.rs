//! Student CRUD.

use crate::error::AppError;
use crate::model::Student;
use crate::service::validation::{Fields, RequestValidator, ROLL_NUMBER_TAKEN};
use sqlx::{SqliteConnection, SqlitePool};

const STUDENT_COLUMNS: &str = "student_id, roll_number, first_name, last_name";

pub struct StudentService;

impl StudentService {
    pub async fn create(pool: &SqlitePool, body: &Fields) -> Result<Student, AppError> {
        let input = RequestValidator::student(body)?;
        let mut tx = pool.begin().await?;
        if find_by_roll_number(&mut tx, &input.roll_number).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "roll_number '{}' already exists",
                input.roll_number
            )));
        }
        let sql = format!(
            "INSERT INTO student (roll_number, first_name, last_name) \
             VALUES (?, ?, ?) RETURNING {}",
            STUDENT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query (tx)");
        let student = sqlx::query_as::<_, Student>(&sql)
            .bind(&input.roll_number)
            .bind(&input.first_name)
            .bind(input.last_name.into_new())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(
            student_id = student.student_id,
            roll_number = %student.roll_number,
            "student created"
        );
        Ok(student)
    }

    pub async fn read(pool: &SqlitePool, student_id: i64) -> Result<Student, AppError> {
        let mut conn = pool.acquire().await?;
        load_student(&mut conn, student_id).await
    }

    /// Roll number uniqueness is only re-checked when it changes. `last_name` left out of the
    /// body keeps the stored value; sent empty, it overwrites.
    pub async fn update(
        pool: &SqlitePool,
        student_id: i64,
        body: &Fields,
    ) -> Result<Student, AppError> {
        let mut tx = pool.begin().await?;
        let current = load_student(&mut tx, student_id).await?;
        let input = RequestValidator::student(body)?;
        if input.roll_number != current.roll_number
            && find_by_roll_number(&mut tx, &input.roll_number).await?.is_some()
        {
            return Err(ROLL_NUMBER_TAKEN.into());
        }
        let last_name = input.last_name.apply_to(current.last_name);
        let sql = format!(
            "UPDATE student SET roll_number = ?, first_name = ?, last_name = ? \
             WHERE student_id = ? RETURNING {}",
            STUDENT_COLUMNS
        );
        tracing::debug!(sql = %sql, student_id, "query (tx)");
        let student = sqlx::query_as::<_, Student>(&sql)
            .bind(&input.roll_number)
            .bind(&input.first_name)
            .bind(last_name)
            .bind(student_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(student)
    }

    /// Remove the student and all of its enrollments.
    pub async fn delete(pool: &SqlitePool, student_id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        let student = load_student(&mut tx, student_id).await?;
        let removed = sqlx::query("DELETE FROM enrollment WHERE student_id = ?")
            .bind(student.student_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM student WHERE student_id = ?")
            .bind(student.student_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(student_id, enrollments_removed = removed, "student deleted");
        Ok(())
    }
}

pub(crate) async fn load_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Student, AppError> {
    find_student(conn, student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", student_id)))
}

pub(crate) async fn find_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<Student>, AppError> {
    let sql = format!("SELECT {} FROM student WHERE student_id = ?", STUDENT_COLUMNS);
    let row = sqlx::query_as::<_, Student>(&sql)
        .bind(student_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

async fn find_by_roll_number(
    conn: &mut SqliteConnection,
    roll_number: &str,
) -> Result<Option<Student>, AppError> {
    let sql = format!("SELECT {} FROM student WHERE roll_number = ?", STUDENT_COLUMNS);
    let row = sqlx::query_as::<_, Student>(&sql)
        .bind(roll_number)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}
