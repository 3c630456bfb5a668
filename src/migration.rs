//! Schema DDL for the student, course and enrollment tables.
//! Order follows foreign-key dependencies: parents before enrollment.

use crate::error::AppError;
use sqlx::SqlitePool;

const STUDENT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS student (
        student_id INTEGER PRIMARY KEY AUTOINCREMENT,
        roll_number TEXT NOT NULL UNIQUE,
        first_name TEXT NOT NULL,
        last_name TEXT
    )
"#;

const COURSE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS course (
        course_id INTEGER PRIMARY KEY AUTOINCREMENT,
        course_code TEXT NOT NULL UNIQUE,
        course_name TEXT NOT NULL,
        course_description TEXT
    )
"#;

// No unique constraint on the pair; duplicates are rejected before insert.
const ENROLLMENT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS enrollment (
        enrollment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL REFERENCES student (student_id),
        course_id INTEGER NOT NULL REFERENCES course (course_id)
    )
"#;

const ENROLLMENT_PAIR_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_enrollment_student_course \
     ON enrollment (student_id, course_id)";

const ENROLLMENT_COURSE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_enrollment_course ON enrollment (course_id)";

/// Create all tables and indexes. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in [
        STUDENT_DDL,
        COURSE_DDL,
        ENROLLMENT_DDL,
        ENROLLMENT_PAIR_INDEX,
        ENROLLMENT_COURSE_INDEX,
    ] {
        tracing::debug!(sql = %ddl.trim(), "migration");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema ready");
    Ok(())
}
