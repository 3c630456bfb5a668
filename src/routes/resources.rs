//! Resource routes: courses, students, their enrollments, and todos.
//! Path ids are taken as strings so non-integer ids fall through to 404 like an unmatched route.

use crate::handlers::{course, enrollment, student, todo};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/course", post(course::create))
        .route(
            "/course/:course_id",
            get(course::read).put(course::update).delete(course::delete),
        )
        .route("/student", post(student::create))
        .route(
            "/student/:student_id",
            get(student::read).put(student::update).delete(student::delete),
        )
        .route(
            "/student/:student_id/course",
            get(enrollment::list).post(enrollment::enroll),
        )
        .route(
            "/student/:student_id/course/:course_id",
            delete(enrollment::unenroll),
        )
        .route("/todos", get(todo::list))
        .route(
            "/todos/:todo_id",
            get(todo::read)
                .post(todo::create)
                .put(todo::update)
                .delete(todo::delete),
        )
        .with_state(state)
}
