//! Enrollment API: student, course and enrollment REST backend over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_from_env, load_with, ServerConfig, DEFAULT_MAX_BODY_BYTES};
pub use error::{ApiError, AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Course, Enrollment, Student};
pub use routes::{app, common_routes, resource_routes};
pub use service::{CourseService, EnrollmentService, StudentService, Todo, TodoStore};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
