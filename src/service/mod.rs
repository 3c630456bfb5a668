//! Resource operations: validation plus store access, one unit of work per call.

mod course;
mod enrollment;
mod student;
mod todo;
mod validation;

pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use student::StudentService;
pub use todo::{Todo, TodoStore};
pub use validation::*;
