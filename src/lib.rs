pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, StudentExporter};
pub use app::{Console, Records};
pub use config::AppConfig;
pub use core::{CourseService, EnrollmentService, StudentService, Transcript};
pub use domain::{Course, Enrollment, Grade, Instructor, Person, Semester, Student};
pub use utils::error::{ErrorCategory, RecordsError, Result};
