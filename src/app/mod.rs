pub mod console;

use crate::core::{CourseService, EnrollmentService, StudentService};

pub use console::Console;

/// The three record stores, built once at start-up and handed to the front end.
#[derive(Debug, Default)]
pub struct Records {
    pub students: StudentService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }
}
