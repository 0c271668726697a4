// Domain layer: entities and ports. No I/O here.

pub mod model;
pub mod ports;

pub use model::{Course, Enrollment, EnrollmentKey, Grade, Instructor, Person, Semester, Student};
pub use ports::Storage;
