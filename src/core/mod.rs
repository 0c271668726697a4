pub mod course_service;
pub mod enrollment_service;
pub mod store;
pub mod student_service;
pub mod transcript;

pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use store::KeyedStore;
pub use student_service::StudentService;
pub use transcript::{Transcript, TranscriptLine};
