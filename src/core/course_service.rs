use crate::core::store::KeyedStore;
use crate::domain::{Course, Instructor, Semester};
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_credits};

/// Owns the course catalogue, keyed by course code. Courses are immutable once created.
#[derive(Debug, Default)]
pub struct CourseService {
    courses: KeyedStore<String, Course>,
}

impl CourseService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_course(
        &mut self,
        code: &str,
        title: &str,
        credits: i64,
        instructor: Instructor,
        semester: Semester,
        department: &str,
    ) -> Result<Course> {
        validate_non_empty_string("code", code)?;
        validate_non_empty_string("title", title)?;
        let credits = validate_positive_credits("credits", credits)?;

        if self.courses.contains(&code.to_string()) {
            tracing::warn!("Rejected duplicate course code {}", code);
            return Err(RecordsError::duplicate("Course", code));
        }

        let course = Course {
            code: code.to_string(),
            title: title.to_string(),
            credits,
            instructor,
            semester,
            department: department.to_string(),
        };
        let stored = self
            .courses
            .insert(code.to_string(), course)
            .map_err(|_| RecordsError::duplicate("Course", code))?
            .clone();

        tracing::info!("Created course {} ({} credits, {})", stored.code, stored.credits, stored.semester);
        Ok(stored)
    }

    pub fn list_all_courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    pub fn get_course(&self, code: &str) -> Result<Course> {
        tracing::debug!("Looking up course {}", code);
        self.courses
            .get(&code.to_string())
            .cloned()
            .ok_or_else(|| RecordsError::not_found("Course", code))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
