use crate::core::store::KeyedStore;
use crate::domain::{Course, Enrollment, EnrollmentKey, Grade, Student};
use crate::utils::error::{RecordsError, Result};
use chrono::Utc;

/// Owns enrollments, keyed by the (regNo, course code) pair.
///
/// Student and course records are only read for their keys and credit value,
/// so the service holds no reference to the other two services.
#[derive(Debug, Default)]
pub struct EnrollmentService {
    enrollments: KeyedStore<EnrollmentKey, Enrollment>,
}

impl EnrollmentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the student is active is a caller decision and is not checked here.
    pub fn enroll_student(&mut self, student: &Student, course: &Course) -> Result<Enrollment> {
        let enrollment = Enrollment::new(student, course, Utc::now());
        let stored = self
            .enrollments
            .insert(enrollment.key(), enrollment)
            .map_err(|_| {
                tracing::warn!("Rejected duplicate enrollment {} in {}", student.reg_no, course.code);
                RecordsError::DuplicateEnrollment {
                    reg_no: student.reg_no.clone(),
                    course_code: course.code.clone(),
                }
            })?
            .clone();

        tracing::info!("Enrolled {} in {}", stored.student_reg_no, stored.course_code);
        Ok(stored)
    }

    /// Overwrites any grade already recorded for the pair.
    pub fn assign_grade(&mut self, student: &Student, course: &Course, grade: Grade) -> Result<()> {
        let key = EnrollmentKey::new(&student.reg_no, &course.code);
        let enrollment = self.enrollments.get_mut(&key).ok_or_else(|| {
            RecordsError::not_found("Enrollment", format!("{} in {}", student.reg_no, course.code))
        })?;

        if let Some(previous) = enrollment.grade.replace(grade) {
            tracing::debug!(
                "Replacing grade {} with {} for {} in {}",
                previous,
                grade,
                student.reg_no,
                course.code
            );
        }
        tracing::info!("Assigned grade {} to {} in {}", grade, student.reg_no, course.code);
        Ok(())
    }

    /// Creation order; empty when the student has no enrollments.
    pub fn get_enrollments_by_student(&self, student: &Student) -> Vec<Enrollment> {
        self.enrollments
            .values()
            .filter(|e| e.student_reg_no == student.reg_no)
            .cloned()
            .collect()
    }

    /// Credit-weighted mean of grade points over graded enrollments; 0.0 when none are graded.
    pub fn compute_gpa(&self, student: &Student) -> f64 {
        let (weighted_points, credits) = self
            .enrollments
            .values()
            .filter(|e| e.student_reg_no == student.reg_no)
            .filter_map(|e| e.grade.map(|grade| (grade.points(), e.credits)))
            .fold((0u64, 0u64), |(points_acc, credits_acc), (points, credits)| {
                (
                    points_acc + u64::from(points) * u64::from(credits),
                    credits_acc + u64::from(credits),
                )
            });

        if credits == 0 {
            return 0.0;
        }
        weighted_points as f64 / credits as f64
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}
