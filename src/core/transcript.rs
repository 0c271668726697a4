use crate::core::{CourseService, EnrollmentService};
use crate::domain::{Grade, Student};
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub course_code: String,
    pub course_title: String,
    pub credits: u32,
    pub grade: Option<Grade>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub reg_no: String,
    pub full_name: String,
    pub lines: Vec<TranscriptLine>,
    pub gpa: f64,
}

impl Transcript {
    pub fn build(student: &Student, enrollments: &EnrollmentService, courses: &CourseService) -> Result<Self> {
        let lines = enrollments
            .get_enrollments_by_student(student)
            .into_iter()
            .map(|enrollment| {
                let course = courses.get_course(&enrollment.course_code)?;
                Ok(TranscriptLine {
                    course_code: course.code,
                    course_title: course.title,
                    credits: enrollment.credits,
                    grade: enrollment.grade,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            reg_no: student.reg_no.clone(),
            full_name: student.full_name.clone(),
            lines,
            gpa: enrollments.compute_gpa(student),
        })
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transcript for {}", self.full_name)?;
        for line in &self.lines {
            writeln!(
                f,
                "Course: {}, Grade: {}",
                line.course_title,
                line.grade.map_or("N/A", |g| g.as_str())
            )?;
        }
        write!(f, "GPA: {:.2}", self.gpa)
    }
}
