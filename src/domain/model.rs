use crate::utils::error::RecordsError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shared view over the people the institution keeps records for.
pub trait Person {
    fn full_name(&self) -> &str;
    fn email(&self) -> &str;
    fn profile(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub reg_no: String,
    pub full_name: String,
    pub email: String,
    pub active: bool,
}

impl Student {
    /// New students always start active.
    pub fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        Self {
            id,
            reg_no,
            full_name,
            email,
            active: true,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Person for Student {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn profile(&self) -> String {
        format!(
            "Student[id={}, regNo={}, name={}, email={}, status={}]",
            self.id,
            self.reg_no,
            self.full_name,
            self.email,
            if self.active { "ACTIVE" } else { "INACTIVE" }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub hire_date: NaiveDate,
}

impl Instructor {
    pub fn new(id: String, name: String, email: String, department: String, hire_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            department,
            hire_date,
        }
    }
}

impl Person for Instructor {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn profile(&self) -> String {
        format!(
            "Instructor[id={}, name={}, dept={}, hired={}]",
            self.id, self.name, self.department, self.hire_date
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Spring, Semester::Summer, Semester::Fall];

    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Spring => "SPRING",
            Semester::Summer => "SUMMER",
            Semester::Fall => "FALL",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Semester::ALL
            .into_iter()
            .find(|semester| semester.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecordsError::invalid("semester", s, "Expected one of SPRING, SUMMER, FALL"))
    }
}

/// Letter grades, declared worst to best so the derived ordering ranks S highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// Best first.
    pub const ALL: [Grade; 6] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn points(&self) -> u32 {
        match self {
            Grade::S => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::F => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecordsError::invalid("grade", s, "Expected one of S, A, B, C, D, F"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub instructor: Instructor,
    pub semester: Semester,
    pub department: String,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course[code={}, title={}, credits={}, instructor={}, semester={}, dept={}]",
            self.code, self.title, self.credits, self.instructor.id, self.semester, self.department
        )
    }
}

/// Natural key of an enrollment: one per (student, course) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnrollmentKey {
    pub reg_no: String,
    pub course_code: String,
}

impl EnrollmentKey {
    pub fn new(reg_no: &str, course_code: &str) -> Self {
        Self {
            reg_no: reg_no.to_string(),
            course_code: course_code.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_reg_no: String,
    pub course_code: String,
    /// Copied from the course at enrollment; courses never change after creation.
    pub credits: u32,
    pub grade: Option<Grade>,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(student: &Student, course: &Course, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            student_reg_no: student.reg_no.clone(),
            course_code: course.code.clone(),
            credits: course.credits,
            grade: None,
            enrolled_at,
        }
    }

    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey::new(&self.student_reg_no, &self.course_code)
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment[student={}, course={}, grade={}, enrolledAt={}]",
            self.student_reg_no,
            self.course_code,
            self.grade.map_or("N/A", |g| g.as_str()),
            self.enrolled_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
