use crate::adapters::StudentExporter;
use crate::app::Records;
use crate::config::AppConfig;
use crate::core::Transcript;
use crate::domain::{Grade, Instructor, Person, Semester, Storage};
use crate::utils::error::{ErrorCategory, RecordsError, Result};
use chrono::Utc;
use std::io::{BufRead, ErrorKind, Write};

/// Text-menu front end. Reads one answer per line and never aborts on a
/// records error; end of input ends the session.
pub struct Console<R: BufRead, W: Write, S: Storage> {
    records: Records,
    config: AppConfig,
    exporter: StudentExporter<S>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, S: Storage> Console<R, W, S> {
    pub fn new(records: Records, config: AppConfig, storage: S, input: R, output: W) -> Self {
        let exporter = StudentExporter::new(storage, config.export.clone());
        Self {
            records,
            config,
            exporter,
            input,
            output,
        }
    }

    pub fn into_records(self) -> Records {
        self.records
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Campus Course Records Manager (CCRM)")?;

        loop {
            self.show_main_menu()?;
            let outcome = match self.prompt("Select an option: ") {
                Ok(choice) => match choice.as_str() {
                    "1" => self.manage_students(),
                    "2" => self.manage_courses(),
                    "3" => self.manage_enrollments(),
                    "4" => self.export_data(),
                    "0" => break,
                    _ => self.say("Invalid option, try again."),
                },
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => {}
                Err(RecordsError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                    tracing::debug!("Input closed, leaving the menu loop");
                    break;
                }
                Err(e) => self.report(&e)?,
            }
        }

        writeln!(self.output, "Exiting program. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, error: &RecordsError) -> Result<()> {
        match error.category() {
            ErrorCategory::System => tracing::error!("{} ({})", error, error.recovery_suggestion()),
            _ => tracing::warn!("{}", error),
        }
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RecordsError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMain Menu:")?;
        writeln!(self.output, "1. Manage Students")?;
        writeln!(self.output, "2. Manage Courses")?;
        writeln!(self.output, "3. Enrollments and Grades")?;
        writeln!(self.output, "4. Export Data")?;
        writeln!(self.output, "0. Quit")?;
        Ok(())
    }

    fn manage_students(&mut self) -> Result<()> {
        writeln!(self.output, "\nStudent Management:")?;
        writeln!(self.output, "1. Add Student")?;
        writeln!(self.output, "2. List Students")?;
        writeln!(self.output, "3. Deactivate Student")?;
        writeln!(self.output, "0. Back")?;
        match self.prompt("Choice: ")?.as_str() {
            "1" => self.add_student(),
            "2" => self.list_students(),
            "3" => self.deactivate_student(),
            "0" => Ok(()),
            _ => self.say("Invalid option"),
        }
    }

    fn add_student(&mut self) -> Result<()> {
        let id = self.prompt("Enter student ID: ")?;
        let reg_no = self.prompt("Enter student RegNo: ")?;
        let full_name = self.prompt("Enter full name: ")?;
        let email = self.prompt("Enter email: ")?;

        let student = self
            .records
            .students
            .create_student(&id, &reg_no, &full_name, &email)?;
        writeln!(self.output, "Created student: {}", student.profile())?;
        Ok(())
    }

    fn list_students(&mut self) -> Result<()> {
        writeln!(self.output, "All Students:")?;
        for student in self.records.students.list_all_students() {
            writeln!(self.output, "{}", student.profile())?;
        }
        Ok(())
    }

    fn deactivate_student(&mut self) -> Result<()> {
        let reg_no = self.prompt("Enter student RegNo to deactivate: ")?;
        self.records.students.deactivate_student(&reg_no)?;
        writeln!(self.output, "Student deactivated: {}", reg_no)?;
        Ok(())
    }

    fn manage_courses(&mut self) -> Result<()> {
        writeln!(self.output, "\nCourse Management:")?;
        writeln!(self.output, "1. Add Course")?;
        writeln!(self.output, "2. List Courses")?;
        writeln!(self.output, "0. Back")?;
        match self.prompt("Choice: ")?.as_str() {
            "1" => self.add_course(),
            "2" => self.list_courses(),
            "0" => Ok(()),
            _ => self.say("Invalid option"),
        }
    }

    fn add_course(&mut self) -> Result<()> {
        let code = self.prompt("Code: ")?;
        let title = self.prompt("Title: ")?;
        let credits_raw = self.prompt("Credits (int): ")?;
        let credits: i64 = credits_raw
            .parse()
            .map_err(|_| RecordsError::invalid("credits", credits_raw.as_str(), "Expected a whole number"))?;
        let instructor_id = self.prompt("Instructor ID: ")?;
        // instructors are not managed separately; the course gets a placeholder
        let instructor = Instructor::new(
            instructor_id,
            "Dummy Instructor".to_string(),
            "instr@example.com".to_string(),
            "Dept".to_string(),
            Utc::now().date_naive(),
        );
        let semester: Semester = self.prompt("Semester (SPRING, SUMMER, FALL): ")?.parse()?;
        let department = self.prompt("Department: ")?;

        let course = self
            .records
            .courses
            .create_course(&code, &title, credits, instructor, semester, &department)?;
        writeln!(self.output, "Created course: {}", course)?;
        Ok(())
    }

    fn list_courses(&mut self) -> Result<()> {
        writeln!(self.output, "All Courses:")?;
        for course in self.records.courses.list_all_courses() {
            writeln!(self.output, "{}", course)?;
        }
        Ok(())
    }

    fn manage_enrollments(&mut self) -> Result<()> {
        writeln!(self.output, "\nEnrollments and Grades:")?;
        writeln!(self.output, "1. Enroll Student")?;
        writeln!(self.output, "2. Assign Grade")?;
        writeln!(self.output, "3. Show Student Transcript")?;
        writeln!(self.output, "0. Back")?;
        match self.prompt("Choice: ")?.as_str() {
            "1" => self.enroll_student(),
            "2" => self.assign_grade(),
            "3" => self.show_transcript(),
            "0" => Ok(()),
            _ => self.say("Invalid option"),
        }
    }

    fn enroll_student(&mut self) -> Result<()> {
        let reg_no = self.prompt("Student RegNo: ")?;
        let course_code = self.prompt("Course Code: ")?;
        let student = self.records.students.get_student_by_reg_no(&reg_no)?;
        let course = self.records.courses.get_course(&course_code)?;

        if self.config.reject_inactive_students() && !student.active {
            return Err(RecordsError::invalid("regNo", reg_no, "Student is inactive"));
        }

        let enrollment = self.records.enrollments.enroll_student(&student, &course)?;
        writeln!(self.output, "Enrolled: {}", enrollment)?;
        Ok(())
    }

    fn assign_grade(&mut self) -> Result<()> {
        let reg_no = self.prompt("Student RegNo: ")?;
        let course_code = self.prompt("Course Code: ")?;
        let grade: Grade = self.prompt("Grade (S, A, B, C, D, F): ")?.parse()?;
        let student = self.records.students.get_student_by_reg_no(&reg_no)?;
        let course = self.records.courses.get_course(&course_code)?;

        self.records.enrollments.assign_grade(&student, &course, grade)?;
        writeln!(
            self.output,
            "Assigned grade {} for student {} in course {}",
            grade, reg_no, course_code
        )?;
        Ok(())
    }

    fn show_transcript(&mut self) -> Result<()> {
        let reg_no = self.prompt("Student RegNo: ")?;
        let student = self.records.students.get_student_by_reg_no(&reg_no)?;
        let transcript = Transcript::build(&student, &self.records.enrollments, &self.records.courses)?;
        writeln!(self.output, "{}", transcript)?;
        Ok(())
    }

    fn export_data(&mut self) -> Result<()> {
        let students = self.records.students.list_all_students();
        match self.exporter.export_all(&students) {
            Ok(paths) => {
                for path in paths {
                    writeln!(self.output, "Exported students data to {}", path)?;
                }
                Ok(())
            }
            Err(e) => {
                writeln!(self.output, "Export failed: {}", e)?;
                tracing::error!("Export failed: {} ({})", e, e.recovery_suggestion());
                Ok(())
            }
        }
    }
}
