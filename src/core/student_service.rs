use crate::core::store::KeyedStore;
use crate::domain::Student;
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};
use std::collections::HashSet;

/// Owns every student record, keyed by registration number.
#[derive(Debug, Default)]
pub struct StudentService {
    students: KeyedStore<String, Student>,
    ids: HashSet<String>,
}

impl StudentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_student(&mut self, id: &str, reg_no: &str, full_name: &str, email: &str) -> Result<Student> {
        validate_non_empty_string("id", id)?;
        validate_non_empty_string("regNo", reg_no)?;
        validate_non_empty_string("fullName", full_name)?;
        validate_email("email", email)?;

        if self.students.contains(&reg_no.to_string()) {
            tracing::warn!("Rejected duplicate regNo {}", reg_no);
            return Err(RecordsError::duplicate("Student", reg_no));
        }
        if self.ids.contains(id) {
            tracing::warn!("Rejected duplicate student id {}", id);
            return Err(RecordsError::duplicate("Student id", id));
        }

        let student = Student::new(id.to_string(), reg_no.to_string(), full_name.to_string(), email.to_string());
        let stored = self
            .students
            .insert(reg_no.to_string(), student)
            .map_err(|_| RecordsError::duplicate("Student", reg_no))?
            .clone();
        self.ids.insert(id.to_string());

        tracing::info!("Created student {} ({})", stored.reg_no, stored.full_name);
        Ok(stored)
    }

    /// Inactive students included; filtering is up to the caller.
    pub fn list_all_students(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    pub fn get_student_by_reg_no(&self, reg_no: &str) -> Result<Student> {
        tracing::debug!("Looking up student {}", reg_no);
        self.students
            .get(&reg_no.to_string())
            .cloned()
            .ok_or_else(|| RecordsError::not_found("Student", reg_no))
    }

    pub fn deactivate_student(&mut self, reg_no: &str) -> Result<()> {
        let student = self
            .students
            .get_mut(&reg_no.to_string())
            .ok_or_else(|| RecordsError::not_found("Student", reg_no))?;

        if student.active {
            student.deactivate();
            tracing::info!("Deactivated student {}", reg_no);
        } else {
            tracing::debug!("Student {} already inactive", reg_no);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
