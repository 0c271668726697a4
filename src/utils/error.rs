use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidData {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity} not found: {key}")]
    EntityNotFound { entity: String, key: String },

    #[error("{entity} already exists: {key}")]
    DuplicateKey { entity: String, key: String },

    #[error("Student {reg_no} is already enrolled in course {course_code}")]
    DuplicateEnrollment { reg_no: String, course_code: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Coarse classification callers use to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller input broke an invariant; re-prompting can fix it.
    InvalidData,
    /// A lookup key does not exist.
    NotFound,
    /// IO, encoding or configuration failure outside the records themselves.
    System,
}

impl RecordsError {
    pub fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: &str, key: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity: entity.to_string(),
            key: key.into(),
        }
    }

    pub fn duplicate(entity: &str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity: entity.to_string(),
            key: key.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidData { .. } | Self::DuplicateKey { .. } | Self::DuplicateEnrollment { .. } => {
                ErrorCategory::InvalidData
            }
            Self::EntityNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. }
            | Self::IoError(_)
            | Self::CsvError(_)
            | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn is_invalid_data(&self) -> bool {
        self.category() == ErrorCategory::InvalidData
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidData { field, reason, .. } => format!("{} is not valid: {}", field, reason),
            Self::EntityNotFound { entity, key } => format!("No {} found for '{}'", entity.to_lowercase(), key),
            Self::DuplicateKey { entity, key } => {
                format!("A {} with key '{}' already exists", entity.to_lowercase(), key)
            }
            Self::DuplicateEnrollment { reg_no, course_code } => {
                format!("{} is already enrolled in {}", reg_no, course_code)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidData { .. } => "Check the value and enter it again",
            Self::EntityNotFound { .. } => "List the existing records to find the right key",
            Self::DuplicateKey { .. } => "Use a key that is not already taken",
            Self::DuplicateEnrollment { .. } => "Assign a grade to the existing enrollment instead",
            Self::ConfigError { .. } => "Fix the configuration file and restart",
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::CsvError(_) | Self::SerializationError(_) => "Retry the export",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_invalid_data_family() {
        assert_eq!(RecordsError::duplicate("Student", "R1").category(), ErrorCategory::InvalidData);
        let dup = RecordsError::DuplicateEnrollment {
            reg_no: "R1".to_string(),
            course_code: "CS101".to_string(),
        };
        assert!(dup.is_invalid_data());
        assert!(!dup.is_not_found());
    }

    #[test]
    fn test_not_found_is_distinct() {
        let err = RecordsError::not_found("Course", "CS404");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_data());
        assert_eq!(err.to_string(), "Course not found: CS404");
    }

    #[test]
    fn test_io_is_system() {
        let err = RecordsError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
