use crate::utils::error::{RecordsError, Result};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordsError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_RE.is_match(value) {
        return Err(RecordsError::invalid(
            field_name,
            value,
            "Expected an address of the form name@domain.tld",
        ));
    }
    Ok(())
}

/// Credits arrive as a signed number from the console, so non-positive input is representable.
pub fn validate_positive_credits(field_name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(RecordsError::invalid(
            field_name,
            value.to_string(),
            "Value must be greater than 0",
        ));
    }
    u32::try_from(value).map_err(|_| {
        RecordsError::invalid(field_name, value.to_string(), "Value is too large")
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordsError::invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(RecordsError::invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}
