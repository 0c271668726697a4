//! Tabular export of the student roster.
//!
//! Columns are fixed: `id, regNo, fullName, email, active`, one row per student
//! in the order the student service returns them.

use crate::config::toml_config::ExportConfig;
use crate::domain::{Storage, Student};
use crate::utils::error::{RecordsError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    id: &'a str,
    #[serde(rename = "regNo")]
    reg_no: &'a str,
    #[serde(rename = "fullName")]
    full_name: &'a str,
    email: &'a str,
    active: bool,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: &student.id,
            reg_no: &student.reg_no,
            full_name: &student.full_name,
            email: &student.email,
            active: student.active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            _ => Err(RecordsError::invalid("export format", value, "Expected csv, tsv or json")),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

pub struct StudentExporter<S: Storage> {
    storage: S,
    config: ExportConfig,
}

impl<S: Storage> StudentExporter<S> {
    pub fn new(storage: S, config: ExportConfig) -> Self {
        Self { storage, config }
    }

    pub fn render(students: &[Student], format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Csv => Self::render_delimited(students, b','),
            ExportFormat::Tsv => Self::render_delimited(students, b'\t'),
            ExportFormat::Json => {
                let rows: Vec<StudentRow<'_>> = students.iter().map(StudentRow::from).collect();
                Ok(serde_json::to_vec_pretty(&rows)?)
            }
        }
    }

    fn render_delimited(students: &[Student], delimiter: u8) -> Result<Vec<u8>> {
        // header written by hand: serde-derived headers vanish on an empty roster
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(["id", "regNo", "fullName", "email", "active"])?;
        for student in students {
            writer.serialize(StudentRow::from(student))?;
        }
        writer.into_inner().map_err(|e| RecordsError::IoError(e.into_error()))
    }

    /// File name for one format, with `{timestamp}` expanded.
    pub fn file_name(&self, format: ExportFormat, at: DateTime<Utc>) -> String {
        let stem = self
            .config
            .filename
            .replace("{timestamp}", &at.format("%Y%m%d_%H%M%S").to_string());
        format!("{}.{}", stem, format.extension())
    }

    /// Writes every configured format and returns the written paths.
    /// Nothing is written unless every format parses and renders.
    pub fn export_all(&self, students: &[Student]) -> Result<Vec<String>> {
        let now = Utc::now();
        let rendered = self
            .config
            .formats
            .iter()
            .map(|name| {
                let format = ExportFormat::parse(name)?;
                Ok((format, Self::render(students, format)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(rendered.len());
        for (format, data) in rendered {
            let path = self.storage.write_file(&self.file_name(format, now), &data)?;
            tracing::info!("Exported {} students as {} to {}", students.len(), format.extension(), path);
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use chrono::TimeZone;

    fn students() -> Vec<Student> {
        let mut bob = Student::new(
            "2".to_string(),
            "R2".to_string(),
            "Bob, Jr.".to_string(),
            "bob@uni.edu".to_string(),
        );
        bob.deactivate();
        vec![
            Student::new(
                "1".to_string(),
                "R1".to_string(),
                "Ada Lovelace".to_string(),
                "ada@uni.edu".to_string(),
            ),
            bob,
        ]
    }

    #[test]
    fn test_render_csv() {
        let data = StudentExporter::<LocalStorage>::render(&students(), ExportFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,regNo,fullName,email,active");
        assert_eq!(lines[1], "1,R1,Ada Lovelace,ada@uni.edu,true");
        assert_eq!(lines[2], "2,R2,\"Bob, Jr.\",bob@uni.edu,false");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_empty_csv_keeps_header() {
        let data = StudentExporter::<LocalStorage>::render(&[], ExportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "id,regNo,fullName,email,active\n");
    }

    #[test]
    fn test_render_tsv() {
        let data = StudentExporter::<LocalStorage>::render(&students(), ExportFormat::Tsv).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.starts_with("id\tregNo\tfullName\temail\tactive\n"));
        assert!(text.contains("2\tR2\tBob, Jr.\tbob@uni.edu\tfalse"));
    }

    #[test]
    fn test_render_json() {
        let data = StudentExporter::<LocalStorage>::render(&students(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(value[0]["regNo"], "R1");
        assert_eq!(value[1]["fullName"], "Bob, Jr.");
        assert_eq!(value[1]["active"], false);
    }

    #[test]
    fn test_file_name_expands_timestamp() {
        let exporter = StudentExporter::new(LocalStorage::new("."), ExportConfig::default());
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(exporter.file_name(ExportFormat::Tsv, at), "students_20240305_140709.tsv");
    }

    #[test]
    fn test_unknown_format_writes_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = ExportConfig {
            formats: vec!["csv".to_string(), "xml".to_string()],
            filename: "roster".to_string(),
            ..ExportConfig::default()
        };
        let exporter = StudentExporter::new(LocalStorage::new(temp_dir.path()), config);

        let err = exporter.export_all(&students()).unwrap_err();
        assert!(err.is_invalid_data());
        let left: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert!(left.is_empty());
    }

    #[test]
    fn test_unknown_format_is_invalid() {
        assert!(ExportFormat::parse("xml").unwrap_err().is_invalid_data());
        assert_eq!(ExportFormat::parse(" JSON ").unwrap(), ExportFormat::Json);
    }
}
