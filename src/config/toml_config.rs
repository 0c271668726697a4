use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const SUPPORTED_FORMATS: [&str; 3] = ["csv", "tsv", "json"];
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub enrollment: EnrollmentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// `{timestamp}` expands to the UTC export time.
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            formats: default_formats(),
            filename: default_filename(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    #[serde(default)]
    pub reject_inactive_students: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Crate log level used when `RUST_LOG` is unset; `--verbose` forces debug.
    pub level: Option<String>,
    /// `compact` (default) or `json`.
    pub format: Option<String>,
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_filename() -> String {
    "students_{timestamp}".to_string()
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RecordsError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecordsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> &str {
        &self.export.output_path
    }

    pub fn reject_inactive_students(&self) -> bool {
        self.enrollment.reject_inactive_students
    }

    /// Default `EnvFilter` directive for the logger.
    pub fn log_filter(&self, verbose: bool) -> String {
        let level = if verbose {
            "debug".to_string()
        } else {
            self.logging
                .level
                .as_deref()
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "info".to_string())
        };
        format!("campus_records={},warn", level)
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .format
            .as_deref()
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("export.output_path", &self.export.output_path)?;
        validate_non_empty_string("export.filename", &self.export.filename)?;

        if self.export.formats.is_empty() {
            return Err(RecordsError::invalid(
                "export.formats",
                "[]",
                "At least one export format is required",
            ));
        }
        for format in &self.export.formats {
            if !SUPPORTED_FORMATS.contains(&format.as_str()) {
                return Err(RecordsError::invalid(
                    "export.formats",
                    format.clone(),
                    format!("Unsupported format. Valid formats: {}", SUPPORTED_FORMATS.join(", ")),
                ));
            }
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(RecordsError::invalid(
                    "logging.level",
                    level.clone(),
                    format!("Expected one of {}", LOG_LEVELS.join(", ")),
                ));
            }
        }

        if let Some(format) = &self.logging.format {
            if !matches!(format.to_ascii_lowercase().as_str(), "compact" | "json") {
                return Err(RecordsError::invalid(
                    "logging.format",
                    format.clone(),
                    "Expected compact or json",
                ));
            }
        }

        Ok(())
    }
}
