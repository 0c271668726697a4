pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "campus-records")]
#[command(about = "Console records manager for students, courses, enrollments and grades")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the export directory from the configuration
    #[arg(long)]
    pub export_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
