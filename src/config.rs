//! Configuration management for the level-check CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Report format and strictness options

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for the level checker
#[derive(Debug, Parser)]
#[command(name = "level-check")]
#[command(about = "Validate puzzle level files")]
#[command(version)]
pub struct Args {
    /// Level files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat advisory warnings as rejection
    #[arg(long)]
    pub strict: bool,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Self {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Self {
        Config {
            files: args.files,
            format: args.format,
            strict: args.strict,
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient_text() {
        let args = Args::parse_from(["level-check", "level.json"]);
        let config = Config::from_args(args);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.files.len(), 1);
    }

    #[test]
    fn strict_json_flags_parse() {
        let args = Args::parse_from(["level-check", "--strict", "--format", "json", "a", "b"]);
        let config = Config::from_args(args);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
        assert_eq!(config.files.len(), 2);
    }
}
