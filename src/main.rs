use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use level_validator::config::{Config, OutputFormat};
use level_validator::validation::{Diagnostic, Severity, Verdict, validate_bytes};

/// Per-file report for `--format json`.
#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    accepted: bool,
    diagnostics: &'a [Diagnostic],
}

fn main() -> ExitCode {
    let config = Config::from_args_and_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    match run(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Exit code 0 when every file is accepted, 1 when any is rejected, 2 when
/// a file could not be read at all.
fn run(config: &Config) -> Result<ExitCode> {
    let mut code = 0u8;

    for path in &config.files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("{}: {err}", path.display());
                code = code.max(2);
                continue;
            }
        };

        let verdict = validate_bytes(&bytes);
        if print_report(path, &verdict, config)? {
            code = code.max(1);
        }
    }

    Ok(ExitCode::from(code))
}

/// Whether a file counts as rejected: any rejected verdict, or an accepted
/// one carrying warnings when strict mode promotes those to rejection.
fn is_rejected(verdict: &Verdict, strict: bool) -> bool {
    let has_warnings = verdict
        .diagnostics()
        .iter()
        .any(|d| d.severity == Severity::Warning);
    !verdict.is_accepted() || (strict && has_warnings)
}

/// Print one file's report; returns whether the file counts as rejected.
fn print_report(path: &Path, verdict: &Verdict, config: &Config) -> Result<bool> {
    let rejected = is_rejected(verdict, config.strict);

    match config.format {
        OutputFormat::Json => {
            let report = FileReport {
                file: path.display().to_string(),
                accepted: !rejected,
                diagnostics: verdict.diagnostics(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let status = if rejected { "rejected" } else { "accepted" };
            println!("{}: {status}", path.display());
            for diagnostic in verdict.diagnostics() {
                let tag = match diagnostic.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                println!("  {tag}: {diagnostic}");
            }
        }
    }

    Ok(rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use level_validator::level::{
        ColorPalette, Direction, Door, EdgePosition, Entity, Int2, Level, TimeMachine,
    };

    fn level_with_dangling_door() -> Level {
        Level {
            version: 0,
            name: "Strictness".to_string(),
            description: String::new(),
            color_palette: ColorPalette::Orange,
            explosions: Vec::new(),
            entrance: TimeMachine {
                position: Int2::new(0, 0),
                rotation: Direction::Right,
            },
            exit_position: Int2::new(10, 0),
            entities: vec![Entity::Door(Door {
                edge_position: EdgePosition::from_side(1, 1, Direction::Right),
                channel: 7.into(),
            })],
        }
    }

    fn validate(level: &Level) -> Verdict {
        let bytes = serde_json::to_vec(level).expect("level should serialize");
        validate_bytes(&bytes)
    }

    #[test]
    fn dangling_channel_rejects_only_in_strict_mode() {
        let verdict = validate(&level_with_dangling_door());
        assert!(verdict.is_accepted());
        assert!(!is_rejected(&verdict, false));
        assert!(is_rejected(&verdict, true));
    }

    #[test]
    fn clean_level_passes_strict_mode() {
        let mut level = level_with_dangling_door();
        level.entities.clear();
        let verdict = validate(&level);
        assert!(!is_rejected(&verdict, true));
    }

    #[test]
    fn errors_reject_in_both_modes() {
        let mut level = level_with_dangling_door();
        level.exit_position = level.entrance.position;
        let verdict = validate(&level);
        assert!(is_rejected(&verdict, false));
        assert!(is_rejected(&verdict, true));
    }
}
