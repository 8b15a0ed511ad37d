//! Validation Engine
//!
//! Pure, synchronous validation of a decoded [`Level`]: field constraints,
//! spatial overlap constraints and channel/geometry consistency, with all
//! diagnostics collected in one pass. Checkers run in a fixed order
//! (fields, overlap, channels) and walk the document in order, so repeated
//! validation of the same document yields an identical report.

pub mod channels;
pub mod fields;
pub mod overlap;

use std::fmt;

use serde::Serialize;

use crate::level::{Direction, Level, SpatialKey};
use crate::loader::{self, LoadError};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Which rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRule {
    NameTooLong,
    NameCharset,
    NotAWholeNumber,
    OutOfBounds,
    NonPositivePeriod,
    TooManyEntities,
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldRule::NameTooLong => "name exceeds 60 characters",
            FieldRule::NameCharset => "name contains a character outside ASCII 32-126",
            FieldRule::NotAWholeNumber => "must be a whole number",
            FieldRule::OutOfBounds => "coordinate outside the level bounds",
            FieldRule::NonPositivePeriod => "period must be a real number greater than 0",
            FieldRule::TooManyEntities => "entity list exceeds the maximum length",
        };
        f.write_str(text)
    }
}

/// Machine-readable cause of a diagnostic, with enough context to render a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    Oversize {
        size: usize,
    },
    Malformed {
        detail: String,
    },
    FieldViolation {
        path: String,
        rule: FieldRule,
        value: String,
    },
    OverlapViolation {
        key: SpatialKey,
        first: &'static str,
        second: &'static str,
    },
    DuplicateExplosionDirection {
        direction: Direction,
    },
    DanglingChannel {
        channel: i64,
    },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::DanglingChannel { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl From<LoadError> for DiagnosticKind {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Oversize { size } => DiagnosticKind::Oversize { size },
            LoadError::Malformed(err) => DiagnosticKind::Malformed {
                detail: err.to_string(),
            },
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Diagnostic {
            severity: kind.severity(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Oversize { size } => {
                write!(
                    f,
                    "file is {size} bytes, limit is {}",
                    crate::level::MAX_FILE_SIZE
                )
            }
            DiagnosticKind::Malformed { detail } => {
                write!(f, "malformed level document: {detail}")
            }
            DiagnosticKind::FieldViolation { path, rule, value } => {
                write!(f, "{path}: {rule} (got {value})")
            }
            DiagnosticKind::OverlapViolation { key, first, second } => {
                write!(f, "{first} and {second} may not share the {key}")
            }
            DiagnosticKind::DuplicateExplosionDirection { direction } => {
                write!(f, "more than one explosion moving {direction}")
            }
            DiagnosticKind::DanglingChannel { channel } => {
                write!(f, "channel {channel} has consumers but no button")
            }
        }
    }
}

/// Accumulated findings for one validation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(kind));
    }

    /// Valid means acceptable: warnings alone do not reject a level.
    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Final verdict for a document. Accepted levels may still carry advisory
/// warnings.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted {
        level: Level,
        diagnostics: Vec<Diagnostic>,
    },
    Rejected {
        diagnostics: Vec<Diagnostic>,
    },
}

impl Verdict {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Verdict::Accepted { diagnostics, .. } => diagnostics,
            Verdict::Rejected { diagnostics } => diagnostics,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// Validate an already-decoded level. Never mutates the document.
pub fn validate_level(level: &Level) -> ValidationResult {
    let mut result = ValidationResult::new();

    fields::check(level, &mut result);
    overlap::check(level, &mut result);
    channels::check(level, &mut result);

    log::debug!(
        "validated level {:?}: {} diagnostics",
        level.name,
        result.diagnostics.len()
    );
    result
}

/// Validate raw file contents: load, then run every checker.
///
/// Load failures are fatal: the verdict carries the single cause and no
/// further diagnostics.
pub fn validate_bytes(bytes: &[u8]) -> Verdict {
    let level = match loader::load_level(bytes) {
        Ok(level) => level,
        Err(err) => {
            return Verdict::Rejected {
                diagnostics: vec![Diagnostic::new(err.into())],
            };
        }
    };

    let result = validate_level(&level);
    if result.is_valid() {
        Verdict::Accepted {
            level,
            diagnostics: result.diagnostics,
        }
    } else {
        Verdict::Rejected {
            diagnostics: result.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_invalidate() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add(DiagnosticKind::DanglingChannel { channel: 7 });
        assert!(result.is_valid());

        result.add(DiagnosticKind::DuplicateExplosionDirection {
            direction: Direction::Up,
        });
        assert!(!result.is_valid());
    }

    #[test]
    fn oversize_is_the_only_diagnostic() {
        let bytes = vec![b' '; crate::level::MAX_FILE_SIZE + 1];
        match validate_bytes(&bytes) {
            Verdict::Rejected { diagnostics } => {
                assert_eq!(diagnostics.len(), 1);
                assert!(matches!(
                    diagnostics[0].kind,
                    DiagnosticKind::Oversize { .. }
                ));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn diagnostics_serialize_with_kind_tags() {
        let diagnostic = Diagnostic::new(DiagnosticKind::DanglingChannel { channel: 7 });
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["kind"], "danglingChannel");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["channel"], 7);
    }
}
