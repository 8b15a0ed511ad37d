//! Validation of level documents that go through real files, the way the
//! CLI consumes them.

use std::fs;
use std::io::Write;

use level_validator::level::MAX_FILE_SIZE;
use level_validator::validation::{DiagnosticKind, Verdict, validate_bytes};

const SAMPLE_LEVEL: &str = r#"{
    "version": 0,
    "name": "Sample",
    "description": "A small level exercising every entity type.",
    "colorPalette": 0,
    "explosions": [
        { "direction": "RIGHT", "startTime": -3, "startPosition": -190, "period": 2.5 }
    ],
    "entrance": { "position": { "x": -2, "y": 0 }, "rotation": "RIGHT" },
    "exitPosition": { "x": 12, "y": 0 },
    "entities": [
        { "entityType": "WALL", "edgePosition": { "cell": { "x": 0, "y": 0 }, "alignment": "RIGHT" } },
        { "entityType": "CURTAIN", "edgePosition": { "cell": { "x": 0, "y": 1 }, "alignment": "TOP" } },
        { "entityType": "ONE_WAY", "edgePosition": { "cell": { "x": 1, "y": 0 }, "alignment": "TOP" }, "flipDirection": true },
        { "entityType": "GLASS", "edgePosition": { "cell": { "x": 2, "y": 0 }, "alignment": "RIGHT" } },
        { "entityType": "STAFF", "position": { "x": 3, "y": 0 } },
        { "entityType": "SAUCE", "position": { "x": 4, "y": 0 } },
        { "entityType": "MUSHROOM", "position": { "x": 5, "y": 0 }, "mushroomType": "GREEN" },
        { "entityType": "BUTTON", "position": { "x": 6, "y": 0 }, "channel": 1 },
        { "entityType": "DOOR", "edgePosition": { "cell": { "x": 7, "y": 0 }, "alignment": "RIGHT" }, "channel": 1 },
        { "entityType": "WIRE", "position": { "x": 8, "y": 0 }, "rotation": "LEFT", "sprite": "CORNER", "channel": 1 },
        { "entityType": "TIME_MACHINE", "position": { "x": 9, "y": 0 }, "rotation": "UP" }
    ]
}"#;

#[test]
fn sample_file_with_every_entity_type_is_accepted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_LEVEL.as_bytes()).unwrap();

    let bytes = fs::read(file.path()).unwrap();
    let verdict = validate_bytes(&bytes);
    assert!(verdict.is_accepted(), "{:?}", verdict.diagnostics());
    assert!(verdict.diagnostics().is_empty());
}

#[test]
fn file_over_the_size_ceiling_is_rejected_with_oversize_only() {
    // Valid JSON would not help; the ceiling applies to raw bytes.
    let mut padded = SAMPLE_LEVEL.as_bytes().to_vec();
    padded.resize(MAX_FILE_SIZE + 1, b' ');

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&padded).unwrap();

    let bytes = fs::read(file.path()).unwrap();
    match validate_bytes(&bytes) {
        Verdict::Rejected { diagnostics } => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(
                diagnostics[0].kind,
                DiagnosticKind::Oversize {
                    size: MAX_FILE_SIZE + 1
                }
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn file_at_exactly_the_ceiling_still_decodes() {
    // Pad with trailing whitespace, which serde_json tolerates.
    let mut padded = SAMPLE_LEVEL.as_bytes().to_vec();
    padded.resize(MAX_FILE_SIZE, b' ');

    let verdict = validate_bytes(&padded);
    assert!(verdict.is_accepted(), "{:?}", verdict.diagnostics());
}

#[test]
fn truncated_file_is_malformed() {
    let truncated = &SAMPLE_LEVEL.as_bytes()[..SAMPLE_LEVEL.len() / 2];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(truncated).unwrap();

    let bytes = fs::read(file.path()).unwrap();
    match validate_bytes(&bytes) {
        Verdict::Rejected { diagnostics } => {
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(
                diagnostics[0].kind,
                DiagnosticKind::Malformed { .. }
            ));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn missing_required_field_is_malformed() {
    let no_entrance = SAMPLE_LEVEL.replace(
        "\"entrance\": { \"position\": { \"x\": -2, \"y\": 0 }, \"rotation\": \"RIGHT\" },",
        "",
    );
    match validate_bytes(no_entrance.as_bytes()) {
        Verdict::Rejected { diagnostics } => {
            assert!(matches!(
                diagnostics[0].kind,
                DiagnosticKind::Malformed { .. }
            ));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
