//! Field Validator
//!
//! Scalar, string and coordinate constraints. One pass over the document,
//! collecting every violation; nothing here short-circuits or rejects on
//! its own. Field paths in diagnostics use the document's JSON spelling
//! (`entities[3].edgePosition.cell.x`).

use crate::level::{
    EdgePosition, Entity, Int, Int2, Level, MAX_LEVEL_ENTITIES, MAX_NAME_LENGTH, MAX_POSITION,
    MIN_POSITION,
};
use crate::validation::{DiagnosticKind, FieldRule, ValidationResult};

const NAME_CHAR_MIN: u32 = 32;
const NAME_CHAR_MAX: u32 = 126;

/// Check every scalar/string/coordinate constraint in the document.
pub fn check(level: &Level, result: &mut ValidationResult) {
    check_name(&level.name, result);

    if level.entities.len() > MAX_LEVEL_ENTITIES {
        result.add(DiagnosticKind::FieldViolation {
            path: "entities".to_string(),
            rule: FieldRule::TooManyEntities,
            value: level.entities.len().to_string(),
        });
    }

    check_position("entrance.position", &level.entrance.position, result);
    check_position("exitPosition", &level.exit_position, result);

    for (i, explosion) in level.explosions.iter().enumerate() {
        check_whole(
            format!("explosions[{i}].startTime"),
            explosion.start_time,
            result,
        );
        check_whole(
            format!("explosions[{i}].startPosition"),
            explosion.start_position,
            result,
        );
        if !(explosion.period.is_finite() && explosion.period > 0.0) {
            result.add(DiagnosticKind::FieldViolation {
                path: format!("explosions[{i}].period"),
                rule: FieldRule::NonPositivePeriod,
                value: explosion.period.to_string(),
            });
        }
    }

    for (i, entity) in level.entities.iter().enumerate() {
        check_entity(i, entity, result);
    }
}

fn check_name(name: &str, result: &mut ValidationResult) {
    if name.chars().count() > MAX_NAME_LENGTH {
        result.add(DiagnosticKind::FieldViolation {
            path: "name".to_string(),
            rule: FieldRule::NameTooLong,
            value: name.chars().count().to_string(),
        });
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(NAME_CHAR_MIN..=NAME_CHAR_MAX).contains(&(*c as u32)))
    {
        result.add(DiagnosticKind::FieldViolation {
            path: "name".to_string(),
            rule: FieldRule::NameCharset,
            value: format!("{:?} (U+{:04X})", bad, bad as u32),
        });
    }
}

fn check_entity(index: usize, entity: &Entity, result: &mut ValidationResult) {
    let base = format!("entities[{index}]");
    match entity {
        Entity::TimeMachine(tm) => {
            check_position(&format!("{base}.position"), &tm.position, result);
        }
        Entity::Wall(wall) => check_edge(&base, &wall.edge_position, result),
        Entity::Curtain(curtain) => check_edge(&base, &curtain.edge_position, result),
        Entity::OneWay(one_way) => check_edge(&base, &one_way.edge_position, result),
        Entity::Glass(glass) => check_edge(&base, &glass.edge_position, result),
        Entity::Staff(staff) => {
            check_position(&format!("{base}.position"), &staff.position, result);
        }
        Entity::Sauce(sauce) => {
            check_position(&format!("{base}.position"), &sauce.position, result);
        }
        Entity::Mushroom(mushroom) => {
            check_position(&format!("{base}.position"), &mushroom.position, result);
        }
        Entity::Button(button) => {
            check_position(&format!("{base}.position"), &button.position, result);
            check_whole(format!("{base}.channel"), button.channel, result);
        }
        Entity::Door(door) => {
            check_edge(&base, &door.edge_position, result);
            check_whole(format!("{base}.channel"), door.channel, result);
        }
        Entity::Wire(wire) => {
            check_position(&format!("{base}.position"), &wire.position, result);
            check_whole(format!("{base}.channel"), wire.channel, result);
        }
    }
}

fn check_edge(base: &str, edge: &EdgePosition, result: &mut ValidationResult) {
    check_position(&format!("{base}.edgePosition.cell"), &edge.cell, result);
}

fn check_position(path: &str, position: &Int2, result: &mut ValidationResult) {
    check_coordinate(
        format!("{path}.x"),
        position.x,
        MIN_POSITION.x.value(),
        MAX_POSITION.x.value(),
        result,
    );
    check_coordinate(
        format!("{path}.y"),
        position.y,
        MIN_POSITION.y.value(),
        MAX_POSITION.y.value(),
        result,
    );
}

/// Exactly one diagnostic per offending coordinate: a fractional value is
/// not additionally reported as out of bounds.
fn check_coordinate(path: String, value: Int, min: f64, max: f64, result: &mut ValidationResult) {
    match value.as_i64() {
        None => result.add(DiagnosticKind::FieldViolation {
            path,
            rule: FieldRule::NotAWholeNumber,
            value: value.to_string(),
        }),
        Some(v) => {
            if (v as f64) < min || (v as f64) > max {
                result.add(DiagnosticKind::FieldViolation {
                    path,
                    rule: FieldRule::OutOfBounds,
                    value: value.to_string(),
                });
            }
        }
    }
}

fn check_whole(path: String, value: Int, result: &mut ValidationResult) {
    if !value.is_whole() {
        result.add(DiagnosticKind::FieldViolation {
            path,
            rule: FieldRule::NotAWholeNumber,
            value: value.to_string(),
        });
    }
}
