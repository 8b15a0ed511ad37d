//! Channel & Geometry Consistency Checker
//!
//! Referential sanity beyond raw overlap: button/door/wire channel links
//! and explosion direction uniqueness. Edge-geometry uniqueness needs no
//! check of its own here; edge keys are canonical by construction (see
//! [`crate::level::geometry::EdgePosition::from_side`]) and the overlap
//! engine groups on them.

use std::collections::HashSet;

use crate::level::{Entity, Level};
use crate::validation::{DiagnosticKind, ValidationResult};

pub fn check(level: &Level, result: &mut ValidationResult) {
    check_channels(level, result);
    check_explosions(level, result);
}

/// Every channel consumed by a door or wire should have at least one
/// producing button. A consumer without one is dead content, reported as
/// an advisory warning, once per channel in document order of the first
/// consumer.
fn check_channels(level: &Level, result: &mut ValidationResult) {
    // One pass for producers, one for consumers. Non-whole channel values
    // are field violations and take no part in the graph.
    let producers: HashSet<i64> = level
        .entities
        .iter()
        .filter_map(|entity| match entity {
            Entity::Button(button) => button.channel.as_i64(),
            _ => None,
        })
        .collect();

    let mut warned: HashSet<i64> = HashSet::new();
    for entity in &level.entities {
        let channel = match entity {
            Entity::Door(door) => door.channel,
            Entity::Wire(wire) => wire.channel,
            _ => continue,
        };
        let Some(channel) = channel.as_i64() else {
            continue;
        };
        if !producers.contains(&channel) && warned.insert(channel) {
            result.add(DiagnosticKind::DanglingChannel { channel });
        }
    }
}

/// At most one explosion per direction.
fn check_explosions(level: &Level, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for explosion in &level.explosions {
        if !seen.insert(explosion.direction) {
            result.add(DiagnosticKind::DuplicateExplosionDirection {
                direction: explosion.direction,
            });
        }
    }
}
