//! Overlap Constraint Engine
//!
//! Detects illegal spatial co-location. Entities are grouped by canonical
//! spatial key and every co-located pair is looked up in the overlap
//! compatibility tables: one for point-keyed types, one for edge-keyed
//! types. Point and edge keys never collide, so no cross-table check
//! exists.
//!
//! Grouping walks the document in order and checks each newcomer against
//! the earlier occupants of its bucket, so the report order is
//! deterministic and the cost is O(N) grouping plus O(Σ bucket²) pair
//! checks.

use std::collections::HashMap;

use crate::level::{Entity, Level, SpatialKey};
use crate::validation::{DiagnosticKind, ValidationResult};

/// Point-keyed occupant types, in overlap-table order. Exit is not an
/// entity but occupies a cell like one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    TimeMachine,
    Staff,
    Sauce,
    Mushroom,
    Button,
    Wire,
    Exit,
}

impl PointKind {
    pub fn name(self) -> &'static str {
        match self {
            PointKind::TimeMachine => "TimeMachine",
            PointKind::Staff => "Staff",
            PointKind::Sauce => "Sauce",
            PointKind::Mushroom => "Mushroom",
            PointKind::Button => "Button",
            PointKind::Wire => "Wire",
            PointKind::Exit => "Exit",
        }
    }
}

/// Edge-keyed occupant types, in overlap-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Wall,
    Curtain,
    OneWay,
    Glass,
    Door,
}

impl EdgeKind {
    pub fn name(self) -> &'static str {
        match self {
            EdgeKind::Wall => "Wall",
            EdgeKind::Curtain => "Curtain",
            EdgeKind::OneWay => "OneWay",
            EdgeKind::Glass => "Glass",
            EdgeKind::Door => "Door",
        }
    }
}

/// May two point-keyed occupants share a cell? Symmetric; the pair is
/// normalized to table order before lookup. Wire-Wire is the one same-type
/// pair the table allows (wires cross for cosmetic routing).
pub fn point_pair_allowed(a: PointKind, b: PointKind) -> bool {
    use PointKind::*;
    let (lo, hi) = if (a as u8) <= (b as u8) { (a, b) } else { (b, a) };
    matches!(
        (lo, hi),
        (TimeMachine, Wire)
            | (Staff, Sauce)
            | (Staff, Mushroom)
            | (Staff, Button)
            | (Staff, Wire)
            | (Sauce, Mushroom)
            | (Sauce, Button)
            | (Sauce, Wire)
            | (Mushroom, Button)
            | (Mushroom, Wire)
            | (Button, Wire)
            | (Wire, Wire)
            | (Wire, Exit)
    )
}

/// May two edge-keyed occupants share an edge? Symmetric, normalized like
/// [`point_pair_allowed`]. Only doors tolerate company, and only from
/// curtains and one-ways.
pub fn edge_pair_allowed(a: EdgeKind, b: EdgeKind) -> bool {
    use EdgeKind::*;
    let (lo, hi) = if (a as u8) <= (b as u8) { (a, b) } else { (b, a) };
    matches!((lo, hi), (Curtain, Door) | (OneWay, Door))
}

/// Group every occupant by canonical key and report incompatible pairs.
pub fn check(level: &Level, result: &mut ValidationResult) {
    let mut points: HashMap<SpatialKey, Vec<PointKind>> = HashMap::new();
    let mut edges: HashMap<SpatialKey, Vec<EdgeKind>> = HashMap::new();

    // The entrance and exit live outside `entities` but share its spatial
    // universe; they join first, as synthetic occupants.
    occupy_point(
        SpatialKey::from_cell(&level.entrance.position),
        PointKind::TimeMachine,
        &mut points,
        result,
    );
    occupy_point(
        SpatialKey::from_cell(&level.exit_position),
        PointKind::Exit,
        &mut points,
        result,
    );

    for entity in &level.entities {
        match entity {
            Entity::TimeMachine(tm) => occupy_point(
                SpatialKey::from_cell(&tm.position),
                PointKind::TimeMachine,
                &mut points,
                result,
            ),
            Entity::Staff(staff) => occupy_point(
                SpatialKey::from_cell(&staff.position),
                PointKind::Staff,
                &mut points,
                result,
            ),
            Entity::Sauce(sauce) => occupy_point(
                SpatialKey::from_cell(&sauce.position),
                PointKind::Sauce,
                &mut points,
                result,
            ),
            Entity::Mushroom(mushroom) => occupy_point(
                SpatialKey::from_cell(&mushroom.position),
                PointKind::Mushroom,
                &mut points,
                result,
            ),
            Entity::Button(button) => occupy_point(
                SpatialKey::from_cell(&button.position),
                PointKind::Button,
                &mut points,
                result,
            ),
            Entity::Wire(wire) => occupy_point(
                SpatialKey::from_cell(&wire.position),
                PointKind::Wire,
                &mut points,
                result,
            ),
            Entity::Wall(wall) => occupy_edge(
                SpatialKey::from_edge(&wall.edge_position),
                EdgeKind::Wall,
                &mut edges,
                result,
            ),
            Entity::Curtain(curtain) => occupy_edge(
                SpatialKey::from_edge(&curtain.edge_position),
                EdgeKind::Curtain,
                &mut edges,
                result,
            ),
            Entity::OneWay(one_way) => occupy_edge(
                SpatialKey::from_edge(&one_way.edge_position),
                EdgeKind::OneWay,
                &mut edges,
                result,
            ),
            Entity::Glass(glass) => occupy_edge(
                SpatialKey::from_edge(&glass.edge_position),
                EdgeKind::Glass,
                &mut edges,
                result,
            ),
            Entity::Door(door) => occupy_edge(
                SpatialKey::from_edge(&door.edge_position),
                EdgeKind::Door,
                &mut edges,
                result,
            ),
        }
    }
}

fn occupy_point(
    key: Option<SpatialKey>,
    kind: PointKind,
    buckets: &mut HashMap<SpatialKey, Vec<PointKind>>,
    result: &mut ValidationResult,
) {
    // Fractional coordinates have no key; the field validator already
    // reported them.
    let Some(key) = key else { return };
    let bucket = buckets.entry(key).or_default();
    for &earlier in bucket.iter() {
        if !point_pair_allowed(earlier, kind) {
            result.add(DiagnosticKind::OverlapViolation {
                key,
                first: earlier.name(),
                second: kind.name(),
            });
        }
    }
    bucket.push(kind);
}

fn occupy_edge(
    key: Option<SpatialKey>,
    kind: EdgeKind,
    buckets: &mut HashMap<SpatialKey, Vec<EdgeKind>>,
    result: &mut ValidationResult,
) {
    let Some(key) = key else { return };
    let bucket = buckets.entry(key).or_default();
    for &earlier in bucket.iter() {
        if !edge_pair_allowed(earlier, kind) {
            result.add(DiagnosticKind::OverlapViolation {
                key,
                first: earlier.name(),
                second: kind.name(),
            });
        }
    }
    bucket.push(kind);
}
