//! Spatial primitives: whole-valued numbers, cell positions, edge positions
//! and the canonical keys the overlap engine groups by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A JSON number that must hold a whole value.
///
/// The wire format does not distinguish `3` from `3.5`, so the raw `f64` is
/// kept at decode time and integer-ness is checked by the field validator,
/// not by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Int(pub f64);

impl Int {
    pub fn value(self) -> f64 {
        self.0
    }

    /// The stored value as an integer, or `None` when it carries a
    /// fractional component (or is not finite).
    pub fn as_i64(self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    pub fn is_whole(self) -> bool {
        self.as_i64().is_some()
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Self {
        Int(v as f64)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell's position in the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Int2 {
    pub x: Int,
    pub y: Int,
}

impl Int2 {
    pub fn new(x: i64, y: i64) -> Self {
        Int2 {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A direction in the level. Doubles as a rotation tag: the rotation from
/// RIGHT to itself, counter-clockwise (RIGHT = 0°, UP = 90°, LEFT = 180°,
/// DOWN = 270°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
        };
        f.write_str(name)
    }
}

/// Which boundary of `cell` an [`EdgePosition`] refers to.
///
/// Only RIGHT and TOP appear in level files: the left edge of a cell is
/// stored as the RIGHT edge of its left neighbour, and the bottom edge as
/// the TOP edge of the cell below. This keeps each physical edge with a
/// single encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Right,
    Top,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Right => "RIGHT",
            Alignment::Top => "TOP",
        })
    }
}

/// The position of an edge between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePosition {
    pub cell: Int2,
    pub alignment: Alignment,
}

impl EdgePosition {
    pub fn new(cell: Int2, alignment: Alignment) -> Self {
        EdgePosition { cell, alignment }
    }

    /// Build the canonical encoding of the edge on the given side of a cell.
    ///
    /// LEFT and DOWN sides are folded onto the RIGHT/TOP encoding of the
    /// neighbouring cell, so two ways of naming the same physical edge
    /// always produce the same value. This is the only path from a
    /// four-valued side to an edge position; callers never canonicalize
    /// after the fact.
    pub fn from_side(x: i64, y: i64, side: Direction) -> Self {
        match side {
            Direction::Right => EdgePosition::new(Int2::new(x, y), Alignment::Right),
            Direction::Up => EdgePosition::new(Int2::new(x, y), Alignment::Top),
            Direction::Left => EdgePosition::new(Int2::new(x - 1, y), Alignment::Right),
            Direction::Down => EdgePosition::new(Int2::new(x, y - 1), Alignment::Top),
        }
    }
}

/// Canonical key for "where an entity sits": a cell for point entities, an
/// edge for edge entities. Point and edge keys never collide by
/// construction.
///
/// Keys only exist for whole-valued coordinates; an entity whose position
/// carries a fractional component cannot be keyed (the field validator
/// already reports it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpatialKey {
    Cell { x: i64, y: i64 },
    Edge { x: i64, y: i64, alignment: Alignment },
}

impl SpatialKey {
    pub fn from_cell(position: &Int2) -> Option<Self> {
        Some(SpatialKey::Cell {
            x: position.x.as_i64()?,
            y: position.y.as_i64()?,
        })
    }

    pub fn from_edge(edge: &EdgePosition) -> Option<Self> {
        Some(SpatialKey::Edge {
            x: edge.cell.x.as_i64()?,
            y: edge.cell.y.as_i64()?,
            alignment: edge.alignment,
        })
    }
}

impl fmt::Display for SpatialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialKey::Cell { x, y } => write!(f, "cell ({x}, {y})"),
            SpatialKey::Edge { x, y, alignment } => {
                write!(f, "{alignment} edge of cell ({x}, {y})")
            }
        }
    }
}
