//! Level Document Model
//!
//! The declarative level format: the root [`Level`] document, the entity
//! union and the shared bounds constants. Decoding is strict: unknown
//! top-level fields, a wrong `version` tag, an unknown `entityType` or an
//! enum value outside its declared set fail at decode time. Whole-number
//! and coordinate-range rules are value constraints, checked later by the
//! field validator.

pub mod geometry;

use serde::{Deserialize, Deserializer, Serialize};

pub use geometry::{Alignment, Direction, EdgePosition, Int, Int2, SpatialKey};

/// Maximum number of entities in a level, counting the entrance and exit.
pub const MAX_ENTITY_COUNT: usize = 4000;

/// Maximum length of the `entities` array (the entrance and exit are
/// stored separately but count against [`MAX_ENTITY_COUNT`]).
pub const MAX_LEVEL_ENTITIES: usize = MAX_ENTITY_COUNT - 2;

/// Maximum level file size, in bytes (1 MiB).
pub const MAX_FILE_SIZE: usize = 1_048_576;

/// Maximum length of the level name.
pub const MAX_NAME_LENGTH: usize = 60;

/// Inclusive maximum position for all entities, the entrance, and the exit.
pub const MAX_POSITION: Int2 = Int2 {
    x: Int(192.0),
    y: Int(104.0),
};

/// Inclusive minimum position for all entities, the entrance, and the exit.
pub const MIN_POSITION: Int2 = Int2 {
    x: Int(-192.0),
    y: Int(-104.0),
};

/// Root level document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Level {
    /// Schema version tag; only `0` exists.
    #[serde(deserialize_with = "version_zero")]
    pub version: u8,
    /// Displayed in the workshop. At most 60 characters, ASCII 32–126 only.
    pub name: String,
    /// Displayed in the workshop. Free text.
    pub description: String,
    /// Color palette for walls and floors.
    pub color_palette: ColorPalette,
    /// At most one explosion per [`Direction`].
    pub explosions: Vec<Explosion>,
    /// The cell the player starts at.
    pub entrance: TimeMachine,
    /// The cell the player must reach to win.
    pub exit_position: Int2,
    /// Every other entity in the level. At most [`MAX_LEVEL_ENTITIES`].
    pub entities: Vec<Entity>,
}

fn version_zero<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != 0 {
        return Err(serde::de::Error::custom(format!(
            "unsupported level version {version}, expected 0"
        )));
    }
    Ok(version)
}

/// Wall/floor color palette. Variants are named after the floor color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColorPalette {
    /// Orange floor, blue walls.
    Orange,
    /// Blue floor, orange/purple walls.
    Blue,
    /// Purple floor, red walls.
    Purple,
    /// Pink floor, purple walls.
    Pink,
    /// Pale green floor, green walls.
    PaleGreen,
    /// Blue floor, green walls.
    BlueGreen,
    /// White floor, red walls.
    White,
}

impl TryFrom<u8> for ColorPalette {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorPalette::Orange),
            1 => Ok(ColorPalette::Blue),
            2 => Ok(ColorPalette::Purple),
            3 => Ok(ColorPalette::Pink),
            4 => Ok(ColorPalette::PaleGreen),
            5 => Ok(ColorPalette::BlueGreen),
            6 => Ok(ColorPalette::White),
            other => Err(format!("color palette {other} is out of range 0-6")),
        }
    }
}

impl From<ColorPalette> for u8 {
    fn from(palette: ColorPalette) -> u8 {
        palette as u8
    }
}

/// A moving front of explosions, one optional per direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explosion {
    /// The direction the explosions move.
    pub direction: Direction,
    /// The time at which the explosions reach `start_position`.
    pub start_time: Int,
    /// The coordinate reached at `start_time`: an x coordinate for
    /// LEFT/RIGHT explosions, a y coordinate for UP/DOWN ones.
    pub start_position: Int,
    /// Turns per cell of advance. Must be a real number > 0.
    pub period: f64,
}

/// A time machine, including the walls and doors around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeMachine {
    pub position: Int2,
    /// Aligns with the direction the player moves when going through.
    pub rotation: Direction,
}

/// A barrier that blocks vision and movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub edge_position: EdgePosition,
}

/// A barrier that blocks vision, but doesn't block movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curtain {
    pub edge_position: EdgePosition,
}

/// A barrier that blocks vision and only blocks movement in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneWay {
    pub edge_position: EdgePosition,
    /// `false` points the one-way in the positive direction (right or up),
    /// `true` in the negative direction (left or down).
    pub flip_direction: bool,
}

/// A barrier that blocks movement, but doesn't block vision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glass {
    pub edge_position: EdgePosition,
}

/// An item the player can pick up and move around the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub position: Int2,
}

/// A cell in which time doesn't advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sauce {
    pub position: Int2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MushroomType {
    Blue,
    Green,
    Red,
}

/// An item that gives the player a status effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mushroom {
    pub position: Int2,
    pub mushroom_type: MushroomType,
}

/// A cell that activates a channel when overlapping with a player or a
/// staff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub position: Int2,
    /// Doors and wires sharing this channel activate with the button.
    pub channel: Int,
}

/// A barrier that blocks movement and vision unless its channel is
/// activated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub edge_position: EdgePosition,
    /// The door opens when this channel is activated.
    pub channel: Int,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireSprite {
    Straight,
    Corner,
}

/// A cosmetic decoration indicating connections between buttons and doors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    pub position: Int2,
    pub rotation: Direction,
    pub sprite: WireSprite,
    /// The wire lights up when this channel is activated.
    pub channel: Int,
}

/// Any placeable object in a level besides the entrance and exit.
///
/// Checkers dispatch on this union with exhaustive matches, so adding a
/// variant is a compile-checked update to every checker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entityType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Entity {
    TimeMachine(TimeMachine),
    Wall(Wall),
    Curtain(Curtain),
    OneWay(OneWay),
    Glass(Glass),
    Staff(Staff),
    Sauce(Sauce),
    Mushroom(Mushroom),
    Button(Button),
    Door(Door),
    Wire(Wire),
}
