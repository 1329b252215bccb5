//! Core data model for the racer sprite.
//!
//! A sprite is a fixed 40×54 box holding one of four poses. Colors come
//! from a [`Palette`]; positions and sizes are in surface pixels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let pair = |i: usize| -> Option<u8> {
            let (hi, lo) = (hex_val(bytes[i])?, hex_val(bytes[i + 1])?);
            Some(hi << 4 | lo)
        };
        let short = |i: usize| -> Option<u8> { Some(hex_val(bytes[i])? * 17) };

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

/// Every color the sprite paints with.
///
/// Missing fields fall back to the default racing-green scheme when
/// deserialized, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Filled `o` wheels, also the outline of the diamond body.
    pub small_wheel: Color,
    /// Hollow `O` wheels.
    pub large_wheel: Color,
    /// The `●` hub in each wheel row.
    pub center_body: Color,
    /// The `◆` middle body.
    pub diamond: Color,
    /// Outline of filled wheels.
    pub wheel_stroke: Color,
    /// Outline of the hub.
    pub hub_stroke: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            small_wheel: Color::rgb(0x2A, 0x5F, 0x41),
            large_wheel: Color::rgb(0x2A, 0x5F, 0x41),
            center_body: Color::rgb(0xCC, 0x33, 0x33),
            diamond: Color::rgb(0x4A, 0x9F, 0x6A),
            wheel_stroke: Color::rgb(0x1A, 0x3F, 0x2A),
            hub_stroke: Color::rgb(0xAA, 0x22, 0x22),
        }
    }
}

// ─── Pose ────────────────────────────────────────────────────────────────

/// Which of the four shape layouts the sprite paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    /// `o●o / ◆ / O●O`
    #[default]
    Normal,
    /// `O● O / ◆ / o ●o`: wheels knocked out of line.
    Damaged,
    FacingLeft,
    FacingRight,
}

impl Pose {
    pub const ALL: [Pose; 4] = [Pose::Normal, Pose::Damaged, Pose::FacingLeft, Pose::FacingRight];

    /// Look up a pose by its host-facing name.
    ///
    /// Unrecognized names select [`Pose::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "normal" => Pose::Normal,
            "knocked" | "damaged" => Pose::Damaged,
            "left" => Pose::FacingLeft,
            "right" => Pose::FacingRight,
            other => {
                log::debug!("unknown pose {other:?}, using normal");
                Pose::Normal
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pose::Normal => "normal",
            Pose::Damaged => "knocked",
            Pose::FacingLeft => "left",
            Pose::FacingRight => "right",
        }
    }
}

impl From<&str> for Pose {
    fn from(name: &str) -> Self {
        Pose::from_name(name)
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Top-left anchor of the sprite's bounding box, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Nominal bounding box used for layout by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f64,
    pub height: f64,
}

impl SpriteSize {
    pub const NOMINAL: SpriteSize = SpriteSize {
        width: 40.0,
        height: 54.0,
    };

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
