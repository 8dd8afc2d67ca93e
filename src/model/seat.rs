use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// One of the four table positions in a bridge auction, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// The four seats in clockwise order.
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Single-letter form used in compact displays.
    pub fn letter(&self) -> &'static str {
        match self {
            Seat::North => "N",
            Seat::East => "E",
            Seat::South => "S",
            Seat::West => "W",
        }
    }

    /// Spelled-out name, the form the server speaks on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    /// Accept either the single letter or the spelled-out name,
    /// case-insensitively. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Some(Seat::North),
            "E" | "EAST" => Some(Seat::East),
            "S" | "SOUTH" => Some(Seat::South),
            "W" | "WEST" => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeatVisitor;

        impl Visitor<'_> for SeatVisitor {
            type Value = Seat;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a bridge seat (N/E/S/W or a full name)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Seat, E> {
                Seat::parse(value)
                    .ok_or_else(|| de::Error::custom(format!("invalid seat: {value}")))
            }
        }

        deserializer.deserialize_str(SeatVisitor)
    }
}
