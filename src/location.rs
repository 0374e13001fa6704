use serde::*;
use std::fmt;

/// Arena tile coordinate, packed into a single `u16`.
///
/// Serializes the way the engine writes coordinates: a two element `[x, y]` array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub fn from_coords(x: u32, y: u32) -> Self {
        Location {
            packed: ((x << 8) | y) as u16,
        }
    }

    #[inline]
    pub fn from_xy(x: u8, y: u8) -> Self {
        Location::from_coords(x as u32, y as u32)
    }

    /// Build a location from signed coordinates, rejecting anything outside the 0..=255 range.
    pub fn try_from_signed(x: i32, y: i32) -> Option<Self> {
        if (0..=u8::MAX as i32).contains(&x) && (0..=u8::MAX as i32).contains(&y) {
            Some(Location::from_coords(x as u32, y as u32))
        } else {
            None
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    /// Euclidean distance, which is what unit ranges are measured in.
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x() as f32 - other.x() as f32;
        let dy = self.y() as f32 - other.y() as f32;

        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan distance, the number of moves between two tiles.
    pub fn moves_to(self, other: Self) -> u32 {
        let dx = (self.x() as i32 - other.x() as i32).unsigned_abs();
        let dy = (self.y() as i32 - other.y() as i32).unsigned_abs();

        dx + dy
    }

    /// Reflect across the vertical centre line of the arena.
    pub fn mirrored(self) -> Self {
        Location::from_xy(crate::constants::ARENA_SIZE - 1 - self.x(), self.y())
    }

    /// The tile directly above (towards the enemy).
    pub fn above(self) -> Self {
        Location::from_xy(self.x(), self.y().saturating_add(1))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

impl From<[u8; 2]> for Location {
    fn from(xy: [u8; 2]) -> Self {
        Location::from_xy(xy[0], xy[1])
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.x(), self.y()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The engine occasionally emits coordinates as floats.
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Location::try_from_signed(x as i32, y as i32)
            .ok_or_else(|| de::Error::custom(format!("coordinate out of range: [{}, {}]", x, y)))
    }
}
