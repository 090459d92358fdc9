//! Distance and direction math between grid positions.

use arrayvec::ArrayString;

use crate::position::Position;

/// Calculate Chebyshev distance between two positions.
///
/// Matches 8-directional movement cost on the grid.
pub fn chebyshev_distance(a: Position, b: Position) -> u32 {
    let (dx, dy) = a.delta_to(b);
    saturating_u32(dx.unsigned_abs().max(dy.unsigned_abs()))
}

/// Calculate Manhattan distance between two positions.
///
/// Saturates at `u32::MAX` for points at opposite corners of the coordinate space.
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    let (dx, dy) = a.delta_to(b);
    saturating_u32(dx.unsigned_abs() + dy.unsigned_abs())
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Metric used to order scanned items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DistanceMetric {
    #[default]
    Chebyshev,
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(self, a: Position, b: Position) -> u32 {
        match self {
            Self::Chebyshev => chebyshev_distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
        }
    }
}

/// Eight-way compass label from one tile to another.
///
/// North/south is included when `2|dy| >= |dx|`, east/west when
/// `2|dx| >= |dy|`. Both components together give the diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bearing {
    north_south: Option<&'static str>,
    east_west: Option<&'static str>,
}

impl Bearing {
    pub fn between(from: Position, to: Position) -> Self {
        let (dx, dy) = from.delta_to(to);
        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());

        let north_south = (dy != 0 && 2 * ay >= ax).then(|| if dy > 0 { "north" } else { "south" });
        let east_west = (dx != 0 && 2 * ax >= ay).then(|| if dx > 0 { "east" } else { "west" });

        Self {
            north_south,
            east_west,
        }
    }

    /// True when both tiles coincide.
    pub fn is_here(&self) -> bool {
        self.north_south.is_none() && self.east_west.is_none()
    }

    /// Spoken label: "north", "southeast", ... or "here".
    pub fn label(&self) -> ArrayString<16> {
        let mut label = ArrayString::new();
        if self.is_here() {
            label.push_str("here");
            return label;
        }
        if let Some(ns) = self.north_south {
            label.push_str(ns);
        }
        if let Some(ew) = self.east_west {
            label.push_str(ew);
        }
        label
    }
}
