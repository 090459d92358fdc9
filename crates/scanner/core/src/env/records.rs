//! Plain records handed out by an entity source.

use bitflags::bitflags;

use crate::position::Position;

bitflags! {
    /// Per-entity state bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityFlags: u8 {
        /// Glade has been revealed by the player.
        const DISCOVERED = 1 << 0;
        /// Ambient resource is marked for gathering.
        const MARKED = 1 << 1;
        /// Marker is highlighted (e.g. a tracked objective).
        const HIGHLIGHTED = 1 << 2;
    }
}

bitflags! {
    /// Game features that change how glades are presented.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        /// Contents of undiscovered glades are visible.
        const GLADE_INFO = 1 << 0;
        /// Glade danger levels are hidden; overrides `GLADE_INFO`.
        const HIDDEN_GLADES = 1 << 1;
    }
}

/// Position, name and runtime type of a resource, building or marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRecord {
    pub position: Position,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: EntityFlags,
}

impl EntityRecord {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            type_name: String::new(),
            flags: EntityFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_marked(&self) -> bool {
        self.flags.contains(EntityFlags::MARKED)
    }

    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(EntityFlags::HIGHLIGHTED)
    }
}

/// How dangerous an undiscovered glade is.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DangerLevel {
    #[default]
    None,
    Dangerous,
    Forbidden,
}

impl DangerLevel {
    /// Group name spoken for glades of this level.
    pub const fn glade_label(self) -> &'static str {
        match self {
            Self::None => "Small glade",
            Self::Dangerous => "Dangerous glade",
            Self::Forbidden => "Forbidden glade",
        }
    }
}

/// A glade: a region of tiles hidden until discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GladeRecord {
    pub tiles: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub danger: DangerLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: EntityFlags,
    /// Short summary of what the glade holds, when the game exposes it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contents: Option<String>,
}

impl GladeRecord {
    pub fn new(tiles: Vec<Position>, danger: DangerLevel) -> Self {
        Self {
            tiles,
            danger,
            flags: EntityFlags::empty(),
            contents: None,
        }
    }

    #[must_use]
    pub fn discovered(mut self) -> Self {
        self.flags.insert(EntityFlags::DISCOVERED);
        self
    }

    #[must_use]
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn is_discovered(&self) -> bool {
        self.flags.contains(EntityFlags::DISCOVERED)
    }

    /// Tile closest to the glade's centroid; the first such tile on ties.
    pub fn representative_tile(&self) -> Option<Position> {
        let count = self.tiles.len() as i64;
        if count == 0 {
            return None;
        }
        let (sum_x, sum_y) = self.tiles.iter().fold((0i64, 0i64), |(sx, sy), tile| {
            (sx + tile.x as i64, sy + tile.y as i64)
        });
        // Compare squared distances to the centroid scaled by `count` to stay in integers.
        self.tiles.iter().copied().min_by_key(|tile| {
            let dx = tile.x as i64 * count - sum_x;
            let dy = tile.y as i64 * count - sum_y;
            dx * dx + dy * dy
        })
    }
}

/// Field type of a map tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    #[default]
    Plain,
    FertileSoil,
    Custom(u16),
}

impl FieldKind {
    pub fn is_fertile(self) -> bool {
        matches!(self, Self::FertileSoil)
    }
}
