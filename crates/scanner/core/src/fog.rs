//! Scan-scoped fog-of-war tile set.
//!
//! Built once at the start of a Resources or Buildings scan so that
//! filtering an entity is a single hash lookup, then dropped with the scan.
//! Never cache it across scans: glades get discovered during play.

use std::collections::HashSet;

use crate::env::EntitySource;
use crate::position::Position;

#[derive(Debug, Default)]
pub struct FogFilter {
    hidden: HashSet<Position>,
}

impl FogFilter {
    /// Collects every tile belonging to an undiscovered glade.
    ///
    /// An unavailable glade pool yields an empty filter; unreadable glades
    /// are skipped.
    pub fn build(source: &dyn EntitySource) -> Self {
        let glades = match source.glades() {
            Ok(glades) => glades,
            Err(error) => {
                tracing::debug!(%error, "glade pool unavailable, fog filter is empty");
                return Self::default();
            }
        };

        let mut hidden = HashSet::new();
        for glade in glades {
            match glade {
                Ok(glade) if !glade.is_discovered() => hidden.extend(glade.tiles),
                Ok(_) => {}
                Err(error) => tracing::warn!(%error, "skipping unreadable glade in fog filter"),
            }
        }

        tracing::trace!(tiles = hidden.len(), "fog filter built");
        Self { hidden }
    }

    /// True when the tile lies inside an undiscovered glade.
    pub fn contains(&self, position: Position) -> bool {
        self.hidden.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}
