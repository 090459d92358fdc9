//! In-memory entity source.
//!
//! A [`WorldSnapshot`] captures one moment of the world. Pools left as `None`
//! behave exactly like a live source that cannot provide them. Used by the
//! content loaders, the terminal harness and tests.

use std::collections::HashMap;

use super::{
    Capabilities, EntityRecord, EntitySource, FieldKind, GladeRecord, Pool, PoolRead, SourceError,
};
use crate::position::{MapDimensions, Position};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldSnapshot {
    pub dimensions: MapDimensions,
    pub capabilities: Capabilities,
    pub glades: Option<Vec<GladeRecord>>,
    pub markers: Option<Vec<EntityRecord>>,
    pub ambient: Option<Vec<EntityRecord>>,
    pub deposits: Option<Vec<EntityRecord>>,
    pub ores: Option<Vec<EntityRecord>>,
    pub springs: Option<Vec<EntityRecord>>,
    pub lakes: Option<Vec<EntityRecord>>,
    pub buildings: Option<Vec<EntityRecord>>,
    /// Tiles whose field differs from [`FieldKind::Plain`]; `None` when field
    /// reads are unavailable. The map keeps its dimensions either way.
    pub fields: Option<HashMap<Position, FieldKind>>,
}

impl WorldSnapshot {
    /// Creates a snapshot where every pool is available and empty.
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            capabilities: Capabilities::empty(),
            glades: Some(Vec::new()),
            markers: Some(Vec::new()),
            ambient: Some(Vec::new()),
            deposits: Some(Vec::new()),
            ores: Some(Vec::new()),
            springs: Some(Vec::new()),
            lakes: Some(Vec::new()),
            buildings: Some(Vec::new()),
            fields: Some(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_glade(mut self, glade: GladeRecord) -> Self {
        self.glades.get_or_insert_with(Vec::new).push(glade);
        self
    }

    #[must_use]
    pub fn with_record(mut self, pool: Pool, record: EntityRecord) -> Self {
        if let Some(records) = self.pool_mut(pool) {
            records.get_or_insert_with(Vec::new).push(record);
        }
        self
    }

    #[must_use]
    pub fn with_field(mut self, position: Position, field: FieldKind) -> Self {
        self.fields
            .get_or_insert_with(HashMap::new)
            .insert(position, field);
        self
    }

    /// Marks a pool as unavailable.
    #[must_use]
    pub fn without(mut self, pool: Pool) -> Self {
        match pool {
            Pool::Glades => self.glades = None,
            Pool::Fields => self.fields = None,
            _ => {
                if let Some(records) = self.pool_mut(pool) {
                    *records = None;
                }
            }
        }
        self
    }

    /// Flags the glade containing `tile` as discovered. Returns whether one matched.
    pub fn discover_glade_at(&mut self, tile: Position) -> bool {
        let Some(glade) = self
            .glades
            .iter_mut()
            .flatten()
            .find(|glade| glade.tiles.contains(&tile))
        else {
            return false;
        };
        glade.flags.insert(super::EntityFlags::DISCOVERED);
        true
    }

    fn pool_mut(&mut self, pool: Pool) -> Option<&mut Option<Vec<EntityRecord>>> {
        match pool {
            Pool::Markers => Some(&mut self.markers),
            Pool::Ambient => Some(&mut self.ambient),
            Pool::Deposits => Some(&mut self.deposits),
            Pool::Ores => Some(&mut self.ores),
            Pool::Springs => Some(&mut self.springs),
            Pool::Lakes => Some(&mut self.lakes),
            Pool::Buildings => Some(&mut self.buildings),
            Pool::Glades | Pool::Fields => None,
        }
    }

    fn read<T: Clone>(pool: Pool, records: &Option<Vec<T>>) -> PoolRead<T> {
        records
            .as_ref()
            .map(|records| records.iter().cloned().map(Ok).collect())
            .ok_or(SourceError::NotAvailable(pool))
    }
}

impl EntitySource for WorldSnapshot {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn glades(&self) -> PoolRead<GladeRecord> {
        Self::read(Pool::Glades, &self.glades)
    }

    fn markers(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Markers, &self.markers)
    }

    fn ambient_resources(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Ambient, &self.ambient)
    }

    fn deposits(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Deposits, &self.deposits)
    }

    fn ores(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Ores, &self.ores)
    }

    fn springs(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Springs, &self.springs)
    }

    fn lakes(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Lakes, &self.lakes)
    }

    fn buildings(&self) -> PoolRead<EntityRecord> {
        Self::read(Pool::Buildings, &self.buildings)
    }

    fn map_dimensions(&self) -> Result<MapDimensions, SourceError> {
        match self.fields {
            Some(_) => Ok(self.dimensions),
            None => Err(SourceError::NotAvailable(Pool::Fields)),
        }
    }

    fn field(&self, position: Position) -> Result<FieldKind, SourceError> {
        let fields = self
            .fields
            .as_ref()
            .ok_or(SourceError::NotAvailable(Pool::Fields))?;
        if !self.dimensions.contains(position) {
            return Err(SourceError::OutOfBounds(position));
        }
        Ok(fields.get(&position).copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::DangerLevel;

    #[test]
    fn missing_pools_are_unavailable() {
        let snapshot = WorldSnapshot::new(MapDimensions::new(8, 8)).without(Pool::Ores);
        assert_eq!(
            snapshot.ores().unwrap_err(),
            SourceError::NotAvailable(Pool::Ores)
        );
        assert!(snapshot.springs().unwrap().is_empty());
    }

    #[test]
    fn field_defaults_to_plain_and_checks_bounds() {
        let snapshot = WorldSnapshot::new(MapDimensions::new(4, 4))
            .with_field(Position::new(1, 2), FieldKind::FertileSoil);
        assert_eq!(snapshot.field(Position::new(1, 2)), Ok(FieldKind::FertileSoil));
        assert_eq!(snapshot.field(Position::new(0, 0)), Ok(FieldKind::Plain));
        assert_eq!(
            snapshot.field(Position::new(9, 0)),
            Err(SourceError::OutOfBounds(Position::new(9, 0)))
        );
    }

    #[test]
    fn unavailable_fields_keep_the_map_size() {
        let snapshot = WorldSnapshot::new(MapDimensions::new(12, 9))
            .with_field(Position::new(1, 1), FieldKind::FertileSoil)
            .without(Pool::Fields);
        assert_eq!(snapshot.dimensions, MapDimensions::new(12, 9));
        assert_eq!(
            snapshot.map_dimensions(),
            Err(SourceError::NotAvailable(Pool::Fields))
        );
        assert_eq!(
            snapshot.field(Position::new(1, 1)),
            Err(SourceError::NotAvailable(Pool::Fields))
        );
    }

    #[test]
    fn discovering_a_glade_flags_it() {
        let mut snapshot = WorldSnapshot::new(MapDimensions::new(8, 8)).with_glade(
            GladeRecord::new(vec![Position::new(3, 3), Position::new(3, 4)], DangerLevel::None),
        );
        assert!(snapshot.discover_glade_at(Position::new(3, 4)));
        assert!(!snapshot.discover_glade_at(Position::new(0, 0)));
        let glades = snapshot.glades().unwrap();
        assert!(glades[0].as_ref().unwrap().is_discovered());
    }
}
