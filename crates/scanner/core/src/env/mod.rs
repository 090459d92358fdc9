//! Capability-style access to the live world.
//!
//! The host game exposes its entities through [`EntitySource`]. Every pool
//! accessor is optional: the default implementation reports
//! [`SourceError::NotAvailable`], which the scanner reads as an empty pool.
//! Each entity inside a pool is its own [`EntityRead`] so a single broken
//! entity never hides the rest.
mod error;
mod records;
mod snapshot;

pub use error::SourceError;
pub use records::{Capabilities, DangerLevel, EntityFlags, EntityRecord, FieldKind, GladeRecord};
pub use snapshot::WorldSnapshot;

use crate::position::{MapDimensions, Position};

/// Result of reading one entity's attributes.
pub type EntityRead<T> = Result<T, SourceError>;

/// Result of enumerating one pool.
pub type PoolRead<T> = Result<Vec<EntityRead<T>>, SourceError>;

/// Entity pools the source can be asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Pool {
    Glades,
    Markers,
    Ambient,
    Deposits,
    Ores,
    Springs,
    Lakes,
    Buildings,
    Fields,
}

/// Read-only view of the world the scanner works from.
pub trait EntitySource {
    /// Optional features of the running game that change glade grouping.
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    fn glades(&self) -> PoolRead<GladeRecord> {
        Err(SourceError::NotAvailable(Pool::Glades))
    }

    /// Location and highlighted markers revealed independently of glades.
    fn markers(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Markers))
    }

    /// Ambient natural resources (trees, bushes); may carry [`EntityFlags::MARKED`].
    fn ambient_resources(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Ambient))
    }

    fn deposits(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Deposits))
    }

    fn ores(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Ores))
    }

    fn springs(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Springs))
    }

    fn lakes(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Lakes))
    }

    fn buildings(&self) -> PoolRead<EntityRecord> {
        Err(SourceError::NotAvailable(Pool::Buildings))
    }

    fn map_dimensions(&self) -> Result<MapDimensions, SourceError> {
        Err(SourceError::NotAvailable(Pool::Fields))
    }

    /// Field type of a single tile, used for the fertile-soil sweep.
    fn field(&self, position: Position) -> EntityRead<FieldKind> {
        let _ = position;
        Err(SourceError::NotAvailable(Pool::Fields))
    }

    /// Dispatches to the accessor for an entity-backed pool.
    ///
    /// `Glades` and `Fields` are not record pools and report unavailable.
    fn records(&self, pool: Pool) -> PoolRead<EntityRecord> {
        match pool {
            Pool::Markers => self.markers(),
            Pool::Ambient => self.ambient_resources(),
            Pool::Deposits => self.deposits(),
            Pool::Ores => self.ores(),
            Pool::Springs => self.springs(),
            Pool::Lakes => self.lakes(),
            Pool::Buildings => self.buildings(),
            Pool::Glades | Pool::Fields => Err(SourceError::NotAvailable(pool)),
        }
    }
}
