//! Spatial scanning and keyboard navigation over a colony map.
//!
//! `scanner-core` turns a momentary view of the world into spoken, ordered
//! lists: glades, resources and buildings grouped by name and sorted by
//! distance from the map cursor. The world is read through the
//! [`env::EntitySource`] capability trait; speech and cursor control go
//! through the [`ports`] traits. All navigation flows through
//! [`nav::Navigator`].
pub mod classify;
pub mod config;
pub mod env;
pub mod error;
pub mod fog;
pub mod geometry;
pub mod nav;
pub mod ports;
pub mod position;
pub mod scan;
pub mod speech;

pub use classify::{
    BuildingSubcategory, Category, ResourceOrigin, ResourceSubcategory, SubcategoryIndex,
    classify_building,
};
pub use config::{DistanceMetrics, NavigatorConfig};
pub use env::{
    Capabilities, DangerLevel, EntityFlags, EntityRead, EntityRecord, EntitySource, FieldKind,
    GladeRecord, Pool, PoolRead, SourceError, WorldSnapshot,
};
pub use error::{ErrorSeverity, ScannerError};
pub use fog::FogFilter;
pub use geometry::{Bearing, DistanceMetric, chebyshev_distance, manhattan_distance};
pub use nav::{NavCommand, NavigationState, Navigator, wrap_index};
pub use ports::{CursorProvider, CursorState, SpeechSink};
pub use position::{MapDimensions, Position};
pub use scan::{ItemGroup, ScanResult, ScannedItem, Scanner, SubcategoryMap};
pub use speech::{MessageEntry, MessageLog};
