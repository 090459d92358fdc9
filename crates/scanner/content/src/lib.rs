//! File formats for worlds and navigator settings.
//!
//! - World snapshots (RON): map size, glades, every entity pool and fertile tiles
//! - Navigator configuration (TOML): distance metrics and announcement options
//!
//! Loaders deserialize straight into `scanner-core` types, so a loaded
//! world is just another [`scanner_core::EntitySource`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, WorldLoader};
