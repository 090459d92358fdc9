//! Hierarchical spatial scanner.
//!
//! A scan reads one momentary snapshot of the [`EntitySource`], drops
//! fog-hidden entities, groups what is left by display name and orders
//! everything by distance from the cursor. Results are rebuilt wholesale on
//! every scan; nothing here is cached between calls.
mod buildings;
mod glades;
mod group;
mod resources;

pub use group::{ItemGroup, ScanResult, ScannedItem, SubcategoryMap};

use group::{GroupBuilder, Sighting};

use crate::classify::{Category, SubcategoryIndex};
use crate::config::DistanceMetrics;
use crate::env::{EntitySource, Pool, PoolRead};
use crate::fog::FogFilter;
use crate::position::Position;

/// Produces [`ScanResult`]s for a category, a single subcategory, or all
/// subcategories at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scanner {
    metrics: DistanceMetrics,
}

impl Scanner {
    pub fn new(metrics: DistanceMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> DistanceMetrics {
        self.metrics
    }

    /// Scans a whole category, grouping by display name only.
    pub fn scan_category(
        &self,
        source: &dyn EntitySource,
        category: Category,
        cursor: Position,
    ) -> ScanResult {
        let mut builder = GroupBuilder::new(cursor, self.metrics.for_category(category));
        self.collect(source, category, None, &mut |sighting| builder.push(sighting));
        let result = builder.finish();
        tracing::debug!(
            %category,
            groups = result.len(),
            items = result.item_count(),
            "category scan complete"
        );
        result
    }

    /// Scans every subcategory of `category` in one pass.
    ///
    /// Groups are keyed by `(subcategory, name)`. Glades have no
    /// subcategories and yield an empty map.
    pub fn scan_with_subcategories(
        &self,
        source: &dyn EntitySource,
        category: Category,
        cursor: Position,
    ) -> SubcategoryMap {
        let metric = self.metrics.for_category(category);
        let mut builders: Vec<GroupBuilder> = (0..category.subcategory_count())
            .map(|_| GroupBuilder::new(cursor, metric).keyed_by_subcategory())
            .collect();

        self.collect(source, category, None, &mut |sighting| {
            if let Some(builder) = sighting.subcategory.and_then(|sub| builders.get_mut(sub)) {
                builder.push(sighting);
            }
        });

        let map = SubcategoryMap::new(builders.into_iter().map(GroupBuilder::finish).collect());
        tracing::debug!(
            %category,
            subcategories = map.len(),
            first_non_empty = ?map.first_non_empty(),
            "subcategory scan complete"
        );
        map
    }

    /// Rescans one subcategory, skipping pools that cannot contribute to it.
    pub fn scan_subcategory(
        &self,
        source: &dyn EntitySource,
        category: Category,
        subcategory: SubcategoryIndex,
        cursor: Position,
    ) -> ScanResult {
        if !category.has_subcategories() {
            return self.scan_category(source, category, cursor);
        }

        let mut builder =
            GroupBuilder::new(cursor, self.metrics.for_category(category)).keyed_by_subcategory();
        self.collect(source, category, Some(subcategory), &mut |sighting| {
            if sighting.subcategory == Some(subcategory) {
                builder.push(sighting);
            }
        });
        let result = builder.finish();
        tracing::debug!(
            %category,
            subcategory,
            groups = result.len(),
            "subcategory rescan complete"
        );
        result
    }

    fn collect(
        &self,
        source: &dyn EntitySource,
        category: Category,
        only: Option<SubcategoryIndex>,
        emit: &mut dyn FnMut(Sighting),
    ) {
        match category {
            Category::Glades => glades::collect(source, emit),
            Category::Resources => {
                let fog = FogFilter::build(source);
                resources::collect(source, &fog, only, emit);
            }
            Category::Buildings => {
                let fog = FogFilter::build(source);
                buildings::collect(source, &fog, emit);
            }
        }
    }
}

/// Unwraps a pool read, logging and dropping whatever could not be read.
fn readable<T>(pool: Pool, read: PoolRead<T>) -> Vec<T> {
    let entries = match read {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(%pool, %error, "pool unavailable, treating as empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            entry
                .inspect_err(|error| tracing::warn!(%pool, %error, "skipping unreadable entity"))
                .ok()
        })
        .collect()
}
