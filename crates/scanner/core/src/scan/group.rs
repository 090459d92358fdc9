//! Scan result types and the builder that groups and orders sightings.

use std::collections::HashMap;

use crate::classify::SubcategoryIndex;
use crate::geometry::DistanceMetric;
use crate::position::Position;

/// One entity found by a scan.
///
/// `distance` is measured from the cursor at scan time and is not updated
/// until the next scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedItem {
    pub position: Position,
    pub distance: u32,
}

/// Entities sharing a display name, nearest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemGroup {
    pub display_name: String,
    pub type_tag: Option<String>,
    pub items: Vec<ScannedItem>,
}

impl ItemGroup {
    /// Distance of the nearest item. Groups are never empty.
    pub fn nearest_distance(&self) -> u32 {
        self.items.first().map_or(u32::MAX, |item| item.distance)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups of one (sub)category, ordered by nearest item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    groups: Vec<ItemGroup>,
}

impl ScanResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[ItemGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&ItemGroup> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(ItemGroup::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a ItemGroup;
    type IntoIter = std::slice::Iter<'a, ItemGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One result per subcategory, indexed by [`SubcategoryIndex`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubcategoryMap {
    results: Vec<ScanResult>,
}

impl SubcategoryMap {
    pub fn new(results: Vec<ScanResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: SubcategoryIndex) -> Option<&ScanResult> {
        self.results.get(index)
    }

    /// True when the subcategory has no groups (or does not exist).
    pub fn is_empty_at(&self, index: SubcategoryIndex) -> bool {
        self.get(index).is_none_or(ScanResult::is_empty)
    }

    pub fn first_non_empty(&self) -> Option<SubcategoryIndex> {
        self.results.iter().position(|result| !result.is_empty())
    }

    pub fn all_empty(&self) -> bool {
        self.results.iter().all(ScanResult::is_empty)
    }

    /// Swaps in a fresh result for one subcategory.
    pub fn replace(&mut self, index: SubcategoryIndex, result: ScanResult) {
        if let Some(slot) = self.results.get_mut(index) {
            *slot = result;
        }
    }
}

/// Raw entity observation emitted by the per-domain collectors.
#[derive(Clone, Debug)]
pub(crate) struct Sighting {
    pub subcategory: Option<SubcategoryIndex>,
    pub name: String,
    pub type_tag: Option<String>,
    pub position: Position,
    /// Forms its own single-item group regardless of name.
    pub unique: bool,
}

impl Sighting {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            subcategory: None,
            name: name.into(),
            type_tag: None,
            position,
            unique: false,
        }
    }

    pub fn in_subcategory(mut self, subcategory: SubcategoryIndex) -> Self {
        self.subcategory = Some(subcategory);
        self
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        if !tag.is_empty() {
            self.type_tag = Some(tag.to_owned());
        }
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GroupKey {
    subcategory: Option<SubcategoryIndex>,
    name: String,
}

/// Accumulates sightings into groups and produces an ordered [`ScanResult`].
pub(crate) struct GroupBuilder {
    origin: Position,
    metric: DistanceMetric,
    keyed_by_subcategory: bool,
    groups: Vec<ItemGroup>,
    index: HashMap<GroupKey, usize>,
}

impl GroupBuilder {
    pub fn new(origin: Position, metric: DistanceMetric) -> Self {
        Self {
            origin,
            metric,
            keyed_by_subcategory: false,
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Keys groups by `(subcategory, name)` so equal names in different
    /// subcategories stay apart.
    pub fn keyed_by_subcategory(mut self) -> Self {
        self.keyed_by_subcategory = true;
        self
    }

    pub fn push(&mut self, sighting: Sighting) {
        let item = ScannedItem {
            position: sighting.position,
            distance: self.metric.distance(self.origin, sighting.position),
        };

        if sighting.unique {
            self.groups.push(ItemGroup {
                display_name: sighting.name,
                type_tag: sighting.type_tag,
                items: vec![item],
            });
            return;
        }

        let key = GroupKey {
            subcategory: sighting.subcategory.filter(|_| self.keyed_by_subcategory),
            name: sighting.name,
        };
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].items.push(item);
            return;
        }

        self.index.insert(key.clone(), self.groups.len());
        self.groups.push(ItemGroup {
            display_name: key.name,
            type_tag: sighting.type_tag,
            items: vec![item],
        });
    }

    /// Sorts items by distance within each group, then groups by nearest item.
    ///
    /// Both sorts are stable; equal-distance groups fall back to name order.
    pub fn finish(mut self) -> ScanResult {
        for group in &mut self.groups {
            group.items.sort_by_key(|item| item.distance);
        }
        self.groups.sort_by(|a, b| {
            a.nearest_distance()
                .cmp(&b.nearest_distance())
                .then_with(|| a.display_name.cmp(&b.display_name))
        });
        ScanResult {
            groups: self.groups,
        }
    }
}
