//! Navigation indices and cached scan results.

use crate::classify::{Category, SubcategoryIndex};
use crate::scan::{ItemGroup, ScanResult, ScannedItem, SubcategoryMap};

/// Advances `index` by `direction` modulo `count`, always landing in range.
///
/// `count` must be non-zero.
pub fn wrap_index(index: usize, direction: i32, count: usize) -> usize {
    debug_assert!(count > 0, "wrap_index on an empty range");
    let count = count.max(1) as i64;
    (index as i64 + direction as i64).rem_euclid(count) as usize
}

/// Where the user is in the Category → Subcategory → Group → Item hierarchy.
///
/// Owned by the navigator; caches are dropped whenever the category changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub(super) category: Category,
    pub(super) subcategory: SubcategoryIndex,
    pub(super) group: usize,
    pub(super) item: usize,
    pub(super) result: Option<ScanResult>,
    pub(super) subcategories: Option<SubcategoryMap>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcategory(&self) -> SubcategoryIndex {
        self.subcategory
    }

    pub fn group_index(&self) -> usize {
        self.group
    }

    pub fn item_index(&self) -> usize {
        self.item
    }

    /// Cached subcategory map of the current category, if built.
    pub fn subcategory_map(&self) -> Option<&SubcategoryMap> {
        self.subcategories.as_ref()
    }

    /// Result the group and item indices point into.
    pub fn current_result(&self) -> Option<&ScanResult> {
        if self.category.has_subcategories() {
            self.subcategories.as_ref()?.get(self.subcategory)
        } else {
            self.result.as_ref()
        }
    }

    pub fn current_group(&self) -> Option<&ItemGroup> {
        self.current_result()?.group(self.group)
    }

    pub fn current_item(&self) -> Option<(&ItemGroup, &ScannedItem)> {
        let group = self.current_group()?;
        group.items.get(self.item).map(|item| (group, item))
    }

    /// Switches category, resetting every index and dropping both caches.
    pub(super) fn enter_category(&mut self, category: Category) {
        *self = Self {
            category,
            ..Self::default()
        };
    }

    pub(super) fn reset_position(&mut self) {
        self.group = 0;
        self.item = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_range_for_both_directions() {
        for count in 1..8 {
            for index in 0..count {
                for direction in [-1, 1] {
                    assert!(wrap_index(index, direction, count) < count);
                }
            }
        }
    }

    #[test]
    fn wrap_rolls_over_at_the_ends() {
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 1), 0);
        assert_eq!(wrap_index(0, -1, 1), 0);
    }

    #[test]
    fn wrap_normalizes_stale_indices() {
        // A rescan can shrink the result under a stored index.
        assert_eq!(wrap_index(7, 1, 3), 2);
        assert_eq!(wrap_index(7, -1, 3), 0);
    }

    #[test]
    fn entering_a_category_clears_caches() {
        let mut state = NavigationState {
            category: Category::Buildings,
            subcategory: 4,
            group: 2,
            item: 1,
            result: Some(ScanResult::empty()),
            subcategories: Some(SubcategoryMap::default()),
        };
        state.enter_category(Category::Glades);
        assert_eq!(state, NavigationState::new());
        assert!(state.current_result().is_none());
    }
}
