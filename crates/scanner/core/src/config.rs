//! Navigator configuration and tunable parameters.

use crate::classify::Category;
use crate::geometry::DistanceMetric;

/// Distance metric used to order each category's scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceMetrics {
    pub glades: DistanceMetric,
    pub resources: DistanceMetric,
    pub buildings: DistanceMetric,
}

impl DistanceMetrics {
    /// Same metric for every category.
    pub const fn uniform(metric: DistanceMetric) -> Self {
        Self {
            glades: metric,
            resources: metric,
            buildings: metric,
        }
    }

    pub const fn for_category(&self, category: Category) -> DistanceMetric {
        match category {
            Category::Glades => self.glades,
            Category::Resources => self.resources,
            Category::Buildings => self.buildings,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    pub metrics: DistanceMetrics,
    /// Append distance and direction when stepping between items.
    pub announce_distance_on_item: bool,
}

impl NavigatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: DistanceMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_distance_on_item(mut self, enabled: bool) -> Self {
        self.announce_distance_on_item = enabled;
        self
    }
}
