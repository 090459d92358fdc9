//! Fixed category and subcategory tables.
//!
//! Subcategories are small integers into per-category name tables. The
//! tables are `#[repr(u8)]` enums so a [`SubcategoryIndex`] converts back with
//! `from_repr` and no map lookups are involved.
mod buildings;
mod resources;

pub use buildings::{BuildingSubcategory, classify_building};
pub use resources::{ResourceOrigin, ResourceSubcategory};

use strum::{EnumCount, IntoEnumIterator};

/// Index into a category's subcategory table.
pub type SubcategoryIndex = usize;

/// Top-level navigation category.
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
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Category {
    #[default]
    Glades,
    Resources,
    Buildings,
}

impl Category {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub const fn has_subcategories(self) -> bool {
        !matches!(self, Self::Glades)
    }

    /// Size of the subcategory table; zero for Glades.
    pub const fn subcategory_count(self) -> usize {
        match self {
            Self::Glades => 0,
            Self::Resources => ResourceSubcategory::COUNT,
            Self::Buildings => BuildingSubcategory::COUNT,
        }
    }

    pub fn subcategory_name(self, index: SubcategoryIndex) -> Option<&'static str> {
        let index = u8::try_from(index).ok()?;
        match self {
            Self::Glades => None,
            Self::Resources => ResourceSubcategory::from_repr(index).map(Into::into),
            Self::Buildings => BuildingSubcategory::from_repr(index).map(Into::into),
        }
    }

    /// Spoken when a scan of this category finds nothing.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Glades => "No glades",
            Self::Resources => "No resources",
            Self::Buildings => "No buildings",
        }
    }

    /// Spoken when every subcategory of this category is empty.
    pub const fn exhausted_message(self) -> &'static str {
        match self {
            Self::Glades => "Glades have no subcategories",
            Self::Resources => "No resources in any subcategory",
            Self::Buildings => "No buildings in any subcategory",
        }
    }
}
