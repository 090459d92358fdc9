use crate::env::Pool;

/// Resource subcategories in navigation order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum ResourceSubcategory {
    Natural,
    Extracted,
    Collected,
}

impl ResourceSubcategory {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Where a scanned resource comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum ResourceOrigin {
    Ambient,
    Deposit,
    Ore,
    Spring,
    Lake,
    FertileSoil,
}

impl ResourceOrigin {
    pub const fn subcategory(self) -> ResourceSubcategory {
        match self {
            Self::Ambient | Self::FertileSoil => ResourceSubcategory::Natural,
            Self::Ore | Self::Spring => ResourceSubcategory::Extracted,
            Self::Deposit | Self::Lake => ResourceSubcategory::Collected,
        }
    }

    /// Entity pool backing this origin. Fertile soil is swept from map fields.
    pub const fn pool(self) -> Pool {
        match self {
            Self::Ambient => Pool::Ambient,
            Self::Deposit => Pool::Deposits,
            Self::Ore => Pool::Ores,
            Self::Spring => Pool::Springs,
            Self::Lake => Pool::Lakes,
            Self::FertileSoil => Pool::Fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_route_to_subcategories() {
        assert_eq!(ResourceOrigin::Ambient.subcategory(), ResourceSubcategory::Natural);
        assert_eq!(ResourceOrigin::FertileSoil.subcategory(), ResourceSubcategory::Natural);
        assert_eq!(ResourceOrigin::Ore.subcategory(), ResourceSubcategory::Extracted);
        assert_eq!(ResourceOrigin::Spring.subcategory(), ResourceSubcategory::Extracted);
        assert_eq!(ResourceOrigin::Deposit.subcategory(), ResourceSubcategory::Collected);
        assert_eq!(ResourceOrigin::Lake.subcategory(), ResourceSubcategory::Collected);
    }
}
