use strum::EnumCount;

/// Building subcategories in navigation order.
///
/// `Roads` is last and doubles as the bucket for unrecognized types.
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
pub enum BuildingSubcategory {
    Essential,
    Gathering,
    Production,
    Trade,
    #[strum(serialize = "Housing & Services")]
    HousingAndServices,
    #[strum(serialize = "Special Buildings")]
    SpecialBuildings,
    #[strum(serialize = "Blight Fighting")]
    BlightFighting,
    Decorations,
    Ruins,
    Roads,
}

impl BuildingSubcategory {
    /// Bucket for types the table does not know.
    pub const FALLBACK: Self = Self::Roads;

    pub fn index(self) -> usize {
        self as usize
    }
}

const _: () = assert!(BuildingSubcategory::FALLBACK as usize == BuildingSubcategory::COUNT - 1);

/// Maps a building's runtime type name to its subcategory.
pub fn classify_building(type_name: &str) -> BuildingSubcategory {
    use BuildingSubcategory::*;

    match type_name {
        "Hearth" | "Storage" | "Warehouse" | "Altar" => Essential,
        "Camp" | "GathererHut" | "Farm" | "Mine" | "Collector" | "Extractor" | "FishingHut"
        | "RainCatcher" => Gathering,
        "Workshop" | "ProductionBuilding" | "BlightrotProcessor" => Production,
        "TradingPost" | "Port" | "Market" => Trade,
        "House" | "Institution" | "Service" => HousingAndServices,
        "Shrine" | "Monastery" | "Poro" | "Seal" | "Vault" => SpecialBuildings,
        "BlightPost" | "Hydrant" => BlightFighting,
        "Decoration" => Decorations,
        "Ruin" | "Relic" | "RuinedBuilding" => Ruins,
        "Road" => Roads,
        other => {
            tracing::trace!(type_name = other, "unrecognized building type");
            BuildingSubcategory::FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_map_to_their_subcategory() {
        assert_eq!(classify_building("Hearth"), BuildingSubcategory::Essential);
        assert_eq!(classify_building("Farm"), BuildingSubcategory::Gathering);
        assert_eq!(classify_building("Workshop"), BuildingSubcategory::Production);
        assert_eq!(classify_building("TradingPost"), BuildingSubcategory::Trade);
        assert_eq!(
            classify_building("House"),
            BuildingSubcategory::HousingAndServices
        );
        assert_eq!(
            classify_building("BlightPost"),
            BuildingSubcategory::BlightFighting
        );
        assert_eq!(classify_building("Relic"), BuildingSubcategory::Ruins);
        assert_eq!(classify_building("Road"), BuildingSubcategory::Roads);
    }

    #[test]
    fn unknown_types_fall_back_to_last_subcategory() {
        assert_eq!(classify_building("Gazebo"), BuildingSubcategory::Roads);
        assert_eq!(classify_building(""), BuildingSubcategory::Roads);
        assert_eq!(BuildingSubcategory::FALLBACK.index(), BuildingSubcategory::COUNT - 1);
    }

    #[test]
    fn display_names_match_spoken_labels() {
        assert_eq!(
            BuildingSubcategory::SpecialBuildings.to_string(),
            "Special Buildings"
        );
        let name: &'static str = BuildingSubcategory::BlightFighting.into();
        assert_eq!(name, "Blight Fighting");
    }
}
