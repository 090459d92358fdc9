//! World snapshot loader.
//!
//! A world file lists the map size, glades and every entity pool. Pools
//! named under `unavailable` behave like a game that cannot provide them.
//! Flag sets are plain strings of flag names joined by `|`, e.g.
//! `"GLADE_INFO | HIDDEN_GLADES"`.
//!
//! ```ron
//! (
//!     dimensions: (32, 24),
//!     capabilities: "GLADE_INFO",
//!     glades: [
//!         (tiles: [(10, 10), (11, 10)], danger: Dangerous, contents: Some("Copper")),
//!     ],
//!     buildings: [
//!         (at: (2, 3), name: "Main Hearth", type_name: "Hearth"),
//!     ],
//!     fields: [(5, 5, FertileSoil)],
//!     unavailable: [ores],
//! )
//! ```

use std::path::Path;

use scanner_core::{
    Capabilities, DangerLevel, EntityFlags, EntityRecord, FieldKind, GladeRecord, MapDimensions,
    Pool, Position, WorldSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorldRon {
    dimensions: (u32, u32),
    #[serde(default)]
    capabilities: String,
    #[serde(default)]
    glades: Vec<GladeRon>,
    #[serde(default)]
    markers: Vec<EntityRon>,
    #[serde(default)]
    ambient: Vec<EntityRon>,
    #[serde(default)]
    deposits: Vec<EntityRon>,
    #[serde(default)]
    ores: Vec<EntityRon>,
    #[serde(default)]
    springs: Vec<EntityRon>,
    #[serde(default)]
    lakes: Vec<EntityRon>,
    #[serde(default)]
    buildings: Vec<EntityRon>,
    #[serde(default)]
    fields: Vec<(i32, i32, FieldKind)>, // (x, y, field)
    #[serde(default)]
    unavailable: Vec<Pool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GladeRon {
    tiles: Vec<(i32, i32)>,
    #[serde(default)]
    danger: DangerLevel,
    #[serde(default)]
    discovered: bool,
    #[serde(default)]
    contents: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntityRon {
    at: (i32, i32),
    name: String,
    #[serde(default)]
    type_name: String,
    #[serde(default)]
    flags: String,
}

impl From<GladeRon> for GladeRecord {
    fn from(glade: GladeRon) -> Self {
        let tiles = glade
            .tiles
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        let mut record = GladeRecord::new(tiles, glade.danger);
        if glade.discovered {
            record = record.discovered();
        }
        if let Some(contents) = glade.contents {
            record = record.with_contents(contents);
        }
        record
    }
}

impl TryFrom<EntityRon> for EntityRecord {
    type Error = anyhow::Error;

    fn try_from(entity: EntityRon) -> LoadResult<Self> {
        let flags: EntityFlags = parse_flags(&entity.flags)
            .map_err(|e| anyhow::anyhow!("Invalid flags for entity {:?}: {}", entity.name, e))?;
        Ok(
            EntityRecord::new(Position::new(entity.at.0, entity.at.1), entity.name)
                .with_type(entity.type_name)
                .with_flags(flags),
        )
    }
}

/// Parses `"A | B"` flag names; an empty string is the empty set.
fn parse_flags<B>(text: &str) -> LoadResult<B>
where
    B: bitflags::Flags,
    B::Bits: bitflags::parser::ParseHex,
{
    bitflags::parser::from_str::<B>(text).map_err(|e| anyhow::anyhow!("{} in {:?}", e, text))
}

/// Loader for [`WorldSnapshot`]s from RON files.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldSnapshot> {
        let content = read_file(path)?;
        let world = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world {}: {}", path.display(), e))?;
        tracing::info!(
            path = %path.display(),
            width = world.dimensions.width,
            height = world.dimensions.height,
            "world loaded"
        );
        Ok(world)
    }

    pub fn parse(content: &str) -> LoadResult<WorldSnapshot> {
        let data: WorldRon = ron::from_str(content)?;
        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);

        let capabilities: Capabilities = parse_flags(&data.capabilities)
            .map_err(|e| anyhow::anyhow!("Invalid capabilities: {}", e))?;

        let mut world = WorldSnapshot::new(dimensions).with_capabilities(capabilities);
        for glade in data.glades {
            world = world.with_glade(glade.into());
        }

        let pools = [
            (Pool::Markers, data.markers),
            (Pool::Ambient, data.ambient),
            (Pool::Deposits, data.deposits),
            (Pool::Ores, data.ores),
            (Pool::Springs, data.springs),
            (Pool::Lakes, data.lakes),
            (Pool::Buildings, data.buildings),
        ];
        for (pool, entities) in pools {
            for entity in entities {
                world = world.with_record(pool, entity.try_into()?);
            }
        }

        for (x, y, field) in data.fields {
            let position = Position::new(x, y);
            if !dimensions.contains(position) {
                anyhow::bail!(
                    "field {position} lies outside the {}x{} map",
                    dimensions.width,
                    dimensions.height
                );
            }
            world = world.with_field(position, field);
        }

        for pool in data.unavailable {
            world = world.without(pool);
        }

        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use scanner_core::{Category, EntitySource, Scanner, SourceError};

    use super::*;

    const SAMPLE: &str = r#"
        (
            dimensions: (20, 20),
            capabilities: "GLADE_INFO",
            glades: [
                (tiles: [(10, 10), (11, 10)], danger: Dangerous, contents: Some("Copper")),
                (tiles: [(1, 1)], discovered: true),
            ],
            ambient: [
                (at: (2, 0), name: "Tree", flags: "MARKED"),
                (at: (3, 0), name: "Tree"),
            ],
            buildings: [
                (at: (4, 4), name: "Main Hearth", type_name: "Hearth"),
                (at: (10, 10), name: "Lost Workshop", type_name: "Workshop"),
            ],
            fields: [(6, 6, FertileSoil)],
            unavailable: [ores],
        )
    "#;

    #[test]
    fn parses_every_section() {
        let world = WorldLoader::parse(SAMPLE).unwrap();

        assert_eq!(world.dimensions, MapDimensions::new(20, 20));
        assert!(world.capabilities.contains(Capabilities::GLADE_INFO));
        assert_eq!(world.glades.as_ref().map(Vec::len), Some(2));
        assert_eq!(world.buildings.as_ref().map(Vec::len), Some(2));
        assert_eq!(world.field(Position::new(6, 6)), Ok(FieldKind::FertileSoil));

        let ambient = world.ambient.as_ref().unwrap();
        assert!(ambient[0].is_marked());
        assert!(!ambient[1].is_marked());
    }

    #[test]
    fn unavailable_pools_report_not_available() {
        let world = WorldLoader::parse(SAMPLE).unwrap();
        assert_eq!(world.ores(), Err(SourceError::NotAvailable(Pool::Ores)));
        assert_eq!(world.springs().map(|springs| springs.len()), Ok(0));
    }

    #[test]
    fn loaded_world_scans_like_a_live_source() {
        let world = WorldLoader::parse(SAMPLE).unwrap();
        let scanner = Scanner::default();

        let glades = scanner.scan_category(&world, Category::Glades, Position::ORIGIN);
        let names: Vec<_> = glades.iter().map(|g| g.display_name.as_str()).collect();
        assert_eq!(names, vec!["Dangerous glade, Copper"]);

        let buildings = scanner.scan_category(&world, Category::Buildings, Position::ORIGIN);
        let names: Vec<_> = buildings.iter().map(|g| g.display_name.as_str()).collect();
        assert_eq!(names, vec!["Main Hearth"]);
    }

    #[test]
    fn minimal_world_has_empty_pools() {
        let world = WorldLoader::parse("(dimensions: (4, 3))").unwrap();
        assert_eq!(world, WorldSnapshot::new(MapDimensions::new(4, 3)));
    }

    #[test]
    fn fields_outside_the_map_are_rejected() {
        let err = WorldLoader::parse("(dimensions: (4, 4), fields: [(9, 0, FertileSoil)])")
            .unwrap_err()
            .to_string();
        assert!(err.contains("outside"));
    }

    #[test]
    fn flag_strings_accept_several_names() {
        let world = WorldLoader::parse(
            r#"(
                dimensions: (8, 8),
                capabilities: "GLADE_INFO | HIDDEN_GLADES",
                markers: [(at: (1, 1), name: "Beacon", flags: "MARKED | HIGHLIGHTED")],
            )"#,
        )
        .unwrap();

        assert_eq!(
            world.capabilities,
            Capabilities::GLADE_INFO | Capabilities::HIDDEN_GLADES
        );
        let markers = world.markers.unwrap();
        assert_eq!(
            markers[0].flags,
            EntityFlags::MARKED | EntityFlags::HIGHLIGHTED
        );
    }

    #[test]
    fn unknown_flag_names_are_rejected() {
        let err = WorldLoader::parse(
            r#"(dimensions: (4, 4), ambient: [(at: (0, 0), name: "Tree", flags: "SHINY")])"#,
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("Tree"));
        assert!(err.contains("SHINY"));

        let err = WorldLoader::parse(r#"(dimensions: (4, 4), capabilities: "TELEPATHY")"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("capabilities"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(dimensions: (8, 8), lakes: [(at: (1, 2), name: \"Lake\")])").unwrap();

        let world = WorldLoader::load(file.path()).unwrap();
        let lakes = world.lakes.unwrap();
        assert_eq!(lakes[0].position, Position::new(1, 2));
        assert_eq!(lakes[0].name, "Lake");
    }

    #[test]
    fn malformed_file_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(dimensions: oops)").unwrap();
        let message = WorldLoader::load(file.path()).unwrap_err().to_string();
        assert!(message.contains(&file.path().display().to_string()));
    }
}
