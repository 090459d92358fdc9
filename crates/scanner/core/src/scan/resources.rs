//! Natural resources: five entity pools plus a fertile-soil sweep.

use strum::IntoEnumIterator;

use crate::classify::{ResourceOrigin, ResourceSubcategory, SubcategoryIndex};
use crate::env::{EntitySource, Pool, SourceError};
use crate::fog::FogFilter;

use super::{Sighting, readable};

pub(super) const FERTILE_SOIL: &str = "Fertile soil";
pub(super) const MARKED_PREFIX: &str = "Marked ";

pub(super) fn collect(
    source: &dyn EntitySource,
    fog: &FogFilter,
    only: Option<SubcategoryIndex>,
    emit: &mut dyn FnMut(Sighting),
) {
    let wanted = |origin: ResourceOrigin| only.is_none_or(|sub| origin.subcategory().index() == sub);

    for origin in ResourceOrigin::iter().filter(|origin| wanted(*origin)) {
        let subcategory = origin.subcategory().index();
        if origin == ResourceOrigin::FertileSoil {
            sweep_fertile_soil(source, fog, subcategory, emit);
            continue;
        }

        for record in readable(origin.pool(), source.records(origin.pool())) {
            if fog.contains(record.position) {
                continue;
            }
            let name = if origin == ResourceOrigin::Ambient && record.is_marked() {
                format!("{MARKED_PREFIX}{}", record.name)
            } else {
                record.name
            };
            emit(
                Sighting::new(name, record.position)
                    .tagged(&record.type_name)
                    .in_subcategory(subcategory),
            );
        }
    }
}

/// Walks every map tile looking for fertile soil. Cost is proportional to map area.
fn sweep_fertile_soil(
    source: &dyn EntitySource,
    fog: &FogFilter,
    subcategory: SubcategoryIndex,
    emit: &mut dyn FnMut(Sighting),
) {
    debug_assert_eq!(subcategory, ResourceSubcategory::Natural.index());

    let dimensions = match source.map_dimensions() {
        Ok(dimensions) => dimensions,
        Err(error) => {
            tracing::debug!(%error, "map fields unavailable, skipping fertile soil");
            return;
        }
    };

    let mut failed = 0usize;
    let mut first_error: Option<SourceError> = None;
    for position in dimensions.positions() {
        match source.field(position) {
            Ok(field) if field.is_fertile() && !fog.contains(position) => emit(
                Sighting::new(FERTILE_SOIL, position)
                    .tagged("fertile_soil")
                    .in_subcategory(subcategory),
            ),
            Ok(_) => {}
            Err(SourceError::NotAvailable(_)) => {
                tracing::debug!(pool = %Pool::Fields, "field reads unavailable, stopping sweep");
                return;
            }
            Err(error) => {
                failed += 1;
                first_error.get_or_insert(error);
            }
        }
    }

    if let Some(error) = first_error {
        tracing::warn!(failed, %error, "skipped unreadable tiles during fertile soil sweep");
    }
}

#[cfg(test)]
mod tests {
    use crate::classify::{Category, ResourceSubcategory};
    use crate::env::{
        DangerLevel, EntityFlags, EntityRecord, FieldKind, GladeRecord, Pool, WorldSnapshot,
    };
    use crate::position::{MapDimensions, Position};
    use crate::scan::Scanner;

    fn world() -> WorldSnapshot {
        WorldSnapshot::new(MapDimensions::new(16, 16))
            .with_glade(GladeRecord::new(
                vec![Position::new(10, 10), Position::new(11, 10)],
                DangerLevel::Dangerous,
            ))
            .with_record(Pool::Ambient, EntityRecord::new(Position::new(1, 0), "Tree"))
            .with_record(
                Pool::Ambient,
                EntityRecord::new(Position::new(2, 0), "Tree").with_flags(EntityFlags::MARKED),
            )
            .with_record(Pool::Ambient, EntityRecord::new(Position::new(10, 10), "Tree"))
            .with_record(Pool::Deposits, EntityRecord::new(Position::new(3, 3), "Clay"))
            .with_record(Pool::Ores, EntityRecord::new(Position::new(4, 0), "Copper vein"))
            .with_record(Pool::Springs, EntityRecord::new(Position::new(0, 6), "Spring"))
            .with_record(Pool::Lakes, EntityRecord::new(Position::new(7, 7), "Lake"))
            .with_field(Position::new(5, 5), FieldKind::FertileSoil)
            .with_field(Position::new(5, 6), FieldKind::FertileSoil)
            .with_field(Position::new(11, 10), FieldKind::FertileSoil)
    }

    #[test]
    fn flat_scan_covers_every_pool() {
        let result = Scanner::default().scan_category(&world(), Category::Resources, Position::ORIGIN);
        let summary: Vec<_> = result
            .iter()
            .map(|group| (group.display_name.as_str(), group.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Tree", 1),
                ("Marked Tree", 1),
                ("Clay", 1),
                ("Copper vein", 1),
                ("Fertile soil", 2),
                ("Spring", 1),
                ("Lake", 1),
            ]
        );
    }

    #[test]
    fn fog_hides_resources_and_fertile_tiles() {
        let result = Scanner::default().scan_category(&world(), Category::Resources, Position::ORIGIN);
        let hidden = [Position::new(10, 10), Position::new(11, 10)];
        assert!(
            result
                .iter()
                .flat_map(|group| &group.items)
                .all(|item| !hidden.contains(&item.position))
        );
    }

    #[test]
    fn subcategories_route_by_origin() {
        let map =
            Scanner::default().scan_with_subcategories(&world(), Category::Resources, Position::ORIGIN);
        let names = |sub: ResourceSubcategory| -> Vec<String> {
            map.get(sub.index())
                .unwrap()
                .iter()
                .map(|group| group.display_name.clone())
                .collect()
        };
        assert_eq!(names(ResourceSubcategory::Natural), vec!["Tree", "Marked Tree", "Fertile soil"]);
        assert_eq!(names(ResourceSubcategory::Extracted), vec!["Copper vein", "Spring"]);
        assert_eq!(names(ResourceSubcategory::Collected), vec!["Clay", "Lake"]);
    }

    #[test]
    fn unavailable_pools_do_not_block_others() {
        let snapshot = world().without(Pool::Ores).without(Pool::Lakes);
        let result =
            Scanner::default().scan_subcategory(&snapshot, Category::Resources, 1, Position::ORIGIN);
        let names: Vec<_> = result.iter().map(|group| group.display_name.as_str()).collect();
        assert_eq!(names, vec!["Spring"]);
    }
}
