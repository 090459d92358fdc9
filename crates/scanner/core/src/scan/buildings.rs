use crate::classify::classify_building;
use crate::env::{EntitySource, Pool};
use crate::fog::FogFilter;

use super::{Sighting, readable};

pub(super) fn collect(source: &dyn EntitySource, fog: &FogFilter, emit: &mut dyn FnMut(Sighting)) {
    let mut hidden = 0usize;
    for building in readable(Pool::Buildings, source.buildings()) {
        if fog.contains(building.position) {
            hidden += 1;
            continue;
        }
        let subcategory = classify_building(&building.type_name);
        emit(
            Sighting::new(building.name, building.position)
                .tagged(&building.type_name)
                .in_subcategory(subcategory.index()),
        );
    }
    if hidden > 0 {
        tracing::trace!(hidden, "buildings hidden by fog");
    }
}
