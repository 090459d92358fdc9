//! Undiscovered glades and standalone location markers.

use crate::env::{Capabilities, EntitySource, Pool};

use super::{Sighting, readable};

pub(super) const UNKNOWN_GLADE: &str = "Unknown glade";
pub(super) const HIGHLIGHTED_PREFIX: &str = "Highlighted: ";

pub(super) fn collect(source: &dyn EntitySource, emit: &mut dyn FnMut(Sighting)) {
    let capabilities = source.capabilities();

    for glade in readable(Pool::Glades, source.glades()) {
        if glade.is_discovered() {
            continue;
        }
        let Some(position) = glade.representative_tile() else {
            tracing::warn!("skipping glade without tiles");
            continue;
        };

        let label = glade.danger.glade_label();
        let name = if capabilities.contains(Capabilities::HIDDEN_GLADES) {
            UNKNOWN_GLADE.to_owned()
        } else if capabilities.contains(Capabilities::GLADE_INFO)
            && let Some(contents) = glade.contents.as_deref().filter(|c| !c.is_empty())
        {
            format!("{label}, {contents}")
        } else {
            label.to_owned()
        };

        emit(Sighting::new(name, position).tagged(glade.danger.as_ref()));
    }

    for marker in readable(Pool::Markers, source.markers()) {
        if marker.is_highlighted() {
            let name = format!("{HIGHLIGHTED_PREFIX}{}", marker.name);
            emit(Sighting::new(name, marker.position).tagged(&marker.type_name));
        } else {
            emit(
                Sighting::new(marker.name, marker.position)
                    .tagged(&marker.type_name)
                    .unique(),
            );
        }
    }
}
