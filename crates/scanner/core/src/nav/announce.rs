//! Spoken text for navigation results.

use crate::classify::Category;
use crate::geometry::Bearing;
use crate::scan::ItemGroup;

/// "<group>, <i> of <n>" with a 1-based item number.
pub fn position_line(group: &ItemGroup, item: usize) -> String {
    format!("{}, {}", group.display_name, item_line(item, group.len()))
}

/// First announcement after entering a category.
///
/// Subcategorized categories lead with category and subcategory names.
pub fn category_line(
    category: Category,
    subcategory: Option<&str>,
    group: &ItemGroup,
    item: usize,
) -> String {
    match subcategory {
        Some(subcategory) => format!(
            "{category}, {subcategory}, {}",
            position_line(group, item)
        ),
        None => position_line(group, item),
    }
}

pub fn subcategory_line(subcategory: &str, group: &ItemGroup, item: usize) -> String {
    format!("{subcategory}, {}", position_line(group, item))
}

/// "<i> of <n>" with a 1-based item number.
pub fn item_line(item: usize, count: usize) -> String {
    format!("{} of {}", item + 1, count)
}

/// "<d> tiles <direction>", "1 tile <direction>" or "here".
pub fn distance_line(distance: u32, bearing: Bearing) -> String {
    if bearing.is_here() {
        return bearing.label().to_string();
    }
    let unit = if distance == 1 { "tile" } else { "tiles" };
    format!("{distance} {unit} {}", bearing.label())
}

pub fn moved_line(group: &ItemGroup) -> String {
    format!("Moved to {}", group.display_name)
}
