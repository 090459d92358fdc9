use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `+y` points north, `+x` points east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `self` to `other` as `(dx, dy)`.
    ///
    /// Widened to `i64` so opposite corners of the coordinate space cannot overflow.
    pub const fn delta_to(self, other: Position) -> (i64, i64) {
        (
            other.x as i64 - self.x as i64,
            other.y as i64 - self.y as i64,
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of the playable map in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.width)
            && i64::from(position.y) < i64::from(self.height)
    }

    /// Clamps a position into the map. Empty maps clamp to the origin.
    pub fn clamp(&self, position: Position) -> Position {
        let max_x = last_index(self.width);
        let max_y = last_index(self.height);
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    /// Iterates every tile in row-major order.
    ///
    /// Axes longer than `i32::MAX` tiles stop at the largest representable coordinate.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = saturating_coord(self.width);
        let height = saturating_coord(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

fn saturating_coord(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

fn last_index(extent: u32) -> i32 {
    saturating_coord(extent.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_cover_every_tile_row_major() {
        let dims = MapDimensions::new(3, 2);
        let tiles: Vec<_> = dims.positions().collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], Position::new(0, 0));
        assert_eq!(tiles[2], Position::new(2, 0));
        assert_eq!(tiles[5], Position::new(2, 1));
    }

    #[test]
    fn clamp_keeps_positions_inside_bounds() {
        let dims = MapDimensions::new(20, 10);
        assert_eq!(dims.clamp(Position::new(-4, 30)), Position::new(0, 9));
        assert_eq!(dims.clamp(Position::new(7, 3)), Position::new(7, 3));
        assert_eq!(MapDimensions::default().clamp(Position::new(5, 5)), Position::ORIGIN);
    }

    #[test]
    fn oversized_maps_saturate_instead_of_wrapping() {
        let dims = MapDimensions::new(1 << 31, u32::MAX);
        assert_eq!(
            dims.clamp(Position::new(i32::MAX, -5)),
            Position::new(i32::MAX, 0)
        );
        assert!(dims.contains(Position::new(i32::MAX, i32::MAX)));
        assert!(!MapDimensions::new(1 << 31, 1).contains(Position::new(0, 1)));
    }

    #[test]
    fn delta_spans_the_whole_coordinate_range() {
        let far_west = Position::new(i32::MIN, 0);
        let far_east = Position::new(i32::MAX, 0);
        assert_eq!(far_west.delta_to(far_east), (u32::MAX as i64, 0));
        assert_eq!(far_east.delta_to(far_west), (-(u32::MAX as i64), 0));
    }
}
