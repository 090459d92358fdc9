//! Interfaces to the embedding application: map cursor and speech output.

use crate::position::{MapDimensions, Position};

/// Source and sink of the map cursor.
pub trait CursorProvider {
    fn cursor(&self) -> Position;
    fn set_cursor(&mut self, position: Position);
}

/// Fire-and-forget speech output.
pub trait SpeechSink {
    fn say(&mut self, text: &str);
}

impl<T: CursorProvider + ?Sized> CursorProvider for &mut T {
    fn cursor(&self) -> Position {
        (**self).cursor()
    }

    fn set_cursor(&mut self, position: Position) {
        (**self).set_cursor(position);
    }
}

impl<T: SpeechSink + ?Sized> SpeechSink for &mut T {
    fn say(&mut self, text: &str) {
        (**self).say(text);
    }
}

/// Cursor owned by the embedding application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Current cursor position in world coordinates.
    pub position: Position,
}

impl CursorState {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Moves the cursor by the given delta, clamped to map bounds.
    pub fn move_by(&mut self, dx: i32, dy: i32, dimensions: MapDimensions) {
        let target = Position::new(
            self.position.x.saturating_add(dx),
            self.position.y.saturating_add(dy),
        );
        self.position = dimensions.clamp(target);
    }
}

impl CursorProvider for CursorState {
    fn cursor(&self) -> Position {
        self.position
    }

    fn set_cursor(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_movement_clamps_to_bounds() {
        let dims = MapDimensions::new(20, 20);
        let mut cursor = CursorState::new(Position::new(5, 5));
        cursor.move_by(-10, -10, dims);
        assert_eq!(cursor.position, Position::new(0, 0));

        cursor.move_by(100, 100, dims);
        assert_eq!(cursor.position, Position::new(19, 19));
    }

    #[test]
    fn borrowed_cursor_forwards() {
        fn jump(mut cursor: impl CursorProvider, to: Position) -> Position {
            cursor.set_cursor(to);
            cursor.cursor()
        }

        let mut cursor = CursorState::default();
        assert_eq!(jump(&mut cursor, Position::new(3, 4)), Position::new(3, 4));
        assert_eq!(cursor.position, Position::new(3, 4));
    }
}
