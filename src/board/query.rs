//! Cell classification over the piece registry.

use super::{Coord, Piece};

/// What a ray finds at a coordinate.
#[derive(Clone, Copy, Debug)]
pub enum Cell<'a> {
    Empty,
    /// Off the board.
    Blocked,
    Occupied(&'a Piece),
}

impl Cell<'_> {
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Read-only view of the board used by move generation.
///
/// Lookups scan the registry linearly; boards are small (at most a few dozen
/// pieces), so no coordinate index is kept.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    width: i32,
    height: i32,
    pieces: &'a [Piece],
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(width: i32, height: i32, pieces: &'a [Piece]) -> Self {
        BoardView {
            width,
            height,
            pieces,
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Active piece on `at`, if any. Captured pieces are invisible.
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<&'a Piece> {
        self.pieces
            .iter()
            .find(|piece| piece.active && piece.position == at)
    }

    #[must_use]
    pub fn classify(&self, at: Coord) -> Cell<'a> {
        if !at.within(self.width, self.height) {
            return Cell::Blocked;
        }
        match self.piece_at(at) {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{KindId, PieceId, PlayerId};

    fn piece(id: usize, x: i32, y: i32) -> Piece {
        Piece::new(PieceId(id), PlayerId(0), KindId(0), Coord::new(x, y))
    }

    #[test]
    fn test_classify_bounds() {
        let pieces = [piece(0, 1, 1)];
        let view = BoardView::new(3, 2, &pieces);
        assert!(matches!(view.classify(Coord::new(-1, 0)), Cell::Blocked));
        assert!(matches!(view.classify(Coord::new(3, 0)), Cell::Blocked));
        assert!(matches!(view.classify(Coord::new(0, 2)), Cell::Blocked));
        assert!(view.classify(Coord::new(2, 1)).is_empty());
    }

    #[test]
    fn test_classify_occupied() {
        let pieces = [piece(0, 1, 1), piece(1, 2, 0)];
        let view = BoardView::new(3, 3, &pieces);
        match view.classify(Coord::new(2, 0)) {
            Cell::Occupied(p) => assert_eq!(p.id(), PieceId(1)),
            other => panic!("expected occupied, got {other:?}"),
        }
    }

    #[test]
    fn test_inactive_pieces_are_invisible() {
        let mut captured = piece(0, 1, 1);
        captured.active = false;
        let pieces = [captured];
        let view = BoardView::new(3, 3, &pieces);
        assert!(view.classify(Coord::new(1, 1)).is_empty());
        assert!(view.piece_at(Coord::new(1, 1)).is_none());
    }
}
