use std::collections::HashSet;

use super::state::Game;

impl Game {
    /// Panics if two active pieces share a cell or a piece sits off the board.
    pub(crate) fn debug_validate(&self) {
        let mut seen = HashSet::new();
        for piece in self.active_pieces() {
            assert!(
                piece.position.within(self.width, self.height),
                "piece {} is off the board at {}",
                piece.id,
                piece.position
            );
            assert!(
                seen.insert(piece.position),
                "two active pieces share {}",
                piece.position
            );
        }
    }

    /// Debug helper to print the board and turn state
    pub fn print_board(&self) {
        println!("{self}");
        println!("turn {} state {:?}", self.turn_count, self.state);
        for piece in self.selectable_pieces() {
            println!(
                "  {} at {}: moves {:?} captures {:?}",
                piece.id, piece.position, piece.moves, piece.captures
            );
        }
    }
}
