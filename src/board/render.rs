//! Plain-text board rendering.

use std::fmt;

use super::state::Game;
use super::Coord;

impl Game {
    /// One character for the piece on `at`: its kind's symbol,
    /// upper case for the player who opens, `.` when empty.
    #[must_use]
    pub fn glyph_at(&self, at: Coord) -> char {
        let Some(piece) = self.piece_at(at) else {
            return '.';
        };
        let letter = self.kind(piece.kind).symbol;
        if piece.owner == self.seats[self.first_index].id {
            letter.to_ascii_uppercase()
        } else {
            letter.to_ascii_lowercase()
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, "{}", x % 10)?;
        }
        for y in 0..self.height {
            write!(f, "\n{y:>2} ")?;
            for x in 0..self.width {
                write!(f, "{}", self.glyph_at(Coord::new(x, y)))?;
            }
        }
        Ok(())
    }
}
