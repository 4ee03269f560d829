//! Ray-walking move and capture generation.
//!
//! Every destination comes from walking a kind's directions one cell at a
//! time. The first non-empty cell always ends a ray; nothing beyond it is
//! ever produced. Ownership is judged against the moving piece's owner.

use super::query::{BoardView, Cell};
use super::{Capture, CaptureGeometry, Coord, Direction, PlayerId};

impl BoardView<'_> {
    /// Empty cells reachable along `directions`, in direction order.
    #[must_use]
    pub fn legal_moves(&self, from: Coord, directions: &[Direction]) -> Vec<Coord> {
        let mut moves = Vec::new();
        for direction in directions {
            for at in direction.ray(from) {
                if !self.classify(at).is_empty() {
                    break;
                }
                moves.push(at);
            }
        }
        moves
    }

    /// Captures available to a piece of `mover` standing on `from`.
    #[must_use]
    pub fn legal_captures(
        &self,
        from: Coord,
        mover: PlayerId,
        directions: &[Direction],
        geometry: CaptureGeometry,
    ) -> Vec<Capture> {
        let mut captures = Vec::new();
        for direction in directions {
            if let Some(capture) = self.capture_along(from, mover, *direction, geometry) {
                captures.push(capture);
            }
        }
        captures
    }

    fn capture_along(
        &self,
        from: Coord,
        mover: PlayerId,
        direction: Direction,
        geometry: CaptureGeometry,
    ) -> Option<Capture> {
        for at in direction.ray(from) {
            match self.classify(at) {
                Cell::Empty => continue,
                Cell::Blocked => return None,
                Cell::Occupied(piece) if piece.owner == mover => return None,
                Cell::Occupied(victim) => {
                    let landing = match geometry {
                        CaptureGeometry::Displace => at,
                        // The landing cell may lie past the ray's step limit.
                        CaptureGeometry::AdjacentLand => {
                            let behind = direction.advance(at)?;
                            if !self.classify(behind).is_empty() {
                                return None;
                            }
                            behind
                        }
                    };
                    return Some(Capture {
                        landing,
                        captured: victim.id,
                        captured_at: at,
                    });
                }
            }
        }
        None
    }
}
