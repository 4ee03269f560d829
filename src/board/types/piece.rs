//! Piece instances and the identifiers that tie them to players and kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Identifies a player. Owners are compared by id, never by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable index of a piece in the game's registry.
///
/// Captured pieces keep their id; they are deactivated, never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a resolved piece kind in a [`KindTable`](crate::board::KindTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub usize);

/// A legal capture: where the capturing piece lands and what it removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capture {
    pub landing: Coord,
    pub captured: PieceId,
    pub captured_at: Coord,
}

/// A piece on the board.
///
/// The cached move and capture lists are only meaningful while the owner's
/// turn is active; they are cleared whenever the turn changes hands.
#[derive(Clone, Debug)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) owner: PlayerId,
    pub(crate) kind: KindId,
    pub(crate) position: Coord,
    pub(crate) active: bool,
    pub(crate) movable: bool,
    pub(crate) moves: Vec<Coord>,
    pub(crate) captures: Vec<Capture>,
}

impl Piece {
    pub(crate) fn new(id: PieceId, owner: PlayerId, kind: KindId, position: Coord) -> Self {
        Piece {
            id,
            owner,
            kind,
            position,
            active: true,
            movable: false,
            moves: Vec::new(),
            captures: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> KindId {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// False once the piece has been captured.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// True only while the piece has at least one selectable action this turn.
    #[inline]
    #[must_use]
    pub const fn is_movable(&self) -> bool {
        self.movable
    }

    #[must_use]
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    #[must_use]
    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    pub(crate) fn clear_actions(&mut self) {
        self.movable = false;
        self.moves.clear();
        self.captures.clear();
    }
}
