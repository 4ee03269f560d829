//! Error types for game construction and play.

use std::fmt;

use super::{Coord, PieceId, PlayerId};

/// Error raised when a game configuration cannot be turned into a game.
///
/// Fatal to the construction call only; no game is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// Board has a zero or negative dimension
    EmptyBoard { width: i32, height: i32 },
    /// No players were supplied
    NoPlayers,
    /// Two players share an id
    DuplicatePlayer { player: PlayerId },
    /// The first player is not among the players
    UnknownFirstPlayer { player: PlayerId },
    /// A kind has neither move nor capture directions
    NoDirections { kind: String },
    /// A kind declares a zero vector or a zero step limit
    DegenerateDirection { kind: String },
    /// A start layout names a kind missing from the player's catalog
    UnknownKind { player: PlayerId, kind: String },
    /// A promotion names a kind missing from the player's catalog
    UnknownPromotion { kind: String, into: String },
    /// A start coordinate lies off the board
    StartOutOfBounds { at: Coord },
    /// Two start layouts place pieces on the same cell
    OverlappingStart { at: Coord },
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidConfiguration::EmptyBoard { width, height } => {
                write!(f, "Board must have positive dimensions, got {width}x{height}")
            }
            InvalidConfiguration::NoPlayers => write!(f, "A game needs at least one player"),
            InvalidConfiguration::DuplicatePlayer { player } => {
                write!(f, "Player id {player} is used more than once")
            }
            InvalidConfiguration::UnknownFirstPlayer { player } => {
                write!(f, "First player {player} is not one of the players")
            }
            InvalidConfiguration::NoDirections { kind } => {
                write!(f, "Piece kind '{kind}' has no move or capture directions")
            }
            InvalidConfiguration::DegenerateDirection { kind } => {
                write!(f, "Piece kind '{kind}' has a direction that never leaves its cell")
            }
            InvalidConfiguration::UnknownKind { player, kind } => {
                write!(f, "Player {player} places unknown piece kind '{kind}'")
            }
            InvalidConfiguration::UnknownPromotion { kind, into } => {
                write!(f, "Piece kind '{kind}' promotes into unknown kind '{into}'")
            }
            InvalidConfiguration::StartOutOfBounds { at } => {
                write!(f, "Start position {at} is off the board")
            }
            InvalidConfiguration::OverlappingStart { at } => {
                write!(f, "More than one piece starts on {at}")
            }
        }
    }
}

impl std::error::Error for InvalidConfiguration {}

/// Error raised when a selection is not legal in the current turn.
///
/// Recoverable: the game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    /// No piece with this id exists
    UnknownPiece { piece: PieceId },
    /// The piece has no selectable action this turn
    NotSelectable { piece: PieceId },
    /// The destination is not among the piece's legal moves or captures
    IllegalDestination { piece: PieceId, to: Coord },
    /// The game is not waiting for a selection
    NotInProgress,
    /// `start` was called on a game that is already running
    AlreadyStarted,
}

impl fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalAction::UnknownPiece { piece } => write!(f, "No piece {piece}"),
            IllegalAction::NotSelectable { piece } => {
                write!(f, "Piece {piece} has no legal action this turn")
            }
            IllegalAction::IllegalDestination { piece, to } => {
                write!(f, "Piece {piece} cannot reach {to}")
            }
            IllegalAction::NotInProgress => write!(f, "The game is not awaiting a selection"),
            IllegalAction::AlreadyStarted => write!(f, "The game has already started"),
        }
    }
}

impl std::error::Error for IllegalAction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_message() {
        let err = InvalidConfiguration::EmptyBoard {
            width: 0,
            height: 8,
        };
        assert!(err.to_string().contains("0x8"));
    }

    #[test]
    fn test_unknown_kind_message() {
        let err = InvalidConfiguration::UnknownKind {
            player: PlayerId(3),
            kind: "wizard".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("'wizard'"));
    }

    #[test]
    fn test_overlap_message() {
        let err = InvalidConfiguration::OverlappingStart {
            at: Coord::new(2, 5),
        };
        assert!(err.to_string().contains("2,5"));
    }

    #[test]
    fn test_illegal_destination_message() {
        let err = IllegalAction::IllegalDestination {
            piece: PieceId(7),
            to: Coord::new(4, 4),
        };
        let msg = err.to_string();
        assert!(msg.contains("#7"));
        assert!(msg.contains("4,4"));
    }

    #[test]
    fn test_error_clone() {
        let err = IllegalAction::NotSelectable { piece: PieceId(1) };
        assert_eq!(err.clone(), err);
    }
}
