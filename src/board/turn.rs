//! Turn sequencing.
//!
//! A turn begins by computing every action of the player to move. A player
//! with nothing to do is stalemated. Under mandatory capture, a single
//! available capture withdraws every non-capturing action of that player.
//! After a capture, a chaining variant keeps the turn with the capturing
//! piece for as long as it can capture again.

use crate::events::GameEvent;

use super::outcome::Outcome;
use super::state::Game;
use super::{Coord, IllegalAction, PieceId, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// Built or reset; waiting for `start`.
    AwaitingPlayer(PlayerId),
    /// Actions are computed; the player must pick one.
    AwaitingSelection(PlayerId),
    /// `piece` just captured and must (or may) capture again.
    CaptureChain { player: PlayerId, piece: PieceId },
    /// An outcome was decided. The engine no longer advances turns.
    RoundEnd(Outcome),
    /// The caller ended the game.
    Finished,
}

impl TurnState {
    /// True while a selection is expected.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(
            self,
            TurnState::AwaitingSelection(_) | TurnState::CaptureChain { .. }
        )
    }
}

/// What a successful selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Moved { piece: PieceId, to: Coord, promoted: bool },
    Captured { piece: PieceId, to: Coord, captured: PieceId, promoted: bool },
}

impl Game {
    /// Begin turn sequencing with the first player.
    pub fn start(&mut self) -> Result<(), IllegalAction> {
        if !matches!(self.state, TurnState::AwaitingPlayer(_)) {
            return Err(IllegalAction::AlreadyStarted);
        }
        self.next_step();
        self.events.flush();
        Ok(())
    }

    /// End the game. Only [`reset`](Game::reset) brings it back.
    pub fn finish(&mut self) {
        engine_debug!("game finished after {} turns", self.turn_count);
        self.clear_all_actions();
        self.state = TurnState::Finished;
    }

    /// Apply `piece`'s move or capture that ends on `to`.
    ///
    /// When a cell is both a capture landing and a plain move destination,
    /// the capture is applied. Errors leave the game untouched.
    pub fn select_and_apply(&mut self, piece: PieceId, to: Coord) -> Result<Applied, IllegalAction> {
        let player = match self.state {
            TurnState::AwaitingSelection(player) | TurnState::CaptureChain { player, .. } => player,
            _ => return Err(IllegalAction::NotInProgress),
        };
        let p = self
            .pieces
            .get(piece.0)
            .ok_or(IllegalAction::UnknownPiece { piece })?;
        if !p.active || !p.movable || p.owner != player {
            return Err(IllegalAction::NotSelectable { piece });
        }

        let capture = p.captures.iter().find(|c| c.landing == to).copied();
        let is_move = p.moves.contains(&to);

        let applied = match capture {
            Some(capture) => self.apply_capture(piece, capture.captured, to),
            None if is_move => self.apply_move(piece, to),
            None => return Err(IllegalAction::IllegalDestination { piece, to }),
        };

        self.events.flush();
        Ok(applied)
    }

    fn apply_move(&mut self, piece: PieceId, to: Coord) -> Applied {
        engine_debug!("player {} moves {} to {}", self.current_player(), piece, to);
        self.relocate(piece, to);
        let promoted = self.check_promotion(piece);
        self.debug_validate();
        self.next_step();
        Applied::Moved { piece, to, promoted }
    }

    fn apply_capture(&mut self, piece: PieceId, captured: PieceId, to: Coord) -> Applied {
        engine_debug!(
            "player {} captures {} with {}, landing on {}",
            self.current_player(),
            captured,
            piece,
            to
        );
        self.deactivate(captured);
        self.relocate(piece, to);
        let promoted = self.check_promotion(piece);
        self.debug_validate();
        let applied = Applied::Captured {
            piece,
            to,
            captured,
            promoted,
        };

        if self.settle_outcome() {
            return applied;
        }
        if self.rules.chain_captures && self.continue_chain(piece) {
            return applied;
        }
        self.next_step();
        applied
    }

    /// Keep the turn with `piece` if it can capture again.
    fn continue_chain(&mut self, piece: PieceId) -> bool {
        let (_, captures) = self.generate(piece);
        if captures.is_empty() {
            return false;
        }
        self.clear_all_actions();
        let mandatory = self.rules.mandatory_capture;
        let p = &mut self.pieces[piece.0];
        // Without mandatory capture, staying put ends the chain.
        if !mandatory {
            p.moves.push(p.position);
        }
        p.captures = captures;
        p.movable = true;
        engine_debug!("piece {} continues a capture chain", piece);
        self.state = TurnState::CaptureChain {
            player: p.owner,
            piece,
        };
        true
    }

    /// Hand the turn to the next player unless the outcome is decided.
    fn next_step(&mut self) {
        self.clear_all_actions();
        if self.settle_outcome() {
            return;
        }
        let count = self.seats.len();
        self.current = (self.first_index + self.turn_count as usize) % count;
        self.turn_count += 1;
        let player = self.current_player();
        engine_debug!("turn {} begins for player {}", self.turn_count, player);
        self.events.push(GameEvent::TurnStarted {
            player,
            turn: self.turn_count,
        });
        self.begin_turn(player);
    }

    fn begin_turn(&mut self, player: PlayerId) {
        let ids: Vec<PieceId> = self
            .pieces
            .iter()
            .filter(|p| p.active && p.owner == player)
            .map(|p| p.id)
            .collect();

        let mut any_action = false;
        let mut any_capture = false;
        for &id in &ids {
            let (moves, captures) = self.generate(id);
            any_action |= !moves.is_empty() || !captures.is_empty();
            any_capture |= !captures.is_empty();
            let piece = &mut self.pieces[id.0];
            piece.movable = !moves.is_empty() || !captures.is_empty();
            piece.moves = moves;
            piece.captures = captures;
        }

        if !any_action {
            engine_debug!("player {} is stalemated", player);
            self.state = TurnState::RoundEnd(Outcome::Stalemate { player });
            self.events.push(GameEvent::Stalemate { player });
            return;
        }

        if self.rules.mandatory_capture && any_capture {
            for &id in &ids {
                let piece = &mut self.pieces[id.0];
                piece.moves.clear();
                piece.movable = !piece.captures.is_empty();
            }
        }

        self.state = TurnState::AwaitingSelection(player);
    }
}
