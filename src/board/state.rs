use crate::events::{EventQueue, Observers};
use crate::timer::{Immediate, Scheduler};

use super::config::Seat;
use super::kinds::{KindTable, ResolvedKind};
use super::query::{BoardView, Cell};
use super::turn::TurnState;
use super::{
    Capture, Coord, GameConfig, IllegalAction, InvalidConfiguration, KindId, Piece, PieceId,
    PlayerId, VariantRules,
};

/// Legal actions of one piece for the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalActions {
    pub moves: Vec<Coord>,
    pub captures: Vec<Capture>,
}

impl LegalActions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }
}

/// The game aggregate.
///
/// Owns the piece registry and the turn order; every mutation goes through
/// [`select_and_apply`](Game::select_and_apply), [`start`](Game::start),
/// [`reset`](Game::reset) or [`finish`](Game::finish).
#[derive(Debug)]
pub struct Game {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) rules: VariantRules,
    pub(crate) kinds: KindTable,
    pub(crate) seats: Vec<Seat>,
    pub(crate) first_index: usize,
    pub(crate) current: usize,
    pub(crate) turn_count: u32,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) contenders: Vec<PlayerId>,
    pub(crate) state: TurnState,
    pub(crate) events: EventQueue,
}

impl Game {
    /// Build a game whose notifications are delivered synchronously.
    pub fn new(config: &GameConfig) -> Result<Self, InvalidConfiguration> {
        Self::with_scheduler(config, Box::new(Immediate))
    }

    /// Build a game whose notifications go through `scheduler`.
    pub fn with_scheduler(
        config: &GameConfig,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self, InvalidConfiguration> {
        let resolved = config.resolve()?;
        let mut game = Game {
            width: config.width,
            height: config.height,
            rules: config.rules,
            kinds: resolved.kinds,
            seats: resolved.seats,
            first_index: resolved.first_index,
            current: resolved.first_index,
            turn_count: 0,
            pieces: Vec::new(),
            contenders: Vec::new(),
            state: TurnState::AwaitingPlayer(config.first_player),
            events: EventQueue::new(scheduler, config.pacing),
        };
        game.reset();
        engine_debug!(
            "new game {}x{} with {} players and {} kinds",
            game.width,
            game.height,
            game.seats.len(),
            game.kinds.len()
        );
        Ok(game)
    }

    /// Rebuild every piece from the start layouts and clear all counters.
    ///
    /// Piece ids are reassigned in layout order, so they are stable across resets.
    pub fn reset(&mut self) {
        self.pieces.clear();
        for seat in &self.seats {
            for &(at, kind) in &seat.layout {
                let id = PieceId(self.pieces.len());
                self.pieces.push(Piece::new(id, seat.id, kind, at));
            }
        }
        self.current = self.first_index;
        self.turn_count = 0;
        self.contenders = self.seats.iter().map(|s| s.id).collect();
        self.state = TurnState::AwaitingPlayer(self.seats[self.first_index].id);
        self.events.discard();
        self.debug_validate();
    }

    /// Observers of this game. Subscriptions live as long as the game.
    #[must_use]
    pub fn observers(&self) -> &Observers {
        self.events.observers()
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

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> VariantRules {
        self.rules
    }

    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Number of turn handoffs since the last reset.
    #[inline]
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The player whose turn it is (or who is about to move).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.seats[self.current].id
    }

    /// Player ids in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats.iter().map(|s| s.id)
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.seats
            .iter()
            .find(|s| s.id == player)
            .map(|s| s.name.as_str())
    }

    /// Players still holding a piece that satisfies the alive test.
    #[must_use]
    pub fn contending_players(&self) -> &[PlayerId] {
        &self.contenders
    }

    /// Every piece that has not been captured.
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| p.active)
    }

    /// Pieces with at least one selectable action this turn.
    pub fn selectable_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| p.active && p.movable)
    }

    /// Any piece ever created, captured or not.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.board().piece_at(at)
    }

    #[must_use]
    pub fn kind(&self, id: KindId) -> &ResolvedKind {
        self.kinds.get(id)
    }

    #[must_use]
    pub fn kinds(&self) -> &KindTable {
        &self.kinds
    }

    /// The actions `piece` may take right now.
    ///
    /// Empty for pieces that are not selectable this turn.
    pub fn legal_actions_for(&self, piece: PieceId) -> Result<LegalActions, IllegalAction> {
        let p = self
            .pieces
            .get(piece.0)
            .ok_or(IllegalAction::UnknownPiece { piece })?;
        if !p.active || !p.movable {
            return Ok(LegalActions::default());
        }
        Ok(LegalActions {
            moves: p.moves.clone(),
            captures: p.captures.clone(),
        })
    }

    #[must_use]
    pub fn board(&self) -> BoardView<'_> {
        BoardView::new(self.width, self.height, &self.pieces)
    }

    /// Fresh move and capture lists for a piece, ignoring turn restrictions.
    pub(crate) fn generate(&self, id: PieceId) -> (Vec<Coord>, Vec<Capture>) {
        let piece = &self.pieces[id.0];
        let kind = self.kinds.get(piece.kind);
        let board = self.board();
        let moves = board.legal_moves(piece.position, &kind.moves);
        let captures = board.legal_captures(
            piece.position,
            piece.owner,
            &kind.captures,
            self.rules.geometry,
        );
        (moves, captures)
    }

    pub(crate) fn relocate(&mut self, id: PieceId, to: Coord) {
        let from = self.pieces[id.0].position;
        if from != to {
            assert!(
                matches!(self.board().classify(to), Cell::Empty),
                "piece {id} cannot land on occupied or blocked cell {to}"
            );
        }
        self.pieces[id.0].position = to;
        engine_trace!("piece {} moved {} -> {}", id, from, to);
    }

    pub(crate) fn deactivate(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.0];
        piece.active = false;
        piece.clear_actions();
        engine_trace!("piece {} captured at {}", id, piece.position);
    }

    /// Swap in the promoted kind if the piece stands in its kind's trigger area.
    ///
    /// Returns true if the kind changed. A kind without a promotion rule is
    /// left alone, so repeated calls after promotion are no-ops.
    pub(crate) fn check_promotion(&mut self, id: PieceId) -> bool {
        let piece = &self.pieces[id.0];
        let Some(into) = self.kinds.get(piece.kind).promotion_at(piece.position) else {
            return false;
        };
        engine_debug!(
            "piece {} promoted from {} to {} at {}",
            id,
            self.kinds.get(piece.kind).name,
            self.kinds.get(into).name,
            piece.position
        );
        self.pieces[id.0].kind = into;
        true
    }

    pub(crate) fn clear_all_actions(&mut self) {
        for piece in &mut self.pieces {
            piece.clear_actions();
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub(crate) fn debug_validate(&self) {}
}
