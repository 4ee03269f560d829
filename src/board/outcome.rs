//! Contention tracking.

use crate::events::GameEvent;

use super::state::Game;
use super::turn::TurnState;
use super::{AliveTest, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Contention narrowed to `winners`.
    Win { winners: Vec<PlayerId> },
    /// `player` had no legal action on their turn.
    Stalemate { player: PlayerId },
}

impl Game {
    /// Players holding at least one active piece that passes the alive test.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.seats
            .iter()
            .map(|seat| seat.id)
            .filter(|&player| {
                self.active_pieces().any(|piece| {
                    piece.owner == player
                        && match self.rules.alive {
                            AliveTest::AnyPiece => true,
                            AliveTest::MainPieceOnly => self.kinds.get(piece.kind).main,
                        }
                })
            })
            .collect()
    }

    /// Recompute contention; returns true if the round is over.
    ///
    /// Contention only ever shrinks. The first time it falls short of every
    /// player, `GameWin` is raised and the round ends.
    pub(crate) fn settle_outcome(&mut self) -> bool {
        if matches!(self.state, TurnState::RoundEnd(_) | TurnState::Finished) {
            return true;
        }
        let alive = self.alive_players();
        self.contenders.retain(|player| alive.contains(player));
        if self.contenders.len() == self.seats.len() {
            return false;
        }

        let winners = self.contenders.clone();
        engine_debug!("contention narrowed to {:?}", winners);
        self.clear_all_actions();
        self.state = TurnState::RoundEnd(Outcome::Win {
            winners: winners.clone(),
        });
        self.events.push(GameEvent::GameWin { winners });
        true
    }
}
