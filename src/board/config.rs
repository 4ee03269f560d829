//! Game configuration and its validation.

use std::collections::HashSet;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::kinds::KindTable;
use super::{Coord, InvalidConfiguration, KindId, PlayerId, PlayerSetup, VariantRules};

/// Presentation pacing for deferred notifications.
///
/// Only the scheduler sees these; legality never depends on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pacing {
    /// Delay before a turn handoff is announced.
    pub turn_delay: Duration,
    /// Delay before a win or stalemate is announced.
    pub event_delay: Duration,
}

impl Pacing {
    pub const NONE: Pacing = Pacing {
        turn_delay: Duration::ZERO,
        event_delay: Duration::ZERO,
    };
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            turn_delay: Duration::from_millis(100),
            event_delay: Duration::from_millis(400),
        }
    }
}

/// Everything needed to construct a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub first_player: PlayerId,
    pub players: Vec<PlayerSetup>,
    pub rules: VariantRules,
    pub pacing: Pacing,
}

/// A player after validation: start layout resolved to kind ids.
#[derive(Clone, Debug)]
pub(crate) struct Seat {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) layout: Vec<(Coord, KindId)>,
}

/// A configuration that passed validation.
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    pub(crate) kinds: KindTable,
    pub(crate) seats: Vec<Seat>,
    pub(crate) first_index: usize,
}

impl GameConfig {
    /// Check the configuration and resolve names into ids.
    pub(crate) fn resolve(&self) -> Result<Resolved, InvalidConfiguration> {
        if self.width <= 0 || self.height <= 0 {
            return Err(InvalidConfiguration::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.players.is_empty() {
            return Err(InvalidConfiguration::NoPlayers);
        }

        let mut ids = HashSet::new();
        for player in &self.players {
            if !ids.insert(player.id) {
                return Err(InvalidConfiguration::DuplicatePlayer { player: player.id });
            }
        }
        let first_index = self
            .players
            .iter()
            .position(|p| p.id == self.first_player)
            .ok_or(InvalidConfiguration::UnknownFirstPlayer {
                player: self.first_player,
            })?;

        let kinds = KindTable::resolve(&self.players)?;

        let mut occupied = HashSet::new();
        let mut seats = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let mut layout = Vec::with_capacity(player.layout.len());
            for (at, name) in &player.layout {
                let kind = kinds.lookup(player.id, name).ok_or_else(|| {
                    InvalidConfiguration::UnknownKind {
                        player: player.id,
                        kind: name.clone(),
                    }
                })?;
                if !at.within(self.width, self.height) {
                    return Err(InvalidConfiguration::StartOutOfBounds { at: *at });
                }
                if !occupied.insert(*at) {
                    return Err(InvalidConfiguration::OverlappingStart { at: *at });
                }
                layout.push((*at, kind));
            }
            seats.push(Seat {
                id: player.id,
                name: player.name.clone(),
                layout,
            });
        }

        Ok(Resolved {
            kinds,
            seats,
            first_index,
        })
    }
}
