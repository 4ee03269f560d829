//! Resolved piece kinds.

use std::collections::HashMap;

use super::{Coord, Direction, InvalidConfiguration, KindId, PlayerId, PlayerSetup};

/// A promotion whose target kind has been resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromotionRule {
    pub area: Vec<Coord>,
    pub into: KindId,
}

/// A catalog entry after validation, bound to its owning player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedKind {
    pub name: String,
    pub owner: PlayerId,
    pub moves: Vec<Direction>,
    pub captures: Vec<Direction>,
    pub main: bool,
    pub promotion: Option<PromotionRule>,
    pub symbol: char,
}

impl ResolvedKind {
    /// The kind a piece standing on `at` turns into, if any.
    #[must_use]
    pub fn promotion_at(&self, at: Coord) -> Option<KindId> {
        self.promotion
            .as_ref()
            .filter(|rule| rule.area.contains(&at))
            .map(|rule| rule.into)
    }
}

/// Arena of every player's kinds.
#[derive(Clone, Debug, Default)]
pub struct KindTable {
    kinds: Vec<ResolvedKind>,
    by_name: HashMap<(PlayerId, String), KindId>,
}

impl KindTable {
    pub(crate) fn resolve(players: &[PlayerSetup]) -> Result<Self, InvalidConfiguration> {
        let mut table = KindTable::default();

        // Ids first so promotions may point at any kind of the same catalog.
        for player in players {
            for kind in player.catalog.iter() {
                let captures = kind.capture_directions().to_vec();
                if kind.moves.is_empty() && captures.is_empty() {
                    return Err(InvalidConfiguration::NoDirections {
                        kind: kind.name.clone(),
                    });
                }
                if kind
                    .moves
                    .iter()
                    .chain(captures.iter())
                    .any(|d| d.is_degenerate())
                {
                    return Err(InvalidConfiguration::DegenerateDirection {
                        kind: kind.name.clone(),
                    });
                }
                let id = KindId(table.kinds.len());
                table.by_name.insert((player.id, kind.name.clone()), id);
                table.kinds.push(ResolvedKind {
                    name: kind.name.clone(),
                    owner: player.id,
                    moves: kind.moves.clone(),
                    captures,
                    main: kind.main,
                    promotion: None,
                    symbol: kind
                        .symbol
                        .or_else(|| kind.name.chars().next())
                        .unwrap_or('?'),
                });
            }
        }

        for player in players {
            for kind in player.catalog.iter() {
                let Some(promotion) = &kind.promotion else {
                    continue;
                };
                let into = table.lookup(player.id, &promotion.into).ok_or_else(|| {
                    InvalidConfiguration::UnknownPromotion {
                        kind: kind.name.clone(),
                        into: promotion.into.clone(),
                    }
                })?;
                if let Some(id) = table.lookup(player.id, &kind.name) {
                    table.kinds[id.0].promotion = Some(PromotionRule {
                        area: promotion.area.clone(),
                        into,
                    });
                }
            }
        }

        Ok(table)
    }

    #[must_use]
    pub fn lookup(&self, owner: PlayerId, name: &str) -> Option<KindId> {
        self.by_name.get(&(owner, name.to_string())).copied()
    }

    /// Panics if `id` did not come from this table.
    #[inline]
    #[must_use]
    pub fn get(&self, id: KindId) -> &ResolvedKind {
        &self.kinds[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
