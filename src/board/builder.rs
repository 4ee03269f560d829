//! Fluent builder for constructing games.
//!
//! # Example
//! ```
//! use board_rules::board::{Direction, GameBuilder, PieceKind, PlayerSetup, VariantRules};
//!
//! let rook = PieceKind::new("rook", vec![Direction::sliding(0, 1)]).main();
//! let game = GameBuilder::new(8, 8)
//!     .rules(VariantRules::CHESS)
//!     .player(PlayerSetup::new(1, "north").kind(rook.clone()).place(0, 0, "rook"))
//!     .player(PlayerSetup::new(2, "south").kind(rook).place(0, 7, "rook"))
//!     .first_player(1)
//!     .build()
//!     .expect("valid game");
//! assert_eq!(game.active_pieces().count(), 2);
//! ```

use crate::timer::{Immediate, Scheduler};

use super::{Game, GameConfig, InvalidConfiguration, Pacing, PlayerId, PlayerSetup, VariantRules};

/// A fluent builder for constructing a [`Game`].
pub struct GameBuilder {
    config: GameConfig,
    first_player: Option<PlayerId>,
    scheduler: Box<dyn Scheduler>,
}

impl GameBuilder {
    /// Start an empty `width` x `height` board with capture-game rules and no pacing.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        GameBuilder {
            config: GameConfig {
                width,
                height,
                first_player: PlayerId(0),
                players: Vec::new(),
                rules: VariantRules::default(),
                pacing: Pacing::NONE,
            },
            first_player: None,
            scheduler: Box::new(Immediate),
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        let first = config.first_player;
        GameBuilder {
            config,
            first_player: Some(first),
            scheduler: Box::new(Immediate),
        }
    }

    /// Add a player; turn order follows insertion order.
    #[must_use]
    pub fn player(mut self, player: PlayerSetup) -> Self {
        self.config.players.push(player);
        self
    }

    /// Choose who opens. Defaults to the first player added.
    #[must_use]
    pub fn first_player(mut self, id: u32) -> Self {
        self.first_player = Some(PlayerId(id));
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: VariantRules) -> Self {
        self.config.rules = rules;
        self
    }

    #[must_use]
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.config.pacing = pacing;
        self
    }

    #[must_use]
    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    /// The configuration as it stands.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validate and build the game.
    pub fn build(mut self) -> Result<Game, InvalidConfiguration> {
        self.config.first_player = match self.first_player {
            Some(id) => id,
            None => self
                .config
                .players
                .first()
                .map(|p| p.id)
                .ok_or(InvalidConfiguration::NoPlayers)?,
        };
        Game::with_scheduler(&self.config, self.scheduler)
    }
}
