//! Declarative piece catalogs and player setups.
//!
//! A piece kind is data: its move rays, its capture rays, whether its loss
//! eliminates the owner, and where it promotes. The generator never looks at
//! kind names; every behaviour comes from these fields.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, Direction, PlayerId};

/// One-shot kind substitution triggered by landing inside `area`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Promotion {
    pub area: Vec<Coord>,
    /// Name of the replacement kind in the same player's catalog.
    pub into: String,
}

/// Catalog entry describing how a kind of piece moves and captures.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceKind {
    pub name: String,
    pub moves: Vec<Direction>,
    /// Capture rays; `None` means "same as `moves`".
    pub captures: Option<Vec<Direction>>,
    /// Losing every main piece removes the owner from contention.
    pub main: bool,
    pub promotion: Option<Promotion>,
    /// Display letter; defaults to the first letter of `name`.
    pub symbol: Option<char>,
}

impl PieceKind {
    #[must_use]
    pub fn new(name: impl Into<String>, moves: Vec<Direction>) -> Self {
        PieceKind {
            name: name.into(),
            moves,
            captures: None,
            main: false,
            promotion: None,
            symbol: None,
        }
    }

    #[must_use]
    pub fn with_captures(mut self, captures: Vec<Direction>) -> Self {
        self.captures = Some(captures);
        self
    }

    #[must_use]
    pub fn main(mut self) -> Self {
        self.main = true;
        self
    }

    #[must_use]
    pub fn promotes_to(mut self, into: impl Into<String>, area: Vec<Coord>) -> Self {
        self.promotion = Some(Promotion {
            area,
            into: into.into(),
        });
        self
    }

    #[must_use]
    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// The effective capture rays.
    #[must_use]
    pub fn capture_directions(&self) -> &[Direction] {
        self.captures.as_deref().unwrap_or(&self.moves)
    }
}

/// Kinds available to one player, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    kinds: BTreeMap<String, PieceKind>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a kind, replacing any kind with the same name.
    pub fn insert(&mut self, kind: PieceKind) {
        self.kinds.insert(kind.name.clone(), kind);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PieceKind> {
        self.kinds.get(name)
    }

    /// Kinds in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceKind> {
        self.kinds.values()
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

impl FromIterator<PieceKind> for Catalog {
    fn from_iter<I: IntoIterator<Item = PieceKind>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for kind in iter {
            catalog.insert(kind);
        }
        catalog
    }
}

/// A player's identity, start layout and catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerSetup {
    pub id: PlayerId,
    pub name: String,
    /// Start cells in placement order, each naming a catalog kind.
    pub layout: Vec<(Coord, String)>,
    pub catalog: Catalog,
}

impl PlayerSetup {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        PlayerSetup {
            id: PlayerId(id),
            name: name.into(),
            layout: Vec::new(),
            catalog: Catalog::new(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: PieceKind) -> Self {
        self.catalog.insert(kind);
        self
    }

    #[must_use]
    pub fn place(mut self, x: i32, y: i32, kind: impl Into<String>) -> Self {
        self.layout.push((Coord::new(x, y), kind.into()));
        self
    }

    /// Place the same kind on every cell in `cells`.
    #[must_use]
    pub fn place_all(mut self, cells: impl IntoIterator<Item = Coord>, kind: &str) -> Self {
        self.layout
            .extend(cells.into_iter().map(|at| (at, kind.to_string())));
        self
    }
}
