//! Per-variant rule switches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a capturing piece lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaptureGeometry {
    /// Jump over the victim onto the empty cell directly behind it.
    AdjacentLand,
    /// Take the victim's cell.
    Displace,
}

/// Which pieces keep a player in contention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AliveTest {
    AnyPiece,
    MainPieceOnly,
}

/// Rule set selecting one of the supported variants (or a mix of them).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariantRules {
    /// When any piece can capture, non-capturing actions are withdrawn.
    pub mandatory_capture: bool,
    pub geometry: CaptureGeometry,
    /// A piece that captured keeps the turn while it can capture again.
    pub chain_captures: bool,
    pub alive: AliveTest,
}

impl VariantRules {
    /// The capture game: forced jumps, multi-jump chains, last piece standing.
    pub const CHECKERS: VariantRules = VariantRules {
        mandatory_capture: true,
        geometry: CaptureGeometry::AdjacentLand,
        chain_captures: true,
        alive: AliveTest::AnyPiece,
    };

    /// The chess-like game: displacing captures, lose the main piece and you are out.
    pub const CHESS: VariantRules = VariantRules {
        mandatory_capture: false,
        geometry: CaptureGeometry::Displace,
        chain_captures: false,
        alive: AliveTest::MainPieceOnly,
    };
}

impl Default for VariantRules {
    fn default() -> Self {
        VariantRules::CHECKERS
    }
}
