//! Ready-made game configurations.
//!
//! Built once on first use and cloned out, so callers may tweak their copy.

use once_cell::sync::Lazy;

use super::types::{DIAGONALS, KNIGHT_JUMPS, ORTHOGONALS};
use super::{Coord, Direction, GameConfig, Pacing, PieceKind, PlayerId, PlayerSetup, VariantRules};

pub const CHECKERS_SIZE: i32 = 10;
pub const CHESS_SIZE: i32 = 8;

static CHECKERS: Lazy<GameConfig> = Lazy::new(build_checkers);
static CHESS: Lazy<GameConfig> = Lazy::new(build_chess);

/// The 10x10 capture game.
///
/// Player 0 starts on rows 0-3 and moves down the board, player 1 starts on
/// rows 6-9 and moves up; player 1 opens. Men step diagonally forward,
/// capture in all four diagonals and become flying kings on the far row.
#[must_use]
pub fn checkers() -> GameConfig {
    CHECKERS.clone()
}

/// The 8x8 chess-like game.
///
/// Player 0 starts on rows 6-7 and moves up, player 1 on rows 0-1 and moves
/// down; player 0 opens. Losing the king loses the game.
#[must_use]
pub fn chess() -> GameConfig {
    CHESS.clone()
}

fn row(y: i32, width: i32) -> Vec<Coord> {
    (0..width).map(|x| Coord::new(x, y)).collect()
}

/// Dark cells of rows `ys`: odd columns on even rows, even columns on odd rows.
fn dark_cells(ys: std::ops::Range<i32>, width: i32) -> Vec<Coord> {
    ys.flat_map(|y| {
        (0..width)
            .filter(move |x| (x + y) % 2 == 1)
            .map(move |x| Coord::new(x, y))
    })
    .collect()
}

fn checkers_side(id: u32, name: &str, forward: i32, rows: std::ops::Range<i32>, far_row: i32) -> PlayerSetup {
    let man = PieceKind::new(
        "man",
        vec![Direction::step(-1, forward), Direction::step(1, forward)],
    )
    .with_captures(Direction::set(&DIAGONALS, 1))
    .promotes_to("king", row(far_row, CHECKERS_SIZE));
    let king = PieceKind::new("king", Direction::set(&DIAGONALS, u32::MAX));

    PlayerSetup::new(id, name)
        .kind(man)
        .kind(king)
        .place_all(dark_cells(rows, CHECKERS_SIZE), "man")
}

fn build_checkers() -> GameConfig {
    GameConfig {
        width: CHECKERS_SIZE,
        height: CHECKERS_SIZE,
        first_player: PlayerId(1),
        players: vec![
            checkers_side(0, "black", 1, 0..4, CHECKERS_SIZE - 1),
            checkers_side(1, "white", -1, 6..10, 0),
        ],
        rules: VariantRules::CHECKERS,
        pacing: Pacing::default(),
    }
}

const BACK_RANK: [&str; 8] = [
    "rook", "knight", "bishop", "queen", "king", "bishop", "knight", "rook",
];

fn chess_side(id: u32, name: &str, forward: i32, back: i32) -> PlayerSetup {
    let pawn_row = back + forward;
    let far_row = if forward < 0 { 0 } else { CHESS_SIZE - 1 };

    let mut setup = PlayerSetup::new(id, name)
        .kind(
            PieceKind::new("pawn", vec![Direction::step(0, forward)])
                .with_captures(vec![Direction::step(-1, forward), Direction::step(1, forward)])
                .promotes_to("queen", row(far_row, CHESS_SIZE)),
        )
        .kind(PieceKind::new("knight", Direction::set(&KNIGHT_JUMPS, 1)).symbol('n'))
        .kind(PieceKind::new("bishop", Direction::set(&DIAGONALS, u32::MAX)))
        .kind(PieceKind::new("rook", Direction::set(&ORTHOGONALS, u32::MAX)))
        .kind(PieceKind::new(
            "queen",
            [DIAGONALS, ORTHOGONALS]
                .iter()
                .flat_map(|dirs| Direction::set(dirs, u32::MAX))
                .collect(),
        ))
        .kind(
            PieceKind::new(
                "king",
                [DIAGONALS, ORTHOGONALS]
                    .iter()
                    .flat_map(|dirs| Direction::set(dirs, 1))
                    .collect(),
            )
            .main(),
        );

    for (x, kind) in (0..).zip(BACK_RANK) {
        setup = setup.place(x, back, kind);
    }
    setup.place_all(row(pawn_row, CHESS_SIZE), "pawn")
}

fn build_chess() -> GameConfig {
    GameConfig {
        width: CHESS_SIZE,
        height: CHESS_SIZE,
        first_player: PlayerId(0),
        players: vec![
            chess_side(0, "white", -1, CHESS_SIZE - 1),
            chess_side(1, "black", 1, 0),
        ],
        rules: VariantRules::CHESS,
        pacing: Pacing::default(),
    }
}
