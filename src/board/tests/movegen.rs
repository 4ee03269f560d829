//! Move generation through a full game.

use crate::board::{
    presets, Cell, Coord, Direction, Game, GameBuilder, PieceKind, PlayerSetup, VariantRules,
    ORTHOGONALS,
};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn started(config: &crate::board::GameConfig) -> Game {
    let mut game = Game::new(config).expect("valid config");
    game.start().expect("fresh game");
    game
}

#[test]
fn test_checkers_opening_actions() {
    let game = started(&presets::checkers());
    let selectable: Vec<_> = game.selectable_pieces().collect();
    assert_eq!(selectable.len(), 5);
    assert!(selectable.iter().all(|p| p.position().y == 6));

    let total: usize = selectable.iter().map(|p| p.moves().len()).sum();
    assert_eq!(total, 9);
    assert!(selectable.iter().all(|p| p.captures().is_empty()));
}

#[test]
fn test_chess_opening_actions() {
    let game = started(&presets::chess());
    let total: usize = game.selectable_pieces().map(|p| p.moves().len()).sum();
    // eight single pawn steps and two knight jumps each
    assert_eq!(total, 12);

    let knight = game.piece_at(c(1, 7)).expect("knight");
    let mut moves = knight.moves().to_vec();
    moves.sort_by_key(|m| (m.x, m.y));
    assert_eq!(moves, vec![c(0, 5), c(2, 5)]);
}

#[test]
fn test_rook_ray_ends_in_capture() {
    let rook = PieceKind::new("rook", Direction::set(&ORTHOGONALS, u32::MAX)).main();
    let pawn = PieceKind::new("pawn", vec![Direction::step(0, -1)]).main();
    let mut game = GameBuilder::new(8, 8)
        .rules(VariantRules::CHESS)
        .player(PlayerSetup::new(1, "rooks").kind(rook).place(0, 0, "rook"))
        .player(PlayerSetup::new(2, "pawns").kind(pawn).place(0, 5, "pawn"))
        .build()
        .expect("valid game");
    game.start().expect("fresh game");

    let rook = game.piece_at(c(0, 0)).expect("rook").id();
    let actions = game.legal_actions_for(rook).expect("known piece");
    let vertical: Vec<_> = actions.moves.iter().filter(|m| m.x == 0).copied().collect();
    assert_eq!(vertical, vec![c(0, 1), c(0, 2), c(0, 3), c(0, 4)]);
    assert_eq!(actions.captures.len(), 1);
    assert_eq!(actions.captures[0].landing, c(0, 5));
    assert_eq!(actions.captures[0].captured_at, c(0, 5));
}

#[test]
fn test_pawn_captures_differ_from_moves() {
    let mut config = presets::chess();
    // Clear the boards and keep both kings far apart.
    for player in &mut config.players {
        player.layout.retain(|(_, kind)| kind == "king");
    }
    config.players[0].layout.push((c(3, 4), "pawn".to_string()));
    config.players[1].layout.push((c(3, 3), "pawn".to_string()));
    config.players[1].layout.push((c(2, 3), "knight".to_string()));
    let game = started(&config);

    let pawn = game.piece_at(c(3, 4)).expect("white pawn");
    assert!(pawn.moves().is_empty());
    let landings: Vec<_> = pawn.captures().iter().map(|cap| cap.landing).collect();
    assert_eq!(landings, vec![c(2, 3)]);
}

#[test]
fn test_board_view_matches_pieces() {
    let game = Game::new(&presets::checkers()).expect("valid preset");
    let board = game.board();
    assert_eq!(board.width(), 10);
    for piece in game.active_pieces() {
        assert_eq!(
            board.piece_at(piece.position()).map(|p| p.id()),
            Some(piece.id())
        );
    }
    assert!(matches!(board.classify(c(-1, 0)), Cell::Blocked));
    assert!(board.classify(c(0, 5)).is_empty());
}
