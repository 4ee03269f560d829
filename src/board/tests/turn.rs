//! Turn sequencing, forced capture and capture chains.

use super::{checkers_side, record};
use crate::board::{
    Applied, CaptureGeometry, Coord, Game, GameBuilder, IllegalAction, PlayerId, TurnState,
    VariantRules,
};
use crate::events::GameEvent;

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// Black (player 0, moving down the rows) against white (player 1).
fn duel(rules: VariantRules, black: &[(i32, i32)], white: &[(i32, i32)]) -> Game {
    let mut b = checkers_side(0, 1);
    for &(x, y) in black {
        b = b.place(x, y, "man");
    }
    let mut w = checkers_side(1, -1);
    for &(x, y) in white {
        w = w.place(x, y, "man");
    }
    GameBuilder::new(10, 10)
        .rules(rules)
        .player(b)
        .player(w)
        .first_player(0)
        .build()
        .expect("valid game")
}

fn id_at(game: &Game, x: i32, y: i32) -> crate::board::PieceId {
    game.piece_at(c(x, y)).expect("piece present").id()
}

#[test]
fn test_start_only_once() {
    let mut game = duel(VariantRules::CHECKERS, &[(0, 0)], &[(9, 9)]);
    assert_eq!(
        game.select_and_apply(id_at(&game, 0, 0), c(1, 1)),
        Err(IllegalAction::NotInProgress)
    );
    game.start().expect("fresh game");
    assert_eq!(game.start(), Err(IllegalAction::AlreadyStarted));
    assert_eq!(game.state(), &TurnState::AwaitingSelection(PlayerId(0)));
    assert_eq!(game.turn_count(), 1);
}

#[test]
fn test_turns_alternate() {
    let mut game = duel(VariantRules::CHECKERS, &[(0, 0)], &[(9, 9)]);
    let events = record(&game);
    game.start().expect("fresh game");

    game.select_and_apply(id_at(&game, 0, 0), c(1, 1))
        .expect("legal step");
    assert_eq!(game.current_player(), PlayerId(1));
    game.select_and_apply(id_at(&game, 9, 9), c(8, 8))
        .expect("legal step");
    assert_eq!(game.current_player(), PlayerId(0));

    assert_eq!(
        *events.lock(),
        vec![
            GameEvent::TurnStarted { player: PlayerId(0), turn: 1 },
            GameEvent::TurnStarted { player: PlayerId(1), turn: 2 },
            GameEvent::TurnStarted { player: PlayerId(0), turn: 3 },
        ]
    );
}

#[test]
fn test_opponent_piece_not_selectable() {
    let mut game = duel(VariantRules::CHECKERS, &[(0, 0)], &[(9, 9)]);
    game.start().expect("fresh game");
    let white = id_at(&game, 9, 9);
    assert!(game.legal_actions_for(white).expect("known").is_empty());
    assert_eq!(
        game.select_and_apply(white, c(8, 8)),
        Err(IllegalAction::NotSelectable { piece: white })
    );
}

#[test]
fn test_illegal_destination_leaves_game_untouched() {
    let mut game = duel(VariantRules::CHECKERS, &[(0, 0)], &[(9, 9)]);
    game.start().expect("fresh game");
    let black = id_at(&game, 0, 0);
    assert_eq!(
        game.select_and_apply(black, c(0, 1)),
        Err(IllegalAction::IllegalDestination { piece: black, to: c(0, 1) })
    );
    assert_eq!(game.piece(black).map(|p| p.position()), Some(c(0, 0)));
    assert_eq!(game.state(), &TurnState::AwaitingSelection(PlayerId(0)));
}

#[test]
fn test_mandatory_capture_withdraws_moves() {
    let mut game = duel(VariantRules::CHECKERS, &[(2, 2), (6, 0)], &[(3, 3), (9, 9)]);
    game.start().expect("fresh game");

    let jumper = id_at(&game, 2, 2);
    let idle = id_at(&game, 6, 0);
    let selectable: Vec<_> = game.selectable_pieces().map(|p| p.id()).collect();
    assert_eq!(selectable, vec![jumper]);

    let actions = game.legal_actions_for(jumper).expect("known");
    assert!(actions.moves.is_empty());
    assert_eq!(actions.captures.len(), 1);
    assert_eq!(actions.captures[0].landing, c(4, 4));
    assert!(game.legal_actions_for(idle).expect("known").is_empty());
    assert_eq!(
        game.select_and_apply(idle, c(7, 1)),
        Err(IllegalAction::NotSelectable { piece: idle })
    );
}

#[test]
fn test_capture_chain_keeps_turn() {
    let mut game = duel(VariantRules::CHECKERS, &[(2, 2)], &[(3, 3), (5, 5), (9, 9)]);
    let events = record(&game);
    game.start().expect("fresh game");

    let jumper = id_at(&game, 2, 2);
    let first = id_at(&game, 3, 3);
    let second = id_at(&game, 5, 5);

    let applied = game.select_and_apply(jumper, c(4, 4)).expect("capture");
    assert_eq!(
        applied,
        Applied::Captured { piece: jumper, to: c(4, 4), captured: first, promoted: false }
    );
    assert_eq!(
        game.state(),
        &TurnState::CaptureChain { player: PlayerId(0), piece: jumper }
    );
    assert_eq!(game.turn_count(), 1);
    let selectable: Vec<_> = game.selectable_pieces().map(|p| p.id()).collect();
    assert_eq!(selectable, vec![jumper]);

    game.select_and_apply(jumper, c(6, 6)).expect("second capture");
    assert!(!game.piece(second).expect("known").is_active());
    assert_eq!(game.state(), &TurnState::AwaitingSelection(PlayerId(1)));
    assert_eq!(
        *events.lock(),
        vec![
            GameEvent::TurnStarted { player: PlayerId(0), turn: 1 },
            GameEvent::TurnStarted { player: PlayerId(1), turn: 2 },
        ]
    );
}

#[test]
fn test_no_chain_without_chain_rule() {
    let rules = VariantRules {
        chain_captures: false,
        ..VariantRules::CHECKERS
    };
    let mut game = duel(rules, &[(2, 2)], &[(3, 3), (5, 5), (9, 9)]);
    game.start().expect("fresh game");
    game.select_and_apply(id_at(&game, 2, 2), c(4, 4))
        .expect("capture");
    assert_eq!(game.state(), &TurnState::AwaitingSelection(PlayerId(1)));
}

#[test]
fn test_optional_chain_can_stop() {
    let rules = VariantRules {
        mandatory_capture: false,
        geometry: CaptureGeometry::AdjacentLand,
        ..VariantRules::CHECKERS
    };
    let mut game = duel(rules, &[(2, 2)], &[(3, 3), (5, 5), (9, 9)]);
    game.start().expect("fresh game");
    let jumper = id_at(&game, 2, 2);

    game.select_and_apply(jumper, c(4, 4)).expect("capture");
    let actions = game.legal_actions_for(jumper).expect("known");
    assert_eq!(actions.moves, vec![c(4, 4)]);
    assert_eq!(actions.captures.len(), 1);

    let applied = game.select_and_apply(jumper, c(4, 4)).expect("stop chain");
    assert!(matches!(applied, Applied::Moved { to, .. } if to == c(4, 4)));
    assert_eq!(game.state(), &TurnState::AwaitingSelection(PlayerId(1)));
    assert!(game.piece_at(c(5, 5)).is_some());
}

#[test]
fn test_optional_capture_keeps_moves() {
    let rules = VariantRules {
        mandatory_capture: false,
        ..VariantRules::CHECKERS
    };
    let mut game = duel(rules, &[(2, 2), (6, 0)], &[(3, 3), (9, 9)]);
    game.start().expect("fresh game");
    assert_eq!(game.selectable_pieces().count(), 2);
    let jumper = game.legal_actions_for(id_at(&game, 2, 2)).expect("known");
    assert_eq!(jumper.moves, vec![c(1, 3)]);
    assert_eq!(jumper.captures.len(), 1);
}

#[test]
fn test_reset_restores_layout() {
    let mut game = duel(VariantRules::CHECKERS, &[(2, 2)], &[(3, 3), (9, 9)]);
    game.start().expect("fresh game");
    game.select_and_apply(id_at(&game, 2, 2), c(4, 4))
        .expect("capture");
    assert_eq!(game.active_pieces().count(), 2);

    game.reset();
    assert_eq!(game.active_pieces().count(), 3);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.state(), &TurnState::AwaitingPlayer(PlayerId(0)));
    assert_eq!(game.selectable_pieces().count(), 0);
    assert!(game.piece_at(c(2, 2)).is_some());
    game.start().expect("reset game starts again");
}
