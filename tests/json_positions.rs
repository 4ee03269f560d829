use serde::Deserialize;

use board_rules::board::{presets, Coord, Game, GameConfig, PlayerId};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    variant: String,
    first_player: u32,
    pieces: Vec<Placement>,
    probe: [i32; 2],
    moves: Vec<[i32; 2]>,
    captures: Vec<[i32; 2]>,
}

#[derive(Deserialize)]
struct Placement {
    player: u32,
    kind: String,
    at: [i32; 2],
}

fn coord([x, y]: [i32; 2]) -> Coord {
    Coord::new(x, y)
}

fn sorted(mut cells: Vec<Coord>) -> Vec<Coord> {
    cells.sort_by_key(|c| (c.x, c.y));
    cells
}

/// The preset for `variant` with every start layout replaced by `pieces`.
fn config_for(position: &Position) -> GameConfig {
    let mut config = match position.variant.as_str() {
        "chess" => presets::chess(),
        "checkers" => presets::checkers(),
        other => panic!("unknown variant {other}"),
    };
    config.first_player = PlayerId(position.first_player);
    for player in &mut config.players {
        player.layout = position
            .pieces
            .iter()
            .filter(|p| PlayerId(p.player) == player.id)
            .map(|p| (coord(p.at), p.kind.clone()))
            .collect();
    }
    config
}

#[test]
fn position_suite() {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");
    assert!(!set.positions.is_empty());

    for position in &set.positions {
        let mut game = Game::new(&config_for(position))
            .unwrap_or_else(|e| panic!("{}: {e}", position.name));
        game.start()
            .unwrap_or_else(|e| panic!("{}: {e}", position.name));

        let piece = game
            .piece_at(coord(position.probe))
            .unwrap_or_else(|| panic!("{}: nothing on the probe cell", position.name))
            .id();
        let actions = game.legal_actions_for(piece).expect("known piece");

        assert_eq!(
            sorted(actions.moves.clone()),
            sorted(position.moves.iter().copied().map(coord).collect()),
            "moves for {}",
            position.name
        );
        assert_eq!(
            sorted(actions.captures.iter().map(|c| c.landing).collect()),
            sorted(position.captures.iter().copied().map(coord).collect()),
            "captures for {}",
            position.name
        );
    }
}
