//! Benchmarks for rule engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use board_rules::board::{presets, Game, GameConfig};

fn started(config: &GameConfig) -> Game {
    let mut game = Game::new(config).expect("valid preset");
    game.start().expect("fresh game");
    game
}

fn bench_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("actions");

    for (name, config) in [("checkers", presets::checkers()), ("chess", presets::chess())] {
        let game = started(&config);
        let pieces: Vec<_> = game.active_pieces().map(|p| p.id()).collect();
        group.bench_function(name, |b| {
            b.iter(|| {
                for &piece in &pieces {
                    black_box(game.legal_actions_for(piece).ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("start");

    for (name, config) in [("checkers", presets::checkers()), ("chess", presets::chess())] {
        let mut game = Game::new(&config).expect("valid preset");
        group.bench_function(name, |b| {
            b.iter(|| {
                game.reset();
                game.start().expect("fresh game");
                black_box(game.selectable_pieces().count())
            })
        });
    }

    group.finish();
}

/// Play random legal actions until the round ends or `limit` is hit.
fn playout(game: &mut Game, rng: &mut StdRng, limit: usize) -> usize {
    game.reset();
    game.start().expect("fresh game");
    let mut plies = 0;
    while plies < limit && game.state().is_in_progress() {
        let pieces: Vec<_> = game.selectable_pieces().map(|p| p.id()).collect();
        let piece = pieces[rng.gen_range(0..pieces.len())];
        let actions = game.legal_actions_for(piece).expect("selectable");
        let targets: Vec<_> = actions
            .moves
            .iter()
            .copied()
            .chain(actions.captures.iter().map(|c| c.landing))
            .collect();
        let to = targets[rng.gen_range(0..targets.len())];
        game.select_and_apply(piece, to).expect("legal");
        plies += 1;
    }
    plies
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.sample_size(20);

    for limit in [50usize, 200] {
        for (name, config) in [("checkers", presets::checkers()), ("chess", presets::chess())] {
            let mut game = Game::new(&config).expect("valid preset");
            let mut rng = StdRng::seed_from_u64(0x5eed);
            group.bench_with_input(BenchmarkId::new(name, limit), &limit, |b, &limit| {
                b.iter(|| playout(&mut game, &mut rng, black_box(limit)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_actions, bench_start, bench_playout);
criterion_main!(benches);
