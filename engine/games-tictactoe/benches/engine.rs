use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::{Board, Coord, Player};
use games_tictactoe::TicTacToe;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_apply_move");
    group.bench_function("center", |b| {
        let base = TicTacToe::new(3);
        b.iter_batched(
            || base.clone(),
            |mut board| {
                board.apply_move(Coord::new(1, 1), Player::X);
                board
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_empty_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_empty_cells");
    for dim in [3usize, 5, 8] {
        let board = TicTacToe::new(dim);
        group.bench_function(format!("{dim}x{dim}"), |b| {
            b.iter(|| black_box(board.empty_cells()))
        });
    }
    group.finish();
}

fn bench_random_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_random_game");
    group.bench_function("3x3", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter(|| {
            let mut board = TicTacToe::new(3);
            let mut player = Player::X;
            while !board.status().is_terminal() {
                let empty = board.empty_cells();
                if let Some(&coord) = empty.choose(&mut rng) {
                    board.apply_move(coord, player);
                }
                player = player.opponent();
            }
            black_box(board.status())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_apply_move, bench_empty_cells, bench_random_game);
criterion_main!(benches);
