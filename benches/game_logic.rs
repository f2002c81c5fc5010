use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_blast::core::{Board, GameSession, Generator, ShapeKind};
use block_blast::types::Cell;

fn scattered_board() -> Board {
    Board::from_rows(&[
        "#..#....", "...#..#.", "##......", "..##...#", "......#.", "#....#..", ".#......",
        "....#..#",
    ])
}

fn bench_can_place(c: &mut Criterion) {
    let board = scattered_board();
    let shape = ShapeKind::TShape.shape();

    c.bench_function("can_place_all_origins", |b| {
        b.iter(|| {
            let mut fits = 0;
            for y in -2..8 {
                for x in -2..8 {
                    if board.can_place(black_box(&shape), x, y) {
                        fits += 1;
                    }
                }
            }
            fits
        })
    });
}

fn bench_clear_full_board(c: &mut Criterion) {
    c.bench_function("clear_full_board", |b| {
        b.iter(|| {
            let mut board = Board::new(8);
            for y in 0..8 {
                for x in 0..8 {
                    board.set(x, y, Cell::Filled);
                }
            }
            black_box(board.clear_lines())
        })
    });
}

fn bench_any_placement_exists(c: &mut Criterion) {
    let mut board = Board::new(8);
    for y in 0..8 {
        for x in 0..8 {
            if (x + y) % 2 == 0 {
                board.set(x, y, Cell::Filled);
            }
        }
    }
    // Worst case: nothing but the last shape fits.
    let shapes = [
        ShapeKind::Square.shape(),
        ShapeKind::Bar4.shape(),
        ShapeKind::Single.shape(),
    ];

    c.bench_function("any_placement_exists", |b| {
        b.iter(|| board.any_placement_exists(black_box(shapes.iter())))
    });
}

fn bench_attempt_place(c: &mut Criterion) {
    let mut session = GameSession::with_seed(8, 12345, Generator::Catalog);

    c.bench_function("attempt_place_greedy", |b| {
        b.iter(|| {
            if session.is_over() {
                session.restart();
            }
            let shape = session.pending_pieces()[0].shape.clone();
            let (x, y) = session.board().find_placement(&shape).unwrap_or((-1, -1));
            black_box(session.attempt_place(0, x, y))
        })
    });
}

criterion_group!(
    benches,
    bench_can_place,
    bench_clear_full_board,
    bench_any_placement_exists,
    bench_attempt_place
);
criterion_main!(benches);
