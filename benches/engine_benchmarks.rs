//! Benchmarks for move generation, make/undo and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use raychess::board::{find_best_move, Board};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("valid fen");
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .expect("valid fen");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut board = Board::new();
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.to_string() == "e2e4")
        .expect("e4 is legal");

    c.bench_function("make_undo_e4", |b| {
        b.iter(|| {
            board.make_move(black_box(&mv));
            board.undo_move().expect("one move to undo")
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let mut endgame = Board::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1").expect("valid fen");
    group.bench_function("rook_endgame", |b| {
        b.iter(|| {
            let moves = endgame.legal_moves();
            black_box(find_best_move(&mut endgame, moves))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_make_undo,
    bench_search
);
criterion_main!(benches);
