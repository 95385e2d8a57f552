use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sokoban::config::GameConfig;
use sokoban::core::{Board, Direction, Session};

const PUZZLES: &[(&str, &str, &str)] = &[
    ("two_boxes", "\
############
#          #
# @$   .   #
#          #
#   $   .  #
#          #
#          #
#          #
#          #
#          #
#          #
############
", "DDDDbgggbDDDD"),
    ("walk_only", "\
############
#@        .#
#          #
#          #
#          #
#          #
#          #
#          #
#          #
#          #
#          #
############
", "dddddddddbbbbbbbbbhhhhhhhhhggggggggg"),
];

fn session_for(puzzle: &str) -> Session {
    let board = Board::parse(puzzle.as_bytes()).unwrap();
    Session::new(board, &GameConfig::default()).unwrap()
}

pub fn bench_replay_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_and_undo");

    for &(puzzle_name, puzzle, log) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("replay", puzzle_name),
            &(puzzle, log),
            |b, &(puzzle, log)| {
                b.iter_with_setup(
                    || session_for(puzzle),
                    |mut session| {
                        session.replay(black_box(log.as_bytes())).unwrap();
                        black_box(session)
                    },
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("replay_then_undo_all", puzzle_name),
            &(puzzle, log),
            |b, &(puzzle, log)| {
                b.iter_with_setup(
                    || session_for(puzzle),
                    |mut session| {
                        session.replay(black_box(log.as_bytes())).unwrap();
                        while session.undo() {}
                        black_box(session)
                    },
                );
            },
        );
    }
    group.finish();
}

pub fn bench_attempt_undo(c: &mut Criterion) {
    let mut session = session_for(PUZZLES[0].1);
    c.bench_function("attempt_then_undo", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(session.attempt(black_box(dir)));
                session.undo();
            }
        })
    });
}

pub fn bench_board_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_codec");
    for &(puzzle_name, puzzle, _) in PUZZLES {
        group.bench_with_input(BenchmarkId::new("parse", puzzle_name), &puzzle, |b, &puzzle| {
            b.iter(|| black_box(Board::parse(black_box(puzzle.as_bytes())).unwrap()))
        });
        let board = Board::parse(puzzle.as_bytes()).unwrap();
        group.bench_with_input(BenchmarkId::new("serialize", puzzle_name), &board, |b, board| {
            b.iter(|| black_box(board.serialize()))
        });
    }
    group.finish();
}

criterion_group!(
    session_benches,
    bench_replay_and_undo, bench_attempt_undo, bench_board_codec
);
criterion_main!(session_benches);
