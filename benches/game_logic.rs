use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arcade_tetris::core::{Board, GameSnapshot, GameState, Piece};
use arcade_tetris::term::{FrameBuffer, GameView, Viewport};
use arcade_tetris::types::{GameAction, Phase, PieceKind, GRID_WIDTH};

fn started() -> GameState {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::Confirm);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            if state.phase() == Phase::GameOver {
                state.apply_action(GameAction::Confirm);
                state.apply_action(GameAction::Confirm);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..GRID_WIDTH as i8 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            let rows = board.find_full_rows();
            black_box(board.clear_rows(&rows));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            state.tick(1_000);
            if state.phase() == Phase::GameOver {
                state.apply_action(GameAction::Confirm);
                state.apply_action(GameAction::Confirm);
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !piece.try_move(black_box(dx), 0, &board) {
                dx = -dx;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(piece.try_rotate(&board));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = started();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into_with_best(black_box(&snap), Some(1200), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
