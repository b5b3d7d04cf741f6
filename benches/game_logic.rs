use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use brick_tetris::core::{Field, GameSession, MemoryHighScore};
use brick_tetris::term::{GameView, Viewport};
use brick_tetris::types::Action;

fn started() -> GameSession<MemoryHighScore> {
    let mut game = GameSession::new(12345, MemoryHighScore::new());
    game.apply_action(Action::Start);
    game
}

fn bench_gravity_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        b.iter_batched(
            started,
            |mut game| {
                for _ in 0..20 {
                    game.apply_action(black_box(Action::GravityTick));
                }
                game
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20 {
                field.fill_row(y, 1);
            }
            black_box(field.clear_full_rows());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply_action(black_box(Action::Rotate));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            game.apply_action(black_box(Action::Left));
            game.apply_action(black_box(Action::Right));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop", |b| {
        b.iter_batched(
            started,
            |mut game| {
                game.apply_action(black_box(Action::Down));
                game
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_render(c: &mut Criterion) {
    let game = started();
    let view = GameView::default();
    let mut fb = brick_tetris::term::FrameBuffer::new(0, 0);
    let snap = game.snapshot();

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_rotate,
    bench_move,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
