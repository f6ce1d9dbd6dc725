use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_crossing::core::{GameSession, SimpleRng, Tuning, World};
use tui_crossing::types::{Direction, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::with_tuning(
        12345,
        Tuning {
            safe_zone: u32::MAX,
            ..Tuning::default()
        },
    );

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(TICK_MS));
        })
    });
}

fn bench_hop(c: &mut Criterion) {
    let tuning = Tuning {
        safe_zone: u32::MAX,
        ..Tuning::default()
    };

    c.bench_function("hop_left_right", |b| {
        let mut session = GameSession::with_tuning(12345, tuning);
        let mut dir = Direction::Left;
        b.iter(|| {
            session.request_move(black_box(dir));
            while session.hopping() {
                session.tick(TICK_MS);
            }
            dir = if dir == Direction::Left {
                Direction::Right
            } else {
                Direction::Left
            };
        })
    });
}

fn bench_lane_generation(c: &mut Criterion) {
    c.bench_function("generate_200_lanes", |b| {
        b.iter(|| {
            let mut world = World::new(Tuning::default(), SimpleRng::new(black_box(7)));
            world.ensure_lookahead(200);
            world.len()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hop,
    bench_lane_generation,
    bench_snapshot
);
criterion_main!(benches);
