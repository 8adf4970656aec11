use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use blast_engine::game::{BlastGameState, BlastSettings, Grid, Position, SessionRng};

fn large_settings() -> BlastSettings {
    BlastSettings {
        height: 50,
        width: 50,
        colors_count: 5,
        score_goal: u32::MAX,
        moves_count: u32::MAX,
        ..BlastSettings::default()
    }
}

fn bench_tap_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("tap_resolution");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("tap_center_50x50", |b| {
        let settings = large_settings();
        let mut rng = SessionRng::new(42);
        let mut state = BlastGameState::new(&settings, &mut rng);
        b.iter(|| {
            let events = state
                .tap_tile(black_box(Position::new(25, 25)), &mut rng)
                .unwrap();
            black_box(events.len())
        });
    });

    group.finish();
}

fn bench_deadlock_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("deadlock_scan");
    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("move_exists_100x100", |b| {
        let mut rng = SessionRng::new(7);
        let grid = Grid::new_random(100, 100, 8, &mut rng);
        b.iter(|| black_box(grid.move_exists(black_box(3))));
    });

    group.finish();
}

criterion_group!(benches, bench_tap_resolution, bench_deadlock_scan);
criterion_main!(benches);
