// Benchmark for the time-grid layout pass
// Measures a full day layout over increasingly crowded event sets

use calendar_layout::models::config::{Direction, LayoutConfig, Step};
use calendar_layout::models::event::Event;
use calendar_layout::models::range::TimeRange;
use calendar_layout::services::layout::layout_day;
use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn midnight() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 12, 0, 0, 0).unwrap()
}

/// Deterministic pseudo-random event set; no RNG dependency needed.
fn sample_events(count: usize) -> Vec<Event<Utc>> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|index| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let start_minute = ((state >> 33) % (23 * 60)) as i64;
            let duration = (15 + (state >> 20) % 180) as i64;
            let start = midnight() + Duration::minutes(start_minute);
            Event::new(
                format!("event-{index}"),
                start,
                start + Duration::minutes(duration),
            )
            .unwrap()
        })
        .collect()
}

fn bench_layout_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_day");
    let range = TimeRange::day_of(&midnight());
    let config = LayoutConfig::new(0, 24, Step::QuarterHour, Direction::Ltr).unwrap();

    for count in [10usize, 100, 500].iter() {
        let events = sample_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| layout_day(black_box(&events), black_box(&range), black_box(&config)));
        });
    }

    group.finish();
}

fn bench_layout_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_day_step");
    let range = TimeRange::day_of(&midnight());
    let events = sample_events(100);

    for step in [Step::QuarterHour, Step::HalfHour, Step::Hour] {
        let config = LayoutConfig::new(0, 24, step, Direction::Ltr).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(step.minutes()),
            &config,
            |b, config| {
                b.iter(|| layout_day(black_box(&events), black_box(&range), black_box(config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layout_day, bench_layout_steps);
criterion_main!(benches);
