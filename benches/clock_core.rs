// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-tick clock work and calendar grid building.
//!
//! Measures the performance of:
//! - Month grid generation (runs on startup and every month change)
//! - Hand angle computation (runs every analog tick)
//! - A full face render into a recording surface

use criterion::{criterion_group, criterion_main, Criterion};
use showcase_clock::calendar::build_month_grid;
use showcase_clock::clock::{compute_hand_angles, render, ClockPalette, RecordingSurface, WallClockTime};
use showcase_clock::ui::theming::ColorScheme;
use std::hint::black_box;

fn bench_month_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

    group.bench_function("build_month_grid", |b| {
        b.iter(|| black_box(build_month_grid(black_box(2026), black_box(9), today)));
    });

    group.bench_function("build_year_of_grids", |b| {
        b.iter(|| {
            for month0 in 0..12 {
                black_box(build_month_grid(2024, month0, today));
            }
        });
    });

    group.finish();
}

fn bench_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    let time = WallClockTime::at(2026, 9, 15, 10, 8, 42).unwrap();
    let palette: ClockPalette = ColorScheme::light().clock_palette();

    group.bench_function("compute_hand_angles", |b| {
        b.iter(|| black_box(compute_hand_angles(black_box(&time))));
    });

    group.bench_function("render_face", |b| {
        let angles = compute_hand_angles(&time);
        let mut surface = RecordingSurface::default();
        b.iter(|| {
            render(Some(&mut surface), black_box(100.0), &angles, &palette);
            black_box(surface.commands().len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_month_grid, bench_clock);
criterion_main!(benches);
