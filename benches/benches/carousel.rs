// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_carousel::{
    Carousel, CarouselConfig, FixedViewport, Headless, ResponsiveRule, ResponsiveTable,
    StageMeasurement, calculate_initial_state,
};

fn breakpoints() -> ResponsiveTable {
    ResponsiveTable::new()
        .with(0, ResponsiveRule::new(1))
        .with(576, ResponsiveRule::new(2))
        .with(768, ResponsiveRule::new(3))
        .with(1024, ResponsiveRule::new(4))
        .with(1440, ResponsiveRule::new(6))
}

fn bench_initial_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/initial_state");
    let env = FixedViewport(1280.0);
    let stage = StageMeasurement::with_stage_width(1200.0);

    for len in [8usize, 128, 2_048] {
        group.throughput(Throughput::Elements(len as u64));

        let finite = CarouselConfig::new(len).with_responsive(breakpoints());
        group.bench_with_input(BenchmarkId::new("finite", len), &finite, |b, config| {
            b.iter(|| black_box(calculate_initial_state(config, Some(&stage), &env, false)));
        });

        let looping = finite.clone().with_infinite(true).with_padding(24.0, 24.0);
        group.bench_with_input(BenchmarkId::new("infinite", len), &looping, |b, config| {
            b.iter(|| black_box(calculate_initial_state(config, Some(&stage), &env, false)));
        });
    }

    group.finish();
}

fn bench_autowidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/autowidth");

    for len in [128usize, 2_048] {
        let widths: Vec<f64> = (0..len * 3).map(|i| 80.0 + (i % 7) as f64 * 15.0).collect();
        let stage = StageMeasurement::with_stage_width(1000.0).with_item_widths(widths);
        let config = CarouselConfig::new(len)
            .with_auto_width(true)
            .with_infinite(true);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("infinite", len), &config, |b, config| {
            b.iter(|| black_box(calculate_initial_state(config, Some(&stage), &Headless, false)));
        });
    }

    group.finish();
}

fn bench_controller_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/controller");

    // Alternating stage widths forces a recompute on every iteration.
    group.bench_function("resize", |b| {
        let config = CarouselConfig::new(256)
            .with_responsive(breakpoints())
            .with_infinite(true);
        let mut carousel = Carousel::new(config, FixedViewport(1024.0));
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let width = if wide { 1200.0 } else { 900.0 };
            carousel.set_stage_size(Some(Size::new(width, 300.0)));
            black_box(carousel.state().translate3d);
        });
    });

    group.bench_function("cached", |b| {
        let mut carousel = Carousel::new(CarouselConfig::new(256), Headless);
        carousel.set_stage_size(Some(Size::new(1000.0, 300.0)));
        b.iter(|| black_box(carousel.state().translate3d));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_initial_state,
    bench_autowidth,
    bench_controller_resize
);
criterion_main!(benches);
