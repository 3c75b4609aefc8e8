// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bedview_input::{NavController, NavInput, NavModifiers};
use bedview_transform::{ViewTransform, WorkspaceBounds};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn view() -> ViewTransform {
    let mut view = ViewTransform::new(
        WorkspaceBounds::new(Point::new(-20.0, -10.0), Point::new(600.0, 450.0)).unwrap(),
    );
    view.set_viewport_size(1280.0, 720.0);
    view
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("bedview_transform");

    let v = view();
    group.bench_function("logical_to_pixel", |b| {
        b.iter(|| v.logical_to_pixel(black_box(123.4), black_box(56.7)));
    });
    group.bench_function("pixel_to_logical", |b| {
        b.iter(|| v.pixel_to_logical(black_box(640.0), black_box(360.0)));
    });
    group.bench_function("visible_logical_rect", |b| {
        b.iter(|| black_box(&v).visible_logical_rect());
    });

    group.bench_function("zoom_at_in_out", |b| {
        let mut v = view();
        b.iter(|| {
            v.zoom_at(black_box(300.0), black_box(200.0), 0.05);
            v.zoom_at(black_box(300.0), black_box(200.0), -0.05);
        });
    });

    group.bench_function("drag_pan_100_moves", |b| {
        let mut v = view();
        let mut nav = NavController::default();
        b.iter(|| {
            let none = NavModifiers::empty();
            let mut pos = Point::new(100.0, 100.0);
            nav.process(NavInput::Press { position: pos, modifiers: none }, &mut v);
            for _ in 0..100 {
                pos.x += 1.5;
                pos.y -= 0.5;
                nav.process(NavInput::Move { position: pos, modifiers: none }, &mut v);
            }
            nav.process(NavInput::Release { position: pos, modifiers: none }, &mut v);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
