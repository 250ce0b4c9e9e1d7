// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for viewport control steps and key-repeat sessions.

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use kurbo::Size;

use petaview_keys::{KeyRepeat, Timings};
use petaview_view::{Axis, Direction, MapViewport, Speed};

fn bench_zoom_pan_cycle(c: &mut Criterion) {
    c.bench_function("viewport_zoom_pan_cycle", |b| {
        let mut vp =
            MapViewport::new(Size::new(960.0, 600.0), Size::new(960.0, 600.0)).unwrap();
        b.iter(|| {
            vp.zoom(Direction::Positive, Speed::Normal);
            vp.pan(Axis::Horizontal, Direction::Positive, Speed::Normal);
            vp.pan(Axis::Vertical, Direction::Negative, Speed::Normal);
            vp.zoom(Direction::Negative, Speed::Normal);
            black_box(vp.transform())
        });
    });
}

fn bench_repeat_session(c: &mut Criterion) {
    let period = Timings::default().period;
    let delay = Timings::default().delay;
    c.bench_function("key_repeat_session_25_ticks", |b| {
        b.iter(|| {
            let mut vp =
                MapViewport::new(Size::new(960.0, 600.0), Size::new(960.0, 600.0)).unwrap();
            let mut keys = KeyRepeat::with_wasd_bindings(Timings::default());
            keys.on_key_down(&'e', Duration::ZERO, &mut vp);
            let mut now = delay;
            keys.poll(now, &mut vp);
            for _ in 0..25 {
                now += period;
                keys.poll(now, &mut vp);
            }
            black_box(vp.scale())
        });
    });
}

criterion_group!(benches, bench_zoom_pan_cycle, bench_repeat_session);
criterion_main!(benches);
