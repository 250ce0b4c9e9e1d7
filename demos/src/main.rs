// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted key-driven pan/zoom session against a simulated clock
//! and prints every transform a real rendering surface would receive, then
//! lays out the matching legend and a hover callout.

use std::time::Duration;

use kurbo::{Point, Size};

use petaview_keys::{KeyRepeat, Timings};
use petaview_overlay::{CalloutPlacement, SwatchStrip};
use petaview_scale::{BucketScale, LightnessRamp};
use petaview_view::{MapViewport, TransformSink, ViewTransform};

struct ConsoleSurface;

impl TransformSink for ConsoleSurface {
    fn apply_transform(&mut self, t: ViewTransform) {
        let eff = t.effective_translate();
        println!(
            "  surface <- scale({:.4}) translate({:.1}px, {:.1}px)",
            t.scale, eff.x, eff.y
        );
    }
}

fn main() {
    let timings = Timings::default();
    let mut view = MapViewport::new(Size::new(800.0, 500.0), Size::new(960.0, 600.0))
        .expect("demo dimensions are positive");
    let mut keys = KeyRepeat::with_wasd_bindings(timings);
    let mut surface = ConsoleSurface;
    let mut now = Duration::ZERO;

    println!("initial fit (scale_min = {:.4}):", view.scale_min());
    surface.apply_transform(view.transform());

    println!("tap 'e' to zoom in:");
    if let Some(t) = keys.on_key_down(&'e', now, &mut view) {
        surface.apply_transform(t);
    }
    keys.on_key_up(&'e');

    println!("hold 'd' past the {}ms delay:", timings.delay.as_millis());
    now += Duration::from_millis(10);
    if let Some(t) = keys.on_key_down(&'d', now, &mut view) {
        surface.apply_transform(t);
    }
    let mut ticks = 0;
    while ticks < 5 {
        let deadline = keys.next_deadline().expect("a session is running");
        now = deadline;
        if let Some(t) = keys.poll(now, &mut view) {
            surface.apply_transform(t);
            ticks += 1;
        }
    }
    keys.on_key_up(&'d');

    println!("viewport grows to 1000x500:");
    match view.resize(Size::new(1000.0, 500.0)) {
        Ok(t) => surface.apply_transform(t),
        Err(e) => eprintln!("  resize rejected: {e}"),
    }

    println!("invert pan, tap 'w' (now pans down):");
    keys.invert_pan();
    now += Duration::from_millis(500);
    if let Some(t) = keys.on_key_down(&'w', now, &mut view) {
        surface.apply_transform(t);
    }
    keys.on_key_up(&'w');

    println!("tap 'f' to reset:");
    now += Duration::from_millis(100);
    if let Some(t) = keys.on_key_down(&'f', now, &mut view) {
        surface.apply_transform(t);
    }
    keys.on_key_up(&'f');

    println!();
    println!("legend for a 2.6%..75.1% value range:");
    let scale = BucketScale::new(2.6, 75.1, 7);
    let ramp = LightnessRamp::default();
    let strip = SwatchStrip::default();
    for i in 0..scale.bucket_count() {
        let cell = strip.cell_rect(i);
        println!(
            "  cell {} at x={:>5.1}  {}  [{:.1}%, {:.1}%)",
            i,
            cell.x0,
            ramp.color(i),
            scale.tick(i),
            scale.tick(i + 1)
        );
    }

    let placement = CalloutPlacement::default();
    let near_edge = placement.place(Point::new(900.0, 300.0), 120.0, 960.0);
    println!(
        "callout for a cursor at (900, 300) flips to ({:.0}, {:.0})",
        near_edge.x, near_edge.y
    );
}
