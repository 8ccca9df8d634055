// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `easel_dispatch`: handler delivery and desktop input.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_dispatch::{
    Desktop, Dispatcher, Headless, Outcome, Part, PointerInput, SurfaceOptions, Target,
};
use easel_event::{Button, Event, FrameEvent, SurfaceId, Timestamp};
use kurbo::Point;

fn frames(n: i64) -> Vec<Event> {
    let surface = SurfaceId::new(1).unwrap();
    (0..n)
        .map(|t| {
            FrameEvent {
                surface,
                timestamp: Timestamp(t),
            }
            .into()
        })
        .collect()
}

fn bench_deliver(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_dispatch/deliver");
    let events = frames(1024);
    group.throughput(Throughput::Elements(events.len() as u64));

    let seen = Rc::new(Cell::new(0_i64));
    let sink = seen.clone();
    let dispatcher: Dispatcher<()> = Dispatcher::new();
    dispatcher
        .run(
            move |e: &Event| {
                sink.set(sink.get() + e.timestamp().as_micros());
                Ok(Outcome::Continue)
            },
            |_| {},
        )
        .unwrap();

    group.bench_function("frames_1024", |b| {
        b.iter_batched(
            || events.clone(),
            |events| black_box(dispatcher.deliver_all(events)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
    black_box(seen.get());
}

fn desktop_with(n: usize) -> (Desktop<Headless>, Vec<SurfaceId>) {
    let mut desktop = Desktop::new(Headless);
    let ids = (0..n)
        .map(|i| {
            let opts = SurfaceOptions::default().with_position(Point::new(i as f64 * 8.0, 0.0));
            let id = desktop.create_onscreen(320, 240, opts).unwrap();
            desktop.show(id).unwrap();
            id
        })
        .collect();
    (desktop, ids)
}

fn bench_desktop(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_dispatch/desktop");
    for &n in &[4_usize, 64] {
        let (mut desktop, ids) = desktop_with(n);
        group.bench_with_input(BenchmarkId::new("click_cycle", n), &ids, |b, ids| {
            let mut i = 0;
            b.iter(|| {
                let surface = ids[i % ids.len()];
                i += 1;
                let input = PointerInput {
                    target: Some(Target {
                        surface,
                        part: Part::Surface,
                    }),
                    offset: Point::new(12.0, 34.0),
                    page: Point::new(12.0, 64.0),
                    button: Button::Left,
                    timestamp: Timestamp(0),
                };
                black_box(desktop.pointer_down(&input));
                black_box(desktop.pointer_up(&input));
            });
        });

        let (mut desktop, ids) = desktop_with(n);
        group.bench_with_input(BenchmarkId::new("drag_100_moves", n), &ids, |b, ids| {
            b.iter(|| {
                let mut input = PointerInput {
                    target: Some(Target {
                        surface: ids[0],
                        part: Part::Header,
                    }),
                    offset: Point::new(40.0, 12.0),
                    page: Point::new(40.0, 12.0),
                    button: Button::Left,
                    timestamp: Timestamp(0),
                };
                desktop.pointer_down(&input);
                for step in 0..100 {
                    input.page = Point::new(40.0 + f64::from(step), 12.0);
                    black_box(desktop.pointer_move(&input));
                }
                desktop.pointer_up(&input);
            });
        });

        let (desktop, _) = desktop_with(n);
        let desktop = RefCell::new(desktop);
        let dispatcher: Dispatcher<()> = Dispatcher::new();
        dispatcher
            .run(
                |e: &Event| {
                    black_box(e);
                    Ok(Outcome::Continue)
                },
                |_| {},
            )
            .unwrap();
        group.bench_with_input(BenchmarkId::new("frame_tick", n), &desktop, |b, d| {
            b.iter(|| black_box(dispatcher.deliver_frames(d, Timestamp(16_000))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deliver, bench_desktop);
criterion_main!(benches);
