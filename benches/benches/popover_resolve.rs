// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_popover::resolve::resolve;
use understory_popover::{GeometrySnapshot, Popover, PopoverConfig, Side};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Anchors scattered over the viewport, including its edges, so that a good
/// share of passes flip and clamp.
fn gen_anchors(count: usize) -> Vec<GeometrySnapshot> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 8.0 + rng.next_f64() * 120.0;
        let h = 8.0 + rng.next_f64() * 40.0;
        let x = rng.next_f64() * (VIEWPORT.width - w);
        let y = rng.next_f64() * (VIEWPORT.height - h);
        out.push(GeometrySnapshot::new(
            Rect::from_origin_size((x, y), (w, h)),
            Size::new(240.0, 120.0),
            Size::new(16.0, 8.0),
            VIEWPORT,
        ));
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &n in &[64_usize, 1024] {
        let anchors = gen_anchors(n);
        group.throughput(Throughput::Elements((n * Side::ALL.len()) as u64));
        group.bench_function(format!("all_sides_{n}"), |b| {
            b.iter(|| {
                for g in &anchors {
                    for side in Side::ALL {
                        black_box(resolve(side, black_box(g), false));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_popover_cycle(c: &mut Criterion) {
    let anchors = gen_anchors(256);
    let mut group = c.benchmark_group("popover");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("activate_resize_deactivate", |b| {
        b.iter_batched(
            || Popover::new(PopoverConfig::default().with_preferred(Side::Bottom)),
            |mut popover| {
                for g in &anchors {
                    black_box(popover.activate(g));
                    black_box(popover.viewport_resized(g));
                    black_box(popover.deactivate());
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_popover_cycle);
criterion_main!(benches);
