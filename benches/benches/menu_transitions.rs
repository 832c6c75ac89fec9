// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_menu::entry::{Entries, Leaf, MenuEntry};
use understory_menu::placement::{PlacementConfig, clamp};
use understory_menu::state::MenuState;
use understory_menu::types::{Key, KeyEvent, Point, Size, Viewport};

/// A chain of `depth` levels, `width` rows each. Row 0 of every level opens the next.
/// Returns the root entries and the submenu rows along the chain.
fn gen_chain(depth: usize, width: usize) -> (Entries, Vec<MenuEntry>) {
    let mut path = Vec::with_capacity(depth);
    let mut below: Option<MenuEntry> = None;
    for d in (0..depth).rev() {
        let mut rows: Vec<MenuEntry> = Vec::with_capacity(width);
        if let Some(next) = below.take() {
            rows.push(next);
        }
        while rows.len() < width {
            let i = rows.len();
            rows.push(if i % 5 == 4 {
                MenuEntry::divider()
            } else if i % 7 == 6 {
                Leaf::new(format!("l{d}.{i}"), || {}).disabled().into()
            } else {
                MenuEntry::leaf(format!("l{d}.{i}"), || {})
            });
        }
        if d == 0 {
            path.reverse();
            return (rows.into(), path);
        }
        let sub = MenuEntry::submenu(format!("s{d}"), rows);
        path.push(sub.clone());
        below = Some(sub);
    }
    (Vec::new().into(), path)
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    for &depth in &[4usize, 16, 64] {
        let (root, path) = gen_chain(depth, 12);
        group.throughput(Throughput::Elements(path.len() as u64));
        group.bench_function(format!("open_chain_d{depth}"), |b| {
            b.iter_batched(
                || {
                    let mut state = MenuState::new();
                    state.show(Point::new(10, 10), root.clone());
                    state
                },
                |mut state| {
                    for sub in &path {
                        state.on_item_hover(sub, Point::new(120, 4));
                    }
                    black_box(state.depth());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("rehover_root_d{depth}"), |b| {
            let mut state = MenuState::new();
            state.show(Point::new(10, 10), root.clone());
            for sub in &path {
                state.on_item_hover(sub, Point::new(120, 4));
            }
            // Re-hovering the open row is a no-op and keeps the snapshot.
            b.iter(|| {
                state.on_item_hover(&root[0], Point::new(120, 4));
                black_box(state.depth());
            });
        });
    }
    group.finish();
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard");
    for &width in &[16usize, 256, 4096] {
        let (root, _) = gen_chain(1, width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_function(format!("cycle_down_w{width}"), |b| {
            b.iter_batched(
                || {
                    let mut state = MenuState::new();
                    state.show(Point::ZERO, root.clone());
                    state
                },
                |mut state| {
                    for _ in 0..width {
                        state.handle_key_event(KeyEvent::down(Key::ArrowDown));
                    }
                    black_box(state.focused_entry().is_some());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let vp = Viewport::from_size(1920, 1080);
    group.bench_function("clamp_grid", |b| {
        b.iter(|| {
            let mut acc = 0_i64;
            for y in (-200..1300).step_by(50) {
                for x in (-200..2100).step_by(50) {
                    let p = clamp(black_box(Point::new(x, y)), Size::new(240, 320), vp, 1, 8);
                    acc += i64::from(p.x) + i64::from(p.y);
                }
            }
            black_box(acc)
        });
    });

    let (root, path) = gen_chain(32, 8);
    let mut state = MenuState::new();
    state.show(Point::new(1700, 900), root);
    for sub in &path {
        state.on_item_hover(sub, Point::new(200, 12));
    }
    let sizes = vec![Size::new(200, 160); state.depth()];
    let config = PlacementConfig::default();
    group.throughput(Throughput::Elements(state.depth() as u64));
    group.bench_function("place_stack_d32", |b| {
        b.iter(|| black_box(config.place_stack(state.levels(), &sizes, vp)));
    });
    group.finish();
}

criterion_group!(benches, bench_hover, bench_keyboard, bench_placement);
criterion_main!(benches);
