// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping a cascading menu inside the window with Kurbo geometry.
//!
//! A context menu is opened near the right edge of a small window. The root slides
//! left to fit, and the submenu flips to the left side of its parent row.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example menu_placement`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_menu::adapters::kurbo::place_rect;
use understory_menu::entry::MenuEntry;
use understory_menu::placement::PlacementConfig;
use understory_menu::state::MenuState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let window = Rect::new(0.0, 0.0, 640.0, 480.0);
    let config = PlacementConfig::default();

    let export: MenuEntry = MenuEntry::submenu(
        "Export",
        [
            MenuEntry::leaf("PNG", || {}),
            MenuEntry::leaf("SVG", || {}),
            MenuEntry::leaf("PDF", || {}),
        ],
    );
    let mut menu = MenuState::new();
    menu.show(
        kurbo::Point::new(560.0, 300.0).into(),
        vec![MenuEntry::leaf("Duplicate", || {}), export.clone()],
    );
    // Hovering the "Export" row at the right edge of a 160px wide root panel.
    menu.on_item_hover(&export, kurbo::Point::new(160.0, 32.0).into());

    // Sizes the toolkit measured for each open panel.
    let sizes = [Size::new(160.0, 64.0), Size::new(120.0, 96.0)];
    let measured: Vec<understory_menu::types::Size> = sizes.iter().map(|&s| s.into()).collect();
    let placed = config.place_stack(menu.levels(), &measured, window.into());
    for (depth, (origin, size)) in placed.iter().zip(sizes).enumerate() {
        let rect = Rect::from_origin_size(kurbo::Point::from(*origin), size);
        println!("level {depth}: {rect:?}");
    }
    // Root: 560 + 160 overflows 640, so it slides to 640 - 160 - 8.
    assert_eq!(kurbo::Point::from(placed[0]), kurbo::Point::new(472.0, 300.0));
    // Submenu: shifted with its parent to 632, then flipped to 632 - 120 - 8.
    assert_eq!(kurbo::Point::from(placed[1]), kurbo::Point::new(504.0, 332.0));

    // A single panel can also be placed directly in Kurbo terms.
    let tooltip_like = place_rect(
        &config,
        kurbo::Point::new(-20.0, 470.0),
        Size::new(100.0, 40.0),
        window,
        0,
    );
    println!("clamped: {tooltip_like:?}");
    assert_eq!(tooltip_like, Rect::new(8.0, 432.0, 108.0, 472.0));
}
