// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation through a menu hierarchy.
//!
//! Up and Down skip dividers and disabled rows, Right opens a submenu at the offset the
//! layout pass reported, Left closes it again, and Enter activates a leaf.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example menu_keyboard`

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_menu::entry::{Leaf, MenuEntry};
use understory_menu::state::MenuState;
use understory_menu::types::{Key, KeyEvent, Point};

fn press(menu: &mut MenuState, key: Key) {
    let handled = menu.handle_key_event(KeyEvent::down(key));
    let focus = menu
        .focused_entry()
        .and_then(MenuEntry::label)
        .unwrap_or("-");
    println!("{key:?}: handled={handled} depth={} focus={focus}", menu.depth());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let zoomed = Rc::new(Cell::new(0_u32));
    let zoom = Rc::clone(&zoomed);

    let view: MenuEntry = MenuEntry::submenu(
        "View",
        [
            Leaf::new("Zoom Out", || {}).disabled().into(),
            MenuEntry::leaf("Zoom In", move || zoom.set(zoom.get() + 1)),
        ],
    );
    let root = vec![
        MenuEntry::leaf("Undo", || {}),
        MenuEntry::divider(),
        Leaf::new("Redo", || {}).disabled().into(),
        view.clone(),
    ];

    let mut menu = MenuState::new();
    menu.show(Point::new(20, 20), root);
    // What the layout pass would report for the "View" row.
    menu.report_item_offset(&view, Point::new(180, 24));

    press(&mut menu, Key::ArrowDown); // Undo
    press(&mut menu, Key::ArrowDown); // View
    press(&mut menu, Key::ArrowRight);
    assert_eq!(menu.depth(), 2);
    assert_eq!(menu.levels()[1].anchor, Point::new(200, 44));

    press(&mut menu, Key::ArrowLeft);
    assert_eq!(menu.depth(), 1);

    press(&mut menu, Key::Enter); // Enter on a submenu opens it, too.
    press(&mut menu, Key::ArrowUp); // Zoom In, skipping the disabled row
    press(&mut menu, Key::Enter);
    assert!(!menu.is_open());
    assert_eq!(zoomed.get(), 1);

    // Escape closes a menu from any depth.
    menu.show(Point::new(20, 20), vec![view.clone()]);
    menu.report_item_offset(&view, Point::new(180, 0));
    press(&mut menu, Key::ArrowDown);
    press(&mut menu, Key::ArrowRight);
    press(&mut menu, Key::Escape);
    assert!(!menu.is_open());
}
