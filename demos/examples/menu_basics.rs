// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven cascading menu.
//!
//! This example opens a context menu with a secondary press, hovers into a nested
//! submenu, moves back to a shallower row, and finally clicks a leaf.
//! A subscriber prints every stack change.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example menu_basics`
//! - `RUST_LOG=understory_menu=trace cargo run -p understory_menu_demos --example menu_basics`

use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_menu::entry::{MenuEntry, Submenu};
use understory_menu::state::{MenuLevel, MenuState, StackChange};
use understory_menu::types::{Point, PointerButton};

fn describe(levels: &[MenuLevel]) -> String {
    levels
        .iter()
        .map(|level| {
            let focused = level
                .focused_entry()
                .and_then(MenuEntry::label)
                .unwrap_or("-");
            format!("[{} rows, focus {focused}]", level.entries.len())
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let log: Rc<RefCell<Vec<String>>> = Rc::default();
    let clicked = Rc::clone(&log);
    let action = move |name: &'static str| {
        let clicked = Rc::clone(&clicked);
        move || clicked.borrow_mut().push(name.to_owned())
    };

    let ignore = MenuEntry::leaf("Ignore", action("ignore"));
    let quick_fix: MenuEntry = MenuEntry::submenu(
        "Quick Fix",
        [
            MenuEntry::leaf("Import symbol", action("import")),
            ignore.clone(),
        ],
    );
    let refactor: MenuEntry = MenuEntry::submenu(
        "Refactor",
        [
            MenuEntry::leaf("Rename", action("rename")),
            MenuEntry::divider(),
            quick_fix.clone(),
        ],
    );
    let copy = MenuEntry::leaf("Copy", action("copy"));
    let root = vec![
        copy.clone(),
        Submenu::new("Paste Special", [MenuEntry::leaf("Plain", || {})])
            .disabled()
            .into(),
        MenuEntry::divider(),
        refactor.clone(),
    ];

    let mut menu = MenuState::new();
    menu.subscribe(|levels, change: StackChange| {
        println!("{change:?}: {}", describe(levels));
    });

    // A primary press does nothing; a secondary press opens the root.
    assert!(!menu.open_on_press(PointerButton::Primary, Point::new(40, 60), root.clone()));
    assert!(menu.open_on_press(PointerButton::Secondary, Point::new(40, 60), root));

    // Hover "Refactor", then "Quick Fix" inside it.
    menu.on_item_hover(&refactor, Point::new(160, 72));
    menu.on_item_hover(&quick_fix, Point::new(140, 48));
    assert_eq!(menu.depth(), 3);
    println!("Quick Fix opens at {:?}", menu.levels()[2].anchor);

    // Moving back to "Copy" closes both submenus.
    menu.on_item_hover(&copy, Point::new(0, 0));
    assert_eq!(menu.depth(), 1);

    // Reopen and click a leaf two levels down.
    menu.on_item_hover(&refactor, Point::new(160, 72));
    menu.on_item_click(&quick_fix, Point::new(140, 48));
    assert!(menu.on_item_click(&ignore, Point::new(0, 24)));
    assert!(!menu.is_open());

    println!("Activated: {:?}", log.borrow());
    assert_eq!(*log.borrow(), vec!["ignore".to_owned()]);
}
