// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: a deterministic, `no_std` core for cascading context menus.
//!
//! ## Overview
//!
//! This crate owns the state of a right-click menu and its nested submenus: which levels
//! are open, which row is focused in each, and where each level is anchored.
//! It also provides the placement rule that keeps every level inside the viewport.
//! It does not draw anything.
//! A toolkit renders the open levels, reports layout and input back, and re-renders when the
//! stack changes.
//!
//! ## Pieces
//!
//! - [`entry`]: menu rows. [`MenuEntry`](crate::entry::MenuEntry) is a leaf, a submenu or a divider.
//!   Rows are matched by identity, so two identical-looking submenus stay distinct.
//! - [`state`]: [`MenuState`](crate::state::MenuState), the stack of open
//!   [`MenuLevel`](crate::state::MenuLevel)s and every transition over it.
//! - [`placement`]: [`clamp`](crate::placement::clamp), a pure function that moves a level on-screen,
//!   flipping submenus to the other side of their parent when they overflow.
//! - [`types`]: integer geometry and input events.
//! - [`adapters`]: optional conversions for toolkit geometry crates.
//!
//! ## Workflow
//!
//! 1) Show: on a secondary click call [`MenuState::show`](crate::state::MenuState::show)
//!    (or [`open_on_press`](crate::state::MenuState::open_on_press)) with the root rows.
//! 2) Render: for each open level, measure the panel and place it with
//!    [`PlacementConfig::place_stack`](crate::placement::PlacementConfig::place_stack).
//!    Report each row's offset with [`report_item_offset`](crate::state::MenuState::report_item_offset).
//! 3) Interact: forward hover, click, scroll and key events. Hovering an enabled submenu row
//!    opens it; hovering a shallower row closes deeper levels; activating a leaf runs its
//!    action and clears the stack.
//! 4) Observe: [`subscribe`](crate::state::MenuState::subscribe) to be told when to re-render.
//!
//! ## Example
//!
//! ```
//! use understory_menu::entry::MenuEntry;
//! use understory_menu::placement::PlacementConfig;
//! use understory_menu::state::MenuState;
//! use understory_menu::types::{Key, KeyEvent, Point, Size, Viewport};
//!
//! let recent: MenuEntry = MenuEntry::submenu(
//!     "Open Recent",
//!     [MenuEntry::leaf("notes.txt", || {}), MenuEntry::leaf("todo.md", || {})],
//! );
//! let mut menu = MenuState::new();
//! menu.show(
//!     Point::new(150, 40),
//!     vec![MenuEntry::leaf("New", || {}), MenuEntry::divider(), recent.clone()],
//! );
//!
//! // Layout pass: the toolkit reports where the submenu row ended up.
//! menu.report_item_offset(&recent, Point::new(120, 48));
//!
//! // Keyboard: Down focuses "New", Down skips the divider to "Open Recent", Right opens it.
//! menu.handle_key_event(KeyEvent::down(Key::ArrowDown));
//! menu.handle_key_event(KeyEvent::down(Key::ArrowDown));
//! menu.handle_key_event(KeyEvent::down(Key::ArrowRight));
//! assert_eq!(menu.depth(), 2);
//!
//! // Placement keeps both panels inside a 300×200 window.
//! let sizes = [Size::new(130, 90), Size::new(100, 60)];
//! let placed = PlacementConfig::default().place_stack(menu.levels(), &sizes, Viewport::from_size(300, 200));
//! assert_eq!(placed[0], Point::new(150, 40));
//! assert_eq!(placed[1], Point::new(162, 88));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod entry;
pub mod placement;
pub mod state;
pub mod types;
