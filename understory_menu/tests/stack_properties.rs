// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for the menu stack and placement.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use understory_menu::entry::{Entries, Leaf, MenuEntry, Submenu};
use understory_menu::placement::clamp;
use understory_menu::state::MenuState;
use understory_menu::types::{Key, KeyEvent, Point, Size, Viewport};

#[derive(Clone, Debug)]
enum Op {
    Hover(usize, Point),
    Click(usize, Point),
    Key(KeyEvent),
    Report(usize, Point),
    Scroll(usize, i32),
    Show,
    Hide,
}

struct Fixture {
    root: Entries,
    all: Vec<MenuEntry>,
    activations: Rc<Cell<u32>>,
}

fn flatten(entries: &[MenuEntry], out: &mut Vec<MenuEntry>) {
    for e in entries {
        out.push(e.clone());
        if let Some(sub) = e.as_submenu() {
            flatten(sub.children(), out);
        }
    }
}

fn fixture() -> Fixture {
    let activations = Rc::new(Cell::new(0));
    let leaf = |label: &'static str| -> MenuEntry {
        let count = Rc::clone(&activations);
        MenuEntry::leaf(label, move || count.set(count.get() + 1))
    };
    let root: Entries = vec![
        leaf("A"),
        MenuEntry::submenu(
            "B",
            [
                leaf("B1"),
                MenuEntry::submenu("B2", [leaf("B2a"), MenuEntry::divider(), leaf("B2b")]),
                Leaf::new("B3", || {}).disabled().into(),
            ],
        ),
        MenuEntry::divider(),
        Submenu::new("C", [leaf("C1")]).disabled().into(),
        MenuEntry::submenu(
            "D",
            [leaf("D1"), MenuEntry::submenu("E", [leaf("E1"), leaf("E2")])],
        ),
    ]
    .into();
    let mut all = Vec::new();
    flatten(&root, &mut all);
    Fixture {
        root,
        all,
        activations,
    }
}

fn point() -> impl Strategy<Value = Point> {
    (-40..240i32, -40..240i32).prop_map(|(x, y)| Point::new(x, y))
}

fn op_strategy(entries: usize) -> impl Strategy<Value = Op> {
    let key = prop_oneof![
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::ArrowLeft),
        Just(Key::ArrowRight),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Other),
    ];
    prop_oneof![
        4 => (0..entries, point()).prop_map(|(i, p)| Op::Hover(i, p)),
        1 => (0..entries, point()).prop_map(|(i, p)| Op::Click(i, p)),
        4 => (key, any::<bool>()).prop_map(|(k, down)| Op::Key(if down {
            KeyEvent::down(k)
        } else {
            KeyEvent::up(k)
        })),
        2 => (0..entries, point()).prop_map(|(i, p)| Op::Report(i, p)),
        1 => (0..4usize, 0..80i32).prop_map(|(l, s)| Op::Scroll(l, s)),
        1 => Just(Op::Show),
        1 => Just(Op::Hide),
    ]
}

fn apply(state: &mut MenuState, fx: &Fixture, op: &Op) {
    match op {
        Op::Hover(i, p) => state.on_item_hover(&fx.all[*i], *p),
        Op::Click(i, p) => {
            state.on_item_click(&fx.all[*i], *p);
        }
        Op::Key(k) => {
            state.handle_key_event(*k);
        }
        Op::Report(i, p) => state.report_item_offset(&fx.all[*i], *p),
        Op::Scroll(l, s) => state.report_scroll(*l, *s),
        Op::Show => state.show(Point::new(20, 20), Rc::clone(&fx.root)),
        Op::Hide => state.hide(),
    }
}

/// Every level below the root shows the children of the focused, enabled submenu above it.
fn check_connected(state: &MenuState, fx: &Fixture) -> Result<(), TestCaseError> {
    let levels = state.levels();
    if let Some(root) = levels.first() {
        prop_assert!(root.shows(&fx.root), "root level must show the root entries");
    }
    for pair in levels.windows(2) {
        let parent = &pair[0];
        let child = &pair[1];
        let focused = parent.focused_entry();
        prop_assert!(focused.is_some(), "a parent of an open submenu must have focus");
        let sub = focused.and_then(MenuEntry::as_submenu);
        prop_assert!(sub.is_some(), "the focused parent row must be a submenu");
        let sub = sub.unwrap();
        prop_assert!(sub.is_enabled(), "disabled submenus never open");
        prop_assert!(
            child.shows(sub.children()),
            "child level must show the focused submenu's children"
        );
    }
    for level in levels {
        if let Some(f) = level.focused {
            prop_assert!(f < level.entries.len(), "focus stays in range");
            prop_assert!(!level.entries[f].is_divider(), "dividers never take focus");
        }
    }
    Ok(())
}

/// Property: for any event sequence, the stack stays one connected root→leaf path.
#[test]
fn prop_stack_stays_connected() {
    let fx = fixture();
    let n = fx.all.len();
    proptest!(|(ops in prop::collection::vec(op_strategy(n), 1..60))| {
        let mut state = MenuState::new();
        state.show(Point::new(20, 20), Rc::clone(&fx.root));
        for op in &ops {
            apply(&mut state, &fx, op);
            check_connected(&state, &fx)?;
        }
    });
}

/// Property: replaying the same events from the same start gives the same stack.
#[test]
fn prop_replay_is_deterministic() {
    let fx = fixture();
    let n = fx.all.len();
    proptest!(|(ops in prop::collection::vec(op_strategy(n), 1..60))| {
        let mut first = MenuState::new();
        let mut second = MenuState::new();
        for op in &ops {
            apply(&mut first, &fx, op);
            apply(&mut second, &fx, op);
            prop_assert_eq!(first.levels(), second.levels());
        }
    });
}

/// Property: clicking an open, enabled leaf runs its action once and closes the menu.
#[test]
fn prop_leaf_click_clears_stack() {
    let fx = fixture();
    let n = fx.all.len();
    proptest!(|(
        ops in prop::collection::vec(op_strategy(n), 0..30),
        target in 0..n
    )| {
        let mut state = MenuState::new();
        state.show(Point::new(20, 20), Rc::clone(&fx.root));
        for op in &ops {
            apply(&mut state, &fx, op);
        }
        let entry = &fx.all[target];
        let is_open = state
            .levels()
            .iter()
            .any(|l| l.entries.iter().any(|e| e.is_same(entry)));
        let enabled_leaf = entry.as_leaf().is_some_and(Leaf::is_enabled);
        let before = fx.activations.get();
        let acted = state.on_item_click(entry, Point::ZERO);
        if is_open && enabled_leaf {
            prop_assert!(acted);
            prop_assert!(!state.is_open());
            prop_assert_eq!(fx.activations.get(), before + 1);
        } else {
            prop_assert_eq!(fx.activations.get(), before);
        }
    });
}

/// Property: a menu that fits inside the viewport with margins is placed fully inside it.
#[test]
fn prop_placement_stays_inside_viewport() {
    proptest!(|(
        x in -500..1500i32,
        y in -500..1500i32,
        w in 0..984i32,
        h in 0..584i32,
        level in 0..4usize
    )| {
        let vp = Viewport::from_size(1000, 600);
        let placed = clamp(Point::new(x, y), Size::new(w, h), vp, level, 8);
        prop_assert!(vp.contains(placed, Size::new(w, h)));
        prop_assert!(placed.x >= 8 && placed.y >= 8);
        prop_assert!(placed.x + w <= 992 && placed.y + h <= 592);
    });
}

/// Property: an axis on which the menu is larger than the viewport keeps its anchor.
#[test]
fn prop_oversized_axis_is_untouched() {
    proptest!(|(x in -500..500i32, y in -500..500i32, extra in 1..400i32)| {
        let vp = Viewport::from_size(200, 200);
        let placed = clamp(Point::new(x, y), Size::new(200 + extra, 200 + extra), vp, 1, 8);
        prop_assert_eq!(placed, Point::new(x, y));
    });
}
