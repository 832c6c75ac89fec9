// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical menu state: the stack of open levels and its transitions.
//!
//! ## Model
//!
//! [`MenuState`] owns an immutable snapshot of open levels ([`MenuStack`]), root first.
//! The stack is always empty or a single connected path: every level after the root
//! shows the children of a submenu row in the level above it, and at most one submenu
//! is open per depth.
//!
//! Every transition builds a candidate stack and swaps it in only when it differs from
//! the current one. A no-op transition therefore keeps the same snapshot (same [`Rc`])
//! and does not notify subscribers.
//!
//! ## Inputs
//!
//! - [`MenuState::show`] / [`MenuState::hide`] open and close the whole hierarchy.
//! - [`MenuState::on_item_hover`] and [`MenuState::on_item_click`] drive pointer interaction.
//! - [`MenuState::handle_key_event`] drives keyboard navigation.
//! - [`MenuState::report_item_offset`] and [`MenuState::report_scroll`] are written by the
//!   presentation layer after layout. Offsets are in the level's content coordinates; the
//!   level's scroll offset is subtracted when a submenu anchor is computed.
//!
//! Lookups that miss (events from a level that has since closed) are ignored.
//!
//! ## Example
//!
//! ```
//! use understory_menu::entry::MenuEntry;
//! use understory_menu::state::MenuState;
//! use understory_menu::types::{Key, KeyEvent, Point};
//!
//! let share: MenuEntry = MenuEntry::submenu("Share", [MenuEntry::leaf("Email", || {})]);
//! let mut menu = MenuState::new();
//! menu.show(Point::new(10, 10), vec![MenuEntry::leaf("Copy", || {}), share.clone()]);
//!
//! // Pointer over "Share": its children open next to the row.
//! menu.on_item_hover(&share, Point::new(120, 32));
//! assert_eq!(menu.depth(), 2);
//! assert_eq!(menu.levels()[1].anchor, Point::new(130, 42));
//!
//! // Left arrow closes the submenu again.
//! assert!(menu.handle_key_event(KeyEvent::down(Key::ArrowLeft)));
//! assert_eq!(menu.depth(), 1);
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::entry::{Entries, EntryId, MenuEntry, Submenu};
use crate::types::{Key, KeyEvent, KeyPhase, Point, PointerButton};

/// One open menu panel.
#[derive(Debug)]
pub struct MenuLevel<I = ()> {
    /// Rows in display order.
    pub entries: Entries<I>,
    /// Index of the focused row, if any.
    pub focused: Option<usize>,
    /// Intended top-left corner before viewport placement.
    pub anchor: Point,
    /// Vertical scroll of the panel's content.
    pub scroll_offset: i32,
}

impl<I> MenuLevel<I> {
    /// A level with nothing focused and no scroll.
    pub fn new(entries: Entries<I>, anchor: Point) -> Self {
        Self {
            entries,
            focused: None,
            anchor,
            scroll_offset: 0,
        }
    }

    /// The focused row, if any.
    pub fn focused_entry(&self) -> Option<&MenuEntry<I>> {
        self.entries.get(self.focused?)
    }

    /// Whether this level shows exactly `entries` (pointer identity).
    pub fn shows(&self, entries: &Entries<I>) -> bool {
        Rc::ptr_eq(&self.entries, entries)
    }

    fn row_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == Some(id))
    }

    fn child_level(&self, submenu: &Submenu<I>, offset: Point) -> Self {
        let anchor = self.anchor + offset - Point::new(0, self.scroll_offset);
        Self::new(Rc::clone(submenu.children()), anchor)
    }
}

impl<I> Clone for MenuLevel<I> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            focused: self.focused,
            anchor: self.anchor,
            scroll_offset: self.scroll_offset,
        }
    }
}

impl<I> PartialEq for MenuLevel<I> {
    fn eq(&self, other: &Self) -> bool {
        self.shows(&other.entries)
            && self.focused == other.focused
            && self.anchor == other.anchor
            && self.scroll_offset == other.scroll_offset
    }
}

/// Snapshot of the open levels, root first.
pub type MenuStack<I = ()> = Rc<[MenuLevel<I>]>;

bitflags! {
    /// What a transition changed, as reported to subscribers.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct StackChange: u8 {
        /// A new root level replaced the stack.
        const SHOWN  = 0b0000_0001;
        /// The stack was cleared.
        const HIDDEN = 0b0000_0010;
        /// A submenu level was opened.
        const PUSHED = 0b0000_0100;
        /// One or more deeper levels were closed.
        const POPPED = 0b0000_1000;
        /// A focused row changed.
        const FOCUS  = 0b0001_0000;
        /// A level's scroll offset changed.
        const SCROLL = 0b0010_0000;
    }
}

/// Handle returned by [`MenuState::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<I> = Box<dyn FnMut(&[MenuLevel<I>], StackChange)>;

/// State machine for one cascading menu hierarchy.
///
/// ## Usage
///
/// - Call [`MenuState::show`] on a context-click (or use [`MenuState::open_on_press`]).
/// - Render [`MenuState::levels`], placing each with
///   [`PlacementConfig::place_stack`](crate::placement::PlacementConfig::place_stack).
/// - After layout, report row offsets with [`MenuState::report_item_offset`].
/// - Forward hover, click, scroll and key events; re-render when notified via
///   [`MenuState::subscribe`].
///
/// All operations are synchronous and total. One instance serves one hierarchy.
pub struct MenuState<I = ()> {
    stack: MenuStack<I>,
    item_offsets: BTreeMap<EntryId, Point>,
    listeners: Vec<(SubscriptionId, Listener<I>)>,
    next_subscription: u64,
}

impl<I> core::fmt::Debug for MenuState<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuState")
            .field("depth", &self.stack.len())
            .field("item_offsets", &self.item_offsets.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<I> Default for MenuState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> MenuState<I> {
    /// Create a closed menu.
    pub fn new() -> Self {
        Self {
            stack: Vec::new().into(),
            item_offsets: BTreeMap::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot of open levels.
    pub fn stack(&self) -> &MenuStack<I> {
        &self.stack
    }

    /// Open levels, root first.
    pub fn levels(&self) -> &[MenuLevel<I>] {
        &self.stack
    }

    /// Number of open levels; `0` when closed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether any level is open.
    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The focused row of the deepest level.
    pub fn focused_entry(&self) -> Option<&MenuEntry<I>> {
        self.stack.last()?.focused_entry()
    }

    /// Last offset reported for `entry`, if any.
    pub fn item_offset(&self, entry: &MenuEntry<I>) -> Option<Point> {
        self.item_offsets.get(&entry.id()?).copied()
    }

    /// Replace the whole hierarchy with a single root level at `position`.
    pub fn show(&mut self, position: Point, entries: impl Into<Entries<I>>) {
        self.item_offsets.clear();
        let root = MenuLevel::new(entries.into(), position);
        self.commit(vec![root], StackChange::SHOWN);
    }

    /// Close every level. Calling this on a closed menu does nothing.
    pub fn hide(&mut self) {
        self.item_offsets.clear();
        self.commit(Vec::new(), StackChange::HIDDEN);
    }

    /// Open the menu for a pointer press: only the secondary button shows it.
    ///
    /// Returns whether the menu was shown.
    pub fn open_on_press(
        &mut self,
        button: PointerButton,
        position: Point,
        entries: impl Into<Entries<I>>,
    ) -> bool {
        if button != PointerButton::Secondary {
            return false;
        }
        self.show(position, entries);
        true
    }

    /// Record where `entry` was laid out inside its level.
    ///
    /// Used to anchor submenus opened from the keyboard. Later reports overwrite
    /// earlier ones; reports for entries that are no longer open are harmless.
    pub fn report_item_offset(&mut self, entry: &MenuEntry<I>, offset: Point) {
        if let Some(id) = entry.id() {
            self.item_offsets.insert(id, offset);
        }
    }

    /// Record the vertical scroll of the level at `level`.
    pub fn report_scroll(&mut self, level: usize, scroll: i32) {
        let Some(current) = self.stack.get(level) else {
            debug!(level, depth = self.stack.len(), "ignoring scroll for a closed level");
            return;
        };
        if current.scroll_offset == scroll {
            return;
        }
        let mut levels = self.stack.to_vec();
        levels[level].scroll_offset = scroll;
        self.commit(levels, StackChange::SCROLL);
    }

    /// The pointer entered `entry`, laid out at `offset` inside its level.
    ///
    /// Focuses the row and closes anything deeper than its level. An enabled submenu
    /// row then opens its children anchored at the level's anchor plus `offset`,
    /// unless the level below already shows them, in which case the open subtree
    /// is kept as is.
    pub fn on_item_hover(&mut self, entry: &MenuEntry<I>, offset: Point) {
        let Some((depth, row)) = self.locate(entry) else {
            debug!(depth = self.stack.len(), "ignoring hover on an entry that is not open");
            return;
        };

        let mut levels = self.stack[..=depth].to_vec();
        levels[depth].focused = Some(row);
        let truncated = self.stack.len() > depth + 1;
        let mut change = StackChange::FOCUS;

        match entry {
            MenuEntry::Submenu(submenu) if submenu.is_enabled() => {
                if self.shows_children_at(depth + 1, submenu) {
                    levels.extend_from_slice(&self.stack[depth + 1..]);
                } else {
                    let child = levels[depth].child_level(submenu, offset);
                    levels.push(child);
                    change |= StackChange::PUSHED;
                    if truncated {
                        change |= StackChange::POPPED;
                    }
                }
            }
            _ if truncated => change |= StackChange::POPPED,
            _ => {}
        }

        self.commit(levels, change);
    }

    /// The pointer clicked `entry`, laid out at `offset` inside its level.
    ///
    /// An enabled leaf runs its action and closes the menu. An enabled submenu
    /// opens as on hover. Returns whether the click did anything.
    pub fn on_item_click(&mut self, entry: &MenuEntry<I>, offset: Point) -> bool {
        if self.locate(entry).is_none() {
            debug!("ignoring click on an entry that is not open");
            return false;
        }
        match entry {
            MenuEntry::Leaf(leaf) if leaf.is_enabled() => {
                leaf.activate();
                self.hide();
                true
            }
            MenuEntry::Submenu(submenu) if submenu.is_enabled() => {
                self.on_item_hover(entry, offset);
                true
            }
            _ => false,
        }
    }

    /// Handle keyboard navigation. Returns whether the event was consumed.
    ///
    /// Only key-down events on an open menu are handled.
    /// - Up/Down cycle focus over the enabled rows of the deepest level, wrapping.
    /// - Right opens the focused submenu, anchored at its reported offset.
    /// - Left closes the deepest submenu; on the root it is consumed without effect.
    /// - Enter opens the focused submenu or activates the focused leaf.
    /// - Escape closes the menu.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        if event.phase != KeyPhase::Down || self.stack.is_empty() {
            return false;
        }
        match event.key {
            Key::ArrowDown => self.move_focus(true),
            Key::ArrowUp => self.move_focus(false),
            Key::ArrowLeft => self.close_submenu(),
            Key::ArrowRight => self.open_focused_submenu(),
            Key::Enter => self.activate_focused(),
            Key::Escape => self.hide(),
            Key::Other => return false,
        }
        true
    }

    /// Register a listener called after every change of the stack.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&[MenuLevel<I>], StackChange) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn locate(&self, entry: &MenuEntry<I>) -> Option<(usize, usize)> {
        let id = entry.id()?;
        self.stack
            .iter()
            .enumerate()
            .find_map(|(depth, level)| level.row_of(id).map(|row| (depth, row)))
    }

    fn shows_children_at(&self, depth: usize, submenu: &Submenu<I>) -> bool {
        self.stack
            .get(depth)
            .is_some_and(|level| level.shows(submenu.children()))
    }

    fn move_focus(&mut self, forward: bool) {
        let Some(deepest) = self.stack.last() else {
            return;
        };
        let focusable: Vec<usize> = deepest
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_enabled())
            .map(|(i, _)| i)
            .collect();
        let n = focusable.len();
        if n == 0 {
            return;
        }
        let current = deepest
            .focused
            .and_then(|f| focusable.iter().position(|&i| i == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => n - 1,
            (Some(p), true) => (p + 1) % n,
            (Some(p), false) => (p + n - 1) % n,
        };

        let mut levels = self.stack.to_vec();
        if let Some(last) = levels.last_mut() {
            last.focused = Some(focusable[next]);
        }
        self.commit(levels, StackChange::FOCUS);
    }

    fn close_submenu(&mut self) {
        if self.stack.len() > 1 {
            let levels = self.stack[..self.stack.len() - 1].to_vec();
            self.commit(levels, StackChange::POPPED);
        }
    }

    fn open_focused_submenu(&mut self) {
        let Some(MenuEntry::Submenu(submenu)) = self.focused_entry().cloned() else {
            return;
        };
        if !submenu.is_enabled() {
            return;
        }
        let depth = self.stack.len() - 1;
        if self.shows_children_at(depth + 1, &submenu) {
            return;
        }
        let Some(&offset) = self.item_offsets.get(&submenu.id()) else {
            debug!(
                entry = submenu.label(),
                "no offset reported yet; not opening submenu"
            );
            return;
        };
        let mut levels = self.stack.to_vec();
        let child = levels[depth].child_level(&submenu, offset);
        levels.push(child);
        self.commit(levels, StackChange::PUSHED);
    }

    fn activate_focused(&mut self) {
        let Some(entry) = self.focused_entry().cloned() else {
            return;
        };
        match &entry {
            MenuEntry::Submenu(_) => self.open_focused_submenu(),
            MenuEntry::Leaf(leaf) if leaf.is_enabled() => {
                leaf.activate();
                self.hide();
            }
            _ => {}
        }
    }

    fn commit(&mut self, levels: Vec<MenuLevel<I>>, change: StackChange) {
        if self.stack[..] == levels[..] {
            return;
        }
        trace!(
            from = self.stack.len(),
            to = levels.len(),
            ?change,
            "menu stack changed"
        );
        self.stack = levels.into();
        for (_, listener) in &mut self.listeners {
            listener(&self.stack[..], change);
        }
    }
}
