// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu entries: clickable leaves, expandable submenus, and dividers.
//!
//! ## Identity
//!
//! Entries are matched by identity, never by value.
//! Every [`Leaf`] and [`Submenu`] receives a fresh [`EntryId`] when it is built,
//! so two rows with the same label and children are still distinct.
//! [`MenuEntry`] holds them behind [`Rc`], and clones of an entry share its id.
//! Dividers carry no id and never match anything.
//!
//! ## Example
//!
//! ```
//! use understory_menu::entry::{Leaf, MenuEntry, Submenu};
//!
//! let copy: MenuEntry = Leaf::new("Copy", || {}).into();
//! let paste: MenuEntry = Leaf::new("Paste", || {}).disabled().into();
//! let share: MenuEntry = Submenu::new("Share", [MenuEntry::leaf("Email", || {})]).into();
//! let items = [copy.clone(), paste, MenuEntry::divider(), share];
//!
//! assert!(items[0].is_same(&copy));
//! assert!(!items[1].is_enabled());
//! assert!(!items[2].is_enabled());
//! assert_eq!(items[3].as_submenu().map(|s| s.children().len()), Some(1));
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

/// Callback invoked when a leaf is activated.
pub type Action = Rc<dyn Fn()>;

/// An ordered, immutable list of entries; compared by pointer for stack bookkeeping.
pub type Entries<I = ()> = Rc<[MenuEntry<I>]>;

/// Unique identity of a [`Leaf`] or [`Submenu`].
///
/// Ids are allocated from a process-wide counter and never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, useful as a toolkit-side key.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A clickable row.
///
/// `I` is an opaque icon payload; the menu never looks at it.
pub struct Leaf<I = ()> {
    id: EntryId,
    label: String,
    enabled: bool,
    leading_icon: Option<I>,
    trailing_icon: Option<I>,
    action: Action,
}

impl<I> Leaf<I> {
    /// Create an enabled leaf without icons.
    pub fn new(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            id: EntryId::next(),
            label: label.into(),
            enabled: true,
            leading_icon: None,
            trailing_icon: None,
            action: Rc::new(action),
        }
    }

    /// Set whether the leaf can be activated.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Mark the leaf as disabled.
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Icon drawn before the label.
    pub fn with_leading_icon(mut self, icon: I) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    /// Icon drawn after the label.
    pub fn with_trailing_icon(mut self, icon: I) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    /// Identity of this leaf.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the leaf can be focused and activated.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Icon drawn before the label, if any.
    pub fn leading_icon(&self) -> Option<&I> {
        self.leading_icon.as_ref()
    }

    /// Icon drawn after the label, if any.
    pub fn trailing_icon(&self) -> Option<&I> {
        self.trailing_icon.as_ref()
    }

    /// Invoke the leaf's action. Does not check `enabled`.
    pub fn activate(&self) {
        (self.action)();
    }
}

impl<I: core::fmt::Debug> core::fmt::Debug for Leaf<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Leaf")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("leading_icon", &self.leading_icon)
            .field("trailing_icon", &self.trailing_icon)
            .finish_non_exhaustive()
    }
}

/// A row that expands into a nested menu.
#[derive(Debug)]
pub struct Submenu<I = ()> {
    id: EntryId,
    label: String,
    enabled: bool,
    icon: Option<I>,
    children: Entries<I>,
}

impl<I> Submenu<I> {
    /// Create an enabled submenu. The children are fixed from here on.
    pub fn new(label: impl Into<String>, children: impl IntoIterator<Item = MenuEntry<I>>) -> Self {
        Self {
            id: EntryId::next(),
            label: label.into(),
            enabled: true,
            icon: None,
            children: children.into_iter().collect(),
        }
    }

    /// Set whether the submenu can be opened.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Mark the submenu as disabled; it will never open.
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Icon drawn alongside the label.
    pub fn with_icon(mut self, icon: I) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Identity of this submenu.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the submenu can be focused and opened.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Icon, if any.
    pub fn icon(&self) -> Option<&I> {
        self.icon.as_ref()
    }

    /// The nested entries shown when this submenu opens.
    pub fn children(&self) -> &Entries<I> {
        &self.children
    }
}

/// One row of a menu.
#[derive(Debug)]
pub enum MenuEntry<I = ()> {
    /// A clickable row.
    Leaf(Rc<Leaf<I>>),
    /// A row that opens a nested menu.
    Submenu(Rc<Submenu<I>>),
    /// A non-interactive separator.
    Divider,
}

impl<I> Clone for MenuEntry<I> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(leaf) => Self::Leaf(Rc::clone(leaf)),
            Self::Submenu(submenu) => Self::Submenu(Rc::clone(submenu)),
            Self::Divider => Self::Divider,
        }
    }
}

impl<I> MenuEntry<I> {
    /// Shorthand for an enabled [`Leaf`] without icons.
    pub fn leaf(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Leaf::new(label, action).into()
    }

    /// Shorthand for an enabled [`Submenu`] without an icon.
    pub fn submenu(
        label: impl Into<String>,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Submenu::new(label, children).into()
    }

    /// A separator row.
    pub const fn divider() -> Self {
        Self::Divider
    }

    /// Identity, or `None` for dividers.
    pub fn id(&self) -> Option<EntryId> {
        match self {
            Self::Leaf(leaf) => Some(leaf.id()),
            Self::Submenu(submenu) => Some(submenu.id()),
            Self::Divider => None,
        }
    }

    /// Whether the row takes part in focus cycling and activation.
    /// Always `false` for dividers.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_enabled(),
            Self::Submenu(submenu) => submenu.is_enabled(),
            Self::Divider => false,
        }
    }

    /// Display label, or `None` for dividers.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(leaf.label()),
            Self::Submenu(submenu) => Some(submenu.label()),
            Self::Divider => None,
        }
    }

    /// The leaf behind this entry, if it is one.
    pub fn as_leaf(&self) -> Option<&Leaf<I>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// The submenu behind this entry, if it is one.
    pub fn as_submenu(&self) -> Option<&Submenu<I>> {
        match self {
            Self::Submenu(submenu) => Some(submenu),
            _ => None,
        }
    }

    /// Whether this is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    /// Identity comparison. Dividers are never the same as anything.
    pub fn is_same(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<I> From<Leaf<I>> for MenuEntry<I> {
    fn from(leaf: Leaf<I>) -> Self {
        Self::Leaf(Rc::new(leaf))
    }
}

impl<I> From<Submenu<I>> for MenuEntry<I> {
    fn from(submenu: Submenu<I>) -> Self {
        Self::Submenu(Rc::new(submenu))
    }
}
