// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the menu: integer geometry and the input events the state machine consumes.
//!
//! ## Overview
//!
//! All coordinates are integer viewport pixels.
//! The [`state`](crate::state) module consumes [`KeyEvent`] and [`PointerButton`],
//! and the [`placement`](crate::placement) module works on [`Point`], [`Size`] and [`Viewport`].

use core::ops::{Add, Sub};

/// A 2D point (or offset) in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Measured size of a menu panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The usable viewport rectangle that menus must stay inside.
///
/// Edges are inclusive-exclusive in the usual pixel sense: a menu of width `w`
/// at `x` fits when `x >= left` and `x + w <= right`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Viewport {
    /// Create a viewport from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A viewport anchored at the origin, e.g. a window's client area.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Horizontal extent.
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent.
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether a panel of `size` placed at `origin` lies fully inside.
    pub const fn contains(&self, origin: Point, size: Size) -> bool {
        origin.x >= self.left
            && origin.y >= self.top
            && origin.x.saturating_add(size.width) <= self.right
            && origin.y.saturating_add(size.height) <= self.bottom
    }
}

/// Keys the menu reacts to.
///
/// Toolkits map their own key codes onto this set; anything else is [`Key::Other`]
/// and is reported back as unhandled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move focus to the previous focusable row.
    ArrowUp,
    /// Move focus to the next focusable row.
    ArrowDown,
    /// Close the deepest submenu.
    ArrowLeft,
    /// Open the focused submenu.
    ArrowRight,
    /// Activate the focused row.
    Enter,
    /// Dismiss the whole menu.
    Escape,
    /// Any key the menu does not handle.
    Other,
}

/// Key transition phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    /// Key pressed.
    Down,
    /// Key released.
    Up,
}

/// A keyboard event delivered to [`MenuState::handle_key_event`](crate::state::MenuState::handle_key_event).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Which key.
    pub key: Key,
    /// Pressed or released.
    pub phase: KeyPhase,
}

impl KeyEvent {
    /// A key-down event.
    pub const fn down(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
        }
    }

    /// A key-up event.
    pub const fn up(key: Key) -> Self {
        Self {
            key,
            phase: KeyPhase::Up,
        }
    }
}

/// Pointer buttons, as seen by [`MenuState::open_on_press`](crate::state::MenuState::open_on_press).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button; opens context menus.
    Secondary,
    /// Wheel button.
    Middle,
}
