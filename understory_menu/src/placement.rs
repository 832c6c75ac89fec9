// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport placement for menu levels.
//!
//! ## Overview
//!
//! [`clamp`] takes the anchor a level would like to use, the panel's measured size,
//! the usable viewport and the level's depth, and returns an on-screen origin.
//! It is a pure function over its arguments.
//!
//! ## Rules
//!
//! Each axis is handled on its own.
//! - A panel larger than the viewport on an axis keeps its anchor on that axis.
//! - Overflowing the right edge: the root slides left so its right edge sits `margin` inside the viewport.
//!   A submenu instead flips to the left of its anchor, and only slides when the flip would cross the left edge.
//! - Underflowing the left edge: the panel moves to `left + margin`.
//! - The result is finally clamped into `[left + margin, right - width - margin]`.
//!   If both margins do not fit, the lower bound wins.
//! - The vertical axis uses the same rules without the flip; submenus only slide.
//!
//! ## Example
//!
//! ```
//! use understory_menu::placement::clamp;
//! use understory_menu::types::{Point, Size, Viewport};
//!
//! let vp = Viewport::from_size(200, 200);
//! let size = Size::new(50, 50);
//! // The root slides left, a submenu flips to the other side.
//! assert_eq!(clamp(Point::new(180, 50), size, vp, 0, 8), Point::new(142, 50));
//! assert_eq!(clamp(Point::new(180, 50), size, vp, 1, 8), Point::new(122, 50));
//! ```

use alloc::vec::Vec;

use crate::state::MenuLevel;
use crate::types::{Point, Size, Viewport};

/// Default inset kept between a menu and the viewport edge.
pub const DEFAULT_MARGIN: i32 = 8;

/// Placement configuration, passed by value per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlacementConfig {
    /// Inset kept between a menu and the viewport edge.
    pub margin: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl PlacementConfig {
    /// Configuration with an explicit margin.
    pub const fn with_margin(margin: i32) -> Self {
        Self { margin }
    }

    /// [`clamp`] with this configuration's margin.
    pub fn clamp(&self, anchor: Point, menu_size: Size, viewport: Viewport, level: usize) -> Point {
        clamp(anchor, menu_size, viewport, level, self.margin)
    }

    /// Place every open level of a stack.
    ///
    /// `sizes[i]` is the measured size of `levels[i]`. Placement stops at the first
    /// level without a size, so the result may be shorter than `levels`.
    ///
    /// Anchors recorded by the state machine are relative to the unclamped parent.
    /// Before clamping a child, it is shifted by however far its parent was moved,
    /// which keeps a submenu next to the row that opened it.
    pub fn place_stack<I>(
        &self,
        levels: &[MenuLevel<I>],
        sizes: &[Size],
        viewport: Viewport,
    ) -> Vec<Point> {
        let mut out = Vec::with_capacity(levels.len().min(sizes.len()));
        let mut shift = Point::ZERO;
        for (depth, (level, &size)) in levels.iter().zip(sizes).enumerate() {
            let anchor = level.anchor + shift;
            let placed = self.clamp(anchor, size, viewport, depth);
            shift = placed - level.anchor;
            out.push(placed);
        }
        out
    }
}

/// Compute an on-screen origin for a menu level.
///
/// `level` is `0` for the root menu and greater for cascaded submenus.
pub fn clamp(anchor: Point, menu_size: Size, viewport: Viewport, level: usize, margin: i32) -> Point {
    Point::new(
        clamp_axis(
            anchor.x,
            menu_size.width,
            viewport.left,
            viewport.right,
            margin,
            level > 0,
        ),
        clamp_axis(
            anchor.y,
            menu_size.height,
            viewport.top,
            viewport.bottom,
            margin,
            false,
        ),
    )
}

fn clamp_axis(pos: i32, extent: i32, lo: i32, hi: i32, margin: i32, flip: bool) -> i32 {
    if extent > hi.saturating_sub(lo) {
        return pos;
    }
    let min = lo.saturating_add(margin);
    let max = hi.saturating_sub(extent).saturating_sub(margin);

    let adjusted = if pos.saturating_add(extent) > hi {
        if flip {
            let flipped = pos.saturating_sub(extent).saturating_sub(margin);
            if flipped >= lo {
                flipped
            } else {
                pos.min(max).max(min)
            }
        } else {
            max
        }
    } else if pos < lo {
        min
    } else {
        pos
    };

    // Not `i32::clamp`: `max < min` is possible when the margins do not fit.
    adjusted.min(max).max(min)
}
