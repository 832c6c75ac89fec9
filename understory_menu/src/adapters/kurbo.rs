// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Kurbo geometry.
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! ## Notes
//!
//! Toolkits built on Kurbo lay out in `f64`. These helpers round to the nearest
//! integer pixel on the way in and convert back on the way out. Values outside
//! the `i32` range saturate.

use kurbo::Rect;

use crate::placement::PlacementConfig;
use crate::types::{Point, Size, Viewport};

#[allow(
    clippy::cast_possible_truncation,
    reason = "Float to int casts saturate; menus live well inside i32 pixel space."
)]
fn px(v: f64) -> i32 {
    v as i32
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        let p = p.round();
        Self::new(px(p.x), px(p.y))
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<kurbo::Vec2> for Point {
    fn from(v: kurbo::Vec2) -> Self {
        kurbo::Point::new(v.x, v.y).into()
    }
}

impl From<kurbo::Size> for Size {
    fn from(s: kurbo::Size) -> Self {
        let s = s.round();
        Self::new(px(s.width), px(s.height))
    }
}

impl From<Size> for kurbo::Size {
    fn from(s: Size) -> Self {
        Self::new(f64::from(s.width), f64::from(s.height))
    }
}

impl From<Rect> for Viewport {
    fn from(r: Rect) -> Self {
        let r = r.round();
        Self::new(px(r.x0), px(r.y0), px(r.x1), px(r.y1))
    }
}

impl From<Viewport> for Rect {
    fn from(v: Viewport) -> Self {
        Self::new(
            f64::from(v.left),
            f64::from(v.top),
            f64::from(v.right),
            f64::from(v.bottom),
        )
    }
}

/// Place a menu panel given in Kurbo geometry and return its on-screen rectangle.
///
/// `level` is `0` for the root menu and greater for cascaded submenus.
pub fn place_rect(
    config: &PlacementConfig,
    anchor: kurbo::Point,
    size: kurbo::Size,
    viewport: Rect,
    level: usize,
) -> Rect {
    let origin = config.clamp(anchor.into(), size.into(), viewport.into(), level);
    Rect::from_origin_size(kurbo::Point::from(origin), size)
}
