// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bounding box data structures.
//!
//! This module defines the core rectangle type used for annotations and the
//! geometry rules that keep it inside the image during drawing, dragging,
//! and handle-based resizing. All coordinates are percentages (0 to 100)
//! relative to the rendered image, so annotations stay valid regardless of
//! display size.

use serde::{Deserialize, Serialize};

/// Minimum box extent, in percentage units, on each axis. Resizing can never
/// shrink a box below this, and drawn boxes smaller than this are discarded.
pub const MIN_EXTENT: f64 = 1.0;

/// A 2D point in percentage coordinates (0 to 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the eight resize grips on a selected box's border, identified by
/// compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    N,
    S,
    E,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    /// All handles, in rendering order.
    pub const ALL: [Handle; 8] = [
        Handle::Nw,
        Handle::Ne,
        Handle::Sw,
        Handle::Se,
        Handle::N,
        Handle::S,
        Handle::W,
        Handle::E,
    ];

    fn moves_top(self) -> bool {
        matches!(self, Handle::N | Handle::Nw | Handle::Ne)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Handle::S | Handle::Sw | Handle::Se)
    }

    fn moves_left(self) -> bool {
        matches!(self, Handle::W | Handle::Nw | Handle::Sw)
    }

    fn moves_right(self) -> bool {
        matches!(self, Handle::E | Handle::Ne | Handle::Se)
    }
}

/// A rectangular annotation in percentage coordinates.
///
/// Invariant after every mutation: `0 <= x`, `0 <= y`, `x + width <= 100`,
/// `y + height <= 100`. All mutating operations return a new value rather
/// than editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Create a zero-sized box at the given position. Zero-sized boxes exist
    /// only transiently while drawing; they are never committed.
    pub fn new(id: String, origin: Point) -> Self {
        Self {
            id,
            x: origin.x,
            y: origin.y,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point falls inside the box (borders inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// The percentage position of a resize handle on this box's border.
    pub fn handle_position(&self, handle: Handle) -> Point {
        let x = if handle.moves_left() {
            self.x
        } else if handle.moves_right() {
            self.right()
        } else {
            self.x + self.width / 2.0
        };
        let y = if handle.moves_top() {
            self.y
        } else if handle.moves_bottom() {
            self.bottom()
        } else {
            self.y + self.height / 2.0
        };
        Point::new(x, y)
    }

    /// Re-clamp the box into the 0..100 bounds by adjusting its position,
    /// never by truncating its size.
    pub fn clamped(mut self) -> Self {
        self.x = self.x.clamp(0.0, (100.0 - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (100.0 - self.height).max(0.0));
        self
    }

    /// Drawing rule: stretch the box between its anchor corner and the
    /// current pointer position. Dragging up or left of the anchor keeps the
    /// extent positive by moving the top-left corner instead.
    pub fn stretched(&self, anchor: Point, pointer: Point) -> Self {
        Self {
            id: self.id.clone(),
            x: anchor.x.min(pointer.x),
            y: anchor.y.min(pointer.y),
            width: (pointer.x - anchor.x).abs(),
            height: (pointer.y - anchor.y).abs(),
        }
        .clamped()
    }

    /// Dragging rule: translate by a pointer delta, keeping the box fully
    /// inside the image on both axes.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            id: self.id.clone(),
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
        .clamped()
    }

    /// Resizing rule: move the edges named by the handle to the pointer
    /// position. Each moved edge keeps at least [`MIN_EXTENT`] between
    /// itself and the opposite edge, so the box can never invert.
    pub fn resized(&self, handle: Handle, pointer: Point) -> Self {
        let right = self.right();
        let bottom = self.bottom();
        let mut next = self.clone();

        if handle.moves_top() {
            next.height = (bottom - pointer.y).max(MIN_EXTENT);
            next.y = pointer.y.min(bottom - MIN_EXTENT);
        }
        if handle.moves_bottom() {
            next.height = (pointer.y - self.y).max(MIN_EXTENT);
        }
        if handle.moves_left() {
            next.width = (right - pointer.x).max(MIN_EXTENT);
            next.x = pointer.x.min(right - MIN_EXTENT);
        }
        if handle.moves_right() {
            next.width = (pointer.x - self.x).max(MIN_EXTENT);
        }

        next.clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x: f64, y: f64, w: f64, h: f64) -> BBox {
        BBox {
            id: "b1".to_string(),
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_stretched_up_left_normalizes() {
        let draft = BBox::new("d".to_string(), Point::new(50.0, 50.0));
        let b = draft.stretched(Point::new(50.0, 50.0), Point::new(30.0, 30.0));
        assert_eq!((b.x, b.y, b.width, b.height), (30.0, 30.0, 20.0, 20.0));
    }

    #[test]
    fn test_translated_clamps_at_right_edge() {
        let b = bbox(90.0, 40.0, 20.0, 10.0).clamped();
        assert_eq!(b.x, 80.0);

        let b = bbox(70.0, 40.0, 20.0, 10.0).translated(50.0, 0.0);
        assert_eq!(b.x, 80.0);
        assert_eq!(b.width, 20.0);
    }

    #[test]
    fn test_translated_clamps_at_origin() {
        let b = bbox(5.0, 5.0, 10.0, 10.0).translated(-20.0, -20.0);
        assert_eq!((b.x, b.y), (0.0, 0.0));
    }

    #[test]
    fn test_resize_never_inverts() {
        let b = bbox(40.0, 40.0, 20.0, 20.0);

        // Drag every handle far past the opposite edge.
        for handle in Handle::ALL {
            let far = Point::new(
                if handle.moves_left() { 100.0 } else { 0.0 },
                if handle.moves_top() { 100.0 } else { 0.0 },
            );
            let r = b.resized(handle, far);
            assert!(r.width >= MIN_EXTENT, "{handle:?} inverted width: {r:?}");
            assert!(r.height >= MIN_EXTENT, "{handle:?} inverted height: {r:?}");
            assert!(r.x >= 0.0 && r.right() <= 100.0, "{handle:?}: {r:?}");
            assert!(r.y >= 0.0 && r.bottom() <= 100.0, "{handle:?}: {r:?}");
        }
    }

    #[test]
    fn test_resize_east_tracks_pointer() {
        let b = bbox(10.0, 10.0, 20.0, 20.0);
        let r = b.resized(Handle::E, Point::new(70.0, 55.0));
        assert_eq!(r.width, 60.0);
        assert_eq!(r.height, 20.0);
        assert_eq!((r.x, r.y), (10.0, 10.0));
    }

    #[test]
    fn test_resize_nw_moves_origin_and_extent() {
        let b = bbox(40.0, 40.0, 20.0, 20.0);
        let r = b.resized(Handle::Nw, Point::new(30.0, 35.0));
        assert_eq!((r.x, r.y), (30.0, 35.0));
        assert_eq!(r.width, 30.0);
        assert_eq!(r.height, 25.0);
    }

    #[test]
    fn test_contains_is_border_inclusive() {
        let b = bbox(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(30.0, 30.0)));
        assert!(!b.contains(Point::new(30.1, 30.0)));
    }

    #[test]
    fn test_handle_positions() {
        let b = bbox(10.0, 20.0, 40.0, 60.0);
        assert_eq!(b.handle_position(Handle::Nw), Point::new(10.0, 20.0));
        assert_eq!(b.handle_position(Handle::Se), Point::new(50.0, 80.0));
        assert_eq!(b.handle_position(Handle::N), Point::new(30.0, 20.0));
        assert_eq!(b.handle_position(Handle::W), Point::new(10.0, 50.0));
    }
}
