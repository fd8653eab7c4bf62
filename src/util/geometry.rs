// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts pointer positions in viewport pixel space into
//! image-relative percentage coordinates (0 to 100 on each axis).

use crate::models::bbox::Point;

/// The on-screen rectangle occupied by the rendered image, in viewport pixels.
///
/// This must be re-read from the layout on every pointer event, since window
/// resizes and layout shifts move the image between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Convert a viewport pixel position to percentage coordinates, clamped to
/// the image bounds.
///
/// If the image is not yet rendered (zero or negative dimensions), returns
/// the origin rather than failing.
pub fn to_percent(pointer_x: f32, pointer_y: f32, rect: &RenderRect) -> Point {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Point::new(0.0, 0.0);
    }

    let x = (pointer_x - rect.left) as f64 / rect.width as f64 * 100.0;
    let y = (pointer_y - rect.top) as f64 / rect.height as f64 * 100.0;

    Point::new(x.clamp(0.0, 100.0), y.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_fifty() {
        let rect = RenderRect::new(100.0, 50.0, 800.0, 600.0);
        let p = to_percent(500.0, 350.0, &rect);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_corners() {
        let rect = RenderRect::new(100.0, 50.0, 800.0, 600.0);

        let tl = to_percent(100.0, 50.0, &rect);
        assert_eq!(tl, Point::new(0.0, 0.0));

        let br = to_percent(900.0, 650.0, &rect);
        assert_eq!(br, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_clamps_outside_pointer() {
        let rect = RenderRect::new(0.0, 0.0, 400.0, 300.0);

        let left = to_percent(-50.0, 150.0, &rect);
        assert_eq!(left.x, 0.0);
        assert_eq!(left.y, 50.0);

        let below = to_percent(200.0, 900.0, &rect);
        assert_eq!(below.x, 50.0);
        assert_eq!(below.y, 100.0);
    }

    #[test]
    fn test_unrendered_image_maps_to_origin() {
        let rect = RenderRect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(to_percent(123.0, 456.0, &rect), Point::new(0.0, 0.0));
    }
}
