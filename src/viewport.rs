#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{SCENE_HEIGHT, SCENE_WIDTH};

/// A point in either viewport (CSS pixel) or scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine mapping between viewport pixels and the fixed logical scene box.
///
/// The canvas always presents the full 550×800 scene, but its on-screen size
/// follows the surrounding layout, so the mapping is just the bounding
/// rectangle's origin plus a per-axis scale. Callers must rebuild the
/// transform from the current bounding rect on every event — the rect changes
/// under scroll, resize, and fullscreen, and a cached transform would drag
/// items to stale positions.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    /// Left edge of the canvas in viewport pixels.
    pub origin_x: f64,
    /// Top edge of the canvas in viewport pixels.
    pub origin_y: f64,
    /// On-screen pixels per scene unit, horizontally.
    pub scale_x: f64,
    /// On-screen pixels per scene unit, vertically.
    pub scale_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl ViewTransform {
    /// Build the transform from the canvas bounding rectangle in viewport
    /// pixels. A degenerate rect (zero width or height) maps at scale 1 so
    /// coordinates stay finite.
    #[must_use]
    pub fn from_bounding_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        let scale_x = if width > 0.0 { width / SCENE_WIDTH } else { 1.0 };
        let scale_y = if height > 0.0 { height / SCENE_HEIGHT } else { 1.0 };
        Self { origin_x: left, origin_y: top, scale_x, scale_y }
    }

    /// Convert a viewport-space point (CSS pixels) to scene coordinates.
    #[must_use]
    pub fn to_scene(&self, viewport: Point) -> Point {
        Point {
            x: (viewport.x - self.origin_x) / self.scale_x,
            y: (viewport.y - self.origin_y) / self.scale_y,
        }
    }

    /// Convert a scene-space point to viewport coordinates (CSS pixels).
    #[must_use]
    pub fn to_viewport(&self, scene: Point) -> Point {
        Point {
            x: scene.x * self.scale_x + self.origin_x,
            y: scene.y * self.scale_y + self.origin_y,
        }
    }
}
