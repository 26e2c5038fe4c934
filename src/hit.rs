//! Hit-testing scene-space points against placed furniture.
//!
//! Each glyph's hit region is its local bounding box (from
//! [`catalog::half_extents`]) carried through the item transform: the test
//! point is moved into item-local space by undoing the translation, rotation,
//! and uniform scale, then compared against the half-extents plus a small
//! slop. Hidden items keep their hit region — ghost mode is a presentation
//! state, and hidden items must stay selectable and draggable.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::catalog;
use crate::consts::HIT_SLOP;
use crate::scene::{FurnitureItem, ItemId, Scene};
use crate::viewport::Point;

/// The topmost item under `scene_pt`, if any.
///
/// Items are checked in reverse insertion order so the most recently placed
/// (drawn last, on top) wins when glyphs overlap.
#[must_use]
pub fn hit_test(scene_pt: Point, scene: &Scene) -> Option<ItemId> {
    scene
        .items()
        .iter()
        .rev()
        .find(|item| hits_item(scene_pt, item))
        .map(|item| item.id)
}

/// Whether `scene_pt` falls inside one item's transformed hit region.
#[must_use]
pub fn hits_item(scene_pt: Point, item: &FurnitureItem) -> bool {
    // Into item-local space: untranslate, unrotate, then unscale.
    let dx = scene_pt.x - item.x;
    let dy = scene_pt.y - item.y;
    let theta = -item.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();
    let local_x = (dx * cos - dy * sin) / item.scale;
    let local_y = (dx * sin + dy * cos) / item.scale;

    let (hx, hy) = catalog::half_extents(item.kind);
    // Slop is a screen-feel constant, so it shrinks with item scale rather
    // than growing the footprint of enlarged items.
    let slop = HIT_SLOP / item.scale;
    local_x.abs() <= hx + slop && local_y.abs() <= hy + slop
}
