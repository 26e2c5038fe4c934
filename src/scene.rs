//! Scene model: furniture item types and the owning in-memory store.
//!
//! The [`Scene`] is the single mutation surface for placed furniture — the
//! engine, renderer, and host all read from it, but every write goes through
//! its methods. Items live in a `Vec` so insertion order doubles as draw
//! order, and updates never reorder. Operations targeting an absent id are
//! silent no-ops; there is no error taxonomy to surface.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{SCALE_MAX, SCALE_MIN, SPAWN_X, SPAWN_Y};

/// Unique identifier for a placed furniture item.
pub type ItemId = Uuid;

/// The fixed furniture catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FurnitureKind {
    /// Dining table with four chairs.
    Table4,
    /// Low coffee table.
    CoffeeTable,
    /// Two-seat sofa.
    Sofa,
    /// Armchair.
    Chair,
    /// Hammock strung between two posts.
    Hammock,
    /// Sun lounger.
    Lounger,
    /// Octagonal sun umbrella.
    Umbrella,
    /// Post light.
    Lights,
    /// String of festoon lights.
    StringLights,
    /// Potted shrub.
    Plant,
}

impl FurnitureKind {
    /// All catalog kinds, in toolbox order.
    pub const ALL: [Self; 10] = [
        Self::Table4,
        Self::CoffeeTable,
        Self::Sofa,
        Self::Chair,
        Self::Hammock,
        Self::Lounger,
        Self::Umbrella,
        Self::Lights,
        Self::StringLights,
        Self::Plant,
    ];
}

/// A placed furniture item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: ItemId,
    pub kind: FurnitureKind,
    /// Position of the glyph center in scene space. Unclamped — items may
    /// sit anywhere, including outside the outline.
    pub x: f64,
    pub y: f64,
    /// Clockwise rotation in degrees, normalized to `[0, 360)`.
    pub rotation: f64,
    /// Uniform scale factor, clamped to the catalog bounds.
    pub scale: f64,
    /// Hidden items render in ghost mode but stay selectable and draggable.
    pub visible: bool,
}

/// Owning store of placed furniture, in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    items: Vec<FurnitureItem>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new item of `kind` at the default spawn point with the
    /// default transform, and return its id. Never fails.
    pub fn add(&mut self, kind: FurnitureKind) -> ItemId {
        let item = FurnitureItem {
            id: Uuid::new_v4(),
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0.0,
            scale: 1.0,
            visible: true,
        };
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Insert a fully-specified item (used for seeding the session layout).
    pub fn insert(&mut self, item: FurnitureItem) {
        self.items.push(item);
    }

    /// Move an item. Positions are not clamped or snapped. No-op if `id` is
    /// absent.
    pub fn update_position(&mut self, id: ItemId, x: f64, y: f64) {
        if let Some(item) = self.get_mut(id) {
            item.x = x;
            item.y = y;
        }
    }

    /// Set rotation in degrees, normalized into `[0, 360)`. No-op if `id` is
    /// absent.
    pub fn set_rotation(&mut self, id: ItemId, degrees: f64) {
        if let Some(item) = self.get_mut(id) {
            item.rotation = degrees.rem_euclid(360.0);
        }
    }

    /// Set the uniform scale factor, clamped to the catalog bounds. No-op if
    /// `id` is absent.
    pub fn set_scale(&mut self, id: ItemId, factor: f64) {
        if let Some(item) = self.get_mut(id) {
            item.scale = factor.clamp(SCALE_MIN, SCALE_MAX);
        }
    }

    /// Flip an item's visibility flag. No-op if `id` is absent.
    pub fn toggle_visibility(&mut self, id: ItemId) {
        if let Some(item) = self.get_mut(id) {
            item.visible = !item.visible;
        }
    }

    /// Remove an item, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<FurnitureItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut FurnitureItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// All items in insertion (draw) order.
    #[must_use]
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
