//! Top-level engine: pure [`EngineCore`] plus the browser-bound [`Engine`].
//!
//! `EngineCore` owns every piece of editor state — the static plan, the
//! furniture scene, UI state, and the drag state machine — and is free of
//! browser types so the whole interaction model is testable natively.
//! `Engine` wraps it with the `<canvas>` element, rebuilds the
//! viewport-to-scene transform from the live bounding rect on every pointer
//! event, and owns the render entry point and the fullscreen request.
//!
//! All handlers run synchronously inside one event turn and return
//! [`Action`]s telling the host what to refresh; nothing here blocks or
//! spans turns.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::geometry::{self, FloorPlan, ZoneId};
use crate::hit;
use crate::input::{InputState, Key, RenderMode, UiState};
use crate::render;
use crate::scene::{FurnitureItem, FurnitureKind, ItemId, Scene};
use crate::viewport::{Point, ViewTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notifications returned from handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The scene must be redrawn.
    RenderNeeded,
    /// The selection changed; the host should refresh the property panel.
    SelectionChanged(Option<ItemId>),
    /// The hovered zone changed; the host should refresh the zone list.
    HoverChanged(Option<ZoneId>),
    /// Furniture was added or removed; the host should refresh its item list.
    ItemsChanged,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
pub struct EngineCore {
    /// Static backdrop geometry, built once per session.
    pub plan: FloorPlan,
    pub scene: Scene,
    pub ui: UiState,
    pub input: InputState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            plan: geometry::build(),
            scene: Scene::new(),
            ui: UiState::default(),
            input: InputState::Idle,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Catalog / property controls ---

    /// Place a new item of `kind` at the spawn point and select it.
    pub fn add_item(&mut self, kind: FurnitureKind) -> ItemId {
        let id = self.scene.add(kind);
        self.ui.selected_id = Some(id);
        id
    }

    /// Set the selected item's rotation (degrees; normalized by the scene).
    /// No-op when nothing is selected.
    pub fn set_rotation(&mut self, degrees: f64) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        self.scene.set_rotation(id, degrees);
        vec![Action::ItemsChanged, Action::RenderNeeded]
    }

    /// Set the selected item's scale (clamped by the scene). No-op when
    /// nothing is selected.
    pub fn set_scale(&mut self, factor: f64) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        self.scene.set_scale(id, factor);
        vec![Action::ItemsChanged, Action::RenderNeeded]
    }

    /// Toggle the selected item's visibility (ghost mode). No-op when
    /// nothing is selected.
    pub fn toggle_visibility(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        self.scene.toggle_visibility(id);
        vec![Action::ItemsChanged, Action::RenderNeeded]
    }

    /// Delete the selected item and clear the selection. No-op when nothing
    /// is selected.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        self.scene.remove(id);
        self.ui.selected_id = None;
        if self.input == InputState::Dragging(id) {
            self.input = InputState::Idle;
        }
        vec![
            Action::ItemsChanged,
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]
    }

    // --- View controls ---

    /// Switch the rendering palette. Selection and item transforms are
    /// untouched.
    pub fn set_mode(&mut self, mode: RenderMode) -> Vec<Action> {
        if self.ui.mode == mode {
            return Vec::new();
        }
        self.ui.mode = mode;
        vec![Action::RenderNeeded]
    }

    /// Show or hide the dimension overlay.
    pub fn set_show_dimensions(&mut self, show: bool) -> Vec<Action> {
        if self.ui.show_dimensions == show {
            return Vec::new();
        }
        self.ui.show_dimensions = show;
        vec![Action::RenderNeeded]
    }

    /// Hover a zone from the host's zone list (or clear with `None`).
    pub fn set_hovered_zone(&mut self, zone: Option<ZoneId>) -> Vec<Action> {
        if self.ui.hovered_zone == zone {
            return Vec::new();
        }
        self.ui.hovered_zone = zone;
        vec![Action::HoverChanged(zone), Action::RenderNeeded]
    }

    // --- Pointer events ---
    //
    // Touch input goes through the same three handlers; the host passes the
    // first active touch point's client coordinates. Only single-touch drag
    // is supported.

    /// Pointer-down at `viewport_pt`. Hitting a glyph selects it and starts
    /// a drag in the same transition; hitting the background clears the
    /// selection.
    pub fn on_pointer_down(&mut self, viewport_pt: Point, view: &ViewTransform) -> Vec<Action> {
        let scene_pt = view.to_scene(viewport_pt);
        let mut actions = Vec::new();

        if let Some(id) = hit::hit_test(scene_pt, &self.scene) {
            if self.ui.selected_id != Some(id) {
                self.ui.selected_id = Some(id);
                actions.push(Action::SelectionChanged(Some(id)));
            }
            self.input = InputState::Dragging(id);
            actions.push(Action::RenderNeeded);
        } else if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer-move at `viewport_pt`. While dragging, every move writes the
    /// item position (no threshold, no snapping). While idle, moves track
    /// the hovered zone. `view` must be rebuilt by the caller for each event.
    pub fn on_pointer_move(&mut self, viewport_pt: Point, view: &ViewTransform) -> Vec<Action> {
        let scene_pt = view.to_scene(viewport_pt);
        match self.input {
            InputState::Dragging(id) => {
                self.scene.update_position(id, scene_pt.x, scene_pt.y);
                vec![Action::RenderNeeded]
            }
            InputState::Idle => {
                let zone = self.plan.zone_at(scene_pt);
                if zone == self.ui.hovered_zone {
                    Vec::new()
                } else {
                    self.ui.hovered_zone = zone;
                    vec![Action::HoverChanged(zone), Action::RenderNeeded]
                }
            }
        }
    }

    /// Pointer released: end the drag, keep the selection. The last applied
    /// position sticks.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    /// Pointer left the canvas: treated exactly like pointer-up.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Keyboard ---

    /// Window-level key handler. The host attaches this listener for the
    /// editor's lifetime so Delete works regardless of page focus.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() {
            self.delete_selected()
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.ui.selected_id.and_then(|id| self.scene.get(id))
    }

    /// The zone under the pointer (or hovered via the host list), if any.
    #[must_use]
    pub fn hovered_zone(&self) -> Option<ZoneId> {
        self.ui.hovered_zone
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.input, InputState::Dragging(_))
    }
}

/// The full editor engine. Wraps [`EngineCore`] and owns the canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, seeded with the
    /// session's initial layout (one dining table in the gourmet zone).
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut core = EngineCore::new();
        core.scene.insert(FurnitureItem {
            id: uuid::Uuid::new_v4(),
            kind: FurnitureKind::Table4,
            x: 250.0,
            y: 150.0,
            rotation: 0.0,
            scale: 1.0,
            visible: true,
        });
        Self { canvas, core }
    }

    /// The viewport transform for the canvas's current on-screen rectangle.
    /// Recomputed per event — never cached — so drags stay accurate across
    /// scroll, resize, and fullscreen changes.
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        let rect = self.canvas.get_bounding_client_rect();
        ViewTransform::from_bounding_rect(rect.left(), rect.top(), rect.width(), rect.height())
    }

    // --- Input events (client/viewport coordinates) ---

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        let view = self.view_transform();
        self.core.on_pointer_down(Point::new(client_x, client_y), &view)
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) -> Vec<Action> {
        let view = self.view_transform();
        self.core.on_pointer_move(Point::new(client_x, client_y), &view)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        self.core.on_key_down(&Key(key.to_owned()))
    }

    // --- Delegated controls ---

    pub fn add_item(&mut self, kind: FurnitureKind) -> ItemId {
        self.core.add_item(kind)
    }

    pub fn set_rotation(&mut self, degrees: f64) -> Vec<Action> {
        self.core.set_rotation(degrees)
    }

    pub fn set_scale(&mut self, factor: f64) -> Vec<Action> {
        self.core.set_scale(factor)
    }

    pub fn toggle_visibility(&mut self) -> Vec<Action> {
        self.core.toggle_visibility()
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        self.core.delete_selected()
    }

    pub fn set_mode(&mut self, mode: RenderMode) -> Vec<Action> {
        self.core.set_mode(mode)
    }

    pub fn set_show_dimensions(&mut self, show: bool) -> Vec<Action> {
        self.core.set_show_dimensions(show)
    }

    pub fn set_hovered_zone(&mut self, zone: Option<ZoneId>) -> Vec<Action> {
        self.core.set_hovered_zone(zone)
    }

    // --- Host data out ---

    /// JSON snapshot of the furniture list for the host property panel.
    #[must_use]
    pub fn items_json(&self) -> String {
        serde_json::to_string(self.core.scene.items()).unwrap_or_else(|_| "[]".to_owned())
    }

    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.core.selection()
    }

    #[must_use]
    pub fn hovered_zone(&self) -> Option<ZoneId> {
        self.core.hovered_zone()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.plan, &self.core.scene, &self.core.ui, self.core.input)
    }

    // --- Fullscreen ---

    /// Toggle fullscreen on the canvas. The environment may deny the request
    /// (permissions, missing user gesture); that is logged and otherwise
    /// ignored — no retry, no error surface.
    pub fn toggle_fullscreen(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.fullscreen_element().is_none() {
            if let Err(err) = self.canvas.request_fullscreen() {
                log::error!("fullscreen request denied: {err:?}");
            }
        } else {
            document.exit_fullscreen();
        }
    }
}
