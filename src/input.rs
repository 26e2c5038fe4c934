//! Input model: render mode, key events, persistent UI state, and the drag
//! state machine.
//!
//! All mutation happens synchronously inside a single event handler turn, so
//! the state here is plain owned data — no interior mutability, no locking.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::ZoneId;
use crate::scene::ItemId;

/// Which rendering palette is active. Selects colors and textures only —
/// geometry and item transforms are identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Monochrome blueprint palette on a dark ground.
    #[default]
    Technical,
    /// Humanized palette with wood, cushion, and floor textures.
    Visual,
}

impl RenderMode {
    /// The other mode; used by the host's mode toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Technical => Self::Visual,
            Self::Visual => Self::Technical,
        }
    }
}

/// A keyboard key, named as the browser reports it (e.g. `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key triggers deletion of the selected item.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }
}

/// Persistent UI state visible to the renderer and the host shell.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Active rendering palette.
    pub mode: RenderMode,
    /// Whether the dimension overlay is drawn.
    pub show_dimensions: bool,
    /// The id of the currently selected item, if any. At most one.
    pub selected_id: Option<ItemId>,
    /// Zone currently under the pointer (or hovered in the host's zone
    /// list), for hover highlighting.
    pub hovered_zone: Option<ZoneId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: RenderMode::Technical,
            // The dimension overlay starts on; it is the point of the plan.
            show_dimensions: true,
            selected_id: None,
            hovered_zone: None,
        }
    }
}

/// The drag state machine. At most one item is dragged at a time; the drag
/// id always coincides with the selection because pointer-down selects and
/// starts the drag in the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item; every pointer-move writes its position.
    Dragging(ItemId),
}
