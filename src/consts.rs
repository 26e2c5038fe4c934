//! Shared numeric constants for the floor-plan engine.

// ── Scene box ───────────────────────────────────────────────────

/// Logical scene width. The canvas `viewBox` is fixed; the host scales it
/// responsively via CSS.
pub const SCENE_WIDTH: f64 = 550.0;

/// Logical scene height.
pub const SCENE_HEIGHT: f64 = 800.0;

/// Pixels per meter in scene space.
pub const METER: f64 = 35.0;

// ── Furniture defaults and bounds ───────────────────────────────

/// Default spawn position for newly added furniture.
pub const SPAWN_X: f64 = 275.0;
pub const SPAWN_Y: f64 = 400.0;

/// Uniform scale bounds applied to every furniture item.
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 3.0;

/// Radius of the dashed selection ring around a selected item, in local
/// glyph units (so it scales with the item).
pub const SELECTION_RING_RADIUS: f64 = 40.0;

/// Alpha applied to an item while it is being dragged.
pub const DRAG_ALPHA: f64 = 0.9;

/// Alpha for hidden items rendered in ghost mode.
pub const GHOST_ALPHA: f64 = 0.15;

// ── Hit-testing ─────────────────────────────────────────────────

/// Scene-space slop added around glyph bounds so thin glyphs (string lights,
/// hammock ropes) stay grabbable.
pub const HIT_SLOP: f64 = 3.0;

// ── Dimension callouts ──────────────────────────────────────────

/// Perpendicular offset from the measured edge to the dimension line.
pub const DIM_OFFSET: f64 = 25.0;

/// Half-length of the end tick marks on a dimension line.
pub const DIM_TICK: f64 = 2.0;

/// Radius of the circular index badge at the dimension midpoint.
pub const DIM_BADGE_RADIUS: f64 = 7.0;
