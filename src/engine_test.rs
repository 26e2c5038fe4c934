#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Identity transform: viewport coordinates are scene coordinates.
fn identity() -> ViewTransform {
    ViewTransform::default()
}

/// Core with one chair placed and selected at the spawn point.
fn core_with_chair() -> (EngineCore, ItemId) {
    let mut core = EngineCore::new();
    let id = core.add_item(FurnitureKind::Chair);
    (core, id)
}

fn selected_pos(core: &EngineCore) -> (f64, f64) {
    let item = core.selected_item().unwrap();
    (item.x, item.y)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_is_empty_and_idle() {
    let core = EngineCore::new();
    assert!(core.scene.is_empty());
    assert_eq!(core.selection(), None);
    assert_eq!(core.hovered_zone(), None);
    assert!(!core.is_dragging());
    assert_eq!(core.ui.mode, RenderMode::Technical);
    assert!(core.ui.show_dimensions);
}

#[test]
fn new_core_carries_the_full_plan() {
    let core = EngineCore::new();
    assert_eq!(core.plan.zones.len(), 3);
    assert_eq!(core.plan.dimensions.len(), 18);
    assert!(!core.plan.outline.is_empty());
}

// =============================================================
// Adding items
// =============================================================

#[test]
fn add_item_spawns_and_selects() {
    let mut core = EngineCore::new();
    let id = core.add_item(FurnitureKind::Sofa);
    assert_eq!(core.selection(), Some(id));
    let item = core.selected_item().unwrap();
    assert_eq!(item.kind, FurnitureKind::Sofa);
    assert_eq!((item.x, item.y), (275.0, 400.0));
}

#[test]
fn adding_replaces_the_selection() {
    let mut core = EngineCore::new();
    let first = core.add_item(FurnitureKind::Chair);
    let second = core.add_item(FurnitureKind::Plant);
    assert_ne!(first, second);
    assert_eq!(core.selection(), Some(second));
    assert_eq!(core.scene.len(), 2);
}

// =============================================================
// Property controls
// =============================================================

#[test]
fn property_ops_without_selection_are_silent() {
    let mut core = EngineCore::new();
    assert!(core.set_rotation(90.0).is_empty());
    assert!(core.set_scale(2.0).is_empty());
    assert!(core.toggle_visibility().is_empty());
    assert!(core.delete_selected().is_empty());
}

#[test]
fn set_rotation_normalizes_and_reports() {
    let (mut core, _) = core_with_chair();
    let actions = core.set_rotation(370.0);
    assert_eq!(actions, vec![Action::ItemsChanged, Action::RenderNeeded]);
    assert_eq!(core.selected_item().unwrap().rotation, 10.0);
}

#[test]
fn set_scale_clamps_and_reports() {
    let (mut core, _) = core_with_chair();
    let actions = core.set_scale(9.0);
    assert_eq!(actions, vec![Action::ItemsChanged, Action::RenderNeeded]);
    assert_eq!(core.selected_item().unwrap().scale, 3.0);

    core.set_scale(0.1);
    assert_eq!(core.selected_item().unwrap().scale, 0.5);
}

#[test]
fn toggle_visibility_flips_the_selected_item() {
    let (mut core, _) = core_with_chair();
    let actions = core.toggle_visibility();
    assert_eq!(actions, vec![Action::ItemsChanged, Action::RenderNeeded]);
    assert!(!core.selected_item().unwrap().visible);
    core.toggle_visibility();
    assert!(core.selected_item().unwrap().visible);
}

#[test]
fn delete_selected_removes_and_clears() {
    let (mut core, id) = core_with_chair();
    let actions = core.delete_selected();
    assert_eq!(
        actions,
        vec![
            Action::ItemsChanged,
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]
    );
    assert!(core.scene.is_empty());
    assert_eq!(core.selection(), None);
    assert!(core.scene.get(id).is_none());
}

#[test]
fn property_ops_after_delete_are_silent() {
    let (mut core, _) = core_with_chair();
    core.delete_selected();
    assert!(core.set_rotation(45.0).is_empty());
    assert!(core.set_scale(1.5).is_empty());
    assert!(core.delete_selected().is_empty());
}

#[test]
fn deleting_the_dragged_item_resets_the_drag() {
    let (mut core, _) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    assert!(core.is_dragging());
    core.delete_selected();
    assert!(!core.is_dragging());
    // The next move must not resurrect the dead id.
    let actions = core.on_pointer_move(pt(50.0, 50.0), &identity());
    assert!(!actions.contains(&Action::ItemsChanged));
    assert!(core.scene.is_empty());
}

// =============================================================
// View controls
// =============================================================

#[test]
fn set_mode_switches_and_dedups() {
    let mut core = EngineCore::new();
    assert!(core.set_mode(RenderMode::Technical).is_empty());
    let actions = core.set_mode(RenderMode::Visual);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.ui.mode, RenderMode::Visual);
    assert!(core.set_mode(RenderMode::Visual).is_empty());
}

#[test]
fn mode_switch_preserves_scene_and_selection() {
    let (mut core, id) = core_with_chair();
    core.set_rotation(45.0);
    core.set_scale(2.0);
    core.set_mode(RenderMode::Visual);
    assert_eq!(core.selection(), Some(id));
    let item = core.selected_item().unwrap();
    assert_eq!(item.rotation, 45.0);
    assert_eq!(item.scale, 2.0);
    assert_eq!((item.x, item.y), (275.0, 400.0));
}

#[test]
fn set_show_dimensions_dedups() {
    let mut core = EngineCore::new();
    assert!(core.set_show_dimensions(true).is_empty());
    assert_eq!(core.set_show_dimensions(false), vec![Action::RenderNeeded]);
    assert!(!core.ui.show_dimensions);
    assert!(core.set_show_dimensions(false).is_empty());
}

#[test]
fn set_hovered_zone_reports_and_dedups() {
    let mut core = EngineCore::new();
    let actions = core.set_hovered_zone(Some(ZoneId::Top));
    assert_eq!(
        actions,
        vec![Action::HoverChanged(Some(ZoneId::Top)), Action::RenderNeeded]
    );
    assert!(core.set_hovered_zone(Some(ZoneId::Top)).is_empty());

    let actions = core.set_hovered_zone(None);
    assert_eq!(actions, vec![Action::HoverChanged(None), Action::RenderNeeded]);
    assert!(core.set_hovered_zone(None).is_empty());
}

// =============================================================
// Pointer: selection
// =============================================================

#[test]
fn pointer_down_on_an_item_selects_and_starts_dragging() {
    let mut core = EngineCore::new();
    let id = core.add_item(FurnitureKind::Table4);
    core.ui.selected_id = None; // simulate a prior background click

    let actions = core.on_pointer_down(pt(275.0, 400.0), &identity());
    assert_eq!(
        actions,
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    );
    assert_eq!(core.selection(), Some(id));
    assert!(core.is_dragging());
}

#[test]
fn pointer_down_on_the_selected_item_skips_the_selection_action() {
    let (mut core, id) = core_with_chair();
    let actions = core.on_pointer_down(pt(275.0, 400.0), &identity());
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.selection(), Some(id));
    assert!(core.is_dragging());
}

#[test]
fn pointer_down_on_the_background_clears_the_selection() {
    let (mut core, _) = core_with_chair();
    let actions = core.on_pointer_down(pt(50.0, 700.0), &identity());
    assert_eq!(
        actions,
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    );
    assert_eq!(core.selection(), None);
    assert!(!core.is_dragging());
}

#[test]
fn background_click_with_no_selection_is_silent() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(50.0, 700.0), &identity());
    assert!(actions.is_empty());
}

#[test]
fn pointer_down_picks_the_topmost_of_overlapping_items() {
    let mut core = EngineCore::new();
    core.add_item(FurnitureKind::Table4);
    let top = core.add_item(FurnitureKind::Table4);
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    assert_eq!(core.selection(), Some(top));
}

#[test]
fn hidden_items_can_be_selected_and_dragged() {
    let (mut core, id) = core_with_chair();
    core.toggle_visibility();
    core.ui.selected_id = None;

    let actions = core.on_pointer_down(pt(275.0, 400.0), &identity());
    assert_eq!(
        actions,
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    );
    core.on_pointer_move(pt(300.0, 420.0), &identity());
    assert_eq!(selected_pos(&core), (300.0, 420.0));
    assert!(!core.selected_item().unwrap().visible);
}

// =============================================================
// Pointer: dragging
// =============================================================

#[test]
fn dragging_writes_every_move() {
    let (mut core, _) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());

    let actions = core.on_pointer_move(pt(280.0, 405.0), &identity());
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(selected_pos(&core), (280.0, 405.0));

    core.on_pointer_move(pt(100.0, 100.0), &identity());
    assert_eq!(selected_pos(&core), (100.0, 100.0));
}

#[test]
fn drag_positions_are_not_clamped_to_the_outline() {
    let (mut core, _) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    core.on_pointer_move(pt(-50.0, 900.0), &identity());
    assert_eq!(selected_pos(&core), (-50.0, 900.0));
}

#[test]
fn pointer_up_ends_the_drag_and_keeps_selection_and_position() {
    let (mut core, id) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    core.on_pointer_move(pt(310.0, 380.0), &identity());

    let actions = core.on_pointer_up();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(!core.is_dragging());
    assert_eq!(core.selection(), Some(id));
    assert_eq!(selected_pos(&core), (310.0, 380.0));
}

#[test]
fn pointer_up_while_idle_is_silent() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn moves_after_pointer_up_no_longer_drag() {
    let (mut core, _) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    core.on_pointer_up();
    core.on_pointer_move(pt(100.0, 100.0), &identity());
    assert_eq!(selected_pos(&core), (275.0, 400.0));
}

#[test]
fn pointer_leave_behaves_like_pointer_up() {
    let (mut core, id) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    core.on_pointer_move(pt(300.0, 300.0), &identity());

    let actions = core.on_pointer_leave();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(!core.is_dragging());
    assert_eq!(core.selection(), Some(id));
    assert_eq!(selected_pos(&core), (300.0, 300.0));
    assert!(core.on_pointer_leave().is_empty());
}

#[test]
fn drag_applies_the_viewport_transform() {
    // Canvas shown at half size, offset by (10, 20): the item at the spawn
    // point appears at viewport (147.5, 220).
    let view = ViewTransform::from_bounding_rect(10.0, 20.0, 275.0, 400.0);
    let (mut core, _) = core_with_chair();

    let actions = core.on_pointer_down(pt(147.5, 220.0), &view);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(core.is_dragging());

    core.on_pointer_move(pt(160.0, 240.0), &view);
    assert_eq!(selected_pos(&core), (300.0, 440.0));
}

// =============================================================
// Pointer: hover tracking
// =============================================================

#[test]
fn idle_moves_track_the_hovered_zone() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_move(pt(200.0, 150.0), &identity());
    assert_eq!(
        actions,
        vec![Action::HoverChanged(Some(ZoneId::Top)), Action::RenderNeeded]
    );
    assert_eq!(core.hovered_zone(), Some(ZoneId::Top));
}

#[test]
fn moves_within_the_same_zone_are_silent() {
    let mut core = EngineCore::new();
    core.on_pointer_move(pt(200.0, 150.0), &identity());
    assert!(core.on_pointer_move(pt(210.0, 155.0), &identity()).is_empty());
    assert_eq!(core.hovered_zone(), Some(ZoneId::Top));
}

#[test]
fn leaving_the_outline_clears_the_hover() {
    let mut core = EngineCore::new();
    core.on_pointer_move(pt(200.0, 150.0), &identity());
    let actions = core.on_pointer_move(pt(50.0, 50.0), &identity());
    assert_eq!(actions, vec![Action::HoverChanged(None), Action::RenderNeeded]);
    assert_eq!(core.hovered_zone(), None);
}

#[test]
fn crossing_between_zones_reports_the_new_zone() {
    let mut core = EngineCore::new();
    core.on_pointer_move(pt(200.0, 150.0), &identity());
    let actions = core.on_pointer_move(pt(300.0, 300.0), &identity());
    assert_eq!(
        actions,
        vec![Action::HoverChanged(Some(ZoneId::Jacuzzi)), Action::RenderNeeded]
    );
}

#[test]
fn hover_is_not_tracked_while_dragging() {
    let (mut core, _) = core_with_chair();
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    // Drag into the gourmet zone; the hover must not change underneath.
    let actions = core.on_pointer_move(pt(200.0, 150.0), &identity());
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.hovered_zone(), None);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_key_deletes_the_selection() {
    let (mut core, _) = core_with_chair();
    let actions = core.on_key_down(&Key("Delete".to_string()));
    assert_eq!(
        actions,
        vec![
            Action::ItemsChanged,
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]
    );
    assert!(core.scene.is_empty());
}

#[test]
fn backspace_deletes_too() {
    let (mut core, _) = core_with_chair();
    core.on_key_down(&Key("Backspace".to_string()));
    assert!(core.scene.is_empty());
}

#[test]
fn other_keys_are_ignored() {
    let (mut core, id) = core_with_chair();
    assert!(core.on_key_down(&Key("Enter".to_string())).is_empty());
    assert!(core.on_key_down(&Key("a".to_string())).is_empty());
    assert_eq!(core.selection(), Some(id));
    assert_eq!(core.scene.len(), 1);
}

#[test]
fn delete_key_without_selection_is_silent() {
    let mut core = EngineCore::new();
    assert!(core.on_key_down(&Key("Delete".to_string())).is_empty());
}

// =============================================================
// Scenario: a full editing session
// =============================================================

#[test]
fn place_style_move_and_delete() {
    let mut core = EngineCore::new();

    // Place a lounger and turn it to face the spa.
    let lounger = core.add_item(FurnitureKind::Lounger);
    core.set_rotation(90.0);
    core.set_scale(1.2);

    // Drag it into the extension zone.
    core.on_pointer_down(pt(275.0, 400.0), &identity());
    core.on_pointer_move(pt(370.0, 500.0), &identity());
    core.on_pointer_up();
    assert_eq!(selected_pos(&core), (370.0, 500.0));

    // Add a plant; the lounger loses the selection but keeps its state.
    let plant = core.add_item(FurnitureKind::Plant);
    assert_eq!(core.selection(), Some(plant));
    let kept = core.scene.get(lounger).unwrap();
    assert_eq!(kept.rotation, 90.0);
    assert_eq!(kept.scale, 1.2);

    // Click the lounger again and delete it with the keyboard.
    core.on_pointer_down(pt(370.0, 500.0), &identity());
    core.on_pointer_up();
    assert_eq!(core.selection(), Some(lounger));
    core.on_key_down(&Key("Delete".to_string()));
    assert_eq!(core.scene.len(), 1);
    assert!(core.scene.get(plant).is_some());
    assert_eq!(core.selection(), None);
}
