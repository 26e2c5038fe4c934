#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn item(kind: FurnitureKind) -> FurnitureItem {
    FurnitureItem {
        id: Uuid::new_v4(),
        kind,
        x: 100.0,
        y: 200.0,
        rotation: 45.0,
        scale: 1.5,
        visible: true,
    }
}

// =============================================================
// Adding items
// =============================================================

#[test]
fn add_places_at_spawn_with_default_transform() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Sofa);
    let placed = scene.get(id).unwrap();
    assert_eq!(placed.kind, FurnitureKind::Sofa);
    assert_eq!(placed.x, SPAWN_X);
    assert_eq!(placed.y, SPAWN_Y);
    assert_eq!(placed.rotation, 0.0);
    assert_eq!(placed.scale, 1.0);
    assert!(placed.visible);
}

#[test]
fn add_returns_unique_ids() {
    let mut scene = Scene::new();
    let mut ids = Vec::new();
    for kind in FurnitureKind::ALL {
        ids.push(scene.add(kind));
    }
    assert_eq!(scene.len(), 10);
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn insert_preserves_the_given_item() {
    let mut scene = Scene::new();
    let seeded = item(FurnitureKind::Table4);
    let id = seeded.id;
    scene.insert(seeded);
    let got = scene.get(id).unwrap();
    assert_eq!(got.x, 100.0);
    assert_eq!(got.rotation, 45.0);
    assert_eq!(got.scale, 1.5);
}

#[test]
fn items_keep_insertion_order() {
    let mut scene = Scene::new();
    let a = scene.add(FurnitureKind::Chair);
    let b = scene.add(FurnitureKind::Plant);
    let c = scene.add(FurnitureKind::Umbrella);
    let order: Vec<ItemId> = scene.items().iter().map(|i| i.id).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn mutation_does_not_reorder() {
    let mut scene = Scene::new();
    let a = scene.add(FurnitureKind::Chair);
    let b = scene.add(FurnitureKind::Plant);
    scene.update_position(a, 50.0, 60.0);
    scene.set_rotation(a, 90.0);
    scene.toggle_visibility(a);
    let order: Vec<ItemId> = scene.items().iter().map(|i| i.id).collect();
    assert_eq!(order, vec![a, b]);
}

// =============================================================
// Position
// =============================================================

#[test]
fn update_position_moves_the_item() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Lounger);
    scene.update_position(id, 12.5, -40.0);
    let moved = scene.get(id).unwrap();
    assert_eq!(moved.x, 12.5);
    assert_eq!(moved.y, -40.0);
}

#[test]
fn positions_are_not_clamped() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Plant);
    scene.update_position(id, -500.0, 9999.0);
    let moved = scene.get(id).unwrap();
    assert_eq!(moved.x, -500.0);
    assert_eq!(moved.y, 9999.0);
}

#[test]
fn update_position_ignores_unknown_id() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Sofa);
    scene.update_position(Uuid::new_v4(), 1.0, 2.0);
    let untouched = scene.get(id).unwrap();
    assert_eq!(untouched.x, SPAWN_X);
    assert_eq!(untouched.y, SPAWN_Y);
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn rotation_is_normalized_into_the_circle() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Chair);

    scene.set_rotation(id, 370.0);
    assert_eq!(scene.get(id).unwrap().rotation, 10.0);

    scene.set_rotation(id, -30.0);
    assert_eq!(scene.get(id).unwrap().rotation, 330.0);

    scene.set_rotation(id, 360.0);
    assert_eq!(scene.get(id).unwrap().rotation, 0.0);

    scene.set_rotation(id, 180.0);
    assert_eq!(scene.get(id).unwrap().rotation, 180.0);
}

#[test]
fn set_rotation_ignores_unknown_id() {
    let mut scene = Scene::new();
    scene.set_rotation(Uuid::new_v4(), 90.0);
    assert!(scene.is_empty());
}

// =============================================================
// Scale
// =============================================================

#[test]
fn scale_clamps_to_catalog_bounds() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Umbrella);

    scene.set_scale(id, 0.2);
    assert_eq!(scene.get(id).unwrap().scale, SCALE_MIN);

    scene.set_scale(id, 5.0);
    assert_eq!(scene.get(id).unwrap().scale, SCALE_MAX);

    scene.set_scale(id, 1.7);
    assert_eq!(scene.get(id).unwrap().scale, 1.7);
}

#[test]
fn scale_accepts_the_exact_bounds() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Table4);
    scene.set_scale(id, SCALE_MIN);
    assert_eq!(scene.get(id).unwrap().scale, SCALE_MIN);
    scene.set_scale(id, SCALE_MAX);
    assert_eq!(scene.get(id).unwrap().scale, SCALE_MAX);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_visibility_flips_back_and_forth() {
    let mut scene = Scene::new();
    let id = scene.add(FurnitureKind::Hammock);
    assert!(scene.get(id).unwrap().visible);
    scene.toggle_visibility(id);
    assert!(!scene.get(id).unwrap().visible);
    scene.toggle_visibility(id);
    assert!(scene.get(id).unwrap().visible);
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_returns_the_item_and_shrinks_the_scene() {
    let mut scene = Scene::new();
    let a = scene.add(FurnitureKind::Chair);
    let b = scene.add(FurnitureKind::Plant);
    let removed = scene.remove(a).unwrap();
    assert_eq!(removed.id, a);
    assert_eq!(scene.len(), 1);
    assert!(scene.get(a).is_none());
    assert!(scene.get(b).is_some());
}

#[test]
fn remove_unknown_id_returns_none() {
    let mut scene = Scene::new();
    scene.add(FurnitureKind::Chair);
    assert!(scene.remove(Uuid::new_v4()).is_none());
    assert_eq!(scene.len(), 1);
}

#[test]
fn empty_scene_reports_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.items().is_empty());
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn kind_serializes_in_camel_case() {
    assert_eq!(serde_json::to_string(&FurnitureKind::Table4).unwrap(), "\"table4\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::CoffeeTable).unwrap(), "\"coffeeTable\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::StringLights).unwrap(), "\"stringLights\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::Plant).unwrap(), "\"plant\"");
}

#[test]
fn kind_round_trips_through_json() {
    for kind in FurnitureKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let back: FurnitureKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn item_round_trips_through_json() {
    let original = item(FurnitureKind::StringLights);
    let json = serde_json::to_string(&original).unwrap();
    let back: FurnitureItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, original.id);
    assert_eq!(back.kind, original.kind);
    assert_eq!(back.x, original.x);
    assert_eq!(back.y, original.y);
    assert_eq!(back.rotation, original.rotation);
    assert_eq!(back.scale, original.scale);
    assert_eq!(back.visible, original.visible);
}
