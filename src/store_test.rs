#![allow(clippy::float_cmp)]

use leptos::prelude::Owner;

use super::*;
use crate::model::Bounds;

/// Run a test body under a reactive owner so signals, memos, and context
/// behave as they do inside a running app.
fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

fn room() -> Room {
    Room {
        width: 10.0,
        height: 20.0,
        bounds: Some(Bounds { left: 0.0, top: 0.0, right: 10.0, bottom: 20.0 }),
    }
}

fn wall(id: &str) -> Wall {
    Wall {
        id: id.to_owned(),
        start: Point::new(0.0, 0.0),
        end: Point::new(0.0, 100.0),
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_store_is_empty_with_default_canvas() {
    with_owner(|| {
        let store = FloorplanStore::new();
        assert!(!store.has_room());
        assert!(store.current_room().is_none());
        assert!(store.interior_walls().is_empty());
        assert!(store.exterior_walls().is_empty());
        assert!(store.placed_objects().is_empty());
        assert_eq!(store.canvas_size(), CanvasSize { width: 800.0, height: 600.0 });
    });
}

// =============================================================
// Memos observe mutations
// =============================================================

#[test]
fn set_room_flips_has_room_memo() {
    with_owner(|| {
        let store = FloorplanStore::new();
        assert!(!store.has_room());
        store.set_room(room());
        assert!(store.has_room());
        store.clear_room();
        assert!(!store.has_room());
    });
}

#[test]
fn room_center_memo_tracks_bounds() {
    with_owner(|| {
        let store = FloorplanStore::new();
        assert_eq!(store.room_center_position(), Point::new(0.0, 0.0));
        store.set_room(room());
        assert_eq!(store.room_center_position(), Point::new(5.0, 10.0));
    });
}

#[test]
fn floorplan_data_memo_reflects_mutations() {
    with_owner(|| {
        let store = FloorplanStore::new();
        assert!(store.floorplan_data().room_size.is_none());

        store.set_room(room());
        store.add_interior_wall(wall("i"));
        store.add_exterior_wall(wall("e"));

        let data = store.floorplan_data();
        let size = data.room_size.unwrap();
        assert_eq!(size.center_x, 5.0);
        assert_eq!(size.center_y, 10.0);
        assert_eq!(data.interior_walls.len(), 1);
        assert_eq!(data.exterior_walls.len(), 1);

        store.remove_interior_wall("i");
        assert!(store.floorplan_data().interior_walls.is_empty());
    });
}

// =============================================================
// Mutators delegate with core semantics
// =============================================================

#[test]
fn store_remove_filters_duplicate_ids() {
    with_owner(|| {
        let store = FloorplanStore::new();
        store.add_interior_wall(wall("dup"));
        store.add_interior_wall(wall("dup"));
        store.remove_interior_wall("dup");
        assert!(store.interior_walls().is_empty());
    });
}

#[test]
fn store_clear_room_empties_all_collections() {
    with_owner(|| {
        let store = FloorplanStore::new();
        store.set_room(room());
        store.add_interior_wall(wall("i"));
        store.add_exterior_wall(wall("e"));
        store.add_placed_object(PlacedObject::new(
            "sofa",
            "seating",
            "/models/sofa.glb",
            2.0,
            0.9,
            0.8,
            Point::new(1.0, 1.0),
        ));
        store.clear_room();
        assert!(!store.has_room());
        assert!(store.interior_walls().is_empty());
        assert!(store.exterior_walls().is_empty());
        assert!(store.placed_objects().is_empty());
    });
}

// =============================================================
// Context helpers
// =============================================================

#[test]
fn provide_and_use_share_one_store() {
    with_owner(|| {
        let provided = provide_floorplan_store();
        provided.set_room(room());
        let used = use_floorplan_store();
        assert!(used.has_room());
    });
}
