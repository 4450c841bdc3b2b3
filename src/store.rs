//! Reactive shell over the floorplan state core.
//!
//! `FloorplanStore` wraps [`FloorplanState`] in an `RwSignal` and exposes the
//! derived views as `Memo`s, so canvas, preview, and panel components all
//! observe one shared model. Mutation goes through the store's methods only;
//! each method commits exactly one signal update, so observers are notified
//! once per operation, after it completes. Reads hand out cloned snapshots —
//! the signal's interior lists are the sole mutable copies.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use crate::model::{CanvasSize, FloorplanData, PlacedObject, Point, Room, Wall};
use crate::state::floorplan::FloorplanState;

/// Shared reactive floorplan store. `Copy`, so components can grab it from
/// context and move it into closures freely.
#[derive(Clone, Copy)]
pub struct FloorplanStore {
    state: RwSignal<FloorplanState>,
    has_room: Memo<bool>,
    room_center_position: Memo<Point>,
    floorplan_data: Memo<FloorplanData>,
}

impl FloorplanStore {
    /// Create a store with no room, empty collections, and the default
    /// 800x600 canvas.
    #[must_use]
    pub fn new() -> Self {
        let state = RwSignal::new(FloorplanState::default());
        Self {
            state,
            has_room: Memo::new(move |_| state.with(FloorplanState::has_room)),
            room_center_position: Memo::new(move |_| {
                state.with(FloorplanState::room_center_position)
            }),
            floorplan_data: Memo::new(move |_| state.with(FloorplanState::floorplan_data)),
        }
    }

    // --- Derived views ---

    /// Whether a room is currently active.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.has_room.get()
    }

    /// Center of the active room, or the origin when unknown.
    #[must_use]
    pub fn room_center_position(&self) -> Point {
        self.room_center_position.get()
    }

    /// Aggregate snapshot for external consumers. This is the read contract
    /// for the 3D preview and exporters; never assemble the pieces by hand.
    #[must_use]
    pub fn floorplan_data(&self) -> FloorplanData {
        self.floorplan_data.get()
    }

    // --- Reads ---

    #[must_use]
    pub fn current_room(&self) -> Option<Room> {
        self.state.with(|s| s.current_room.clone())
    }

    #[must_use]
    pub fn interior_walls(&self) -> Vec<Wall> {
        self.state.with(|s| s.interior_walls.clone())
    }

    #[must_use]
    pub fn exterior_walls(&self) -> Vec<Wall> {
        self.state.with(|s| s.exterior_walls.clone())
    }

    #[must_use]
    pub fn placed_objects(&self) -> Vec<PlacedObject> {
        self.state.with(|s| s.placed_objects.clone())
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.state.with(|s| s.canvas_size)
    }

    // --- Room / canvas ---

    pub fn set_room(&self, room: Room) {
        self.state.update(|s| s.set_room(room));
    }

    pub fn clear_room(&self) {
        self.state.update(FloorplanState::clear_room);
    }

    pub fn set_canvas_size(&self, size: CanvasSize) {
        self.state.update(|s| s.set_canvas_size(size));
    }

    // --- Interior walls ---

    pub fn add_interior_wall(&self, wall: Wall) {
        self.state.update(|s| s.add_interior_wall(wall));
    }

    pub fn update_interior_wall(&self, id: &str, wall: Wall) {
        self.state.update(|s| s.update_interior_wall(id, wall));
    }

    pub fn remove_interior_wall(&self, id: &str) {
        self.state.update(|s| s.remove_interior_wall(id));
    }

    pub fn clear_interior_walls(&self) {
        self.state.update(FloorplanState::clear_interior_walls);
    }

    // --- Exterior walls ---

    pub fn add_exterior_wall(&self, wall: Wall) {
        self.state.update(|s| s.add_exterior_wall(wall));
    }

    pub fn update_exterior_wall(&self, id: &str, wall: Wall) {
        self.state.update(|s| s.update_exterior_wall(id, wall));
    }

    pub fn remove_exterior_wall(&self, id: &str) {
        self.state.update(|s| s.remove_exterior_wall(id));
    }

    pub fn clear_exterior_walls(&self) {
        self.state.update(FloorplanState::clear_exterior_walls);
    }

    // --- Placed objects ---

    pub fn add_placed_object(&self, object: PlacedObject) {
        self.state.update(|s| s.add_placed_object(object));
    }

    pub fn update_placed_object(&self, id: &str, object: PlacedObject) {
        self.state.update(|s| s.update_placed_object(id, object));
    }

    pub fn remove_placed_object(&self, id: &str) {
        self.state.update(|s| s.remove_placed_object(id));
    }

    pub fn clear_placed_objects(&self) {
        self.state.update(FloorplanState::clear_placed_objects);
    }

    // --- Diagnostics ---

    /// Log a one-line summary of the current state without tracking it.
    pub fn log_current_state(&self) {
        self.state.with_untracked(FloorplanState::log_current_state);
    }
}

impl Default for FloorplanStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the store and provide it via context for child components.
pub fn provide_floorplan_store() -> FloorplanStore {
    let store = FloorplanStore::new();
    provide_context(store);
    store
}

/// Grab the shared store from context. Panics if no ancestor provided one.
#[must_use]
pub fn use_floorplan_store() -> FloorplanStore {
    expect_context::<FloorplanStore>()
}
