//! Floorplan state core: the authoritative in-memory model and its
//! mutation/derivation logic.
//!
//! All operations are synchronous and infallible. Inputs are trusted: the
//! interaction layer owns validation, snapping, and collision; this layer
//! is bookkeeping over flat, insertion-ordered lists. Mutations by id scan
//! for the first match; removals filter out every match, so duplicate ids
//! (which the store tolerates) are all removed at once.

#[cfg(test)]
#[path = "floorplan_test.rs"]
mod floorplan_test;

use crate::model::{CanvasSize, FloorplanData, PlacedObject, Point, Room, RoomSize, Wall};

/// The whole floorplan model: the active room, wall collections, placed
/// objects, and the canvas display size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloorplanState {
    pub current_room: Option<Room>,
    pub interior_walls: Vec<Wall>,
    pub exterior_walls: Vec<Wall>,
    pub placed_objects: Vec<PlacedObject>,
    pub canvas_size: CanvasSize,
}

impl FloorplanState {
    // --- Derived views ---

    /// Whether a room is currently active.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.current_room.is_some()
    }

    /// Midpoint of the active room's bounds, or the origin when no room is
    /// set or the room has no bounds yet.
    #[must_use]
    pub fn room_center_position(&self) -> Point {
        let Some(bounds) = self.current_room.as_ref().and_then(|r| r.bounds) else {
            return Point::new(0.0, 0.0);
        };
        Point {
            x: (bounds.left + bounds.right) / 2.0,
            y: (bounds.top + bounds.bottom) / 2.0,
        }
    }

    /// Aggregate snapshot for external consumers. `room_size` is present
    /// exactly when a room is set, with its center taken from
    /// [`Self::room_center_position`].
    #[must_use]
    pub fn floorplan_data(&self) -> FloorplanData {
        let room_size = self.current_room.as_ref().map(|room| {
            let center = self.room_center_position();
            RoomSize {
                width: room.width,
                height: room.height,
                center_x: center.x,
                center_y: center.y,
            }
        });
        FloorplanData {
            exterior_walls: self.exterior_walls.clone(),
            interior_walls: self.interior_walls.clone(),
            placed_objects: self.placed_objects.clone(),
            room_size,
            canvas_size: self.canvas_size,
        }
    }

    // --- Room / canvas ---

    /// Replace the active room wholesale. Walls and objects are untouched.
    pub fn set_room(&mut self, room: Room) {
        self.current_room = Some(room);
    }

    /// Drop the active room and empty every collection.
    pub fn clear_room(&mut self) {
        self.current_room = None;
        self.interior_walls.clear();
        self.exterior_walls.clear();
        self.placed_objects.clear();
    }

    /// Replace the canvas display size. Values are not range-checked.
    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.canvas_size = size;
    }

    // --- Interior walls ---

    pub fn add_interior_wall(&mut self, wall: Wall) {
        self.interior_walls.push(wall);
    }

    /// Replace the first interior wall whose id matches, preserving its
    /// position in the list. No-op when the id is absent. The replacement
    /// keeps whatever id it carries, which need not equal `id`.
    pub fn update_interior_wall(&mut self, id: &str, wall: Wall) {
        if let Some(slot) = self.interior_walls.iter_mut().find(|w| w.id == id) {
            *slot = wall;
        }
    }

    /// Remove every interior wall whose id matches. No-op when absent.
    pub fn remove_interior_wall(&mut self, id: &str) {
        self.interior_walls.retain(|w| w.id != id);
    }

    pub fn clear_interior_walls(&mut self) {
        self.interior_walls.clear();
    }

    // --- Exterior walls ---

    pub fn add_exterior_wall(&mut self, wall: Wall) {
        self.exterior_walls.push(wall);
    }

    /// Same first-match replace-in-place semantics as
    /// [`Self::update_interior_wall`].
    pub fn update_exterior_wall(&mut self, id: &str, wall: Wall) {
        if let Some(slot) = self.exterior_walls.iter_mut().find(|w| w.id == id) {
            *slot = wall;
        }
    }

    /// Remove every exterior wall whose id matches. No-op when absent.
    pub fn remove_exterior_wall(&mut self, id: &str) {
        self.exterior_walls.retain(|w| w.id != id);
    }

    pub fn clear_exterior_walls(&mut self) {
        self.exterior_walls.clear();
    }

    // --- Placed objects ---

    pub fn add_placed_object(&mut self, object: PlacedObject) {
        self.placed_objects.push(object);
    }

    /// Same first-match replace-in-place semantics as the wall updates.
    pub fn update_placed_object(&mut self, id: &str, object: PlacedObject) {
        if let Some(slot) = self.placed_objects.iter_mut().find(|o| o.id == id) {
            *slot = object;
        }
    }

    /// Remove every placed object whose id matches. Objects referencing the
    /// removed one via `box_id` are left alone; the link is soft.
    pub fn remove_placed_object(&mut self, id: &str) {
        self.placed_objects.retain(|o| o.id != id);
    }

    pub fn clear_placed_objects(&mut self) {
        self.placed_objects.clear();
    }

    // --- Diagnostics ---

    /// Log a one-line summary of the current state.
    pub fn log_current_state(&self) {
        leptos::logging::log!(
            "floorplan: room={} interior_walls={} exterior_walls={} objects={} canvas={}x{}",
            if self.has_room() { "set" } else { "none" },
            self.interior_walls.len(),
            self.exterior_walls.len(),
            self.placed_objects.len(),
            self.canvas_size.width,
            self.canvas_size.height,
        );
    }
}
