//! Floorplan data model: the room, its walls, placed objects, and the
//! aggregate snapshot consumed by external views.
//!
//! Everything here is plain data with no behavior beyond construction.
//! Geometry values arrive pre-computed from the interaction layer and are
//! stored as-is; the wire format is camelCase JSON for compatibility with
//! the existing 2D canvas and 3D preview consumers.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a wall. Uniqueness is the caller's responsibility;
/// the store never enforces it.
pub type WallId = String;

/// Unique identifier for a placed object.
pub type ObjectId = String;

/// A coordinate pair in floorplan space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular extent of a room, used to derive its center.
///
/// No ordering is assumed between `left`/`right` or `top`/`bottom`;
/// degenerate bounds still yield a consistent midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// The active room's footprint. `bounds` absent means the room's position
/// on the canvas is not yet known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

/// Display surface dimensions for the plan canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

/// A wall segment belonging to either the interior or exterior collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub start: Point,
    pub end: Point,
}

impl Wall {
    /// Create a wall with a freshly minted id.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { id: Uuid::new_v4().to_string(), start, end }
    }
}

/// A furniture-like item placed in the room: 3D dimensions, planar
/// position, rotation, and an optional box-stacking relationship.
///
/// `box_id` is a soft reference to another placed object; the store never
/// validates it and never cascade-deletes dependents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: ObjectId,
    pub name: String,
    pub category: String,
    pub glb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub position: Point,
    /// Rotation around the vertical axis, in radians.
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether this object sits on top of a box object.
    #[serde(default)]
    pub is_on_box: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_id: Option<ObjectId>,
    /// Whether this object can carry other objects on top of it.
    #[serde(default)]
    pub is_box: bool,
}

impl PlacedObject {
    /// Create a placed object with a freshly minted id at the given
    /// position. Dimensions are `width` x `depth` footprint, `height` tall.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        glb_url: impl Into<String>,
        width: f64,
        depth: f64,
        height: f64,
        position: Point,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            glb_url: glb_url.into(),
            description: None,
            width,
            depth,
            height,
            position,
            rotation: 0.0,
            color: None,
            is_on_box: false,
            box_id: None,
            is_box: false,
        }
    }
}

/// Room dimensions plus derived center, as exposed in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSize {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

/// Aggregate read-only snapshot of the whole floorplan.
///
/// This is the single read contract for external consumers (renderer,
/// 3D preview, exporter). `room_size` serializes as `null` while no room
/// is set. Always obtain it from the store's derived view rather than
/// assembling the pieces by hand, so the parts are consistent with each
/// other at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorplanData {
    pub exterior_walls: Vec<Wall>,
    pub interior_walls: Vec<Wall>,
    pub placed_objects: Vec<PlacedObject>,
    pub room_size: Option<RoomSize>,
    pub canvas_size: CanvasSize,
}
