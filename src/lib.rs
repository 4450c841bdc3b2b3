//! # floorplan-client
//!
//! Client-side state layer for the floorplan editor. Holds the single shared
//! model — the active room, its interior/exterior walls, placed furniture
//! objects, and the canvas display size — so the 2D plan canvas, the 3D
//! preview, and the property panels can observe and mutate one source of
//! truth without prop-drilling.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Plain data entities and the aggregate snapshot wire types |
//! | [`state`] | Pure, synchronous state core with all mutators and derived views |
//! | [`store`] | Reactive shell: signals, memos, and context helpers |
//!
//! Rendering, drag/resize interaction, and persistence live in the host
//! application; this crate is in-memory bookkeeping only.

pub mod model;
pub mod state;
pub mod store;
