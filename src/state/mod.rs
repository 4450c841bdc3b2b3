//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State logic lives in plain structs with pure, synchronous methods so it
//! can be tested without a reactive runtime. The reactive shell in
//! [`crate::store`] wraps this core in signals and memos.

pub mod floorplan;
