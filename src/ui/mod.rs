//! Line-oriented front end.
//!
//! The views are deliberately thin: they validate input, dispatch
//! actions through the store, and print snapshots of the resulting
//! state. Nothing in here holds state of its own beyond the simulator
//! handles.
//!
//! - `input`: command parsing and dispatch
//! - `render`: state snapshot printing

pub mod input;
pub mod render;
