//! Pointer input for the particle field
//!
//! This crate turns raw winit cursor, mouse-button and touch events into
//! surface-local pointer events the field understands.

mod pointer_tracker;

pub use pointer_tracker::{PointerEvent, PointerTracker};
