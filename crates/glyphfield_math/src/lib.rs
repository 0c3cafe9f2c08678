//! 2D Mathematics Library
//!
//! This crate provides the 2D vector type shared by the glyphfield crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in surface (pixel) coordinates, y pointing down

mod vec2;

pub use vec2::Vec2;
