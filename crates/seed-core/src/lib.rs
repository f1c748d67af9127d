//! Core types, geometry, and error definitions for the Seed box-layout engine.
//!
//! This crate provides the foundational types shared by the other crates:
//! - Entity handles and per-box value types (direction, margins, pixel sizes)
//! - Clip-space geometry and the viewport pixel/clip transform
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::*;
pub use types::*;
