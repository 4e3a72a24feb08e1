//! Exact 2D geometry on grid points.
//!
//! Purpose
//! - Provide the `Point` value type and an angular comparator that orders
//!   directions counter-clockwise without floating point, so hull decisions on
//!   integer inputs are exact and deterministic.
//!
//! Contents
//! - `types`: `Point`, `Coord`.
//! - `angle`: `Region` sign-pair table and `compare_angle`.
//!
//! This module is a leaf: no I/O, no dependency on the rest of the crate.

pub mod angle;
mod types;

pub use angle::{compare_angle, Region};
pub use types::{Coord, Point};
