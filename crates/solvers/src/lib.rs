//! Solvers for locating points on implicit planar curves.
//!
//! - [`grid`]: bounded spatial grid that deduplicates points to one per cell
//! - [`equation`]: implicit equations, their distance field, and the
//!   seed-and-descend search built on the grid

pub mod equation;
pub mod grid;
