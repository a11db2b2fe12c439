//! Core traits and types for Pluma.
//!
//! This crate defines the shared abstractions the solvers and observers build
//! on:
//!
//! - [`Point`] and [`BoundingRect`]: planar value types
//! - [`ScalarField`]: a callable mapping a planar point to a real number
//! - [`Observer`]: receives solver events and optionally returns control actions

mod field;
mod geometry;
mod observer;

pub use field::ScalarField;
pub use geometry::{BoundingRect, Point, RectError};
pub use observer::Observer;
