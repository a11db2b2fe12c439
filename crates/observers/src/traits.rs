//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, enabling observers
//! to work generically across different solvers.
//!
//! - [`HasGrid`]: events that carry the solver's point grid
//! - [`HasPass`]: events that carry a pass counter
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use pluma_core::Observer;
//! use pluma_observers::traits::HasGrid;
//!
//! struct Largest(usize);
//!
//! impl<E: HasGrid> Observer<E, Infallible> for Largest {
//!     fn observe(&mut self, event: &E) -> Option<Infallible> {
//!         self.0 = self.0.max(event.grid().len());
//!         None
//!     }
//! }
//! ```

use pluma_solvers::{equation::vertical_scan, grid::PointGrid};

/// An event that carries the solver's point grid.
pub trait HasGrid {
    /// Returns the grid at the time of the event.
    fn grid(&self) -> &PointGrid;
}

/// An event that carries a pass counter.
pub trait HasPass {
    /// Returns the number of completed passes (0 before the first pass).
    fn pass(&self) -> usize;
}

// --- vertical_scan::Event ---

impl HasGrid for vertical_scan::Event<'_> {
    fn grid(&self) -> &PointGrid {
        vertical_scan::Event::grid(self)
    }
}

impl HasPass for vertical_scan::Event<'_> {
    fn pass(&self) -> usize {
        vertical_scan::Event::pass(self)
    }
}
