//! Implicit planar equations and their distance field.
//!
//! An [`Equation`] pairs two scalar fields `left` and `right` and describes the
//! curve `left(x, y) = right(x, y)`. Its squared distance
//! `D(x, y) = (left(x, y) - right(x, y))²` is zero exactly on that curve, and
//! solvers in this module drive points toward the zero set of `D`.
//!
//! # Solvers
//!
//! - [`vertical_scan`]: seeds points along a vertical line and descends them
//!   toward the curve with a fixed budget of one-axis gradient steps

pub mod vertical_scan;

use pluma_core::ScalarField;

/// The implicit equation `left(x, y) = right(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct Equation<L, R> {
    left: L,
    right: R,
}

impl<L, R> Equation<L, R>
where
    L: ScalarField,
    R: ScalarField,
{
    /// Creates an equation from its two sides.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Returns `(left(x, y) - right(x, y))²`.
    pub fn squared_distance(&self, x: f64, y: f64) -> f64 {
        let difference = self.left.eval(x, y) - self.right.eval(x, y);
        difference * difference
    }

    /// Forward-difference derivative of the squared distance along x.
    pub fn x_gradient(&self, x: f64, y: f64, delta: f64) -> f64 {
        let here = self.squared_distance(x, y);
        let ahead = self.squared_distance(x + delta, y);
        (ahead - here) / delta
    }

    /// Forward-difference derivative of the squared distance along y.
    pub fn y_gradient(&self, x: f64, y: f64, delta: f64) -> f64 {
        let here = self.squared_distance(x, y);
        let ahead = self.squared_distance(x, y + delta);
        (ahead - here) / delta
    }
}

/// An equation is itself a field: its squared distance.
impl<L, R> ScalarField for Equation<L, R>
where
    L: ScalarField,
    R: ScalarField,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self.squared_distance(x, y)
    }
}
