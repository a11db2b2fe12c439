//! Shared fixtures for cross-crate tests.

use serde::{Deserialize, Serialize};

use pluma_core::{BoundingRect, ScalarField};
use pluma_observers::PassHistory;
use pluma_solvers::equation::{
    Equation,
    vertical_scan::{self, Config, Solution},
};

/// A scan request as it would be read from a job file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanJob {
    /// The vertical line to scan.
    pub x: f64,

    /// The region to search.
    pub bounds: BoundingRect,

    #[serde(default)]
    pub config: Config,
}

impl ScanJob {
    /// Runs the job against `equation`, recording the pass history.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan line lies outside the bounds.
    pub fn run<L, R>(
        &self,
        equation: &Equation<L, R>,
    ) -> Result<(Solution, PassHistory), vertical_scan::Error>
    where
        L: ScalarField,
        R: ScalarField,
    {
        let mut history = PassHistory::new();
        let solution = vertical_scan::find_starting_points(
            equation,
            self.x,
            self.bounds,
            &self.config,
            &mut history,
        )?;
        Ok((solution, history))
    }
}

/// The unit circle `x² + y² = 1`.
pub fn unit_circle() -> Equation<impl ScalarField, impl ScalarField> {
    Equation::new(|x: f64, y: f64| x * x + y * y, |_x: f64, _y: f64| 1.0)
}

/// The diagonal `x = y`.
pub fn diagonal() -> Equation<impl ScalarField, impl ScalarField> {
    Equation::new(|x: f64, _y: f64| x, |_x: f64, y: f64| y)
}
