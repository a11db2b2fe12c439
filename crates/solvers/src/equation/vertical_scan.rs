//! Seed-and-descend search for curve points along a vertical line.
//!
//! # Algorithm
//!
//! 1. Build a [`PointGrid`] over the bounds with cells of
//!    `min(width, height) / sub_resolution`.
//! 2. Seed `resolution` evenly spaced points `(x, y)` from the top edge of the
//!    bounds down its height, inserting each with [`PointGrid::add_point`].
//! 3. Run exactly `passes` refinement passes. In each pass every point takes
//!    one fixed-size step along y against the sign of the y-gradient of the
//!    squared distance (a zero gradient leaves it in place). Points that leave
//!    the bounds rectangle are dropped, and the grid is rebuilt from the
//!    survivors so points that converge into the same cell collapse to one.
//! 4. Return the grid's points.
//!
//! # Limitations
//!
//! - **Fixed budget**: there is no convergence test, so returned points are
//!   only as close to the curve as the step size allows.
//! - **One axis**: points only move vertically, so parts of the curve that are
//!   not crossed by the scan line are never found.
//!
//! # Observer Events
//!
//! The search emits [`Event::Seeded`] once, then one [`Event::Refined`] per
//! pass. Observers cannot steer the search: the action type is
//! [`Infallible`].

mod config;
mod error;
mod event;
mod solution;


pub use config::{Config, ConfigError, DELTA, PASSES, RESOLUTION, STEP, SUB_RESOLUTION};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use std::convert::Infallible;

use log::{debug, trace};
use pluma_core::{BoundingRect, Observer, Point, ScalarField};

use crate::grid::{OutOfBounds, PointGrid};

use super::Equation;

/// Finds points near the curve along the vertical line at `x`.
///
/// The observer receives an [`Event`] after seeding and after every pass.
/// See the [module docs](self) for the algorithm.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x` lies outside the horizontal extent of
/// `bounds`, or [`Error::CellSize`] if the bounds are too large for the
/// configured grid density.
pub fn find_starting_points<L, R, Obs>(
    equation: &Equation<L, R>,
    x: f64,
    bounds: BoundingRect,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    L: ScalarField,
    R: ScalarField,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    let mut grid = seed(x, bounds, config)?;
    let seeded = grid.len();
    debug!("vertical scan at x = {x}: seeded {seeded} points");
    notify(&mut observer, &Event::Seeded { grid: &grid });

    for pass in 1..=config.passes() {
        let mut points = grid.points();
        for point in &mut points {
            descend(equation, point, config);
        }
        // The last row and column of cells may overhang the rectangle.
        points.retain(|&point| bounds.contains(point) && !grid.is_out_of_bounds(point));

        grid.reconstruct_from_points(points)?;
        trace!("pass {pass}: {} points", grid.len());
        notify(&mut observer, &Event::Refined { pass, grid: &grid });
    }

    let points = grid.points();
    debug!(
        "vertical scan at x = {x}: {} of {seeded} points remain after {} passes",
        points.len(),
        config.passes()
    );

    Ok(Solution {
        points,
        seeded,
        passes: config.passes(),
    })
}

/// Finds points near the curve without observer support.
///
/// This is a convenience wrapper around [`find_starting_points`] that uses a
/// no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`find_starting_points`].
pub fn find_starting_points_unobserved<L, R>(
    equation: &Equation<L, R>,
    x: f64,
    bounds: BoundingRect,
    config: &Config,
) -> Result<Solution, Error>
where
    L: ScalarField,
    R: ScalarField,
{
    find_starting_points(equation, x, bounds, config, ())
}

/// Builds the grid and fills it with evenly spaced samples along the line.
#[allow(clippy::cast_precision_loss)]
fn seed(x: f64, bounds: BoundingRect, config: &Config) -> Result<PointGrid, Error> {
    if !(bounds.x()..=bounds.right()).contains(&x) {
        return Err(OutOfBounds {
            point: Point::new(x, bounds.y()),
        }
        .into());
    }

    let cell_size = bounds.width().min(bounds.height()) / config.sub_resolution() as f64;
    let mut grid = PointGrid::new(cell_size, bounds)?;

    let spacing = bounds.height() / config.resolution() as f64;
    for i in 0..config.resolution() {
        grid.add_point(Point::new(x, bounds.y() + i as f64 * spacing))?;
    }

    Ok(grid)
}

/// Moves `point` one step along y toward lower squared distance.
fn descend<L, R>(equation: &Equation<L, R>, point: &mut Point, config: &Config)
where
    L: ScalarField,
    R: ScalarField,
{
    let gradient = equation.y_gradient(point.x, point.y, config.delta());
    if gradient > 0.0 {
        point.y -= config.step();
    } else if gradient < 0.0 {
        point.y += config.step();
    }
}

fn notify<Obs>(observer: &mut Obs, event: &Event<'_>)
where
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    if let Some(never) = observer.observe(event) {
        match never {}
    }
}
