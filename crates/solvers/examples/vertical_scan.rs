//! Runs a vertical scan on the diagonal `x = y`.
//!
//! Seeds points along the line x = 0 inside a 10 x 8 region centered at the
//! origin, prints them, then prints where they end up after refinement.
//!
//! # Usage
//!
//! ```text
//! cargo run --example vertical_scan
//! RUST_LOG=trace cargo run --example vertical_scan
//! ```

use std::{convert::Infallible, error::Error};

use pluma_core::BoundingRect;
use pluma_solvers::equation::{
    Equation,
    vertical_scan::{self, Event},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let equation = Equation::new(|x: f64, _y: f64| x, |_x: f64, y: f64| y);
    let bounds = BoundingRect::from_center_with_size(0.0, 0.0, 10.0, 8.0)?;

    let observer = |event: &Event<'_>| -> Option<Infallible> {
        if let Event::Seeded { grid } = event {
            for point in grid.points() {
                println!("seed {point}");
            }
        }
        None
    };
    let solution = vertical_scan::find_starting_points(
        &equation,
        0.0,
        bounds,
        &vertical_scan::Config::default(),
        observer,
    )?;

    println!(
        "{} of {} points remain after {} passes:",
        solution.points.len(),
        solution.seeded,
        solution.passes
    );
    for point in &solution.points {
        println!("  {point}");
    }

    Ok(())
}
