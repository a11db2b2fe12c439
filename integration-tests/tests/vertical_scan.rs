use approx::assert_relative_eq;

use integration_tests::{ScanJob, diagonal, unit_circle};
use pluma_core::{BoundingRect, Point};
use pluma_solvers::{
    equation::vertical_scan::{self, Config, PASSES},
    grid::PointGrid,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn job(x: f64, bounds: BoundingRect) -> ScanJob {
    ScanJob {
        x,
        bounds,
        config: Config::default(),
    }
}

#[test]
fn diagonal_points_cluster_at_the_origin() {
    init_logging();
    let bounds = BoundingRect::from_center_with_size(0.0, 0.0, 10.0, 8.0).expect("valid rect");

    let (solution, history) = job(0.0, bounds).run(&diagonal()).expect("should scan");

    assert_eq!(history.seeded(), Some(100));
    assert_eq!(history.passes(), PASSES);
    assert_eq!(history.records().len(), PASSES + 1);
    assert_eq!(history.last(), Some(solution.points.len()));

    for point in &solution.points {
        assert!((-4.0..=4.0).contains(&point.y));
        assert!(point.y.abs() < 0.051, "{point} is not near the origin");
    }
}

#[test]
fn circle_points_settle_on_both_crossings() {
    let bounds = BoundingRect::from_center_with_size(0.0, 0.0, 6.0, 6.0).expect("valid rect");

    let (solution, _) = job(0.0, bounds).run(&unit_circle()).expect("should scan");

    assert!(solution.points.iter().any(|p| p.y > 0.0));
    assert!(solution.points.iter().any(|p| p.y < 0.0));
    for point in &solution.points {
        assert!(
            (point.y.abs() - 1.0).abs() < 0.06,
            "{point} is not near the circle"
        );
    }
}

#[test]
fn off_center_scan_line_finds_circle_chord() {
    let bounds = BoundingRect::from_center_with_size(0.0, 0.0, 4.0, 4.0).expect("valid rect");
    let circle = unit_circle();

    let (solution, _) = job(0.5, bounds).run(&circle).expect("should scan");

    assert!(!solution.points.is_empty());
    for point in &solution.points {
        assert_relative_eq!(point.x, 0.5);
        let residual = point.x * point.x + point.y * point.y - 1.0;
        assert!(residual.abs() < 0.1, "{point} has residual {residual}");
    }
}

#[test]
fn scan_line_outside_bounds_fails() {
    let bounds = BoundingRect::from_top_left_with_size(0.0, 0.0, 1.0, 1.0).expect("valid rect");

    let result = job(-0.5, bounds).run(&diagonal());

    assert!(matches!(result, Err(vertical_scan::Error::OutOfBounds(_))));
}

#[test]
fn equation_breaks_grid_ties_by_distance() {
    let bounds = BoundingRect::from_center_with_size(0.0, 0.0, 4.0, 4.0).expect("valid rect");
    let mut grid = PointGrid::new(0.5, bounds).expect("valid cell size");
    let circle = unit_circle();

    grid.add_point(Point::new(1.2, 0.1)).expect("in bounds");
    grid.add_point_with(Point::new(1.0, 0.1), &circle)
        .expect("in bounds");
    assert_eq!(grid.points(), vec![Point::new(1.0, 0.1)]);

    grid.add_point_with(Point::new(1.2, 0.2), &circle)
        .expect("in bounds");
    assert_eq!(grid.points(), vec![Point::new(1.0, 0.1)]);
    assert_eq!(grid.len(), 1);
}
