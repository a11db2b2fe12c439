//! Bounded spatial grid that keeps one representative point per cell.
//!
//! A [`PointGrid`] partitions a [`BoundingRect`] into square cells of a fixed
//! size. Each cell holds at most one point, so inserting many nearby points
//! deduplicates them down to one per cell. Collisions are resolved either by
//! last-write-wins ([`PointGrid::add_point`]) or by keeping whichever point has
//! the lower field value ([`PointGrid::add_point_with`]).
//!
//! The cell table is allocated once. [`PointGrid::clear`] only touches the
//! occupied cells, so a grid can be cleared and refilled many times at a cost
//! proportional to the number of points rather than the number of cells.
//!
//! Cells are laid out row-major with a stride of `resolution[0]` (the column
//! count), so every in-bounds cell maps to a distinct slot.

mod cell;
mod error;


pub use error::{CellSizeError, OutOfBounds};

use pluma_core::{BoundingRect, Point, ScalarField};

use cell::Cell;

/// A fixed-size spatial hash over a bounding rectangle.
#[derive(Debug, Clone)]
pub struct PointGrid {
    bounds: BoundingRect,
    cell_size: f64,
    resolution: [usize; 2],
    cells: Vec<Cell>,
    /// Occupied cell indices in the order they were first filled.
    order: Vec<usize>,
}

impl PointGrid {
    /// Creates an empty grid over `bounds` with square cells of `cell_size`.
    ///
    /// The resolution along each axis is `ceil(extent / cell_size)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is not finite and positive, or if the
    /// resulting cell table would not fit in memory.
    pub fn new(cell_size: f64, bounds: BoundingRect) -> Result<Self, CellSizeError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(CellSizeError::Invalid { value: cell_size });
        }

        let columns = (bounds.width() / cell_size).ceil();
        let rows = (bounds.height() / cell_size).ceil();
        #[allow(clippy::cast_precision_loss)]
        let max = isize::MAX as f64;
        if columns * rows >= max {
            return Err(CellSizeError::TooManyCells { value: cell_size });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let resolution = [columns as usize, rows as usize];

        Ok(Self {
            bounds,
            cell_size,
            resolution,
            cells: vec![Cell::default(); resolution[0] * resolution[1]],
            order: Vec::new(),
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &BoundingRect {
        &self.bounds
    }

    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the number of cells as `[columns, rows]`.
    #[must_use]
    pub fn resolution(&self) -> [usize; 2] {
        self.resolution
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns whether the cell containing `point` is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `point` lies outside the grid.
    pub fn has_point(&self, point: Point) -> Result<bool, OutOfBounds> {
        let index = self.cell_index(point)?;
        Ok(self.cells[index].is_occupied())
    }

    /// Inserts `point`, replacing whatever the cell already holds.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `point` lies outside the grid.
    pub fn add_point(&mut self, point: Point) -> Result<(), OutOfBounds> {
        let index = self.cell_index(point)?;
        self.store(index, point);
        Ok(())
    }

    /// Inserts `point`, resolving a collision by comparing `tie_break` values.
    ///
    /// If the cell is occupied, the incoming point replaces the stored one
    /// only when its field value is not greater than the stored point's.
    /// Otherwise the grid is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `point` lies outside the grid.
    pub fn add_point_with<F>(&mut self, point: Point, tie_break: &F) -> Result<(), OutOfBounds>
    where
        F: ScalarField + ?Sized,
    {
        let index = self.cell_index(point)?;

        if let Some(stored) = self.cells[index].point() {
            let stored_value = tie_break.eval(stored.x, stored.y);
            let incoming_value = tie_break.eval(point.x, point.y);
            if incoming_value > stored_value {
                return Ok(());
            }
        }

        self.store(index, point);
        Ok(())
    }

    /// Returns the stored points in the order their cells were first filled.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.order
            .iter()
            .filter_map(|&index| self.cells[index].point())
            .collect()
    }

    /// Empties every occupied cell.
    pub fn clear(&mut self) {
        for &index in &self.order {
            self.cells[index].reset();
        }
        self.order.clear();
    }

    /// Clears the grid and inserts `points` in order with [`add_point`].
    ///
    /// Later points win collisions with earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] for the first point outside the grid. Points
    /// before it remain inserted.
    ///
    /// [`add_point`]: Self::add_point
    pub fn reconstruct_from_points<I>(&mut self, points: I) -> Result<(), OutOfBounds>
    where
        I: IntoIterator<Item = Point>,
    {
        self.clear();
        for point in points {
            self.add_point(point)?;
        }
        Ok(())
    }

    /// Returns whether `point` falls outside the grid.
    ///
    /// Agrees with the check behind [`has_point`](Self::has_point) and
    /// [`add_point`](Self::add_point), so it can be used to pre-filter points.
    #[must_use]
    pub fn is_out_of_bounds(&self, point: Point) -> bool {
        self.locate(point).is_none()
    }

    /// Returns the `[column, row]` cell coordinates of `point`.
    ///
    /// No bounds check is applied: coordinates may be negative or beyond the
    /// resolution. Non-finite inputs saturate.
    #[must_use]
    pub fn cell_coord(&self, point: Point) -> [i64; 2] {
        let [column, row] = self.raw_coord(point);
        #[allow(clippy::cast_possible_truncation)]
        [column as i64, row as i64]
    }

    fn raw_coord(&self, point: Point) -> [f64; 2] {
        [
            ((point.x - self.bounds.x()) / self.cell_size).floor(),
            ((point.y - self.bounds.y()) / self.cell_size).floor(),
        ]
    }

    /// Maps a point to its cell index, or `None` when out of bounds.
    ///
    /// Comparisons are done in floating point so NaN coordinates are rejected.
    fn locate(&self, point: Point) -> Option<usize> {
        let [column, row] = self.raw_coord(point);
        #[allow(clippy::cast_precision_loss)]
        let [columns, rows] = [self.resolution[0] as f64, self.resolution[1] as f64];

        let in_bounds = (0.0..columns).contains(&column) && (0.0..rows).contains(&row);
        if !in_bounds {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let [column, row] = [column as usize, row as usize];
        Some(row * self.resolution[0] + column)
    }

    fn cell_index(&self, point: Point) -> Result<usize, OutOfBounds> {
        self.locate(point).ok_or(OutOfBounds { point })
    }

    fn store(&mut self, index: usize, point: Point) {
        let cell = &mut self.cells[index];
        if !cell.is_occupied() {
            self.order.push(index);
        }
        cell.occupy(point);
    }
}
