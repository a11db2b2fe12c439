use pluma_core::Point;

/// One slot of the grid's cell table.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Cell {
    occupied: bool,
    point: Point,
}

impl Cell {
    pub(super) fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Returns the representative point, if any.
    pub(super) fn point(&self) -> Option<Point> {
        self.occupied.then_some(self.point)
    }

    pub(super) fn occupy(&mut self, point: Point) {
        self.occupied = true;
        self.point = point;
    }

    /// Marks the cell empty and zeroes its coordinates.
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
