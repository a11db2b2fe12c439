use pluma_core::Point;
use thiserror::Error;

/// A point fell outside the grid's bounding rectangle.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("point {point} out of bounds")]
pub struct OutOfBounds {
    pub point: Point,
}

/// Errors that can occur when creating a [`PointGrid`](super::PointGrid).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CellSizeError {
    #[error("cell size must be finite and positive, got {value}")]
    Invalid { value: f64 },

    #[error("cell size {value} yields too many cells for the bounds")]
    TooManyCells { value: f64 },
}
