use thiserror::Error;

use crate::grid::{CellSizeError, OutOfBounds};

/// Errors that can occur during a vertical scan.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// A seed point fell outside the bounds, which happens when the scan line
    /// lies outside the horizontal extent of the region.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    #[error(transparent)]
    CellSize(#[from] CellSizeError),
}
