use crate::grid::PointGrid;

/// Events emitted by the vertical scan.
///
/// Both variants borrow the grid in its current state, so observers can read
/// as much or as little of it as they need.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The grid has been filled with the initial samples.
    Seeded {
        /// The seeded grid.
        grid: &'a PointGrid,
    },

    /// A refinement pass has finished and the grid has been rebuilt.
    Refined {
        /// Pass counter (1-based).
        pass: usize,

        /// The rebuilt grid.
        grid: &'a PointGrid,
    },
}

impl<'a> Event<'a> {
    /// Returns the number of completed passes (0 for [`Event::Seeded`]).
    #[must_use]
    pub fn pass(&self) -> usize {
        match self {
            Self::Seeded { .. } => 0,
            Self::Refined { pass, .. } => *pass,
        }
    }

    /// Returns the grid at the time of the event.
    #[must_use]
    pub fn grid(&self) -> &'a PointGrid {
        match self {
            Self::Seeded { grid } | Self::Refined { grid, .. } => grid,
        }
    }
}
