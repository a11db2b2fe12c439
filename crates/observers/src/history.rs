use pluma_core::Observer;

use crate::traits::{HasGrid, HasPass};

/// The grid occupancy after one solver event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRecord {
    /// Number of completed passes (0 for the seeded grid).
    pub pass: usize,

    /// Number of occupied cells.
    pub points: usize,
}

/// Records how many points remain after every pass.
///
/// Never returns an action, so it can observe any solver whose events carry a
/// grid and a pass counter.
///
/// # Example
///
/// ```ignore
/// let mut history = PassHistory::new();
/// vertical_scan::find_starting_points(&equation, 0.0, bounds, &config, &mut history)?;
/// assert_eq!(history.passes(), config.passes());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PassHistory {
    records: Vec<PassRecord>,
}

impl PassHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record in the order it was observed.
    #[must_use]
    pub fn records(&self) -> &[PassRecord] {
        &self.records
    }

    /// Returns the highest pass number observed.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.records.iter().map(|r| r.pass).max().unwrap_or(0)
    }

    /// Returns the point count of the seeded grid, if it was observed.
    #[must_use]
    pub fn seeded(&self) -> Option<usize> {
        self.records.iter().find(|r| r.pass == 0).map(|r| r.points)
    }

    /// Returns the point count after the last observed event.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.records.last().map(|r| r.points)
    }
}

impl<E, A> Observer<E, A> for PassHistory
where
    E: HasGrid + HasPass,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(PassRecord {
            pass: event.pass(),
            points: event.grid().len(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut PassHistory
where
    E: HasGrid + HasPass,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        <PassHistory as Observer<E, A>>::observe(&mut **self, event)
    }
}
