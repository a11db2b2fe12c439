use pluma_core::Point;

/// The result of a vertical scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Solution {
    /// Surviving points, in the order their grid cells were first filled.
    pub points: Vec<Point>,

    /// Number of distinct seed points before refinement.
    pub seeded: usize,

    /// Number of refinement passes run.
    pub passes: usize,
}
