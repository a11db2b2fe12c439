use std::fmt;

use thiserror::Error;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

/// Errors that can occur when constructing a [`BoundingRect`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RectError {
    #[error("rectangle component is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("rectangle size must be positive, got {width} x {height}")]
    NonPositiveSize { width: f64, height: f64 },
}

/// An immutable axis-aligned rectangle.
///
/// Stored as its top-left corner (minimum x and y) plus a positive size,
/// whichever constructor was used. Deserialization goes through the same
/// validation as [`BoundingRect::from_top_left_with_size`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RectFields")
)]
pub struct BoundingRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BoundingRect {
    /// Creates a rectangle anchored at its top-left corner `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is non-finite or if the size is not
    /// strictly positive.
    pub fn from_top_left_with_size(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, RectError> {
        for value in [x, y, width, height] {
            if !value.is_finite() {
                return Err(RectError::NonFinite { value });
            }
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(RectError::NonPositiveSize { width, height });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates a rectangle centered at `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is non-finite or if the size is not
    /// strictly positive.
    pub fn from_center_with_size(
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, RectError> {
        Self::from_top_left_with_size(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the x coordinate of the far edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the y coordinate of the far edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns whether `point` lies in the rectangle, edges included.
    ///
    /// NaN coordinates are never contained.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.x..=self.right()).contains(&point.x) && (self.y..=self.bottom()).contains(&point.y)
    }
}

/// Unvalidated rectangle fields, as they appear in serialized form.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct RectFields {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RectFields> for BoundingRect {
    type Error = RectError;

    fn try_from(fields: RectFields) -> Result<Self, Self::Error> {
        Self::from_top_left_with_size(fields.x, fields.y, fields.width, fields.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn center_constructor_anchors_top_left() {
        let rect = BoundingRect::from_center_with_size(0.0, 0.0, 10.0, 8.0).expect("valid rect");

        assert_relative_eq!(rect.x(), -5.0);
        assert_relative_eq!(rect.y(), -4.0);
        assert_relative_eq!(rect.width(), 10.0);
        assert_relative_eq!(rect.height(), 8.0);
        assert_relative_eq!(rect.right(), 5.0);
        assert_relative_eq!(rect.bottom(), 4.0);
    }

    #[test]
    fn both_constructors_agree() {
        let a = BoundingRect::from_center_with_size(2.0, 3.0, 4.0, 2.0).expect("valid rect");
        let b = BoundingRect::from_top_left_with_size(0.0, 2.0, 4.0, 2.0).expect("valid rect");

        assert_eq!(a, b);
        assert_eq!(a.center(), Point::new(2.0, 3.0));
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(
            BoundingRect::from_top_left_with_size(0.0, 0.0, 0.0, 1.0),
            Err(RectError::NonPositiveSize { .. })
        ));
        assert!(matches!(
            BoundingRect::from_center_with_size(0.0, 0.0, 1.0, -2.0),
            Err(RectError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_components() {
        assert!(matches!(
            BoundingRect::from_top_left_with_size(f64::NAN, 0.0, 1.0, 1.0),
            Err(RectError::NonFinite { .. })
        ));
        assert!(matches!(
            BoundingRect::from_top_left_with_size(0.0, 0.0, f64::INFINITY, 1.0),
            Err(RectError::NonFinite { .. })
        ));
    }

    #[test]
    fn contains_includes_edges() {
        let rect = BoundingRect::from_top_left_with_size(0.0, 0.0, 1.0, 1.103).expect("valid rect");

        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(1.0, 1.103)));
        assert!(rect.contains(Point::new(0.5, 0.5)));
        assert!(!rect.contains(Point::new(0.5, 1.1045)));
        assert!(!rect.contains(Point::new(1.004, 0.5)));
        assert!(!rect.contains(Point::new(-1e-9, 0.5)));
        assert!(!rect.contains(Point::new(f64::NAN, 0.5)));
    }

    #[test]
    fn point_displays_in_angle_brackets() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "<1.5, -2>");
    }
}
