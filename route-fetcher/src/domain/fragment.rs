//! Route edge fragments.

use super::point::Point;

/// Error returned when constructing a fragment from an empty point list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fragment must contain at least one point")]
pub struct EmptyFragment;

/// One edge of the route graph: a short, ordered, non-empty polyline.
///
/// Fragments are immutable once constructed. Non-emptiness is enforced
/// at construction, so [`Fragment::first`] and [`Fragment::last`] return
/// points directly rather than `Option`s.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment(Vec<Point>);

impl Fragment {
    /// Create a fragment from an ordered point list.
    ///
    /// Fails if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self, EmptyFragment> {
        if points.is_empty() {
            return Err(EmptyFragment);
        }
        Ok(Self(points))
    }

    /// The first endpoint.
    pub fn first(&self) -> Point {
        self.0[0]
    }

    /// The last endpoint.
    pub fn last(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; fragments are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All points, in order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}
