use crate::bodies::Point;
use crate::error::ConstructionError;
use crate::math::{AxisNormalization, Vector2, EPSILON};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid-length constraint between two points of the same entity.
///
/// Endpoints are indices into the owning entity's point list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Index of the first endpoint
    point_a: usize,

    /// Index of the second endpoint
    point_b: usize,

    /// Rest length, fixed at construction
    original_length: f64,
}

impl Edge {
    /// Creates an edge between two points, recording their current distance as the
    /// rest length
    pub(crate) fn new(
        edge: usize,
        point_a: usize,
        point_b: usize,
        points: &[Point],
    ) -> Result<Self, ConstructionError> {
        let count = points.len();
        for index in [point_a, point_b] {
            if index >= count {
                return Err(ConstructionError::PointOutOfBounds { edge, index, count });
            }
        }

        if point_a == point_b {
            return Err(ConstructionError::SelfLoop { edge, index: point_a });
        }

        let original_length = points[point_a].location.distance(&points[point_b].location);
        if original_length <= EPSILON {
            return Err(ConstructionError::ZeroLengthEdge { edge });
        }

        Ok(Self {
            point_a,
            point_b,
            original_length,
        })
    }

    /// Index of the first endpoint
    #[inline]
    pub fn point_a(&self) -> usize {
        self.point_a
    }

    /// Index of the second endpoint
    #[inline]
    pub fn point_b(&self) -> usize {
        self.point_b
    }

    /// The rest length of the edge
    #[inline]
    pub fn original_length(&self) -> f64 {
        self.original_length
    }

    /// Current locations of both endpoints
    #[inline]
    pub fn endpoints(&self, points: &[Point]) -> (Vector2, Vector2) {
        (points[self.point_a].location, points[self.point_b].location)
    }

    /// Current distance between the endpoints
    pub fn current_length(&self, points: &[Point]) -> f64 {
        let (a, b) = self.endpoints(points);
        a.distance(&b)
    }

    /// Signed deviation from the rest length (positive when stretched)
    pub fn length_error(&self, points: &[Point]) -> f64 {
        self.current_length(points) - self.original_length
    }

    /// Moves both endpoints halfway toward restoring the rest length.
    ///
    /// Each endpoint moves by `direction * diff / 2`, where `direction` is the
    /// `a -> b` vector scaled by `normalization`. Returns `false`, leaving both points
    /// alone, when the endpoints coincide or the correction is not finite.
    pub fn relax(&self, points: &mut [Point], normalization: AxisNormalization) -> bool {
        let (a, b) = self.endpoints(points);
        let a_to_b = b - a;
        let diff = a_to_b.length() - self.original_length;

        let Some(direction) = normalization.direction(a_to_b) else {
            tracing::trace!(
                point_a = self.point_a,
                point_b = self.point_b,
                "skipping relaxation of collapsed edge"
            );
            return false;
        };

        let correction = direction * diff * 0.5;
        if !correction.is_finite() {
            tracing::trace!(
                point_a = self.point_a,
                point_b = self.point_b,
                "skipping non-finite edge correction"
            );
            return false;
        }

        points[self.point_a].location += correction;
        points[self.point_b].location -= correction;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vector2, b: Vector2) -> Vec<Point> {
        vec![Point::new(a), Point::new(b)]
    }

    #[test]
    fn rest_length_is_initial_distance() {
        let points = pair(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0));
        let edge = Edge::new(0, 0, 1, &points).unwrap();
        assert_eq!(edge.original_length(), 5.0);
        assert_eq!(edge.length_error(&points), 0.0);
    }

    #[test]
    fn rejects_self_loop_and_zero_length() {
        let points = pair(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
        assert_eq!(
            Edge::new(3, 0, 0, &points),
            Err(ConstructionError::SelfLoop { edge: 3, index: 0 })
        );
        assert_eq!(
            Edge::new(0, 0, 1, &points),
            Err(ConstructionError::ZeroLengthEdge { edge: 0 })
        );
    }

    #[test]
    fn rejects_out_of_bounds_index() {
        let points = pair(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert_eq!(
            Edge::new(1, 0, 2, &points),
            Err(ConstructionError::PointOutOfBounds { edge: 1, index: 2, count: 2 })
        );
    }

    #[test]
    fn collapsed_edge_is_skipped() {
        let mut points = pair(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let edge = Edge::new(0, 0, 1, &points).unwrap();
        points[1].location = Vector2::new(0.0, 0.0);
        assert!(!edge.relax(&mut points, AxisNormalization::ComponentSum));
        assert_eq!(points[0].location, Vector2::zero());
    }

    #[test]
    fn negative_component_sum_still_contracts() {
        let mut points = pair(Vector2::new(2.0, 2.0), Vector2::new(0.0, 2.0));
        let edge = Edge::new(0, 0, 1, &points).unwrap();
        points[1].location = Vector2::new(-1.0, 2.0);

        assert!(edge.relax(&mut points, AxisNormalization::ComponentSum));
        assert_eq!(points[0].location, Vector2::new(1.5, 2.0));
        assert_eq!(points[1].location, Vector2::new(-0.5, 2.0));
        assert_eq!(edge.current_length(&points), 2.0);
    }

    #[test]
    fn non_finite_correction_is_skipped() {
        let mut points = pair(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let edge = Edge::new(0, 0, 1, &points).unwrap();
        points[1].location = Vector2::new(f64::INFINITY, 0.0);

        assert!(!edge.relax(&mut points, AxisNormalization::ComponentSum));
        assert_eq!(points[0].location, Vector2::zero());
    }
}
