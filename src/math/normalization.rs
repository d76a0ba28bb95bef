use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Longest component-sum scaled vector the solver will use.
///
/// Relaxing an edge along a direction of length `m` leaves `|1 - m|` of the length
/// error, so anything at or above 2 grows the error instead of shrinking it.
pub const MAX_COMPONENT_SUM_SCALE: f64 = std::f64::consts::SQRT_2;

/// How edge directions and separating axes are scaled before use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum AxisNormalization {
    /// Divide by the sum of the components (see [`Vector2::vnormal`]).
    ///
    /// Falls back to Euclidean normalization when the scaled vector would be longer
    /// than [`MAX_COMPONENT_SUM_SCALE`], which includes a vanishing component sum.
    #[default]
    ComponentSum,

    /// Divide by the Euclidean length
    Euclidean,
}

impl AxisNormalization {
    /// Scales `v` into a direction pointing the same way as `v`.
    ///
    /// With `ComponentSum`, a negative component sum would reverse the direction and
    /// push edge endpoints away from their rest length, so the Euclidean unit vector
    /// is used instead. Returns `None` if `v` has no usable direction.
    pub fn direction(self, v: Vector2) -> Option<Vector2> {
        match self {
            AxisNormalization::ComponentSum => match v.vnormal() {
                Some(n) if n.dot(&v) > 0.0 && n.length() <= MAX_COMPONENT_SUM_SCALE => Some(n),
                _ => {
                    tracing::trace!(x = v.x, y = v.y, "component sum unusable, using euclidean length");
                    v.try_normalize()
                }
            },
            AxisNormalization::Euclidean => v.try_normalize(),
        }
    }

    /// Scales `v` into a separating axis.
    ///
    /// Unlike [`AxisNormalization::direction`] the sign is kept as scaled, since
    /// collision normals are oriented afterwards; only the length is bounded.
    pub fn axis(self, v: Vector2) -> Option<Vector2> {
        match self {
            AxisNormalization::ComponentSum => match v.vnormal() {
                Some(n) if n.length() <= MAX_COMPONENT_SUM_SCALE => Some(n),
                _ => {
                    tracing::trace!(x = v.x, y = v.y, "component sum unusable, using euclidean length");
                    v.try_normalize()
                }
            },
            AxisNormalization::Euclidean => v.try_normalize(),
        }
    }
}
