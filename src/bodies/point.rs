use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A single point mass integrated from its current and previous location
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point {
    /// Current position
    pub location: Vector2,

    /// Position before the last integration step; the implicit velocity term
    pub previous_location: Vector2,

    /// Accumulated external acceleration, consumed by the next integration step
    pub acceleration: Vector2,
}

impl Point {
    /// Creates a point at rest
    pub fn new(location: Vector2) -> Self {
        Self {
            location,
            previous_location: location,
            acceleration: Vector2::zero(),
        }
    }

    /// Displacement since the previous step
    #[inline]
    pub fn velocity(&self) -> Vector2 {
        self.location - self.previous_location
    }

    /// Sets the implicit velocity without moving the point
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.previous_location = self.location - velocity;
    }

    /// Adds to the acceleration accumulator
    #[inline]
    pub fn accelerate(&mut self, acceleration: Vector2) {
        self.acceleration += acceleration;
    }

    /// Moves the point and its history together, leaving velocity unchanged
    #[inline]
    pub fn translate(&mut self, offset: Vector2) {
        self.location += offset;
        self.previous_location += offset;
    }
}

impl From<Vector2> for Point {
    fn from(location: Vector2) -> Self {
        Self::new(location)
    }
}
