#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of entity, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyType {
    /// Dynamic entities are integrated and pushed around by collisions
    #[default]
    Dynamic,

    /// Static entities are never integrated and take no share of collision correction
    Static,
}
