//! 2D soft-body physics.
//!
//! Entities are polygons of point masses joined by rigid-length edges. Each tick
//! the points are advanced from their current and previous locations, the edges are
//! relaxed toward their rest lengths, and overlapping entities are pushed apart
//! with a separating-axis test and mass-weighted positional correction.

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod constraints;
pub mod forces;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, SimulationConfig, EntityHandle, update_physics};
pub use crate::bodies::{Entity, Point, BodyType};
pub use crate::collision::{collides, resolve_collision, CollisionInfo};
pub use crate::constraints::Edge;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    /// Reasons an entity cannot be built from the given points and edges
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ConstructionError {
        #[error("entity needs at least {required} points, got {actual}")]
        InsufficientPoints { required: usize, actual: usize },

        #[error("entity with {points} points needs at least as many edges, got {edges}")]
        InsufficientEdges { points: usize, edges: usize },

        #[error("edge {edge} references point {index}, but the entity has {count} points")]
        PointOutOfBounds { edge: usize, index: usize, count: usize },

        #[error("edge {edge} connects point {index} to itself")]
        SelfLoop { edge: usize, index: usize },

        #[error("edge {edge} has zero rest length")]
        ZeroLengthEdge { edge: usize },
    }

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid entity: {0}")]
        Construction(#[from] ConstructionError),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Degenerate geometry: {0}")]
        DegenerateGeometry(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
