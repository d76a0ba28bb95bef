pub mod world;
pub mod config;
pub mod events;
pub mod simulation;

pub use self::world::PhysicsWorld;
pub use self::config::SimulationConfig;
pub use self::events::{EventQueue, CollisionEvent, CollisionEventType};
pub use self::simulation::{update_physics, update_physics_with};

/// A unique identifier for an entity in the physics world.
///
/// Handles are positions in the world's entity list, which is also the order in
/// which the solver visits entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub(crate) usize);

impl EntityHandle {
    /// Creates a handle for the entity at `index`
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the entity in the world's entity list
    pub fn index(&self) -> usize {
        self.0
    }
}
