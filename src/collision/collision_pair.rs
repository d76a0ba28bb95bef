use crate::core::EntityHandle;
use crate::math::Vector2;

/// An unordered pair of entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The entity with the lower handle
    pub entity_a: EntityHandle,

    /// The entity with the higher handle
    pub entity_b: EntityHandle,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(entity_a: EntityHandle, entity_b: EntityHandle) -> Self {
        // Always sort the handles to ensure consistent ordering
        if entity_a <= entity_b {
            Self { entity_a, entity_b }
        } else {
            Self { entity_a: entity_b, entity_b: entity_a }
        }
    }

    /// Checks if this collision pair contains the specified entity
    pub fn contains(&self, entity: EntityHandle) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }

    /// Returns the other entity in the pair
    pub fn other(&self, entity: EntityHandle) -> Option<EntityHandle> {
        if self.entity_a == entity {
            Some(self.entity_b)
        } else if self.entity_b == entity {
            Some(self.entity_a)
        } else {
            None
        }
    }
}

/// The contact state of a pair across ticks
#[derive(Debug, Clone)]
pub struct CollisionState {
    /// The collision pair
    pub pair: CollisionPair,

    /// Whether the entities were colliding in the previous tick
    pub was_colliding: bool,

    /// Whether the entities are colliding in the current tick
    pub is_colliding: bool,

    /// Deepest penetration seen this tick
    pub depth: f64,

    /// Contact normal of the deepest penetration this tick
    pub normal: Vector2,
}

impl CollisionState {
    /// Creates a new collision state
    pub fn new(pair: CollisionPair) -> Self {
        Self {
            pair,
            was_colliding: false,
            is_colliding: false,
            depth: 0.0,
            normal: Vector2::zero(),
        }
    }

    /// Rolls the state over to the next tick
    pub fn update(&mut self) {
        self.was_colliding = self.is_colliding;
        self.is_colliding = false;
        self.depth = 0.0;
        self.normal = Vector2::zero();
    }

    /// Records a contact found during the current tick, keeping the deepest one
    pub fn record(&mut self, depth: f64, normal: Vector2) {
        if !self.is_colliding || depth > self.depth {
            self.depth = depth;
            self.normal = normal;
        }
        self.is_colliding = true;
    }

    /// Returns whether this is a new collision
    pub fn is_new_collision(&self) -> bool {
        self.is_colliding && !self.was_colliding
    }

    /// Returns whether this is a persistent collision
    pub fn is_persistent_collision(&self) -> bool {
        self.is_colliding && self.was_colliding
    }

    /// Returns whether this is a collision that has ended
    pub fn is_collision_end(&self) -> bool {
        !self.is_colliding && self.was_colliding
    }

    /// Returns whether the pair can be forgotten
    pub fn is_idle(&self) -> bool {
        !self.is_colliding && !self.was_colliding
    }
}
