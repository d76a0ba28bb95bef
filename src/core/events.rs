use crate::core::EntityHandle;
use crate::math::Vector2;
use std::collections::VecDeque;

/// Types of collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEventType {
    /// Entities have just started colliding
    Begin,

    /// Entities are still colliding (persisting contact)
    Persist,

    /// Entities have just stopped colliding
    End,
}

/// A collision event between two entities
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    /// The type of collision event
    pub event_type: CollisionEventType,

    /// The entity with the lower handle
    pub entity_a: EntityHandle,

    /// The entity with the higher handle
    pub entity_b: EntityHandle,

    /// Deepest penetration seen during the tick (`None` for End events)
    pub depth: Option<f64>,

    /// Contact normal pointing from `entity_a` toward `entity_b` (`None` for End events)
    pub normal: Option<Vector2>,
}

/// A queue of physics events
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Collision events
    collision_events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.collision_events.len()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    /// Returns an iterator over the queued collision events
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Gets all collision events of a specific type
    pub fn get_collision_events_of_type(&self, event_type: CollisionEventType) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all collision events involving a specific entity
    pub fn get_collision_events_for_entity(&self, entity: EntityHandle) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.entity_a == entity || e.entity_b == entity)
            .collect()
    }
}
