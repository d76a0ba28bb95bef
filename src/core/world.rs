use crate::bodies::Entity;
use crate::collision::{CollisionPair, CollisionState, Side};
use crate::core::events::{CollisionEvent, CollisionEventType};
use crate::core::{update_physics_with, EntityHandle, EventQueue, SimulationConfig};
use crate::error::PhysicsError;
use crate::forces::{ForceGenerator, ForceRegistry};
use crate::math::Vector2;
use crate::Result;
use std::collections::BTreeMap;

/// Owns a list of entities and steps them together.
///
/// Entities are simulated in insertion order.
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    /// All entities, in solver order
    entities: Vec<Entity>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// External force hooks, applied before every tick
    forces: ForceRegistry,

    /// Events produced by the last tick
    events: EventQueue,

    /// Contact state of every pair that touched recently
    contacts: BTreeMap<CollisionPair, CollisionState>,

    /// The number of ticks simulated so far
    tick: u64,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            entities: Vec::new(),
            config,
            forces: ForceRegistry::new(),
            events: EventQueue::new(),
            contacts: BTreeMap::new(),
            tick: 0,
        }
    }

    /// Returns the number of ticks simulated so far
    pub fn get_tick(&self) -> u64 {
        self.tick
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration.
    ///
    /// Gravity, viscosity and mass changes only affect entities created afterwards.
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Adds an entity to the end of the solver order and returns its handle
    pub fn add_entity(&mut self, entity: Entity) -> EntityHandle {
        let handle = EntityHandle(self.entities.len());
        self.entities.push(entity);
        handle
    }

    /// Builds an entity with the world's current tunables and adds it
    pub fn create_entity<P>(&mut self, points: &[P], edges: &[(usize, usize)]) -> Result<EntityHandle>
    where
        P: Into<Vector2> + Copy,
    {
        let entity = Entity::with_config(points, edges, &self.config)?;
        Ok(self.add_entity(entity))
    }

    /// Gets a reference to an entity by its handle
    pub fn get_entity(&self, handle: EntityHandle) -> Result<&Entity> {
        self.entities
            .get(handle.0)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Entity with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to an entity by its handle
    pub fn get_entity_mut(&mut self, handle: EntityHandle) -> Result<&mut Entity> {
        self.entities
            .get_mut(handle.0)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Entity with handle {:?} not found", handle)))
    }

    /// Returns all entities in solver order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns all entities in solver order, mutably
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Returns the number of entities in the world
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Registers an external force hook
    pub fn add_force_generator(&mut self, generator: Box<dyn ForceGenerator>) {
        self.forces.add_generator(generator);
    }

    /// Returns the force registry
    pub fn get_forces_mut(&mut self) -> &mut ForceRegistry {
        &mut self.forces
    }

    /// Runs one tick of the simulation.
    ///
    /// Fails with `InvalidParameter` if the configuration is unusable and with
    /// `DegenerateGeometry` if any point ends the tick at a non-finite location.
    pub fn step(&mut self) -> Result<()> {
        self.config.validate()?;

        // Clear events from previous step
        self.events.clear();
        for state in self.contacts.values_mut() {
            state.update();
        }

        self.forces.update(self.tick);
        self.forces.apply_forces(&mut self.entities);

        let contacts = &mut self.contacts;
        update_physics_with(&mut self.entities, &self.config, |i, j, info| {
            let pair = CollisionPair::new(EntityHandle(i), EntityHandle(j));
            // Report the normal as pointing from the lower handle toward the higher one
            let normal = match info.piercing() {
                Side::Second => info.normal,
                Side::First => -info.normal,
            };
            contacts
                .entry(pair)
                .or_insert_with(|| CollisionState::new(pair))
                .record(info.depth, normal);
        });

        self.emit_collision_events();
        self.tick += 1;

        if let Some(index) = self.entities.iter().position(|e| !e.is_finite()) {
            tracing::warn!(entity = index, tick = self.tick, "entity left the finite range");
            return Err(PhysicsError::DegenerateGeometry(format!(
                "entity {} has non-finite points after tick {}",
                index, self.tick
            )));
        }

        Ok(())
    }

    /// Turns the contact states of this tick into events
    fn emit_collision_events(&mut self) {
        for state in self.contacts.values() {
            let event_type = if state.is_new_collision() {
                CollisionEventType::Begin
            } else if state.is_persistent_collision() {
                CollisionEventType::Persist
            } else if state.is_collision_end() {
                CollisionEventType::End
            } else {
                continue;
            };

            let (depth, normal) = if state.is_colliding {
                (Some(state.depth), Some(state.normal))
            } else {
                (None, None)
            };

            self.events.add_collision_event(CollisionEvent {
                event_type,
                entity_a: state.pair.entity_a,
                entity_b: state.pair.entity_b,
                depth,
                normal,
            });
        }

        self.contacts.retain(|_, state| !state.is_idle());
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clears the world of all entities, forces and events
    pub fn clear(&mut self) {
        self.entities.clear();
        self.forces.clear();
        self.events.clear();
        self.contacts.clear();
        self.tick = 0;
    }
}
