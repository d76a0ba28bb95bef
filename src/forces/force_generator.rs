use crate::bodies::Entity;
use crate::core::EntityHandle;
use crate::math::Vector2;
use std::any::Any;

/// Hook for external forces (wind, player input, ...).
///
/// Generators run before each tick and add to the `acceleration` of the points they
/// affect; the integrator consumes and clears it. A force is turned into an
/// acceleration by dividing by the entity's mass. Static entities ignore forces.
pub trait ForceGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Advances any internal state by one tick
    fn update(&mut self, _tick: u64) {}

    /// Accumulates forces into the entities' points
    fn apply_forces(&self, entities: &mut [Entity]);

    /// Returns the entities affected by this force generator
    fn get_affected_entities(&self) -> &[EntityHandle];

    /// Returns true if the force generator affects the given entity
    fn affects_entity(&self, entity: EntityHandle) -> bool {
        self.get_affected_entities().contains(&entity)
    }

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Looks up a dynamic entity, ignoring stale handles and static entities
fn dynamic_entity(entities: &mut [Entity], handle: EntityHandle) -> Option<&mut Entity> {
    entities
        .get_mut(handle.index())
        .filter(|entity| !entity.is_static())
}

/// Applies the same force to every point of one entity
#[derive(Debug, Clone)]
pub struct ConstantForceGenerator {
    /// The force to apply to each point
    force: Vector2,

    /// Whether the force is enabled
    enabled: bool,

    /// The entities affected by this force generator (cached for quick lookup)
    affected_entities: Vec<EntityHandle>,
}

impl ConstantForceGenerator {
    /// Creates a new constant force generator
    pub fn new(entity: EntityHandle, force: Vector2) -> Self {
        Self {
            force,
            enabled: true,
            affected_entities: vec![entity],
        }
    }

    /// Creates a generator pushing several entities with the same force
    pub fn for_entities(entities: Vec<EntityHandle>, force: Vector2) -> Self {
        Self {
            force,
            enabled: true,
            affected_entities: entities,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    pub fn set_force(&mut self, force: Vector2) {
        self.force = force;
    }
}

impl ForceGenerator for ConstantForceGenerator {
    fn generator_type(&self) -> &'static str {
        "ConstantForce"
    }

    fn apply_forces(&self, entities: &mut [Entity]) {
        if !self.enabled {
            return;
        }

        for &handle in &self.affected_entities {
            let Some(entity) = dynamic_entity(entities, handle) else {
                continue;
            };
            let acceleration = self.force / entity.get_mass();
            for point in entity.points_mut() {
                point.accelerate(acceleration);
            }
        }
    }

    fn get_affected_entities(&self) -> &[EntityHandle] {
        &self.affected_entities
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Applies a force to a single point of one entity
#[derive(Debug, Clone)]
pub struct PointForceGenerator {
    /// Index of the point within the entity
    point: usize,

    /// The force to apply
    force: Vector2,

    /// Whether the force is enabled
    enabled: bool,

    /// The entity affected by this force generator
    affected_entities: [EntityHandle; 1],
}

impl PointForceGenerator {
    /// Creates a new point force generator
    pub fn new(entity: EntityHandle, point: usize, force: Vector2) -> Self {
        Self {
            point,
            force,
            enabled: true,
            affected_entities: [entity],
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get_point(&self) -> usize {
        self.point
    }

    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    pub fn set_force(&mut self, force: Vector2) {
        self.force = force;
    }
}

impl ForceGenerator for PointForceGenerator {
    fn generator_type(&self) -> &'static str {
        "PointForce"
    }

    fn apply_forces(&self, entities: &mut [Entity]) {
        if !self.enabled {
            return;
        }

        let Some(entity) = dynamic_entity(entities, self.affected_entities[0]) else {
            return;
        };
        let acceleration = self.force / entity.get_mass();
        if let Some(point) = entity.points_mut().get_mut(self.point) {
            point.accelerate(acceleration);
        }
    }

    fn get_affected_entities(&self) -> &[EntityHandle] {
        &self.affected_entities
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A force generator registry that manages multiple force generators
#[derive(Debug, Default)]
pub struct ForceRegistry {
    /// The list of force generators, applied in order
    generators: Vec<Box<dyn ForceGenerator>>,
}

impl ForceRegistry {
    /// Creates a new empty force registry
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Adds a force generator to the registry
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) {
        self.generators.push(generator);
    }

    /// Removes a force generator from the registry
    pub fn remove_generator(&mut self, index: usize) -> Option<Box<dyn ForceGenerator>> {
        if index < self.generators.len() {
            Some(self.generators.remove(index))
        } else {
            None
        }
    }

    /// Returns the number of generators in the registry
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns a generator by index
    pub fn get(&self, index: usize) -> Option<&dyn ForceGenerator> {
        self.generators.get(index).map(|g| g.as_ref())
    }

    /// Returns a mutable generator by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn ForceGenerator + 'static)> {
        self.generators.get_mut(index).map(|g| g.as_mut())
    }

    /// Updates all force generators
    pub fn update(&mut self, tick: u64) {
        for generator in &mut self.generators {
            generator.update(tick);
        }
    }

    /// Applies all force generators to the entities
    pub fn apply_forces(&self, entities: &mut [Entity]) {
        for generator in &self.generators {
            generator.apply_forces(entities);
        }
    }

    /// Clears all force generators
    pub fn clear(&mut self) {
        self.generators.clear();
    }

    /// Removes all force generators affecting a specific entity
    pub fn remove_generators_for_entity(&mut self, entity: EntityHandle) {
        self.generators.retain(|generator| !generator.affects_entity(entity));
    }
}
