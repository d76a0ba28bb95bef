use crate::bodies::{BodyType, Point};
use crate::collision::CollisionFilter;
use crate::constraints::Edge;
use crate::core::SimulationConfig;
use crate::error::{ConstructionError, PhysicsError};
use crate::integration::{DampedDisplacementIntegrator, Integrator};
use crate::math::{AxisNormalization, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Smallest polygon an entity can describe
pub const MIN_POINTS: usize = 3;

/// A soft body: point masses held together by rigid-length edges.
///
/// The point list is index-stable and defines the polygon winding; edges refer to
/// points by index. Neither list is resized after construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Entity {
    /// The point masses
    points: Vec<Point>,

    /// The length constraints between points
    edges: Vec<Edge>,

    /// Mean of the point locations, as of the last `calculate_center`
    center: Vector2,

    /// Whether the entity is simulated or fixed in place
    body_type: BodyType,

    /// The mass used to split collision correction
    mass: f64,

    /// Vertical displacement added every step
    gravity: f64,

    /// Scale applied to the carried-over displacement every step
    viscosity: f64,

    /// Which entities this one is tested against
    filter: CollisionFilter,
}

impl Entity {
    /// Builds an entity from point coordinates and edge index pairs, using the
    /// default simulation tunables
    pub fn new<P>(points: &[P], edges: &[(usize, usize)]) -> Result<Self>
    where
        P: Into<Vector2> + Copy,
    {
        Self::with_config(points, edges, &SimulationConfig::default())
    }

    /// Builds an entity, copying gravity, viscosity and mass from `config`.
    ///
    /// Later changes to `config` do not affect the entity.
    pub fn with_config<P>(
        points: &[P],
        edges: &[(usize, usize)],
        config: &SimulationConfig,
    ) -> Result<Self>
    where
        P: Into<Vector2> + Copy,
    {
        if points.len() < MIN_POINTS {
            return Err(ConstructionError::InsufficientPoints {
                required: MIN_POINTS,
                actual: points.len(),
            }
            .into());
        }

        if edges.len() < points.len() {
            return Err(ConstructionError::InsufficientEdges {
                points: points.len(),
                edges: edges.len(),
            }
            .into());
        }

        let points: Vec<Point> = points.iter().map(|&p| Point::new(p.into())).collect();

        let edges = edges
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| Edge::new(i, a, b, &points))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut entity = Self {
            points,
            edges,
            center: Vector2::zero(),
            body_type: BodyType::Dynamic,
            mass: config.mass,
            gravity: config.gravity,
            viscosity: config.viscosity,
            filter: CollisionFilter::default(),
        };
        entity.calculate_center();

        tracing::debug!(
            points = entity.points.len(),
            edges = entity.edges.len(),
            "constructed entity"
        );

        Ok(entity)
    }

    /// Builder-style variant of [`Entity::set_body_type`]
    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Builder-style variant of [`Entity::set_mass`]
    pub fn with_mass(mut self, mass: f64) -> Result<Self> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Builder-style variant of [`Entity::set_collision_filter`]
    pub fn with_collision_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the point masses
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point masses mutably
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Returns the edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the center as of the last [`Entity::calculate_center`]
    pub fn get_center(&self) -> Vector2 {
        self.center
    }

    pub fn get_body_type(&self) -> BodyType {
        self.body_type
    }

    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
    }

    /// Returns whether the entity is static
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Sets the mass; it must be positive and finite
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be positive and finite, got {}",
                mass
            )));
        }
        self.mass = mass;
        Ok(())
    }

    pub fn get_gravity(&self) -> f64 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    pub fn get_viscosity(&self) -> f64 {
        self.viscosity
    }

    pub fn set_viscosity(&mut self, viscosity: f64) {
        self.viscosity = viscosity;
    }

    pub fn get_collision_filter(&self) -> CollisionFilter {
        self.filter
    }

    pub fn set_collision_filter(&mut self, filter: CollisionFilter) {
        self.filter = filter;
    }

    /// Returns whether this entity's filter allows a collision test against `other`
    pub fn can_collide_with(&self, other: &Entity) -> bool {
        self.filter.should_collide(&other.filter)
    }

    /// Advances every point one step with gravity and viscosity.
    ///
    /// Uses the damped displacement scheme; see [`DampedDisplacementIntegrator`].
    pub fn apply_forces(&mut self) {
        DampedDisplacementIntegrator.integrate(self);
    }

    /// Relaxes every edge once, in order, with component-sum scaling
    pub fn update_edges(&mut self) {
        self.update_edges_with(AxisNormalization::ComponentSum);
    }

    /// Relaxes every edge once, in order
    pub fn update_edges_with(&mut self, normalization: AxisNormalization) {
        for edge in &self.edges {
            edge.relax(&mut self.points, normalization);
        }
    }

    /// Recomputes the center as the mean of the point locations and returns it
    pub fn calculate_center(&mut self) -> Vector2 {
        let sum = self
            .points
            .iter()
            .fold(Vector2::zero(), |acc, p| acc + p.location);
        self.center = sum / self.points.len() as f64;
        self.center
    }

    /// Projects every point onto `axis`, returning `(min, max)` of the dot products.
    ///
    /// Both bounds start at the first point's projection and only move on a
    /// strictly smaller or larger value.
    pub fn project_to_axis(&self, axis: &Vector2) -> (f64, f64) {
        let first = self.points[0].location.dot(axis);
        self.points[1..].iter().fold((first, first), |(min, max), p| {
            let d = p.location.dot(axis);
            (if d < min { d } else { min }, if d > max { d } else { max })
        })
    }

    /// Moves the whole entity without changing its velocity
    pub fn translate(&mut self, offset: Vector2) {
        for point in &mut self.points {
            point.translate(offset);
        }
        self.center += offset;
    }

    /// Gives every point the same implicit velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        for point in &mut self.points {
            point.set_velocity(velocity);
        }
    }

    /// Mean implicit velocity of the points
    pub fn get_velocity(&self) -> Vector2 {
        let sum = self
            .points
            .iter()
            .fold(Vector2::zero(), |acc, p| acc + p.velocity());
        sum / self.points.len() as f64
    }

    /// Returns whether every point location is finite
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.location.is_finite() && p.previous_location.is_finite())
    }
}
