use crate::bodies::Entity;
use crate::integration::Integrator;
use crate::math::Vector2;

/// Damped position Verlet in frame units:
/// `location += viscosity * (location - previous) + (0, gravity) + acceleration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerletIntegrator;

impl Integrator for VerletIntegrator {
    fn integrate(&self, entity: &mut Entity) {
        if entity.is_static() {
            return;
        }

        let gravity = Vector2::new(0.0, entity.get_gravity());
        let viscosity = entity.get_viscosity();

        for point in entity.points_mut() {
            let loc = point.location;
            point.location = loc + point.velocity() * viscosity + gravity + point.acceleration;
            point.previous_location = loc;
            point.acceleration = Vector2::zero();
        }
    }

    fn name(&self) -> &str {
        "Verlet"
    }
}
