use crate::bodies::Entity;
use crate::integration::Integrator;
use crate::math::Vector2;

/// Damped displacement step.
///
/// For each point with horizontal displacement `dx = location.x - previous.x`:
///
/// ```text
/// x += viscosity * dx + acceleration.x
/// y += viscosity * dx + gravity + acceleration.y
/// ```
///
/// The horizontal damped displacement is reused in the vertical update before
/// gravity is added, so a point only carries vertical momentum through its
/// horizontal motion. Use [`VerletIntegrator`](crate::integration::VerletIntegrator)
/// for the per-axis form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DampedDisplacementIntegrator;

impl Integrator for DampedDisplacementIntegrator {
    fn integrate(&self, entity: &mut Entity) {
        if entity.is_static() {
            return;
        }

        let gravity = entity.get_gravity();
        let viscosity = entity.get_viscosity();

        for point in entity.points_mut() {
            let loc = point.location;
            let carried = viscosity * (loc.x - point.previous_location.x);

            point.location = loc + Vector2::new(carried, carried + gravity) + point.acceleration;
            point.previous_location = loc;
            point.acceleration = Vector2::zero();
        }
    }

    fn name(&self) -> &str {
        "DampedDisplacement"
    }
}
