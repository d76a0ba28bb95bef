mod integrator;
mod damped;
mod verlet;

pub use self::integrator::{Integrator, IntegratorKind};
pub use self::damped::DampedDisplacementIntegrator;
pub use self::verlet::VerletIntegrator;
