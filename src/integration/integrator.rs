use crate::bodies::Entity;
use crate::integration::{DampedDisplacementIntegrator, VerletIntegrator};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Trait for position integration schemes
pub trait Integrator: Send + Sync {
    /// Advances every point of a dynamic entity by one step and consumes the
    /// accumulated acceleration. Static entities are left untouched.
    fn integrate(&self, entity: &mut Entity);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}

/// Selects the integrator the simulation driver uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum IntegratorKind {
    /// [`DampedDisplacementIntegrator`]
    #[default]
    DampedDisplacement,

    /// [`VerletIntegrator`]
    Verlet,
}

impl IntegratorKind {
    /// Returns the integrator for this kind
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            IntegratorKind::DampedDisplacement => &DampedDisplacementIntegrator,
            IntegratorKind::Verlet => &VerletIntegrator,
        }
    }
}
