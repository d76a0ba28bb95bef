use crate::error::PhysicsError;
use crate::integration::IntegratorKind;
use crate::math::AxisNormalization;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation.
///
/// `gravity`, `viscosity` and `mass` are copied into an entity when it is
/// constructed; `iterations`, `integrator` and `normalization` are read every tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Vertical displacement added to every point each step
    pub gravity: f64,

    /// Scale applied to the carried-over displacement each step (1.0 = no damping)
    pub viscosity: f64,

    /// Mass given to newly constructed entities
    pub mass: f64,

    /// The number of relaxation and collision passes per tick
    pub iterations: u32,

    /// The integration scheme used by the force step
    pub integrator: IntegratorKind,

    /// How edge directions and separating axes are scaled
    pub normalization: AxisNormalization,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            viscosity: 1.0,
            mass: 1.0,
            iterations: 5,
            integrator: IntegratorKind::default(),
            normalization: AxisNormalization::default(),
        }
    }
}

impl SimulationConfig {
    /// Set the gravity for new entities.
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the viscosity for new entities.
    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = viscosity;
        self
    }

    /// Set the mass for new entities.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the number of solver iterations per tick.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the integration scheme.
    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    /// Set the axis normalization.
    pub fn with_normalization(mut self, normalization: AxisNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Checks that every tunable is usable
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !self.viscosity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "viscosity must be finite, got {}",
                self.viscosity
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidParameter(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
