// src/utils/constants_config.rs
use crate::models::Vector2D;
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG,
    errors::PhysicsError
};

/// Tunables for a rocket simulation.
///
/// * `restitution` - Fraction of speed retained per wall bounce, within (0, 1].
/// * `gravity_constant` - Multiplier for the pairwise attraction between bodies.
/// * `tick_duration` - Seconds advanced by one call to `Simulation::step`.
/// * `field_gravity` - Uniform acceleration applied to every body each tick (zero by default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub restitution: f64,
    pub gravity_constant: f64,
    pub tick_duration: f64,
    pub field_gravity: Vector2D,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Creates a configuration, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_rocket_physics::utils::{SimulationConfig, DEFAULT_GRAVITY_CONSTANT};
    ///
    /// let config = SimulationConfig::new(Some(0.8), None, Some(0.01), None);
    /// assert_eq!(config.restitution, 0.8);
    /// assert_eq!(config.gravity_constant, DEFAULT_GRAVITY_CONSTANT);
    /// assert_eq!(config.tick_duration, 0.01);
    /// ```
    pub fn new(
        restitution: Option<f64>,
        gravity_constant: Option<f64>,
        tick_duration: Option<f64>,
        field_gravity: Option<Vector2D>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            restitution: restitution.unwrap_or(default.restitution),
            gravity_constant: gravity_constant.unwrap_or(default.gravity_constant),
            tick_duration: tick_duration.unwrap_or(default.tick_duration),
            field_gravity: field_gravity.unwrap_or(default.field_gravity),
        }
    }

    /// Checks that every tunable is usable by the simulation.
    ///
    /// # Errors
    /// * `InvalidRestitution` if restitution is outside (0, 1].
    /// * `InvalidTime` if the tick duration is not a positive finite number.
    /// * `CalculationError` if the gravity constant or field gravity is not finite.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(PhysicsError::InvalidRestitution);
        }
        if !self.tick_duration.is_finite() || self.tick_duration <= 0.0 {
            return Err(PhysicsError::InvalidTime);
        }
        if !self.gravity_constant.is_finite() {
            return Err(PhysicsError::CalculationError("Gravity constant must be finite".to_string()));
        }
        if !self.field_gravity.is_finite() {
            return Err(PhysicsError::CalculationError("Field gravity must be finite".to_string()));
        }
        Ok(())
    }

    /// Returns the velocity change the uniform field adds over `dt` seconds.
    pub fn field_impulse(&self, dt: f64) -> Vector2D {
        self.field_gravity.scale(dt)
    }
}
