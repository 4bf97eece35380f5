use crate::models::Vector2D;
use crate::utils::SimulationConfig;

/// Fraction of speed a body keeps after hitting a wall.
pub const DEFAULT_RESTITUTION: f64 = 0.75;

/// Strength multiplier for the pairwise attraction between bodies.
pub const DEFAULT_GRAVITY_CONSTANT: f64 = 10_000.0;

/// Seconds advanced per simulation tick (60 Hz).
pub const DEFAULT_TICK_DURATION: f64 = 1.0 / 60.0;

/// Mass per unit of squared radius. Fixed at 1 so that `mass == radius²`.
pub const AREAL_DENSITY: f64 = 1.0;

/// Squared centre distance under which two bodies count as coincident.
pub const MIN_SEPARATION_SQUARED: f64 = 1e-12;

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    restitution: DEFAULT_RESTITUTION,
    gravity_constant: DEFAULT_GRAVITY_CONSTANT,
    tick_duration: DEFAULT_TICK_DURATION,
    field_gravity: Vector2D::ZERO,
};
