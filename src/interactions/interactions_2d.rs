// src/interactions/interactions_2d.rs

use log::trace;
use crate::models::{Body, Vector2D};
use crate::utils::{PhysicsError, SimulationConfig, MIN_SEPARATION_SQUARED};

fn check_time_step(dt: f64) -> Result<(), PhysicsError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(PhysicsError::InvalidTime);
    }
    Ok(())
}

/// Computes the velocity change `attracted` receives from `attractor` over `dt`.
///
/// The impulse points from `attracted` towards `attractor` with magnitude
/// `attractor.mass * dt / distance² * gravity_constant`.
///
/// # Errors
/// Returns `ObjectsAtSamePosition` when the two centres (almost) coincide.
pub fn gravitational_impulse(
    attracted: &Body,
    attractor: &Body,
    dt: f64,
    gravity_constant: f64,
) -> Result<Vector2D, PhysicsError> {
    let offset = attractor.position() - attracted.position();
    let distance_squared = offset.magnitude_squared();
    if distance_squared < MIN_SEPARATION_SQUARED {
        return Err(PhysicsError::ObjectsAtSamePosition);
    }
    let direction = offset / distance_squared.sqrt();
    Ok(direction.scale(attractor.mass() * dt / distance_squared * gravity_constant))
}

/// Pulls `a` towards `b` and then integrates `a` over the same `dt`.
///
/// Only `a` is affected; calling it for both orderings of a pair gives mutual
/// attraction. The trailing integration step means a gravity application always
/// changes both the velocity and the position of `a`.
///
/// # Arguments
/// * `a` - The attracted body.
/// * `b` - The attracting body.
/// * `dt` - Time step in seconds.
/// * `config` - Supplies the gravity constant and the wall restitution.
///
/// # Errors
/// * `ObjectsAtSamePosition` if the centres coincide. `a` is left untouched.
/// * `InvalidTime` if `dt` is negative or not finite.
///
/// # Example
/// ```
/// use rs_rocket_physics::interactions::apply_gravitational_attraction;
/// use rs_rocket_physics::models::{Body, Bounds, Color, Vector2D};
/// use rs_rocket_physics::utils::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// let bounds = Bounds::new(1000.0, 1000.0).unwrap();
/// let mut a = Body::new(Vector2D::new(100.0, 500.0), Vector2D::ZERO, 1.0, bounds, Color::BLACK).unwrap();
/// let b = Body::new(Vector2D::new(200.0, 500.0), Vector2D::ZERO, 10.0, bounds, Color::BLACK).unwrap();
///
/// apply_gravitational_attraction(&mut a, &b, 1.0, &config).unwrap();
///
/// // 100 mass * 1 s / 100² * 10_000 = 100 units/s towards b, then one second of motion.
/// assert_eq!(a.velocity(), Vector2D::new(100.0, 0.0));
/// assert_eq!(a.position(), Vector2D::new(200.0, 500.0));
/// ```
pub fn apply_gravitational_attraction(
    a: &mut Body,
    b: &Body,
    dt: f64,
    config: &SimulationConfig,
) -> Result<(), PhysicsError> {
    check_time_step(dt)?;
    let impulse = gravitational_impulse(a, b, dt, config.gravity_constant)?;
    a.add_velocity(impulse);
    a.integrate(dt, config)
}

/// Whether two bodies touch or overlap (`distance <= r1 + r2`).
pub fn bodies_in_contact(a: &Body, b: &Body) -> bool {
    let reach = a.radius() + b.radius();
    a.position().distance_squared(b.position()) <= reach * reach
}

/// Post-collision velocities for an elastic collision between two circles.
///
/// Uses the standard two-dimensional formula, which conserves both momentum and
/// kinetic energy for any masses:
///
/// ```text
/// v1' = v1 - (x1-x2) * [(v1-v2)·(x1-x2) / |x1-x2|²] * 2 m2 / (m1+m2)
/// v2' = v2 - (x2-x1) * [(v2-v1)·(x2-x1) / |x2-x1|²] * 2 m1 / (m1+m2)
/// ```
///
/// Contact is not checked here.
///
/// # Errors
/// Returns `ObjectsAtSamePosition` when the centres coincide and the line of
/// centres is undefined.
pub fn elastic_collision_velocities(a: &Body, b: &Body) -> Result<(Vector2D, Vector2D), PhysicsError> {
    let (x1, x2) = (a.position(), b.position());
    let (v1, v2) = (a.velocity(), b.velocity());
    let (m1, m2) = (a.mass(), b.mass());

    let separation = x1 - x2;
    let distance_squared = separation.magnitude_squared();
    if distance_squared < MIN_SEPARATION_SQUARED {
        return Err(PhysicsError::ObjectsAtSamePosition);
    }
    let total_mass = m1 + m2;

    let v1_final = v1 - separation.scale((v1 - v2).dot(separation) / distance_squared * (2.0 * m2 / total_mass));
    let v2_final = v2 - (-separation).scale((v2 - v1).dot(-separation) / distance_squared * (2.0 * m1 / total_mass));

    Ok((v1_final, v2_final))
}

/// Resolves an elastic collision between `a` and `b` if they are in contact.
///
/// When the bodies touch or overlap, their velocities are replaced by the
/// elastic-collision result and then both bodies are integrated twice with
/// `dt`, which pushes the pair apart before the next detection pass.
///
/// # Returns
/// `Ok(true)` if a collision was resolved, `Ok(false)` (with no mutation) if
/// the bodies are apart.
///
/// # Errors
/// * `ObjectsAtSamePosition` if the centres coincide. Neither body is touched.
/// * `InvalidTime` if `dt` is negative or not finite.
///
/// # Example
/// ```
/// use rs_rocket_physics::interactions::resolve_collision;
/// use rs_rocket_physics::models::{Body, Bounds, Color, Vector2D};
/// use rs_rocket_physics::utils::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// let bounds = Bounds::new(1000.0, 700.0).unwrap();
/// let mut a = Body::new(Vector2D::new(100.0, 100.0), Vector2D::new(2.0, 0.0), 10.0, bounds, Color::BLACK).unwrap();
/// let mut b = Body::new(Vector2D::new(105.0, 100.0), Vector2D::new(-2.0, 0.0), 10.0, bounds, Color::BLACK).unwrap();
///
/// assert!(resolve_collision(&mut a, &mut b, 2.0, &config).unwrap());
/// assert_eq!(a.velocity(), Vector2D::new(-2.0, 0.0));
/// assert_eq!(b.velocity(), Vector2D::new(2.0, 0.0));
/// assert!(a.position().distance(b.position()) > 20.0);
/// ```
pub fn resolve_collision(
    a: &mut Body,
    b: &mut Body,
    dt: f64,
    config: &SimulationConfig,
) -> Result<bool, PhysicsError> {
    check_time_step(dt)?;
    if !bodies_in_contact(a, b) {
        return Ok(false);
    }

    let (v1, v2) = elastic_collision_velocities(a, b)?;
    a.set_velocity(v1);
    b.set_velocity(v2);

    // Two sub-steps so the pair no longer overlaps on the next pass.
    for _ in 0..2 {
        a.integrate(dt, config)?;
        b.integrate(dt, config)?;
    }
    trace!("Resolved collision: {} <-> {}", a, b);
    Ok(true)
}
