// src/models/body.rs

use std::fmt;

use crate::interactions::{apply_gravitational_attraction, reflect_unit, resolve_collision};
use crate::models::{Color, Vector2D};
use crate::utils::{PhysicsError, SimulationConfig, AREAL_DENSITY, MIN_SEPARATION_SQUARED};

/// The rectangle a body is confined to, spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Creates bounds after checking both extents are positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PhysicsError::InvalidBounds);
        }
        Ok(Bounds { width, height })
    }

    /// Whether a circle of `radius` can sit inside the bounds at all.
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}

/// A circular body ("rocket") moving inside a walled rectangle.
///
/// Mass is not stored: it is always `radius²` (see [`AREAL_DENSITY`]), so it
/// follows any change in radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vector2D,
    velocity: Vector2D,
    radius: f64,
    elapsed_time: f64,
    color: Color,
    bounds: Bounds,
}

impl Body {
    /// Creates a new body.
    ///
    /// # Arguments
    /// * `position` - Centre of the body.
    /// * `velocity` - Initial velocity.
    /// * `radius` - Radius, which also fixes the mass (`radius²`).
    /// * `bounds` - Walls the body bounces off.
    /// * `color` - Display colour.
    ///
    /// # Errors
    /// * `InvalidRadius` if the radius is not a positive finite number.
    /// * `InvalidBounds` if the bounds are narrower than the body's diameter.
    /// * `InvalidPosition` if the position is not finite.
    /// * `InvalidVelocity` if the velocity is not finite.
    ///
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::{Body, Bounds, Color, Vector2D};
    ///
    /// let bounds = Bounds::new(1000.0, 700.0).unwrap();
    /// let body = Body::new(Vector2D::new(500.0, 350.0), Vector2D::ZERO, 10.0, bounds, Color::BLACK).unwrap();
    /// assert_eq!(body.mass(), 100.0);
    ///
    /// assert!(Body::new(Vector2D::ZERO, Vector2D::ZERO, -1.0, bounds, Color::BLACK).is_err());
    /// ```
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        radius: f64,
        bounds: Bounds,
        color: Color,
    ) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius);
        }
        if !bounds.fits(radius) {
            return Err(PhysicsError::InvalidBounds);
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidPosition);
        }
        if !velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocity);
        }
        Ok(Body {
            position,
            velocity,
            radius,
            elapsed_time: 0.0,
            color,
            bounds,
        })
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        AREAL_DENSITY * self.radius * self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Total simulated time this body has been integrated over.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn add_velocity(&mut self, delta: Vector2D) {
        self.velocity += delta;
    }

    pub fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
    }

    /// Moves the body without touching its velocity (used when dragging).
    /// No wall clamping happens until the next integration.
    pub fn add_position(&mut self, delta: Vector2D) {
        self.position += delta;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    /// Point-in-circle test, boundary included.
    pub fn contains_point(&self, point: Vector2D) -> bool {
        self.position.distance_squared(point) <= self.radius * self.radius
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.magnitude_squared()
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity.scale(self.mass())
    }

    /// Adds `magnitude` worth of velocity pointing from the body towards `target`.
    ///
    /// # Errors
    /// Returns `ObjectsAtSamePosition` when the target sits on the body's centre.
    pub fn thrust_towards(&mut self, target: Vector2D, magnitude: f64) -> Result<(), PhysicsError> {
        let offset = target - self.position;
        if offset.magnitude_squared() < MIN_SEPARATION_SQUARED {
            return Err(PhysicsError::ObjectsAtSamePosition);
        }
        self.velocity += offset.normalized()?.scale(magnitude);
        Ok(())
    }

    /// Advances the body by `dt` seconds and bounces it off the walls.
    ///
    /// Position moves by `velocity * dt`. Each axis is then clamped so the
    /// circle stays inside the bounds. If a wall was reached, the velocity is
    /// scaled by the configured restitution and reflected about the wall's
    /// inward normal. When both axes hit a wall in the same step only the
    /// vertical wall's normal is used.
    ///
    /// # Errors
    /// Returns `InvalidTime` if `dt` is negative or not finite. The body is left untouched.
    ///
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::{Body, Bounds, Color, Vector2D};
    /// use rs_rocket_physics::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::default();
    /// let bounds = Bounds::new(100.0, 100.0).unwrap();
    /// let mut body = Body::new(Vector2D::new(4.0, 50.0), Vector2D::new(-3.0, 0.0), 5.0, bounds, Color::BLACK).unwrap();
    ///
    /// body.integrate(config.tick_duration, &config).unwrap();
    ///
    /// assert_eq!(body.position().x, 5.0);
    /// assert!((body.velocity().x - 3.0 * config.restitution).abs() < 1e-12);
    /// ```
    pub fn integrate(&mut self, dt: f64, config: &SimulationConfig) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTime);
        }
        self.elapsed_time += dt;
        let moved = self.position + self.velocity * dt;

        let (x, x_normal) = clamp_to_walls(moved.x, self.radius, self.bounds.width);
        let (y, y_normal) = clamp_to_walls(moved.y, self.radius, self.bounds.height);

        let normal = match (x_normal, y_normal) {
            (_, Some(ny)) => Some(Vector2D::new(0.0, ny)),
            (Some(nx), None) => Some(Vector2D::new(nx, 0.0)),
            (None, None) => None,
        };

        if let Some(normal) = normal {
            self.velocity = reflect_unit(self.velocity.scale(config.restitution), normal);
        }
        self.position = Vector2D::new(x, y);
        Ok(())
    }

    /// Pulls this body towards `other`, then integrates it. See
    /// [`apply_gravitational_attraction`].
    pub fn apply_gravitational_attraction(
        &mut self,
        other: &Body,
        dt: f64,
        config: &SimulationConfig,
    ) -> Result<(), PhysicsError> {
        apply_gravitational_attraction(self, other, dt, config)
    }

    /// Resolves an elastic collision with `other`. See [`resolve_collision`].
    pub fn resolve_collision(
        &mut self,
        other: &mut Body,
        dt: f64,
        config: &SimulationConfig,
    ) -> Result<bool, PhysicsError> {
        resolve_collision(self, other, dt, config)
    }
}

/// Clamps one coordinate to `[radius, extent - radius]`.
/// Returns the clamped value and the sign of the inward wall normal if a wall was reached.
fn clamp_to_walls(value: f64, radius: f64, extent: f64) -> (f64, Option<f64>) {
    if value - radius <= 0.0 {
        (radius, Some(1.0))
    } else if value >= extent - radius {
        (extent - radius, Some(-1.0))
    } else {
        (value, None)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Body[pos={}, vel={}, r={}, t={}]",
            self.position, self.velocity, self.radius, self.elapsed_time
        )
    }
}
