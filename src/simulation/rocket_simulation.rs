//! A container of rockets and the per-tick driver that advances them.
//!
//! The simulation owns every [`Body`] and hands out stable [`BodyId`] handles,
//! so a renderer or input layer can remove or drag a body without holding a
//! reference into the container. Each call to [`Simulation::step`] runs one tick:
//!
//! 1. every unordered pair is checked for a collision; pairs that did not
//!    collide attract each other (both orderings),
//! 2. the uniform field acceleration is added to every body,
//! 3. every body is integrated over the tick.
//!
//! # Example
//!
//! ```
//! use rs_rocket_physics::models::{Bounds, Color, Vector2D};
//! use rs_rocket_physics::simulation::Simulation;
//! use rs_rocket_physics::utils::SimulationConfig;
//!
//! let bounds = Bounds::new(1000.0, 700.0).unwrap();
//! let mut sim = Simulation::new(SimulationConfig::default(), bounds).unwrap();
//!
//! let a = sim.create_body(Vector2D::new(300.0, 350.0), Vector2D::ZERO, 10.0, Color::BLACK).unwrap();
//! let b = sim.create_body(Vector2D::new(700.0, 350.0), Vector2D::ZERO, 10.0, Color::BLACK).unwrap();
//!
//! sim.run(60).unwrap();
//!
//! // The two bodies have pulled towards each other.
//! assert!(sim.body(a).unwrap().position().x > 300.0);
//! assert!(sim.body(b).unwrap().position().x < 700.0);
//! ```
use std::fmt;
use std::ops::AddAssign;

use log::{debug, info, warn};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::interactions::{apply_gravitational_attraction, resolve_collision};
use crate::models::{Body, Bounds, Color, Vector2D};
use crate::utils::{PhysicsError, SimulationConfig};

/// Stable handle to a body owned by a [`Simulation`]. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    pub fn from_raw(raw: u64) -> Self {
        BodyId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened during one or more ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Ticks covered by this report.
    pub ticks: u64,
    /// Pairs resolved as collisions.
    pub collisions: usize,
    /// Individual (ordered) gravity applications.
    pub gravity_applications: usize,
    /// Pairs skipped because their centres coincided.
    pub skipped_pairs: usize,
}

impl AddAssign for StepReport {
    fn add_assign(&mut self, other: StepReport) {
        self.ticks += other.ticks;
        self.collisions += other.collisions;
        self.gravity_applications += other.gravity_applications;
        self.skipped_pairs += other.skipped_pairs;
    }
}

#[derive(Debug)]
pub struct Simulation {
    bodies: Vec<(BodyId, Body)>,
    config: SimulationConfig,
    bounds: Bounds,
    next_id: u64,
    tick_count: u64,
    elapsed_time: f64,
}

impl Simulation {
    /// Creates an empty simulation.
    ///
    /// # Errors
    /// Returns the first problem found by [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig, bounds: Bounds) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Simulation {
            bodies: Vec::new(),
            config,
            bounds,
            next_id: 0,
            tick_count: 0,
            elapsed_time: 0.0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated seconds since creation.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Takes ownership of `body` and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push((id, body));
        id
    }

    /// Builds a body confined to the simulation bounds and adds it.
    pub fn create_body(
        &mut self,
        position: Vector2D,
        velocity: Vector2D,
        radius: f64,
        color: Color,
    ) -> Result<BodyId, PhysicsError> {
        let body = Body::new(position, velocity, radius, self.bounds, color)?;
        Ok(self.add_body(body))
    }

    /// Adds `count` resting bodies at uniformly random positions with random colours.
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rs_rocket_physics::models::Bounds;
    /// use rs_rocket_physics::simulation::Simulation;
    /// use rs_rocket_physics::utils::SimulationConfig;
    ///
    /// let mut sim = Simulation::new(SimulationConfig::default(), Bounds::new(1000.0, 700.0).unwrap()).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let ids = sim.spawn_random(&mut rng, 25, 10.0).unwrap();
    /// assert_eq!(ids.len(), 25);
    /// assert_eq!(sim.len(), 25);
    /// ```
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        radius: f64,
    ) -> Result<Vec<BodyId>, PhysicsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius);
        }
        if !self.bounds.fits(radius) {
            return Err(PhysicsError::InvalidBounds);
        }
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vector2D::new(
                rng.random_range(radius..=self.bounds.width - radius),
                rng.random_range(radius..=self.bounds.height - radius),
            );
            let color = Color::random(rng);
            ids.push(self.create_body(position, Vector2D::ZERO, radius, color)?);
        }
        info!("Spawned {} bodies of radius {}", count, radius);
        Ok(ids)
    }

    /// Removes a body, returning it. Unknown handles return `None`.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        match self.index_of(id) {
            Some(index) => Some(self.bodies.remove(index).1),
            None => {
                warn!("Body {} not found, nothing removed.", id);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        let index = self.index_of(id)?;
        Some(&self.bodies[index].1)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let index = self.index_of(id)?;
        Some(&mut self.bodies[index].1)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(|(id, _)| *id).collect()
    }

    /// The most recently added body containing `point`, if any.
    pub fn body_at_point(&self, point: Vector2D) -> Option<BodyId> {
        self.bodies
            .iter()
            .rev()
            .find(|(_, body)| body.contains_point(point))
            .map(|(id, _)| *id)
    }

    pub fn total_momentum(&self) -> Vector2D {
        self.bodies
            .iter()
            .fold(Vector2D::ZERO, |sum, (_, body)| sum + body.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|(_, body)| body.kinetic_energy()).sum()
    }

    /// Resolves a collision between two bodies by handle over one tick.
    ///
    /// A body paired with itself is a no-op returning `Ok(false)`.
    ///
    /// # Errors
    /// * `UnknownBody` if either handle is not in the simulation.
    /// * Any error from [`resolve_collision`].
    pub fn resolve_collision(&mut self, a: BodyId, b: BodyId) -> Result<bool, PhysicsError> {
        if a == b {
            self.index_of(a).ok_or(PhysicsError::UnknownBody(a))?;
            return Ok(false);
        }
        let dt = self.config.tick_duration;
        let config = self.config;
        let (first, second) = self.pair_mut(a, b)?;
        resolve_collision(first, second, dt, &config)
    }

    /// Pulls body `a` towards body `b` over one tick. A body paired with itself is a no-op.
    ///
    /// # Errors
    /// * `UnknownBody` if either handle is not in the simulation.
    /// * Any error from [`apply_gravitational_attraction`].
    pub fn apply_gravitational_attraction(&mut self, a: BodyId, b: BodyId) -> Result<(), PhysicsError> {
        if a == b {
            self.index_of(a).ok_or(PhysicsError::UnknownBody(a))?;
            return Ok(());
        }
        let dt = self.config.tick_duration;
        let config = self.config;
        let (attracted, attractor) = self.pair_mut(a, b)?;
        apply_gravitational_attraction(attracted, attractor, dt, &config)
    }

    /// Adds thrust towards `target` to every body. Bodies centred on the target are skipped.
    pub fn thrust_all_towards(&mut self, target: Vector2D, magnitude: f64) -> usize {
        let mut thrusted = 0;
        for (id, body) in self.bodies.iter_mut() {
            match body.thrust_towards(target, magnitude) {
                Ok(()) => thrusted += 1,
                Err(e) => warn!("Skipping thrust for body {}: {}", id, e),
            }
        }
        thrusted
    }

    /// Advances the simulation by one tick of `config.tick_duration`.
    ///
    /// Pairs whose centres coincide are skipped for this tick (and counted in
    /// [`StepReport::skipped_pairs`]); any other error aborts the step.
    pub fn step(&mut self) -> Result<StepReport, PhysicsError> {
        let config = self.config;
        let dt = config.tick_duration;
        let mut report = StepReport { ticks: 1, ..StepReport::default() };

        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = split_pair(&mut self.bodies, i, j);
                match pairwise_step(a, b, dt, &config) {
                    Ok(true) => report.collisions += 1,
                    Ok(false) => report.gravity_applications += 2,
                    Err(PhysicsError::ObjectsAtSamePosition) => {
                        warn!(
                            "Bodies {} and {} share a position, skipping their interaction this tick.",
                            self.bodies[i].0, self.bodies[j].0
                        );
                        report.skipped_pairs += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        let field_impulse = config.field_impulse(dt);

        #[cfg(feature = "parallel")]
        self.bodies.par_iter_mut().try_for_each(|(_, body)| {
            body.add_velocity(field_impulse);
            body.integrate(dt, &config)
        })?;

        #[cfg(not(feature = "parallel"))]
        for (_, body) in self.bodies.iter_mut() {
            body.add_velocity(field_impulse);
            body.integrate(dt, &config)?;
        }

        self.tick_count += 1;
        self.elapsed_time += dt;
        debug!(
            "Tick {}: {} bodies, {} collisions, {} skipped pairs",
            self.tick_count, count, report.collisions, report.skipped_pairs
        );
        Ok(report)
    }

    /// Runs `ticks` steps and returns the combined report.
    pub fn run(&mut self, ticks: u64) -> Result<StepReport, PhysicsError> {
        let mut total = StepReport::default();
        for _ in 0..ticks {
            total += self.step()?;
        }
        Ok(total)
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|(body_id, _)| *body_id == id)
    }

    /// Mutable access to two distinct bodies, returned in argument order.
    fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Result<(&mut Body, &mut Body), PhysicsError> {
        let i = self.index_of(a).ok_or(PhysicsError::UnknownBody(a))?;
        let j = self.index_of(b).ok_or(PhysicsError::UnknownBody(b))?;
        if i < j {
            Ok(split_pair(&mut self.bodies, i, j))
        } else {
            let (second, first) = split_pair(&mut self.bodies, j, i);
            Ok((first, second))
        }
    }
}

/// Collision first; gravity in both directions only when the pair did not collide.
/// On error neither body is changed.
fn pairwise_step(a: &mut Body, b: &mut Body, dt: f64, config: &SimulationConfig) -> Result<bool, PhysicsError> {
    if resolve_collision(a, b, dt, config)? {
        return Ok(true);
    }
    let a_before = a.clone();
    apply_gravitational_attraction(a, b, dt, config)?;
    // a may have landed on b's centre; undo its half of the exchange.
    if let Err(e) = apply_gravitational_attraction(b, a, dt, config) {
        *a = a_before;
        return Err(e);
    }
    Ok(false)
}

/// Borrows entries `i < j` mutably at the same time.
fn split_pair(bodies: &mut [(BodyId, Body)], i: usize, j: usize) -> (&mut Body, &mut Body) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i].1, &mut tail[0].1)
}
