//! Headless run of a swarm of rockets.
//!
//! Spawns a seeded population, lets it fall under field gravity while the
//! rockets attract and collide, periodically steers them all towards the
//! centre of the box, and prints the conserved-ish quantities as it goes.
//!
//! `RUST_LOG=debug cargo run --example rocket_swarm` shows the per-tick log.
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_rocket_physics::models::{Bounds, Vector2D};
use rs_rocket_physics::simulation::Simulation;
use rs_rocket_physics::utils::{PhysicsError, SimulationConfig};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 700.0;
const ROCKETS: usize = 40;
const RADIUS: f64 = 10.0;
const SECONDS: u64 = 10;
const THRUST: f64 = 5.0;

fn main() -> Result<(), PhysicsError> {
    env_logger::init();

    let config = SimulationConfig::new(None, None, None, Some(Vector2D::new(0.0, 0.25 * 60.0)));
    let mut sim = Simulation::new(config, Bounds::new(WIDTH, HEIGHT)?)?;
    let mut rng = StdRng::seed_from_u64(2024);
    sim.spawn_random(&mut rng, ROCKETS, RADIUS)?;

    let ticks_per_second = (1.0 / sim.config().tick_duration).round() as u64;
    let centre = Vector2D::new(WIDTH / 2.0, HEIGHT / 2.0);

    println!("{:>4} {:>6} {:>12} {:>24}", "sec", "bodies", "energy", "momentum");
    for second in 1..=SECONDS {
        if second % 3 == 0 {
            sim.thrust_all_towards(centre, THRUST);
        }
        let report = sim.run(ticks_per_second)?;
        println!(
            "{:>4} {:>6} {:>12.1} {:>24} ({} collisions, {} skipped)",
            second,
            sim.len(),
            sim.total_kinetic_energy(),
            sim.total_momentum().to_string(),
            report.collisions,
            report.skipped_pairs,
        );

        // Pop whatever rocket sits at the centre, like a click in the viewer.
        if let Some(id) = sim.body_at_point(centre) {
            if let Some(body) = sim.remove_body(id) {
                println!("     removed {} {}", id, body);
            }
        }
    }
    Ok(())
}
