// rs_rocket_physics_wasm/src/lib.rs
// JavaScript bindings for driving a rocket simulation from a canvas front end.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use rs_rocket_physics::models::{Bounds, Color, Vector2D};
use rs_rocket_physics::simulation::{BodyId, Simulation};
use rs_rocket_physics::utils::{PhysicsError, SimulationConfig};

fn to_js_error(error: PhysicsError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

#[wasm_bindgen]
pub struct WasmSimulation {
    simulation: Simulation,
    rng: StdRng,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Creates an empty box of the given size with the default tunables and
    /// a downward field gravity of `field_gravity` units/s². `seed` drives body colours.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, field_gravity: f64, seed: u32) -> Result<WasmSimulation, JsValue> {
        let config = SimulationConfig::new(None, None, None, Some(Vector2D::new(0.0, field_gravity)));
        let bounds = Bounds::new(width, height).map_err(to_js_error)?;
        let simulation = Simulation::new(config, bounds).map_err(to_js_error)?;
        Ok(Self { simulation, rng: StdRng::seed_from_u64(seed as u64) })
    }

    /// Adds a body with a random colour and returns its handle (a `BigInt` in JS).
    #[wasm_bindgen]
    pub fn add_body(&mut self, x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Result<u64, JsValue> {
        let color = Color::random(&mut self.rng);
        let id = self.simulation
            .create_body(Vector2D::new(x, y), Vector2D::new(vx, vy), radius, color)
            .map_err(to_js_error)?;
        Ok(id.raw())
    }

    #[wasm_bindgen]
    pub fn remove_body(&mut self, id: u64) -> bool {
        self.simulation.remove_body(BodyId::from_raw(id)).is_some()
    }

    /// Handle of the topmost body under the cursor, or `undefined`.
    #[wasm_bindgen]
    pub fn body_at(&self, x: f64, y: f64) -> Option<u64> {
        self.simulation
            .body_at_point(Vector2D::new(x, y))
            .map(BodyId::raw)
    }

    /// Accelerates every body towards the cursor.
    #[wasm_bindgen]
    pub fn thrust(&mut self, x: f64, y: f64, magnitude: f64) -> u32 {
        self.simulation.thrust_all_towards(Vector2D::new(x, y), magnitude) as u32
    }

    /// Adds `count` resting bodies at random positions.
    #[wasm_bindgen]
    pub fn spawn_random(&mut self, count: u32, radius: f64) -> Result<u32, JsValue> {
        let ids = self.simulation
            .spawn_random(&mut self.rng, count as usize, radius)
            .map_err(to_js_error)?;
        Ok(ids.len() as u32)
    }

    /// Advances one tick and returns the number of collisions resolved.
    #[wasm_bindgen]
    pub fn step(&mut self) -> Result<u32, JsValue> {
        let report = self.simulation.step().map_err(to_js_error)?;
        Ok(report.collisions as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 {
        self.simulation.len() as u32
    }

    /// Body handles in draw order.
    #[wasm_bindgen]
    pub fn ids(&self) -> Vec<u64> {
        self.simulation.ids().into_iter().map(BodyId::raw).collect()
    }

    /// Flat `[x0, y0, x1, y1, ...]` in draw order.
    #[wasm_bindgen]
    pub fn positions(&self) -> Vec<f64> {
        self.simulation
            .bodies()
            .flat_map(|(_, body)| [body.position().x, body.position().y])
            .collect()
    }

    /// Flat `[vx0, vy0, ...]` in draw order.
    #[wasm_bindgen]
    pub fn velocities(&self) -> Vec<f64> {
        self.simulation
            .bodies()
            .flat_map(|(_, body)| [body.velocity().x, body.velocity().y])
            .collect()
    }

    #[wasm_bindgen]
    pub fn radii(&self) -> Vec<f64> {
        self.simulation.bodies().map(|(_, body)| body.radius()).collect()
    }

    /// Flat `[r0, g0, b0, r1, ...]` in draw order.
    #[wasm_bindgen]
    pub fn colors(&self) -> Vec<u8> {
        self.simulation
            .bodies()
            .flat_map(|(_, body)| body.color().to_array())
            .collect()
    }

    #[wasm_bindgen]
    pub fn kinetic_energy(&self) -> f64 {
        self.simulation.total_kinetic_energy()
    }

    /// Writes every body to the browser console.
    #[wasm_bindgen]
    pub fn log_bodies(&self) {
        for (id, body) in self.simulation.bodies() {
            web_sys::console::log_1(&JsValue::from_str(&format!("{} {}", id, body)));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_add_step_and_read_back() {
        let mut sim = WasmSimulation::new(1000.0, 700.0, 0.0, 1).unwrap();
        let a = sim.add_body(100.0, 100.0, 2.0, 0.0, 10.0).unwrap();
        let b = sim.add_body(115.0, 100.0, -2.0, 0.0, 10.0).unwrap();

        assert_eq!(sim.ids(), vec![a, b]);
        assert_eq!(sim.step().unwrap(), 1);
        assert_eq!(sim.positions().len(), 4);
        assert_eq!(sim.colors().len(), 6);
        assert!(sim.velocities()[0] < 0.0);
    }

    #[wasm_bindgen_test]
    fn test_pick_and_remove() {
        let mut sim = WasmSimulation::new(1000.0, 700.0, 0.0, 1).unwrap();
        let a = sim.add_body(300.0, 300.0, 0.0, 0.0, 10.0).unwrap();

        assert_eq!(sim.body_at(305.0, 300.0), Some(a));
        assert!(sim.remove_body(a));
        assert_eq!(sim.body_at(305.0, 300.0), None);
        assert_eq!(sim.count(), 0);
    }

    #[wasm_bindgen_test]
    fn test_handles_keep_full_width() {
        let mut sim = WasmSimulation::new(1000.0, 700.0, 0.0, 1).unwrap();
        sim.spawn_random(3, 5.0).unwrap();
        let id = sim.add_body(500.0, 350.0, 0.0, 0.0, 10.0).unwrap();

        assert_eq!(id, 3);
        assert_eq!(sim.ids(), vec![0, 1, 2, 3]);
        assert!(sim.remove_body(id));
        assert!(!sim.remove_body(id + (1 << 32)));
    }

    #[wasm_bindgen_test]
    fn test_invalid_body_is_rejected() {
        let mut sim = WasmSimulation::new(100.0, 100.0, 0.0, 1).unwrap();
        assert!(sim.add_body(50.0, 50.0, 0.0, 0.0, -1.0).is_err());
        assert!(sim.spawn_random(3, 80.0).is_err());
        assert_eq!(sim.spawn_random(3, 5.0).unwrap(), 3);
    }
}
