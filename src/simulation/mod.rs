mod rocket_simulation;

pub use rocket_simulation::*;
