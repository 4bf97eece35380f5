//! Two-dimensional physics for a field of circular rockets.
//!
//! Bodies live in an axis-aligned box, bounce off its walls with a configurable
//! restitution, attract each other with an inverse-square law and collide
//! elastically. [`simulation::Simulation`] owns the bodies and drives the
//! per-tick update; the free functions in [`interactions`] can also be used on
//! bodies you manage yourself.
pub mod utils;
pub mod models;
pub mod interactions;
pub mod simulation;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
