use approx::assert_relative_eq;

use crate::interactions::{
    apply_gravitational_attraction,
    bodies_in_contact,
    elastic_collision_velocities,
    gravitational_impulse,
    resolve_collision,
};
use crate::models::{Body, Bounds, Color, Vector2D};
use crate::utils::{PhysicsError, SimulationConfig};

fn body(position: (f64, f64), velocity: (f64, f64), radius: f64) -> Body {
    let bounds = Bounds::new(1000.0, 700.0).expect("Failed to create bounds");
    Body::new(position.into(), velocity.into(), radius, bounds, Color::BLACK)
        .expect("Failed to create body")
}

fn total_momentum(a: &Body, b: &Body) -> Vector2D {
    a.momentum() + b.momentum()
}

#[test]
fn test_equal_mass_head_on_exchanges_velocities() {
    let a = body((0.0, 0.0), (1.0, 0.0), 1.0);
    let b = body((1.0, 0.0), (-1.0, 0.0), 1.0);

    let (v1, v2) = elastic_collision_velocities(&a, &b).expect("Failed to compute collision");

    assert_relative_eq!(v1.x, -1.0);
    assert_relative_eq!(v1.y, 0.0);
    assert_relative_eq!(v2.x, 1.0);
    assert_relative_eq!(v2.y, 0.0);
}

#[test]
fn test_equal_mass_exchanges_normal_components_only() {
    // Line of centres along x; the y components are tangential and must survive.
    let a = body((300.0, 300.0), (3.0, 1.0), 10.0);
    let b = body((315.0, 300.0), (-1.0, -2.0), 10.0);

    let (v1, v2) = elastic_collision_velocities(&a, &b).expect("Failed to compute collision");

    assert_relative_eq!(v1.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(v1.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(v2.x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(v2.y, -2.0, epsilon = 1e-12);
}

#[test]
fn test_collision_conserves_momentum_and_energy() {
    let config = SimulationConfig::default();
    let cases = [
        (body((400.0, 300.0), (2.0, 0.5), 10.0), body((412.0, 306.0), (-1.0, 0.0), 5.0)),
        (body((200.0, 200.0), (0.0, 0.0), 3.0), body((204.0, 201.0), (-6.0, 2.0), 8.0)),
        (body((500.0, 350.0), (1.0, -1.0), 12.0), body((490.0, 340.0), (1.5, 0.25), 12.0)),
    ];

    for (mut a, mut b) in cases {
        let momentum_before = total_momentum(&a, &b);
        let energy_before = a.kinetic_energy() + b.kinetic_energy();

        let collided = resolve_collision(&mut a, &mut b, config.tick_duration, &config)
            .expect("Failed to resolve collision");
        assert!(collided);

        let momentum_after = total_momentum(&a, &b);
        let energy_after = a.kinetic_energy() + b.kinetic_energy();
        assert_relative_eq!(momentum_before.x, momentum_after.x, epsilon = 1e-9);
        assert_relative_eq!(momentum_before.y, momentum_after.y, epsilon = 1e-9);
        assert_relative_eq!(energy_before, energy_after, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn test_heavier_body_is_deflected_less() {
    let heavy = body((300.0, 300.0), (1.0, 0.0), 20.0);
    let light = body((320.0, 300.0), (-1.0, 0.0), 5.0);

    let (v_heavy, v_light) = elastic_collision_velocities(&heavy, &light).expect("Failed to compute collision");

    assert!(v_heavy.x > 0.5, "Heavy body should keep most of its velocity");
    assert!(v_light.x > 1.0, "Light body should bounce back faster");
}

#[test]
fn test_no_collision_when_apart() {
    let config = SimulationConfig::default();
    let mut a = body((100.0, 100.0), (1.0, 0.0), 10.0);
    let mut b = body((125.0, 100.0), (-1.0, 0.0), 10.0);
    let (a_before, b_before) = (a.clone(), b.clone());

    let collided = resolve_collision(&mut a, &mut b, config.tick_duration, &config)
        .expect("Failed to resolve collision");

    assert!(!collided);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_touching_bodies_are_in_contact() {
    let a = body((100.0, 100.0), (0.0, 0.0), 10.0);
    let b = body((120.0, 100.0), (0.0, 0.0), 10.0);
    let c = body((120.5, 100.0), (0.0, 0.0), 10.0);
    assert!(bodies_in_contact(&a, &b));
    assert!(!bodies_in_contact(&a, &c));
}

#[test]
fn test_overlapping_pair_is_separated() {
    let config = SimulationConfig::default();
    let dt = 2.0;
    let mut a = body((100.0, 100.0), (2.0, 0.0), 10.0);
    let mut b = body((105.0, 100.0), (-2.0, 0.0), 10.0);
    assert_eq!(a.mass(), b.mass());
    assert!(a.position().distance(b.position()) < a.radius() + b.radius());

    let collided = resolve_collision(&mut a, &mut b, dt, &config).expect("Failed to resolve collision");

    assert!(collided);
    assert_relative_eq!(a.velocity().x, -2.0);
    assert_relative_eq!(b.velocity().x, 2.0);
    assert!(a.position().distance(b.position()) > 20.0, "Bodies still overlap after resolution");
    // Two integrations happened for each body.
    assert_eq!(a.elapsed_time(), 2.0 * dt);
    assert_eq!(b.elapsed_time(), 2.0 * dt);
}

#[test]
fn test_coincident_centres_are_rejected_without_mutation() {
    let config = SimulationConfig::default();
    let mut a = body((100.0, 100.0), (1.0, 0.0), 10.0);
    let mut b = body((100.0, 100.0), (-1.0, 0.0), 10.0);
    let (a_before, b_before) = (a.clone(), b.clone());

    let result = resolve_collision(&mut a, &mut b, config.tick_duration, &config);
    assert_eq!(result, Err(PhysicsError::ObjectsAtSamePosition));
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);

    let result = apply_gravitational_attraction(&mut a, &b, config.tick_duration, &config);
    assert_eq!(result, Err(PhysicsError::ObjectsAtSamePosition));
    assert_eq!(a, a_before);
}

#[test]
fn test_negative_time_step_is_rejected() {
    let config = SimulationConfig::default();
    let mut a = body((100.0, 100.0), (0.0, 0.0), 10.0);
    let mut b = body((300.0, 100.0), (0.0, 0.0), 10.0);
    assert_eq!(resolve_collision(&mut a, &mut b, -1.0, &config), Err(PhysicsError::InvalidTime));
    assert_eq!(apply_gravitational_attraction(&mut a, &b, f64::NAN, &config), Err(PhysicsError::InvalidTime));
}

#[test]
fn test_gravitational_impulse_magnitude_and_direction() {
    let a = body((100.0, 100.0), (0.0, 0.0), 1.0);
    let b = body((100.0, 300.0), (0.0, 0.0), 4.0);

    let impulse = gravitational_impulse(&a, &b, 0.5, 10_000.0).expect("Failed to compute impulse");

    // 16 mass * 0.5 s / 200² * 10_000 = 2.0, pointing straight at b.
    assert_relative_eq!(impulse.x, 0.0);
    assert_relative_eq!(impulse.y, 2.0, epsilon = 1e-12);
}

#[test]
fn test_gravity_is_asymmetric_and_integrates() {
    let config = SimulationConfig::default();
    let dt = config.tick_duration;
    let mut a = body((100.0, 350.0), (0.0, 0.0), 5.0);
    let b = body((300.0, 350.0), (0.0, 0.0), 10.0);
    let b_before = b.clone();

    apply_gravitational_attraction(&mut a, &b, dt, &config).expect("Failed to apply gravity");

    let expected_speed = b.mass() * dt / (200.0 * 200.0) * config.gravity_constant;
    assert_relative_eq!(a.velocity().x, expected_speed, epsilon = 1e-12);
    assert_relative_eq!(a.position().x, 100.0 + expected_speed * dt, epsilon = 1e-12);
    assert_eq!(a.elapsed_time(), dt);
    assert_eq!(b, b_before);
}

#[test]
fn test_gravity_falls_off_with_square_of_distance() {
    let near_target = body((200.0, 350.0), (0.0, 0.0), 10.0);
    let far_target = body((300.0, 350.0), (0.0, 0.0), 10.0);
    let attracted = body((100.0, 350.0), (0.0, 0.0), 1.0);

    let near = gravitational_impulse(&attracted, &near_target, 1.0, 1.0).expect("Failed to compute impulse");
    let far = gravitational_impulse(&attracted, &far_target, 1.0, 1.0).expect("Failed to compute impulse");

    assert_relative_eq!(near.magnitude() / far.magnitude(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_body_methods_delegate() {
    let config = SimulationConfig::default();
    let mut a = body((100.0, 100.0), (2.0, 0.0), 10.0);
    let mut b = body((105.0, 100.0), (-2.0, 0.0), 10.0);
    assert!(a.resolve_collision(&mut b, 2.0, &config).expect("Failed to resolve collision"));

    let mut c = body((500.0, 100.0), (0.0, 0.0), 10.0);
    c.apply_gravitational_attraction(&a, config.tick_duration, &config).expect("Failed to apply gravity");
    assert!(c.velocity().x < 0.0, "c should be pulled towards a");
}
