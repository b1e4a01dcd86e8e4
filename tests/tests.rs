use orbitsim::configuration::config::{ScenarioConfig, ViewConfig};
use orbitsim::simulation::forces::NewtonianGravity;
use orbitsim::simulation::integrator::{euler_step, update_position};
use orbitsim::simulation::params::{Parameters, AU, G, MIN_SEPARATION, TIMESTEP};
use orbitsim::simulation::scenario::Scenario;
use orbitsim::simulation::states::{Body, System};

use std::collections::VecDeque;

/// Build a body at rest at (x, y) with mass m and neutral display attributes
pub fn body_at(x: f64, y: f64, m: f64) -> Body {
    Body {
        x: [x, y].into(),
        v: [0.0, 0.0].into(),
        m,
        radius: 0.0,
        color: [255, 255, 255],
        anchor: false,
        distance_to_anchor: 0.0,
        trail: VecDeque::new(),
    }
}

/// Sun fixed at the origin (anchor) plus one orbiter on the negative x-axis
/// with a purely tangential velocity
pub fn sun_and_orbiter(dist: f64, vy: f64, m_sun: f64, m_orb: f64) -> System {
    let mut sun = body_at(0.0, 0.0, m_sun);
    sun.anchor = true;

    let mut orbiter = body_at(-dist, 0.0, m_orb);
    orbiter.v = [0.0, vy].into();

    System {
        bodies: vec![sun, orbiter],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        timestep: TIMESTEP,
        g: G,
        min_separation: MIN_SEPARATION,
        trail_limit: None,
    }
}

/// Build the gravity term matching a set of parameters
pub fn gravity(p: &Parameters) -> NewtonianGravity {
    NewtonianGravity {
        g: p.g,
        min_separation: p.min_separation,
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_matches_newtons_law() {
    let p = test_params();
    let grav = gravity(&p);

    let mut earth = body_at(-AU, 0.0, 5.9742e24);
    let sun = body_at(0.0, 0.0, 1.98892e30);

    let f = grav.pairwise_attraction(&mut earth, &sun);

    let expected = G * earth.m * sun.m / (AU * AU);
    let rel = (f.norm() - expected).abs() / expected;

    assert!(rel < 1e-12, "Force magnitude off by relative {}", rel);
    assert!(f.x > 0.0, "Force does not point toward the sun: {:?}", f);
}

#[test]
fn gravity_axis_aligned_pair_acts_along_x() {
    let p = test_params();
    let grav = gravity(&p);

    let mut a = body_at(0.0, 0.0, 1.0e24);
    let b = body_at(2.0 * AU, 0.0, 1.0e24);

    let f = grav.pairwise_attraction(&mut a, &b);

    // atan2(0, +x) is exactly zero, so the y component must be exactly zero
    assert_eq!(f.y, 0.0, "Axis-aligned pair produced off-axis force");
    assert!(f.x > 0.0);
}

#[test]
fn gravity_newton_third_law() {
    let p = test_params();
    let grav = gravity(&p);

    let mut a = body_at(0.0, 0.0, 1.98892e30);
    let mut b = body_at(AU, 0.5 * AU, 5.9742e24);

    let f_ab = grav.pairwise_attraction(&mut a, &b);
    let f_ba = grav.pairwise_attraction(&mut b, &a);

    let net = f_ab + f_ba;

    assert!(
        net.norm() < f_ab.norm() * 1e-12,
        "Forces not equal and opposite, net: {:?}",
        net
    );
}

#[test]
fn gravity_inverse_square_law() {
    let p = test_params();
    let grav = gravity(&p);

    let mut a_near = body_at(0.0, 0.0, 1.0);
    let near = body_at(2.0, 0.0, 1.0);

    let mut a_far = body_at(0.0, 0.0, 1.0);
    let far = body_at(4.0, 0.0, 1.0);

    let f_near = grav.pairwise_attraction(&mut a_near, &near);
    let f_far = grav.pairwise_attraction(&mut a_far, &far);

    let ratio = f_near.norm() / f_far.norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_records_raw_anchor_distance() {
    let p = test_params();
    let grav = gravity(&p);

    let mut earth = body_at(-AU, 0.0, 5.9742e24);
    let mut sun = body_at(0.0, 0.0, 1.98892e30);
    sun.anchor = true;

    grav.pairwise_attraction(&mut earth, &sun);

    assert_eq!(earth.distance_to_anchor, AU);
}

#[test]
fn gravity_clamps_below_min_separation() {
    let p = test_params();
    let grav = gravity(&p);

    // Closer than the clamp floor; the force must act as if at the floor,
    // while the recorded anchor distance stays raw
    let mut a = body_at(0.0, 0.0, 2.0);
    let mut b = body_at(0.25, 0.0, 3.0);
    b.anchor = true;

    let f = grav.pairwise_attraction(&mut a, &b);

    let expected = p.g * a.m * b.m / (p.min_separation * p.min_separation);
    assert!(
        (f.norm() - expected).abs() < expected * 1e-12,
        "Clamped force wrong: {} vs {}",
        f.norm(),
        expected
    );
    assert_eq!(a.distance_to_anchor, 0.25);
}

#[test]
fn gravity_coincident_bodies_stay_finite() {
    let p = test_params();
    let grav = gravity(&p);

    let mut a = body_at(0.0, 0.0, 1.98892e30);
    let b = body_at(0.0, 0.0, 1.98892e30);

    let f = grav.pairwise_attraction(&mut a, &b);

    assert!(f.x.is_finite() && f.y.is_finite(), "Force blew up: {:?}", f);

    // atan2(0, 0) is 0, so the whole (clamped) force lands on +x
    let expected = p.g * a.m * b.m / (p.min_separation * p.min_separation);
    assert_eq!(f.y, 0.0);
    assert!((f.x - expected).abs() < expected * 1e-12);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn update_position_kick_then_drift() {
    // Toy numbers chosen so every operation is exact in f64:
    // F = 1 * 1 * 8 / 2^2 = 2 N on a unit mass over a unit step
    let p = Parameters {
        timestep: 1.0,
        g: 1.0,
        min_separation: 1.0,
        trail_limit: None,
    };
    let grav = gravity(&p);

    let mut body = body_at(0.0, 0.0, 1.0);
    let other = body_at(2.0, 0.0, 8.0);

    update_position(&mut body, [&other], &grav, &p);

    assert_eq!(body.v.x, 2.0);
    assert_eq!(body.v.y, 0.0);
    // Position moves with the already-updated velocity
    assert_eq!(body.x.x, 2.0);
    assert_eq!(body.trail.len(), 1);
    assert_eq!(body.trail[0], body.x);
}

#[test]
fn euler_step_earth_first_day() {
    let p = test_params();
    let grav = gravity(&p);

    let mut sys = sun_and_orbiter(AU, 29_783.0, 1.98892e30, 5.9742e24);
    euler_step(&mut sys, &grav, &p);

    let sun = &sys.bodies[0];
    let earth = &sys.bodies[1];

    // Sun update runs first: a = G * m_earth / AU^2 pulls it toward -x
    assert!(
        (sun.v.x + 1.5393e-3).abs() < 1e-6,
        "Sun velocity after one day: {:?}",
        sun.v
    );
    assert!((sun.x.x + 133.0).abs() < 0.1, "Sun moved {:?}", sun.x);

    // Earth gains a = G * m_sun / AU^2 toward the sun over one day
    assert!(
        (earth.v.x - 512.47).abs() < 0.1,
        "Earth radial velocity after one day: {:?}",
        earth.v
    );
    assert!((earth.v.y - 29_783.0).abs() < 1e-6);

    // Position used the updated velocity, so y advanced a full day at v.y
    assert!(
        (earth.x.y - 29_783.0 * 86_400.0).abs() < 1.0,
        "Earth tangential position: {:?}",
        earth.x
    );

    // Anchor distance was refreshed during the force pass
    assert!(
        (earth.distance_to_anchor - AU).abs() < 200.0,
        "Anchor distance: {}",
        earth.distance_to_anchor
    );

    assert_eq!(sys.t, 86_400.0);
}

#[test]
fn euler_step_orbit_stays_bounded() {
    let p = test_params();
    let grav = gravity(&p);

    let mut sys = sun_and_orbiter(AU, 29_783.0, 1.98892e30, 5.9742e24);

    let mut min_r = f64::MAX;
    let mut max_r: f64 = 0.0;

    // Two simulated years of daily steps
    for _ in 0..730 {
        euler_step(&mut sys, &grav, &p);
        let r = (sys.bodies[1].x - sys.bodies[0].x).norm();
        min_r = min_r.min(r);
        max_r = max_r.max(r);
    }

    assert!(min_r > 0.5 * AU, "Orbit collapsed, min r = {}", min_r);
    assert!(max_r < 2.0 * AU, "Orbit escaped, max r = {}", max_r);
}

#[test]
fn euler_step_is_deterministic() {
    let scenario = Scenario::solar_system();
    let p = scenario.parameters.clone();
    let grav = gravity(&p);

    let mut a = scenario.system.clone();
    let mut b = scenario.system.clone();

    for _ in 0..50 {
        euler_step(&mut a, &grav, &p);
        euler_step(&mut b, &grav, &p);
    }

    for (ba, bb) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(ba.x, bb.x, "Positions diverged between identical runs");
        assert_eq!(ba.v, bb.v, "Velocities diverged between identical runs");
    }
}

#[test]
fn euler_step_updates_sequentially() {
    let p = test_params();
    let grav = gravity(&p);

    // Two identical bodies at rest. The second body is updated after the
    // first has already moved toward it, so it sees a shorter distance and
    // picks up the larger kick. That asymmetry is the defined behavior.
    let mut sys = System {
        bodies: vec![
            body_at(-0.5 * AU, 0.0, 1.98892e30),
            body_at(0.5 * AU, 0.0, 1.98892e30),
        ],
        t: 0.0,
    };

    euler_step(&mut sys, &grav, &p);

    let dv0 = sys.bodies[0].v.x;
    let dv1 = sys.bodies[1].v.x;

    assert!(dv0 > 0.0, "First body not pulled right: {}", dv0);
    assert!(dv1 < 0.0, "Second body not pulled left: {}", dv1);
    assert!(
        dv1.abs() > dv0.abs(),
        "Second body should see the first one already moved: {} vs {}",
        dv1.abs(),
        dv0.abs()
    );
}

#[test]
fn euler_step_single_body_coasts() {
    let p = test_params();
    let grav = gravity(&p);

    let mut body = body_at(0.0, 0.0, 5.9742e24);
    body.v = [1_000.0, -500.0].into();

    let mut sys = System {
        bodies: vec![body],
        t: 0.0,
    };

    euler_step(&mut sys, &grav, &p);

    let b = &sys.bodies[0];
    assert_eq!(b.v.x, 1_000.0);
    assert_eq!(b.v.y, -500.0);
    assert_eq!(b.x.x, 1_000.0 * 86_400.0);
    assert_eq!(b.x.y, -500.0 * 86_400.0);
    assert_eq!(b.trail.len(), 1);
}

#[test]
fn euler_step_coincident_bodies_stay_finite() {
    let p = test_params();
    let grav = gravity(&p);

    let mut sys = System {
        bodies: vec![
            body_at(0.0, 0.0, 1.98892e30),
            body_at(0.0, 0.0, 1.98892e30),
        ],
        t: 0.0,
    };

    euler_step(&mut sys, &grav, &p);

    for b in &sys.bodies {
        assert!(b.x.x.is_finite() && b.x.y.is_finite(), "Position blew up: {:?}", b.x);
        assert!(b.v.x.is_finite() && b.v.y.is_finite(), "Velocity blew up: {:?}", b.v);
    }
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_grows_one_point_per_step() {
    let scenario = Scenario::inner_planets();
    let p = scenario.parameters.clone();
    let grav = gravity(&p);

    let mut sys = scenario.system;

    for _ in 0..25 {
        euler_step(&mut sys, &grav, &p);
    }

    for b in &sys.bodies {
        assert_eq!(b.trail.len(), 25);
        assert_eq!(
            *b.trail.back().unwrap(),
            b.x,
            "Trail tail is not the current position"
        );
    }
}

#[test]
fn trail_limit_keeps_newest_points() {
    let mut p = test_params();
    p.trail_limit = Some(10);
    let grav = gravity(&p);

    let mut sys = sun_and_orbiter(AU, 29_783.0, 1.98892e30, 5.9742e24);

    let mut recorded = Vec::new();
    for _ in 0..30 {
        euler_step(&mut sys, &grav, &p);
        recorded.push(sys.bodies[1].x);
    }

    let trail = &sys.bodies[1].trail;
    assert_eq!(trail.len(), 10);

    // The retained window is exactly the last ten recorded positions
    for (stored, expected) in trail.iter().zip(recorded[20..].iter()) {
        assert_eq!(stored, expected);
    }
}

// ==================================================================================
// Scenario & config tests
// ==================================================================================

#[test]
fn yaml_scenario_fills_defaults() {
    let yaml = r#"
bodies:
  - x: [ 0.0, 0.0 ]
    v: [ 0.0, 0.0 ]
    m: 1.98892e30
    radius: 30.0
    anchor: true
  - x: [ -1.496e11, 0.0 ]
    v: [ 0.0, 29783.0 ]
    m: 5.9742e24
    radius: 16.0
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.engine.view, ViewConfig::Orbits);
    assert_eq!(scenario.parameters.timestep, TIMESTEP);
    assert_eq!(scenario.parameters.g, G);
    assert_eq!(scenario.parameters.min_separation, MIN_SEPARATION);
    assert_eq!(scenario.parameters.trail_limit, None);

    let bodies = &scenario.system.bodies;
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].anchor);
    assert!(!bodies[1].anchor);
    assert_eq!(bodies[1].color, [255, 255, 255]);
    assert_eq!(bodies[1].x.x, -1.496e11);
}

#[test]
fn yaml_scenario_applies_overrides() {
    let yaml = r#"
engine:
  view: "plain"

parameters:
  timestep: 3600.0
  trail_limit: 500

bodies:
  - x: [ 0.0, 0.0 ]
    v: [ 0.0, 0.0 ]
    m: 1.0e30
    radius: 10.0
    anchor: true
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.engine.view, ViewConfig::Plain);
    assert_eq!(scenario.parameters.timestep, 3600.0);
    assert_eq!(scenario.parameters.trail_limit, Some(500));
    // Unspecified fields keep the compiled-in constants
    assert_eq!(scenario.parameters.g, G);
    assert_eq!(scenario.gravity.g, G);
}

#[test]
fn preset_inner_planets_shape() {
    let scenario = Scenario::inner_planets();
    let bodies = &scenario.system.bodies;

    assert_eq!(bodies.len(), 5);
    assert_eq!(bodies.iter().filter(|b| b.anchor).count(), 1);
    assert!(bodies[0].anchor, "Sun must be the anchor");
    assert!(bodies.iter().all(|b| b.m > 0.0));

    // Earth sits at -1 AU with its tangential velocity
    assert_eq!(bodies[3].x.x, -AU);
    assert_eq!(bodies[3].v.y, 29_783.0);
}

#[test]
fn preset_solar_system_shape() {
    let scenario = Scenario::solar_system();
    let bodies = &scenario.system.bodies;

    assert_eq!(bodies.len(), 9);
    assert_eq!(bodies.iter().filter(|b| b.anchor).count(), 1);
    assert!(bodies.iter().all(|b| b.m > 0.0));

    // Neptune is appended last
    assert_eq!(bodies[8].x.x, 30.06 * AU);
}
