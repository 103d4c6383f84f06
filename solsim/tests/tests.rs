use solsim::simulation::params::GRAVITATIONAL_CONSTANT;
use solsim::{Body, ForceSet, NVec2, Parameters, SimError, System};

/// Star of mass `m_star` at the origin plus one body at (r, 0) with velocity (0, v)
pub fn star_and_planet(m_star: f64, r: f64, v: f64, dt: f64) -> System {
    let star = Body::new(NVec2::zeros(), NVec2::zeros(), m_star).unwrap();
    let planet = Body::new(NVec2::new(r, 0.0), NVec2::new(0.0, v), 5.97e24).unwrap();
    System::from_bodies(vec![star, planet], params(dt))
}

/// Two bodies separated along the x axis, at rest
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new(NVec2::new(-dist / 2.0, 0.0), NVec2::zeros(), m1).unwrap();
    let b2 = Body::new(NVec2::new(dist / 2.0, 0.0), NVec2::zeros(), m2).unwrap();
    System::from_bodies(vec![b1, b2], params(1.0))
}

pub fn params(dt: f64) -> Parameters {
    Parameters {
        seconds_per_tick: dt,
        ..Parameters::default()
    }
}

fn forces_of(sys: &mut System) -> Vec<NVec2> {
    let set = ForceSet::gravity(&sys.parameters);
    for b in sys.bodies.iter_mut() {
        b.f = NVec2::zeros();
    }
    set.accumulate_forces(&mut sys.bodies);
    sys.bodies.iter().map(|b| b.f).collect()
}

// ==================================================================================
// Body tests
// ==================================================================================

#[test]
fn body_rejects_non_positive_mass() {
    for m in [0.0, -1.0, f64::NAN] {
        let err = Body::new(NVec2::zeros(), NVec2::zeros(), m).unwrap_err();
        assert!(matches!(err, SimError::NonPositiveMass(_)), "mass {m} accepted");
    }
}

#[test]
fn compute_force_from_is_antisymmetric() {
    let mut a = Body::new(NVec2::new(1.0e9, -3.0e9), NVec2::zeros(), 2.0e25).unwrap();
    let mut b = Body::new(NVec2::new(-4.0e9, 7.0e9), NVec2::zeros(), 3.0e27).unwrap();
    let a_snapshot = a.clone();

    assert!(a.compute_force_from(&b, GRAVITATIONAL_CONSTANT, 1.0));
    assert!(b.compute_force_from(&a_snapshot, GRAVITATIONAL_CONSTANT, 1.0));

    let net = a.f + b.f;
    assert!(net.norm() <= 1e-12 * a.f.norm(), "forces not opposite: {:?} vs {:?}", a.f, b.f);
}

#[test]
fn compute_force_from_matches_newton() {
    let mut a = Body::new(NVec2::zeros(), NVec2::zeros(), 10.0).unwrap();
    let b = Body::new(NVec2::new(3.0, 4.0), NVec2::zeros(), 20.0).unwrap();

    a.compute_force_from(&b, 1.0, 0.0);

    // |F| = 1 * 10 * 20 / 25 = 8, direction (0.6, 0.8)
    assert!((a.f - NVec2::new(4.8, 6.4)).norm() < 1e-12, "got {:?}", a.f);
}

#[test]
fn coincident_bodies_contribute_nothing() {
    let mut a = Body::new(NVec2::new(5.0, 5.0), NVec2::zeros(), 1.0).unwrap();
    let b = Body::new(NVec2::new(5.0, 5.0), NVec2::zeros(), 1.0).unwrap();

    assert!(!a.compute_force_from(&b, 1.0, 0.0));
    assert_eq!(a.f, NVec2::zeros());
}

#[test]
fn integrate_updates_velocity_before_position() {
    let mut b = Body::new(NVec2::new(1.0, 2.0), NVec2::new(3.0, 0.0), 2.0).unwrap();
    b.f = NVec2::new(0.0, 4.0);

    b.integrate(0.5);

    // v = (3, 0) + 0.5 * (0, 4) / 2 = (3, 1); x = (1, 2) + 0.5 * (3, 1)
    assert_eq!(b.v, NVec2::new(3.0, 1.0));
    assert_eq!(b.x, NVec2::new(2.5, 2.5));
}

#[test]
fn describe_uses_fixed_width_general_format() {
    let b = Body::new(NVec2::new(1.496e11, 0.0), NVec2::zeros(), 1.0).unwrap();
    assert_eq!(b.describe(), "x = 1.496E+11         y = 0           ");
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let mut sys = two_body_system(1.0e10, 2.0e24, 3.0e26);
    let f = forces_of(&mut sys);

    assert_eq!(f[0], -f[1]);
    assert!(f[0].x > 0.0, "body 0 should be pulled toward body 1");
}

#[test]
fn gravity_inverse_square_law() {
    let f_r = forces_of(&mut two_body_system(1.0e10, 1.0e24, 1.0e24));
    let f_2r = forces_of(&mut two_body_system(2.0e10, 1.0e24, 1.0e24));

    let ratio = f_r[0].norm() / f_2r[0].norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn gravity_pairwise_forces_sum_to_zero() {
    let mut sys = System::new(9).unwrap();
    let f = forces_of(&mut sys);

    let net = f.iter().fold(NVec2::zeros(), |acc, fi| acc + fi);
    let scale: f64 = f.iter().map(|fi| fi.norm()).sum();
    assert!(net.norm() <= 1e-12 * scale, "net force {:?}", net);
}

// ==================================================================================
// System tests
// ==================================================================================

#[test]
fn system_rejects_too_many_bodies() {
    assert!(matches!(System::new(10), Err(SimError::BodyCountOutOfRange(10))));
}

#[test]
fn system_layout_is_deterministic() {
    let a = System::new(5).unwrap();
    let b = System::new(5).unwrap();
    assert_eq!(a.bodies, b.bodies);
    assert_eq!(a.bodies.len(), 6);
    assert_eq!(a.bodies[0].x, NVec2::zeros());
    assert_eq!(a.bodies[0].v, NVec2::zeros());
    // Earth sits at 1 AU moving at roughly 29.8 km/s
    assert_eq!(a.bodies[3].x, NVec2::new(1.496e11, 0.0));
    assert!((a.bodies[3].v.y - 2.98e4).abs() < 200.0, "v = {}", a.bodies[3].v.y);
}

#[test]
fn zero_orbiting_bodies_tick_cleanly() {
    let mut sys = System::new(0).unwrap();
    for _ in 0..10 {
        sys.tick();
    }

    assert_eq!(sys.bodies.len(), 1);
    assert_eq!(sys.bodies[0].x, NVec2::zeros());
    let text = sys.current_state_text();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("x = 0 "));
}

#[test]
fn state_text_lists_central_body_first() {
    let sys = System::new(3).unwrap();
    let text = sys.current_state_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("x = 0 "));
    assert!(lines[1].starts_with("x = 5.79E+10"));
    assert!(lines[3].starts_with("x = 1.496E+11"));
}

#[test]
fn momentum_is_conserved() {
    let mut sys = System::new(9).unwrap();
    let p0 = sys.total_momentum();
    let scale: f64 = sys.bodies.iter().map(|b| b.momentum().norm()).sum();

    for _ in 0..1000 {
        sys.tick();
    }

    let drift = (sys.total_momentum() - p0).norm();
    assert!(drift <= 1e-9 * scale, "momentum drifted by {drift}");
}

#[test]
fn tick_orders_velocity_before_position() {
    const M: f64 = 2.0e30;
    const R: f64 = 1.496e11;
    const DT: f64 = 60.0;
    let v = (GRAVITATIONAL_CONSTANT * M / R).sqrt();
    let mut sys = star_and_planet(M, R, v, DT);

    sys.tick();

    let a = -GRAVITATIONAL_CONSTANT * M / (R * R);
    let planet = &sys.bodies[1];

    // radial velocity picked up this tick is of order dt
    assert!(planet.v.x < 0.0);
    assert!((planet.v.x - DT * a).abs() < 1e-9 * (DT * a).abs());

    // position used the new velocity: x moved by dt^2 * a, not by zero
    let expected_x = R + DT * DT * a;
    assert!((planet.x.x - expected_x).abs() < 1e-3, "x = {}", planet.x.x);
    assert!((planet.x.y - DT * v).abs() < 1e-6);
}

#[test]
fn one_day_step_keeps_earth_near_one_au() {
    let mut sys = star_and_planet(2.0e30, 1.496e11, 2.98e4, 86_400.0);
    let start = sys.bodies[1].x;

    sys.tick();

    let planet = &sys.bodies[1];
    let moved = planet.x - start;
    assert!((moved.y - 2.98e4 * 86_400.0).abs() < 0.01 * 2.98e4 * 86_400.0);
    assert!(moved.x < 0.0, "no inward correction: {:?}", moved);
    assert!((planet.x.norm() / 1.496e11 - 1.0).abs() < 0.01, "r = {}", planet.x.norm());
    assert_eq!(sys.t, 86_400.0);
}

#[test]
fn one_year_orbit_stays_bounded() {
    let m = 1.989e30;
    let r = 1.496e11;
    let v = (GRAVITATIONAL_CONSTANT * m / r).sqrt();
    let mut sys = star_and_planet(m, r, v, 86_400.0);
    let e0 = sys.total_energy();

    for _ in 0..365 {
        sys.tick();
        let radius = (sys.bodies[1].x - sys.bodies[0].x).norm();
        assert!((radius / r - 1.0).abs() < 0.05, "radius {radius}");
    }

    let e1 = sys.total_energy();
    assert!(((e1 - e0) / e0).abs() < 0.05, "energy drifted from {e0} to {e1}");
}

#[test]
fn overlapping_bodies_do_not_produce_nan() {
    let a = Body::new(NVec2::new(1.0, 1.0), NVec2::zeros(), 1.0e20).unwrap();
    let b = Body::new(NVec2::new(1.0, 1.0), NVec2::zeros(), 1.0e20).unwrap();
    let c = Body::new(NVec2::new(1.0e9, 0.0), NVec2::zeros(), 1.0e20).unwrap();
    let mut sys = System::from_bodies(vec![a, b, c], params(10.0));

    sys.tick();

    for body in &sys.bodies {
        assert!(body.x.iter().all(|c| c.is_finite()));
        assert!(body.v.iter().all(|c| c.is_finite()));
    }
    // the third body still pulled both of the overlapping ones
    assert!(sys.bodies[0].v.x > 0.0);
}
