//! Core state types for the simulation.
//!
//! - `Body`: one point mass (position, velocity, accumulated force, mass)
//! - `System`: the star at index 0 followed by its orbiting bodies
//!
//! A `System` also carries the physical parameters and the force set used to
//! advance it, so one call to [`System::tick`] is a complete step.

use nalgebra::Vector2;

use crate::error::SimError;
use crate::format::general;
use crate::simulation::forces::{gravitational_force, ForceSet};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Significant digits used when describing positions
const REPORT_PRECISION: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // force accumulated this tick
    m: f64, // mass, always > 0
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        if !(m > 0.0 && m.is_finite()) {
            return Err(SimError::NonPositiveMass(m));
        }
        Ok(Self {
            x,
            v,
            f: NVec2::zeros(),
            m,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Add the pull of `other` on this body into `self.f`.
    ///
    /// Only this body is touched; the reciprocal contribution is the caller's
    /// business. Returns `false` when the pair is closer than `min_distance`
    /// and nothing was added.
    #[allow(non_snake_case)]
    pub fn compute_force_from(&mut self, other: &Body, G: f64, min_distance: f64) -> bool {
        match gravitational_force(self, other, G, min_distance) {
            Some(force) => {
                self.f += force;
                true
            }
            None => false,
        }
    }

    /// v += dt * f / m
    pub fn integrate_velocity(&mut self, dt: f64) {
        self.v += dt * self.f / self.m;
    }

    /// x += dt * v
    pub fn integrate_position(&mut self, dt: f64) {
        self.x += dt * self.v;
    }

    /// Velocity first, then position with the new velocity.
    pub fn integrate(&mut self, dt: f64) {
        self.integrate_velocity(dt);
        self.integrate_position(dt);
    }

    pub fn describe(&self) -> String {
        format!(
            "x = {:<12}      y = {:<12}",
            general(self.x.x, REPORT_PRECISION),
            general(self.x.y, REPORT_PRECISION)
        )
    }
}

#[derive(Debug)]
pub struct System {
    pub bodies: Vec<Body>, // index 0 is the central body
    pub t: f64, // physical time integrated so far, seconds
    pub parameters: Parameters,
    forces: ForceSet,
}

impl System {
    /// Assemble a system from already-built bodies.
    pub fn from_bodies(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let forces = ForceSet::gravity(&parameters);
        Self {
            bodies,
            t: 0.0,
            parameters,
            forces,
        }
    }

    /// Number of orbiting bodies (everything except the star)
    pub fn orbiting_count(&self) -> usize {
        self.bodies.len().saturating_sub(1)
    }

    /// Advance by one step of `parameters.seconds_per_tick`.
    ///
    /// Every force is accumulated before any body moves.
    pub fn tick(&mut self) {
        for b in self.bodies.iter_mut() {
            b.f = NVec2::zeros();
        }
        self.forces.accumulate_forces(&mut self.bodies);

        let dt = self.parameters.seconds_per_tick;
        symplectic_euler(&mut self.bodies, dt);
        self.t += dt;
    }

    /// One line per body, central body first
    pub fn current_state_text(&self) -> String {
        self.bodies
            .iter()
            .map(Body::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    /// Kinetic plus pairwise potential energy
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self
            .bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let d = (bj.x - bi.x).norm();
                if d > self.parameters.min_distance {
                    potential -= self.parameters.G * bi.m * bj.m / d;
                }
            }
        }
        kinetic + potential
    }
}
