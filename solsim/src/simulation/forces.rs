//! Force contributors for the simulation
//!
//! Defines the [`Force`] trait, the [`ForceSet`] a `System` ticks with, and
//! direct pairwise Newtonian gravity

use std::fmt;

use log::warn;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Force on `bi` due to `bj`: G * mi * mj / d^2 along the unit vector toward `bj`.
///
/// `None` when the bodies are within `min_distance` of each other
/// (coincident bodies included, since `min_distance >= 0`), so a close pass
/// drops one contribution instead of producing an infinite force.
#[allow(non_snake_case)]
pub fn gravitational_force(bi: &Body, bj: &Body, G: f64, min_distance: f64) -> Option<NVec2> {
    let r = bj.x - bi.x;
    let d = r.norm();
    if !(d > min_distance) {
        return None;
    }
    let magnitude = G * bi.mass() * bj.mass() / (d * d);
    Some(magnitude * (r / d))
}

/// Trait for force sources. Implementations add their contribution into
/// `bodies[i].f` for each body
pub trait Force {
    fn accumulate(&self, bodies: &mut [Body]);
}

/// Collection of force terms summed into each body's force every tick
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// The set every `System` uses: direct gravity from `parameters`
    pub fn gravity(parameters: &Parameters) -> Self {
        Self::new().with(NewtonianGravity {
            G: parameters.G,
            min_distance: parameters.min_distance,
        })
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Add every term's contribution; callers zero the forces first
    pub fn accumulate_forces(&self, bodies: &mut [Body]) {
        for term in &self.terms {
            term.accumulate(bodies);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ForceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForceSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Direct O(n^2) Newtonian gravity
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // closer pairs are skipped for the tick
}

impl Force for NewtonianGravity {
    fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();

        // Each unordered pair (i, j), i < j, once: i is pulled along +r,
        // j gets the exact negation
        for i in 0..n {
            for j in (i + 1)..n {
                let Some(force) = gravitational_force(&bodies[i], &bodies[j], self.G, self.min_distance)
                else {
                    warn!("bodies {i} and {j} are too close, skipping their interaction this tick");
                    continue;
                };
                bodies[i].f += force;
                bodies[j].f -= force;
            }
        }
    }
}
