//! Build simulation runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Scenario`]: the
//! validated parameters plus the star's mass. Each new run asks the scenario
//! for a fresh [`System`] with the requested number of orbiting bodies, laid
//! out like the solar system:
//! - star at rest at the origin
//! - body `i` on the +x axis at the i-th planet's mean orbital radius
//! - velocity along +y at the circular speed sqrt(G M / r)

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::params::{positive, Parameters};
use crate::simulation::states::{Body, NVec2, System};

/// Upper bound on orbiting bodies, one per row of [`PLANETS`]
pub const MAX_ORBITING_BODIES: usize = 9;

/// (name, mean orbital radius in m, mass in kg)
pub const PLANETS: [(&str, f64, f64); MAX_ORBITING_BODIES] = [
    ("Mercury", 5.79e10, 3.30e23),
    ("Venus", 1.082e11, 4.87e24),
    ("Earth", 1.496e11, 5.97e24),
    ("Mars", 2.279e11, 6.42e23),
    ("Jupiter", 7.786e11, 1.898e27),
    ("Saturn", 1.4335e12, 5.68e26),
    ("Uranus", 2.8725e12, 8.68e25),
    ("Neptune", 4.4951e12, 1.02e26),
    ("Pluto", 5.9064e12, 1.46e22),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub central_mass: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            central_mass: ScenarioConfig::default().central.mass,
        }
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            seconds_per_tick: p_cfg.seconds_per_tick,
            min_distance: p_cfg.min_distance,
        };
        parameters.validate()?;
        positive("central.mass", cfg.central.mass)?;

        Ok(Self {
            parameters,
            central_mass: cfg.central.mass,
        })
    }

    /// A fresh system with `orbiting` bodies after the star.
    pub fn system(&self, orbiting: usize) -> Result<System, SimError> {
        if orbiting > MAX_ORBITING_BODIES {
            return Err(SimError::BodyCountOutOfRange(orbiting));
        }

        let mut bodies = Vec::with_capacity(orbiting + 1);
        bodies.push(Body::new(NVec2::zeros(), NVec2::zeros(), self.central_mass)?);

        for &(name, radius, mass) in PLANETS.iter().take(orbiting) {
            let speed = (self.parameters.G * self.central_mass / radius).sqrt();
            debug!("placing {name} at r = {radius:e} m, v = {speed:.1} m/s");
            bodies.push(Body::new(
                NVec2::new(radius, 0.0),
                NVec2::new(0.0, speed),
                mass,
            )?);
        }

        Ok(System::from_bodies(bodies, self.parameters.clone()))
    }
}

impl System {
    /// The default solar-system layout with `orbiting` bodies.
    pub fn new(orbiting: usize) -> Result<Self, SimError> {
        Scenario::default().system(orbiting)
    }
}
