pub mod simulation;
pub mod configuration;
pub mod console;
pub mod error;
pub mod format;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, gravitational_force};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, MAX_ORBITING_BODIES};
pub use simulation::driver::{Driver, Snapshot, Status, Transition};

pub use configuration::config::{ScenarioConfig, ParametersConfig, CentralConfig};

pub use console::Console;
pub use error::SimError;
