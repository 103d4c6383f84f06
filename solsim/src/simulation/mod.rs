pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod timer;
pub mod driver;
