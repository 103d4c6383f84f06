//! Physical parameters for a run
//!
//! `Parameters` holds the settings every tick reads:
//! - gravitational constant `G`,
//! - physical seconds integrated per tick,
//! - minimum separation below which a pair is skipped

use crate::error::SimError;

/// Gravitational constant in SI units (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

/// One day, the physical span integrated by a single tick by default
pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub seconds_per_tick: f64, // integration step dt in seconds
    pub min_distance: f64, // pairs closer than this contribute no force
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            seconds_per_tick: SECONDS_PER_DAY,
            min_distance: 1.0,
        }
    }
}

impl Parameters {
    /// Reject values a tick cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        positive("G", self.G)?;
        positive("seconds_per_tick", self.seconds_per_tick)?;
        if !(self.min_distance >= 0.0 && self.min_distance.is_finite()) {
            return Err(SimError::InvalidParameter {
                name: "min_distance",
                value: self.min_distance,
            });
        }
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}
