//! Fixed-step time integration
//!
//! Symplectic (semi-implicit) Euler: each body's velocity is kicked by the
//! force accumulated this tick, then its position drifts with the new
//! velocity. Swapping the two stages turns this into explicit Euler, whose
//! orbits spiral outward, so keep the order.

use super::states::Body;

/// Advance every body by `dt`.
/// Forces must already be fully accumulated for the tick
pub fn symplectic_euler(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        b.integrate(dt);
    }
}
