//! Contact transmission.

use sir_agent::{Agent, Status};
use sir_core::SimRng;

/// Give the infection one chance to pass between `a1` and `a2`.
///
/// Applies only when exactly one of the two is Infected.  With `infected`
/// and `healthy` the two sides:
///
/// 1. draw `u`; if `u > infected.beta` nothing happens;
/// 2. if `healthy` is Recovered, draw `v`; if `v > reinfection_probability`
///    nothing happens;
/// 3. `healthy` becomes Infected with `days_infected = 0`.
///
/// Returns `true` if an infection took place.  No draw is made when the
/// pair is not mixed.
pub fn transmit(
    a1:                      &mut Agent,
    a2:                      &mut Agent,
    reinfection_probability: f64,
    rng:                     &mut SimRng,
) -> bool {
    let (beta, healthy) = match (a1.is_infected(), a2.is_infected()) {
        (true, false) => (a1.beta, a2),
        (false, true) => (a2.beta, a1),
        _ => return false,
    };

    if rng.uniform() > beta {
        return false;
    }
    if healthy.status == Status::Recovered && rng.uniform() > reinfection_probability {
        return false;
    }

    healthy.infect();
    true
}
