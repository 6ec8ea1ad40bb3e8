//! Ballistic movement with periodic wraparound.

use sir_agent::Agent;
use sir_core::wrap_point;

/// Advance one agent by `vel * dt` and wrap it back into the unit square.
///
/// Infinite-mass agents never move, whatever their velocity says.
#[inline]
pub fn move_agent(agent: &mut Agent, dt: f64) {
    if agent.is_immovable() {
        return;
    }
    agent.pos = wrap_point(agent.pos + agent.vel * dt);
}

/// Move every agent in storage order.
pub fn move_all(agents: &mut [Agent], dt: f64) {
    for agent in agents {
        move_agent(agent, dt);
    }
}
