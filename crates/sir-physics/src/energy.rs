//! Conservation diagnostics.  Infinite-mass agents are excluded: they are
//! stationary by construction and would otherwise contribute `inf * 0`.

use sir_agent::Agent;
use sir_core::Vec2;

/// Total kinetic energy `Σ ½ m |v|²` of the finite-mass agents.
pub fn kinetic_energy<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> f64 {
    agents
        .into_iter()
        .filter(|a| !a.is_immovable())
        .map(|a| 0.5 * a.mass * a.vel.norm_sq())
        .sum()
}

/// Total linear momentum `Σ m v` of the finite-mass agents.
pub fn momentum<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Vec2 {
    agents
        .into_iter()
        .filter(|a| !a.is_immovable())
        .fold(Vec2::ZERO, |acc, a| acc + a.vel * a.mass)
}
