//! Infection progression and its end.

use sir_agent::Agent;
use sir_core::SimRng;

/// What happens to an agent at the end of its tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fate {
    Alive,
    /// The agent is removed from the population.
    Dead,
}

/// Count one more tick of infection.  No-op unless Infected.
#[inline]
pub fn progress_infection(agent: &mut Agent) {
    if agent.is_infected() {
        agent.days_infected = agent.days_infected.saturating_add(1);
    }
}

/// End an infection that has lasted `infection_period` ticks.
///
/// Once an Infected agent's `days_infected` reaches `infection_period`, one
/// draw `u` decides: `u <= death_rate` → [`Fate::Dead`]; otherwise the agent
/// recovers (status Recovered, counter cleared).  Agents that are not
/// Infected, or not yet due, are untouched and draw nothing.
pub fn recover_or_die(
    agent:            &mut Agent,
    death_rate:       f64,
    infection_period: u32,
    rng:              &mut SimRng,
) -> Fate {
    if !agent.is_infected() || agent.days_infected < infection_period {
        return Fate::Alive;
    }
    if rng.uniform() <= death_rate {
        return Fate::Dead;
    }
    agent.recover();
    Fate::Alive
}
