//! The `InteractionModel` trait — what happens when agents meet.

use sir_agent::Agent;
use sir_core::{SimConfig, SimRng};
use sir_physics::elastic_collision;

use crate::{Fate, progress_infection, recover_or_die, transmit};

/// Pluggable per-tick dynamics layered on top of movement.
///
/// The simulator calls, every tick and after all agents have moved:
///
/// 1. [`interact`](Self::interact) once for each interacting pair, in pair
///    order;
/// 2. [`update`](Self::update) once for each agent, in storage order.
///
/// Agents whose `update` returns [`Fate::Dead`] are removed after the whole
/// update pass, so deaths never disturb the pairs of the current tick.
///
/// # Example
///
/// ```rust,ignore
/// struct Sticky;
///
/// impl InteractionModel for Sticky {
///     fn interact(&self, a: &mut Agent, b: &mut Agent, _rng: &mut SimRng) {
///         a.vel = Vec2::ZERO;
///         b.vel = Vec2::ZERO;
///     }
/// }
/// ```
pub trait InteractionModel {
    /// React to a contact between `a` and `b`.
    fn interact(&self, a: &mut Agent, b: &mut Agent, rng: &mut SimRng);

    /// Per-agent bookkeeping after all contacts.  Default: nothing, agent
    /// survives.
    fn update(&self, _agent: &mut Agent, _rng: &mut SimRng) -> Fate {
        Fate::Alive
    }
}

// ── BilliardModel ─────────────────────────────────────────────────────────────

/// Pure physics: interacting pairs bounce elastically, nothing else.
#[derive(Copy, Clone, Debug, Default)]
pub struct BilliardModel;

impl InteractionModel for BilliardModel {
    fn interact(&self, a: &mut Agent, b: &mut Agent, _rng: &mut SimRng) {
        elastic_collision(a, b);
    }
}

// ── EpidemicModel ─────────────────────────────────────────────────────────────

/// SIR dynamics on top of elastic collisions.
///
/// Per pair: transmit, then collide.  Per agent: progress the infection
/// counter, then recover or die.
#[derive(Clone, Debug, PartialEq)]
pub struct EpidemicModel {
    pub reinfection_probability: f64,
    pub death_rate:              f64,
    pub infection_period:        u32,
}

impl EpidemicModel {
    /// Take the disease parameters from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            reinfection_probability: config.reinfection_probability,
            death_rate:              config.death_rate,
            infection_period:        config.infection_period,
        }
    }
}

impl InteractionModel for EpidemicModel {
    fn interact(&self, a: &mut Agent, b: &mut Agent, rng: &mut SimRng) {
        transmit(a, b, self.reinfection_probability, rng);
        elastic_collision(a, b);
    }

    fn update(&self, agent: &mut Agent, rng: &mut SimRng) -> Fate {
        progress_infection(agent);
        recover_or_die(agent, self.death_rate, self.infection_period, rng)
    }
}
