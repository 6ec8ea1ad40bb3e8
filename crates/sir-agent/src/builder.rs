//! Seeded construction of the initial population.
//!
//! # Usage
//!
//! ```rust
//! use sir_agent::PopulationBuilder;
//! use sir_core::{SimConfig, SimRng};
//!
//! let config = SimConfig { agent_count: 100, initial_infected: 3, ..SimConfig::default() };
//! let mut rng = SimRng::new(config.seed);
//! let population = PopulationBuilder::new(&config).build(&mut rng).unwrap();
//!
//! assert_eq!(population.len(), 100);
//! assert_eq!(population.tally().infected, 3);
//! ```

use std::f64::consts::TAU;

use sir_core::{AgentId, CoreError, SimConfig, SimRng, Vec2};

use crate::{Agent, AgentResult, Population, Status};

/// Builds a [`Population`] from a [`SimConfig`].
///
/// Agent `i` (ids `0 .. agent_count`):
///
/// - is Infected if `i < initial_infected`, Susceptible otherwise;
/// - is isolated (infinite mass, zero velocity) if `i < isolated_count()`,
///   otherwise moves with speed `config.speed` along a uniformly random
///   heading and has unit mass;
/// - has a uniformly random position and β uniform in `[beta_min, beta_max]`.
///
/// Draws per agent happen in the order position x, position y, heading
/// (mobile agents only), β.
pub struct PopulationBuilder<'a> {
    config: &'a SimConfig,
    mass:   f64,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(config: &'a SimConfig) -> Self {
        Self { config, mass: 1.0 }
    }

    /// Mass given to every mobile agent (default `1.0`).
    pub fn mobile_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Validate the configuration and create all agents.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<Population> {
        let cfg = self.config;
        cfg.validate()?;

        let isolated = cfg.isolated_count();
        let beta_span = cfg.beta_max - cfg.beta_min;

        let agents = (0..cfg.agent_count)
            .map(|i| -> AgentResult<Agent> {
                let id = AgentId::try_from(i).map_err(|_| CoreError::InvalidConfig {
                    field:  "agent_count",
                    reason: format!("{} does not fit a 32-bit agent id", cfg.agent_count),
                })?;
                let pos = Vec2::new(rng.uniform(), rng.uniform());

                let agent = if i < isolated {
                    let beta = cfg.beta_min + beta_span * rng.uniform();
                    Agent::isolated(id, pos, beta)
                } else {
                    let vel = Vec2::from_angle(TAU * rng.uniform(), cfg.speed);
                    let beta = cfg.beta_min + beta_span * rng.uniform();
                    Agent::mobile(id, pos, vel, self.mass, beta)
                };

                let status = if i < cfg.initial_infected {
                    Status::Infected
                } else {
                    Status::Susceptible
                };
                Ok(agent.with_status(status))
            })
            .collect::<AgentResult<Vec<_>>>()?;

        Population::from_agents(agents)
    }
}
