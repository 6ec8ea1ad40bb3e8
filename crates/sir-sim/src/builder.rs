//! Fluent builder for constructing a [`Sim`].

use sir_agent::{Population, PopulationBuilder};
use sir_core::{SimConfig, SimRng};
use sir_epidemic::{EpidemicModel, InteractionModel};
use sir_spatial::{BruteForceIndex, NeighborIndex};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M, I>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population size, disease parameters, seed, …
/// - `M: InteractionModel` — e.g. [`EpidemicModel`] or
///   [`sir_epidemic::BilliardModel`]
/// - `I: NeighborIndex` — [`BruteForceIndex`] for a few hundred agents,
///   [`sir_spatial::RTreeIndex`] beyond that
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                         |
/// |-------------------------|-------------------------------------------------|
/// | `.population(p)`        | Seeded from the config by [`PopulationBuilder`] |
/// | `.snapshot_interval(n)` | `0` — `on_snapshot` never fires                 |
///
/// # Example
///
/// ```rust,ignore
/// let model = EpidemicModel::from_config(&config);
/// let mut sim = SimBuilder::new(config, model, RTreeIndex)
///     .snapshot_interval(24)
///     .build()?;
/// sim.run_observed(2_000, &mut observer);
/// ```
pub struct SimBuilder<M: InteractionModel, I: NeighborIndex> {
    config:            SimConfig,
    model:             M,
    index:             I,
    population:        Option<Population>,
    snapshot_interval: u64,
}

impl<M: InteractionModel, I: NeighborIndex> SimBuilder<M, I> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, model: M, index: I) -> Self {
        Self {
            config,
            model,
            index,
            population:        None,
            snapshot_interval: 0,
        }
    }

    /// Supply the initial population explicitly instead of generating it.
    ///
    /// Its size must equal `config.agent_count`.  The RNG is still seeded
    /// from `config.seed` and drives every draw of the run.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Fire [`SimObserver::on_snapshot`][crate::SimObserver::on_snapshot]
    /// every `n` completed ticks.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the config, create the population and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<M, I>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let population = match self.population {
            Some(p) => {
                if p.len() != self.config.agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.config.agent_count,
                        got:      p.len(),
                        what:     "population",
                    });
                }
                p
            }
            None => PopulationBuilder::new(&self.config).build(&mut rng)?,
        };

        let tally = population.tally();
        info!(
            agents   = population.len(),
            infected = tally.infected,
            isolated = population.iter().filter(|a| a.is_immovable()).count(),
            seed     = self.config.seed,
            "simulation initialised"
        );

        Ok(Sim::from_parts(
            self.config,
            population,
            rng,
            self.model,
            self.index,
            self.snapshot_interval,
        ))
    }
}

/// Build the SIR epidemic over a brute-force neighbour index.
///
/// Fails with [`SimError::Core`] wrapping `CoreError::InvalidConfig` when the
/// config breaks a validation rule.
pub fn initialize(config: SimConfig) -> SimResult<Sim<EpidemicModel, BruteForceIndex>> {
    let model = EpidemicModel::from_config(&config);
    SimBuilder::new(config, model, BruteForceIndex).build()
}
