//! The `Sim` struct and its tick loop.

use sir_agent::{AgentSnapshot, Population};
use sir_core::{AgentId, SimClock, SimConfig, SimRng, Tick};
use sir_epidemic::{Fate, InteractionModel};
use sir_physics::move_all;
use sir_spatial::{InteractingPair, NeighborIndex, interacting_pairs};
use tracing::{debug, info};

use crate::{NoopObserver, SimObserver, StatusCounts};

/// The main simulation runner.
///
/// `Sim<M, I>` owns every piece of mutable state of a run: the population,
/// the clock, the single seeded RNG and the recorded history.  `M` decides
/// what happens when two agents meet and once per tick to each agent; `I`
/// answers the neighbour queries.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`initialize`][crate::initialize].
pub struct Sim<M: InteractionModel, I: NeighborIndex> {
    config:     SimConfig,
    clock:      SimClock,
    population: Population,
    rng:        SimRng,
    model:      M,
    index:      I,
    history:    Vec<StatusCounts>,

    /// Emit `on_snapshot` every this many completed ticks (`0` = never).
    snapshot_interval: u64,

    /// Set once the extinction has been logged and reported.
    extinct_reported: bool,
}

impl<M: InteractionModel, I: NeighborIndex> Sim<M, I> {
    pub(crate) fn from_parts(
        config:            SimConfig,
        population:        Population,
        rng:               SimRng,
        model:             M,
        index:             I,
        snapshot_interval: u64,
    ) -> Self {
        Self {
            clock: SimClock::new(config.dt),
            config,
            population,
            rng,
            model,
            index,
            history: Vec::new(),
            snapshot_interval,
            extinct_reported: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick and return the row recorded for it.
    pub fn step(&mut self) -> StatusCounts {
        self.step_observed(&mut NoopObserver)
    }

    /// Run `n` ticks and return the `n` rows they recorded.
    pub fn run(&mut self, n: u64) -> &[StatusCounts] {
        self.run_observed(n, &mut NoopObserver)
    }

    /// Run up to `n` ticks, calling observer hooks at every tick boundary.
    ///
    /// [`SimObserver::should_stop`] is consulted before each tick; a `true`
    /// ends the run early.  Returns the rows recorded by this call, which are
    /// also part of [`history`](Self::history).
    pub fn run_observed<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> &[StatusCounts] {
        let start = self.history.len();
        for _ in 0..n {
            if observer.should_stop(self.clock.current_tick) {
                info!(tick = %self.clock.current_tick, "run stopped by observer");
                break;
            }
            self.step_observed(observer);
        }

        observer.on_sim_end(self.clock.current_tick);
        let last = self.history.last().copied().unwrap_or_default();
        info!(
            clock       = %self.clock,
            susceptible = last.susceptible,
            infected    = last.infected,
            recovered   = last.recovered,
            dead        = last.dead,
            "run complete"
        );
        &self.history[start..]
    }

    /// Every row recorded so far, one per completed tick, oldest first.
    ///
    /// Rows survive an interrupted run: after a stop the history ends at the
    /// last completed tick.
    pub fn history(&self) -> &[StatusCounts] {
        &self.history
    }

    /// Current head counts, without advancing.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::new(
            &self.clock,
            self.population.tally(),
            self.population.dead_count(),
        )
    }

    /// `true` once every agent has died.
    pub fn is_extinct(&self) -> bool {
        self.population.is_empty() && self.population.initial_count() > 0
    }

    /// Read-only position and status of every live agent, in id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.population.iter().map(|a| a.snapshot()).collect()
    }

    /// The pairs that would interact if the next tick's move phase were
    /// skipped: the nearest-pair relation over the current positions.
    pub fn interacting_pairs(&self) -> Vec<(AgentId, AgentId)> {
        let agents = self.population.as_slice();
        self.find_pairs()
            .into_iter()
            .map(|p| (agents[p.a].id(), agents[p.b].id()))
            .collect()
    }

    /// Number of ticks completed so far.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> StatusCounts {
        observer.on_tick_start(self.clock.current_tick);
        let counts = self.process_tick();
        let done = self.clock.current_tick;

        observer.on_tick_end(done, &counts);
        if self.snapshot_interval > 0 && done.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(done, &self.population);
        }
        if self.is_extinct() && !self.extinct_reported {
            self.extinct_reported = true;
            info!(tick = %done, "population extinct");
            observer.on_extinction(done);
        }
        counts
    }

    fn process_tick(&mut self) -> StatusCounts {
        // ── Phase 1: move ─────────────────────────────────────────────────
        move_all(self.population.as_mut_slice(), self.config.dt);

        // ── Phase 2: pairs ────────────────────────────────────────────────
        //
        // Computed once from post-move positions.  Nothing later in the tick
        // changes positions, so the pair set is fixed for phases 3 and 4.
        let pairs = self.find_pairs();

        // ── Phase 3: pairwise interaction, in (a, b) order ────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let model = &self.model;
        let rng   = &mut self.rng;
        for pair in &pairs {
            let (a, b) = self.population.pair_mut(pair.a, pair.b);
            model.interact(a, b, rng);
        }

        // ── Phase 4: per-agent update, in id order ────────────────────────
        let dead: Vec<bool> = self
            .population
            .iter_mut()
            .map(|agent| model.update(agent, rng) == Fate::Dead)
            .collect();

        // ── Phase 5: remove the dead ──────────────────────────────────────
        let died = self.population.remove_dead(&dead);

        // ── Phase 6: record ───────────────────────────────────────────────
        self.clock.advance();
        let counts = self.counts();
        self.history.push(counts);

        debug!(
            tick        = counts.tick,
            pairs       = pairs.len(),
            died,
            susceptible = counts.susceptible,
            infected    = counts.infected,
            recovered   = counts.recovered,
            "tick"
        );
        counts
    }

    fn find_pairs(&self) -> Vec<InteractingPair> {
        let positions = self.population.positions();
        interacting_pairs(&self.index, &positions, self.config.interaction_radius)
    }
}
