//! Per-tick aggregate row.

use sir_agent::StatusTally;
use sir_core::SimClock;

/// Head count per compartment after a completed tick.
///
/// `tick` is the number of ticks completed when the row was recorded, so the
/// first row of a fresh simulation has `tick == 1`.  Dead agents are tracked
/// separately; `susceptible + infected + recovered + dead` always equals the
/// initial population size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub tick:        u64,
    /// Continuous time at the end of the tick, `tick * dt`.
    pub time:        f64,
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub dead:        usize,
}

impl StatusCounts {
    /// Row for the state after `clock.current_tick` completed ticks.
    pub fn new(clock: &SimClock, tally: StatusTally, dead: usize) -> Self {
        Self {
            tick:        clock.current_tick.0,
            time:        clock.elapsed(),
            susceptible: tally.susceptible,
            infected:    tally.infected,
            recovered:   tally.recovered,
            dead,
        }
    }

    /// Live agents.
    #[inline]
    pub fn alive(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    /// Live plus dead — constant over a run.
    #[inline]
    pub fn total(&self) -> usize {
        self.alive() + self.dead
    }
}
