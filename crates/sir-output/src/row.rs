//! Plain data row types written by output backends.

use sir_agent::{Agent, Status};
use sir_sim::StatusCounts;

/// One live agent at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub status:   Status,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: u64, agent: &Agent) -> Self {
        Self {
            agent_id: agent.id().0,
            tick,
            x:        agent.pos.x,
            y:        agent.pos.y,
            status:   agent.status,
        }
    }
}

/// Compartment sizes after one completed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    /// Continuous simulated time, `tick * dt`.
    pub time:        f64,
    pub susceptible: u64,
    pub infected:    u64,
    pub recovered:   u64,
    pub dead:        u64,
}

impl TickSummaryRow {
    pub fn from_counts(counts: &StatusCounts) -> Self {
        Self {
            tick:        counts.tick,
            time:        counts.time,
            susceptible: counts.susceptible as u64,
            infected:    counts.infected as u64,
            recovered:   counts.recovered as u64,
            dead:        counts.dead as u64,
        }
    }
}
