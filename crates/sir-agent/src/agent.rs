//! The agent record.

use sir_core::{AgentId, Vec2};

// ── Status ────────────────────────────────────────────────────────────────────

/// Disease compartment of an agent.
///
/// A `Vaccinated` compartment is reserved for a later extension; adding it
/// means extending this enum and [`StatusTally`](crate::StatusTally).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl Status {
    /// Stable one-letter code used by the output backends.
    pub fn code(self) -> &'static str {
        match self {
            Status::Susceptible => "S",
            Status::Infected    => "I",
            Status::Recovered   => "R",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A point-mass agent on the unit torus.
///
/// Invariants maintained by every code path in the workspace:
///
/// - `pos` lies in `[0, 1) × [0, 1)`.
/// - An agent whose `mass` is infinite has `vel == Vec2::ZERO`.
/// - `days_infected == 0` unless `status == Status::Infected`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id: AgentId,

    /// Position on the unit torus.
    pub pos: Vec2,

    /// Velocity; applied as `pos += vel * dt` on each move.
    pub vel: Vec2,

    /// Positive mass, or `f64::INFINITY` for an immobile agent that acts as a
    /// fixed wall in collisions.
    pub mass: f64,

    /// Disease compartment.
    pub status: Status,

    /// Ticks spent in the current infection.
    pub days_infected: u32,

    /// Probability that a contact with this agent, while it is Infected,
    /// passes the infection on.  In `(0, 1]`, drawn once at creation.
    pub beta: f64,
}

impl Agent {
    /// A mobile agent of the given finite `mass`.
    pub fn mobile(id: AgentId, pos: Vec2, vel: Vec2, mass: f64, beta: f64) -> Self {
        Self {
            id,
            pos,
            vel,
            mass,
            status: Status::Susceptible,
            days_infected: 0,
            beta,
        }
    }

    /// An immobile agent: infinite mass, zero velocity.
    pub fn isolated(id: AgentId, pos: Vec2, beta: f64) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            mass: f64::INFINITY,
            status: Status::Susceptible,
            days_infected: 0,
            beta,
        }
    }

    /// Builder-style status override, used when seeding initial infections.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self.days_infected = 0;
        self
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// `true` for infinite-mass agents, which never move.
    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.mass.is_infinite()
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.status == Status::Infected
    }

    /// Enter the Infected compartment with a fresh counter.
    #[inline]
    pub fn infect(&mut self) {
        self.status = Status::Infected;
        self.days_infected = 0;
    }

    /// Enter the Recovered compartment and clear the counter.
    #[inline]
    pub fn recover(&mut self) {
        self.status = Status::Recovered;
        self.days_infected = 0;
    }

    /// Read-only view for renderers and output writers.
    #[inline]
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot { id: self.id, pos: self.pos, status: self.status }
    }
}

/// The fields an external renderer may observe.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:     AgentId,
    pub pos:    Vec2,
    pub status: Status,
}
