//! `Population` — the ordered collection of live agents.
//!
//! Agents are stored in a single `Vec<Agent>` in ascending `AgentId` order.
//! Removal (death) uses `Vec::retain`, which preserves that order, so
//! iteration is stable within and across ticks and id lookup is a binary
//! search.  No agent is ever inserted after construction.

use std::collections::HashSet;

use sir_core::{AgentId, Vec2};

use crate::{Agent, AgentError, AgentResult, Status};

/// Per-compartment head count of the live population.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTally {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl StatusTally {
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}

/// Owned, ordered population of live agents.
#[derive(Clone, Debug)]
pub struct Population {
    agents:        Vec<Agent>,
    initial_count: usize,
}

impl Population {
    /// Wrap an explicit list of agents.
    ///
    /// Agents are sorted by id.  Fails if an id repeats, an infinite-mass
    /// agent has a velocity, or a position lies outside the unit square.
    pub fn from_agents(mut agents: Vec<Agent>) -> AgentResult<Self> {
        let mut seen = HashSet::with_capacity(agents.len());
        for a in &agents {
            if !seen.insert(a.id()) {
                return Err(AgentError::DuplicateId(a.id()));
            }
            if !(a.mass > 0.0) {
                return Err(AgentError::InvalidMass { id: a.id(), mass: a.mass });
            }
            if a.is_immovable() && !a.vel.is_zero() {
                return Err(AgentError::MovingImmovable(a.id()));
            }
            let inside = |v: f64| (0.0..1.0).contains(&v);
            if !inside(a.pos.x) || !inside(a.pos.y) {
                return Err(AgentError::OutOfBounds { id: a.id(), x: a.pos.x, y: a.pos.y });
            }
        }
        agents.sort_by_key(Agent::id);
        let initial_count = agents.len();
        Ok(Self { agents, initial_count })
    }

    /// Number of live agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Population size at construction.
    #[inline]
    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Agents removed by death so far.
    #[inline]
    pub fn dead_count(&self) -> usize {
        self.initial_count - self.agents.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut()
    }

    /// Look up a live agent by id.  `None` if it never existed or has died.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents
            .binary_search_by_key(&id, Agent::id)
            .ok()
            .map(|i| &self.agents[i])
    }

    /// Current positions in storage order; index `i` belongs to
    /// `as_slice()[i]`.
    pub fn positions(&self) -> Vec<Vec2> {
        self.agents.iter().map(|a| a.pos).collect()
    }

    /// Two distinct agents by storage index, mutably.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Agent, &mut Agent) {
        assert_ne!(i, j, "pair_mut requires two distinct agents");
        if i < j {
            let (lo, hi) = self.agents.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.agents.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }

    /// Drop every agent whose entry in `dead` is `true`.
    ///
    /// `dead` is indexed by storage position.  Returns the number of agents
    /// removed.
    ///
    /// # Panics
    /// Panics if `dead.len() != len()`.
    pub fn remove_dead(&mut self, dead: &[bool]) -> usize {
        assert_eq!(
            dead.len(),
            self.agents.len(),
            "remove_dead needs one flag per live agent"
        );
        let before = self.agents.len();
        let mut flags = dead.iter().copied();
        self.agents.retain(|_| flags.next() != Some(true));
        before - self.agents.len()
    }

    /// Head count per compartment.
    pub fn tally(&self) -> StatusTally {
        let mut t = StatusTally::default();
        for a in &self.agents {
            match a.status {
                Status::Susceptible => t.susceptible += 1,
                Status::Infected    => t.infected += 1,
                Status::Recovered   => t.recovered += 1,
            }
        }
        t
    }
}
