//! Immutable run configuration.
//!
//! A `SimConfig` is built once (from code, or deserialized from a JSON file
//! with the `serde` feature) and handed to the simulation builder, which
//! calls [`SimConfig::validate`] before creating any agent.  Nothing mutates
//! it afterwards.

use crate::{CoreError, CoreResult};

/// Every parameter of a run.
///
/// `Default` reproduces the reference SIR scenario: 250 agents, 5 initially
/// infected, an infection period of 720 ticks and β drawn from `[0.4, 0.8]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Population size `N`.  Must be positive and fit a `u32` id.
    pub agent_count: usize,

    /// Agents that start Infected (the lowest ids).  `0 ..= agent_count`.
    pub initial_infected: usize,

    /// Fraction of agents made immobile (infinite mass, zero velocity).
    /// The lowest `floor(isolated_fraction * N)` ids are isolated.
    pub isolated_fraction: f64,

    /// Speed of every mobile agent at creation.  Must be `>= 0`.
    pub speed: f64,

    /// Continuous time per tick; displacement per tick is `velocity * dt`.
    pub dt: f64,

    /// Two agents closer than this on the torus may interact.
    pub interaction_radius: f64,

    /// Ticks an agent stays Infected before it recovers or dies.
    pub infection_period: u32,

    /// Ticks until an infection is detected.  Kept for configuration
    /// compatibility; no transition reads it.
    pub detection_time: u32,

    /// Probability that a successful contact re-infects a Recovered agent.
    pub reinfection_probability: f64,

    /// Probability that an agent dies when its infection period ends.
    pub death_rate: f64,

    /// Lower bound of the per-agent transmission probability β.
    pub beta_min: f64,

    /// Upper bound of the per-agent transmission probability β.
    pub beta_max: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent_count:             250,
            initial_infected:        5,
            isolated_fraction:       0.0,
            speed:                   0.002,
            dt:                      1.0,
            interaction_radius:      0.012,
            infection_period:        30 * 24,
            detection_time:          14 * 24,
            reinfection_probability: 0.05,
            death_rate:              0.044,
            beta_min:                0.4,
            beta_max:                0.8,
            seed:                    42,
        }
    }
}

impl SimConfig {
    /// Check every range and consistency rule.
    ///
    /// Returns the first violation found as [`CoreError::InvalidConfig`].
    pub fn validate(&self) -> CoreResult<()> {
        if self.agent_count == 0 {
            return Err(CoreError::invalid("agent_count", "must be positive"));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(CoreError::invalid(
                "agent_count",
                format!("{} does not fit a 32-bit agent id", self.agent_count),
            ));
        }
        if self.initial_infected > self.agent_count {
            return Err(CoreError::invalid(
                "initial_infected",
                format!("{} exceeds agent_count {}", self.initial_infected, self.agent_count),
            ));
        }

        unit_interval("isolated_fraction", self.isolated_fraction)?;
        unit_interval("reinfection_probability", self.reinfection_probability)?;
        unit_interval("death_rate", self.death_rate)?;

        positive("interaction_radius", self.interaction_radius)?;
        positive("dt", self.dt)?;
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(CoreError::invalid("speed", format!("must be finite and >= 0, got {}", self.speed)));
        }

        if !(self.beta_min > 0.0 && self.beta_min <= 1.0) {
            return Err(CoreError::invalid("beta_min", format!("must lie in (0, 1], got {}", self.beta_min)));
        }
        if !(self.beta_max > 0.0 && self.beta_max <= 1.0) {
            return Err(CoreError::invalid("beta_max", format!("must lie in (0, 1], got {}", self.beta_max)));
        }
        if self.beta_min > self.beta_max {
            return Err(CoreError::invalid(
                "beta_min",
                format!("{} is greater than beta_max {}", self.beta_min, self.beta_max),
            ));
        }
        Ok(())
    }

    /// Number of agents created immobile.
    #[inline]
    pub fn isolated_count(&self) -> usize {
        (self.isolated_fraction * self.agent_count as f64).floor() as usize
    }
}

fn unit_interval(field: &'static str, v: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(CoreError::invalid(field, format!("must lie in [0, 1], got {v}")))
    }
}

fn positive(field: &'static str, v: f64) -> CoreResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid(field, format!("must be finite and > 0, got {v}")))
    }
}
