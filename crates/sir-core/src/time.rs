//! Tick counter and the clock that maps it onto continuous time.
//!
//! The integer tick is the unit every counter and history row is keyed by.
//! `dt` only matters for displacement and for reporting continuous time:
//!
//!   time = current_tick * dt

use std::fmt;

/// Number of completed ticks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Owned by the simulator; advanced once at the end of every tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Continuous time per tick.
    pub dt: f64,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick.0 += 1;
    }

    /// Continuous time reached after `current_tick` ticks.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.elapsed())
    }
}
