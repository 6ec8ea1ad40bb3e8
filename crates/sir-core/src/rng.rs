//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`.  Every
//! random draw — initial positions, headings, β values, transmission and
//! recovery rolls — goes through an explicit `&mut SimRng` handed down by the
//! simulator, in a fixed order.  Nothing reads ambient or thread-local
//! randomness, so the same seed and configuration reproduce the same
//! trajectory bit for bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The single seeded random source of a simulation run.
///
/// `SimRng` is not `Clone`: two copies of the stream would make it easy to
/// draw the same numbers twice.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
