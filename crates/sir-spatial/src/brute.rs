//! Exhaustive pairwise scan.

use sir_core::{Vec2, torus_distance};

use crate::index::per_agent;
use crate::{Neighbor, NeighborIndex};

/// O(n²) nearest-neighbour search.  No state, no allocation beyond the
/// result.  Adequate for populations of a few hundred agents.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForceIndex;

impl NeighborIndex for BruteForceIndex {
    fn nearest_neighbors(&self, positions: &[Vec2], radius: f64) -> Vec<Option<Neighbor>> {
        per_agent(positions.len(), |i| {
            let mut best: Option<Neighbor> = None;
            for (j, &other) in positions.iter().enumerate() {
                if j == i {
                    continue;
                }
                let distance = torus_distance(positions[i], other);
                if distance <= radius {
                    let candidate = Neighbor { index: j, distance };
                    if candidate.beats(best.as_ref()) {
                        best = Some(candidate);
                    }
                }
            }
            best
        })
    }
}
