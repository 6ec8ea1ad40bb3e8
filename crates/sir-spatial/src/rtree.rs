//! R-tree backed neighbour search for larger populations.
//!
//! # Periodic boundaries
//!
//! The tree stores each agent once, at its wrapped position.  A query for
//! agent `i` is issued at up to nine images of `i`'s position (shifted by
//! `-1`, `0`, `+1` in each axis); images whose search circle cannot reach
//! the unit square are skipped.  Every hit is then re-measured with
//! [`torus_distance`], so acceptance uses exactly the same arithmetic as
//! [`BruteForceIndex`](crate::BruteForceIndex).

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sir_core::{Vec2, torus_distance};

use crate::index::per_agent;
use crate::{Neighbor, NeighborIndex};

/// Relative slack on the R-tree query radius.  Candidates are filtered with
/// the exact torus distance afterwards.
const QUERY_SLACK: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with the storage index
/// of the agent it belongs to.
#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// Neighbour search via an `rstar` R-tree rebuilt (bulk-loaded) per query.
///
/// Roughly O(n log n) per tick; prefer it over
/// [`BruteForceIndex`](crate::BruteForceIndex) once populations reach the
/// low thousands.
#[derive(Copy, Clone, Debug, Default)]
pub struct RTreeIndex;

impl NeighborIndex for RTreeIndex {
    fn nearest_neighbors(&self, positions: &[Vec2], radius: f64) -> Vec<Option<Neighbor>> {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(index, p)| PointEntry { point: [p.x, p.y], index })
            .collect::<Vec<_>>();
        let tree = RTree::bulk_load(entries);

        let reach = radius * (1.0 + QUERY_SLACK);
        let reach_sq = reach * reach;

        per_agent(positions.len(), |i| {
            let here = positions[i];
            let mut best: Option<Neighbor> = None;

            for dx in [-1.0, 0.0, 1.0] {
                for dy in [-1.0, 0.0, 1.0] {
                    let query = [here.x + dx, here.y + dy];
                    if outside_reach(query, reach) {
                        continue;
                    }
                    for hit in tree.locate_within_distance(query, reach_sq) {
                        if hit.index == i {
                            continue;
                        }
                        let distance = torus_distance(here, positions[hit.index]);
                        if distance <= radius {
                            let candidate = Neighbor { index: hit.index, distance };
                            if candidate.beats(best.as_ref()) {
                                best = Some(candidate);
                            }
                        }
                    }
                }
            }
            best
        })
    }
}

/// `true` if a circle of radius `reach` around `q` misses the unit square.
#[inline]
fn outside_reach(q: [f64; 2], reach: f64) -> bool {
    let gap = |v: f64| (-v).max(v - 1.0).max(0.0);
    let (gx, gy) = (gap(q[0]), gap(q[1]));
    gx * gx + gy * gy > reach * reach
}
