//! Nearest-pair interaction policy.
//!
//! Each agent nominates at most one partner: its nearest neighbour within the
//! interaction radius.  Nominations become unordered candidate pairs, and the
//! candidates are accepted closest-first, skipping any pair that would put an
//! agent into a second pair this tick.  Consequences:
//!
//! - a mutual nearest-neighbour pair is always accepted;
//! - no agent appears in more than one pair;
//! - an agent with nobody within the radius never interacts.
//!
//! Ordering ties (equal distances) are broken by the lower storage index, so
//! the result depends only on the positions.

use sir_core::Vec2;

use crate::{Neighbor, NeighborIndex};

/// Two agents that interact this tick, by storage index, `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractingPair {
    pub a:        usize,
    pub b:        usize,
    pub distance: f64,
}

/// Turn per-agent nearest neighbours into disjoint pairs.
///
/// `neighbors[i]` is agent `i`'s nomination.  The returned pairs are sorted by
/// `(a, b)`.
pub fn resolve_nearest_pairs(neighbors: &[Option<Neighbor>]) -> Vec<InteractingPair> {
    let mut candidates: Vec<InteractingPair> = neighbors
        .iter()
        .enumerate()
        .filter_map(|(i, n)| {
            n.map(|n| InteractingPair {
                a:        i.min(n.index),
                b:        i.max(n.index),
                distance: n.distance,
            })
        })
        .collect();

    candidates.sort_by(|x, y| {
        x.distance
            .total_cmp(&y.distance)
            .then(x.a.cmp(&y.a))
            .then(x.b.cmp(&y.b))
    });
    candidates.dedup_by(|x, y| x.a == y.a && x.b == y.b);

    let mut claimed = vec![false; neighbors.len()];
    let mut pairs = Vec::with_capacity(candidates.len());
    for pair in candidates {
        if claimed[pair.a] || claimed[pair.b] {
            continue;
        }
        claimed[pair.a] = true;
        claimed[pair.b] = true;
        pairs.push(pair);
    }

    pairs.sort_by_key(|p| (p.a, p.b));
    pairs
}

/// Query `index` and resolve the nearest-pair policy in one call.
pub fn interacting_pairs<I: NeighborIndex + ?Sized>(
    index:     &I,
    positions: &[Vec2],
    radius:    f64,
) -> Vec<InteractingPair> {
    resolve_nearest_pairs(&index.nearest_neighbors(positions, radius))
}
