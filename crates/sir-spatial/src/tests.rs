//! Unit tests for sir-spatial.

use sir_core::{SimRng, Vec2};

fn random_positions(n: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = SimRng::new(seed);
    (0..n).map(|_| Vec2::new(rng.uniform(), rng.uniform())).collect()
}

#[cfg(test)]
mod neighbor_tests {
    use sir_core::Vec2;

    use super::random_positions;
    use crate::{BruteForceIndex, Neighbor, NeighborIndex, RTreeIndex};

    #[test]
    fn finds_closest_within_radius() {
        let pos = [Vec2::new(0.5, 0.5), Vec2::new(0.52, 0.5), Vec2::new(0.51, 0.5)];
        let nn = BruteForceIndex.nearest_neighbors(&pos, 0.05);
        assert_eq!(nn[0].unwrap().index, 2);
        assert_eq!(nn[1].unwrap().index, 2);
        assert_eq!(nn[2].unwrap().index, 0); // tie 0.01 vs 0.01 → lower index
    }

    #[test]
    fn nothing_beyond_radius() {
        let pos = [Vec2::new(0.1, 0.1), Vec2::new(0.3, 0.3)];
        let nn = BruteForceIndex.nearest_neighbors(&pos, 0.05);
        assert!(nn.iter().all(Option::is_none));
    }

    #[test]
    fn radius_is_inclusive() {
        let pos = [Vec2::new(0.25, 0.5), Vec2::new(0.5, 0.5)];
        let nn = BruteForceIndex.nearest_neighbors(&pos, 0.25);
        assert_eq!(nn[0].map(|n| n.index), Some(1));
    }

    #[test]
    fn neighbours_across_the_seam() {
        let pos = [Vec2::new(0.995, 0.002), Vec2::new(0.003, 0.998)];
        for nn in [
            BruteForceIndex.nearest_neighbors(&pos, 0.02),
            RTreeIndex.nearest_neighbors(&pos, 0.02),
        ] {
            assert_eq!(nn[0].map(|n| n.index), Some(1));
            assert_eq!(nn[1].map(|n| n.index), Some(0));
        }
    }

    #[test]
    fn tie_prefers_lower_index() {
        let n_low = Neighbor { index: 1, distance: 0.1 };
        let n_high = Neighbor { index: 4, distance: 0.1 };
        assert!(n_low.beats(Some(&n_high)));
        assert!(!n_high.beats(Some(&n_low)));
        assert!(n_high.beats(None));
    }

    #[test]
    fn rtree_matches_brute_force() {
        for (seed, radius) in [(1, 0.01), (2, 0.03), (3, 0.08), (4, 0.6)] {
            let pos = random_positions(400, seed);
            assert_eq!(
                BruteForceIndex.nearest_neighbors(&pos, radius),
                RTreeIndex.nearest_neighbors(&pos, radius),
                "seed {seed}, radius {radius}"
            );
        }
    }

    #[test]
    fn empty_and_single() {
        assert!(RTreeIndex.nearest_neighbors(&[], 0.1).is_empty());
        let one = [Vec2::new(0.5, 0.5)];
        assert_eq!(BruteForceIndex.nearest_neighbors(&one, 0.1), vec![None]);
        assert_eq!(RTreeIndex.nearest_neighbors(&one, 0.1), vec![None]);
    }
}

#[cfg(test)]
mod pair_tests {
    use proptest::prelude::*;
    use sir_core::Vec2;

    use super::random_positions;
    use crate::{BruteForceIndex, Neighbor, RTreeIndex, interacting_pairs, resolve_nearest_pairs};

    #[test]
    fn mutual_pair_reported_once() {
        let pos = [Vec2::new(0.2, 0.2), Vec2::new(0.205, 0.2)];
        let pairs = interacting_pairs(&BruteForceIndex, &pos, 0.012);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a, pairs[0].b), (0, 1));
    }

    #[test]
    fn chain_keeps_closest_pair() {
        // 0 —0.008— 1 —0.004— 2 : 1 and 2 are mutual nearest, 0 is left out.
        let pos = [Vec2::new(0.100, 0.5), Vec2::new(0.108, 0.5), Vec2::new(0.112, 0.5)];
        let pairs = interacting_pairs(&BruteForceIndex, &pos, 0.012);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a, pairs[0].b), (1, 2));
    }

    #[test]
    fn two_separate_clusters() {
        let pos = [
            Vec2::new(0.1, 0.1), Vec2::new(0.105, 0.1),
            Vec2::new(0.7, 0.7), Vec2::new(0.7, 0.706),
            Vec2::new(0.4, 0.4),
        ];
        let pairs = interacting_pairs(&RTreeIndex, &pos, 0.012);
        let ids: Vec<_> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(ids, [(0, 1), (2, 3)]);
    }

    #[test]
    fn secondary_nomination_accepted_when_free() {
        // 0 nominates 1 (dist 0.01); 1 nominates 2 (dist 0.005); 3 nominates 0
        // (dist 0.011) and is free once (0, 1) is blocked.
        let nn = [
            Some(Neighbor { index: 1, distance: 0.010 }),
            Some(Neighbor { index: 2, distance: 0.005 }),
            Some(Neighbor { index: 1, distance: 0.005 }),
            Some(Neighbor { index: 0, distance: 0.011 }),
        ];
        let pairs = resolve_nearest_pairs(&nn);
        let ids: Vec<_> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(ids, [(0, 3), (1, 2)]);
    }

    #[test]
    fn no_neighbors_no_pairs() {
        assert!(resolve_nearest_pairs(&[None, None, None]).is_empty());
    }

    #[test]
    fn index_choice_does_not_change_pairs() {
        let pos = random_positions(300, 11);
        assert_eq!(
            interacting_pairs(&BruteForceIndex, &pos, 0.03),
            interacting_pairs(&RTreeIndex, &pos, 0.03),
        );
    }

    proptest! {
        #[test]
        fn pairs_are_disjoint_and_within_radius(seed in 0u64..500, radius in 0.005f64..0.2) {
            let pos = random_positions(120, seed);
            let pairs = interacting_pairs(&BruteForceIndex, &pos, radius);
            let mut seen = vec![false; pos.len()];
            for p in &pairs {
                prop_assert!(p.a < p.b);
                prop_assert!(p.distance <= radius);
                prop_assert!(!seen[p.a] && !seen[p.b]);
                seen[p.a] = true;
                seen[p.b] = true;
            }
        }
    }
}
