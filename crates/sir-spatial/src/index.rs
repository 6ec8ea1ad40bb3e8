//! The `NeighborIndex` trait.

use sir_core::Vec2;

/// The closest other agent found for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// Storage index of the neighbour in the queried position slice.
    pub index:    usize,
    /// Torus distance to the neighbour.
    pub distance: f64,
}

impl Neighbor {
    /// `true` if `self` should replace `current` as the nearest neighbour:
    /// strictly closer, or equally close with a lower index.
    #[inline]
    pub fn beats(&self, current: Option<&Neighbor>) -> bool {
        match current {
            None => true,
            Some(c) => match self.distance.total_cmp(&c.distance) {
                std::cmp::Ordering::Less    => true,
                std::cmp::Ordering::Equal   => self.index < c.index,
                std::cmp::Ordering::Greater => false,
            },
        }
    }
}

/// Pluggable nearest-neighbour search.
///
/// Swap implementations at compile time (the simulator is generic over this
/// trait) with no runtime overhead.
pub trait NeighborIndex {
    /// For every `positions[i]`, the closest `positions[j]` (`j != i`) whose
    /// torus distance is at most `radius`, or `None` if there is none.
    ///
    /// The returned `Vec` has the same length and order as `positions`.
    /// Distance ties resolve to the lower `j`.
    fn nearest_neighbors(&self, positions: &[Vec2], radius: f64) -> Vec<Option<Neighbor>>;
}

/// Evaluate `f` for every agent index in `0..n`, in order.
///
/// With the `parallel` feature the calls run on Rayon; the output order is
/// still `0..n`.
pub(crate) fn per_agent<F>(n: usize, f: F) -> Vec<Option<Neighbor>>
where
    F: Fn(usize) -> Option<Neighbor> + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        (0..n).map(f).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(f).collect()
    }
}
