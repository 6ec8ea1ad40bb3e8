//! `sir-spatial` — neighbour search and interacting-pair detection on the
//! periodic unit torus.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`index`] | `NeighborIndex` trait, `Neighbor`                             |
//! | [`brute`] | `BruteForceIndex` — O(n²) scan, fine for a few hundred agents |
//! | [`rtree`] | `RTreeIndex` — `rstar` R-tree queried at toroidal images      |
//! | [`pairs`] | `InteractingPair`, `resolve_nearest_pairs`, `interacting_pairs` |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Per-agent neighbour queries run on Rayon.               |
//!
//! Both index implementations measure distance with
//! [`sir_core::torus_distance`] and break ties towards the lower storage
//! index, so they always agree on the pairs they produce.

pub mod brute;
pub mod index;
pub mod pairs;
pub mod rtree;

#[cfg(test)]
mod tests;

pub use brute::BruteForceIndex;
pub use index::{Neighbor, NeighborIndex};
pub use pairs::{InteractingPair, interacting_pairs, resolve_nearest_pairs};
pub use rtree::RTreeIndex;
