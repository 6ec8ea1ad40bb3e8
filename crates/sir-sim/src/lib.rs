//! `sir-sim` — tick loop orchestrator for the rust_sir simulation.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Move      — position += velocity · dt, wrapped onto the unit torus
//!                 (immobile agents stay put).
//!   ② Pairs     — nearest-neighbour pairs within the interaction radius,
//!                 computed once from the post-move positions.
//!   ③ Interact  — InteractionModel::interact for each pair in (a, b) order
//!                 (epidemic: transmit, then collide).
//!   ④ Update    — InteractionModel::update for each agent in id order
//!                 (epidemic: progress infection, then recover or die).
//!   ⑤ Remove    — agents whose update returned Fate::Dead leave the
//!                 population.
//!   ⑥ Record    — one StatusCounts row is appended to the history.
//! ```
//!
//! Deaths in ⑤ never affect this tick's pairs: they were fixed in ②.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the neighbour search (②) on Rayon's thread pool.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `StatusCounts`.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sir_core::SimConfig;
//!
//! let mut sim = sir_sim::initialize(SimConfig::default())?;
//! let history = sim.run(2_000);
//! let peak = history.iter().map(|c| c.infected).max();
//! ```

pub mod builder;
pub mod counts;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::{SimBuilder, initialize};
pub use counts::StatusCounts;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
