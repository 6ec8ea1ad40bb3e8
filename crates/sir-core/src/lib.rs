//! `sir-core` — foundational types for the `rust_sir` agent simulation.
//!
//! This crate is a dependency of every other `sir-*` crate.  It intentionally
//! has no `sir-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                                  |
//! | [`geom`]   | `Vec2`, periodic unit-torus wrapping and distance          |
//! | [`time`]   | `Tick`, `SimClock`                                         |
//! | [`config`] | `SimConfig` and its validation rules                       |
//! | [`rng`]    | `SimRng` — the single seeded random source of a run        |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geom::{Vec2, torus_delta, torus_distance, wrap_coord, wrap_point};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
