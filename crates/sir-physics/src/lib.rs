//! `sir-physics` — movement and collisions of point-mass agents on the unit
//! torus.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`motion`]    | `move_agent`, `move_all`                               |
//! | [`collision`] | `elastic_collision`                                    |
//! | [`energy`]    | `kinetic_energy`, `momentum` — conservation diagnostics |
//!
//! Collisions only ever change velocities; positions change only in
//! [`motion`], on the next move.

pub mod collision;
pub mod energy;
pub mod motion;

#[cfg(test)]
mod tests;

pub use collision::elastic_collision;
pub use energy::{kinetic_energy, momentum};
pub use motion::{move_agent, move_all};
