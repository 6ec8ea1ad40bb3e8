//! `sir-epidemic` — disease dynamics and the interaction-model extension
//! point.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`transmit`]   | `transmit` — one contact, one chance of infection         |
//! | [`progress`]   | `progress_infection`, `recover_or_die`, `Fate`            |
//! | [`model`]      | `InteractionModel` trait, `EpidemicModel`, `BilliardModel` |
//!
//! # Design notes
//!
//! Every function that draws a random number takes an explicit
//! `&mut SimRng`.  The order of draws is part of the contract: transmission
//! draws the β roll first and the reinfection roll second (only for
//! Recovered targets); recovery draws one death roll.

pub mod model;
pub mod progress;
pub mod transmit;


pub use model::{BilliardModel, EpidemicModel, InteractionModel};
pub use progress::{Fate, progress_infection, recover_or_die};
pub use transmit::transmit;
