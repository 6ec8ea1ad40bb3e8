//! `sir-agent` — agent records and population storage for `rust_sir`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`agent`]      | `Agent`, `Status`, `AgentSnapshot`                       |
//! | [`population`] | `Population` — ordered, owned collection of live agents  |
//! | [`builder`]    | `PopulationBuilder` — seeded initialization from config  |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                           |
//!
//! # Design notes
//!
//! There is one agent record type.  A plain billiard ball and a
//! disease-carrying agent differ only in which fields the active interaction
//! model reads; the billiard model simply never looks at `status`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod builder;
pub mod error;
pub mod population;


pub use agent::{Agent, AgentSnapshot, Status};
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use population::{Population, StatusTally};
