use thiserror::Error;

use sir_core::{AgentId, CoreError};

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("agent id {0} appears more than once")]
    DuplicateId(AgentId),

    #[error("{0} has infinite mass but a nonzero velocity")]
    MovingImmovable(AgentId),

    #[error("{id} mass must be positive, got {mass}")]
    InvalidMass { id: AgentId, mass: f64 },

    #[error("{id} position {x}, {y} lies outside the unit square")]
    OutOfBounds { id: AgentId, x: f64, y: f64 },
}

pub type AgentResult<T> = Result<T, AgentError>;
