//! Error taxonomy for `pcbopt`.
//!
//! Construction-time violations (an unknown link endpoint, an out-of-range
//! hyperparameter) are fatal and reported through [`PcbError`]. The
//! evolutionary loop itself has no recoverable runtime errors: numeric
//! degeneracies (identical objective vectors, zero-range crowding axes) and
//! non-convergent conflict resolution are absorbed by documented fallbacks
//! rather than raised, per the propagation policy they were designed under.

use thiserror::Error;

use crate::name::{ComponentId, PinId};

#[derive(Debug, Error)]
pub enum PcbError {
    #[error("link references unknown component {0}")]
    UnknownComponent(ComponentId),

    #[error("link references unknown pin {pin} on component {component}")]
    UnknownPin { component: ComponentId, pin: PinId },

    #[error("duplicate component id {0}")]
    DuplicateComponent(ComponentId),

    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    #[error("selection attempted on a population of size {0} (need at least 2)")]
    EmptyPopulation(usize),
}

pub type Result<T> = std::result::Result<T, PcbError>;
