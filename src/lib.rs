//! `pcbopt`: a multi-objective evolutionary optimizer for PCB component
//! placement. Evolves a population of candidate [`Layout`]s under three
//! minimization objectives — peak temperature, bounding-box area, total wire
//! length — using an NSGA-II style core: fast non-dominated sorting,
//! crowding-distance diversity, binary-tournament selection, and elitist
//! truncation.
//!
//! The crate is a library: it has no CLI, no persistence, and no routing.
//! Construct a template [`Layout`], wrap it and a [`driver::Config`] in a
//! [`driver::Driver`], and call [`driver::Driver::run`] with a seeded RNG.

pub mod driver;
pub mod error;
pub mod ga;
pub mod geom;
pub mod model;
pub mod name;
pub mod nsga2;
pub mod objective;

pub use driver::{Config, Driver, Population};
pub use error::{PcbError, Result};
pub use model::{Component, Layout, Link, Pin, ShapeKind, Thermal};
pub use name::{ComponentId, PinId, PinRef};
pub use objective::{evaluate, Objectives};
