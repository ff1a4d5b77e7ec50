//! Genetic operators: clone-based crossover and the two mutation operators.
//! All operators return fresh layouts (or mutate a freshly-cloned one);
//! parents are never altered.

pub mod crossover;
pub mod mutation;

pub use crossover::crossover;
pub use mutation::{mutate_position, mutate_rotation};
