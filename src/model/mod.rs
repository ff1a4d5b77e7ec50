//! The PCB domain model: pins, components, links, and the board layout that
//! owns them.

pub mod component;
pub mod layout;
pub mod link;
pub mod pin;

pub use component::{Component, ShapeKind, Thermal};
pub use layout::Layout;
pub use link::Link;
pub use pin::Pin;
