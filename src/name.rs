//! Stable identifiers for components and pins.
//!
//! Bare `String` ids are easy to transpose at a call site (`link(pin_id,
//! component_id)`); newtypes catch that at compile time instead.

use std::fmt;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, Serialize, Deserialize)]
pub struct ComponentId(pub String);

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, Serialize, Deserialize)]
pub struct PinId(pub String);

impl ComponentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl PinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl fmt::Debug for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.pin)
    }
}

/// An endpoint of a [`crate::model::link::Link`]: a pin on a specific component.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub component: ComponentId,
    pub pin: PinId,
}

impl PinRef {
    pub fn new(component: ComponentId, pin: PinId) -> Self {
        Self { component, pin }
    }
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.pin)
    }
}
