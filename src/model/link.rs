use serde::{Deserialize, Serialize};

use crate::name::PinRef;

/// An unordered pair of pin endpoints the optimizer wants to keep physically
/// close. Both endpoints must resolve within the owning [`crate::model::layout::Layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub a: PinRef,
    pub b: PinRef,
}

impl Link {
    pub fn new(a: PinRef, b: PinRef) -> Self {
        Self { a, b }
    }
}
