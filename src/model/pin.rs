use serde::{Deserialize, Serialize};

use crate::geom::{Pt, Xform};
use crate::name::PinId;

/// A connection point rigidly attached to a component. `rel` is fixed at
/// construction; `world` is re-derived every time the owning component's
/// pose changes, per the invariant in spec.md §3: `world = R(theta)*rel + pos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    rel: Pt,
    world: Pt,
}

impl Pin {
    pub fn new(id: PinId, rel: Pt) -> Self {
        Self { id, rel, world: rel }
    }

    pub fn rel(&self) -> Pt {
        self.rel
    }

    pub fn world(&self) -> Pt {
        self.world
    }

    /// Recompute `world` from the owning component's current pose transform.
    pub(crate) fn rederive(&mut self, component_tf: &Xform) {
        self.world = component_tf.apply_pt(self.rel);
    }
}
