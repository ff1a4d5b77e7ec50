use serde::{Deserialize, Serialize};

use crate::geom::polygon::rect_poly;
use crate::geom::{Circle, Footprint, Pt, Xform};
use crate::model::pin::Pin;
use crate::name::{ComponentId, PinId};

/// Which footprint a component's `(size_x, size_y)` extents describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Disk,
}

/// Thermal source parameters: `thermal_field(x,y) = center_temperature *
/// exp(-r / dissipation_length)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thermal {
    pub center_temperature: f64,
    pub dissipation_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub shape: ShapeKind,
    pub size_x: f64,
    pub size_y: f64,
    position: Pt,
    /// Degrees, kept in `[0, 360)`.
    rotation: f64,
    pins: Vec<Pin>,
    pub thermal: Option<Thermal>,
}

impl Component {
    pub fn new(
        id: ComponentId,
        shape: ShapeKind,
        size_x: f64,
        size_y: f64,
        pins: Vec<Pin>,
        position: Pt,
        rotation: f64,
        thermal: Option<Thermal>,
    ) -> Self {
        let mut c = Self { id, shape, size_x, size_y, position, rotation: rotation.rem_euclid(360.0), pins, thermal };
        c.rederive_pins();
        c
    }

    pub fn position(&self) -> Pt {
        self.position
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn pin(&self, id: &PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| &p.id == id)
    }

    /// The world-frame pose transform: rotate about the local origin, then translate.
    pub fn tf(&self) -> Xform {
        Xform::pose(self.position, self.rotation)
    }

    /// `max(size_x, size_y) / 2`, the radius/half-extent used to keep a
    /// component fully in-bounds when axis-aligned.
    pub fn half_extent(&self) -> f64 {
        self.size_x.max(self.size_y) / 2.0
    }

    pub fn move_to(&mut self, p: Pt) {
        self.position = p;
        self.rederive_pins();
    }

    /// Rotate by `delta` degrees; accepts any real delta, normalizes to `[0, 360)`.
    pub fn rotate(&mut self, delta: f64) {
        self.rotation = (self.rotation + delta).rem_euclid(360.0);
        self.rederive_pins();
    }

    /// Set the absolute rotation (degrees, normalized to `[0, 360)`).
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation.rem_euclid(360.0);
        self.rederive_pins();
    }

    fn rederive_pins(&mut self) {
        let tf = self.tf();
        for pin in &mut self.pins {
            pin.rederive(&tf);
        }
    }

    /// The transformed footprint: an exact disk for `ShapeKind::Disk`, an
    /// oriented rectangle polygon for `ShapeKind::Rect`.
    pub fn shape_world(&self) -> Footprint {
        match self.shape {
            ShapeKind::Disk => {
                let r = self.size_x.max(self.size_y) / 2.0;
                Footprint::Disk(Circle::new(self.position, r))
            }
            ShapeKind::Rect => {
                let tf = self.tf();
                let pts = tf.apply_poly(rect_poly(self.size_x, self.size_y).pts().iter().copied());
                Footprint::Rect(crate::geom::Poly::new(pts))
            }
        }
    }

    /// Temperature contribution at `(x, y)`; 0 if this component has no
    /// thermal source. Vectorizable: callers evaluate this pointwise over a
    /// grid in [`crate::model::layout::Layout::max_temperature`].
    pub fn thermal_field(&self, x: f64, y: f64) -> f64 {
        match &self.thermal {
            None => 0.0,
            Some(t) => {
                let r = self.position.dist(Pt::new(x, y));
                t.center_temperature * (-r / t.dissipation_length).exp()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_component() -> Component {
        Component::new(
            ComponentId::new("C1"),
            ShapeKind::Rect,
            20.0,
            10.0,
            vec![Pin::new(PinId::new("P1"), Pt::new(5.0, 0.0))],
            Pt::new(10.0, 10.0),
            0.0,
            None,
        )
    }

    #[test]
    fn pin_world_matches_pose_after_move_and_rotate() {
        let mut c = rect_component();
        c.move_to(Pt::new(20.0, 30.0));
        c.rotate(90.0);
        let tf = c.tf();
        let pin = c.pin(&PinId::new("P1")).unwrap();
        assert!(pin.world().approx_eq(tf.apply_pt(pin.rel())));
    }

    #[test]
    fn rotation_wraps_modulo_360() {
        let mut c = rect_component();
        c.rotate(400.0);
        assert!((c.rotation() - 40.0).abs() < 1e-9);
        c.rotate(-80.0);
        assert!((c.rotation() - 320.0).abs() < 1e-9);
    }

    #[test]
    fn thermal_field_zero_without_params() {
        let c = rect_component();
        assert_eq!(c.thermal_field(100.0, 100.0), 0.0);
    }

    #[test]
    fn thermal_field_decays_with_distance() {
        let mut c = rect_component();
        c.thermal = Some(Thermal { center_temperature: 100.0, dissipation_length: 5.0 });
        let at_center = c.thermal_field(c.position().x, c.position().y);
        assert!((at_center - 100.0).abs() < 1e-9);
        let far = c.thermal_field(c.position().x + 50.0, c.position().y);
        assert!(far < at_center);
    }

    #[test]
    fn disk_shape_world_is_centered_circle() {
        let mut c = rect_component();
        c.shape = ShapeKind::Disk;
        c.size_x = 15.0;
        c.size_y = 15.0;
        if let Footprint::Disk(circ) = c.shape_world() {
            assert!((circ.r - 7.5).abs() < 1e-9);
            assert!(circ.p.approx_eq(c.position()));
        } else {
            panic!("expected disk footprint");
        }
    }
}
