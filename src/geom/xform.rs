use auto_ops::impl_op_ex;

use crate::geom::point::Pt;

/// A rigid 2-D transform: rotate about the origin, then translate.
///
/// Composition is right-to-left like function composition:
/// `(a * b).apply_pt(p) == a.apply_pt(b.apply_pt(p))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xform {
    cos: f64,
    sin: f64,
    translate: Pt,
}

impl Xform {
    pub const IDENTITY: Xform = Xform { cos: 1.0, sin: 0.0, translate: Pt::new(0.0, 0.0) };

    /// `deg` is an angle in degrees; internally trig uses radians.
    pub fn rotate(deg: f64) -> Self {
        let rad = deg.to_radians();
        Self { cos: rad.cos(), sin: rad.sin(), translate: Pt::zero() }
    }

    pub fn translate(p: Pt) -> Self {
        Self { cos: 1.0, sin: 0.0, translate: p }
    }

    /// Rotate by `deg` about the origin then translate to `pos` — the pose
    /// transform used to place a component's body-local frame into the board.
    pub fn pose(pos: Pt, deg: f64) -> Self {
        Self::translate(pos) * Self::rotate(deg)
    }

    pub fn apply_pt(&self, p: Pt) -> Pt {
        Pt::new(self.cos * p.x - self.sin * p.y, self.sin * p.x + self.cos * p.y) + self.translate
    }

    /// Apply the rotational part only, ignoring translation (for direction vectors).
    pub fn apply_vec(&self, v: Pt) -> Pt {
        Pt::new(self.cos * v.x - self.sin * v.y, self.sin * v.x + self.cos * v.y)
    }

    /// Apply to every vertex of a point sequence, in order.
    pub fn apply_poly(&self, pts: impl IntoIterator<Item = Pt>) -> Vec<Pt> {
        pts.into_iter().map(|p| self.apply_pt(p)).collect()
    }
}

impl_op_ex!(*|a: &Xform, b: &Xform| -> Xform {
    Xform { cos: a.cos * b.cos - a.sin * b.sin, sin: a.sin * b.cos + a.cos * b.sin, translate: a.apply_pt(b.translate) }
});
