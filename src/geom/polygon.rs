use crate::geom::point::Pt;
use crate::geom::rect::Rt;

/// A simple polygon given in order (either winding). Used both for rotated
/// rectangle footprints (4 vertices) and for disk approximations.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    pts: Vec<Pt>,
}

impl Poly {
    pub fn new(pts: Vec<Pt>) -> Self {
        assert!(pts.len() >= 3, "a polygon needs at least 3 vertices");
        Self { pts }
    }

    pub fn pts(&self) -> &[Pt] {
        &self.pts
    }

    pub fn edges(&self) -> impl Iterator<Item = (Pt, Pt)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }

    /// Shoelace formula; returns the unsigned area regardless of winding.
    pub fn area(&self) -> f64 {
        let sum: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        (sum / 2.0).abs()
    }

    pub fn bounds(&self) -> Rt {
        Rt::enclosing(self.pts.iter().copied())
    }

    pub fn centroid(&self) -> Pt {
        let n = self.pts.len() as f64;
        let sum = self.pts.iter().fold(Pt::zero(), |acc, &p| acc + p);
        sum * (1.0 / n)
    }

    /// True if `p` is inside this polygon, assumed convex and wound
    /// counter-clockwise (as produced by [`crate::geom::xform::Xform`]
    /// applied to [`rect_poly`] or [`Circle::as_poly`]).
    pub fn contains_convex(&self, p: Pt) -> bool {
        self.edges().all(|(a, b)| (b - a).cross(p - a) >= -crate::geom::math::EP)
    }

    /// Sutherland-Hodgman clip of `self` (assumed convex) against the convex
    /// polygon `clip`. Returns the (possibly empty) intersection polygon's
    /// vertices.
    pub fn clip_convex(&self, clip: &Poly) -> Vec<Pt> {
        let mut output = self.pts.clone();
        for (ca, cb) in clip.edges() {
            if output.is_empty() {
                break;
            }
            let input = output;
            output = Vec::with_capacity(input.len());
            let inside = |p: Pt| (cb - ca).cross(p - ca) >= -crate::geom::math::EP;
            for i in 0..input.len() {
                let cur = input[i];
                let prev = input[(i + input.len() - 1) % input.len()];
                let cur_in = inside(cur);
                let prev_in = inside(prev);
                if cur_in {
                    if !prev_in {
                        output.push(seg_intersect_line(prev, cur, ca, cb));
                    }
                    output.push(cur);
                } else if prev_in {
                    output.push(seg_intersect_line(prev, cur, ca, cb));
                }
            }
        }
        output
    }

    /// Area of the intersection of two convex polygons.
    pub fn intersection_area(&self, other: &Poly) -> f64 {
        let clipped = self.clip_convex(other);
        if clipped.len() < 3 {
            return 0.0;
        }
        Poly::new(clipped).area()
    }
}

/// Intersection of segment `(a,b)` with the infinite line through `(ca,cb)`.
/// Only called when `a`/`b` straddle the line, so the denominator is nonzero.
fn seg_intersect_line(a: Pt, b: Pt, ca: Pt, cb: Pt) -> Pt {
    let d1 = (cb - ca).cross(a - ca);
    let d2 = (cb - ca).cross(b - ca);
    let t = d1 / (d1 - d2);
    a + (b - a) * t
}

/// The axis-aligned rectangle `{(+-w/2, +-h/2)}`, wound counter-clockwise,
/// ready for transformation by a component's pose.
pub fn rect_poly(w: f64, h: f64) -> Poly {
    let (hw, hh) = (w / 2.0, h / 2.0);
    Poly::new(vec![
        Pt::new(-hw, -hh),
        Pt::new(hw, -hh),
        Pt::new(hw, hh),
        Pt::new(-hw, hh),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_area() {
        let p = rect_poly(2.0, 2.0);
        assert!((p.area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn identical_squares_fully_overlap() {
        let a = rect_poly(4.0, 4.0);
        let b = rect_poly(4.0, 4.0);
        assert!((a.intersection_area(&b) - 16.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_squares_do_not_overlap() {
        let a = rect_poly(2.0, 2.0);
        let b_pts: Vec<Pt> = rect_poly(2.0, 2.0).pts().iter().map(|&p| p + Pt::new(100.0, 0.0)).collect();
        let b = Poly::new(b_pts);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn half_overlapping_squares() {
        let a = rect_poly(2.0, 2.0); // spans [-1,1]x[-1,1]
        let b_pts: Vec<Pt> = rect_poly(2.0, 2.0).pts().iter().map(|&p| p + Pt::new(1.0, 0.0)).collect();
        let b = Poly::new(b_pts); // spans [0,2]x[-1,1]
        assert!((a.intersection_area(&b) - 1.0).abs() < 1e-6);
    }
}
