//! Tagged-variant shape dispatch, in the teacher's style (`memeroute`'s
//! `model::primitive::shape::Shape`): two variants, matched on rather than
//! reached through inheritance.

use crate::geom::circle::Circle;
use crate::geom::intersect::{
    circ_circ_intersection_area, circ_circ_intersects, circ_poly_intersection_area,
    circ_poly_intersects, poly_poly_intersection_area, poly_poly_intersects,
};
use crate::geom::polygon::Poly;
use crate::geom::rect::Rt;

/// A component's transformed (world-space) footprint: either an exact disk
/// or an oriented rectangle polygon.
#[derive(Debug, Clone)]
pub enum Footprint {
    Disk(Circle),
    Rect(Poly),
}

impl Footprint {
    pub fn bounds(&self) -> Rt {
        match self {
            Footprint::Disk(c) => c.bounds(),
            Footprint::Rect(p) => p.bounds(),
        }
    }

    pub fn intersects(&self, o: &Footprint) -> bool {
        match (self, o) {
            (Footprint::Disk(a), Footprint::Disk(b)) => circ_circ_intersects(a, b),
            (Footprint::Rect(a), Footprint::Rect(b)) => poly_poly_intersects(a, b),
            (Footprint::Disk(a), Footprint::Rect(b)) => circ_poly_intersects(a, b),
            (Footprint::Rect(a), Footprint::Disk(b)) => circ_poly_intersects(b, a),
        }
    }

    /// Intersection area; 0 if the shapes don't overlap.
    pub fn intersection_area(&self, o: &Footprint) -> f64 {
        match (self, o) {
            (Footprint::Disk(a), Footprint::Disk(b)) => circ_circ_intersection_area(a, b),
            (Footprint::Rect(a), Footprint::Rect(b)) => poly_poly_intersection_area(a, b),
            (Footprint::Disk(a), Footprint::Rect(b)) => circ_poly_intersection_area(a, b),
            (Footprint::Rect(a), Footprint::Disk(b)) => circ_poly_intersection_area(b, a),
        }
    }
}
