use std::f64::consts::PI;

use crate::geom::point::Pt;
use crate::geom::polygon::Poly;
use crate::geom::rect::Rt;

/// Number of segments used when a disk needs a polygonal approximation
/// (clipping against a rectangle). spec.md requires >= 32 for the area to be
/// within 1% of pi*r^2; 64 gives comfortable margin.
pub const DISK_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub p: Pt,
    pub r: f64,
}

impl Circle {
    pub fn new(p: Pt, r: f64) -> Self {
        Self { p, r }
    }

    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    pub fn bounds(&self) -> Rt {
        Rt::new(self.p.x - self.r, self.p.y - self.r, 2.0 * self.r, 2.0 * self.r)
    }

    pub fn contains(&self, p: Pt) -> bool {
        self.p.dist(p) <= self.r
    }

    /// Regular polygon approximation, used only where an exact disk routine
    /// does not apply (clipping against a rotated rectangle).
    pub fn as_poly(&self) -> Poly {
        let pts = (0..DISK_SEGMENTS)
            .map(|i| {
                let theta = 2.0 * PI * (i as f64) / (DISK_SEGMENTS as f64);
                self.p + Pt::new(self.r * theta.cos(), self.r * theta.sin())
            })
            .collect();
        Poly::new(pts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_approximation_area_within_one_percent() {
        let c = Circle::new(Pt::zero(), 5.0);
        let approx_area = c.as_poly().area();
        let exact = c.area();
        assert!((approx_area - exact).abs() / exact < 0.01);
    }
}
