//! Small numeric helpers shared across the geometry kernel.

use approx::relative_eq;

use crate::geom::point::Pt;

/// Relative-equality epsilon used throughout the geometry kernel.
pub const EP: f64 = 1e-9;

pub fn f64_eq(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = EP)
}

pub fn f64_cmp(a: &f64, b: &f64) -> std::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
}

pub fn euclidean(a: Pt, b: Pt) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn manhattan(a: Pt, b: Pt) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// `alpha * euclidean + beta * manhattan`, the busing heuristic spec.md and
/// the original implementation both use for [`crate::model::layout::Layout::total_pin_distance`].
pub fn hybrid_distance(a: Pt, b: Pt, alpha: f64, beta: f64) -> f64 {
    alpha * euclidean(a, b) + beta * manhattan(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_distance_matches_worked_example() {
        // spec.md scenario 2: P2 world = (15,10), P3 world = (30,7).
        let p2 = Pt::new(15.0, 10.0);
        let p3 = Pt::new(30.0, 7.0);
        let d = hybrid_distance(p2, p3, 0.3, 0.7);
        assert!((d - 17.189).abs() < 1e-3);
    }
}
