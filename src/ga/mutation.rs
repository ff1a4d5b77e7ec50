use rand::seq::IteratorRandom;
use rand::Rng;

use crate::ga::crossover::RESOLVE_ITERATIONS;
use crate::geom::Pt;
use crate::model::Layout;

/// With probability `rate`, rotate one uniformly chosen component by an
/// integer angle drawn uniformly from `[0, 359]`, then resolve conflicts.
pub fn mutate_rotation(pcb: &mut Layout, rate: f64, rng: &mut impl Rng) {
    if !rng.gen_bool(rate) {
        return;
    }
    let Some(id) = pcb.component_ids().cloned().choose(rng) else { return };
    let angle = rng.gen_range(0..=359) as f64;
    pcb.component_mut(&id).unwrap().rotate(angle);
    pcb.resolve_conflicts(RESOLVE_ITERATIONS);
}

/// With probability `rate`, move one uniformly chosen component to a point
/// drawn uniformly from `[d, width-d] x [d, height-d]` where `d =
/// max(size_x, size_y)`, then resolve conflicts.
pub fn mutate_position(pcb: &mut Layout, rate: f64, rng: &mut impl Rng) {
    if !rng.gen_bool(rate) {
        return;
    }
    let Some(id) = pcb.component_ids().cloned().choose(rng) else { return };
    // half_extent() is max(size_x,size_y)/2; spec.md's d is max(size_x,size_y).
    let d = pcb.component(&id).unwrap().half_extent() * 2.0;
    let width = pcb.width;
    let height = pcb.height;
    let x = if d < width - d { rng.gen_range(d..=(width - d)) } else { width / 2.0 };
    let y = if d < height - d { rng.gen_range(d..=(height - d)) } else { height / 2.0 };
    pcb.component_mut(&id).unwrap().move_to(Pt::new(x, y));
    pcb.resolve_conflicts(RESOLVE_ITERATIONS);
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::component::ShapeKind;
    use crate::model::Component;
    use crate::name::ComponentId;

    fn single_component_layout() -> Layout {
        let c = Component::new(ComponentId::new("C1"), ShapeKind::Rect, 5.0, 5.0, vec![], Pt::new(5.0, 5.0), 0.0, None);
        Layout::new(50.0, 50.0, vec![c], vec![]).unwrap()
    }

    #[test]
    fn zero_rate_never_mutates() {
        let mut pcb = single_component_layout();
        let mut rng = SmallRng::seed_from_u64(3);
        let before = pcb.component(&ComponentId::new("C1")).unwrap().rotation();
        mutate_rotation(&mut pcb, 0.0, &mut rng);
        assert_eq!(pcb.component(&ComponentId::new("C1")).unwrap().rotation(), before);
    }

    #[test]
    fn full_rate_stays_in_bounds() {
        let mut pcb = single_component_layout();
        let mut rng = SmallRng::seed_from_u64(9);
        mutate_position(&mut pcb, 1.0, &mut rng);
        let p = pcb.component(&ComponentId::new("C1")).unwrap().position();
        assert!(pcb.bounds().contains(p));
    }
}
