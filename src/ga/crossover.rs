use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Layout;

/// Max iterations conflict resolution runs for after crossover/mutation
/// disturb a layout. Mirrors the default used when seeding the population.
pub const RESOLVE_ITERATIONS: usize = 50;

/// Clone both parents, swap the pose (position, rotation) of `k` randomly
/// chosen shared components between the two clones, then resolve conflicts
/// independently in each. Parents are never mutated.
///
/// Both parents are assumed to share the same component-id set — true by
/// construction in [`crate::driver::Driver`], since every individual is
/// cloned from one template. Debug builds assert this precondition; sampling
/// identifiers absent from one parent has undefined effect (documented Open
/// Question in spec.md §9).
pub fn crossover(parent1: &Layout, parent2: &Layout, k: usize, rng: &mut impl Rng) -> (Layout, Layout) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    let mut ids: Vec<_> = child1.component_ids().cloned().collect();
    debug_assert!(
        ids.iter().all(|id| child2.component(id).is_some()),
        "crossover requires both parents to share the same component ids"
    );
    ids.shuffle(rng);
    ids.truncate(k);

    for id in &ids {
        let (pos1, rot1) = {
            let c = child1.component(id).expect("sampled from child1's own id set");
            (c.position(), c.rotation())
        };
        let (pos2, rot2) = {
            let c = child2.component(id).expect("parents share component ids");
            (c.position(), c.rotation())
        };
        child1.component_mut(id).unwrap().move_to(pos2);
        child1.component_mut(id).unwrap().set_rotation(rot2);
        child2.component_mut(id).unwrap().move_to(pos1);
        child2.component_mut(id).unwrap().set_rotation(rot1);
    }

    child1.resolve_conflicts(RESOLVE_ITERATIONS);
    child2.resolve_conflicts(RESOLVE_ITERATIONS);
    (child1, child2)
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geom::Pt;
    use crate::model::component::ShapeKind;
    use crate::model::{Component, Link};
    use crate::name::ComponentId;

    fn template() -> Layout {
        let c1 = Component::new(ComponentId::new("C1"), ShapeKind::Rect, 5.0, 5.0, vec![], Pt::new(5.0, 5.0), 0.0, None);
        let c2 = Component::new(ComponentId::new("C2"), ShapeKind::Rect, 5.0, 5.0, vec![], Pt::new(30.0, 30.0), 0.0, None);
        Layout::new(50.0, 50.0, vec![c1, c2], Vec::<Link>::new()).unwrap()
    }

    #[test]
    fn crossover_swaps_poses_between_children() {
        let p1 = template();
        let mut p2 = template();
        p2.component_mut(&ComponentId::new("C1")).unwrap().move_to(Pt::new(1.0, 1.0));
        p2.component_mut(&ComponentId::new("C2")).unwrap().move_to(Pt::new(2.0, 2.0));
        let mut rng = SmallRng::seed_from_u64(1);
        // Force swap of both by requesting k = len.
        let (c1, c2) = crossover(&p1, &p2, 2, &mut rng);
        // Since conflicts get resolved afterward, just check parents untouched.
        assert!(p1.component(&ComponentId::new("C1")).unwrap().position().approx_eq(Pt::new(5.0, 5.0)));
        assert!(p2.component(&ComponentId::new("C1")).unwrap().position().approx_eq(Pt::new(1.0, 1.0)));
        let _ = (c1, c2);
    }

    #[test]
    fn parents_are_never_mutated() {
        let p1 = template();
        let p2 = template();
        let before1 = p1.total_pin_distance();
        let before2 = p2.total_pin_distance();
        let mut rng = SmallRng::seed_from_u64(7);
        let _ = crossover(&p1, &p2, 1, &mut rng);
        assert_eq!(p1.total_pin_distance(), before1);
        assert_eq!(p2.total_pin_distance(), before2);
    }
}
