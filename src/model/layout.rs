use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PcbError, Result};
use crate::geom::math::hybrid_distance;
use crate::geom::{Pt, Rt};
use crate::model::component::Component;
use crate::model::link::Link;
use crate::name::{ComponentId, PinRef};

/// Wire-length metric weights (spec.md §4.3): fixed, not configurable.
const WIRE_ALPHA: f64 = 0.3;
const WIRE_BETA: f64 = 0.7;

/// A rectangular board, lower-left corner at the origin, owning a set of
/// placed components and the pin-to-pin links between them.
///
/// Component iteration order (an [`IndexMap`] preserves insertion order) has
/// no bearing on any objective value: every objective is symmetric in
/// component order, so this is purely a determinism/ergonomics convenience,
/// not a correctness requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    components: IndexMap<ComponentId, Component>,
    links: Vec<Link>,
}

impl Layout {
    pub fn new(width: f64, height: f64, components: Vec<Component>, links: Vec<Link>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(components.len());
        for c in components {
            if map.insert(c.id.clone(), c).is_some() {
                return Err(PcbError::DuplicateComponent(map.keys().last().unwrap().clone()));
            }
        }
        let layout = Self { width, height, components: map, links };
        layout.validate_links()?;
        Ok(layout)
    }

    fn validate_links(&self) -> Result<()> {
        for link in &self.links {
            for pin_ref in [&link.a, &link.b] {
                self.resolve_pin_ref(pin_ref)?;
            }
        }
        Ok(())
    }

    fn resolve_pin_ref(&self, pin_ref: &PinRef) -> Result<Pt> {
        let component = self
            .components
            .get(&pin_ref.component)
            .ok_or_else(|| PcbError::UnknownComponent(pin_ref.component.clone()))?;
        let pin = component.pin(&pin_ref.pin).ok_or_else(|| PcbError::UnknownPin {
            component: pin_ref.component.clone(),
            pin: pin_ref.pin.clone(),
        })?;
        Ok(pin.world())
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn component_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id)
    }

    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Draw each component's position uniformly from the interior region
    /// that keeps it fully in-bounds when axis-aligned, and its rotation
    /// uniformly from `[0, 360)`. Over-sized components may still protrude.
    pub fn random_placement(&mut self, rng: &mut impl Rng) {
        for component in self.components.values_mut() {
            let hx = component.size_x / 2.0;
            let hy = component.size_y / 2.0;
            let x = if hx < self.width - hx { rng.gen_range(hx..=(self.width - hx)) } else { self.width / 2.0 };
            let y = if hy < self.height - hy { rng.gen_range(hy..=(self.height - hy)) } else { self.height / 2.0 };
            let angle = rng.gen_range(0.0..360.0);
            component.move_to(Pt::new(x, y));
            component.set_rotation(angle);
        }
    }

    /// Every unordered pair of components whose transformed footprints
    /// intersect with positive area. O(n^2); no spatial index.
    pub fn detect_overlaps(&self) -> Vec<(ComponentId, ComponentId, f64)> {
        let ids: Vec<&ComponentId> = self.components.keys().collect();
        let mut out = Vec::new();
        for i in 0..ids.len() {
            let a = &self.components[ids[i]];
            let shape_a = a.shape_world();
            for j in (i + 1)..ids.len() {
                let b = &self.components[ids[j]];
                if !shape_a.bounds().intersects(&b.shape_world().bounds()) {
                    continue;
                }
                let area = shape_a.intersection_area(&b.shape_world());
                if area > 0.0 {
                    out.push((ids[i].clone(), ids[j].clone(), area));
                }
            }
        }
        out
    }

    /// Iteratively push overlapping pairs apart. Each iteration recomputes
    /// every overlap from scratch, then applies all of that iteration's
    /// displacements before recomputing again. Stops early once there are no
    /// overlaps; otherwise gives up after `max_iterations`, accepting
    /// whatever drift remains (this is `ResolveNonConvergence`, not an
    /// error — the caller keeps the individual with a poorer objective
    /// vector).
    pub fn resolve_conflicts(&mut self, max_iterations: usize) {
        for _ in 0..max_iterations {
            let overlaps = self.detect_overlaps();
            if overlaps.is_empty() {
                return;
            }
            for (a_id, b_id, area) in overlaps {
                let a_pos = self.components[&a_id].position();
                let b_pos = self.components[&b_id].position();
                let angle = (b_pos.y - a_pos.y).atan2(b_pos.x - a_pos.x);
                let distance = area.sqrt() + 1.0;
                let new_b = b_pos + Pt::new(angle.cos(), angle.sin()) * distance;
                self.components.get_mut(&b_id).unwrap().move_to(new_b);
            }
        }
        log::warn!(
            "resolve_conflicts exhausted {} iterations with overlaps remaining",
            max_iterations
        );
    }

    /// Sum over links of `alpha*euclidean + beta*manhattan` in world
    /// coordinates, with `alpha=0.3, beta=0.7` fixed.
    pub fn total_pin_distance(&self) -> f64 {
        self.links
            .iter()
            .map(|link| {
                // Links are validated to resolve at construction time; any
                // mutation afterward only moves components, never removes
                // them, so these always succeed.
                let a = self.resolve_pin_ref(&link.a).expect("link endpoint resolved at construction");
                let b = self.resolve_pin_ref(&link.b).expect("link endpoint resolved at construction");
                hybrid_distance(a, b, WIRE_ALPHA, WIRE_BETA)
            })
            .sum()
    }

    /// Area of the axis-aligned bounding rectangle enclosing the union of
    /// every component's transformed shape.
    pub fn occupied_area(&self) -> f64 {
        let mut it = self.components.values().map(|c| c.shape_world().bounds());
        let Some(first) = it.next() else { return 0.0 };
        it.fold(first, |acc, r| acc.union(&r)).area()
    }

    /// Sample a uniform `resolution x resolution` grid over `[0,width] x
    /// [0,height]`, summing every component's thermal contribution at each
    /// point; return the maximum.
    pub fn max_temperature(&self, resolution: usize) -> f64 {
        assert!(resolution > 0, "resolution must be positive");
        let mut max = f64::MIN;
        for i in 0..resolution {
            let x = if resolution == 1 { 0.0 } else { self.width * i as f64 / (resolution - 1) as f64 };
            for j in 0..resolution {
                let y =
                    if resolution == 1 { 0.0 } else { self.height * j as f64 / (resolution - 1) as f64 };
                let t: f64 = self.components.values().map(|c| c.thermal_field(x, y)).sum();
                if t > max {
                    max = t;
                }
            }
        }
        max
    }

    pub fn bounds(&self) -> Rt {
        Rt::new(0.0, 0.0, self.width, self.height)
    }
}
