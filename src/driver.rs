//! The evolutionary loop: seeds a population from a template layout, then
//! iterates selection, crossover, mutation, and elitist truncation for a
//! fixed number of generations.

use rand::Rng;

use crate::error::{PcbError, Result};
use crate::ga::{crossover, mutate_position, mutate_rotation};
use crate::model::Layout;
use crate::nsga2;
use crate::objective::{self, Objectives};

/// Iterations [`Layout::resolve_conflicts`] is given whenever this module
/// disturbs a layout: seeding the initial population, and (via
/// [`crate::ga`]) crossover and mutation.
const SEED_RESOLVE_ITERATIONS: usize = 50;

/// Hyperparameters for one run of the driver loop. Ranges per spec.md §6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Population size, held constant across generations. Must be >= 4.
    pub population_size: usize,
    /// Number of generations to run. Must be >= 1.
    pub generations: usize,
    /// Crossover arity: how many component poses are swapped per crossover.
    /// Must be in `1..=n_components`.
    pub crossover_k: usize,
    /// Probability a given child undergoes rotation mutation.
    pub rotation_rate: f64,
    /// Probability a given child undergoes position mutation.
    pub position_rate: f64,
}

impl Config {
    /// Validate against the template's component count. `InvalidHyperparameter`
    /// names the first violated constraint.
    pub fn validate(&self, n_components: usize) -> Result<()> {
        if self.population_size < 4 {
            return Err(PcbError::InvalidHyperparameter(format!(
                "population_size must be >= 4, got {}",
                self.population_size
            )));
        }
        if self.generations < 1 {
            return Err(PcbError::InvalidHyperparameter(format!(
                "generations must be >= 1, got {}",
                self.generations
            )));
        }
        if self.crossover_k < 1 || self.crossover_k > n_components {
            return Err(PcbError::InvalidHyperparameter(format!(
                "crossover_k must be in 1..={}, got {}",
                n_components, self.crossover_k
            )));
        }
        if !(0.0..=1.0).contains(&self.rotation_rate) {
            return Err(PcbError::InvalidHyperparameter(format!(
                "rotation_rate must be in [0,1], got {}",
                self.rotation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.position_rate) {
            return Err(PcbError::InvalidHyperparameter(format!(
                "position_rate must be in [0,1], got {}",
                self.position_rate
            )));
        }
        Ok(())
    }
}

/// A generation's worth of layouts and their evaluated objective vectors,
/// kept in lockstep: `layouts[i]`'s objectives are `objectives[i]`.
#[derive(Debug, Clone)]
pub struct Population {
    layouts: Vec<Layout>,
    objectives: Vec<Objectives>,
}

impl Population {
    fn evaluate(layouts: Vec<Layout>) -> Self {
        let objectives = layouts.iter().map(objective::evaluate).collect();
        Self { layouts, objectives }
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn objectives(&self) -> &[Objectives] {
        &self.objectives
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Front 0 of a fresh non-dominated sort: the current Pareto-optimal
    /// members, as `(layout, objectives)` pairs.
    pub fn pareto_front(&self) -> Vec<(&Layout, Objectives)> {
        let fronts = nsga2::fast_non_dominated_sort(&self.objectives);
        fronts
            .first()
            .map(|front| front.iter().map(|&i| (&self.layouts[i], self.objectives[i])).collect())
            .unwrap_or_default()
    }
}

/// Owns a [`Config`] and runs the generation loop described in spec.md §4.7.
pub struct Driver {
    config: Config,
    template: Layout,
}

impl Driver {
    /// Resolves the template's own conflicts once up front (mirroring the
    /// original reference driver, which never evaluates an un-resolved
    /// template), then validates the config against its component count.
    pub fn new(mut template: Layout, config: Config) -> Result<Self> {
        template.resolve_conflicts(SEED_RESOLVE_ITERATIONS);
        config.validate(template.len())?;
        Ok(Self { config, template })
    }

    /// Clone the template `population_size` times, randomize each placement,
    /// and resolve conflicts independently. Step 1 of spec.md §4.7.
    pub fn seed(&self, rng: &mut impl Rng) -> Population {
        let layouts: Vec<Layout> = (0..self.config.population_size)
            .map(|_| {
                let mut pcb = self.template.clone();
                pcb.random_placement(rng);
                pcb.resolve_conflicts(SEED_RESOLVE_ITERATIONS);
                pcb
            })
            .collect();
        Population::evaluate(layouts)
    }

    /// One generation: select parents by tournament, recombine, mutate,
    /// then truncate (parents ∪ offspring) back down to `population_size`.
    /// `population` must contain at least 2 members.
    pub fn step(&self, population: &Population, rng: &mut impl Rng) -> Result<Population> {
        if population.len() < 2 {
            return Err(PcbError::EmptyPopulation(population.len()));
        }

        let fronts = nsga2::fast_non_dominated_sort(&population.objectives);
        let rank = nsga2::ranks_from_fronts(&fronts, population.len());
        let crowding = nsga2::crowding_distances_for_all(&fronts, &population.objectives);

        let mut offspring = Vec::with_capacity(self.config.population_size);
        while offspring.len() < self.config.population_size {
            let i = nsga2::tournament_select(&rank, &crowding, rng);
            let j = nsga2::tournament_select(&rank, &crowding, rng);
            let (mut c1, mut c2) =
                crossover(&population.layouts[i], &population.layouts[j], self.config.crossover_k, rng);

            mutate_rotation(&mut c1, self.config.rotation_rate, rng);
            mutate_position(&mut c1, self.config.position_rate, rng);
            mutate_rotation(&mut c2, self.config.rotation_rate, rng);
            mutate_position(&mut c2, self.config.position_rate, rng);

            offspring.push(c1);
            offspring.push(c2);
        }
        offspring.truncate(self.config.population_size);

        let offspring = Population::evaluate(offspring);

        let mut combined_layouts = population.layouts.clone();
        combined_layouts.extend(offspring.layouts);
        let mut combined_objectives = population.objectives.clone();
        combined_objectives.extend(offspring.objectives);

        let kept = nsga2::truncate(&combined_objectives, self.config.population_size);
        let layouts: Vec<Layout> = kept.iter().map(|&i| combined_layouts[i].clone()).collect();
        let objectives: Vec<Objectives> = kept.iter().map(|&i| combined_objectives[i]).collect();

        log::debug!(
            "generation step: front0 size {}, best wire {:.3}",
            fronts.first().map_or(0, Vec::len),
            objectives.iter().map(|o| o[2]).fold(f64::INFINITY, f64::min)
        );

        Ok(Population { layouts, objectives })
    }

    /// Seed a population, then run `generations` steps. Returns the final
    /// population; its Pareto front is [`Population::pareto_front`].
    pub fn run(&self, rng: &mut impl Rng) -> Result<Population> {
        let mut population = self.seed(rng);
        for _ in 0..self.config.generations {
            population = self.step(&population, rng)?;
        }
        Ok(population)
    }
}
