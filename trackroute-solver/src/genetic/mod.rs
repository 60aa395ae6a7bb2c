//! Genetic search over waypoint orderings.
//!
//! A tour is a sequence of waypoint indices whose first entry is always the
//! start. Initial tours are permutations; order crossover keeps them so. Fitness is the inverse of the open-path length. Each generation
//! replaces the whole population with children bred from roulette-selected
//! parents; after the final generation the fittest tour is built into a route.

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trackroute_core::{
    OptimizationMethod, OptimizedRoute, Optimizer, RouteError, RoutePlanner, Waypoint,
    ensure_routable,
};

use crate::matrix::DistanceMatrix;

mod operators;

use operators::{Tour, is_permutation, random_tour, select_parent, swap_mutation};

/// How two parent tours are recombined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Crossover {
    /// Copy a random index range from the second parent over the first.
    ///
    /// The child may repeat or drop waypoints, so the resulting route is not
    /// guaranteed to visit every input waypoint exactly once.
    #[default]
    SegmentCopy,
    /// Order crossover: keep a slice of the first parent and fill the other
    /// positions with the second parent's remaining waypoints in order.
    ///
    /// Children are always permutations with the start in place.
    Order,
}

impl Crossover {
    fn apply<R: Rng + ?Sized>(self, first: &[usize], second: &[usize], rng: &mut R) -> Tour {
        match self {
            Self::SegmentCopy => operators::segment_copy_crossover(first, second, rng),
            Self::Order => operators::order_crossover(first, second, rng),
        }
    }
}

/// Tuning knobs for [`GeneticOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticConfig {
    /// Tours per generation. Zero is treated as one.
    pub population_size: usize,
    /// Number of breeding rounds.
    pub generations: usize,
    /// Probability in `[0, 1]` that a child receives a swap mutation.
    pub mutation_rate: f64,
    /// Recombination operator. The default reproduces positional segment
    /// copying; choose [`Crossover::Order`] for routes that visit every
    /// waypoint exactly once.
    pub crossover: Crossover,
    /// Seed for a reproducible search; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            crossover: Crossover::SegmentCopy,
            seed: None,
        }
    }
}

/// Stochastic optimizer evolving tours with roulette selection.
///
/// # Examples
/// ```
/// use trackroute_core::{Optimizer, Waypoint};
/// use trackroute_solver::{GeneticConfig, GeneticOptimizer};
///
/// # fn main() -> Result<(), trackroute_core::RouteError> {
/// let optimizer = GeneticOptimizer::new(GeneticConfig {
///     seed: Some(7),
///     ..GeneticConfig::default()
/// });
/// let route = optimizer.optimize(&[
///     Waypoint::new("s", "Start", 0.0, 0.0),
///     Waypoint::new("a", "A", 0.0, 1.0),
///     Waypoint::new("b", "B", 0.0, 2.0),
/// ])?;
/// assert_eq!(route.start().map(|w| w.id.as_str()), Some("s"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneticOptimizer {
    config: GeneticConfig,
    planner: RoutePlanner,
}

impl GeneticOptimizer {
    /// Construct an optimizer with `config` and default planning parameters.
    #[must_use]
    pub fn new(config: GeneticConfig) -> Self {
        Self {
            config,
            planner: RoutePlanner::default(),
        }
    }

    /// Replace the planner used to build the final route.
    #[must_use]
    pub const fn with_planner(mut self, planner: RoutePlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Run the search drawing randomness from `rng`.
    ///
    /// The configured seed is ignored; callers own reproducibility.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
    /// waypoints.
    pub fn optimize_with_rng<R: Rng + ?Sized>(
        &self,
        waypoints: &[Waypoint],
        rng: &mut R,
    ) -> Result<OptimizedRoute, RouteError> {
        ensure_routable(waypoints)?;

        let matrix = DistanceMatrix::new(waypoints);
        let population_size = self.config.population_size.max(1);
        let mut population: Vec<Tour> = (0..population_size)
            .map(|_| random_tour(waypoints.len(), rng))
            .collect();

        for _ in 0..self.config.generations {
            let fitness = evaluate(&matrix, &population);
            let mut next = Vec::with_capacity(population_size);
            for _ in 0..population_size {
                let first = pick(&population, select_parent(&fitness, rng));
                let second = pick(&population, select_parent(&fitness, rng));
                let mut child = self.config.crossover.apply(first, second, rng);
                if rng.r#gen::<f64>() < self.config.mutation_rate {
                    swap_mutation(&mut child, rng);
                }
                next.push(child);
            }
            population = next;
        }

        let fitness = evaluate(&matrix, &population);
        let best = fittest(&fitness);
        let tour = pick(&population, best);
        debug!(
            "genetic search finished after {} generations: best tour {:.3} km",
            self.config.generations,
            matrix.tour_length(tour)
        );
        if !is_permutation(tour) {
            warn!(
                "genetic route repeats or skips waypoints under {:?} crossover; \
                 use order crossover to visit each waypoint once",
                self.config.crossover
            );
        }

        let ordered = tour
            .iter()
            .filter_map(|&index| waypoints.get(index).cloned())
            .collect();
        self.planner.build(ordered, OptimizationMethod::Genetic)
    }
}

impl Optimizer for GeneticOptimizer {
    fn method(&self) -> OptimizationMethod {
        OptimizationMethod::Genetic
    }

    fn optimize(&self, waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError> {
        match self.config.seed {
            Some(seed) => self.optimize_with_rng(waypoints, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.optimize_with_rng(waypoints, &mut rand::thread_rng()),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "fitness is the reciprocal of a tour length"
)]
fn evaluate(matrix: &DistanceMatrix, population: &[Tour]) -> Vec<f64> {
    population
        .iter()
        .map(|tour| 1.0 / matrix.tour_length(tour))
        .collect()
}

/// Index of the first tour holding the maximum fitness.
fn fittest(fitness: &[f64]) -> usize {
    let mut best = 0;
    let mut best_fitness = f64::NEG_INFINITY;
    for (index, &value) in fitness.iter().enumerate() {
        if value > best_fitness {
            best = index;
            best_fitness = value;
        }
    }
    best
}

fn pick(population: &[Tour], index: usize) -> &[usize] {
    population.get(index).map_or(&[][..], Vec::as_slice)
}
