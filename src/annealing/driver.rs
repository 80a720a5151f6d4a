//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, trace, warn};
use u_numflow::random::create_rng;

use super::config::AnnealingConfig;
use super::state::SearchState;
use crate::constructive::first_fit;
use crate::error::ConfigError;
use crate::evaluation::{capacity_violations, total_cost};
use crate::models::{Problem, Solution};
use crate::neighborhood::{relocate_in_place, MoveOutcome};
use crate::publish::{ImprovementObserver, Snapshot};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The best solution found.
    pub best: Solution,

    /// Total distance of the best solution.
    pub best_cost: f64,

    /// Number of neighbor evaluations performed.
    pub iterations: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates cheaper than the current solution.
    pub improving_moves: usize,

    /// Relocations put back because the destination truck was full.
    pub reverted_relocations: usize,

    /// Snapshots published, counting the initial construction.
    pub improvements: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether the run was cancelled before the temperature floor.
    pub cancelled: bool,
}

/// Drives simulated annealing over a [`Problem`].
///
/// Each run builds a randomized first-fit solution, then repeatedly proposes
/// a random relocation, accepts it by the Metropolis criterion, and cools
/// geometrically until the temperature floor. Every strict improvement of the
/// best cost is handed to the observer as a [`Snapshot`]; the initial
/// construction is published first.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::annealing::{Annealer, AnnealingConfig};
/// use cvrp_anneal::models::{Point, Problem};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 3.0)],
///     vec![10, 10, 10],
///     2,
///     20,
/// )
/// .unwrap();
///
/// let annealer = Annealer::new(AnnealingConfig::default().with_seed(42)).unwrap();
/// let result = annealer.run(&problem, &mut ());
/// assert!(result.best.is_partition_of(3));
/// assert_eq!(result.iterations, 459);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Annealer {
    config: AnnealingConfig,
}

impl Annealer {
    /// Creates a driver with a validated configuration.
    pub fn new(config: AnnealingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Runs to the temperature floor, seeding from the configuration.
    pub fn run<O>(&self, problem: &Problem, observer: &mut O) -> AnnealingResult
    where
        O: ImprovementObserver + ?Sized,
    {
        self.run_with_cancel(problem, observer, None)
    }

    /// Runs with an optional cancellation flag, checked once per iteration.
    pub fn run_with_cancel<O>(
        &self,
        problem: &Problem,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealingResult
    where
        O: ImprovementObserver + ?Sized,
    {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        debug!(seed, "seeded annealing run");
        self.run_with_rng(problem, &mut rng, observer, cancel.as_deref())
    }

    /// Runs with an injected random source. Every random decision of the run
    /// (construction order, move selection, acceptance draws) comes from
    /// `rng`, so a seeded generator makes the run reproducible.
    pub fn run_with_rng<R, O>(
        &self,
        problem: &Problem,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<&AtomicBool>,
    ) -> AnnealingResult
    where
        R: Rng,
        O: ImprovementObserver + ?Sized,
    {
        let config = &self.config;
        debug!(
            points = problem.num_points(),
            trucks = problem.truck_count(),
            capacity = problem.capacity(),
            initial_temperature = config.initial_temperature,
            final_temperature = config.final_temperature,
            cooling_rate = config.cooling_rate,
            expected_iterations = config.expected_iterations(),
            "starting annealing run"
        );

        let initial = first_fit(problem, rng);
        let initial_cost = total_cost(problem, &initial);
        let mut state = SearchState::new(
            initial,
            initial_cost,
            config.initial_temperature,
            config.final_temperature,
        );
        observer.on_improvement(&Snapshot {
            solution: state.best().clone(),
            cost: state.best_cost(),
            iteration: 0,
            temperature: state.temperature(),
        });

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut reverted_relocations = 0usize;
        let mut improvements = 1usize;
        let mut cancelled = false;

        while state.is_running() {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                state.terminate();
                break;
            }

            let mut candidate = state.current().clone();
            if let MoveOutcome::Reverted { .. } = relocate_in_place(problem, &mut candidate, rng) {
                reverted_relocations += 1;
            }
            let candidate_cost = total_cost(problem, &candidate);
            iterations += 1;

            if candidate_cost < state.current_cost() {
                improving_moves += 1;
            }
            if state.accepts(candidate_cost, rng) {
                state.accept(candidate, candidate_cost);
                accepted_moves += 1;
            }

            if state.record_if_improved() {
                improvements += 1;
                trace!(
                    iteration = iterations,
                    cost = state.best_cost(),
                    temperature = state.temperature(),
                    "new best"
                );
                observer.on_improvement(&Snapshot {
                    solution: state.best().clone(),
                    cost: state.best_cost(),
                    iteration: iterations,
                    temperature: state.temperature(),
                });
            }

            state.cool(config.cooling_rate, config.final_temperature);
        }

        let final_temperature = state.temperature();
        let (best, best_cost) = state.into_best();

        let overloaded = capacity_violations(problem, &best);
        if !overloaded.is_empty() {
            warn!(
                routes = overloaded.len(),
                "best solution overloads trucks"
            );
        }
        info!(
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            improvements,
            cancelled,
            "annealing finished"
        );

        AnnealingResult {
            best,
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            reverted_relocations,
            improvements,
            final_temperature,
            cancelled,
        }
    }
}

/// Runs the full annealing loop with the default schedule and returns the
/// best solution found.
///
/// `observer` is invoked with the initial construction and then on every
/// strict improvement; its last snapshot always matches the returned best.
pub fn run_optimization<O>(problem: &Problem, observer: &mut O) -> AnnealingResult
where
    O: ImprovementObserver + ?Sized,
{
    Annealer::default().run(problem, observer)
}
