use cvrp_anneal::annealing::{Annealer, AnnealingConfig};
use cvrp_anneal::constructive::first_fit;
use cvrp_anneal::evaluation::{capacity_violations, distance, route_distance, total_cost};
use cvrp_anneal::instance::random_problem;
use cvrp_anneal::models::{Point, Problem};
use cvrp_anneal::neighborhood::relocate;
use cvrp_anneal::publish::Snapshot;
use proptest::prelude::*;
use u_numflow::random::create_rng;

fn problem_with(seed: u64, demands: Vec<u32>, trucks: usize, capacity: u32) -> Problem {
    let mut rng = create_rng(seed);
    random_problem(&mut rng, demands, trucks, capacity).expect("valid problem")
}

/// Capacity large enough that first-fit never runs out of room:
/// `trucks * (capacity - max_demand) >= total_demand`.
fn roomy_capacity(demands: &[u32], trucks: usize) -> u32 {
    let max = demands.iter().copied().max().unwrap_or(0);
    let total: u32 = demands.iter().sum();
    max + total.div_ceil(trucks as u32) + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn builder_produces_partition(
        seed in any::<u64>(),
        demands in prop::collection::vec(0u32..40, 0..30),
        trucks in 1usize..6,
        capacity in 1u32..60,
    ) {
        let n = demands.len();
        let problem = problem_with(seed, demands, trucks, capacity);
        let sol = first_fit(&problem, &mut create_rng(seed ^ 0x5eed));
        prop_assert_eq!(sol.num_routes(), trucks);
        prop_assert!(sol.is_partition_of(n));
    }

    #[test]
    fn neighbor_preserves_partition(
        seed in any::<u64>(),
        demands in prop::collection::vec(1u32..20, 1..25),
        trucks in 1usize..5,
        capacity in 10u32..60,
    ) {
        let n = demands.len();
        let problem = problem_with(seed, demands, trucks, capacity);
        let mut rng = create_rng(seed.wrapping_add(1));
        let mut sol = first_fit(&problem, &mut rng);
        for _ in 0..50 {
            let next = relocate(&problem, &sol, &mut rng);
            prop_assert!(next.is_partition_of(n));
            prop_assert_eq!(next.num_routes(), trucks);
            sol = next;
        }
    }

    #[test]
    fn capacity_respected_when_first_fit_has_room(
        seed in any::<u64>(),
        demands in prop::collection::vec(1u32..20, 1..25),
        trucks in 1usize..5,
    ) {
        let capacity = roomy_capacity(&demands, trucks);
        let problem = problem_with(seed, demands, trucks, capacity);
        let mut rng = create_rng(seed);
        let mut sol = first_fit(&problem, &mut rng);
        prop_assert!(capacity_violations(&problem, &sol).is_empty());
        for _ in 0..50 {
            sol = relocate(&problem, &sol, &mut rng);
            prop_assert!(capacity_violations(&problem, &sol).is_empty());
        }
    }

    #[test]
    fn distance_is_symmetric_and_non_negative(
        ax in -1e3f64..1e3, ay in -1e3f64..1e3,
        bx in -1e3f64..1e3, by in -1e3f64..1e3,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert!(distance(a, b) >= 0.0);
        prop_assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn total_cost_is_sum_of_routes(
        seed in any::<u64>(),
        demands in prop::collection::vec(1u32..20, 0..20),
        trucks in 1usize..5,
    ) {
        let problem = problem_with(seed, demands, trucks, 30);
        let sol = first_fit(&problem, &mut create_rng(seed));
        let summed: f64 = sol.routes().iter().map(|r| route_distance(&problem, r.stops())).sum();
        prop_assert!((total_cost(&problem, &sol) - summed).abs() < 1e-9);
        prop_assert!(total_cost(&problem, &sol) >= 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn best_cost_never_increases(
        seed in any::<u64>(),
        demands in prop::collection::vec(1u32..30, 1..20),
        trucks in 1usize..5,
    ) {
        let problem = problem_with(seed, demands, trucks, 50);
        let annealer = Annealer::new(AnnealingConfig::default().with_seed(seed))
            .expect("valid config");

        let mut costs = Vec::new();
        let result = annealer.run(&problem, &mut |s: &Snapshot| costs.push(s.cost));

        prop_assert!(!costs.is_empty());
        prop_assert!(costs.windows(2).all(|w| w[1] < w[0]));
        prop_assert_eq!(costs.last().copied(), Some(result.best_cost));
        prop_assert_eq!(result.iterations, 459);
    }
}
