use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use cvrp_anneal::annealing::{run_optimization, Annealer, AnnealingConfig};
use cvrp_anneal::evaluation::{capacity_violations, route_distance, total_cost};
use cvrp_anneal::instance::{random_problem, DEFAULT_CAPACITY};
use cvrp_anneal::models::{Point, Problem, Solution};
use cvrp_anneal::publish::{ChannelPublisher, LatestSnapshot, Snapshot};
use cvrp_anneal::{Error, InvalidInput};
use u_numflow::random::create_rng;

fn seeded(seed: u64) -> Annealer {
    Annealer::new(AnnealingConfig::default().with_seed(seed)).expect("valid config")
}

fn random_instance(seed: u64, n: usize, trucks: usize) -> Problem {
    let mut rng = create_rng(seed);
    let demands = (0..n).map(|i| 5 + (i as u32 * 7) % 20).collect();
    random_problem(&mut rng, demands, trucks, DEFAULT_CAPACITY).expect("valid problem")
}

#[test]
fn two_points_single_truck() {
    let problem = Problem::new(
        Point::origin(),
        vec![Point::new(10.0, 0.0), Point::new(0.0, 10.0)],
        vec![5, 5],
        1,
        100,
    )
    .expect("valid problem");

    let result = run_optimization(&problem, &mut ());
    assert!((result.best_cost - 34.142_135_623_730_95).abs() < 1e-9);
    assert_eq!(result.best.route(0).len(), 2);
}

#[test]
fn empty_trucks_contribute_nothing() {
    let problem = Problem::new(
        Point::origin(),
        vec![Point::new(3.0, 4.0), Point::new(6.0, 8.0)],
        vec![1, 1],
        3,
        10,
    )
    .expect("valid problem");

    let solution = Solution::from_stops(vec![vec![], vec![0, 1], vec![]]);
    assert!((total_cost(&problem, &solution) - 20.0).abs() < 1e-12);
    assert_eq!(route_distance(&problem, solution.route(1).stops()), 20.0);
    assert_eq!(solution.num_used_routes(), 1);
}

#[test]
fn no_delivery_points() {
    let problem =
        Problem::new(Point::new(1.0, 1.0), vec![], vec![], 2, 10).expect("valid problem");
    let result = seeded(4).run(&problem, &mut ());
    assert_eq!(result.best_cost, 0.0);
    assert_eq!(result.iterations, 459);
    assert!(result.best.is_partition_of(0));
}

#[test]
fn default_schedule_runs_459_iterations() {
    let problem = random_instance(11, 30, 4);
    let result = seeded(11).run(&problem, &mut ());
    assert_eq!(result.iterations, 459);
    assert!(result.best.is_partition_of(30));
}

#[test]
fn annealing_improves_on_construction() {
    let problem = random_instance(21, 40, 5);
    let mut first = None;
    let result = seeded(21).run(&problem, &mut |s: &Snapshot| {
        first.get_or_insert(s.cost);
    });
    let initial = first.expect("initial snapshot");
    assert!(result.best_cost <= initial);
}

#[test]
fn latest_snapshot_tracks_final_best() {
    let problem = random_instance(5, 25, 3);
    let latest = LatestSnapshot::new();
    let reader = latest.clone();

    let worker = {
        let problem = problem.clone();
        let mut sink = latest.clone();
        thread::spawn(move || seeded(5).run(&problem, &mut sink))
    };
    let result = worker.join().expect("worker thread");

    let snapshot = reader.latest().expect("published");
    assert_eq!(snapshot.solution, result.best);
    assert_eq!(snapshot.cost, result.best_cost);
    assert_eq!(reader.version() as usize, result.improvements);
}

#[test]
fn channel_publisher_ends_with_final_best() {
    let problem = random_instance(8, 25, 3);
    let (mut publisher, rx) = ChannelPublisher::bounded(2);
    let result = seeded(8).run(&problem, &mut publisher);

    let received: Vec<Snapshot> = rx.try_iter().collect();
    assert!(!received.is_empty() && received.len() <= 2);
    let last = received.last().expect("at least one snapshot");
    assert_eq!(last.cost, result.best_cost);
    assert_eq!(publisher.dropped() + received.len(), result.improvements);
}

#[test]
fn oversized_demand_overloads_a_truck() {
    let problem = Problem::new(
        Point::origin(),
        vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        vec![50, 5],
        2,
        10,
    )
    .expect("valid problem");
    assert!(!problem.all_demands_fit());

    let result = seeded(3).run(&problem, &mut ());
    assert!(result.best.is_partition_of(2));
    assert_eq!(capacity_violations(&problem, &result.best).len(), 1);
}

#[test]
fn cancel_from_observer_stops_early() {
    let problem = random_instance(13, 30, 4);
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let result = seeded(13).run_with_cancel(
        &problem,
        &mut |_: &Snapshot| flag.store(true, Ordering::Relaxed),
        Some(cancel),
    );
    assert!(result.cancelled);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.improvements, 1);
}

#[test]
fn errors_convert_into_crate_error() {
    fn build(capacity: u32, cooling_rate: f64) -> Result<(Problem, Annealer), Error> {
        let problem = Problem::new(Point::origin(), vec![Point::new(1.0, 1.0)], vec![1], 1, capacity)?;
        let annealer = Annealer::new(AnnealingConfig::default().with_cooling_rate(cooling_rate))?;
        Ok((problem, annealer))
    }

    assert!(build(10, 0.9).is_ok());
    assert!(matches!(
        build(0, 0.9),
        Err(Error::InvalidInput(InvalidInput::ZeroCapacity))
    ));
    assert!(matches!(build(10, 1.0), Err(Error::Config(_))));
}
