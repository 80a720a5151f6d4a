//! Mutable search state owned by a single annealing run.

use rand::Rng;

use crate::models::Solution;

/// Lifecycle of a run. The only transition is `Running -> Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Iterations continue while the temperature is above its floor.
    Running,
    /// Temperature exhausted or the run was cancelled.
    Terminated,
}

/// Current and best solutions plus the temperature of one run.
///
/// Created from the initial construction, which is recorded as the first
/// best, and then advanced one iteration at a time by the driver.
#[derive(Debug, Clone)]
pub struct SearchState {
    current: Solution,
    current_cost: f64,
    best: Solution,
    best_cost: f64,
    temperature: f64,
    phase: Phase,
}

impl SearchState {
    /// Starts a run from `initial` at `temperature`.
    ///
    /// The run begins `Terminated` if `temperature` is already at or below
    /// `final_temperature`.
    pub fn new(initial: Solution, cost: f64, temperature: f64, final_temperature: f64) -> Self {
        let phase = if temperature > final_temperature {
            Phase::Running
        } else {
            Phase::Terminated
        };
        Self {
            best: initial.clone(),
            best_cost: cost,
            current: initial,
            current_cost: cost,
            temperature,
            phase,
        }
    }

    pub fn current(&self) -> &Solution {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Metropolis criterion: improving moves are always taken; others with
    /// probability `exp(-delta / T)`. No random draw is made for an
    /// improving move.
    pub fn accepts<R: Rng>(&self, candidate_cost: f64, rng: &mut R) -> bool {
        let delta = candidate_cost - self.current_cost;
        if delta < 0.0 {
            return true;
        }
        let probability = (-delta / self.temperature).exp();
        rng.random_range(0.0..1.0) < probability
    }

    /// Makes `candidate` the current solution.
    pub fn accept(&mut self, candidate: Solution, cost: f64) {
        self.current = candidate;
        self.current_cost = cost;
    }

    /// Records the current solution as best if it is strictly cheaper.
    ///
    /// Returns `true` when a new best was recorded.
    pub fn record_if_improved(&mut self) -> bool {
        if self.current_cost < self.best_cost {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
            true
        } else {
            false
        }
    }

    /// Applies one cooling step and terminates at the temperature floor.
    pub fn cool(&mut self, cooling_rate: f64, final_temperature: f64) {
        self.temperature *= cooling_rate;
        if self.temperature <= final_temperature {
            self.phase = Phase::Terminated;
        }
    }

    /// Ends the run early.
    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
    }

    /// Consumes the state, yielding the best solution and its cost.
    pub fn into_best(self) -> (Solution, f64) {
        (self.best, self.best_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cost: f64) -> SearchState {
        SearchState::new(Solution::from_stops(vec![vec![0, 1]]), cost, 10.0, 1.0)
    }

    #[test]
    fn test_initial_is_best() {
        let s = state(42.0);
        assert_eq!(s.best_cost(), 42.0);
        assert_eq!(s.current_cost(), 42.0);
        assert_eq!(s.best(), s.current());
        assert_eq!(s.phase(), Phase::Running);
    }

    #[test]
    fn test_starts_terminated_at_floor() {
        let s = SearchState::new(Solution::empty(1), 0.0, 1.0, 1.0);
        assert_eq!(s.phase(), Phase::Terminated);
    }

    #[test]
    fn test_improving_move_always_accepted() {
        let s = state(10.0);
        let mut rng = u_numflow::random::create_rng(1);
        for _ in 0..100 {
            assert!(s.accepts(9.0, &mut rng));
        }
    }

    #[test]
    fn test_equal_cost_always_accepted() {
        // exp(0) = 1 and draws lie in [0, 1).
        let s = state(10.0);
        let mut rng = u_numflow::random::create_rng(2);
        for _ in 0..100 {
            assert!(s.accepts(10.0, &mut rng));
        }
    }

    #[test]
    fn test_huge_worsening_rejected() {
        let s = state(10.0);
        let mut rng = u_numflow::random::create_rng(3);
        for _ in 0..100 {
            assert!(!s.accepts(10.0 + 1e6, &mut rng));
        }
    }

    #[test]
    fn test_acceptance_rate_matches_probability() {
        // delta = T * ln 2, so P(accept) = 0.5.
        let s = state(10.0);
        let mut rng = u_numflow::random::create_rng(4);
        let trials = 10_000;
        let delta = 10.0 * std::f64::consts::LN_2;
        let accepted = (0..trials)
            .filter(|_| s.accepts(10.0 + delta, &mut rng))
            .count();
        let ratio = accepted as f64 / trials as f64;
        assert!((ratio - 0.5).abs() < 0.05, "ratio {ratio}");
    }

    #[test]
    fn test_best_only_on_strict_improvement() {
        let mut s = state(10.0);
        s.accept(Solution::from_stops(vec![vec![1, 0]]), 10.0);
        assert!(!s.record_if_improved());
        assert_eq!(s.best().route(0).stops(), &[0, 1]);

        s.accept(Solution::from_stops(vec![vec![1, 0]]), 12.0);
        assert!(!s.record_if_improved());
        assert_eq!(s.best_cost(), 10.0);

        s.accept(Solution::from_stops(vec![vec![1, 0]]), 8.0);
        assert!(s.record_if_improved());
        assert_eq!(s.best_cost(), 8.0);
        assert_eq!(s.best().route(0).stops(), &[1, 0]);
    }

    #[test]
    fn test_cooling_terminates() {
        let mut s = state(1.0);
        let mut steps = 0;
        while s.is_running() {
            s.cool(0.5, 1.0);
            steps += 1;
        }
        // 10 -> 5 -> 2.5 -> 1.25 -> 0.625
        assert_eq!(steps, 4);
        assert_eq!(s.phase(), Phase::Terminated);
    }

    #[test]
    fn test_terminate_and_into_best() {
        let mut s = state(3.0);
        s.terminate();
        assert!(!s.is_running());
        let (best, cost) = s.into_best();
        assert_eq!(cost, 3.0);
        assert_eq!(best.route(0).stops(), &[0, 1]);
    }
}
