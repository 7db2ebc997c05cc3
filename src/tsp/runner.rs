//! Branch-and-bound TSP solver.
//!
//! # Algorithm
//!
//! 1. Compute per-city neighbour minima and the root bound; a city with
//!    fewer than two neighbours means no tour exists
//! 2. Fix city 0 as the tour root
//! 3. Extend the path one city at a time in ascending index order,
//!    skipping missing edges and any city whose
//!    `running_weight + ⌈bound⌉` already reaches the incumbent cost
//! 4. At full depth, close the tour back to city 0 and keep it on strict
//!    improvement
//!
//! # Reference
//!
//! Little, J. D. C. et al. (1963). "An Algorithm for the Traveling Salesman
//! Problem", *Operations Research* 11(6), 972-989.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::bound::{ceil_half, ReducedCostBound};
use super::config::TspConfig;
use super::matrix::CostMatrix;
use super::types::{Tour, TspInstance, TspOutcome, TspSolution};
use crate::search::{BoundedSearch, Control, Incumbent, PartialAssignment, SearchRunner, Verdict};

const ROOT_CITY: usize = 0;

/// Per-frame bookkeeping: path weight so far and the doubled bound.
#[derive(Debug, Clone, Copy)]
struct TspNode {
    weight: u64,
    bound: u64,
}

/// Strategy: bound-based pruning, keep the cheapest closed tour.
struct TspSearch<'a> {
    matrix: &'a CostMatrix,
    bound: &'a ReducedCostBound,
    incumbent: Incumbent<u64>,
}

impl BoundedSearch for TspSearch<'_> {
    type State = TspNode;

    fn size(&self) -> usize {
        self.matrix.len()
    }

    fn width(&self) -> usize {
        self.matrix.len()
    }

    fn anchor(&self) -> Option<usize> {
        Some(ROOT_CITY)
    }

    fn root_state(&self) -> TspNode {
        TspNode {
            weight: 0,
            bound: self.bound.root_doubled(),
        }
    }

    fn prune(&self, path: &PartialAssignment, node: &TspNode, next: usize) -> Verdict<TspNode> {
        let Some(from) = path.last() else {
            return Verdict::Deny;
        };
        let Some(cost) = self.matrix.edge(from, next) else {
            return Verdict::Deny;
        };

        let weight = node.weight + cost;
        let bound = self.bound.step(node.bound, from, next, path.depth());
        match self.incumbent.cost() {
            Some(best) if weight + ceil_half(bound) >= best => Verdict::Deny,
            _ => Verdict::Allow(TspNode { weight, bound }),
        }
    }

    fn on_complete(&mut self, path: &PartialAssignment, node: &TspNode) -> Control {
        let closing = match path.last() {
            Some(ROOT_CITY) => 0,
            Some(last) => match self.matrix.edge(last, ROOT_CITY) {
                Some(c) => c,
                None => return Control::Continue,
            },
            None => return Control::Continue,
        };

        let total = node.weight + closing;
        if self.incumbent.offer(path.decisions(), total) {
            log::trace!("incumbent improved to {total}: {:?}", path.decisions());
        }
        Control::Continue
    }
}

/// Exact branch-and-bound TSP solver.
pub struct TspSolver;

impl TspSolver {
    /// Finds a minimum-cost closed tour from city 0.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::tsp::{TspConfig, TspInstance, TspSolver};
    ///
    /// let instance = TspInstance::new(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ])
    /// .unwrap();
    /// let outcome = TspSolver::solve(&instance, &TspConfig::default());
    /// let tour = outcome.tour().unwrap();
    /// assert_eq!(tour.cost, 80);
    /// assert_eq!(tour.to_string(), "0 -> 1 -> 3 -> 2 -> 0");
    /// ```
    pub fn solve(instance: &TspInstance, config: &TspConfig) -> TspOutcome {
        config.validate().expect("invalid TspConfig");

        let matrix = instance.matrix();
        let Some(bound) = ReducedCostBound::new(matrix) else {
            log::debug!("a city has fewer than two neighbours; no tour exists");
            return TspOutcome::NoFeasibleTour;
        };

        let mut problem = TspSearch {
            matrix,
            bound: &bound,
            incumbent: Incumbent::new(),
        };
        let report = SearchRunner::run(&mut problem, &config.search);

        let (best, history) = problem.incumbent.into_parts();
        let Some((mut path, cost)) = best else {
            log::debug!("search exhausted without closing a tour");
            return TspOutcome::NoFeasibleTour;
        };
        path.push(ROOT_CITY);

        TspOutcome::Solved(TspSolution {
            tour: Tour { cost, path },
            root_bound: bound.root_bound(),
            cost_history: if config.track_history {
                history
            } else {
                Vec::new()
            },
            stats: report.stats,
        })
    }
}

/// Solves independent instances, one sequential search each.
///
/// With the `parallel` feature the instances are spread over the rayon
/// thread pool; results keep the input order either way.
pub fn solve_batch(instances: &[TspInstance], config: &TspConfig) -> Vec<TspOutcome> {
    #[cfg(feature = "parallel")]
    {
        instances
            .par_iter()
            .map(|instance| TspSolver::solve(instance, config))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        instances
            .iter()
            .map(|instance| TspSolver::solve(instance, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstanceError;
    use crate::search::{SearchConfig, Traversal};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> TspInstance {
        TspInstance::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap()
    }

    fn solve(instance: &TspInstance) -> TspOutcome {
        TspSolver::solve(instance, &TspConfig::default())
    }

    /// Cheapest closed tour extending `prefix` (which starts at city 0),
    /// by exhaustive enumeration.
    fn best_completion(m: &CostMatrix, prefix: &mut Vec<usize>) -> Option<u64> {
        if prefix.len() == m.len() {
            return m.tour_cost(prefix);
        }
        let mut best: Option<u64> = None;
        for city in 0..m.len() {
            if prefix.contains(&city) {
                continue;
            }
            prefix.push(city);
            if let Some(c) = best_completion(m, prefix) {
                best = Some(best.map_or(c, |b| b.min(c)));
            }
            prefix.pop();
        }
        best
    }

    fn brute_force(m: &CostMatrix) -> Option<u64> {
        best_completion(m, &mut vec![0])
    }

    /// Walks every prefix reachable along existing edges, checking that
    /// `weight + ⌈bound⌉` never exceeds the best completion of the prefix.
    fn check_admissible(
        m: &CostMatrix,
        b: &ReducedCostBound,
        prefix: &mut Vec<usize>,
        weight: u64,
        doubled: u64,
    ) {
        if let Some(best) = best_completion(m, prefix) {
            assert!(
                weight + ceil_half(doubled) <= best,
                "bound {} + weight {} exceeds {} at prefix {:?}",
                ceil_half(doubled),
                weight,
                best,
                prefix
            );
        }
        if prefix.len() == m.len() {
            return;
        }
        let u = *prefix.last().unwrap();
        for v in 0..m.len() {
            if prefix.contains(&v) {
                continue;
            }
            if let Some(c) = m.edge(u, v) {
                let next = b.step(doubled, u, v, prefix.len());
                prefix.push(v);
                check_admissible(m, b, prefix, weight + c, next);
                prefix.pop();
            }
        }
    }

    fn matrix_strategy(max_n: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1..=max_n).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0i64..=20, n), n))
    }

    #[test]
    fn test_four_city_scenario() {
        match solve(&sample()) {
            TspOutcome::Solved(s) => {
                assert_eq!(s.tour.cost, 80);
                assert_eq!(s.tour.path, vec![0, 1, 3, 2, 0]);
                assert_eq!(s.root_bound, 75);
                assert_eq!(s.cost_history.last(), Some(&80));
            }
            TspOutcome::NoFeasibleTour => panic!("sample has a tour"),
        }
    }

    #[test]
    fn test_cost_history_strictly_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let instance = TspInstance::random(8, 100, true, &mut rng).unwrap();
        let TspOutcome::Solved(s) = solve(&instance) else {
            panic!("complete graph has a tour");
        };
        for w in s.cost_history.windows(2) {
            assert!(w[1] < w[0], "history not decreasing: {:?}", s.cost_history);
        }
        assert_eq!(s.cost_history.last(), Some(&s.tour.cost));
        assert!(s.stats.pruned > 0);
    }

    #[test]
    fn test_history_can_be_disabled() {
        let config = TspConfig::default().with_track_history(false);
        let TspOutcome::Solved(s) = TspSolver::solve(&sample(), &config) else {
            panic!("sample has a tour");
        };
        assert!(s.cost_history.is_empty());
        assert_eq!(s.tour.cost, 80);
    }

    #[test]
    fn test_single_city() {
        let instance = TspInstance::new(vec![vec![0]]).unwrap();
        let tour = solve(&instance).tour().cloned().unwrap();
        assert_eq!(tour.cost, 0);
        assert_eq!(tour.path, vec![0, 0]);
    }

    #[test]
    fn test_two_cities_asymmetric() {
        let instance = TspInstance::new(vec![vec![0, 4], vec![6, 0]]).unwrap();
        let tour = solve(&instance).tour().cloned().unwrap();
        assert_eq!(tour.cost, 10);
        assert_eq!(tour.path, vec![0, 1, 0]);
    }

    #[test]
    fn test_two_cities_missing_return_edge() {
        let instance = TspInstance::new(vec![vec![0, 4], vec![0, 0]]).unwrap();
        assert_eq!(solve(&instance), TspOutcome::NoFeasibleTour);
    }

    #[test]
    fn test_directed_cycle_is_the_only_tour() {
        let instance = TspInstance::new(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]).unwrap();
        let tour = solve(&instance).tour().cloned().unwrap();
        assert_eq!(tour.cost, 3);
        assert_eq!(tour.path, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_isolated_city_short_circuits() {
        let instance = TspInstance::new(vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 5],
            vec![0, 0, 5, 0],
        ])
        .unwrap();
        assert_eq!(solve(&instance), TspOutcome::NoFeasibleTour);
    }

    #[test]
    fn test_bowtie_has_no_tour() {
        // two triangles sharing city 0: every city has two neighbours,
        // yet no Hamiltonian cycle exists
        let instance = TspInstance::new(vec![
            vec![0, 1, 1, 1, 1],
            vec![1, 0, 1, 0, 0],
            vec![1, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 0, 1, 0],
        ])
        .unwrap();
        assert_eq!(solve(&instance), TspOutcome::NoFeasibleTour);
    }

    #[test]
    fn test_largest_costs_solve_exactly() {
        let big = CostMatrix::max_edge_cost(4) as i64;
        let near = big - 1000;
        let instance = TspInstance::new(vec![
            vec![0, big, big, big],
            vec![big, 0, big, near],
            vec![big, big, 0, big],
            vec![big, near, big, 0],
        ])
        .unwrap();
        let tour = solve(&instance).tour().cloned().unwrap();
        assert_eq!(tour.cost, 4 * big as u64 - 1000);
        assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
    }

    #[test]
    fn test_costs_past_the_limit_are_rejected() {
        let big = i64::MAX;
        let rows = vec![
            vec![0, big, big, big],
            vec![big, 0, big, big - 1000],
            vec![big, big, 0, big],
            vec![big, big - 1000, big, 0],
        ];
        assert!(matches!(
            TspInstance::new(rows),
            Err(InstanceError::CostTooLarge { n: 4, .. })
        ));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let mut rng = StdRng::seed_from_u64(9);
        let instance = TspInstance::random(7, 30, false, &mut rng).unwrap();
        let first = solve(&instance);
        for _ in 0..3 {
            assert_eq!(solve(&instance), first);
        }
    }

    #[test]
    fn test_traversals_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        let instance = TspInstance::random(8, 50, true, &mut rng).unwrap();
        let stack = TspConfig::default()
            .with_search(SearchConfig::default().with_traversal(Traversal::ExplicitStack));
        assert_eq!(solve(&instance), TspSolver::solve(&instance, &stack));
    }

    #[test]
    fn test_batch_matches_individual_solves() {
        let mut rng = StdRng::seed_from_u64(11);
        let instances: Vec<TspInstance> = (1..=6)
            .map(|n| TspInstance::random(n, 25, n % 2 == 0, &mut rng).unwrap())
            .collect();
        let config = TspConfig::default();
        let batch = solve_batch(&instances, &config);
        assert_eq!(batch.len(), instances.len());
        for (instance, outcome) in instances.iter().zip(&batch) {
            assert_eq!(outcome, &TspSolver::solve(instance, &config));
        }
    }

    #[test]
    fn test_bound_admissible_on_sample() {
        let m = sample();
        let b = ReducedCostBound::new(m.matrix()).unwrap();
        check_admissible(m.matrix(), &b, &mut vec![0], 0, b.root_doubled());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_optimal_cost_matches_brute_force(rows in matrix_strategy(7)) {
            let instance = TspInstance::new(rows).unwrap();
            let expected = brute_force(instance.matrix());
            let outcome = solve(&instance);
            prop_assert_eq!(outcome.cost(), expected);
            if let Some(tour) = outcome.tour() {
                let open = &tour.path[..tour.path.len() - 1];
                prop_assert_eq!(instance.matrix().tour_cost(open), Some(tour.cost));
                prop_assert_eq!(tour.path.first(), Some(&0));
                prop_assert_eq!(tour.path.last(), Some(&0));
            }
        }

        #[test]
        fn prop_bound_is_admissible(rows in matrix_strategy(6)) {
            let instance = TspInstance::new(rows).unwrap();
            let m = instance.matrix();
            if let Some(b) = ReducedCostBound::new(m) {
                check_admissible(m, &b, &mut vec![0], 0, b.root_doubled());
            }
        }

        #[test]
        fn prop_dense_instances_always_solve(seed in any::<u64>(), n in 1usize..=7) {
            let mut rng = StdRng::seed_from_u64(seed);
            let instance = TspInstance::random(n, 40, seed % 2 == 0, &mut rng).unwrap();
            let outcome = solve(&instance);
            prop_assert!(outcome.tour().is_some());
            prop_assert_eq!(outcome.cost(), brute_force(instance.matrix()));
        }
    }
}
