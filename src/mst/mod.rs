//! # 最小生成树引擎
//!
//! 两种算法各只有一份核心实现，总是产出完整的决策日志 [`StepLog`]；
//! "即时"结果就是日志中被接受的边（[`StepLog::result`]），因此逐步回放与即时
//! 结果天然一致。
//!
//! * [`Kruskal`]：稳定升序排序 + 并查集，每条边一步（接受或因成环拒绝）；
//! * [`Prim`]：从顶点 0 出发，每轮先记录所有割边为"考察"，再记录该轮接受的最小边。
//!
//! 调用方需保证至少两个顶点；少于两个时两种算法都只会返回空日志。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

pub mod kruskal;
pub mod player;
pub mod prim;
pub mod step;
pub mod union_find;

pub use kruskal::Kruskal;
pub use player::{Progress, StepPlayer};
pub use prim::Prim;
pub use step::{MstResult, Step, StepKind, StepLog};
pub use union_find::DisjointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Kruskal, Algorithm::Prim];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    pub fn record(&self, graph: &Graph) -> StepLog {
        match self {
            Algorithm::Kruskal => Kruskal.record(graph),
            Algorithm::Prim => Prim.record(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            other => Err(format!("unknown algorithm `{other}`")),
        }
    }
}

pub trait SpanningTreeAlgorithm {
    fn algorithm(&self) -> Algorithm;

    /// Runs to completion and returns every decision in order.
    fn record(&self, graph: &Graph) -> StepLog;

    fn run(&self, graph: &Graph) -> MstResult {
        self.record(graph).result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostModel;
    use crate::graph::{Category, Idx, Point, Weighting};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn graph_of(points: &[(f64, f64)]) -> Graph {
        let mut graph = Graph::new();
        for &(x, y) in points {
            graph.add_vertex(Point::new(x, y), None).unwrap();
        }
        graph
    }

    fn random_graph(rng: &mut StdRng, n: usize) -> Graph {
        let mut graph = Graph::new();
        for _ in 0..n {
            let p = Point::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0));
            graph.add_vertex(p, None).unwrap();
        }
        graph
    }

    fn pairs(result: &MstResult) -> Vec<(u32, u32)> {
        result.edges.iter().map(|e| (e.a.raw(), e.b.raw())).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn right_triangle_scenario() {
        let graph = graph_of(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        for algorithm in Algorithm::ALL {
            let result = algorithm.record(&graph).result();
            assert_eq!(pairs(&result), vec![(0, 1), (0, 2)], "{algorithm}");
            assert_eq!(result.total_cost, 20.0);
        }
    }

    #[test]
    fn collinear_points_form_a_path() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        for algorithm in Algorithm::ALL {
            let result = algorithm.record(&graph).result();
            assert_eq!(pairs(&result), vec![(0, 1), (1, 2), (2, 3)], "{algorithm}");
            assert_eq!(result.total_cost, 3.0);
        }
    }

    #[test]
    fn both_algorithms_agree_on_cost() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..25 {
            let graph = random_graph(&mut rng, n);
            let kruskal = Kruskal.run(&graph);
            let prim = Prim.run(&graph);
            assert_eq!(kruskal.len(), n - 1);
            assert_eq!(prim.len(), n - 1);
            assert!(close(kruskal.total_cost, prim.total_cost));
        }
    }

    #[test]
    fn matches_petgraph_minimum_spanning_tree() {
        use petgraph::algo::min_spanning_tree;
        use petgraph::data::Element;

        let mut rng = StdRng::seed_from_u64(9);
        for n in [2, 5, 12, 30] {
            let graph = random_graph(&mut rng, n);
            let oracle: f64 = min_spanning_tree(&graph.to_petgraph())
                .filter_map(|element| match element {
                    Element::Edge { weight, .. } => Some(weight),
                    Element::Node { .. } => None,
                })
                .sum();
            assert!(close(Kruskal.run(&graph).total_cost, oracle));
            assert!(close(Prim.run(&graph).total_cost, oracle));
        }
    }

    #[test]
    fn result_is_a_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = random_graph(&mut rng, 15);
        for algorithm in Algorithm::ALL {
            let result = algorithm.record(&graph).result();
            let mut forest = DisjointSet::new(graph.vertex_count());
            for edge in &result.edges {
                assert!(forest.union(edge.a.index(), edge.b.index()));
            }
            assert_eq!(forest.set_count(), 1);
        }
    }

    #[test]
    fn replay_equals_instant_result() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_graph(&mut rng, 10);
        for algorithm in Algorithm::ALL {
            let instant = algorithm.record(&graph).result();
            let mut player = StepPlayer::new(algorithm.record(&graph));
            let replayed = player.run_to_end().to_vec();
            assert_eq!(replayed, instant.edges);
            assert_eq!(player.accumulated_cost(), instant.total_cost);
        }
    }

    #[test]
    fn runs_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = random_graph(&mut rng, 12);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.record(&graph), algorithm.record(&graph));
        }
    }

    #[test]
    fn kruskal_logs_every_edge_prim_logs_n_minus_one_acceptances() {
        let mut rng = StdRng::seed_from_u64(21);
        let graph = random_graph(&mut rng, 8);
        let kruskal = Kruskal.record(&graph);
        assert_eq!(kruskal.len(), graph.edge_count());
        assert_eq!(kruskal.count(StepKind::Accepted), 7);
        assert_eq!(kruskal.count(StepKind::Rejected), graph.edge_count() - 7);

        let prim = Prim.record(&graph);
        assert_eq!(prim.count(StepKind::Accepted), 7);
        assert_eq!(prim.count(StepKind::Rejected), 0);
        // round k has k * (n - k) cut edges
        let considered: usize = (1..8).map(|k| k * (8 - k)).sum();
        assert_eq!(prim.count(StepKind::Considered), considered);
    }

    #[test]
    fn cost_weighting_still_yields_equal_trees() {
        let mut graph = Graph::with_weighting(Weighting::Cost(CostModel::default()));
        let layout = [
            (0.0, 0.0, Category::Generator),
            (40.0, 10.0, Category::Substation),
            (80.0, 0.0, Category::Transformer),
            (90.0, 30.0, Category::Consumer),
            (60.0, 50.0, Category::Consumer),
        ];
        for (x, y, category) in layout {
            graph.add_vertex(Point::new(x, y), Some(category)).unwrap();
        }
        let kruskal = Kruskal.run(&graph);
        let prim = Prim.run(&graph);
        assert_eq!(kruskal.len(), 4);
        assert!(close(kruskal.total_cost, prim.total_cost));
        assert!(kruskal.edges.iter().all(|e| e.cost.is_some()));
    }

    #[test]
    fn logs_carry_the_recording_algorithm() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 2.0)]);
        assert_eq!(Kruskal.algorithm(), Algorithm::Kruskal);
        assert_eq!(Prim.algorithm(), Algorithm::Prim);
        assert_eq!(Kruskal.record(&graph).algorithm(), Kruskal.algorithm());
        assert_eq!(Prim.run(&graph).algorithm, Prim.algorithm());
        assert_eq!(Prim.record(&Graph::new()).algorithm(), Algorithm::Prim);
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("PRIM".parse::<Algorithm>(), Ok(Algorithm::Prim));
        assert!("boruvka".parse::<Algorithm>().is_err());
    }
}
