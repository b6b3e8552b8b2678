//! Prim，固定从顶点 0 出发。
//!
//! 每一轮都线性扫描整张边集，复杂度 O(V·E)。对几十个点的完全图足够，推广到大图
//! 时应改用优先队列。轮内最小边取扫描中第一次出现的最小值（严格小于才替换），
//! 结果因此依赖边的枚举顺序。
use log::{debug, warn};

use crate::graph::Graph;
use crate::graph::index_vec::Idx;
use crate::graph::structure::Edge;
use crate::mst::step::{Step, StepLog};
use crate::mst::{Algorithm, SpanningTreeAlgorithm};

#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl SpanningTreeAlgorithm for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn record(&self, graph: &Graph) -> StepLog {
        let n = graph.vertex_count();
        let mut steps = Vec::new();
        if n == 0 {
            return StepLog::new(self.algorithm(), n, steps);
        }

        let mut visited = vec![false; n];
        visited[0] = true;
        let mut reached = 1;

        while reached < n {
            let mut best: Option<&Edge> = None;
            for edge in graph.edges() {
                if visited[edge.a.index()] == visited[edge.b.index()] {
                    continue;
                }
                steps.push(Step::considered(*edge));
                if best.is_none_or(|b| edge.weight < b.weight) {
                    best = Some(edge);
                }
            }

            let Some(edge) = best else {
                warn!("prim: no cross-cut edge with {reached}/{n} vertices reached");
                break;
            };
            let next = if visited[edge.a.index()] { edge.b } else { edge.a };
            visited[next.index()] = true;
            reached += 1;
            debug!("prim: accept {edge}, reached {next:?}");
            steps.push(Step::accepted(*edge));
        }

        StepLog::new(self.algorithm(), n, steps)
    }
}
