//! 算法运行记录：逐边决策日志与由日志导出的最终结果。
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::structure::{Edge, Weight};
use crate::mst::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Edge joined the tree.
    Accepted,
    /// Edge would have closed a cycle (Kruskal).
    Rejected,
    /// Cross-cut candidate examined during a Prim round.
    Considered,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::Accepted => "accepted",
            StepKind::Rejected => "rejected",
            StepKind::Considered => "considered",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub edge: Edge,
    pub kind: StepKind,
}

impl Step {
    pub fn accepted(edge: Edge) -> Self {
        Self {
            edge,
            kind: StepKind::Accepted,
        }
    }

    pub fn rejected(edge: Edge) -> Self {
        Self {
            edge,
            kind: StepKind::Rejected,
        }
    }

    pub fn considered(edge: Edge) -> Self {
        Self {
            edge,
            kind: StepKind::Considered,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.kind == StepKind::Accepted
    }
}

/// Final tree: edges in acceptance order plus their weight sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    pub algorithm: Algorithm,
    pub edges: Vec<Edge>,
    pub total_cost: Weight,
}

impl MstResult {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Complete, immutable decision log of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    algorithm: Algorithm,
    vertex_count: usize,
    steps: Vec<Step>,
}

impl StepLog {
    pub(crate) fn new(algorithm: Algorithm, vertex_count: usize, steps: Vec<Step>) -> Self {
        Self {
            algorithm,
            vertex_count,
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn accepted(&self) -> impl Iterator<Item = &Edge> {
        self.steps
            .iter()
            .filter(|step| step.is_accepted())
            .map(|step| &step.edge)
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// The instant result is the accepted subset of the log, in log order.
    pub fn result(&self) -> MstResult {
        let edges: Vec<Edge> = self.accepted().copied().collect();
        let total_cost = edges.iter().map(|edge| edge.weight).sum();
        MstResult {
            algorithm: self.algorithm,
            edges,
            total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ids::{EdgeId, VertexId};

    fn edge(id: u32, a: u32, b: u32, weight: Weight) -> Edge {
        Edge {
            id: EdgeId::new(id),
            a: VertexId::new(a),
            b: VertexId::new(b),
            distance: weight,
            weight,
            cost: None,
        }
    }

    #[test]
    fn result_keeps_only_accepted_in_order() {
        let log = StepLog::new(
            Algorithm::Kruskal,
            3,
            vec![
                Step::accepted(edge(2, 1, 2, 1.0)),
                Step::rejected(edge(0, 0, 1, 2.0)),
                Step::accepted(edge(1, 0, 2, 2.5)),
            ],
        );
        let result = log.result();
        assert_eq!(result.len(), 2);
        assert_eq!(result.edges[0].id, EdgeId::new(2));
        assert_eq!(result.edges[1].id, EdgeId::new(1));
        assert_eq!(result.total_cost, 3.5);
        assert_eq!(log.count(StepKind::Rejected), 1);
    }

    #[test]
    fn empty_log_is_empty_result() {
        let log = StepLog::new(Algorithm::Prim, 1, Vec::new());
        assert!(log.is_empty());
        let result = log.result();
        assert!(result.is_empty());
        assert_eq!(result.total_cost, 0.0);
    }
}
