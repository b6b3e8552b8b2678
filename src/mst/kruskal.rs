//! Kruskal: stable ascending sort, then a union-find pass over every edge.
use log::debug;

use crate::graph::Graph;
use crate::graph::index_vec::Idx;
use crate::mst::step::{Step, StepLog};
use crate::mst::union_find::DisjointSet;
use crate::mst::{Algorithm, SpanningTreeAlgorithm};

#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl SpanningTreeAlgorithm for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    /// One step per edge in sorted order. Equal weights keep enumeration
    /// order (`sort_by` is stable), which fixes the tie-break.
    ///
    /// Every edge is visited even after the tree is complete, so the log ends
    /// with the trailing rejections.
    fn record(&self, graph: &Graph) -> StepLog {
        let mut sorted = graph.edges().to_vec();
        sorted.sort_by(|l, r| l.weight.total_cmp(&r.weight));

        let mut forest = DisjointSet::new(graph.vertex_count());
        let mut steps = Vec::with_capacity(sorted.len());
        for edge in sorted {
            if forest.union(edge.a.index(), edge.b.index()) {
                debug!("kruskal: accept {edge}");
                steps.push(Step::accepted(edge));
            } else {
                debug!("kruskal: reject {edge} (cycle)");
                steps.push(Step::rejected(edge));
            }
        }
        StepLog::new(self.algorithm(), graph.vertex_count(), steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;
    use crate::mst::StepKind;

    #[test]
    fn logs_every_edge_in_weight_order() {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)] {
            graph.add_vertex(Point::new(x, y), None).unwrap();
        }
        let log = Kruskal.record(&graph);
        assert_eq!(log.len(), 3);
        let kinds: Vec<_> = log.steps().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Accepted, StepKind::Accepted, StepKind::Rejected]
        );
        let weights: Vec<_> = log.steps().iter().map(|s| s.edge.weight).collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ties_resolve_by_enumeration_order() {
        // unit square: four sides of 1, two diagonals
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            graph.add_vertex(Point::new(x, y), None).unwrap();
        }
        let result = Kruskal.record(&graph).result();
        let pairs: Vec<_> = result
            .edges
            .iter()
            .map(|e| (e.a.raw(), e.b.raw()))
            .collect();
        // sides in enumeration order: 0-1, 0-3, 1-2, 2-3; 2-3 closes the ring
        assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2)]);
        assert_eq!(result.total_cost, 3.0);
    }
}
