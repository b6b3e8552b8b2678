//! 面向展示层的输出：单次运行报告、逐步日志报告与两种算法的对比。
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeKey, Weight};
use crate::io::{self, IoError};
use crate::mst::{Algorithm, MstResult, StepKind, StepLog};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeLine {
    pub key: EdgeKey,
    pub weight: Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub vertex_count: usize,
    pub edges: Vec<EdgeLine>,
    pub total_cost: Weight,
}

impl RunReport {
    pub fn new(result: &MstResult, vertex_count: usize) -> Self {
        Self {
            algorithm: result.algorithm,
            vertex_count,
            edges: result
                .edges
                .iter()
                .map(|edge| EdgeLine {
                    key: edge.key(),
                    weight: edge.weight,
                })
                .collect(),
            total_cost: result.total_cost,
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        io::write_json(path, self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} over {} vertices: {} edges",
            self.algorithm,
            self.vertex_count,
            self.edges.len()
        )?;
        for (order, line) in self.edges.iter().enumerate() {
            writeln!(f, "  #{:<3} {:<9} {:.3}", order + 1, line.key.to_string(), line.weight)?;
        }
        write!(f, "total cost: {:.3}", self.total_cost)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepLine {
    pub index: usize,
    pub kind: StepKind,
    pub key: EdgeKey,
    pub weight: Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub algorithm: Algorithm,
    pub steps: Vec<StepLine>,
    pub accepted: usize,
    pub total_cost: Weight,
}

impl StepReport {
    pub fn new(log: &StepLog) -> Self {
        let result = log.result();
        Self {
            algorithm: log.algorithm(),
            steps: log
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| StepLine {
                    index,
                    kind: step.kind,
                    key: step.edge.key(),
                    weight: step.edge.weight,
                })
                .collect(),
            accepted: result.len(),
            total_cost: result.total_cost,
        }
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} step log ({} steps)", self.algorithm, self.steps.len())?;
        for line in &self.steps {
            writeln!(
                f,
                "  [{:>4}/{}] {:<10} {:<9} {:.3}",
                line.index + 1,
                self.steps.len(),
                line.kind,
                line.key.to_string(),
                line.weight
            )?;
        }
        write!(
            f,
            "accepted {} edges, total cost: {:.3}",
            self.accepted, self.total_cost
        )
    }
}

/// Side-by-side outcome of running both algorithms once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub kruskal: MstResult,
    pub prim: MstResult,
    /// Totals agree within a relative tolerance of 1e-9.
    pub costs_match: bool,
    pub only_in_kruskal: Vec<EdgeKey>,
    pub only_in_prim: Vec<EdgeKey>,
}

impl Comparison {
    pub fn new(kruskal: MstResult, prim: MstResult) -> Self {
        let (a, b) = (kruskal.total_cost, prim.total_cost);
        let costs_match = (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0);

        let in_kruskal: HashSet<EdgeKey> = kruskal.edges.iter().map(|e| e.key()).collect();
        let in_prim: HashSet<EdgeKey> = prim.edges.iter().map(|e| e.key()).collect();
        let only_in_kruskal = kruskal
            .edges
            .iter()
            .map(|e| e.key())
            .filter(|key| !in_prim.contains(key))
            .collect();
        let only_in_prim = prim
            .edges
            .iter()
            .map(|e| e.key())
            .filter(|key| !in_kruskal.contains(key))
            .collect();

        Self {
            kruskal,
            prim,
            costs_match,
            only_in_kruskal,
            only_in_prim,
        }
    }

    pub fn same_tree(&self) -> bool {
        self.only_in_kruskal.is_empty() && self.only_in_prim.is_empty()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "kruskal: {} edges, total cost {:.3}",
            self.kruskal.len(),
            self.kruskal.total_cost
        )?;
        writeln!(
            f,
            "prim:    {} edges, total cost {:.3}",
            self.prim.len(),
            self.prim.total_cost
        )?;
        if self.same_tree() {
            write!(f, "both algorithms selected the same tree")
        } else {
            let list = |keys: &[EdgeKey]| {
                keys.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(f, "trees differ (tied weights):")?;
            writeln!(f, "  only kruskal: {}", list(&self.only_in_kruskal))?;
            write!(f, "  only prim:    {}", list(&self.only_in_prim))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Point};
    use crate::mst::Algorithm;

    fn square() -> Graph {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            graph.add_vertex(Point::new(x, y), None).unwrap();
        }
        graph
    }

    #[test]
    fn comparison_of_identical_trees() {
        // unit square: both settle the four-way tie on 0-1, 0-3, 1-2
        let graph = square();
        let kruskal = Algorithm::Kruskal.record(&graph).result();
        let prim = Algorithm::Prim.record(&graph).result();
        let comparison = Comparison::new(kruskal, prim);
        assert!(comparison.costs_match);
        assert!(comparison.same_tree());
        assert!(comparison.to_string().contains("same tree"));
    }

    #[test]
    fn comparison_lists_edges_unique_to_each_side() {
        let graph = square();
        let kruskal = Algorithm::Kruskal.record(&graph).result();
        let mut prim = kruskal.clone();
        let swapped = graph
            .edge_between(crate::graph::VertexId::new(2), crate::graph::VertexId::new(3))
            .copied()
            .unwrap();
        prim.edges[2] = swapped;
        let comparison = Comparison::new(kruskal, prim);
        assert!(comparison.costs_match);
        assert!(!comparison.same_tree());
        assert_eq!(comparison.only_in_prim, vec![swapped.key()]);
        assert_eq!(comparison.only_in_kruskal.len(), 1);
    }

    #[test]
    fn run_report_lists_edges_in_acceptance_order() {
        let graph = square();
        let result = Algorithm::Kruskal.record(&graph).result();
        let report = RunReport::new(&result, graph.vertex_count());
        let text = report.to_string();
        assert!(text.starts_with("kruskal over 4 vertices: 3 edges"));
        assert!(text.ends_with("total cost: 3.000"));
        let json = io::to_json_string(&report).unwrap();
        assert!(json.contains("\"algorithm\": \"kruskal\""));
    }

    #[test]
    fn run_report_saves_as_json() {
        let graph = square();
        let result = Algorithm::Prim.record(&graph).result();
        let report = RunReport::new(&result, graph.vertex_count());
        let path = std::env::temp_dir().join(format!("mst-report-{}.json", std::process::id()));
        report.save_to_file(&path).unwrap();
        let saved: RunReport = io::from_json_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.edges.len(), 3);
        assert_eq!(saved.total_cost, 3.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn step_report_counts_kinds() {
        let graph = square();
        let log = Algorithm::Kruskal.record(&graph);
        let report = StepReport::new(&log);
        assert_eq!(report.steps.len(), 6);
        assert_eq!(report.accepted, 3);
        assert_eq!(report.steps[3].kind, StepKind::Rejected);
        assert!(report.to_string().contains("rejected"));
    }
}
