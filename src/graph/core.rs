//! 完全图：顶点表 + 由当前坐标整体重建的边集。
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::{debug, trace};
use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::cost::CostModel;
use crate::graph::ids::{EdgeId, VertexId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Category, Edge, EdgeKey, Point, Vertex, Weight};

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(VertexId),
    #[error("position {0} is not finite")]
    NonFinitePosition(Point),
    #[error("edge {key} has invalid weight {weight}")]
    InvalidWeight { key: EdgeKey, weight: Weight },
    #[error("graph is limited to {max} vertices", max = Graph::MAX_VERTICES)]
    TooManyVertices,
}

/// How edge weights are derived from the geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Weighting {
    /// Weight is the Euclidean distance.
    #[default]
    Distance,
    /// Weight is the power-network construction cost.
    Cost(CostModel),
}

impl Weighting {
    pub fn name(&self) -> &'static str {
        match self {
            Weighting::Distance => "distance",
            Weighting::Cost(_) => "cost",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: IndexVec<VertexId, Vertex>,
    edges: IndexVec<EdgeId, Edge>,
    weighting: Weighting,
}

impl Graph {
    /// Largest vertex count whose complete edge set still fits the `u32`
    /// edge id space.
    pub const MAX_VERTICES: usize = 92_682;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weighting(weighting: Weighting) -> Self {
        Self {
            weighting,
            ..Self::default()
        }
    }

    pub fn add_vertex(
        &mut self,
        position: Point,
        category: Option<Category>,
    ) -> Result<VertexId, GraphError> {
        if !position.is_finite() {
            return Err(GraphError::NonFinitePosition(position));
        }
        if self.vertices.len() >= Self::MAX_VERTICES {
            return Err(GraphError::TooManyVertices);
        }
        let mut vertices = self.vertices.clone();
        let id = vertices.push(Vertex::new(position, category));
        self.edges = build_edges(&vertices, &self.weighting)?;
        self.vertices = vertices;
        debug!("added vertex {id:?} at {position}");
        Ok(id)
    }

    pub fn move_vertex(&mut self, id: VertexId, position: Point) -> Result<(), GraphError> {
        if !self.vertices.contains(id) {
            return Err(GraphError::UnknownVertex(id));
        }
        if !position.is_finite() {
            return Err(GraphError::NonFinitePosition(position));
        }
        let mut vertices = self.vertices.clone();
        vertices[id].position = position;
        self.edges = build_edges(&vertices, &self.weighting)?;
        self.vertices = vertices;
        trace!("moved vertex {id:?} to {position}");
        Ok(())
    }

    pub fn set_weighting(&mut self, weighting: Weighting) -> Result<(), GraphError> {
        self.edges = build_edges(&self.vertices, &weighting)?;
        self.weighting = weighting;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter_enumerated()
    }

    /// Edges in enumeration order: `(0,1), (0,2), .., (1,2), ..`.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        let key = EdgeKey::new(a, b);
        let (lo, hi) = key.endpoints();
        let n = self.vertices.len();
        if lo == hi || hi.index() >= n {
            return None;
        }
        // Row `lo` starts after the rows of all smaller vertices.
        let (lo, hi) = (lo.index(), hi.index());
        let offset = lo * n - lo * (lo + 1) / 2 + (hi - lo - 1);
        self.edges.get(EdgeId::from_usize(offset))
    }

    pub fn to_petgraph(&self) -> UnGraph<Vertex, Weight> {
        let mut graph = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        for vertex in self.vertices.iter() {
            graph.add_node(*vertex);
        }
        for edge in self.edges.iter() {
            graph.add_edge(
                NodeIndex::new(edge.a.index()),
                NodeIndex::new(edge.b.index()),
                edge.weight,
            );
        }
        graph
    }

    /// Graphviz rendering; edges whose key is in `highlight` are drawn bold.
    pub fn to_dot(&self, highlight: &[Edge]) -> String {
        let selected: std::collections::HashSet<EdgeKey> =
            highlight.iter().map(Edge::key).collect();

        let mut dot = String::new();
        let _ = writeln!(&mut dot, "graph MST {{");
        let _ = writeln!(&mut dot, "    layout=neato;");
        let _ = writeln!(&mut dot, "    node [shape=circle, fontname=\"Helvetica\"];");

        for (id, vertex) in self.vertices.iter_enumerated() {
            let label = match vertex.category {
                Some(category) => format!("{}\\n{}", id, category),
                None => id.to_string(),
            };
            let _ = writeln!(
                &mut dot,
                "    v{} [label=\"{}\", pos=\"{},{}!\"];",
                id, label, vertex.position.x, -vertex.position.y
            );
        }

        for edge in self.edges.iter() {
            let style = if selected.contains(&edge.key()) {
                "color=\"#2ecc71\", penwidth=3"
            } else {
                "color=\"#bdc3c7\", style=dashed"
            };
            let _ = writeln!(
                &mut dot,
                "    v{} -- v{} [label=\"{:.0}\", {}];",
                edge.a, edge.b, edge.weight, style
            );
        }

        let _ = writeln!(&mut dot, "}}");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P, highlight: &[Edge]) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot(highlight))
    }
}

fn build_edges(
    vertices: &IndexVec<VertexId, Vertex>,
    weighting: &Weighting,
) -> Result<IndexVec<EdgeId, Edge>, GraphError> {
    let n = vertices.len();
    let mut edges = IndexVec::with_capacity(n * n.saturating_sub(1) / 2);
    for (a, b) in vertices.indices().tuple_combinations() {
        let distance = vertices[a].position.distance(&vertices[b].position);
        let cost = match weighting {
            Weighting::Distance => None,
            Weighting::Cost(model) => Some(model.breakdown(&vertices[a], &vertices[b], distance)),
        };
        let weight = cost.map_or(distance, |c| c.total);
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                key: EdgeKey::new(a, b),
                weight,
            });
        }
        let id = edges.next_id();
        edges.push(Edge {
            id,
            a,
            b,
            distance,
            weight,
            cost,
        });
    }
    Ok(edges)
}
