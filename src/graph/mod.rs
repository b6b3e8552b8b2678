//! # 平面点集上的完全加权图
//!
//! 对 `n` 个顶点，边集恒为全部无序点对，`|E| = n·(n−1)/2`，按 `i < j` 的嵌套
//! 循环顺序枚举。任何顶点增改都会整体重建边集，从不增量修补，因此边集总与当前
//! 坐标一致。边权为欧氏距离，或在电网扩展模式下为 [`crate::cost::CostModel`]
//! 给出的建设代价。
//!
//! ## 示例
//!
//! ```rust
//! use mst_planner::graph::*;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(Point::new(0.0, 0.0), None).unwrap();
//! let b = graph.add_vertex(Point::new(3.0, 4.0), None).unwrap();
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.edge_between(a, b).unwrap().weight, 5.0);
//! ```

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod structure;

pub use self::core::{Graph, GraphError, Weighting};
pub use ids::{EdgeId, VertexId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{Category, Edge, EdgeKey, Point, Vertex, Weight};
