//! # 平面点集的最小生成树
//!
//! 由二维点集构造完全加权图（边权为欧氏距离，或电网扩展模式下的建设代价），
//! 以 Kruskal 或 Prim 求最小生成树，并支持把算法的每一次决策录制下来逐步回放。
//!
//! * [`graph`]：顶点表与整体重建的完全边集；
//! * [`cost`]：材料 + 安装 + 线损的简化代价模型；
//! * [`mst`]：并查集、两种算法、决策日志与回放器；
//! * [`session`]：调用方持有的会话上下文；
//! * [`report`] / [`io`]：给展示层的输出与序列化。
//!
//! ## 示例
//!
//! ```rust
//! use mst_planner::mst::Algorithm;
//! use mst_planner::session::Session;
//!
//! let mut session = Session::new();
//! session.add_vertex(0.0, 0.0, None).unwrap();
//! session.add_vertex(10.0, 0.0, None).unwrap();
//! session.add_vertex(0.0, 10.0, None).unwrap();
//!
//! let result = session.run_instant(Algorithm::Kruskal).unwrap();
//! assert_eq!(result.edges.len(), 2);
//! assert_eq!(result.total_cost, 20.0);
//!
//! let player = session.run_stepwise(Algorithm::Prim).unwrap();
//! player.run_to_end();
//! assert_eq!(player.accepted_edges(), result.edges.as_slice());
//! ```

pub mod config;
pub mod cost;
pub mod graph;
pub mod io;
pub mod mst;
pub mod options;
pub mod report;
pub mod session;
