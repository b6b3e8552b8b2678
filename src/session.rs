//! 调用方持有的会话上下文：图、最近一次结果与逐步回放器都挂在这里，没有进程级全局状态。
//!
//! 运行类操作在少于两个顶点时返回 [`SessionError::NotEnoughVertices`]，不改动任何状态；
//! 结果与回放器只在一次运行完整结束后才被替换。任何图变更都会丢弃过期的结果与回放器。
use std::fmt::Display;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Category, Graph, GraphError, Point, VertexId, Weight, Weighting};
use crate::mst::{Algorithm, MstResult, StepPlayer};
use crate::report::Comparison;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("at least 2 vertices are needed to build a spanning tree, found {found}")]
    NotEnoughVertices { found: usize },
    #[error("invalid layout bounds {0:?}: sizes must be finite and non-negative")]
    InvalidBounds(Bounds),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Axis-aligned area used for random layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Bounds {
    pub fn validate(&self) -> Result<(), SessionError> {
        let sizes = [self.width, self.height, self.padding];
        if sizes.iter().all(|v| v.is_finite() && *v >= 0.0) {
            Ok(())
        } else {
            Err(SessionError::InvalidBounds(*self))
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 50.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    graph: Graph,
    result: Option<MstResult>,
    player: Option<StepPlayer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weighting(weighting: Weighting) -> Self {
        Self {
            graph: Graph::with_weighting(weighting),
            ..Self::default()
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn add_vertex(
        &mut self,
        x: f64,
        y: f64,
        category: Option<Category>,
    ) -> Result<VertexId, SessionError> {
        let id = self.graph.add_vertex(Point::new(x, y), category)?;
        self.invalidate();
        Ok(id)
    }

    pub fn move_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<(), SessionError> {
        self.graph.move_vertex(id, Point::new(x, y))?;
        self.invalidate();
        Ok(())
    }

    pub fn set_weighting(&mut self, weighting: Weighting) -> Result<(), SessionError> {
        self.graph.set_weighting(weighting)?;
        info!("edge weights now use {}", self.graph.weighting().name());
        self.invalidate();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.invalidate();
    }

    /// Replaces the graph with `count` points drawn uniformly inside the
    /// padded `bounds`.
    pub fn randomize<R: Rng>(
        &mut self,
        count: usize,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        bounds.validate()?;
        if count > Graph::MAX_VERTICES {
            return Err(GraphError::TooManyVertices.into());
        }
        let (x0, x1) = padded_range(bounds.width, bounds.padding);
        let (y0, y1) = padded_range(bounds.height, bounds.padding);

        let mut graph = Graph::with_weighting(self.graph.weighting().clone());
        for _ in 0..count {
            let x = if x0 < x1 { rng.random_range(x0..x1) } else { x0 };
            let y = if y0 < y1 { rng.random_range(y0..y1) } else { y0 };
            graph.add_vertex(Point::new(x, y), None)?;
        }
        self.graph = graph;
        self.invalidate();
        info!("random layout with {count} vertices");
        Ok(())
    }

    pub fn run_instant(&mut self, algorithm: Algorithm) -> Result<MstResult, SessionError> {
        self.check_runnable(algorithm)?;
        let result = algorithm.record(&self.graph).result();
        info!(
            "{algorithm}: {} edges, total cost {:.3}",
            result.len(),
            result.total_cost
        );
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Records a full run and installs a fresh player over it.
    ///
    /// The stored result is left as it was; the cost reached so far in step
    /// mode is [`StepPlayer::accumulated_cost`].
    pub fn run_stepwise(&mut self, algorithm: Algorithm) -> Result<&mut StepPlayer, SessionError> {
        self.check_runnable(algorithm)?;
        let log = algorithm.record(&self.graph);
        info!("{algorithm}: recorded {} steps", log.len());
        Ok(self.player.insert(StepPlayer::new(log)))
    }

    /// Runs both algorithms once on the current graph.
    pub fn compare(&mut self) -> Result<Comparison, SessionError> {
        self.check_runnable("compare")?;
        let kruskal = Algorithm::Kruskal.record(&self.graph).result();
        let prim = Algorithm::Prim.record(&self.graph).result();
        let comparison = Comparison::new(kruskal, prim);
        self.result = Some(comparison.kruskal.clone());
        Ok(comparison)
    }

    pub fn last_result(&self) -> Option<&MstResult> {
        self.result.as_ref()
    }

    /// Cost shown for the latest run, 0 when nothing has been run.
    pub fn total_cost(&self) -> Weight {
        self.result.as_ref().map_or(0.0, |result| result.total_cost)
    }

    pub fn player(&self) -> Option<&StepPlayer> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut StepPlayer> {
        self.player.as_mut()
    }

    fn check_runnable(&self, what: impl Display) -> Result<(), SessionError> {
        let found = self.graph.vertex_count();
        if found < 2 {
            warn!("{what} refused: {found} vertices");
            return Err(SessionError::NotEnoughVertices { found });
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.result = None;
        self.player = None;
    }
}

fn padded_range(extent: f64, padding: f64) -> (f64, f64) {
    let lo = padding.clamp(0.0, extent.max(0.0));
    let hi = (extent - padding).max(lo);
    (lo, hi)
}
