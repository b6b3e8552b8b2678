//! 逐步回放器：按预先生成的日志一次推进一步，累积已接受的边。
use serde::{Deserialize, Serialize};

use crate::graph::structure::{Edge, Weight};
use crate::mst::step::{Step, StepLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct StepPlayer {
    log: StepLog,
    index: usize,
    accepted: Vec<Edge>,
}

impl StepPlayer {
    pub fn new(log: StepLog) -> Self {
        Self {
            log,
            index: 0,
            accepted: Vec::new(),
        }
    }

    pub fn log(&self) -> &StepLog {
        &self.log
    }

    /// Applies the next step and returns it, or `None` once every step has
    /// been played. The terminal state is sticky.
    pub fn advance(&mut self) -> Option<&Step> {
        let step = self.log.get(self.index)?;
        if step.is_accepted() {
            self.accepted.push(step.edge);
        }
        self.index += 1;
        Some(step)
    }

    /// Plays every remaining step.
    pub fn run_to_end(&mut self) -> &[Edge] {
        while self.advance().is_some() {}
        &self.accepted
    }

    /// Step that the next `advance` will apply.
    pub fn current(&self) -> Option<&Step> {
        self.log.get(self.index)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            index: self.index,
            total: self.log.len(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.log.len()
    }

    pub fn accepted_edges(&self) -> &[Edge] {
        &self.accepted
    }

    pub fn accumulated_cost(&self) -> Weight {
        self.accepted.iter().map(|edge| edge.weight).sum()
    }

    /// Rewinds to the first step; the log itself is kept for replay.
    pub fn reset(&mut self) {
        self.index = 0;
        self.accepted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Point};
    use crate::mst::{Kruskal, SpanningTreeAlgorithm, StepKind};

    fn player() -> StepPlayer {
        let mut graph = Graph::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)] {
            graph.add_vertex(Point::new(x, y), None).unwrap();
        }
        StepPlayer::new(Kruskal.record(&graph))
    }

    #[test]
    fn advance_accumulates_only_accepted() {
        let mut player = player();
        assert_eq!(player.progress(), Progress { index: 0, total: 3 });
        assert_eq!(player.current().map(|s| s.kind), Some(StepKind::Accepted));

        player.advance();
        player.advance();
        assert_eq!(player.accepted_edges().len(), 2);
        assert_eq!(player.accumulated_cost(), 20.0);

        let last = player.advance().copied();
        assert_eq!(last.map(|s| s.kind), Some(StepKind::Rejected));
        assert_eq!(player.accepted_edges().len(), 2);
        assert!(player.is_finished());
        assert_eq!(player.progress().to_string(), "3/3");
    }

    #[test]
    fn advance_past_end_is_a_no_op() {
        let mut player = player();
        player.run_to_end();
        let before = player.accepted_edges().to_vec();
        assert!(player.advance().is_none());
        assert!(player.advance().is_none());
        assert_eq!(player.progress(), Progress { index: 3, total: 3 });
        assert_eq!(player.accepted_edges(), before.as_slice());
        assert!(player.current().is_none());
    }

    #[test]
    fn reset_replays_the_same_log() {
        let mut player = player();
        let first = player.run_to_end().to_vec();
        player.reset();
        assert_eq!(player.progress().index, 0);
        assert!(player.accepted_edges().is_empty());
        assert_eq!(player.log().len(), 3);
        assert_eq!(player.run_to_end(), first.as_slice());
    }
}
