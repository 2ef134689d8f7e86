//! Exhaustive enumeration of simple paths.
//!
//! The explorer walks the graph depth-first with an explicit stack. Each
//! frame owns the outgoing edges of one node on the current path and a
//! cursor into them; popping a frame undoes that node's entry in the path
//! and the visited set. Outgoing edges are tried in edge insertion order,
//! so candidates come out in the same order a recursive walk would produce.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use rust_decimal::Decimal;

use crate::router::router_types::{
    candidate::Candidate,
    edge::Cost,
    router::engine::{Router, RouterError, SearchLimits},
};

/// One node on the current path.
#[derive(Debug)]
struct Frame {
    cost: Cost,
    outgoing: Vec<(NodeIndex, Cost)>,
    cursor: usize,
}

/// Enumerates every simple path from an origin to a fixed target.
#[derive(Debug)]
pub struct PathExplorer<'r, 'a> {
    router: &'r Router<'a>,
    target: NodeIndex,
    limits: SearchLimits,
    path: Vec<NodeIndex>,
    on_path: HashSet<NodeIndex>,
    candidates: Vec<Candidate>,
    expansions: u64,
}

impl<'r, 'a> PathExplorer<'r, 'a> {
    /// Creates an explorer that collects paths ending at `target`.
    pub fn new(router: &'r Router<'a>, target: NodeIndex, limits: SearchLimits) -> Self {
        PathExplorer {
            router,
            target,
            limits,
            path: Vec::new(),
            on_path: HashSet::new(),
            candidates: Vec::new(),
            expansions: 0,
        }
    }

    /// Runs the search from `origin` and returns every candidate in
    /// enumeration order.
    ///
    /// # Errors
    /// [`RouterError::SearchAborted`] when more nodes are entered than
    /// `limits.max_expansions` allows.
    pub fn explore(mut self, origin: NodeIndex) -> Result<Vec<Candidate>, RouterError> {
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.enter(origin, Decimal::ZERO)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            match frame.outgoing.get(frame.cursor) {
                Some(&(next, edge_cost)) => {
                    frame.cursor += 1;
                    let cost = frame.cost + edge_cost;
                    if let Some(child) = self.enter(next, cost)? {
                        stack.push(child);
                    }
                }
                None => {
                    stack.pop();
                    self.leave();
                }
            }
        }

        Ok(self.candidates)
    }

    /// Steps onto `node`. Returns the frame to push when the node still
    /// has to be expanded, `None` when the branch ends here (cycle or
    /// target reached).
    fn enter(&mut self, node: NodeIndex, cost: Cost) -> Result<Option<Frame>, RouterError> {
        if self.on_path.contains(&node) {
            return Ok(None);
        }

        self.expansions += 1;
        if let Some(max) = self.limits.max_expansions {
            if self.expansions > max {
                return Err(RouterError::SearchAborted);
            }
        }

        self.path.push(node);
        self.on_path.insert(node);

        if node == self.target {
            let path = self
                .path
                .iter()
                .filter_map(|index| self.router.get_label(*index))
                .map(String::from)
                .collect();
            self.candidates.push(Candidate {
                path,
                total_cost: cost,
            });
            self.leave();
            return Ok(None);
        }

        Ok(Some(Frame {
            cost,
            outgoing: self.router.outgoing(node),
            cursor: 0,
        }))
    }

    /// Undoes the most recent [`enter`](Self::enter).
    fn leave(&mut self) {
        if let Some(node) = self.path.pop() {
            self.on_path.remove(&node);
        }
    }
}
