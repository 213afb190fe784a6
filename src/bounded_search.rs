//! Implementation of a depth first branch and bound search for a minimum vertex cover.
//!
//! The search works on a single working graph. Every decision deletes nodes in place and is
//! recorded on the decision trail of a `VCInstance`, backtracking undoes decisions until the
//! working graph matches the node the next frontier entry belongs to. Open alternatives live on an
//! explicit stack, so the cutoff can be checked between any two expansions.

use crate::cust_error::ProcessingError;
use crate::graph::DyUGraph;
use crate::lower_bound::degree_bound;
use crate::tracker::{Improvement, ResultTracker};
use crate::vc_instance::{Decision, VCInstance};
use fxhash::FxHashSet;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall clock budget. Checked once per expansion.
    pub cutoff: Duration,
    /// If `false`, partial solutions are always branched on.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            cutoff: Duration::MAX,
            pruning: true,
        }
    }
}

impl SearchConfig {
    pub fn with_cutoff(cutoff: Duration) -> Self {
        SearchConfig {
            cutoff,
            ..Default::default()
        }
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The time budget ran out, the best cover might not be minimum.
    Cutoff,
    /// The frontier is empty, the best cover is minimum.
    Exhausted,
}

/// Node of the search tree a frontier entry branches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Root,
    /// The decision at `position` of the trail.
    Decision { position: usize, decision: Decision },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    decision: Decision,
    parent: Parent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Branch,
    Backtrack,
}

pub struct BranchAndBound<'a> {
    input: &'a DyUGraph,
    instance: VCInstance,
    frontier: Vec<FrontierEntry>,
    tracker: ResultTracker,
    config: SearchConfig,
    start: Instant,
}

impl<'a> BranchAndBound<'a> {

    /// Prepares a search on a copy of `input`. The initial best cover consists of all nodes, or
    /// of none if `input` has no edges.
    pub fn new(input: &'a DyUGraph, config: SearchConfig) -> Self {
        let initial = if input.num_edges() == 0 {
            FxHashSet::default()
        } else {
            input.nodes().collect()
        };
        BranchAndBound {
            input,
            instance: VCInstance::new(input.clone()),
            frontier: Vec::new(),
            tracker: ResultTracker::new(initial),
            config,
            start: Instant::now(),
        }
    }

    /// Runs the search until the frontier is empty or the cutoff is reached.
    ///
    /// In every step the top entry of the frontier is applied to the working graph:
    /// 1. If no edge remains, the current solution is offered to the tracker and the search
    ///    backtracks.
    /// 2. Otherwise, if `degree_bound` plus the current solution size reaches the best known size,
    ///    the node is pruned and the search backtracks.
    /// 3. Otherwise the node with the highest degree is branched on. Both alternatives are pushed,
    ///    the one including the node ends on top.
    ///
    /// A `ProcessingError::InternalInvariantViolation` means the trail and the frontier went out of
    /// sync, no result should be trusted in that case.
    pub fn run(&mut self) -> Result<Termination, ProcessingError> {
        self.start = Instant::now();
        info!("Initial upper bound: {}", self.tracker.upper_bound());
        if self.instance.graph.num_edges() > 0 {
            let root = self.instance.graph.max_degree_node().expect("graph has edges");
            self.push_children(root, Parent::Root);
        }
        while !self.frontier.is_empty() && self.start.elapsed() < self.config.cutoff {
            let entry = self.frontier.pop().expect("`self.frontier` is not empty");
            if self.expand(entry)? == Step::Backtrack {
                self.backtrack()?;
            }
        }
        if self.frontier.is_empty() {
            debug!("Search space exhausted");
            Ok(Termination::Exhausted)
        } else {
            warn!("Cutoff time reached, {} open alternatives left", self.frontier.len());
            Ok(Termination::Cutoff)
        }
    }

    fn push_children(&mut self, node: usize, parent: Parent) {
        self.frontier.push(FrontierEntry { decision: Decision::excluded(node), parent });
        self.frontier.push(FrontierEntry { decision: Decision::included(node), parent });
    }

    fn expand(&mut self, entry: FrontierEntry) -> Result<Step, ProcessingError> {
        if !self.instance.apply(entry.decision) {
            return Err(ProcessingError::InternalInvariantViolation(
                    format!("{:?} refers to a node that is not in the working graph", entry.decision)))
        }
        let size = self.instance.cover_size();
        if self.instance.graph.num_edges() == 0 {
            if self.tracker.offer(&self.instance.solution, self.start.elapsed()) {
                info!("Current best cover size: {}", size);
            }
            return Ok(Step::Backtrack)
        }
        if self.config.pruning && degree_bound(&self.instance.graph) + size >= self.tracker.upper_bound() {
            return Ok(Step::Backtrack)
        }
        let node = self.instance.graph.max_degree_node().expect("graph has edges");
        let position = self.instance.trail_len() - 1;
        self.push_children(node, Parent::Decision { position, decision: entry.decision });
        Ok(Step::Branch)
    }

    /// Undoes decisions until the trail ends in the parent of the next frontier entry.
    fn backtrack(&mut self) -> Result<(), ProcessingError> {
        let parent = match self.frontier.last() {
            Some(entry) => entry.parent,
            None => return Ok(()),
        };
        match parent {
            Parent::Root => self.restore_root(),
            Parent::Decision { position, decision } => {
                if self.instance.decision_at(position) != Some(decision) {
                    return Err(ProcessingError::InternalInvariantViolation(
                            format!("parent {:?} not found at position {} of the decision trail", decision, position)))
                }
                self.instance.undo_to(position + 1);
                Ok(())
            }
        }
    }

    /// Undoes the whole trail. The working graph then has to equal the input graph again.
    pub fn restore_root(&mut self) -> Result<(), ProcessingError> {
        self.instance.undo_to(0);
        if self.instance.graph != *self.input {
            return Err(ProcessingError::InternalInvariantViolation(
                    "working graph differs from the input after restoring the root".to_owned()))
        }
        debug!("Restored the root");
        Ok(())
    }

    pub fn working_graph(&self) -> &DyUGraph {
        &self.instance.graph
    }

    pub fn tracker(&self) -> &ResultTracker {
        &self.tracker
    }

    /// Returns the best cover and the trace of improvements.
    pub fn into_result(self) -> (FxHashSet<usize>, Vec<Improvement>) {
        self.tracker.into_parts()
    }
}
