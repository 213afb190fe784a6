use crate::graph::DyUGraph;
use fxhash::FxHashSet;

/// A single branching choice on `node`. `included` puts `node` into the cover, otherwise every
/// neighbor of `node` has to be in the cover.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Decision {
    pub node: usize,
    pub included: bool,
}

impl Decision {
    pub fn included(node: usize) -> Self {
        Decision { node, included: true }
    }

    pub fn excluded(node: usize) -> Self {
        Decision { node, included: false }
    }
}

/// The working graph of a search together with the decision trail that led to it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct VCInstance {
    pub graph: DyUGraph,
    /// All nodes of included decisions on the trail.
    pub solution: FxHashSet<usize>,
    /// Records changes to the adjacency list, one entry per decision.
    alterations: Vec<Alteration>,
}

#[derive(Debug, Eq, PartialEq, Clone)]
enum Alteration {
    /// `node` went into the solution and was deleted together with the edges to these neighbors.
    Include(usize, FxHashSet<usize>),
    /// `node` was left out. It stays in the graph, its neighbors were included right before.
    Exclude(usize),
}

impl Alteration {
    fn decision(&self) -> Decision {
        match self {
            Alteration::Include(node, _) => Decision::included(*node),
            Alteration::Exclude(node) => Decision::excluded(*node),
        }
    }
}

impl VCInstance {

    pub fn new(graph: DyUGraph) -> Self {
        VCInstance {
            graph,
            solution: FxHashSet::default(),
            alterations: Vec::new(),
        }
    }

    /// Adds `node` to `self.solution` and removes it from `self.graph`.
    /// Returns `true` and records the alteration if a node was added, returns `false` otherwise.
    pub fn include(&mut self, node: usize) -> bool {
        if let Some(old_neighbors) = self.graph.delete_node(node) {
            self.alterations.push(Alteration::Include(node, old_neighbors));
            self.solution.insert(node);
            return true
        }
        false
    }

    /// Leaves `node` out of the solution: all of its current neighbors are included, in ascending
    /// order, and recorded before the exclusion itself.
    /// Returns `false` without any change if `node` is not in `self.graph`.
    pub fn exclude(&mut self, node: usize) -> bool {
        let mut neighbors: Vec<usize> = match self.graph.neighbors(node) {
            Some(neighbors) => neighbors.iter().copied().collect(),
            None => return false,
        };
        neighbors.sort_unstable();
        for neigh in neighbors {
            self.include(neigh);
        }
        self.alterations.push(Alteration::Exclude(node));
        true
    }

    /// Applies `decision` through `include` or `exclude`.
    pub fn apply(&mut self, decision: Decision) -> bool {
        if decision.included {
            self.include(decision.node)
        } else {
            self.exclude(decision.node)
        }
    }

    /// Number of included decisions on the trail.
    pub fn cover_size(&self) -> usize {
        self.solution.len()
    }

    /// Number of decisions on the trail, forced ones included.
    pub fn trail_len(&self) -> usize {
        self.alterations.len()
    }

    /// Returns the decision at `position` of the trail.
    pub fn decision_at(&self, position: usize) -> Option<Decision> {
        self.alterations.get(position).map(Alteration::decision)
    }

    /// Returns the decisions from the root to the current node.
    pub fn trail(&self) -> impl Iterator<Item=Decision> + '_ {
        self.alterations.iter().map(Alteration::decision)
    }

    /// Reverts the last decision.
    ///
    /// An included node gets back exactly those of its recorded edges whose other end is present
    /// and not part of the solution. An exclusion has nothing to revert in the graph.
    pub fn undo_last(&mut self) -> Option<Decision> {
        let alteration = self.alterations.pop()?;
        let decision = alteration.decision();
        if let Alteration::Include(node, neighbors) = alteration {
            self.solution.remove(&node);
            let edges: FxHashSet<usize> = neighbors
                .into_iter()
                .filter(|neigh| self.graph.contains(*neigh) && !self.solution.contains(neigh))
                .collect();
            self.graph.reinsert_node(node, &edges);
        }
        Some(decision)
    }

    /// Reverts decisions until only `len` remain on the trail.
    pub fn undo_to(&mut self, len: usize) {
        while self.alterations.len() > len {
            self.undo_last();
        }
    }
}
