//! Implementation of a simple, undirected graph data structure with basic static and dynamic
//! functions. All dynamic functions work in place, deleted nodes keep their slot so that they can
//! be reinserted under the same identifier.

use fxhash::FxHashSet;
use std::io::BufRead;
use crate::cust_error::ImportError;
use rand::Rng;

/// A simple undirected graph datastructure that supports dynamic behaviour.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DyUGraph {
    adj_list: Vec<Option<FxHashSet<usize>>>,
    num_edges: usize,
}

// Constructors
impl DyUGraph {

    /// Creates a graph with `n` isolated nodes `0..n`.
    pub fn new(n: usize) -> Self {
        DyUGraph {
            adj_list: vec![Some(FxHashSet::default()); n],
            num_edges: 0,
        }
    }

    /// Creates a graph with `n` nodes and the given edges. Loops and edges to unknown nodes are
    /// skipped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(n);
        for (src, trg) in edges {
            graph.add_edge(*src, *trg);
        }
        graph
    }

    /// Creates a random graph on `n` nodes where each edge exists with probability `p`.
    ///
    /// Panics if `p` is not in `[0, 1]`.
    pub fn gnp<R: Rng>(n: usize, p: f64, rng: &mut R) -> Self {
        let mut graph = Self::new(n);
        for src in 0..n {
            for trg in (src + 1)..n {
                if rng.gen_bool(p) {
                    graph.add_edge(src, trg);
                }
            }
        }
        graph
    }
}

// Static functions
impl DyUGraph {

    /// Returns an `Iterator` over all nodes that have not yet been deleted, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| {
                if adj.is_some() {
                    Some(i)
                } else {
                    None
                }
            })
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the amount of reserved nodes of `self`. Deleted or not.
    pub fn num_reserved(&self) -> usize {
        self.adj_list.len()
    }

    /// Checks if `node` exists and was not deleted.
    pub fn contains(&self, node: usize) -> bool {
        matches!(self.adj_list.get(node), Some(Some(_)))
    }

    /// Returns the neighborhood of `node`, or `None` if `node` was deleted.
    pub fn neighbors(&self, node: usize) -> Option<&FxHashSet<usize>> {
        self.adj_list.get(node).and_then(|adj| adj.as_ref())
    }

    /// Returns the degree of `node`, or `None` if `node` was deleted.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.neighbors(node).map(|neighbors| neighbors.len())
    }

    /// Returns the node with the highest degree. Among nodes of equal degree the one with the
    /// smallest identifier wins.
    pub fn max_degree_node(&self) -> Option<usize> {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i, adj)| adj.as_ref().map(|neighs| (i, neighs.len())))
            .max_by(|(a, deg_a), (b, deg_b)| deg_a.cmp(deg_b).then(b.cmp(a)))
            .map(|(node, _)| node)
    }

    /// Returns the highest degree of all remaining nodes, `0` for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adj_list
            .iter()
            .filter_map(|adj| adj.as_ref().map(|neighs| neighs.len()))
            .max()
            .unwrap_or(0)
    }

    /// Returns an iterator over all edges. Each edge `(src, trg)` is reported once, with `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter(|(_,adj)| adj.is_some())
            .flat_map(|(i,adj)| {
                adj.as_ref().expect("`adj` is some")
                    .iter()
                    .filter_map(|neigh| {
                    if i < *neigh {
                        Some((i, *neigh))
                    } else {
                        None
                    }
                }).collect::<Vec<(usize, usize)>>()
            })
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        if let Some(neighs) = self.neighbors(edge.0) {
            return neighs.contains(&edge.1)
        }
        false
    }

    /// Checks if `cover` touches every edge of `self`.
    pub fn is_vertex_cover(&self, cover: &FxHashSet<usize>) -> bool {
        self.edges().all(|(src, trg)| cover.contains(&src) || cover.contains(&trg))
    }
}

// Dynamic functions
impl DyUGraph {

    /// Adds `node` as an isolated node, growing the graph if needed.
    /// Returns `false` if `node` was already present.
    pub fn add_node(&mut self, node: usize) -> bool {
        if node >= self.adj_list.len() {
            self.adj_list.resize(node + 1, None);
        }
        if self.adj_list[node].is_some() {
            return false
        }
        self.adj_list[node] = Some(FxHashSet::default());
        true
    }

    /// Adds the edge `(src, trg)` if both nodes are present and distinct.
    /// Returns `true` if a new edge was inserted.
    pub fn add_edge(&mut self, src: usize, trg: usize) -> bool {
        if src == trg || !self.contains(src) || !self.contains(trg) {
            return false
        }
        let inserted = self.adj_list[src].as_mut().expect("`src` exists").insert(trg);
        if inserted {
            self.adj_list[trg].as_mut().expect("`trg` exists").insert(src);
            self.num_edges += 1;
        }
        inserted
    }

    /// Tries to delete `node`.
    /// Returns the old neighborhood of `node` or `None` if nothing was deleted.
    pub fn delete_node(&mut self, node: usize) -> Option<FxHashSet<usize>> {
        let opt_neighbors = self.adj_list.get_mut(node).and_then(|adj| adj.take());
        if let Some(neighborhood) = opt_neighbors.as_ref() {
            for neighbor in neighborhood.iter() {
                if let Some(ref mut nn) = self.adj_list[*neighbor] {
                    nn.remove(&node);
                }
            }
            self.num_edges -= neighborhood.len();
        }
        opt_neighbors
    }

    /// Reinserts `node` and an edge to each former neighbor given as `neighbors` that is still
    /// present.
    pub fn reinsert_node(&mut self, node: usize, neighbors: &FxHashSet<usize>) {
        self.add_node(node);
        for neigh in neighbors {
            self.add_edge(node, *neigh);
        }
    }
}

impl DyUGraph {

    /// Reads a graph given as adjacency lists.
    ///
    /// The first line holds `<n> <m> <weighted>`, line `i` of the following `n` lines lists the
    /// neighbors of node `i`. Identifiers in the input are 1-based, the returned graph uses
    /// `id - 1`. Symmetric listings of the same edge are merged, the number of distinct edges
    /// has to match `m`.
    pub fn read_adj<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut lines = input.lines();
        // <n> <m> <weighted>
        let (n, m) = {
            let line = lines.next()
                .ok_or_else(|| ImportError::InputMalformedError("missing header line".to_owned()))??;
            let mut s = line.split_whitespace();
            let n: usize = s.next()
                .ok_or_else(|| ImportError::InputMalformedError("header misses vertex count".to_owned()))?
                .parse()?;
            let m: usize = s.next()
                .ok_or_else(|| ImportError::InputMalformedError("header misses edge count".to_owned()))?
                .parse()?;
            // Weights are not used.
            let _weighted: usize = s.next()
                .ok_or_else(|| ImportError::InputMalformedError("header misses weight flag".to_owned()))?
                .parse()?;
            if s.next().is_some() {
                return Err(ImportError::InputMalformedError("header has too many fields".to_owned()));
            }
            (n, m)
        };
        let mut graph = DyUGraph::new(n);
        for src in 0..n {
            let line = lines.next()
                .ok_or_else(|| ImportError::InputMalformedError(
                        format!("expected {} adjacency lines, found {}", n, src)))??;
            for token in line.split_whitespace() {
                let trg: usize = token.parse()?;
                if trg == 0 || trg > n {
                    return Err(ImportError::InputMalformedError(
                            format!("neighbor {} of vertex {} is out of range", trg, src + 1)));
                }
                if trg - 1 == src {
                    return Err(ImportError::InputMalformedError(
                            format!("vertex {} lists itself as neighbor", src + 1)));
                }
                graph.add_edge(src, trg - 1);
            }
        }
        for line in lines {
            if !line?.trim().is_empty() {
                return Err(ImportError::InputMalformedError(
                        format!("more than {} adjacency lines", n)));
            }
        }
        if graph.num_edges() != m {
            return Err(ImportError::InputMalformedError(
                    format!("header announces {} edges, found {}", m, graph.num_edges())));
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SMALL: &str = "6 7 0\n2 3\n1 3 4\n1 2 5\n2 5 6\n3 4\n4\n";

    #[test]
    fn read_adj_test() {
        let graph = DyUGraph::read_adj(Cursor::new(SMALL));
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_edges(), 7);
        assert!(graph.edge_exists((1, 3)));
        assert!(graph.edge_exists((3, 1)));
        assert!(!graph.edge_exists((0, 5)));
        assert_eq!(graph.degree(5), Some(1));
    }

    #[test]
    fn read_adj_isolated_test() {
        let graph = DyUGraph::read_adj(Cursor::new("3 1 0\n2\n1\n\n")).unwrap();
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.degree(2), Some(0));
    }

    #[test]
    fn read_adj_malformed_test() {
        // too few lines
        assert!(matches!(DyUGraph::read_adj(Cursor::new("3 1 0\n2\n1\n")),
            Err(ImportError::InputMalformedError(_))));
        // edge count mismatch
        assert!(matches!(DyUGraph::read_adj(Cursor::new("2 2 0\n2\n1\n")),
            Err(ImportError::InputMalformedError(_))));
        // out of range
        assert!(matches!(DyUGraph::read_adj(Cursor::new("2 1 0\n3\n1\n")),
            Err(ImportError::InputMalformedError(_))));
        // self loop
        assert!(matches!(DyUGraph::read_adj(Cursor::new("2 1 0\n1 2\n1\n")),
            Err(ImportError::InputMalformedError(_))));
        // extra lines
        assert!(matches!(DyUGraph::read_adj(Cursor::new("2 1 0\n2\n1\n1\n")),
            Err(ImportError::InputMalformedError(_))));
        assert!(matches!(DyUGraph::read_adj(Cursor::new("2 1 0\n2\nx\n")),
            Err(ImportError::BadIntError(_))));
        assert!(matches!(DyUGraph::read_adj(Cursor::new("")),
            Err(ImportError::InputMalformedError(_))));
    }

    #[test]
    fn delete_reinsert_test() {
        let mut graph = DyUGraph::read_adj(Cursor::new(SMALL)).unwrap();
        let check = graph.clone();
        let neighbors = graph.delete_node(1);
        assert_eq!(neighbors, Some(vec![0, 2, 3].into_iter().collect()));
        assert_eq!(graph.num_edges(), 4);
        assert!(!graph.contains(1));
        assert_eq!(graph.delete_node(1), None);
        let neighbors_3 = graph.delete_node(3).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(neighbors_3, vec![4, 5].into_iter().collect());
        // 1 is missing, so the edge (1, 3) can not come back yet.
        graph.reinsert_node(3, &neighbors_3);
        assert_eq!(graph.num_edges(), 4);
        assert!(!graph.edge_exists((1, 3)));
        graph.reinsert_node(1, neighbors.as_ref().unwrap());
        assert_eq!(graph, check);
    }

    #[test]
    fn max_degree_tie_break_test() {
        // 4-cycle: all degrees are 2
        let mut graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(graph.max_degree_node(), Some(0));
        assert_eq!(graph.max_degree(), 2);
        graph.delete_node(0);
        assert_eq!(graph.max_degree_node(), Some(2));
        let star = DyUGraph::from_edges(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        assert_eq!(star.max_degree_node(), Some(0));
        assert_eq!(DyUGraph::new(0).max_degree_node(), None);
    }

    #[test]
    fn add_node_edge_test() {
        let mut graph = DyUGraph::new(2);
        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 0));
        assert!(!graph.add_edge(0, 0));
        assert!(!graph.add_edge(0, 4));
        assert!(graph.add_node(4));
        assert!(!graph.add_node(4));
        assert!(graph.add_edge(0, 4));
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_reserved(), 5);
        assert_eq!(graph.edges().count(), graph.num_edges());
    }

    #[test]
    fn vertex_cover_test() {
        let graph = DyUGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(graph.is_vertex_cover(&vec![0, 1].into_iter().collect()));
        assert!(!graph.is_vertex_cover(&vec![0].into_iter().collect()));
    }

    #[test]
    fn gnp_test() {
        let mut rng = StdRng::seed_from_u64(7);
        let full = DyUGraph::gnp(6, 1.0, &mut rng);
        assert_eq!(full.num_edges(), 15);
        let empty = DyUGraph::gnp(6, 0.0, &mut rng);
        assert_eq!(empty.num_edges(), 0);
        assert_eq!(empty.num_nodes(), 6);
    }
}
