use num_traits::Float;
use std::collections::{BTreeSet, VecDeque};
use crate::data_wrappers::Edge;

/// How non-terminal leaves are found while pruning. Both strategies converge to the same
/// edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneStrategy {
    /// Repeatedly scans every vertex, removing the non-terminal leaves it meets, until a full
    /// scan removes nothing.
    #[default]
    Rescan,
    /// Keeps a queue of the current non-terminal leaves and only revisits the neighbours of
    /// removed vertices.
    WorkQueue,
}

/// Degree bookkeeping over a forest while its leaves are stripped.
struct LeafPruner {
    adjacency: Vec<Vec<usize>>,
    degree: Vec<usize>,
    active: Vec<bool>,
    is_terminal: Vec<bool>,
}

impl LeafPruner {
    fn new<T: Float>(n_vertices: usize, edges: &[Edge<T>], terminals: &BTreeSet<usize>) -> Self {
        let mut adjacency = vec![Vec::new(); n_vertices];
        for edge in edges {
            adjacency[edge.u].push(edge.v);
            adjacency[edge.v].push(edge.u);
        }
        let degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();
        let active = degree.iter().map(|&d| d > 0).collect();

        let mut is_terminal = vec![false; n_vertices];
        for &terminal in terminals.range(..n_vertices) {
            is_terminal[terminal] = true;
        }

        LeafPruner { adjacency, degree, active, is_terminal }
    }

    fn is_removable(&self, vertex: usize) -> bool {
        self.active[vertex] && self.degree[vertex] == 1 && !self.is_terminal[vertex]
    }

    /// Deactivates `vertex` and returns the active neighbours whose degree dropped.
    fn remove(&mut self, vertex: usize) -> Vec<usize> {
        self.active[vertex] = false;
        self.degree[vertex] = 0;
        let mut touched = Vec::new();
        for &neighbour in &self.adjacency[vertex] {
            if self.active[neighbour] {
                self.degree[neighbour] -= 1;
                touched.push(neighbour);
            }
        }
        touched
    }

    fn prune_by_rescan(&mut self) {
        let mut removed = true;
        while removed {
            removed = false;
            for vertex in 0..self.active.len() {
                if self.is_removable(vertex) {
                    self.remove(vertex);
                    removed = true;
                }
            }
        }
    }

    fn prune_by_work_queue(&mut self) {
        let mut queue: VecDeque<usize> = (0..self.active.len())
            .filter(|&vertex| self.is_removable(vertex))
            .collect();

        while let Some(vertex) = queue.pop_front() {
            // May have lost its last neighbour since it was queued
            if !self.is_removable(vertex) {
                continue;
            }
            for neighbour in self.remove(vertex) {
                if self.is_removable(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
    }
}

/// Strips non-terminal leaves from a spanning forest until none remain.
///
/// A leaf is a vertex with exactly one remaining incident edge. Terminals are never removed,
/// whatever their degree. Vertices with no incident edge take no part. Terminal ids that are
/// not below `n_vertices` are ignored.
///
/// # Parameters
/// * `n_vertices` - the number of vertices. Every edge endpoint must be below it.
/// * `edges` - the forest to prune, usually the output of [`crate::kruskal_mst`].
/// * `terminals` - the vertices that must stay connected.
/// * `strategy` - how leaves are searched for. Does not affect the result.
///
/// # Returns
/// * The edges whose endpoints both survive, in their input order. The cost is not tracked
///   here; sum the weights of the returned edges.
///
/// # Panics
/// * If an edge endpoint is not below `n_vertices`.
///
/// # Examples
/// ```
///use std::collections::BTreeSet;
///use steiner_mst::{prune_steiner_leaves, Edge, PruneStrategy};
///
///let path = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)];
///let terminals = BTreeSet::from([0, 2]);
///let pruned = prune_steiner_leaves(4, &path, &terminals, PruneStrategy::Rescan);
///assert_eq!(pruned, path[..2]);
/// ```
pub fn prune_steiner_leaves<T: Float>(
    n_vertices: usize,
    edges: &[Edge<T>],
    terminals: &BTreeSet<usize>,
    strategy: PruneStrategy,
) -> Vec<Edge<T>> {
    let mut pruner = LeafPruner::new(n_vertices, edges, terminals);
    match strategy {
        PruneStrategy::Rescan => pruner.prune_by_rescan(),
        PruneStrategy::WorkQueue => pruner.prune_by_work_queue(),
    }
    edges.iter()
        .filter(|edge| pruner.active[edge.u] && pruner.active[edge.v])
        .copied()
        .collect()
}
