use num_traits::Float;
use std::collections::BTreeSet;
use crate::Graph;

/// An undirected, weighted edge. `(u, v)` and `(v, u)` describe the same edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub u: usize,
    pub v: usize,
    pub weight: T,
}

impl<T: Float> Edge<T> {
    pub fn new(u: usize, v: usize, weight: T) -> Self {
        Edge { u, v, weight }
    }

    /// The endpoints with the smaller vertex id first.
    pub fn normalised(&self) -> (usize, usize) {
        if self.u <= self.v { (self.u, self.v) } else { (self.v, self.u) }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Sum of edge weights.
pub(crate) fn total_weight<T: Float>(edges: &[Edge<T>]) -> T {
    edges.iter()
        .map(|edge| edge.weight)
        .fold(T::zero(), std::ops::Add::add)
}

/// A minimum spanning forest and its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<T> {
    pub edges: Vec<Edge<T>>,
    pub total_cost: T,
}

/// The outcome of the MST heuristic: the pruned tree, its cost, and the cost of the
/// spanning tree it was pruned from.
#[derive(Debug, Clone, PartialEq)]
pub struct SteinerSolution<T> {
    pub edges: Vec<Edge<T>>,
    pub cost: T,
    pub mst_cost: T,
}

/// A Steiner tree problem: a graph and the terminals to connect.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<T> {
    pub graph: Graph<T>,
    pub terminals: BTreeSet<usize>,
}
