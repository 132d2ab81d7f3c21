//! Approximate Steiner trees in Rust using the minimum spanning tree ("MST") heuristic.
//! Generic over floating point edge weights.
//!
//! Given a weighted undirected graph and a set of "terminal" vertices that must stay
//! connected, the Steiner tree problem asks for the cheapest tree that spans all terminals,
//! possibly passing through other vertices. The problem is NP-hard. The MST heuristic gives
//! a cheap approximation:
//!  1. Build a minimum spanning tree of the whole graph with Kruskal's algorithm, using a
//!     disjoint-set forest (union by rank, path compression) to reject cycle-closing edges;
//!  2. Repeatedly remove every leaf that is not a terminal, until no such leaf is left. What
//!     remains is a subtree of the MST that still connects every terminal.
//!
//! If the graph is disconnected, the MST is a spanning forest and the result is pruned per
//! component. Terminals in different components cannot be connected and are not reported
//! as an error, but [`verify_solution`] will flag them.
//!
//! Dijkstra's algorithm is provided alongside as an independent primitive over the same
//! adjacency representation, with single and multi-source variants.
//!
//! # Examples
//! ```
//!use std::collections::BTreeSet;
//!use steiner_mst::{Graph, SteinerTree};
//!
//!let graph = Graph::from_triples(5, &[
//!    (0, 1, 1.0),
//!    (1, 2, 1.0),
//!    (2, 3, 1.0),
//!    (3, 4, 1.0),
//!    (0, 4, 10.0),
//!    (1, 3, 5.0),
//!]);
//!let terminals = BTreeSet::from([0, 4]);
//!let solver = SteinerTree::default_params(&graph, &terminals);
//!let solution = solver.solve().unwrap();
//!assert_eq!(solution.cost, 4.0);
//!assert_eq!(solution.edges.len(), 4);
//! ```
//!
//! # References
//! * [Kou, L.; Markowsky, G.; Berman, L. A fast algorithm for Steiner trees.](https://link.springer.com/article/10.1007/BF00288961)
//! * [Steiner tree problem](https://en.wikipedia.org/wiki/Steiner_tree_problem)

pub use crate::data_wrappers::{Edge, Instance, MstResult, SteinerSolution};
pub use crate::dijkstra::{dijkstra, shortest_path_tree, ShortestPaths};
pub use crate::error::SteinerError;
pub use crate::graph::{AdjacencyList, Graph};
pub use crate::kruskal::kruskal_mst;
pub use crate::params::{ParamBuilder, SteinerParams};
pub use crate::pruning::{prune_steiner_leaves, PruneStrategy};
pub use crate::steiner::SteinerTree;
pub use crate::text_format::{format_weight, parse_instance, write_solution};
pub use crate::union_find::UnionFind;
pub use crate::verification::{verify_solution, Verification};

mod data_wrappers;
mod dijkstra;
mod error;
mod graph;
mod kruskal;
mod params;
mod pruning;
mod steiner;
mod text_format;
mod union_find;
mod validation;
mod verification;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn path_graph() -> Graph<f64> {
        Graph::from_triples(5, &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (0, 4, 10.0),
            (1, 3, 5.0),
        ])
    }

    #[test]
    fn solve() {
        let graph = path_graph();
        let terminals = BTreeSet::from([0, 4]);
        let solution = SteinerTree::default_params(&graph, &terminals).solve().unwrap();
        assert_eq!(solution.edges, graph.edges()[..4]);
        assert_eq!(solution.cost, 4.0);
        assert_eq!(solution.mst_cost, 4.0);
    }

    #[test]
    fn solve_with_params() {
        let graph = path_graph();
        let terminals = BTreeSet::from([1, 3]);
        let params = SteinerParams::builder()
            .prune_strategy(PruneStrategy::WorkQueue)
            .verify_output(true)
            .build();
        let solution = SteinerTree::new(&graph, &terminals, params).solve().unwrap();
        assert_eq!(solution.edges, graph.edges()[1..3]);
        assert_eq!(solution.cost, 2.0);
    }

    #[test]
    fn single_terminal() {
        let graph = path_graph();
        let terminals = BTreeSet::from([0]);
        let solution = SteinerTree::default_params(&graph, &terminals).solve().unwrap();
        assert!(solution.edges.is_empty());
        assert_eq!(solution.cost, 0.0);
    }

    #[test]
    fn out_of_range_edge() {
        let graph = Graph::from_triples(2, &[(0, 2, 1.0)]);
        let terminals = BTreeSet::from([0]);
        let result = SteinerTree::default_params(&graph, &terminals).solve();
        assert!(matches!(result, Err(SteinerError::VertexOutOfRange(..))));
    }

    #[test]
    fn non_finite_weight() {
        let graph = Graph::from_triples(2, &[(0, 1, f32::NAN)]);
        let terminals = BTreeSet::from([0, 1]);
        let result = SteinerTree::default_params(&graph, &terminals).solve();
        assert!(matches!(result, Err(SteinerError::NonFiniteWeight(..))));
    }

    #[test]
    fn out_of_range_terminals_are_ignored() {
        let graph = path_graph();
        let terminals = BTreeSet::from([0, 2, 17]);
        let solution = SteinerTree::default_params(&graph, &terminals).solve().unwrap();
        assert_eq!(solution.cost, 2.0);
    }

    #[test]
    fn unallocatable_vertex_count() {
        let graph: Graph<f64> = Graph::new(usize::MAX, Vec::new());
        let terminals = BTreeSet::from([0]);
        let params = SteinerParams::builder().validate_input(false).build();
        let result = SteinerTree::new(&graph, &terminals, params).solve();
        assert!(matches!(result, Err(SteinerError::TooManyVertices(..))));
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<f64> = Graph::new(0, Vec::new());
        let terminals = BTreeSet::new();
        let solution = SteinerTree::default_params(&graph, &terminals).solve().unwrap();
        assert!(solution.edges.is_empty());
        assert_eq!(solution.mst_cost, 0.0);
    }
}
