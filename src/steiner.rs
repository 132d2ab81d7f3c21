use log::{debug, warn};
use num_traits::Float;
use std::collections::BTreeSet;
use crate::data_wrappers::{total_weight, Edge, SteinerSolution};
use crate::validation::GraphValidator;
use crate::{format_weight, kruskal_mst, prune_steiner_leaves, verify_solution, Graph, SteinerError, SteinerParams};

/// The MST heuristic for the Steiner tree problem. Generic over floating point weights.
#[derive(Debug, Clone, PartialEq)]
pub struct SteinerTree<'a, T> {
    graph: &'a Graph<T>,
    terminals: &'a BTreeSet<usize>,
    params: SteinerParams,
}

impl<'a, T: Float> SteinerTree<'a, T> {
    /// Creates an instance of the solver using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `graph` - the weighted graph to find a tree in.
    /// * `terminals` - the vertices the tree must connect.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The solver instance.
    ///
    /// # Examples
    /// ```
    ///use std::collections::BTreeSet;
    ///use steiner_mst::{Graph, PruneStrategy, SteinerParams, SteinerTree};
    ///
    ///let graph = Graph::from_triples(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    ///let terminals = BTreeSet::from([0, 2]);
    ///let params = SteinerParams::builder()
    ///    .prune_strategy(PruneStrategy::WorkQueue)
    ///    .verify_output(true)
    ///    .build();
    ///let solver = SteinerTree::new(&graph, &terminals, params);
    /// ```
    pub fn new(graph: &'a Graph<T>, terminals: &'a BTreeSet<usize>, params: SteinerParams) -> Self {
        SteinerTree { graph, terminals, params }
    }

    /// Creates an instance of the solver using the default parameters.
    ///
    /// # Parameters
    /// * `graph` - the weighted graph to find a tree in.
    /// * `terminals` - the vertices the tree must connect.
    ///
    /// # Returns
    /// * The solver instance.
    pub fn default_params(graph: &'a Graph<T>, terminals: &'a BTreeSet<usize>) -> Self {
        SteinerTree::new(graph, terminals, SteinerParams::default())
    }

    /// Computes an approximate Steiner tree: the minimum spanning forest of the graph with
    /// every non-terminal leaf stripped, repeatedly, until none remain.
    ///
    /// If the graph is disconnected the result is a forest, and terminals in different
    /// components stay disconnected.
    ///
    /// # Returns
    /// * A result that, if successful, contains the pruned edges in spanning tree order, their
    ///   summed weight, and the weight of the spanning forest. An error is returned if the
    ///   vertex count is too large to allocate per-vertex tables for, or if input validation
    ///   is enabled and an edge has an endpoint out of range or a non-finite weight.
    ///
    /// # Examples
    /// ```
    ///use std::collections::BTreeSet;
    ///use steiner_mst::{Graph, SteinerTree};
    ///
    ///let graph = Graph::from_triples(5, &[
    ///    (0, 1, 1.0),
    ///    (1, 2, 1.0),
    ///    (2, 3, 1.0),
    ///    (3, 4, 1.0),
    ///    (0, 4, 10.0),
    ///    (1, 3, 5.0),
    ///]);
    ///let terminals = BTreeSet::from([0, 2]);
    ///let solution = SteinerTree::default_params(&graph, &terminals).solve().unwrap();
    ///assert_eq!(solution.edges.len(), 2);
    ///assert_eq!(solution.cost, 2.0);
    ///assert_eq!(solution.mst_cost, 4.0);
    /// ```
    pub fn solve(&self) -> Result<SteinerSolution<T>, SteinerError> {
        let validator = GraphValidator::new(self.graph);
        validator.validate_vertex_count()?;
        if self.params.validate_input {
            validator.validate_edges()?;
        }
        let ignored = validator.out_of_range_terminals(self.terminals);
        if !ignored.is_empty() {
            warn!("Ignoring terminals outside 0..{}: {ignored:?}", self.graph.n_vertices());
        }

        let n_vertices = self.graph.n_vertices();
        let mst = kruskal_mst(n_vertices, self.graph.edges());
        debug!(
            "Spanning forest has {} of {} edges, cost {}",
            mst.edges.len(), self.graph.edges().len(), format_weight(mst.total_cost)
        );

        let edges = prune_steiner_leaves(
            n_vertices, &mst.edges, self.terminals, self.params.prune_strategy);
        let cost = total_weight(&edges);
        debug!(
            "Pruning with {:?} kept {} edges, cost {}",
            self.params.prune_strategy, edges.len(), format_weight(cost)
        );

        if self.params.verify_output {
            self.log_violations(&edges);
        }

        Ok(SteinerSolution { edges, cost, mst_cost: mst.total_cost })
    }

    fn log_violations(&self, edges: &[Edge<T>]) {
        let verification = verify_solution(self.graph, self.terminals, edges);
        if verification.feasible {
            debug!("Pruned tree verified");
        }
        for violation in &verification.violations {
            warn!("{violation}");
        }
    }
}
