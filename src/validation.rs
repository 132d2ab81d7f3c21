use crate::{Graph, SteinerError};
use num_traits::Float;
use std::alloc::Layout;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphValidator<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T: Float> GraphValidator<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    pub(crate) fn validate_edges(&self) -> Result<(), SteinerError> {
        let n = self.graph.n_vertices();
        for (i, edge) in self.graph.edges().iter().enumerate() {
            if edge.u >= n || edge.v >= n {
                return Err(SteinerError::VertexOutOfRange(format!(
                    "{i}th edge ({}, {}) has an endpoint outside 0..{n}",
                    edge.u, edge.v
                )));
            }
            if !edge.weight.is_finite() {
                return Err(SteinerError::NonFiniteWeight(format!(
                    "{i}th edge ({}, {}) has a non-finite weight",
                    edge.u, edge.v
                )));
            }
        }
        Ok(())
    }

    /// Per-vertex tables are sized by the vertex count, the largest being one adjacency list
    /// per vertex.
    pub(crate) fn validate_vertex_count(&self) -> Result<(), SteinerError> {
        let n = self.graph.n_vertices();
        if Layout::array::<Vec<(usize, T)>>(n).is_err() {
            return Err(SteinerError::TooManyVertices(format!(
                "{n} vertices exceed the addressable memory"
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_source(&self, source: usize) -> Result<(), SteinerError> {
        let n = self.graph.n_vertices();
        if source >= n {
            return Err(SteinerError::VertexOutOfRange(format!(
                "source {source} is outside 0..{n}"
            )));
        }
        Ok(())
    }

    /// Terminals that do not name a vertex of the graph. These are tolerated and ignored.
    pub(crate) fn out_of_range_terminals(&self, terminals: &BTreeSet<usize>) -> Vec<usize> {
        terminals.range(self.graph.n_vertices()..).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_graph() {
        let graph = Graph::from_triples(3, &[(0, 1, 1.0), (1, 2, -2.0), (2, 2, 0.0)]);
        assert!(GraphValidator::new(&graph).validate_edges().is_ok());
    }

    #[test]
    fn endpoint_out_of_range() {
        let graph = Graph::from_triples(3, &[(0, 1, 1.0), (1, 3, 1.0)]);
        let result = GraphValidator::new(&graph).validate_edges();
        assert!(matches!(result, Err(SteinerError::VertexOutOfRange(..))));
    }

    #[test]
    fn non_finite_weight() {
        let graph = Graph::from_triples(2, &[(0, 1, f64::NAN)]);
        let result = GraphValidator::new(&graph).validate_edges();
        assert!(matches!(result, Err(SteinerError::NonFiniteWeight(..))));

        let graph = Graph::from_triples(2, &[(0, 1, f64::INFINITY)]);
        let result = GraphValidator::new(&graph).validate_edges();
        assert!(matches!(result, Err(SteinerError::NonFiniteWeight(..))));
    }

    #[test]
    fn vertex_count_must_fit_in_memory() {
        let graph: Graph<f64> = Graph::new(1_000, Vec::new());
        assert!(GraphValidator::new(&graph).validate_vertex_count().is_ok());

        let graph: Graph<f64> = Graph::new(usize::MAX, Vec::new());
        let result = GraphValidator::new(&graph).validate_vertex_count();
        assert!(matches!(result, Err(SteinerError::TooManyVertices(..))));
    }

    #[test]
    fn source_out_of_range() {
        let graph: Graph<f64> = Graph::new(0, Vec::new());
        let result = GraphValidator::new(&graph).validate_source(0);
        assert!(matches!(result, Err(SteinerError::VertexOutOfRange(..))));
    }

    #[test]
    fn out_of_range_terminals_are_reported() {
        let graph: Graph<f32> = Graph::new(3, Vec::new());
        let terminals = BTreeSet::from([0, 2, 3, 10]);
        let ignored = GraphValidator::new(&graph).out_of_range_terminals(&terminals);
        assert_eq!(ignored, vec![3, 10]);
    }
}
