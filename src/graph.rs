use num_traits::Float;
use crate::data_wrappers::Edge;
use crate::validation::GraphValidator;
use crate::{dijkstra, SteinerError};

/// Adjacency view of an undirected graph: `adj[u]` holds `(neighbour, weight)` pairs. Every
/// edge is listed under both of its endpoints, a self-loop twice under its single endpoint.
pub type AdjacencyList<T> = Vec<Vec<(usize, T)>>;

/// An undirected weighted graph over the vertices `0..n_vertices`, stored as a flat edge list.
///
/// Construction does not check that the endpoints lie in range or that the weights are
/// finite. Use [`crate::SteinerTree`] (which validates by default) or
/// [`Graph::validate`] when the edges come from an untrusted source.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    n_vertices: usize,
    edges: Vec<Edge<T>>,
}

impl<T: Float> Graph<T> {

    /// Creates a graph from a vertex count and an edge list.
    ///
    /// # Parameters
    /// * `n_vertices` - the number of vertices. Vertices are identified by `0..n_vertices`.
    /// * `edges` - the undirected edges. Parallel edges and self-loops are allowed.
    ///
    /// # Returns
    /// * The graph.
    ///
    /// # Examples
    /// ```
    ///use steiner_mst::{Edge, Graph};
    ///
    ///let graph = Graph::new(3, vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.5)]);
    ///assert_eq!(graph.n_vertices(), 3);
    ///assert_eq!(graph.edges().len(), 2);
    /// ```
    pub fn new(n_vertices: usize, edges: Vec<Edge<T>>) -> Self {
        Graph { n_vertices, edges }
    }

    /// Creates a graph from `(u, v, weight)` triples.
    pub fn from_triples(n_vertices: usize, triples: &[(usize, usize, T)]) -> Self {
        let edges = triples.iter()
            .map(|&(u, v, weight)| Edge::new(u, v, weight))
            .collect();
        Graph::new(n_vertices, edges)
    }

    /// Rebuilds the edge-list view from an adjacency view. The inverse of
    /// [`Graph::adjacency`], up to the order of the edges.
    ///
    /// # Parameters
    /// * `adjacency` - an adjacency list in which every edge appears under both endpoints.
    ///
    /// # Returns
    /// * The graph, with one edge per undirected edge of the adjacency view.
    ///
    /// # Examples
    /// ```
    ///use steiner_mst::{Edge, Graph};
    ///
    ///let graph = Graph::new(3, vec![Edge::new(0, 1, 1.0), Edge::new(2, 1, 2.5)]);
    ///let rebuilt = Graph::from_adjacency(&graph.adjacency());
    ///assert_eq!(rebuilt.edges().len(), 2);
    /// ```
    pub fn from_adjacency(adjacency: &[Vec<(usize, T)>]) -> Self {
        let mut edges = Vec::new();
        for (u, neighbours) in adjacency.iter().enumerate() {
            // A self-loop is listed twice under its own vertex
            let mut skip_next_self_loop = false;
            for &(v, weight) in neighbours {
                if v > u {
                    edges.push(Edge::new(u, v, weight));
                } else if v == u {
                    if !skip_next_self_loop {
                        edges.push(Edge::new(u, v, weight));
                    }
                    skip_next_self_loop = !skip_next_self_loop;
                }
            }
        }
        Graph::new(adjacency.len(), edges)
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Checks that every edge endpoint lies in `0..n_vertices` and every weight is finite.
    ///
    /// # Returns
    /// * A result that is an error naming the first offending edge, if any.
    pub fn validate(&self) -> Result<(), SteinerError> {
        GraphValidator::new(self).validate_edges()
    }

    /// Shortest path distances from `source`, after checking the edges and the source.
    /// Weights must still be non-negative; that is not checked.
    ///
    /// # Returns
    /// * A result that, if successful, contains a distance per vertex, infinite for the
    ///   unreachable ones. An error is returned if the graph or the source is invalid.
    ///
    /// # Examples
    /// ```
    ///use steiner_mst::Graph;
    ///
    ///let graph = Graph::from_triples(3, &[(0, 1, 2.0), (1, 2, 0.5)]);
    ///assert_eq!(graph.distances_from(2).unwrap(), vec![2.5, 0.5, 0.0]);
    ///assert!(graph.distances_from(3).is_err());
    /// ```
    pub fn distances_from(&self, source: usize) -> Result<Vec<T>, SteinerError> {
        let validator = GraphValidator::new(self);
        validator.validate_edges()?;
        validator.validate_source(source)?;
        Ok(dijkstra(&self.adjacency(), source))
    }

    /// Builds the adjacency view of the graph. Every edge is listed under both endpoints.
    ///
    /// # Panics
    /// * If an edge endpoint is not below the vertex count.
    pub fn adjacency(&self) -> AdjacencyList<T> {
        let mut adjacency = vec![Vec::new(); self.n_vertices];
        for edge in &self.edges {
            adjacency[edge.u].push((edge.v, edge.weight));
            adjacency[edge.v].push((edge.u, edge.weight));
        }
        adjacency
    }
}
