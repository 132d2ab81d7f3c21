use num_traits::Float;
use std::cmp::Ordering;
use crate::data_wrappers::{Edge, MstResult};
use crate::union_find::UnionFind;

/// Builds a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are stably sorted by ascending weight, so among equal-weight edges the input order
/// decides which one is taken. A disconnected graph yields one tree per connected component.
/// Self-loops are never selected.
///
/// # Parameters
/// * `n_vertices` - the number of vertices. Every edge endpoint must be below it.
/// * `edges` - the undirected edges of the graph.
///
/// # Returns
/// * The accepted edges, in ascending weight order, and their summed weight.
///
/// # Panics
/// * If an edge endpoint is not below `n_vertices`.
///
/// # Examples
/// ```
///use steiner_mst::{kruskal_mst, Edge};
///
///let edges = vec![
///    Edge::new(0, 1, 4.0),
///    Edge::new(0, 2, 2.0),
///    Edge::new(0, 3, 3.0),
///    Edge::new(1, 2, 6.0),
///    Edge::new(2, 3, 1.0),
///];
///let mst = kruskal_mst(4, &edges);
///assert_eq!(mst.edges.len(), 3);
///assert_eq!(mst.total_cost, 7.0);
/// ```
pub fn kruskal_mst<T: Float>(n_vertices: usize, edges: &[Edge<T>]) -> MstResult<T> {
    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut union_find = UnionFind::new(n_vertices);
    let mut total_cost = T::zero();
    let mut accepted = Vec::with_capacity(n_vertices.saturating_sub(1));

    for edge in sorted {
        if union_find.unite(edge.u, edge.v) {
            total_cost = total_cost + edge.weight;
            accepted.push(edge);
        }
    }

    MstResult { edges: accepted, total_cost }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(triples: &[(usize, usize, f64)]) -> Vec<Edge<f64>> {
        triples.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect()
    }

    #[test]
    fn spanning_tree() {
        let input = edges(&[
            (0, 1, 4.0),
            (0, 2, 2.0),
            (0, 3, 3.0),
            (1, 2, 6.0),
            (1, 3, 8.0),
            (2, 3, 1.0),
            (1, 1, 0.0),
        ]);
        let mst = kruskal_mst(4, &input);
        assert_eq!(mst.edges, edges(&[(2, 3, 1.0), (0, 2, 2.0), (0, 1, 4.0)]));
        assert_eq!(mst.total_cost, 7.0);
    }

    #[test]
    fn self_loops_never_selected() {
        let input = edges(&[(0, 0, -5.0), (1, 1, 0.0), (0, 1, 2.0)]);
        let mst = kruskal_mst(2, &input);
        assert_eq!(mst.edges, edges(&[(0, 1, 2.0)]));
        assert_eq!(mst.total_cost, 2.0);
    }

    #[test]
    fn parallel_edges_keep_cheapest() {
        let input = edges(&[(0, 1, 5.0), (1, 0, 2.0), (0, 1, 3.0)]);
        let mst = kruskal_mst(2, &input);
        assert_eq!(mst.edges, edges(&[(1, 0, 2.0)]));
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let input = edges(&[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 2.0), (0, 2, 3.0)]);
        let mst = kruskal_mst(5, &input);
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.total_cost, 4.0);
    }

    #[test]
    fn equal_weights_follow_input_order() {
        let input = edges(&[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        let mst = kruskal_mst(3, &input);
        assert_eq!(mst.edges, edges(&[(0, 1, 1.0), (1, 2, 1.0)]));
    }

    #[test]
    fn empty_inputs() {
        let mst = kruskal_mst::<f64>(0, &[]);
        assert!(mst.edges.is_empty());
        assert_eq!(mst.total_cost, 0.0);

        let mst = kruskal_mst::<f32>(3, &[]);
        assert!(mst.edges.is_empty());
    }
}
