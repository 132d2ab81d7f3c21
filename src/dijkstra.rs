use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A tentative distance and the vertex it was reached at. Ordered so that `BinaryHeap`, a
/// max-heap, pops the smallest distance first.
#[derive(Clone, Copy)]
struct HeapEntry<T> {
    distance: T,
    vertex: usize,
}

impl<T: Float> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Float> Eq for HeapEntry<T> {}

impl<T: Float> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Distances from the nearest source and the predecessor of each vertex on a shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<T> {
    /// `distances[v]` is the length of a shortest path to `v`, infinite if unreachable.
    pub distances: Vec<T>,
    /// `predecessors[v]` is the vertex before `v` on that path. `None` for the sources and
    /// for unreachable vertices.
    pub predecessors: Vec<Option<usize>>,
}

impl<T: Float> ShortestPaths<T> {

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).is_some_and(|distance| distance.is_finite())
    }

    /// Reconstructs the path ending at `target`, starting from whichever source it is
    /// closest to.
    ///
    /// # Returns
    /// * The vertices of the path, source first and `target` last, or `None` if `target`
    ///   is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes single-source shortest path distances with Dijkstra's algorithm.
///
/// Edge weights must be non-negative. This is not checked; with negative weights the
/// returned distances are meaningless.
///
/// # Parameters
/// * `adjacency` - the graph, as `(neighbour, weight)` lists indexed by vertex.
/// * `source` - the vertex distances are measured from.
///
/// # Returns
/// * A distance per vertex. Unreachable vertices get `T::infinity()`, the source gets zero.
///
/// # Panics
/// * If `source` or any listed neighbour is not a valid index into `adjacency`.
///
/// # Examples
/// ```
///use steiner_mst::{dijkstra, Graph};
///
///let graph: Graph<f64> = Graph::from_triples(4, &[(0, 1, 3.0), (1, 2, 7.0), (0, 2, 12.0)]);
///let distances = dijkstra(&graph.adjacency(), 0);
///assert_eq!(distances[..3], [0.0, 3.0, 10.0]);
///assert!(distances[3].is_infinite());
/// ```
pub fn dijkstra<T: Float>(adjacency: &[Vec<(usize, T)>], source: usize) -> Vec<T> {
    shortest_path_tree(adjacency, &[source]).distances
}

/// Runs Dijkstra's algorithm from several sources at once, every source starting at
/// distance zero, and records the shortest path tree.
///
/// Edge weights must be non-negative. This is not checked.
///
/// # Parameters
/// * `adjacency` - the graph, as `(neighbour, weight)` lists indexed by vertex.
/// * `sources` - the vertices distances are measured from. May be empty, in which case
///   every vertex is unreachable.
///
/// # Returns
/// * The distances to, and the predecessors of, every vertex.
///
/// # Panics
/// * If a source or any listed neighbour is not a valid index into `adjacency`.
///
/// # Examples
/// ```
///use steiner_mst::{shortest_path_tree, Graph};
///
///let graph = Graph::from_triples(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
///let paths = shortest_path_tree(&graph.adjacency(), &[0, 4]);
///assert_eq!(paths.distances, vec![0.0, 1.0, 2.0, 1.0, 0.0]);
///assert_eq!(paths.path_to(3), Some(vec![4, 3]));
/// ```
pub fn shortest_path_tree<T: Float>(adjacency: &[Vec<(usize, T)>], sources: &[usize])
    -> ShortestPaths<T> {
    let n = adjacency.len();
    let mut distances = vec![T::infinity(); n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    for &source in sources {
        distances[source] = T::zero();
        heap.push(HeapEntry { distance: T::zero(), vertex: source });
    }

    while let Some(HeapEntry { distance, vertex }) = heap.pop() {
        // Stale entry, the vertex was settled through a shorter path
        if distance > distances[vertex] {
            continue;
        }
        for &(neighbour, weight) in &adjacency[vertex] {
            let candidate = distance + weight;
            if candidate < distances[neighbour] {
                distances[neighbour] = candidate;
                predecessors[neighbour] = Some(vertex);
                heap.push(HeapEntry { distance: candidate, vertex: neighbour });
            }
        }
    }

    ShortestPaths { distances, predecessors }
}

#[cfg(test)]
mod tests {
    use super::*;

    ///  0--3--1--7--2
    ///  |     |     |
    ///  2     5     2
    ///  |     |     |
    ///  3--4--4--9--5
    fn sample_graph() -> Vec<Vec<(usize, i32)>> {
        let edges = [(0, 1, 3), (0, 3, 2), (1, 2, 7), (1, 4, 5), (2, 5, 2), (3, 4, 4), (4, 5, 9)];
        let mut adjacency = vec![Vec::new(); 6];
        for (u, v, w) in edges {
            adjacency[u].push((v, w));
            adjacency[v].push((u, w));
        }
        adjacency
    }

    fn sample_graph_f64() -> Vec<Vec<(usize, f64)>> {
        sample_graph().into_iter()
            .map(|neighbours| neighbours.into_iter().map(|(v, w)| (v, w as f64)).collect())
            .collect()
    }

    #[test]
    fn distances() {
        let distances = dijkstra(&sample_graph_f64(), 0);
        assert_eq!(distances, vec![0.0, 3.0, 10.0, 2.0, 6.0, 12.0]);
    }

    #[test]
    fn tree() {
        let paths = shortest_path_tree(&sample_graph_f64(), &[0]);
        assert_eq!(paths.predecessors, vec![None, Some(0), Some(1), Some(0), Some(3), Some(2)]);
        assert_eq!(paths.path_to(5), Some(vec![0, 1, 2, 5]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
    }

    #[test]
    fn unreachable_vertices_are_infinite() {
        let adjacency: Vec<Vec<(usize, f32)>> = vec![vec![(1, 1.0)], vec![(0, 1.0)], vec![]];
        let paths = shortest_path_tree(&adjacency, &[0]);
        assert!(paths.distances[2].is_infinite());
        assert!(!paths.is_reachable(2));
        assert_eq!(paths.path_to(2), None);
        assert_eq!(paths.path_to(7), None);
    }

    #[test]
    fn multiple_sources() {
        let paths = shortest_path_tree(&sample_graph_f64(), &[0, 5]);
        assert_eq!(paths.distances, vec![0.0, 3.0, 2.0, 2.0, 6.0, 0.0]);
        assert_eq!(paths.path_to(2), Some(vec![5, 2]));
    }

    #[test]
    fn no_sources() {
        let paths = shortest_path_tree(&sample_graph_f64(), &[]);
        assert!(paths.distances.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // Vertex 2 is first reached through the direct edge, then improved via 1
        let adjacency = vec![
            vec![(1, 1.0), (2, 10.0)],
            vec![(0, 1.0), (2, 1.0)],
            vec![(0, 10.0), (1, 1.0), (3, 1.0)],
            vec![(2, 1.0)],
        ];
        let paths = shortest_path_tree(&adjacency, &[0]);
        assert_eq!(paths.distances, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(paths.predecessors[2], Some(1));
    }
}
