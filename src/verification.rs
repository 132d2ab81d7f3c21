use num_traits::Float;
use std::collections::{BTreeSet, HashMap};
use crate::data_wrappers::{total_weight, Edge};
use crate::union_find::UnionFind;
use crate::Graph;

/// The outcome of checking a candidate Steiner tree against its instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification<T> {
    /// Whether no violation was found.
    pub feasible: bool,
    /// Human readable descriptions of every problem found.
    pub violations: Vec<String>,
    /// The summed weight of the candidate's edges.
    pub cost: T,
}

/// Checks that `edges` form a Steiner tree of `graph` for the given terminals.
///
/// The candidate is infeasible if an edge endpoint is out of range, an edge (with that
/// weight) is not in the graph, the edges contain a cycle, or, when more than one terminal
/// is required, a terminal is untouched by the edges or the terminals are not all in one
/// component. A single terminal needs no edges.
///
/// # Parameters
/// * `graph` - the instance the candidate was computed from.
/// * `terminals` - the vertices that must be connected.
/// * `edges` - the candidate tree.
///
/// # Returns
/// * The verification outcome, with the recomputed cost.
///
/// # Examples
/// ```
///use std::collections::BTreeSet;
///use steiner_mst::{verify_solution, Edge, Graph};
///
///let graph = Graph::from_triples(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
///let terminals = BTreeSet::from([0, 2]);
///
///let tree = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)];
///let verification = verify_solution(&graph, &terminals, &tree);
///assert!(verification.feasible);
///assert_eq!(verification.cost, 3.0);
///
///let broken = vec![Edge::new(0, 1, 1.0)];
///assert!(!verify_solution(&graph, &terminals, &broken).feasible);
/// ```
pub fn verify_solution<T: Float>(
    graph: &Graph<T>,
    terminals: &BTreeSet<usize>,
    edges: &[Edge<T>],
) -> Verification<T> {
    let n = graph.n_vertices();
    let mut violations = Vec::new();

    let in_range: Vec<&Edge<T>> = edges.iter()
        .filter(|edge| {
            let ok = edge.u < n && edge.v < n;
            if !ok {
                violations.push(format!("Edge ({}, {}) is outside 0..{n}", edge.u, edge.v));
            }
            ok
        })
        .collect();

    violations.extend(check_edges_in_graph(graph, &in_range));

    let mut union_find = UnionFind::new(n);
    let mut touched = vec![false; n];
    for edge in &in_range {
        touched[edge.u] = true;
        touched[edge.v] = true;
        if !union_find.unite(edge.u, edge.v) {
            violations.push(format!("Edge ({}, {}) closes a cycle", edge.u, edge.v));
        }
    }

    let required: Vec<usize> = terminals.iter().copied().filter(|&t| t < n).collect();
    let out_of_range = terminals.len() - required.len();
    if out_of_range > 0 {
        violations.push(format!("{out_of_range} terminal(s) are outside 0..{n}"));
    }

    if required.len() > 1 {
        let missing: Vec<usize> = required.iter().copied().filter(|&t| !touched[t]).collect();
        if !missing.is_empty() {
            violations.push(format!("Terminals missing from the tree: {missing:?}"));
        }
        let root = union_find.find(required[0]);
        let disconnected: Vec<usize> = required.iter()
            .copied()
            .filter(|&t| touched[t] && union_find.find(t) != root)
            .collect();
        if !disconnected.is_empty() {
            violations.push(format!(
                "Terminals not connected to terminal {}: {disconnected:?}", required[0]
            ));
        }
    }

    Verification {
        feasible: violations.is_empty(),
        violations,
        cost: total_weight(edges),
    }
}

fn check_edges_in_graph<T: Float>(graph: &Graph<T>, edges: &[&Edge<T>]) -> Vec<String> {
    // Multiset of graph edges, so a parallel pair in the graph can back two candidate edges
    let mut available: HashMap<((usize, usize), u64), usize> = HashMap::new();
    for edge in graph.edges() {
        *available.entry(edge_key(edge)).or_insert(0) += 1;
    }

    let mut violations = Vec::new();
    for edge in edges {
        match available.get_mut(&edge_key(edge)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => violations.push(format!(
                "Edge ({}, {}) with that weight is not in the graph", edge.u, edge.v
            )),
        }
    }
    violations
}

fn edge_key<T: Float>(edge: &Edge<T>) -> ((usize, usize), u64) {
    let weight = edge.weight.to_f64().unwrap_or(f64::NAN);
    (edge.normalised(), weight.to_bits())
}
