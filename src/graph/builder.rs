//! Sentence graph builder
//!
//! Nodes are sentence indices; edges are undirected and weighted by a
//! pairwise similarity. FxHashMap adjacency keeps incremental updates O(1).

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Documents with at least this many sentences compute similarities in parallel
pub const PARALLEL_THRESHOLD: usize = 64;

/// A mutable undirected graph over a fixed number of nodes
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Adjacency per node: neighbor -> edge weight
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl GraphBuilder {
    /// Create a graph with `num_nodes` isolated nodes
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); num_nodes],
        }
    }

    /// Add `weight` to the edge between two nodes (in both directions)
    ///
    /// Self-loops, non-positive weights and unknown nodes are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return;
        }
        let n = self.adjacency.len() as u32;
        if from >= n || to >= n {
            return;
        }
        *self.adjacency[from as usize].entry(to).or_insert(0.0) += weight;
        *self.adjacency[to as usize].entry(from).or_insert(0.0) += weight;
    }

    /// Build a graph by evaluating `similarity` on every unordered pair
    ///
    /// Pairs scoring zero or less get no edge. Large inputs are evaluated
    /// with rayon; the resulting graph is identical either way.
    pub fn from_similarity<F>(num_nodes: usize, similarity: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let row = |i: usize| -> Vec<(u32, u32, f64)> {
            ((i + 1)..num_nodes)
                .filter_map(|j| {
                    let weight = similarity(i, j);
                    (weight > 0.0).then_some((i as u32, j as u32, weight))
                })
                .collect()
        };

        let rows: Vec<Vec<(u32, u32, f64)>> = if num_nodes >= PARALLEL_THRESHOLD {
            (0..num_nodes).into_par_iter().map(row).collect()
        } else {
            (0..num_nodes).map(row).collect()
        };

        let mut builder = Self::new(num_nodes);
        for (a, b, weight) in rows.into_iter().flatten() {
            builder.increment_edge(a, b, weight);
        }
        builder
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(FxHashMap::len).sum::<usize>() / 2
    }

    /// Edges of a node
    pub fn edges(&self, node: u32) -> Option<&FxHashMap<u32, f64>> {
        self.adjacency.get(node as usize)
    }

    /// Iterate over `(node, edges)` pairs
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &FxHashMap<u32, f64>)> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, edges)| (i as u32, edges))
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(0, 1, 0.5);

        assert_eq!(builder.edges(0).unwrap().get(&1), Some(&1.5));
        assert_eq!(builder.edges(1).unwrap().get(&0), Some(&1.5));
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_ignored_edges() {
        let mut builder = GraphBuilder::new(2);
        builder.increment_edge(0, 0, 1.0);
        builder.increment_edge(0, 1, 0.0);
        builder.increment_edge(0, 7, 1.0);

        assert_eq!(builder.edge_count(), 0);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_from_similarity() {
        // 0-1 and 1-2 similar, 0-2 not
        let builder = GraphBuilder::from_similarity(3, |i, j| if j - i == 1 { 0.4 } else { 0.0 });

        assert_eq!(builder.edge_count(), 2);
        assert!(builder.edges(0).unwrap().contains_key(&1));
        assert!(!builder.edges(0).unwrap().contains_key(&2));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let n = PARALLEL_THRESHOLD + 10;
        let sim = |i: usize, j: usize| if (i + j) % 3 == 0 { 1.0 / (1 + j - i) as f64 } else { 0.0 };

        let parallel = GraphBuilder::from_similarity(n, sim);

        let mut sequential = GraphBuilder::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                sequential.increment_edge(i as u32, j as u32, sim(i, j));
            }
        }

        for node in 0..n as u32 {
            assert_eq!(parallel.edges(node), sequential.edges(node));
        }
    }
}
